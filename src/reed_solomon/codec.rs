//! Reed-Solomon codec: systematic encoding and error/erasure correction
//!
//! ## Correction pipeline
//!
//! ```text
//! received ──zero erasures──> syndromes ──all zero──> done
//!                                 │
//!                     Forney syndromes (erasures folded out)
//!                                 │
//!                     Berlekamp-Massey error locator
//!                                 │
//!                     root search -> error positions
//!                                 │
//!              Forney magnitudes over erasures + errors
//!                                 │
//!                     residual syndrome check
//! ```
//!
//! Correction succeeds whenever `2·errors + erasures <= parity`. Beyond that
//! bound every stage that can detect the inconsistency returns
//! [`RsError::Uncorrectable`]; a corrected codeword is only returned once its
//! syndromes are all zero.

use super::berlekamp::find_error_locator;
use super::chien::find_error_positions;
use super::encoder::{encode_with_generator, generator_poly};
use super::forney::correct_errata;
use super::poly::Poly;
use super::syndrome::{calc_syndromes, forney_syndromes, syndromes_zero};
use crate::error::{RsError, RsResult, Uncorrectable};
use crate::galois::{default_field, GaloisField, FIELD_ORDER};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet as HashSet;
use std::sync::Arc;

/// Outcome of a successful correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrected {
    /// Recovered message symbols
    pub message: Vec<u8>,
    /// Corrected parity symbols
    pub parity: Vec<u8>,
    /// Sorted positions that were rewritten, declared erasures included
    pub errata_positions: Vec<usize>,
}

impl Corrected {
    /// Split into `(message, parity)`
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.message, self.parity)
    }

    /// Full corrected codeword
    pub fn codeword(&self) -> Vec<u8> {
        let mut codeword = Vec::with_capacity(self.message.len() + self.parity.len());
        codeword.extend_from_slice(&self.message);
        codeword.extend_from_slice(&self.parity);
        codeword
    }
}

/// Reed-Solomon encoder/decoder for a fixed parity count
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    field: Arc<GaloisField>,
    parity: usize,
    generator: Poly,
    parallel: bool,
}

impl ReedSolomon {
    /// Codec over the standard field
    pub fn new(parity: usize) -> RsResult<Self> {
        Self::with_field(default_field(), parity)
    }

    /// Codec over an explicit field configuration
    pub fn with_field(field: Arc<GaloisField>, parity: usize) -> RsResult<Self> {
        if parity == 0 || parity >= FIELD_ORDER {
            return Err(RsError::InvalidInput(format!(
                "parity count {} must be between 1 and {}",
                parity,
                FIELD_ORDER - 1
            )));
        }

        let generator = generator_poly(parity, &field);
        Ok(Self {
            field,
            parity,
            generator,
            parallel: true,
        })
    }

    pub fn parity(&self) -> usize {
        self.parity
    }

    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    pub fn generator_poly(&self) -> &Poly {
        &self.generator
    }

    /// Whether batch operations use the rayon thread pool
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Largest message this codec accepts
    pub fn max_message_len(&self) -> usize {
        FIELD_ORDER - self.parity
    }

    /// Systematic encode: `message` followed by `parity` check symbols
    pub fn encode(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        encode_with_generator(message, &self.generator, &self.field)
    }

    pub fn syndromes(&self, codeword: &[u8]) -> Vec<u8> {
        calc_syndromes(codeword, self.parity, &self.field)
    }

    /// True when `codeword` is a valid codeword
    pub fn check(&self, codeword: &[u8]) -> bool {
        syndromes_zero(&self.syndromes(codeword))
    }

    /// Correct errors and the declared `erasures` (0-based positions) in `received`
    pub fn correct(&self, received: &[u8], erasures: &[usize]) -> RsResult<Corrected> {
        let n = received.len();
        let gf = self.field.as_ref();

        if n > FIELD_ORDER {
            return Err(RsError::InvalidInput(format!(
                "codeword length {} exceeds field capacity {}",
                n, FIELD_ORDER
            )));
        }
        if n <= self.parity {
            return Err(RsError::InvalidInput(format!(
                "codeword length {} leaves no message symbols with {} parity symbols",
                n, self.parity
            )));
        }

        let mut erasures = erasures.to_vec();
        erasures.sort_unstable();
        erasures.dedup();
        if let Some(&pos) = erasures.iter().find(|&&pos| pos >= n) {
            return Err(RsError::InvalidInput(format!(
                "erasure position {} outside codeword of length {}",
                pos, n
            )));
        }
        if erasures.len() > self.parity {
            return Err(Uncorrectable::TooManyErasures {
                erasures: erasures.len(),
                parity: self.parity,
            }
            .into());
        }

        let mut codeword = received.to_vec();
        for &pos in &erasures {
            codeword[pos] = 0;
        }

        let syndromes = calc_syndromes(&codeword, self.parity, gf);
        if syndromes_zero(&syndromes) {
            return Ok(self.split(codeword, erasures));
        }
        debug!("Nonzero syndromes: {:?}", syndromes);

        let folded = forney_syndromes(&syndromes, &erasures, n, gf);
        let locator = find_error_locator(&folded, self.parity, erasures.len(), gf)?;
        let errors = find_error_positions(&locator, n, gf)?;
        debug!(
            "Locator degree {}, errors at {:?}, erasures at {:?}",
            errors.len(),
            errors,
            erasures
        );

        let mut errata = erasures;
        let mut seen: HashSet<usize> = errata.iter().copied().collect();
        for &pos in &errors {
            if !seen.insert(pos) {
                return Err(Uncorrectable::DuplicateErrataPosition(pos).into());
            }
            errata.push(pos);
        }

        correct_errata(&mut codeword, &syndromes, &errata, gf)?;

        if !self.check(&codeword) {
            return Err(Uncorrectable::ResidualSyndrome.into());
        }

        errata.sort_unstable();
        Ok(self.split(codeword, errata))
    }

    /// Encode independent messages, in parallel when enabled
    pub fn encode_batch(&self, messages: &[Vec<u8>]) -> Vec<RsResult<Vec<u8>>> {
        if self.parallel {
            messages.par_iter().map(|m| self.encode(m)).collect()
        } else {
            messages.iter().map(|m| self.encode(m)).collect()
        }
    }

    /// Correct independent `(received, erasures)` pairs, in parallel when enabled
    pub fn correct_batch(&self, jobs: &[(Vec<u8>, Vec<usize>)]) -> Vec<RsResult<Corrected>> {
        if self.parallel {
            jobs.par_iter()
                .map(|(received, erasures)| self.correct(received, erasures))
                .collect()
        } else {
            jobs.iter()
                .map(|(received, erasures)| self.correct(received, erasures))
                .collect()
        }
    }

    fn split(&self, mut codeword: Vec<u8>, errata_positions: Vec<usize>) -> Corrected {
        let parity = codeword.split_off(codeword.len() - self.parity);
        Corrected {
            message: codeword,
            parity,
            errata_positions,
        }
    }
}

/// Encode `message` with `parity` check symbols over the standard field
pub fn encode(message: &[u8], parity: usize) -> RsResult<Vec<u8>> {
    ReedSolomon::new(parity)?.encode(message)
}

/// Correct `received` over the standard field
pub fn correct(received: &[u8], parity: usize, erasures: &[usize]) -> RsResult<Corrected> {
    ReedSolomon::new(parity)?.correct(received, erasures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_no_errors() {
        let rs = ReedSolomon::new(4).unwrap();
        let codeword = rs.encode(b"Hello").unwrap();

        let corrected = rs.correct(&codeword, &[]).unwrap();
        assert_eq!(corrected.message, b"Hello");
        assert_eq!(corrected.parity, &codeword[5..]);
        assert!(corrected.errata_positions.is_empty());
    }

    #[test]
    fn test_encode_decode_single_error() {
        let rs = ReedSolomon::new(4).unwrap();
        let mut codeword = rs.encode(b"Hello").unwrap();
        codeword[2] ^= 0x55;

        let corrected = rs.correct(&codeword, &[]).unwrap();
        assert_eq!(corrected.message, b"Hello");
        assert_eq!(corrected.errata_positions, vec![2]);
    }

    #[test]
    fn test_encode_decode_two_errors() {
        let rs = ReedSolomon::new(4).unwrap();
        let original = rs.encode(b"Hello").unwrap();
        let mut codeword = original.clone();
        codeword[1] ^= 0x12;
        codeword[7] ^= 0x34;

        let corrected = rs.correct(&codeword, &[]).unwrap();
        assert_eq!(corrected.codeword(), original);
        assert_eq!(corrected.errata_positions, vec![1, 7]);
    }

    #[test]
    fn test_erasures_only() {
        let rs = ReedSolomon::new(4).unwrap();
        let original = rs.encode(b"erase me").unwrap();
        let mut codeword = original.clone();
        for pos in [0, 3, 9, 11] {
            codeword[pos] = 0xFF;
        }

        let corrected = rs.correct(&codeword, &[11, 0, 9, 3, 3]).unwrap();
        assert_eq!(corrected.codeword(), original);
        assert_eq!(corrected.errata_positions, vec![0, 3, 9, 11]);
    }

    #[test]
    fn test_too_many_erasures() {
        let rs = ReedSolomon::new(2).unwrap();
        let codeword = rs.encode(b"abc").unwrap();
        let result = rs.correct(&codeword, &[0, 1, 2]);
        assert!(matches!(
            result,
            Err(RsError::Uncorrectable(Uncorrectable::TooManyErasures {
                erasures: 3,
                parity: 2
            }))
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        let rs = ReedSolomon::new(4).unwrap();
        assert!(matches!(rs.correct(&[1, 2, 3, 4], &[]), Err(RsError::InvalidInput(_))));
        assert!(matches!(rs.correct(&[0u8; 256], &[]), Err(RsError::InvalidInput(_))));

        let codeword = rs.encode(b"xy").unwrap();
        assert!(matches!(rs.correct(&codeword, &[6]), Err(RsError::InvalidInput(_))));

        assert_eq!(rs.max_message_len(), 251);
        assert!(ReedSolomon::new(0).is_err());
        assert!(ReedSolomon::new(255).is_err());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let mut rs = ReedSolomon::new(6).unwrap();
        let messages: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i; 10 + i as usize]).collect();

        let parallel = rs.encode_batch(&messages);
        rs.set_parallel(false);
        let sequential = rs.encode_batch(&messages);
        assert_eq!(parallel, sequential);

        let jobs: Vec<(Vec<u8>, Vec<usize>)> = parallel
            .into_iter()
            .map(|cw| {
                let mut cw = cw.unwrap();
                cw[0] ^= 0xA5;
                cw[3] = 0;
                (cw, vec![3])
            })
            .collect();

        rs.set_parallel(true);
        for (result, message) in rs.correct_batch(&jobs).into_iter().zip(&messages) {
            assert_eq!(&result.unwrap().message, message);
        }
    }
}
