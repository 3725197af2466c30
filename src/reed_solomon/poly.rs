//! Polynomials over GF(2^8)
//!
//! Coefficients are stored highest degree first: `coeffs[0]` multiplies
//! `x^(len - 1)` and the last coefficient is the constant term. Codewords use
//! the same layout, so a codeword can be treated as a polynomial directly.

use crate::error::{RsError, RsResult};
use crate::galois::GaloisField;

/// Polynomial with coefficients in GF(2^8), highest degree first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly {
    coeffs: Vec<u8>,
}

impl Poly {
    pub fn new(coeffs: Vec<u8>) -> Self {
        Self { coeffs }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Build from coefficients ordered lowest degree first
    pub fn from_low_first(mut coeffs: Vec<u8>) -> Self {
        coeffs.reverse();
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<u8> {
        self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Degree after ignoring leading zeros; `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        let first = self.coeffs.iter().position(|&c| c != 0)?;
        Some(self.coeffs.len() - 1 - first)
    }

    /// Drop leading zero coefficients, leaving `[0]` for the zero polynomial
    pub fn normalized(mut self) -> Self {
        let first = self
            .coeffs
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(self.coeffs.len().saturating_sub(1));
        self.coeffs.drain(..first);
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
        self
    }

    /// Coefficient-wise sum, aligned at the constant term
    pub fn add(&self, other: &Poly) -> Poly {
        let len = self.len().max(other.len());
        let mut result = vec![0u8; len];

        for (i, &c) in self.coeffs.iter().enumerate() {
            result[i + len - self.len()] = c;
        }
        for (i, &c) in other.coeffs.iter().enumerate() {
            result[i + len - other.len()] ^= c;
        }

        Poly::new(result)
    }

    /// Full convolution product
    pub fn mul(&self, other: &Poly, gf: &GaloisField) -> Poly {
        if self.is_empty() || other.is_empty() {
            return Poly::default();
        }

        let mut result = vec![0u8; self.len() + other.len() - 1];
        for (j, &q) in other.coeffs.iter().enumerate() {
            if q == 0 {
                continue;
            }
            for (i, &p) in self.coeffs.iter().enumerate() {
                result[i + j] ^= gf.mul(p, q);
            }
        }

        Poly::new(result)
    }

    /// Multiply every coefficient by `factor`
    pub fn scale(&self, factor: u8, gf: &GaloisField) -> Poly {
        Poly::new(self.coeffs.iter().map(|&c| gf.mul(c, factor)).collect())
    }

    /// Evaluate at `x` with Horner's method
    pub fn eval(&self, x: u8, gf: &GaloisField) -> u8 {
        self.coeffs.iter().fold(0u8, |acc, &c| gf.mul(acc, x) ^ c)
    }

    /// Long division returning `(quotient, remainder)`
    ///
    /// The remainder always has `divisor_degree` coefficients so that callers
    /// can splice it straight into a codeword.
    pub fn div_rem(&self, divisor: &Poly, gf: &GaloisField) -> RsResult<(Poly, Poly)> {
        if divisor.is_zero() {
            return Err(RsError::InvalidInput(
                "polynomial division by the zero polynomial".to_string(),
            ));
        }

        let divisor = divisor.clone().normalized();
        let rem_len = divisor.len() - 1;

        if self.len() < divisor.len() {
            let mut remainder = vec![0u8; rem_len - self.len()];
            remainder.extend_from_slice(&self.coeffs);
            return Ok((Poly::new(vec![0]), Poly::new(remainder)));
        }

        let lead = divisor.coeffs[0];
        let mut out = self.coeffs.clone();

        for i in 0..=(self.len() - divisor.len()) {
            if out[i] == 0 {
                continue;
            }
            let coef = gf.div(out[i], lead)?;
            out[i] = coef;
            for (j, &d) in divisor.coeffs.iter().enumerate().skip(1) {
                out[i + j] ^= gf.mul(d, coef);
            }
        }

        let remainder = out.split_off(out.len() - rem_len);
        Ok((Poly::new(out), Poly::new(remainder)))
    }

    /// Keep only the terms of degree below `terms` (reduction modulo `x^terms`)
    pub fn truncate_low(&self, terms: usize) -> Poly {
        let start = self.len().saturating_sub(terms);
        Poly::new(self.coeffs[start..].to_vec())
    }

    /// Formal derivative; over characteristic 2 only odd-degree terms survive
    pub fn derivative(&self) -> Poly {
        if self.len() <= 1 {
            return Poly::new(vec![0]);
        }

        let top = self.len() - 1;
        Poly::new(
            self.coeffs[..top]
                .iter()
                .enumerate()
                .map(|(i, &c)| if (top - i) % 2 == 1 { c } else { 0 })
                .collect(),
        )
    }
}

impl From<Vec<u8>> for Poly {
    fn from(coeffs: Vec<u8>) -> Self {
        Poly::new(coeffs)
    }
}

impl From<&[u8]> for Poly {
    fn from(coeffs: &[u8]) -> Self {
        Poly::new(coeffs.to_vec())
    }
}
