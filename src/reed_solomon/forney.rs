//! Forney algorithm: error magnitudes at known errata positions

use super::poly::Poly;
use super::syndrome::{erasure_locator, position_locator};
use crate::error::{RsResult, Uncorrectable};
use crate::galois::GaloisField;
use log::debug;

/// Error evaluator Ω(x) = S(x)·Λ(x) mod x^parity
pub fn error_evaluator(syndromes: &[u8], locator: &Poly, gf: &GaloisField) -> Poly {
    let syndrome_poly = Poly::from_low_first(syndromes.to_vec());
    syndrome_poly.mul(locator, gf).truncate_low(syndromes.len())
}

/// Magnitude of the error at each of `positions`
///
/// With syndromes taken at α^0..α^(parity-1), the magnitude at locator X is
/// X·Ω(X⁻¹) / Λ'(X⁻¹), where Λ is the locator of all errata.
pub fn error_magnitudes(
    syndromes: &[u8],
    positions: &[usize],
    n: usize,
    gf: &GaloisField,
) -> RsResult<Vec<u8>> {
    let locator = erasure_locator(positions, n, gf);
    let evaluator = error_evaluator(syndromes, &locator, gf);
    let derivative = locator.derivative();

    positions
        .iter()
        .map(|&position| {
            let x = position_locator(position, n, gf);
            let x_inv = gf.inverse(x)?;

            let denominator = derivative.eval(x_inv, gf);
            if denominator == 0 {
                return Err(Uncorrectable::DegenerateDerivative { position }.into());
            }

            let numerator = gf.mul(x, evaluator.eval(x_inv, gf));
            gf.div(numerator, denominator)
        })
        .collect()
}

/// Apply Forney corrections to `codeword` in place
pub fn correct_errata(
    codeword: &mut [u8],
    syndromes: &[u8],
    positions: &[usize],
    gf: &GaloisField,
) -> RsResult<()> {
    let magnitudes = error_magnitudes(syndromes, positions, codeword.len(), gf)?;

    for (&pos, &magnitude) in positions.iter().zip(magnitudes.iter()) {
        debug!("Correcting position {} by {:#04x}", pos, magnitude);
        codeword[pos] ^= magnitude;
    }

    Ok(())
}
