//! Syndrome computation and erasure handling
//!
//! Codeword position `p` of an `n`-symbol codeword holds the coefficient of
//! `x^(n-1-p)`, so its locator is `X = α^(n-1-p)`.

use super::poly::Poly;
use crate::galois::GaloisField;

/// Locator `α^(n-1-position)` of a codeword position
#[inline]
pub fn position_locator(position: usize, n: usize, gf: &GaloisField) -> u8 {
    gf.alpha((n - 1 - position) as i64)
}

/// Compute syndromes S_j = r(α^j) for j = 0..parity
pub fn calc_syndromes(codeword: &[u8], parity: usize, gf: &GaloisField) -> Vec<u8> {
    let received = Poly::from(codeword);
    (0..parity)
        .map(|j| received.eval(gf.alpha(j as i64), gf))
        .collect()
}

/// Check if all syndromes are zero (no errors)
pub fn syndromes_zero(syndromes: &[u8]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}

/// Erasure locator ∏ (1 - X_j·x) over the given codeword positions
pub fn erasure_locator(positions: &[usize], n: usize, gf: &GaloisField) -> Poly {
    positions.iter().fold(Poly::one(), |loc, &pos| {
        loc.mul(&Poly::new(vec![position_locator(pos, n, gf), 1]), gf)
    })
}

/// Fold the known erasures out of the syndromes
///
/// Each erasure with locator X maps T_j = X·S_j + S_(j+1), which cancels that
/// erasure's contribution. With `s` erasures the first `parity - s` values are
/// returned; they behave as syndromes of the unknown errors alone.
pub fn forney_syndromes(
    syndromes: &[u8],
    erasures: &[usize],
    n: usize,
    gf: &GaloisField,
) -> Vec<u8> {
    let mut folded = syndromes.to_vec();

    for &pos in erasures {
        let x = position_locator(pos, n, gf);
        for j in 0..folded.len().saturating_sub(1) {
            folded[j] = gf.mul(folded[j], x) ^ folded[j + 1];
        }
    }

    folded.truncate(syndromes.len().saturating_sub(erasures.len()));
    folded
}
