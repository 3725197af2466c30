//! Berlekamp-Massey error locator search
//!
//! Runs over Forney syndromes so that known erasures are already folded out;
//! the resulting locator only covers the errors the decoder has to discover.

use super::poly::Poly;
use crate::error::{RsResult, Uncorrectable};
use crate::galois::GaloisField;
use log::trace;

/// Shortest LFSR generating `syndromes`, as a locator Λ(x) with Λ(0) = 1
pub fn berlekamp_massey(syndromes: &[u8], gf: &GaloisField) -> RsResult<Poly> {
    // Lowest degree first while iterating
    let mut current = vec![1u8];
    let mut prior = vec![1u8];
    let mut length = 0usize;
    let mut shift = 1usize;
    let mut prior_delta = 1u8;

    for n in 0..syndromes.len() {
        let mut delta = syndromes[n];
        for i in 1..current.len().min(n + 1) {
            delta ^= gf.mul(current[i], syndromes[n - i]);
        }

        if delta == 0 {
            shift += 1;
            continue;
        }

        let coef = gf.div(delta, prior_delta)?;
        let mut next = current.clone();
        if next.len() < prior.len() + shift {
            next.resize(prior.len() + shift, 0);
        }
        for (i, &b) in prior.iter().enumerate() {
            next[i + shift] ^= gf.mul(coef, b);
        }

        if 2 * length <= n {
            length = n + 1 - length;
            prior = std::mem::replace(&mut current, next);
            prior_delta = delta;
            shift = 1;
        } else {
            current = next;
            shift += 1;
        }

        trace!(
            "BM step {}: delta={:#04x} length={} locator={:?}",
            n,
            delta,
            length,
            current
        );
    }

    while current.len() > 1 && current.last() == Some(&0) {
        current.pop();
    }

    Ok(Poly::from_low_first(current))
}

/// Locator of the undeclared errors, enforcing 2·errors + erasures <= parity
pub fn find_error_locator(
    forney_syndromes: &[u8],
    parity: usize,
    erasure_count: usize,
    gf: &GaloisField,
) -> RsResult<Poly> {
    let locator = berlekamp_massey(forney_syndromes, gf)?.normalized();
    let errors = locator.degree().unwrap_or(0);

    if 2 * errors + erasure_count > parity {
        return Err(Uncorrectable::TooManyErrors {
            errors,
            erasures: erasure_count,
            parity,
        }
        .into());
    }

    Ok(locator)
}
