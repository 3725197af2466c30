//! Root search for the error locator

use super::poly::Poly;
use crate::error::{RsResult, Uncorrectable};
use crate::galois::GaloisField;
use smallvec::SmallVec;

/// Error positions found by the root search; parity is rarely large
pub type Positions = SmallVec<[usize; 16]>;

/// Find every codeword position whose inverse locator is a root of `locator`
///
/// Fails when the number of roots differs from the locator degree, which means
/// the locator does not split over the codeword positions.
pub fn find_error_positions(locator: &Poly, n: usize, gf: &GaloisField) -> RsResult<Positions> {
    let expected = locator.degree().unwrap_or(0);
    let mut positions = Positions::new();

    if expected == 0 {
        return Ok(positions);
    }

    for pos in 0..n {
        // X^-1 = α^-(n-1-pos)
        let x_inv = gf.alpha(-((n - 1 - pos) as i64));
        if locator.eval(x_inv, gf) == 0 {
            positions.push(pos);
        }
    }

    if positions.len() != expected {
        return Err(Uncorrectable::RootCountMismatch {
            expected,
            found: positions.len(),
        }
        .into());
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsError;
    use crate::reed_solomon::syndrome::erasure_locator;

    #[test]
    fn test_finds_positions_of_product_locator() {
        let gf = GaloisField::standard();
        let n = 20;
        let locator = erasure_locator(&[0, 7, 19], n, &gf);

        let positions = find_error_positions(&locator, n, &gf).unwrap();
        assert_eq!(positions.as_slice(), &[0, 7, 19]);
    }

    #[test]
    fn test_trivial_locator_has_no_positions() {
        let gf = GaloisField::standard();
        assert!(find_error_positions(&Poly::one(), 12, &gf).unwrap().is_empty());
    }

    #[test]
    fn test_root_outside_codeword_is_rejected() {
        let gf = GaloisField::standard();
        // roots for positions 3 and 30 of a 31-symbol word, searched as a 10-symbol word
        let locator = erasure_locator(&[3, 30], 31, &gf);

        let result = find_error_positions(&locator, 10, &gf);
        assert!(matches!(
            result,
            Err(RsError::Uncorrectable(Uncorrectable::RootCountMismatch {
                expected: 2,
                found: 1
            }))
        ));
    }

    #[test]
    fn test_irreducible_locator_is_rejected() {
        let gf = GaloisField::standard();
        // x^2 + x + c has no roots for half of the nonzero c
        let locator = (1..=255u8)
            .map(|c| Poly::new(vec![1, 1, c]))
            .find(|p| (1..=255u8).all(|x| p.eval(x, &gf) != 0))
            .unwrap();

        assert!(find_error_positions(&locator, 255, &gf).is_err());
    }
}
