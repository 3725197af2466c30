//! Generator polynomial and systematic encoding

use super::poly::Poly;
use crate::error::{RsError, RsResult};
use crate::galois::{GaloisField, FIELD_ORDER};

/// Build g(x) = (x - α^0)(x - α^1)...(x - α^(parity-1))
pub fn generator_poly(parity: usize, gf: &GaloisField) -> Poly {
    (0..parity).fold(Poly::one(), |g, i| {
        g.mul(&Poly::new(vec![1, gf.alpha(i as i64)]), gf)
    })
}

/// Check message/parity sizes against the field capacity
pub fn validate_lengths(message_len: usize, parity: usize) -> RsResult<()> {
    if message_len == 0 {
        return Err(RsError::InvalidInput("message must not be empty".to_string()));
    }
    if parity == 0 {
        return Err(RsError::InvalidInput(
            "parity count must be at least 1".to_string(),
        ));
    }
    if message_len + parity > FIELD_ORDER {
        return Err(RsError::InvalidInput(format!(
            "codeword length {} exceeds field capacity {}",
            message_len + parity,
            FIELD_ORDER
        )));
    }
    Ok(())
}

/// Systematic encode: codeword = message followed by the remainder of
/// `message · x^parity` divided by `generator`
pub fn encode_with_generator(
    message: &[u8],
    generator: &Poly,
    gf: &GaloisField,
) -> RsResult<Vec<u8>> {
    let parity = generator.len().saturating_sub(1);
    validate_lengths(message.len(), parity)?;

    let mut shifted = Vec::with_capacity(message.len() + parity);
    shifted.extend_from_slice(message);
    shifted.resize(message.len() + parity, 0);

    let (_, remainder) = Poly::new(shifted).div_rem(generator, gf)?;

    let mut codeword = Vec::with_capacity(message.len() + parity);
    codeword.extend_from_slice(message);
    codeword.extend_from_slice(remainder.coeffs());
    Ok(codeword)
}

/// Encode `message` with `parity` check symbols
pub fn encode(message: &[u8], parity: usize, gf: &GaloisField) -> RsResult<Vec<u8>> {
    validate_lengths(message.len(), parity)?;
    encode_with_generator(message, &generator_poly(parity, gf), gf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_poly_roots() {
        let gf = GaloisField::standard();
        let g = generator_poly(6, &gf);

        assert_eq!(g.len(), 7);
        assert_eq!(g.coeffs()[0], 1);
        for i in 0..6 {
            assert_eq!(g.eval(gf.alpha(i), &gf), 0, "alpha^{} is not a root", i);
        }
        assert_ne!(g.eval(gf.alpha(6), &gf), 0);
    }

    #[test]
    fn test_generator_poly_small() {
        let gf = GaloisField::standard();
        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(generator_poly(2, &gf), Poly::new(vec![1, 3, 2]));
        assert_eq!(generator_poly(0, &gf), Poly::one());
    }

    #[test]
    fn test_encode_is_systematic() {
        let gf = GaloisField::standard();
        let message = b"hello world";
        let codeword = encode(message, 8, &gf).unwrap();

        assert_eq!(codeword.len(), message.len() + 8);
        assert_eq!(&codeword[..message.len()], message);
    }

    #[test]
    fn test_codeword_divisible_by_generator() {
        let gf = GaloisField::standard();
        let generator = generator_poly(4, &gf);
        let codeword = encode(&[66, 79, 79], 4, &gf).unwrap();

        let (_, remainder) = Poly::new(codeword).div_rem(&generator, &gf).unwrap();
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_encode_rejects_bad_lengths() {
        let gf = GaloisField::standard();
        assert!(matches!(encode(&[], 4, &gf), Err(RsError::InvalidInput(_))));
        assert!(matches!(encode(&[1, 2], 0, &gf), Err(RsError::InvalidInput(_))));
        assert!(matches!(encode(&[0u8; 250], 6, &gf), Err(RsError::InvalidInput(_))));
        assert!(encode(&[0u8; 249], 6, &gf).is_ok());
    }
}
