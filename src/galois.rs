//! Galois Field GF(2^8) arithmetic for Reed-Solomon operations
//!
//! Multiplication and division go through logarithm/exponent tables built once
//! per field configuration. The standard configuration uses the primitive
//! polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1) with generator element 2; other
//! primitive polynomial / generator pairs can be constructed with
//! [`GaloisField::new`] and shared between codecs through an `Arc`.

use crate::error::{RsError, RsResult};
use std::sync::{Arc, OnceLock};

/// Default primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const DEFAULT_PRIMITIVE: u16 = 0x11D;

/// Default generator element (alpha)
pub const DEFAULT_GENERATOR: u8 = 2;

/// Order of the multiplicative group of GF(2^8)
pub const FIELD_ORDER: usize = 255;

/// Precomputed logarithm and exponent tables for one field configuration
#[derive(Clone)]
pub struct GaloisField {
    primitive: u16,
    generator: u8,
    log_table: [u8; 256],
    exp_table: [u8; 512], // 2x size to avoid modulo in multiplication
}

impl std::fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaloisField")
            .field("primitive", &format_args!("{:#x}", self.primitive))
            .field("generator", &self.generator)
            .finish()
    }
}

impl GaloisField {
    /// Build tables for `primitive` and `generator`
    ///
    /// Fails unless the powers of `generator` visit all 255 nonzero elements.
    pub fn new(primitive: u16, generator: u8) -> RsResult<Self> {
        if !(0x100..=0x1FF).contains(&primitive) {
            return Err(RsError::InvalidFieldParameters {
                primitive,
                generator,
                reason: "primitive polynomial must have degree 8".to_string(),
            });
        }

        let field = Self::fill_tables(primitive, generator);
        let period = field.period();
        if period != FIELD_ORDER {
            return Err(RsError::InvalidFieldParameters {
                primitive,
                generator,
                reason: format!("generator cycle has period {} instead of 255", period),
            });
        }

        Ok(field)
    }

    /// Standard field: primitive 0x11D, generator 2
    pub fn standard() -> Self {
        Self::fill_tables(DEFAULT_PRIMITIVE, DEFAULT_GENERATOR)
    }

    /// Tables from successive powers of `generator`, without checking the period
    fn fill_tables(primitive: u16, generator: u8) -> Self {
        let mut field = GaloisField {
            primitive,
            generator,
            log_table: [0; 256],
            exp_table: [0; 512],
        };

        let mut value = 1u8;
        for i in 0..FIELD_ORDER {
            field.exp_table[i] = value;
            field.exp_table[i + FIELD_ORDER] = value;
            field.log_table[value as usize] = i as u8;

            value = Self::mul_no_table(value, generator, primitive);
        }

        field
    }

    /// Powers of the generator before the first zero or repeated value
    fn period(&self) -> usize {
        let mut seen = [false; 256];
        self.exp_table[..FIELD_ORDER]
            .iter()
            .position(|&value| {
                let repeated = value == 0 || seen[value as usize];
                seen[value as usize] = true;
                repeated
            })
            .unwrap_or(FIELD_ORDER)
    }

    /// Carry-less multiply reduced modulo `primitive`, without lookup tables
    pub fn mul_no_table(mut a: u8, mut b: u8, primitive: u16) -> u8 {
        let reduce = (primitive & 0xFF) as u8;
        let mut product = 0u8;

        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            let carry = a & 0x80 != 0;
            a <<= 1;
            if carry {
                a ^= reduce;
            }
            b >>= 1;
        }

        product
    }

    pub fn primitive(&self) -> u16 {
        self.primitive
    }

    pub fn generator(&self) -> u8 {
        self.generator
    }

    /// Exponent table: `exp[i]` is the generator raised to `i`, for `i` in 0..255
    pub fn exp_table(&self) -> &[u8] {
        &self.exp_table[..FIELD_ORDER]
    }

    /// Discrete logarithm of a nonzero element
    pub fn log(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.log_table[a as usize])
    }

    /// Add two elements in GF(2^8) - this is just XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements in GF(2^8) - same as addition (XOR)
    #[inline]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two elements in GF(2^8)
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[log_a + log_b]
    }

    /// Divide two elements in GF(2^8)
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> RsResult<u8> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        Ok(self.exp_table[log_a + FIELD_ORDER - log_b])
    }

    /// Raise an element to a power; zero to the zero power is one
    #[inline]
    pub fn pow(&self, base: u8, exponent: u32) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let log_base = self.log_table[base as usize] as u64;
        let log_result = (log_base * exponent as u64) % FIELD_ORDER as u64;
        self.exp_table[log_result as usize]
    }

    /// Get the multiplicative inverse of an element
    #[inline]
    pub fn inverse(&self, a: u8) -> RsResult<u8> {
        if a == 0 {
            return Err(RsError::DivisionByZero);
        }

        let log_a = self.log_table[a as usize] as usize;
        Ok(self.exp_table[FIELD_ORDER - log_a])
    }

    /// Generator raised to `power`, which may be negative
    #[inline]
    pub fn alpha(&self, power: i64) -> u8 {
        self.exp_table[power.rem_euclid(FIELD_ORDER as i64) as usize]
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shared standard field instance
static DEFAULT_FIELD: OnceLock<Arc<GaloisField>> = OnceLock::new();

/// Get the shared standard field (0x11D, generator 2)
pub fn default_field() -> Arc<GaloisField> {
    DEFAULT_FIELD
        .get_or_init(|| Arc::new(GaloisField::standard()))
        .clone()
}

/// Obtain tables for `primitive` and `generator`
///
/// The standard pair always resolves to the shared instance, so repeated
/// calls are cheap; any other pair is validated and built fresh.
pub fn create_tables(primitive: u16, generator: u8) -> RsResult<Arc<GaloisField>> {
    if primitive == DEFAULT_PRIMITIVE && generator == DEFAULT_GENERATOR {
        return Ok(default_field());
    }
    GaloisField::new(primitive, generator).map(Arc::new)
}
