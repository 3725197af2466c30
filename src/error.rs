//! Error types for Reed-Solomon operations

use thiserror::Error;

/// Errors that can occur while building fields, encoding or correcting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Primitive polynomial / generator pair does not span the multiplicative group
    #[error("Invalid field parameters (primitive {primitive:#x}, generator {generator}): {reason}")]
    InvalidFieldParameters {
        primitive: u16,
        generator: u8,
        reason: String,
    },

    /// Caller supplied arguments outside the codec's domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Field division or inversion of zero
    #[error("Division by zero in GF(2^8)")]
    DivisionByZero,

    /// Corruption exceeds what the parity can repair
    #[error("Uncorrectable codeword: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}

/// Stage at which correction gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    #[error("{erasures} erasures exceed {parity} parity symbols")]
    TooManyErasures { erasures: usize, parity: usize },

    #[error("{errors} errors with {erasures} erasures exceed {parity} parity symbols")]
    TooManyErrors {
        errors: usize,
        erasures: usize,
        parity: usize,
    },

    #[error("error locator of degree {expected} has {found} roots in the codeword")]
    RootCountMismatch { expected: usize, found: usize },

    #[error("position {0} located as both erasure and error")]
    DuplicateErrataPosition(usize),

    #[error("locator derivative vanishes at position {position}")]
    DegenerateDerivative { position: usize },

    #[error("syndromes are still nonzero after correction")]
    ResidualSyndrome,
}

impl RsError {
    /// True for failures caused by too much corruption rather than bad arguments
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::Uncorrectable(_))
    }
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
