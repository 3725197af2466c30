pub mod args;
pub mod config;
pub mod error;
pub mod galois;
pub mod reed_solomon;

pub use config::CodecConfig;
pub use error::{RsError, RsResult, Uncorrectable};
pub use galois::{create_tables, default_field, GaloisField};
pub use reed_solomon::{correct, encode, Corrected, Poly, ReedSolomon, ReedSolomonBuilder};
