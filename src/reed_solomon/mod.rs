//! Reed-Solomon Error Correction Module
//!
//! Byte-oriented Reed-Solomon over GF(2^8): systematic encoding with a
//! generator polynomial whose roots are α^0..α^(parity-1), and decoding of
//! errors plus declared erasures via Forney syndromes, Berlekamp-Massey,
//! root search and the Forney magnitude formula.

pub mod berlekamp;
pub mod builder;
pub mod chien;
pub mod codec;
pub mod encoder;
pub mod forney;
pub mod poly;
pub mod syndrome;

pub use builder::*;
pub use codec::*;
pub use poly::Poly;
