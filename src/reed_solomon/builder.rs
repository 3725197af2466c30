//! Type-state builder for [`ReedSolomon`]
//!
//! The parity count is required and enforced at compile time: `build()` only
//! exists once `with_parity` has been called. Field parameters are optional
//! and default to the shared standard field.

use super::codec::ReedSolomon;
use crate::error::RsResult;
use crate::galois::{create_tables, GaloisField, DEFAULT_GENERATOR, DEFAULT_PRIMITIVE};
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder state: parity count not set yet
pub struct NoParity;

/// Builder state: parity count configured, ready to build
pub struct ParityConfigured;

enum FieldSource {
    Parameters { primitive: u16, generator: u8 },
    Shared(Arc<GaloisField>),
}

/// Reed-Solomon builder that enforces required fields at compile time
pub struct ReedSolomonBuilder<State = NoParity> {
    field: FieldSource,
    parity: usize,
    parallel: bool,
    _state: PhantomData<State>,
}

impl Default for ReedSolomonBuilder<NoParity> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomonBuilder<NoParity> {
    /// Create a new builder in the unconfigured state
    pub fn new() -> Self {
        Self {
            field: FieldSource::Parameters {
                primitive: DEFAULT_PRIMITIVE,
                generator: DEFAULT_GENERATOR,
            },
            parity: 0,
            parallel: true,
            _state: PhantomData,
        }
    }

    /// Configure the number of parity symbols
    pub fn with_parity(self, parity: usize) -> ReedSolomonBuilder<ParityConfigured> {
        ReedSolomonBuilder {
            field: self.field,
            parity,
            parallel: self.parallel,
            _state: PhantomData,
        }
    }
}

impl<State> ReedSolomonBuilder<State> {
    pub fn primitive_polynomial(mut self, primitive: u16) -> Self {
        let generator = match self.field {
            FieldSource::Parameters { generator, .. } => generator,
            FieldSource::Shared(ref field) => field.generator(),
        };
        self.field = FieldSource::Parameters {
            primitive,
            generator,
        };
        self
    }

    pub fn generator(mut self, generator: u8) -> Self {
        let primitive = match self.field {
            FieldSource::Parameters { primitive, .. } => primitive,
            FieldSource::Shared(ref field) => field.primitive(),
        };
        self.field = FieldSource::Parameters {
            primitive,
            generator,
        };
        self
    }

    /// Reuse already built tables
    pub fn field(mut self, field: Arc<GaloisField>) -> Self {
        self.field = FieldSource::Shared(field);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl ReedSolomonBuilder<ParityConfigured> {
    /// Build the codec; fails on invalid field parameters or parity count
    pub fn build(self) -> RsResult<ReedSolomon> {
        let field = match self.field {
            FieldSource::Parameters {
                primitive,
                generator,
            } => create_tables(primitive, generator)?,
            FieldSource::Shared(field) => field,
        };

        let mut codec = ReedSolomon::with_field(field, self.parity)?;
        codec.set_parallel(self.parallel);
        Ok(codec)
    }
}
