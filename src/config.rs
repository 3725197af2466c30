//! Configuration for codec construction

use crate::error::RsResult;
use crate::galois::{DEFAULT_GENERATOR, DEFAULT_PRIMITIVE};
use crate::reed_solomon::{ReedSolomon, ReedSolomonBuilder};

/// Default number of parity symbols
pub const DEFAULT_PARITY: usize = 4;

/// Field and codec parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Primitive polynomial of GF(2^8), including the x^8 term
    pub primitive: u16,
    /// Generator element whose powers are the generator polynomial roots
    pub generator: u8,
    /// Number of parity symbols per codeword
    pub parity: usize,
    /// Number of threads for batch operations (0 = auto-detect)
    pub threads: usize,
    /// Whether batch operations run in parallel
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            primitive: DEFAULT_PRIMITIVE,
            generator: DEFAULT_GENERATOR,
            parity: DEFAULT_PARITY,
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(primitive: u16, generator: u8, parity: usize) -> Self {
        Self {
            primitive,
            generator,
            parity,
            ..Self::default()
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let defaults = Self::default();

        let primitive = matches
            .try_get_one::<u16>("primitive")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.primitive);
        let generator = matches
            .try_get_one::<u8>("generator")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.generator);
        let parity = matches
            .try_get_one::<usize>("parity")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.parity);
        let threads = matches
            .try_get_one::<usize>("threads")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.threads);
        let parallel = !matches
            .try_get_one::<bool>("no-parallel")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);

        Self {
            primitive,
            generator,
            parity,
            threads,
            parallel,
        }
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4), // Auto-detect CPU cores
            (true, n) => n,  // Use specified thread count
        }
    }

    /// Build a codec for this configuration
    pub fn build_codec(&self) -> RsResult<ReedSolomon> {
        ReedSolomonBuilder::new()
            .primitive_polynomial(self.primitive)
            .generator(self.generator)
            .parallel(self.parallel)
            .with_parity(self.parity)
            .build()
    }
}
