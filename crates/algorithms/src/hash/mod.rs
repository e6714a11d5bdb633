//! Hash function implementations
//!
//! Defines the hash trait hierarchy and hosts the SHA-256 implementation.
//! Like the block ciphers, algorithm constants live on marker types.

use crate::error::Result;

pub mod sha256;

pub use sha256::{Sha256, Sha256Algorithm};

/// Compile-time constants describing a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier string
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function
///
/// Data is absorbed through [`update`](HashFunction::update) in arbitrary
/// chunks; [`finalize`](HashFunction::finalize) pads, produces the digest,
/// and wipes the hash state.
pub trait HashFunction: Sized {
    /// The algorithm this function implements
    type Algorithm: HashAlgorithm;

    /// Digest output type
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hash state
    fn new() -> Self;

    /// Absorb input data, returning `self` for chaining
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Pad, produce the digest, and wipe the hash state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot convenience: hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm identifier string
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
