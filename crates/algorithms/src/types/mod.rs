//! Common types used across the primitive engines
//!
//! Provides fixed-size wrappers for hash outputs and key material along
//! with the small traits the engines rely on.

use rand::{CryptoRng, RngCore};

mod digest;
mod key;

pub use digest::Digest;
pub use key::SecretBytes;

/// Trait for types with a fixed size known at compile time
pub trait FixedSize {
    /// Size of this type in bytes
    fn size() -> usize;
}

/// Trait for types supporting constant-time equality comparison
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that can be generated from a cryptographic RNG
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;
}
