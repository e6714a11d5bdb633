//! # xcrypt
//!
//! A pure Rust library of low-level cryptographic primitives: the AES-128
//! block cipher, incremental SHA-256, and a sampler-driven deterministic
//! random bit generator.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the
//! workspace sub-crates:
//!
//! - [`xcrypt-algorithms`]: the primitive engines (AES-128, SHA-256, DRBG)
//! - [`xcrypt-common`]: secure memory types shared by the engines
//! - [`xcrypt-internal`]: endianness, byte transforms, constant-time helpers
//! - [`xcrypt-params`]: algorithm constants
//!
//! Every engine is generic over an accelerator type supplying its inner
//! byte and word transforms; the portable software accelerator is the
//! default, so the whole library runs on any target.
//!
//! ## Example
//!
//! ```
//! use xcrypt::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let digest = Sha256::<Portable>::digest(b"hello world")?;
//! assert_eq!(digest.len(), 32);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Sub-crate re-exports
pub use xcrypt_algorithms as algorithms;
pub use xcrypt_common as common;
pub use xcrypt_internal as internal;
pub use xcrypt_params as params;

/// Common imports for xcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::{Error, Result};

    // Re-export the accelerator capability and software defaults
    pub use crate::algorithms::{Accelerator, MixMode, Portable, Sampler, XorShiftSampler};

    // Re-export the primitive engines and their traits
    pub use crate::algorithms::{
        Aes128, Aes128Dec, Aes128Enc, BlockCipher, CipherAlgorithm, CtrDrbg, HashAlgorithm,
        HashFunction, Sha256,
    };

    // Re-export common value types
    pub use crate::algorithms::{ConstantTimeEq, Digest, FixedSize, RandomGeneration, SecretBytes};

    // Re-export security types
    pub use crate::common::{
        EphemeralSecret, SecretBuffer, SecureCompare, SecureZeroingType, ZeroizeGuard,
    };
}
