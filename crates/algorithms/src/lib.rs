//! Cryptographic primitives for the xcrypt library
//!
//! This crate implements the three xcrypt primitive engines: the AES-128
//! block cipher, the incremental SHA-256 hash, and a sampler-driven
//! CTR-DRBG. The engines share a primitive-accelerator capability (see
//! [`accel`]) with a portable software default, so every algorithm runs
//! unmodified on targets without specialized instructions.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations
//! - Branch-free substitution in the portable accelerator

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Primitive accelerator capability
pub mod accel;
pub use accel::{Accelerator, MixMode, Portable, Sampler, XorShiftSampler};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes128Dec, Aes128Enc, BlockCipher, CipherAlgorithm};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha256};

// Deterministic random bit generator
pub mod drbg;
pub use drbg::CtrDrbg;

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, FixedSize, RandomGeneration, SecretBytes};

// Re-export security types from xcrypt-common
pub use xcrypt_common::security::{
    barrier, EphemeralSecret, SecretBuffer, SecureCompare, SecureZeroingType, ZeroizeGuard,
};
