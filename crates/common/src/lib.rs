//! Common implementations and shared functionality for the xcrypt library
//!
//! This crate provides the secure-memory types used across the xcrypt
//! primitive engines to handle key material and intermediate secrets.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureCompare, SecureZeroingType, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::barrier;
