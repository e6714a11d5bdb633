//! Security primitives and memory safety utilities
//!
//! Foundational types for handling sensitive cryptographic material:
//! zeroizing buffers, scoped wipe guards, and constant-time comparison.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use memory::SecureCompare;

// Re-export memory barrier utilities
pub use memory::barrier;
