//! Constant values for xcrypt cryptographic operations

pub mod drbg;
pub mod hash;
pub mod symmetric;
