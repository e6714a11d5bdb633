//! Constant values for xcrypt cryptographic operations
//!
//! This library provides the fixed sizes and intervals shared by the
//! xcrypt primitive engines.

#![no_std]

pub mod utils;
