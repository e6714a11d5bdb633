//! Internal utilities for the xcrypt library
//!
//! Byte and word transform helpers shared by the primitive engines:
//! endianness conversion, fixed-size block copy/transpose, and
//! constant-time comparison.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
pub mod endian;
pub mod xform;
