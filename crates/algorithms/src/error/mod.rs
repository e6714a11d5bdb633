//! Error types for cryptographic primitive operations
//!
//! Every fallible operation in this crate returns [`Result`], carrying an
//! [`Error`] that names the failing parameter or processing step without
//! leaking secret material.

use core::fmt;

pub mod validate;

/// Error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter value
    Parameter {
        /// Name of the parameter
        name: &'static str,
        /// Why the parameter was rejected
        reason: &'static str,
    },

    /// Invalid length for an input or output buffer
    Length {
        /// What the length applies to
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Failure during a processing step
    Processing {
        /// The operation that failed
        operation: &'static str,
        /// Details of the failure
        details: &'static str,
    },

    /// Randomness source failure
    Random {
        /// The operation that required randomness
        operation: &'static str,
    },

    /// Any other error
    Other(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Processing { operation, details } => {
                write!(f, "processing error in {}: {}", operation, details)
            }
            Error::Random { operation } => {
                write!(f, "randomness source failed during {}", operation)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;
