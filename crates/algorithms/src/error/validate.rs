//! Validation helpers for common precondition checks
//!
//! These helpers keep call sites short: each check returns a descriptive
//! [`Error`](super::Error) naming the rejected input.

use super::{Error, Result};

/// Validate that a condition holds for a named parameter
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Parameter { name, reason })
    }
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Validate a minimum length
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual >= min {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: min,
            actual,
        })
    }
}

/// Validate a maximum length
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual <= max {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: max,
            actual,
        })
    }
}

/// Build a randomness failure for the given operation
pub fn random_failure(operation: &'static str) -> Error {
    Error::Random { operation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_check() {
        assert!(parameter(true, "key", "must be set").is_ok());
        let err = parameter(false, "key", "must be set").unwrap_err();
        assert_eq!(
            err,
            Error::Parameter {
                name: "key",
                reason: "must be set"
            }
        );
    }

    #[test]
    fn length_checks() {
        assert!(length("block", 16, 16).is_ok());
        assert!(length("block", 15, 16).is_err());
        assert!(min_length("entropy", 32, 16).is_ok());
        assert!(min_length("entropy", 8, 16).is_err());
        assert!(max_length("request", 100, 65536).is_ok());
        assert!(max_length("request", 70000, 65536).is_err());
    }
}
