//! Fixed-size digest type for hash function outputs

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use super::{ConstantTimeEq, FixedSize};
use crate::error::{validate, Result};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Fixed-size hash function output
///
/// Equality between digests runs in constant time so digests can stand in
/// for MAC-like comparisons without a timing side channel.
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a digest from raw bytes
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a digest from a slice, validating its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("digest", bytes.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Get the digest bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Encode the digest as a lowercase hex string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Decode a digest from a hex string
    #[cfg(feature = "alloc")]
    pub fn from_hex(s: &str) -> Result<Self> {
        validate::length("hex digest", s.len(), N * 2)?;
        let mut data = [0u8; N];
        hex::decode_to_slice(s, &mut data).map_err(|_| crate::error::Error::Parameter {
            name: "hex digest",
            reason: "invalid hex encoding",
        })?;
        Ok(Self { data })
    }
}

impl<const N: usize> FixedSize for Digest<N> {
    fn size() -> usize {
        N
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        xcrypt_internal::constant_time::ct_eq(&self.data, &other.data)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_validates_length() {
        assert!(Digest::<32>::from_slice(&[0u8; 32]).is_ok());
        assert!(Digest::<32>::from_slice(&[0u8; 31]).is_err());
    }

    #[test]
    fn constant_time_equality() {
        let a = Digest::new([0xAB; 32]);
        let b = Digest::new([0xAB; 32]);
        let c = Digest::new([0xAC; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn hex_round_trip() {
        let digest = Digest::new([0x01, 0x23, 0x45, 0x67]);
        let encoded = digest.to_hex();
        assert_eq!(encoded, "01234567");
        let decoded = Digest::<4>::from_hex(&encoded).unwrap();
        assert_eq!(digest, decoded);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Digest::<4>::from_hex("0123").is_err());
        assert!(Digest::<4>::from_hex("zz234567").is_err());
    }
}
