//! Fixed-size secret key type

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{ConstantTimeEq, FixedSize, RandomGeneration};
use crate::error::{validate, Result};

/// Fixed-size secret byte array with automatic zeroization
///
/// Key material for the block cipher and seed material for the DRBG. The
/// bytes are wiped on drop and never shown through `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create from raw bytes, taking ownership
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, validating its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("secret bytes", bytes.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Create a zeroed instance
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the secret is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> FixedSize for SecretBytes<N> {
    fn size() -> usize {
        N
    }
}

impl<const N: usize> ConstantTimeEq for SecretBytes<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq as _;
        bool::from(self.data.ct_eq(&other.data))
    }
}

impl<const N: usize> RandomGeneration for SecretBytes<N> {
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>([REDACTED])", N)
    }
}
