//! Block cipher implementations
//!
//! Defines the block cipher trait hierarchy and hosts the AES-128
//! implementation. Algorithm constants live on marker types so generic
//! code can query key and block sizes without an instance.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

pub mod aes;

pub use aes::{Aes128, Aes128Dec, Aes128Enc};

/// Compile-time constants describing a block cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// Block cipher operating on fixed-size blocks in place
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key material type, zeroized on drop
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Build a cipher instance from a key, running key expansion
    fn new(key: &Self::Key) -> Result<Self>;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate a random key using the provided RNG
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;

    /// Key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Human-readable algorithm name
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
