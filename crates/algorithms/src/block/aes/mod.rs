//! AES-128 block cipher
//!
//! Generic over an [`Accelerator`] for the S-box substitutions; every
//! other step is plain word arithmetic. Decryption uses the equivalent
//! inverse cipher: the decryption schedule is derived from the encryption
//! schedule by applying InvMixColumns to the inner round keys, so the
//! inverse rounds run in the same step order as the forward rounds.
//!
//! Both schedules live in [`SecretBuffer`]s and are wiped on drop.

use core::marker::PhantomData;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::accel::{Accelerator, Portable};
use crate::block::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use xcrypt_common::security::{barrier, SecretBuffer};
use xcrypt_internal::{endian, xform};
use xcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES128_SCHEDULE_SIZE, AES_BLOCK_SIZE,
};


/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Substitutes each byte in a word through the accelerator S-box
#[inline(always)]
fn sub_word<A: Accelerator>(word: u32) -> u32 {
    let bytes = endian::u32_to_be_bytes(word);
    endian::u32_from_be_bytes(&[
        A::sub_byte(bytes[0]),
        A::sub_byte(bytes[1]),
        A::sub_byte(bytes[2]),
        A::sub_byte(bytes[3]),
    ])
}

/// AES-128 key expansion into the full 11-round-key schedule
fn expand_key<A: Accelerator>(key: &[u8]) -> Result<SecretBuffer<AES128_SCHEDULE_SIZE>> {
    validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;

    let mut words = [0u32; 4 * (AES128_ROUNDS + 1)];

    for i in 0..4 {
        words[i] = endian::u32_from_be_bytes(&key[i * 4..(i + 1) * 4]);
    }

    for i in 4..words.len() {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp = sub_word::<A>(rotate_word(temp)) ^ RCON[i / 4];
        }
        words[i] = words[i - 4] ^ temp;
    }

    let mut schedule = [0u8; AES128_SCHEDULE_SIZE];
    for (i, word) in words.iter().enumerate() {
        schedule[i * 4..(i + 1) * 4].copy_from_slice(&endian::u32_to_be_bytes(*word));
    }
    words.zeroize();

    Ok(SecretBuffer::new(schedule))
}

/// SubBytes step
fn sub_bytes<A: Accelerator>(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = A::sub_byte(*byte);
    }
    // ensure no reordering around our bit-ops
    barrier::compiler_fence_seq_cst();
}

/// Inverse SubBytes step
fn inv_sub_bytes<A: Accelerator>(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = A::inv_sub_byte(*byte);
    }
    barrier::compiler_fence_seq_cst();
}

/// ShiftRows step: row r rotates left by r positions
fn shift_rows(state: &mut [u8; 16]) {
    let src = xform::copy_block(state);
    for r in 0..4 {
        for c in 0..4 {
            state[4 * c + r] = src[4 * ((c + r) % 4) + r];
        }
    }
}

/// Inverse ShiftRows step: row r rotates right by r positions
fn inv_shift_rows(state: &mut [u8; 16]) {
    let src = xform::copy_block(state);
    for r in 0..4 {
        for c in 0..4 {
            state[4 * c + r] = src[4 * ((c + 4 - r) % 4) + r];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

/// GF(2^8) multiplies for InvMixColumns
#[inline(always)]
fn mul9(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ byte
}
#[inline(always)]
fn mul11(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(byte) ^ byte
}
#[inline(always)]
fn mul13(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ byte
}
#[inline(always)]
fn mul14(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ mul2(byte)
}

/// MixColumns step
fn mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);
        column[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        column[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        column[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        column[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

/// InvMixColumns applied to a single 4-byte column
#[inline(always)]
fn inv_mix_word(column: &mut [u8]) {
    let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);
    column[0] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
    column[1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
    column[2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
    column[3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
}

/// Inverse MixColumns step
fn inv_mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_word(column);
    }
}

/// AddRoundKey step
fn add_round_key(state: &mut [u8; 16], round_key_bytes: &[u8]) -> Result<()> {
    validate::min_length("AES round key", round_key_bytes.len(), 16)?;
    for i in 0..16 {
        state[i] ^= round_key_bytes[i];
    }
    Ok(())
}

/// Derive the equivalent-inverse-cipher schedule from the encryption one
///
/// The first and last round keys are copied unchanged; InvMixColumns runs
/// over every 4-byte word of round keys 1 through 9.
fn decrypt_schedule(
    enc_schedule: &SecretBuffer<AES128_SCHEDULE_SIZE>,
) -> SecretBuffer<AES128_SCHEDULE_SIZE> {
    let mut bytes = [0u8; AES128_SCHEDULE_SIZE];
    bytes.copy_from_slice(enc_schedule.as_ref());
    for column in bytes[16..AES128_SCHEDULE_SIZE - 16].chunks_exact_mut(4) {
        inv_mix_word(column);
    }
    SecretBuffer::new(bytes)
}

/// Touch every schedule byte before the first key-dependent access
fn warm_schedule(round_key_bytes: &[u8]) {
    let mut _warm: u8 = 0;
    for &b in round_key_bytes {
        _warm = _warm.wrapping_add(b);
    }
    barrier::compiler_fence_seq_cst();
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// AES-128 encryption half: holds only the forward key schedule
pub struct Aes128Enc<A: Accelerator = Portable> {
    round_keys: SecretBuffer<AES128_SCHEDULE_SIZE>,
    _accel: PhantomData<A>,
}

impl<A: Accelerator> Aes128Enc<A> {
    /// Expand the key into the forward schedule
    pub fn new(key: &SecretBytes<AES128_KEY_SIZE>) -> Result<Self> {
        Ok(Self {
            round_keys: expand_key::<A>(key.as_ref())?,
            _accel: PhantomData,
        })
    }

    /// Encrypt one 16-byte block in place
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let round_key_bytes = self.round_keys.as_ref();
        warm_schedule(round_key_bytes);

        let mut loaded = [0u8; 16];
        loaded.copy_from_slice(block);
        let mut state = xform::copy_block(&loaded);

        add_round_key(&mut state, &round_key_bytes[0..16])?;

        for round in 1..AES128_ROUNDS {
            sub_bytes::<A>(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);

            let offset = round * 16;
            add_round_key(&mut state, &round_key_bytes[offset..offset + 16])?;
        }

        sub_bytes::<A>(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, &round_key_bytes[160..176])?;

        block.copy_from_slice(&state);
        loaded.zeroize();
        state.zeroize();
        Ok(())
    }
}

impl<A: Accelerator> Clone for Aes128Enc<A> {
    fn clone(&self) -> Self {
        Self {
            round_keys: self.round_keys.clone(),
            _accel: PhantomData,
        }
    }
}

impl<A: Accelerator> Zeroize for Aes128Enc<A> {
    fn zeroize(&mut self) {
        self.round_keys.zeroize();
    }
}

impl<A: Accelerator> ZeroizeOnDrop for Aes128Enc<A> {}

/// AES-128 decryption half: holds the equivalent-inverse-cipher schedule
pub struct Aes128Dec<A: Accelerator = Portable> {
    round_keys: SecretBuffer<AES128_SCHEDULE_SIZE>,
    _accel: PhantomData<A>,
}

impl<A: Accelerator> Aes128Dec<A> {
    /// Expand the key and transform it into the decryption schedule
    pub fn new(key: &SecretBytes<AES128_KEY_SIZE>) -> Result<Self> {
        let enc_schedule = expand_key::<A>(key.as_ref())?;
        Ok(Self {
            round_keys: decrypt_schedule(&enc_schedule),
            _accel: PhantomData,
        })
    }

    /// Decrypt one 16-byte block in place
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let round_key_bytes = self.round_keys.as_ref();
        warm_schedule(round_key_bytes);

        let mut loaded = [0u8; 16];
        loaded.copy_from_slice(block);
        let mut state = xform::copy_block(&loaded);

        add_round_key(&mut state, &round_key_bytes[160..176])?;

        for round in (1..AES128_ROUNDS).rev() {
            inv_sub_bytes::<A>(&mut state);
            inv_shift_rows(&mut state);
            inv_mix_columns(&mut state);

            let offset = round * 16;
            add_round_key(&mut state, &round_key_bytes[offset..offset + 16])?;
        }

        inv_sub_bytes::<A>(&mut state);
        inv_shift_rows(&mut state);
        add_round_key(&mut state, &round_key_bytes[0..16])?;

        block.copy_from_slice(&state);
        loaded.zeroize();
        state.zeroize();
        Ok(())
    }
}

impl<A: Accelerator> Clone for Aes128Dec<A> {
    fn clone(&self) -> Self {
        Self {
            round_keys: self.round_keys.clone(),
            _accel: PhantomData,
        }
    }
}

impl<A: Accelerator> Zeroize for Aes128Dec<A> {
    fn zeroize(&mut self) {
        self.round_keys.zeroize();
    }
}

impl<A: Accelerator> ZeroizeOnDrop for Aes128Dec<A> {}

/// AES-128 block cipher with both directions available
pub struct Aes128<A: Accelerator = Portable> {
    enc: Aes128Enc<A>,
    dec: Aes128Dec<A>,
}

impl<A: Accelerator> Clone for Aes128<A> {
    fn clone(&self) -> Self {
        Self {
            enc: self.enc.clone(),
            dec: self.dec.clone(),
        }
    }
}

impl<A: Accelerator> Zeroize for Aes128<A> {
    fn zeroize(&mut self) {
        self.enc.zeroize();
        self.dec.zeroize();
    }
}

impl<A: Accelerator> ZeroizeOnDrop for Aes128<A> {}

impl<A: Accelerator> BlockCipher for Aes128<A> {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<AES128_KEY_SIZE>;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            enc: Aes128Enc::new(key)?,
            dec: Aes128Dec::new(key)?,
        })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.enc.encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.dec.decrypt_block(block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES128_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}
