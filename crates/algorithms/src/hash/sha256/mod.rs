//! SHA-256 hash function as specified in FIPS PUB 180-4
//!
//! Generic over an [`Accelerator`] for the sigma rotations and the
//! boolean mixing functions. The message schedule and working variables
//! are wiped after every compression, and `finalize` zeroizes the whole
//! hash state once the digest has been produced.

use core::marker::PhantomData;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::accel::{Accelerator, MixMode, Portable};
use crate::error::{validate, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use xcrypt_common::security::{barrier, EphemeralSecret, SecureZeroingType, ZeroizeGuard};
use xcrypt_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA256_STATE_WORDS};

#[cfg(test)]
mod tests;

// SHA-256 round constants
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// SHA-256 hash function state
pub struct Sha256<A: Accelerator = Portable> {
    state: [u32; SHA256_STATE_WORDS],
    buffer: [u8; SHA256_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
    _accel: PhantomData<A>,
}

impl<A: Accelerator> Clone for Sha256<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            buffer: self.buffer,
            buffer_idx: self.buffer_idx,
            total_bytes: self.total_bytes,
            _accel: PhantomData,
        }
    }
}

impl<A: Accelerator> Zeroize for Sha256<A> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_idx.zeroize();
        self.total_bytes.zeroize();
    }
}

impl<A: Accelerator> Drop for Sha256<A> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<A: Accelerator> Sha256<A> {
    fn init_state() -> [u32; SHA256_STATE_WORDS] {
        [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
            0x5be0cd19,
        ]
    }

    fn new() -> Self {
        Sha256 {
            state: Self::init_state(),
            buffer: [0u8; SHA256_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
            _accel: PhantomData,
        }
    }

    fn compress(state: &mut [u32; SHA256_STATE_WORDS], block: &[u8; SHA256_BLOCK_SIZE]) -> Result<()> {
        // message schedule is key-derived material, wipe it on every exit
        let mut w = EphemeralSecret::new([0u32; 64]);

        barrier::compiler_fence_seq_cst();

        for i in 0..16 {
            let start = i * 4;
            validate::max_length("SHA-256 block read", start + 4, SHA256_BLOCK_SIZE)?;
            w[i] = BigEndian::read_u32(&block[start..]);
        }

        for i in 16..64 {
            w[i] = w[i - 16]
                .wrapping_add(A::sigma0(w[i - 15]))
                .wrapping_add(w[i - 7])
                .wrapping_add(A::sigma1(w[i - 2]));
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for i in 0..64 {
            let temp1 = h
                .wrapping_add(A::big_sigma1(e))
                .wrapping_add(A::bool_mix(e, f, g, MixMode::Choice))
                .wrapping_add(K256[i])
                .wrapping_add(w[i]);
            let temp2 =
                A::big_sigma0(a).wrapping_add(A::bool_mix(a, b, c, MixMode::Majority));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        for i in 0..8 {
            state[i] = state[i].wrapping_add(guard[i]);
        }

        barrier::compiler_fence_seq_cst();

        Ok(())
    }

    fn update_internal(&mut self, mut input: &[u8]) -> Result<()> {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA256_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SHA256_BLOCK_SIZE {
                let mut block = [0u8; SHA256_BLOCK_SIZE];
                block.copy_from_slice(&self.buffer);
                Self::compress(&mut self.state, &block)?;
                block.zeroize();
                self.total_bytes += SHA256_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
            }
        }
        Ok(())
    }

    fn finalize_internal(&mut self) -> Result<[u8; SHA256_OUTPUT_SIZE]> {
        self.total_bytes += self.buffer_idx as u64;
        let bit_len = self.total_bytes * 8;

        // padding: 0x80, zeros, then the 64-bit message length
        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= 56 {
            // no room for the length field, spill into an extra block
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let mut block = [0u8; SHA256_BLOCK_SIZE];
            block.copy_from_slice(&self.buffer);
            Self::compress(&mut self.state, &block)?;
            block.zeroize();
            self.buffer = [0u8; SHA256_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..56] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[56..], bit_len);
        let mut block = [0u8; SHA256_BLOCK_SIZE];
        block.copy_from_slice(&self.buffer);
        Self::compress(&mut self.state, &block)?;
        block.zeroize();

        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        for (i, &word) in self.state.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        self.zeroize();
        Ok(out)
    }
}

impl<A: Accelerator> SecureZeroingType for Sha256<A> {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl<A: Accelerator> HashFunction for Sha256<A> {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha256::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let digest = self.finalize_internal()?;
        Ok(Digest::new(digest))
    }
}
