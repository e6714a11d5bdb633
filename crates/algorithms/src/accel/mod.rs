//! Primitive accelerator capability
//!
//! The engines in this crate never hard-code their inner byte and word
//! transforms. Instead they are generic over an [`Accelerator`], a set of
//! pure single-value functions a platform can back with specialized
//! instructions. [`Portable`] is the software default and is always
//! available.
//!
//! The DRBG additionally depends on a [`Sampler`], a stateful byte source
//! that can be seeded, health-checked, and drawn from one byte at a time.

use zeroize::Zeroize;

mod portable;

pub use portable::Portable;

#[cfg(test)]
mod tests;

/// Selector for the boolean word-mixing function
///
/// SHA-256's compression function uses both modes: `Majority` for the
/// a/b/c working variables and `Choice` for e/f/g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixMode {
    /// Bitwise majority: `(a & b) ^ (a & c) ^ (b & c)`
    Majority,
    /// Bitwise choice: `(a & b) ^ (!a & c)`
    Choice,
}

/// Platform-specific implementations of the primitive inner transforms
///
/// All functions are pure and operate on a single byte or word, so an
/// implementation can map each one onto a dedicated instruction. Inputs
/// are secret; implementations must not branch or index memory on them.
pub trait Accelerator {
    /// AES forward S-box substitution of a single byte
    fn sub_byte(byte: u8) -> u8;

    /// AES inverse S-box substitution of a single byte
    fn inv_sub_byte(byte: u8) -> u8;

    /// SHA-256 small sigma 0: `rotr(x,7) ^ rotr(x,18) ^ (x >> 3)`
    fn sigma0(x: u32) -> u32;

    /// SHA-256 small sigma 1: `rotr(x,17) ^ rotr(x,19) ^ (x >> 10)`
    fn sigma1(x: u32) -> u32;

    /// SHA-256 big sigma 0: `rotr(x,2) ^ rotr(x,13) ^ rotr(x,22)`
    fn big_sigma0(x: u32) -> u32;

    /// SHA-256 big sigma 1: `rotr(x,6) ^ rotr(x,11) ^ rotr(x,25)`
    fn big_sigma1(x: u32) -> u32;

    /// Boolean three-way word mix in the selected mode
    fn bool_mix(a: u32, b: u32, c: u32, mode: MixMode) -> u32;
}

/// Stateful byte source backing the DRBG
///
/// A sampler absorbs seed bytes one at a time and produces output bytes
/// one at a time, reporting its health before each draw.
pub trait Sampler {
    /// Fold one byte of seed material into the sampler state
    fn seed(&mut self, byte: u8);

    /// Check that the sampler is healthy and able to produce output
    fn self_test(&mut self) -> bool;

    /// Draw one output byte, advancing the sampler state
    fn sample(&mut self) -> u8;
}

/// Software sampler built on a xorshift32 state
///
/// Deterministic given its seed history, which makes DRBG behavior
/// reproducible in tests. Not an entropy source by itself; the caller is
/// responsible for feeding real entropy through [`Sampler::seed`].
#[derive(Debug, Clone, Zeroize)]
pub struct XorShiftSampler {
    state: u32,
}

impl XorShiftSampler {
    /// Create a sampler from an initial state word
    ///
    /// A zero seed is replaced with a fixed nonzero constant, since the
    /// all-zero state is a fixed point of the xorshift step.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x6A09_E667 } else { seed };
        Self { state }
    }
}

impl Sampler for XorShiftSampler {
    fn seed(&mut self, byte: u8) {
        self.state = self.state.rotate_left(8) ^ u32::from(byte);
    }

    fn self_test(&mut self) -> bool {
        self.state != 0
    }

    fn sample(&mut self) -> u8 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x as u8
    }
}
