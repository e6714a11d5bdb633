//! Portable software accelerator
//!
//! Branch-free implementations of every [`Accelerator`](super::Accelerator)
//! function. The S-box pair is computed algebraically in GF(2⁸) rather
//! than through lookup tables, so no secret-dependent memory access ever
//! occurs.

use super::{Accelerator, MixMode};

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    // always do the full exponentiation, even for x==0
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    // now multiply together x128·x64·x32·x16·x8·x4·x2
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // now mask to zero if original x was zero
    // mask = 0xFF if x!=0, else 0x00
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// Software-only accelerator, available on every target
///
/// The default type parameter for all generic engines in this crate.
pub enum Portable {}

impl Accelerator for Portable {
    /// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
    #[inline(always)]
    fn sub_byte(byte: u8) -> u8 {
        let i = gf_inv(byte);
        i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
    }

    /// AES inverse S-box: undo affine then invert
    #[inline(always)]
    fn inv_sub_byte(byte: u8) -> u8 {
        // undo affine: y = A(i)⊕0x63  ⇒  i = A⁻¹(y)
        let y = byte ^ 0x63;
        // A⁻¹ is convolution by t¹ + t³ + t⁶ mod (t⁸+1)
        let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
        gf_inv(u)
    }

    #[inline(always)]
    fn sigma0(x: u32) -> u32 {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    #[inline(always)]
    fn sigma1(x: u32) -> u32 {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }

    #[inline(always)]
    fn big_sigma0(x: u32) -> u32 {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    #[inline(always)]
    fn big_sigma1(x: u32) -> u32 {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    #[inline(always)]
    fn bool_mix(a: u32, b: u32, c: u32, mode: MixMode) -> u32 {
        match mode {
            MixMode::Majority => (a & b) ^ (a & c) ^ (b & c),
            MixMode::Choice => (a & b) ^ (!a & c),
        }
    }
}
