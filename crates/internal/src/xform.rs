//! Fixed-size byte-array transforms
//!
//! Named pure functions over 16-byte blocks. `copy_block` returns a fresh
//! copy of its input; `transpose_block` remaps a linear block into the
//! AES column-major layout (and back: it is an involution). Both return a
//! new array, so input and output never alias.

/// Copy a 16-byte block, preserving byte order
pub fn copy_block(block: &[u8; 16]) -> [u8; 16] {
    *block
}

/// Transpose a 16-byte block between linear and column-major order
///
/// Byte `r + 4*c` of the input lands at `c + 4*r` of the output. Applying
/// the function twice yields the original block.
pub fn transpose_block(block: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[c + 4 * r] = block[r + 4 * c];
        }
    }
    out
}
