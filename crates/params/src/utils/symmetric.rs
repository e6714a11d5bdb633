//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-128 rounds
pub const AES128_ROUNDS: usize = 10;

/// AES-128 expanded key schedule size in bytes (11 round keys)
pub const AES128_SCHEDULE_SIZE: usize = (AES128_ROUNDS + 1) * AES_BLOCK_SIZE;
