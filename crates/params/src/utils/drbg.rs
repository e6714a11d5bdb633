//! Constants for the deterministic random bit generator

/// Maximum number of generate calls between reseeds
pub const DRBG_RESEED_INTERVAL: u64 = 1 << 48;

/// Maximum number of output bytes for a single generate call
pub const DRBG_MAX_REQUEST_SIZE: usize = 1 << 16;
