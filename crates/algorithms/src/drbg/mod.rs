//! Deterministic random bit generator driven by a byte sampler
//!
//! The generator owns a [`Sampler`] and mediates every draw through it:
//! seed material is folded in one byte at a time, and each output byte is
//! preceded by a sampler health check. A failed check aborts the whole
//! request and wipes any bytes already written, so callers never observe
//! partial output from an unhealthy source.

use zeroize::Zeroize;

use crate::accel::Sampler;
use crate::error::{validate, Error, Result};
use xcrypt_params::utils::drbg::{DRBG_MAX_REQUEST_SIZE, DRBG_RESEED_INTERVAL};


/// Sampler-backed deterministic random bit generator
pub struct CtrDrbg<S: Sampler> {
    source: S,
    reseed_counter: u64,
}

impl<S: Sampler> CtrDrbg<S> {
    /// Instantiate the generator from a sampler and seed material
    ///
    /// Entropy bytes are folded into the sampler first, then the optional
    /// personalization string. Instantiation fails if the sampler does
    /// not pass its health check afterwards.
    pub fn instantiate(source: S, entropy: &[u8], personalization: &[u8]) -> Result<Self> {
        validate::min_length("entropy input", entropy.len(), 1)?;

        let mut drbg = Self {
            source,
            reseed_counter: 0,
        };
        drbg.absorb(entropy);
        drbg.absorb(personalization);

        if !drbg.source.self_test() {
            return Err(validate::random_failure("drbg instantiate"));
        }
        Ok(drbg)
    }

    /// Reseed the generator with fresh entropy
    ///
    /// Behaves like instantiation over the existing sampler state: the
    /// new material is folded on top and the reseed counter resets.
    pub fn reseed(&mut self, entropy: &[u8], additional_input: &[u8]) -> Result<()> {
        validate::min_length("entropy input", entropy.len(), 1)?;

        self.absorb(entropy);
        self.absorb(additional_input);

        if !self.source.self_test() {
            return Err(validate::random_failure("drbg reseed"));
        }
        self.reseed_counter = 0;
        Ok(())
    }

    /// Fill `out` with generated bytes
    ///
    /// Optional additional input is folded in before any output is drawn.
    /// Every byte is preceded by a sampler health check; on failure the
    /// partially filled output is wiped and an error returned.
    pub fn generate(&mut self, additional_input: &[u8], out: &mut [u8]) -> Result<()> {
        validate::max_length("DRBG request", out.len(), DRBG_MAX_REQUEST_SIZE)?;
        if self.reseed_counter >= DRBG_RESEED_INTERVAL {
            return Err(Error::Processing {
                operation: "drbg generate",
                details: "reseed required",
            });
        }

        self.absorb(additional_input);

        for i in 0..out.len() {
            if !self.source.self_test() {
                out.zeroize();
                return Err(validate::random_failure("drbg generate"));
            }
            out[i] = self.source.sample();
        }

        self.reseed_counter += 1;
        Ok(())
    }

    /// Number of generate calls since instantiation or the last reseed
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    fn absorb(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.source.seed(byte);
        }
    }
}

impl<S: Sampler + Zeroize> CtrDrbg<S> {
    /// Tear down the generator, wiping the sampler state
    pub fn uninstantiate(mut self) {
        self.source.zeroize();
        self.reseed_counter = 0;
    }
}
