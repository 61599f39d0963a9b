//! Random source consumed by key generation and signing
//!
//! Schemes never own their randomness: every operation that needs it takes a
//! `&mut R` where `R: RandomSource`, so callers decide between an operating
//! system generator, a seeded deterministic stream, or a test double.

use crate::error::{Error, Result};
use rand::{CryptoRng, Rng, RngCore};

/// Source of uniform integers and random bytes
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Returns `InvalidParameter` when `min > max`.
    fn range(&mut self, min: u64, max: u64) -> Result<u64>;

    /// Overwrite `dest` with uniformly random bytes
    fn fill_random(&mut self, dest: &mut [u8]);

    /// `len` uniformly random bytes
    fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill_random(&mut out);
        out
    }
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn range(&mut self, min: u64, max: u64) -> Result<u64> {
        if min > max {
            return Err(Error::param(
                "random range",
                format!("empty range [{}, {}]", min, max),
            ));
        }
        Ok(self.gen_range(min..=max))
    }

    fn fill_random(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}
