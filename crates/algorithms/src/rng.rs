//! Deterministic random source with exportable state
//!
//! [`SeededSource`] wraps a ChaCha20 stream. Its position can be exported as a
//! [`SourceState`] and restored later, which replays the exact same draws.

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a [`SeededSource`]
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceState {
    /// ChaCha20 key
    pub seed: [u8; 32],
    /// Position in the keystream, in 32-bit words
    pub word_pos: u128,
}

/// Seedable ChaCha20 random source
///
/// Implements `RngCore + CryptoRng`, so it is usable anywhere a
/// [`ntrumls_api::RandomSource`] is expected.
#[derive(Debug, Clone)]
pub struct SeededSource {
    inner: ChaCha20Rng,
}

impl SeededSource {
    /// Source keyed by a 32-byte seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Source keyed from a 64-bit value
    pub fn seed_from_u64(state: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(state),
        }
    }

    /// Source keyed from operating system entropy
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Export the current position
    pub fn state(&self) -> SourceState {
        SourceState {
            seed: self.inner.get_seed(),
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild a source at an exported position
    pub fn restore(state: &SourceState) -> Self {
        let mut inner = ChaCha20Rng::from_seed(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner }
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SeededSource {}
