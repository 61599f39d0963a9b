//! Shared fixtures for the ntrumls integration and property tests

use ntrumls_algorithms::{Polynomial, PolynomialRing};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Textbook NTRU dimension
pub const TEXTBOOK_N: usize = 11;

/// Textbook private polynomial f
pub const TEXTBOOK_F: [i64; 11] = [-1, 1, 1, 0, -1, 0, 1, 0, 0, 1, -1];

/// Textbook private polynomial g
pub const TEXTBOOK_G: [i64; 11] = [-1, 0, 1, 1, 0, 1, 0, 0, -1, 0, -1];

/// `p * f^-1 * g mod 32` for the textbook keys with p = 3
pub const TEXTBOOK_H: [i64; 11] = [8, 25, 22, 20, 12, 24, 15, 19, 12, 19, 16];

/// Deterministic generator for reproducible test runs
pub fn fixed_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `p * f^-1 * g mod q` computed with the public ring operations
pub fn ntru_public_key(
    ring: &PolynomialRing,
    f: &Polynomial,
    g: &Polynomial,
    p: i64,
    q: i64,
) -> ntrumls_algorithms::Result<Polynomial> {
    let fq = ring.inv(f, q)?;
    let pfq = ring.mul(&Polynomial::constant(p), &fq, Some(q))?;
    ring.mul(&pfq, g, Some(q))
}
