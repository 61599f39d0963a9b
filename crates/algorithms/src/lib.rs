//! Polynomial ring engine and primitives for the ntrumls library
//!
//! This crate provides the arithmetic the signature scheme is built on:
//! integer polynomials, the convolution ring Z[x]/(x^N - 1) with division,
//! extended Euclid and inversion, coefficient packing, trit expansion,
//! sparse trinary sampling, the SHA3-256 oracle and a seedable random source.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
pub use poly::polynomial::Polynomial;
pub use poly::ring::PolynomialRing;

// Hash oracles
pub mod hash;
pub use hash::Sha3_256;

// Random sources
pub mod rng;
pub use rng::{SeededSource, SourceState};
