//! Public API traits and types for the ntrumls library
//!
//! This crate provides the public API surface shared by every ntrumls crate:
//! the error type, the signature scheme traits, and the two external
//! collaborators a scheme depends on (a random source and a hash oracle).

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{HashOracle, RandomSource, Signature, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::{hash, random, signature};
