//! Trait definitions for the ntrumls ecosystem

pub mod hash;
pub mod random;
pub mod signature;

pub use hash::HashOracle;
pub use random::RandomSource;
pub use signature::{Signature, SignatureSerialize};
