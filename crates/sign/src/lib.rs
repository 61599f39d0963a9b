//! Digital Signature Schemes
//!
//! This crate implements the NTRUMLS modular lattice signature scheme on top
//! of the polynomial ring engine in `ntrumls-algorithms`.

pub mod error;
pub mod pq;

pub use error::{Error, Result};

// Re-exports from post-quantum schemes
pub use pq::ntrumls::{
    KeyPair, NtruMls, NtruMls443, NtruMls563, NtruMlsScheme, NtruMlsSignature, PrivateKey,
    PublicKey, SparseIndices, SparseKey,
};
