//! # ntrumls
//!
//! NTRU-style modular lattice signatures over the convolution ring
//! `Z[x]/(x^N - 1)`.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ntrumls = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the NTRUMLS scheme
//! - `serde`: serde derives on polynomials and random source state
//! - `full`: all features enabled, plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ntrumls-api`]: public error type and scheme traits
//! - [`ntrumls-common`]: integer modular arithmetic
//! - [`ntrumls-params`]: named parameter sets
//! - [`ntrumls-algorithms`]: polynomials, the convolution ring, packing, hashing
//! - [`ntrumls-sign`]: key generation, signing and verification

// Core re-exports (always available)
pub use ntrumls_algorithms as algorithms;
pub use ntrumls_api as api;
pub use ntrumls_common as common;
pub use ntrumls_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use ntrumls_sign as sign;

#[cfg(feature = "full")]
pub use rand;

/// Common imports for ntrumls users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{HashOracle, RandomSource, Signature, SignatureSerialize};

    // Ring engine
    pub use crate::algorithms::{Polynomial, PolynomialRing, SeededSource, Sha3_256};

    pub use crate::params::{NtruMlsParams, NTRUMLS_443, NTRUMLS_563};

    #[cfg(feature = "sign")]
    pub use crate::sign::{KeyPair, NtruMls, NtruMls443, NtruMls563, NtruMlsSignature, PublicKey, SparseKey};

    pub use zeroize::Zeroizing;
}
