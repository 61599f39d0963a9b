//! Hash oracles
//!
//! SHA3-256 backs the challenge derivation and the signature digest
//! comparisons.

use ntrumls_api::HashOracle;
use sha3::Digest;

/// SHA3-256 output size in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// SHA3-256 (FIPS 202) as a [`HashOracle`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256;

impl HashOracle for Sha3_256 {
    const OUTPUT_SIZE: usize = SHA3_256_OUTPUT_SIZE;

    fn name() -> &'static str {
        "SHA3-256"
    }

    fn digest(data: &[u8]) -> Vec<u8> {
        sha3::Sha3_256::digest(data).to_vec()
    }

    fn digest_concat(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = sha3::Sha3_256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().to_vec()
    }
}
