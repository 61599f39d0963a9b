//! Wire encoding of public keys and signatures
//!
//! Both are length-N coefficient vectors packed at a fixed width chosen from
//! the bit length of q (two bytes per coefficient for q = 2^16).

use ntrumls_algorithms::poly::serialize::{pack_coeffs, packed_len, unpack_coeffs};
use ntrumls_algorithms::{validate, Polynomial};
use ntrumls_params::NtruMlsParams;

use super::keys::PublicKey;
use crate::error::{Error, Result};

/// Packed public key size in bytes
pub const fn public_key_bytes(params: &NtruMlsParams) -> usize {
    packed_len(params.n, params.q)
}

/// Packed signature size in bytes
pub const fn signature_bytes(params: &NtruMlsParams) -> usize {
    packed_len(params.n, params.q)
}

pub(crate) fn pack_public_key(params: &NtruMlsParams, key: &PublicKey) -> Result<Vec<u8>> {
    if key.h().len() != params.n {
        return Err(Error::InvalidKeySize {
            expected: params.n,
            actual: key.h().len(),
        });
    }
    Ok(pack_coeffs(key.h(), params.q)?)
}

pub(crate) fn unpack_public_key(params: &NtruMlsParams, bytes: &[u8]) -> Result<PublicKey> {
    validate::length("ntrumls public key", bytes.len(), public_key_bytes(params))?;
    Ok(PublicKey::from(unpack_coeffs(bytes, params.n, params.q)?))
}

pub(crate) fn pack_signature(params: &NtruMlsParams, s: &Polynomial) -> Result<Vec<u8>> {
    if s.len() != params.n {
        return Err(Error::InvalidSignatureSize {
            expected: params.n,
            actual: s.len(),
        });
    }
    Ok(pack_coeffs(s, params.q)?)
}

pub(crate) fn unpack_signature(params: &NtruMlsParams, bytes: &[u8]) -> Result<Polynomial> {
    validate::length("ntrumls signature", bytes.len(), signature_bytes(params))?;
    Ok(unpack_coeffs(bytes, params.n, params.q)?)
}
