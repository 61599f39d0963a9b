//! NTRUMLS modular lattice signatures
//!
//! Keys and signatures are elements of `Z[x]/(x^N - 1)`. The private key is a
//! pair of trinary polynomials `(f, g)`, the public key is
//! `h = p * f^-1 * g (mod q)`. A signature is a polynomial `s` such that
//! `s = sp (mod p)` for a challenge `sp` hashed from the message and the
//! public key, with `s` and `h * s (mod q)` kept inside the norm bounds of the
//! parameter set.
//!
//! Two entry points:
//! - [`NtruMls`], a stateful scheme over a runtime [`NtruMlsParams`] that
//!   stores the current key pair and exports it in sparse JSON form
//! - [`NtruMlsScheme`], a stateless implementation of the
//!   [`Signature`](ntrumls_api::Signature) traits for a compile-time
//!   parameter set, aliased as [`NtruMls443`] and [`NtruMls563`]
//!
//! Submodules:
//! - `keys.rs`: key types and the sparse export format
//! - `challenge.rs`: derivation of `(sp, tp)`
//! - `encoding.rs`: packed public keys and signatures
//! - `sign.rs`: key generation, the rejection-sampling signer, verification
//! - `scheme.rs`: the stateful [`NtruMls`] type

use core::marker::PhantomData;

use ntrumls_algorithms::poly::serialize::packed_len;
use ntrumls_algorithms::Sha3_256;
use ntrumls_api::{
    Error as ApiError, RandomSource, Result as ApiResult, Signature as SignatureTrait,
    SignatureSerialize,
};
use ntrumls_params::pqc::ntrumls::{NtruMls443Params, NtruMls563Params, NtruMlsParamSet};
use zeroize::Zeroizing;

mod challenge;
mod encoding;
mod keys;
mod scheme;
mod sign;

pub use challenge::Challenge;
pub use encoding::{public_key_bytes, signature_bytes};
pub use keys::{KeyPair, PrivateKey, PublicKey, SparseIndices, SparseKey};
pub use ntrumls_params::NtruMlsParams;
pub use scheme::{NtruMls, NtruMlsSignature};

/// NTRUMLS for the parameter set `P`, hashing with SHA3-256
pub struct NtruMlsScheme<P: NtruMlsParamSet> {
    _params: PhantomData<P>,
}

impl<P: NtruMlsParamSet> NtruMlsScheme<P> {
    fn scheme() -> ApiResult<NtruMls<Sha3_256>> {
        NtruMls::new(P::PARAMS)
    }
}

impl<P: NtruMlsParamSet> SignatureTrait for NtruMlsScheme<P> {
    type PublicKey = PublicKey;
    type SecretKey = KeyPair;
    type SignatureData = NtruMlsSignature;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: RandomSource>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Self::scheme()?.generate(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key().clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.clone()
    }

    fn sign<R: RandomSource>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        Self::scheme()?.sign(message, secret_key, rng)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if Self::scheme()?.verify(message, signature, public_key) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature { context: P::NAME })
        }
    }
}

impl<P: NtruMlsParamSet> SignatureSerialize for NtruMlsScheme<P> {
    const PUBLIC_KEY_SIZE: usize = packed_len(P::PARAMS.n, P::PARAMS.q);
    const SIGNATURE_SIZE: usize = packed_len(P::PARAMS.n, P::PARAMS.q);

    fn serialize_public_key(key: &Self::PublicKey) -> ApiResult<Vec<u8>> {
        Self::scheme()?.pack_public_key(key)
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        Self::scheme()?.unpack_public_key(bytes)
    }

    /// Sparse JSON form of the private half; the public half is recomputed
    /// on import
    fn serialize_secret_key(key: &Self::SecretKey) -> ApiResult<Zeroizing<Vec<u8>>> {
        let json = key.to_sparse().to_json().map_err(ApiError::from)?;
        Ok(Zeroizing::new(json.into_bytes()))
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        let json = core::str::from_utf8(bytes).map_err(|e| ApiError::SerializationError {
            context: "ntrumls key import",
            message: e.to_string(),
        })?;
        let sparse = SparseKey::from_json(json).map_err(ApiError::from)?;
        Self::scheme()?.import_sparse(&sparse)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> ApiResult<Vec<u8>> {
        Self::scheme()?.pack_signature(sig)
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        Self::scheme()?.unpack_signature(bytes)
    }
}

/// NTRUMLS-443
pub type NtruMls443 = NtruMlsScheme<NtruMls443Params>;

/// NTRUMLS-563
pub type NtruMls563 = NtruMlsScheme<NtruMls563Params>;

#[cfg(test)]
mod tests;
