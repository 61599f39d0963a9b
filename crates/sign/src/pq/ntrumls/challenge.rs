//! Challenge derivation
//!
//! The challenge pair `(sp, tp)` is recomputed by signer and verifier from the
//! message and the public key; it is never transmitted.

use ntrumls_algorithms::poly::serialize::{bytes_to_trits, pack_coeffs};
use ntrumls_algorithms::{Polynomial, PolynomialRing};
use ntrumls_api::HashOracle;
use ntrumls_params::NtruMlsParams;

use super::keys::PublicKey;
use crate::error::Result;

/// Challenge pair derived from a message and a public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    /// Target for `s mod p`, coefficients in `[0, p)`
    pub sp: Polynomial,
    /// `h * sp mod q`
    pub tp: Polynomial,
}

/// `pool = H(H(msg) || H(pack(h)))`, expanded to trits, placed in a length-N
/// polynomial and reduced mod p; then `tp = h * sp mod q`.
pub(crate) fn derive<H: HashOracle>(
    params: &NtruMlsParams,
    ring: &PolynomialRing,
    message: &[u8],
    public: &PublicKey,
) -> Result<Challenge> {
    let packed = pack_coeffs(public.h(), params.q)?;
    let message_digest = H::digest(message);
    let key_digest = H::digest(&packed);
    let pool = H::digest_concat(&[message_digest.as_slice(), key_digest.as_slice()]);

    let sp = Polynomial::from(bytes_to_trits(&pool))
        .resize(params.n)
        .modulo(params.p);
    let tp = ring.mul(public.h(), &sp, Some(params.q))?;

    Ok(Challenge { sp, tp })
}
