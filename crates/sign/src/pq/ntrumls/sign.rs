//! Core implementation of NTRUMLS key generation, signing, and verification.
//!
//! Signatures live in the lattice spanned by `(1, h)` modulo q. The signer
//! starts from a random lift `s0` of the challenge `sp`, then moves by a
//! multiple of the private lattice vector `(p*f, p^2*g)` so that
//! `s = sp (mod p)` still holds while `t = h*s (mod q)` stays consistent.
//!
//! Invariants:
//! - `h * f = p * g (mod q)`, so `h * (p*a*f) = p^2*a*g (mod q)`
//! - `s0 + p*a*f` must not wrap modulo q, or `s mod p` no longer equals `sp`
//! - the four norm predicates hold only when EVERY coefficient exceeds the
//!   bound; a single small coefficient keeps a candidate
//!
//! Internal module - use [`super::NtruMls`] or the typed schemes instead.

use ntrumls_algorithms::error::Error as AlgoError;
use ntrumls_algorithms::poly::sampling::sample_trinary;
use ntrumls_algorithms::poly::serialize::{pack_coeffs, trit_count};
use ntrumls_algorithms::{Polynomial, PolynomialRing};
use ntrumls_api::{HashOracle, RandomSource};
use ntrumls_common::{is_power_of_two, is_prime};
use ntrumls_params::NtruMlsParams;
use subtle::ConstantTimeEq;

use super::challenge::{self, Challenge};
use super::keys::{KeyPair, PrivateKey, PublicKey};
use crate::error::{Error, Result};

/// Reject parameter sets the scheme cannot run with
pub(crate) fn check_params<H: HashOracle>(params: &NtruMlsParams) -> Result<()> {
    let fail = |msg: String| Err(Error::InvalidParameter(format!("{}: {}", params.name, msg)));

    if params.p < 2 || !is_prime(params.p as u64) {
        return fail(format!("p = {} must be prime", params.p));
    }
    if params.q <= params.p || !is_power_of_two(params.q as u64) {
        return fail(format!("q = {} must be a power of two above p", params.q));
    }
    if params.q > 1 << 32 {
        return fail(format!("q = {} does not fit in 32 bits", params.q));
    }
    let trits = trit_count(H::OUTPUT_SIZE);
    if params.n < trits {
        return fail(format!(
            "N = {} is smaller than the {} challenge trits",
            params.n, trits
        ));
    }
    if 2 * params.d + 1 > params.n {
        return fail(format!("d = {} does not fit in N = {}", params.d, params.n));
    }
    if params.bs < 0 || params.bt < 0 || params.bs > params.q / 2 || params.bt > params.q / 2 {
        return fail("norm bounds must lie in [0, q/2]".into());
    }
    if params.max_sign_attempts == 0
        || params.max_keygen_attempts == 0
        || params.ring_iteration_limit == 0
    {
        return fail("attempt and iteration limits must be non-zero".into());
    }
    Ok(())
}

/// `Ok(None)` when the ring reports the operand has no inverse
fn try_inverse(ring: &PolynomialRing, a: &Polynomial, modulus: i64) -> Result<Option<Polynomial>> {
    match ring.inv(a, modulus) {
        Ok(inv) => Ok(Some(inv)),
        Err(AlgoError::NonInvertible { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Public key for the private pair `(f, g)`: `h = (p * f^-1 mod q) * g mod q`
pub(crate) fn public_from_private(
    params: &NtruMlsParams,
    ring: &PolynomialRing,
    f: &Polynomial,
    g: &Polynomial,
) -> Result<PublicKey> {
    let fq = ring.inv(f, params.q)?;
    let pfq = ring.mul(&Polynomial::constant(params.p), &fq, Some(params.q))?;
    Ok(PublicKey::from(ring.mul(&pfq, g, Some(params.q))?))
}

/// Key generation
///
/// f carries d+1 ones and d minus-ones, g carries d of each. f must be
/// invertible modulo both q and p; fresh draws are taken until it is, up to
/// the configured number of attempts.
pub(crate) fn keypair_internal<R: RandomSource>(
    params: &NtruMlsParams,
    ring: &PolynomialRing,
    rng: &mut R,
) -> Result<KeyPair> {
    let (n, d) = (params.n, params.d);

    for _ in 0..params.max_keygen_attempts {
        let f = sample_trinary(rng, d + 1, d, n)?;
        let g = sample_trinary(rng, d, d, n)?;

        let Some(fq) = try_inverse(ring, &f, params.q)? else {
            continue;
        };
        if try_inverse(ring, &f, params.p)?.is_none() {
            continue;
        }

        let pfq = ring.mul(&Polynomial::constant(params.p), &fq, Some(params.q))?;
        let h = ring.mul(&pfq, &g, Some(params.q))?;

        return Ok(KeyPair::new(PrivateKey::new(f, g), PublicKey::from(h)));
    }

    Err(Error::Algorithm(AlgoError::NonInvertible {
        operation: "ntrumls keygen",
        modulus: params.q,
    }))
}

/// Signing by rejection sampling
///
/// Each attempt draws a fresh lift `r`; the loop ends with `SigningExhausted`
/// after `max_sign_attempts` rejected candidates.
pub(crate) fn sign_internal<H: HashOracle, R: RandomSource>(
    params: &NtruMlsParams,
    ring: &PolynomialRing,
    message: &[u8],
    keypair: &KeyPair,
    rng: &mut R,
) -> Result<Polynomial> {
    let (n, p, q) = (params.n, params.p, params.q);
    let half = q / 2;
    let f = keypair.private_key().f();
    let g = keypair.private_key().g();
    let h = keypair.public_key().h();

    let Challenge { sp, tp } = challenge::derive::<H>(params, ring, message, keypair.public_key())?;

    // g(1) = 0, so g has no true inverse mod p; the Bezout coefficient stands in
    let g_inv = ring.egcd(g, p)?;

    // floor(q / 2p + 1/2)
    let r_max = ((q + p) / (2 * p)) as u64;

    for _ in 0..params.max_sign_attempts {
        let r = rng.range(0, r_max)? as i64;

        let s0 = sp.add(&Polynomial::filled(n, p * r));
        let t0 = ring.mul(h, &s0, Some(q))?;

        let target = tp.sub(&t0).modulo(p);
        let a = ring.mul(&g_inv, &target, Some(p))?.center(p);

        let af = ring.mul(&a, f, None)?.scale(p);
        let ag = ring.mul(&a, g, None)?.scale(p * p);

        let s_lift = s0.add(&af);
        let s = s_lift.modulo(q);
        let t = t0.add(&ag).modulo(q);

        if af.gt(params.bs) || ag.gt(params.bt) || s.gt(half - params.bs) || t.gt(half - params.bt) {
            continue;
        }

        // a wrapped lift breaks s = sp (mod p)
        if !(s_lift.gte(0) && s_lift.lt(q)) || s == sp {
            continue;
        }

        return Ok(s);
    }

    Err(Error::SigningExhausted {
        attempts: params.max_sign_attempts,
    })
}

fn digest_of<H: HashOracle>(poly: &Polynomial, q: i64) -> Option<Vec<u8>> {
    pack_coeffs(poly, q).ok().map(|bytes| H::digest(&bytes))
}

/// Verification; never errors, any malformed input yields `false`
pub(crate) fn verify_internal<H: HashOracle>(
    params: &NtruMlsParams,
    ring: &PolynomialRing,
    message: &[u8],
    s: &Polynomial,
    public: &PublicKey,
) -> bool {
    let (n, p, q) = (params.n, params.p, params.q);
    let half = q / 2;

    if s.len() != n || public.h().len() != n {
        return false;
    }
    if !(s.gte(0) && s.lt(q)) {
        return false;
    }

    let Ok(Challenge { sp, .. }) = challenge::derive::<H>(params, ring, message, public) else {
        return false;
    };
    let Ok(t) = ring.mul(public.h(), s, Some(q)) else {
        return false;
    };

    if s.gt(half - params.bs) || t.gt(half - params.bt) {
        return false;
    }

    let (Some(sp_digest), Some(s_digest), Some(s_mod_p_digest)) = (
        digest_of::<H>(&sp, q),
        digest_of::<H>(s, q),
        digest_of::<H>(&s.modulo(p), q),
    ) else {
        return false;
    };

    // s itself must not be the bare challenge
    if bool::from(s_digest.as_slice().ct_eq(sp_digest.as_slice())) {
        return false;
    }

    bool::from(s_mod_p_digest.as_slice().ct_eq(sp_digest.as_slice()))
}
