//! Stateful NTRUMLS scheme bound to a runtime parameter set

use core::marker::PhantomData;

use ntrumls_algorithms::{Polynomial, PolynomialRing, Sha3_256};
use ntrumls_api::error::ResultExt;
use ntrumls_api::{HashOracle, RandomSource, Result as ApiResult};
use ntrumls_params::NtruMlsParams;

use super::challenge::{self, Challenge};
use super::encoding;
use super::keys::{is_trinary, KeyPair, PrivateKey, PublicKey, SparseKey};
use super::sign;
use crate::error::Error;

/// NTRUMLS signature: the polynomial `s`, length N with coefficients in `[0, q)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruMlsSignature(Polynomial);

impl NtruMlsSignature {
    /// The polynomial s
    pub fn s(&self) -> &Polynomial {
        &self.0
    }

    /// Consumes the signature and returns s
    pub fn into_polynomial(self) -> Polynomial {
        self.0
    }
}

impl From<Polynomial> for NtruMlsSignature {
    fn from(s: Polynomial) -> Self {
        Self(s)
    }
}

/// NTRUMLS over a parameter set chosen at runtime
///
/// The scheme starts without a key pair. [`NtruMls::create`],
/// [`NtruMls::import`] and [`NtruMls::import_sparse`] install one; export
/// operations fail with `KeypairMissing` until then. Signing and
/// verification take keys explicitly and work in either state.
#[derive(Clone, Debug)]
pub struct NtruMls<H: HashOracle = Sha3_256> {
    params: NtruMlsParams,
    ring: PolynomialRing,
    keypair: Option<KeyPair>,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashOracle> NtruMls<H> {
    /// Validate `params` and build the ring they describe
    pub fn new(params: NtruMlsParams) -> ApiResult<Self> {
        sign::check_params::<H>(&params)?;
        let ring = PolynomialRing::with_iteration_limit(params.n, params.ring_iteration_limit)
            .with_context("ntrumls parameters")?;
        Ok(Self {
            params,
            ring,
            keypair: None,
            _hash: PhantomData,
        })
    }

    /// Parameter set in use
    pub fn params(&self) -> &NtruMlsParams {
        &self.params
    }

    /// The ring `Z[x]/(x^N - 1)`
    pub fn ring(&self) -> &PolynomialRing {
        &self.ring
    }

    /// True once a key pair has been created or imported
    pub fn has_keypair(&self) -> bool {
        self.keypair.is_some()
    }

    /// Generate a key pair without storing it
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        Ok(sign::keypair_internal(&self.params, &self.ring, rng)?)
    }

    /// Generate a key pair, store it, and return a copy
    pub fn create<R: RandomSource>(&mut self, rng: &mut R) -> ApiResult<KeyPair> {
        let keypair = self.generate(rng)?;
        self.keypair = Some(keypair.clone());
        Ok(keypair)
    }

    /// The stored key pair
    pub fn export(&self) -> ApiResult<&KeyPair> {
        self.keypair.as_ref().ok_or_else(|| {
            Error::KeypairMissing {
                operation: "export",
            }
            .into()
        })
    }

    /// Store an externally supplied key pair after checking its shape
    pub fn import(&mut self, keypair: KeyPair) -> ApiResult<()> {
        self.check_keypair(&keypair)?;
        self.keypair = Some(keypair);
        Ok(())
    }

    fn check_keypair(&self, keypair: &KeyPair) -> Result<(), Error> {
        let n = self.params.n;
        let private = keypair.private_key();
        for (name, poly) in [("f", private.f()), ("g", private.g())] {
            if poly.len() != n {
                return Err(Error::InvalidKey(format!(
                    "{} has {} coefficients, expected {}",
                    name,
                    poly.len(),
                    n
                )));
            }
            if !is_trinary(poly) {
                return Err(Error::InvalidKey(format!("{} is not trinary", name)));
            }
        }

        let h = keypair.public_key().h();
        if h.len() != n {
            return Err(Error::InvalidKeySize {
                expected: n,
                actual: h.len(),
            });
        }
        if !(h.gte(0) && h.lt(self.params.q)) {
            return Err(Error::InvalidKey("h is not reduced modulo q".into()));
        }
        Ok(())
    }

    /// Index-list form of the stored private key
    pub fn export_sparse(&self) -> ApiResult<SparseKey> {
        match &self.keypair {
            Some(keypair) => Ok(keypair.to_sparse()),
            None => Err(Error::KeypairMissing {
                operation: "export_sparse",
            }
            .into()),
        }
    }

    /// Rebuild f and g from index lists, recompute h, store and return the pair
    pub fn import_sparse(&mut self, sparse: &SparseKey) -> ApiResult<KeyPair> {
        let f = sparse.f.to_dense(self.params.n).with_context("ntrumls import")?;
        let g = sparse.g.to_dense(self.params.n).with_context("ntrumls import")?;
        let public = sign::public_from_private(&self.params, &self.ring, &f, &g)
            .with_context("ntrumls import")?;

        let keypair = KeyPair::new(PrivateKey::new(f, g), public);
        self.keypair = Some(keypair.clone());
        Ok(keypair)
    }

    /// Packed public key, `public_key_bytes(params)` long
    pub fn pack_public_key(&self, key: &PublicKey) -> ApiResult<Vec<u8>> {
        Ok(encoding::pack_public_key(&self.params, key)?)
    }

    /// Public key from its packed form
    pub fn unpack_public_key(&self, bytes: &[u8]) -> ApiResult<PublicKey> {
        Ok(encoding::unpack_public_key(&self.params, bytes)?)
    }

    /// Packed signature, `signature_bytes(params)` long
    pub fn pack_signature(&self, signature: &NtruMlsSignature) -> ApiResult<Vec<u8>> {
        Ok(encoding::pack_signature(&self.params, signature.s())?)
    }

    /// Signature from its packed form
    pub fn unpack_signature(&self, bytes: &[u8]) -> ApiResult<NtruMlsSignature> {
        Ok(encoding::unpack_signature(&self.params, bytes)?.into())
    }

    /// Challenge pair `(sp, tp)` for `message` under `public`
    pub fn challenge(&self, message: &[u8], public: &PublicKey) -> ApiResult<Challenge> {
        Ok(challenge::derive::<H>(&self.params, &self.ring, message, public)?)
    }

    /// Sign `message`
    ///
    /// Fails with `SigningExhausted` when every attempt allowed by the
    /// parameter set is rejected.
    pub fn sign<R: RandomSource>(
        &self,
        message: &[u8],
        keypair: &KeyPair,
        rng: &mut R,
    ) -> ApiResult<NtruMlsSignature> {
        self.check_keypair(keypair)?;
        let s = sign::sign_internal::<H, R>(&self.params, &self.ring, message, keypair, rng)?;
        Ok(NtruMlsSignature(s))
    }

    /// Check a signature; malformed input yields `false`
    pub fn verify(&self, message: &[u8], signature: &NtruMlsSignature, public: &PublicKey) -> bool {
        sign::verify_internal::<H>(&self.params, &self.ring, message, signature.s(), public)
    }
}
