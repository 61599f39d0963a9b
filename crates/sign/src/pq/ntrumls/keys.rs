//! NTRUMLS key material and its sparse export form

use ntrumls_algorithms::Polynomial;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// NTRUMLS public key `h = p * f^-1 * g (mod q)`
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PublicKey {
    h: Polynomial,
}

impl PublicKey {
    /// The polynomial h
    pub fn h(&self) -> &Polynomial {
        &self.h
    }

    /// Consumes the key and returns h
    pub fn into_polynomial(self) -> Polynomial {
        self.h
    }
}

impl From<Polynomial> for PublicKey {
    fn from(h: Polynomial) -> Self {
        Self { h }
    }
}

/// NTRUMLS private key: the trinary polynomials f and g
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    f: Polynomial,
    g: Polynomial,
}

impl PrivateKey {
    /// Wraps f and g without validation
    pub fn new(f: Polynomial, g: Polynomial) -> Self {
        Self { f, g }
    }

    /// The polynomial f
    pub fn f(&self) -> &Polynomial {
        &self.f
    }

    /// The polynomial g
    pub fn g(&self) -> &Polynomial {
        &self.g
    }
}

/// Private and public halves of an NTRUMLS key
///
/// Signing needs both: the challenge hashes the public key.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Assemble a key pair without validation
    pub fn new(private: PrivateKey, public: PublicKey) -> Self {
        Self { private, public }
    }

    /// Private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Sparse index form of the private half
    pub fn to_sparse(&self) -> SparseKey {
        SparseKey {
            f: SparseIndices::from_trinary(self.private.f()),
            g: SparseIndices::from_trinary(self.private.g()),
        }
    }
}

/// Positions of the +1 and -1 coefficients of a trinary polynomial
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SparseIndices {
    /// Ascending indices of +1 coefficients
    pub pos: Vec<usize>,
    /// Ascending indices of -1 coefficients
    pub neg: Vec<usize>,
}

impl SparseIndices {
    /// Indices of the non-zero coefficients of `poly`
    ///
    /// Coefficients other than -1, 0, 1 are not representable and are skipped;
    /// callers validate trinarity first.
    pub fn from_trinary(poly: &Polynomial) -> Self {
        let mut out = Self::default();
        for (i, &c) in poly.coeffs().iter().enumerate() {
            match c {
                1 => out.pos.push(i),
                -1 => out.neg.push(i),
                _ => {}
            }
        }
        out
    }

    /// Dense length-`n` polynomial with these indices set
    ///
    /// Rejects indices that are out of range or listed twice.
    pub fn to_dense(&self, n: usize) -> Result<Polynomial> {
        let mut coeffs = vec![0i64; n];
        for (indices, value) in [(&self.pos, 1i64), (&self.neg, -1i64)] {
            for &i in indices.iter() {
                if i >= n {
                    return Err(Error::InvalidKey(format!(
                        "index {} out of range for dimension {}",
                        i, n
                    )));
                }
                if coeffs[i] != 0 {
                    return Err(Error::InvalidKey(format!("index {} listed twice", i)));
                }
                coeffs[i] = value;
            }
        }
        Ok(Polynomial::from(coeffs))
    }
}

/// Exported private key: `{"f": {"pos": [...], "neg": [...]}, "g": {...}}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SparseKey {
    /// Indices of f
    pub f: SparseIndices,
    /// Indices of g
    pub g: SparseIndices,
}

impl SparseKey {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// True iff every coefficient is -1, 0 or 1
pub(crate) fn is_trinary(poly: &Polynomial) -> bool {
    poly.gte(-1) && poly.lte(1)
}
