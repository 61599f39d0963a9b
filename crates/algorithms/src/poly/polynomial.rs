//! polynomial.rs - Integer polynomials over an owned coefficient buffer

use core::fmt;

use ntrumls_common::modulo;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial with signed integer coefficients
///
/// Coefficients are stored little-endian: index `i` holds the coefficient of
/// x^i. The buffer may be longer than the true degree; trailing zeros carry no
/// meaning beyond the buffer length, which arithmetic results preserve as
/// documented per operation. Every operation borrows its operands and returns
/// a freshly allocated polynomial.
///
/// Equality (`==`) compares buffers, so `[1, 2]` and `[1, 2, 0]` differ. Use
/// [`Polynomial::trim`] on both sides to compare mathematical values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    coeffs: Vec<i64>,
}

impl Polynomial {
    /// Creates a polynomial from explicit coefficients
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// Creates an all-zero buffer of length `len`
    pub fn zero(len: usize) -> Self {
        Self {
            coeffs: vec![0; len],
        }
    }

    /// Creates a buffer of length `len` with every coefficient set to `value`
    pub fn filled(len: usize, value: i64) -> Self {
        Self {
            coeffs: vec![value; len],
        }
    }

    /// Creates the constant polynomial `c`
    pub fn constant(c: i64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Coefficient slice, lowest degree first
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its buffer
    pub fn into_coeffs(self) -> Vec<i64> {
        self.coeffs
    }

    /// Buffer length
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True when the buffer holds no coefficients
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of x^i, zero past the end of the buffer
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Highest index holding a non-zero coefficient; 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    /// True iff every coefficient is zero (or the buffer is empty)
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Coefficient at [`Polynomial::degree`]
    pub fn leading_coefficient(&self) -> i64 {
        self.coeff(self.degree())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(i64, i64) -> i64) -> Self {
        let len = self.len().max(other.len());
        let coeffs = (0..len).map(|i| op(self.coeff(i), other.coeff(i))).collect();
        Self { coeffs }
    }

    /// Coefficient-wise sum; the shorter operand is padded with zeros
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Coefficient-wise difference; the shorter operand is padded with zeros
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Ordinary (non-cyclic) product, of length `deg(a) + deg(b) + 1`
    pub fn mul(&self, other: &Self) -> Self {
        let da = self.degree();
        let db = other.degree();
        let mut out = vec![0i64; da + db + 1];

        for (i, &a) in self.coeffs.iter().take(da + 1).enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().take(db + 1).enumerate() {
                out[i + j] += a * b;
            }
        }

        Self { coeffs: out }
    }

    /// Every coefficient multiplied by `k`
    pub fn scale(&self, k: i64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|&c| c * k).collect(),
        }
    }

    /// Every coefficient reduced into `[0, m)`
    pub fn modulo(&self, m: i64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|&c| modulo(c, m)).collect(),
        }
    }

    /// Reduce mod `q`, then shift coefficients above `q / 2` down by `q`
    ///
    /// For q = 3 this maps every coefficient into {-1, 0, 1}.
    pub fn center(&self, q: i64) -> Self {
        let half = q / 2;
        Self {
            coeffs: self
                .coeffs
                .iter()
                .map(|&c| {
                    let r = modulo(c, q);
                    if r > half {
                        r - q
                    } else {
                        r
                    }
                })
                .collect(),
        }
    }

    /// Copy padded with zeros, or truncated, to exactly `len` coefficients
    pub fn resize(&self, len: usize) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(len, 0);
        Self { coeffs }
    }

    /// Copy with trailing zeros removed; the zero polynomial trims to empty
    pub fn trim(&self) -> Self {
        let end = self
            .coeffs
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        Self {
            coeffs: self.coeffs[..end].to_vec(),
        }
    }

    // The bound predicates below hold only when EVERY coefficient satisfies
    // the relation. A single coefficient inside the bound makes them false.

    /// True iff every coefficient is greater than `v`
    pub fn gt(&self, v: i64) -> bool {
        self.coeffs.iter().all(|&c| c > v)
    }

    /// True iff every coefficient is greater than or equal to `v`
    pub fn gte(&self, v: i64) -> bool {
        self.coeffs.iter().all(|&c| c >= v)
    }

    /// True iff every coefficient is less than `v`
    pub fn lt(&self, v: i64) -> bool {
        self.coeffs.iter().all(|&c| c < v)
    }

    /// True iff every coefficient is less than or equal to `v`
    pub fn lte(&self, v: i64) -> bool {
        self.coeffs.iter().all(|&c| c <= v)
    }

    /// True iff every coefficient equals `v`
    pub fn all_eq(&self, v: i64) -> bool {
        self.coeffs.iter().all(|&c| c == v)
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coeffs: Vec<i64>) -> Self {
        Self { coeffs }
    }
}

impl From<&[i64]> for Polynomial {
    fn from(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl AsRef<[i64]> for Polynomial {
    fn as_ref(&self) -> &[i64] {
        &self.coeffs
    }
}

/// Renders `-2x^2 + 4x + 3`. Zero terms are skipped unless the alternate
/// flag is set (`{:#}`), which prints every coefficient up to the degree.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for i in (0..=self.degree()).rev() {
            let c = self.coeffs[i];
            if c == 0 && !f.alternate() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}x", c)?,
                _ => write!(f, "{}x^{}", c, i)?,
            }
        }
        Ok(())
    }
}
