//! ring.rs - Arithmetic in the convolution ring Z[x]/(x^N - 1)
//!
//! Division, the extended Euclidean algorithm and inversion all run over
//! Z/pZ. Inversion modulo a power of two starts from the inverse modulo 2 and
//! lifts it with Newton iteration, squaring the working modulus each round.

use ntrumls_common::{is_power_of_two, is_prime, mod_inv, modulo};

use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

/// Quotient ring Z[x]/(x^N - 1)
///
/// The ring owns no state beyond its dimension, the cap on loop iterations for
/// division and Euclid, and the reduction polynomial x^N - 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialRing {
    n: usize,
    iteration_limit: usize,
    reduction: Polynomial,
}

/// Default cap on division and Euclid iterations
pub const DEFAULT_ITERATION_LIMIT: usize = 5000;

impl PolynomialRing {
    /// Ring of dimension `n` with the default iteration limit
    pub fn new(n: usize) -> Result<Self> {
        Self::with_iteration_limit(n, DEFAULT_ITERATION_LIMIT)
    }

    /// Ring of dimension `n` with an explicit iteration limit
    pub fn with_iteration_limit(n: usize, iteration_limit: usize) -> Result<Self> {
        validate::parameter(n >= 1, "ring dimension", "must be at least 1")?;
        validate::parameter(iteration_limit >= 1, "iteration limit", "must be at least 1")?;

        let mut coeffs = vec![0i64; n + 1];
        coeffs[0] = -1;
        coeffs[n] = 1;

        Ok(Self {
            n,
            iteration_limit,
            reduction: Polynomial::from(coeffs),
        })
    }

    /// Ring dimension N
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Cap on division and Euclid loop iterations
    pub fn iteration_limit(&self) -> usize {
        self.iteration_limit
    }

    /// The reduction polynomial x^N - 1
    pub fn reduction_polynomial(&self) -> &Polynomial {
        &self.reduction
    }

    fn ensure_in_ring(&self, a: &Polynomial, operation: &'static str) -> Result<()> {
        let degree = a.degree();
        if degree >= self.n {
            return Err(Error::OutOfRing {
                operation,
                degree,
                dimension: self.n,
            });
        }
        Ok(())
    }

    fn finish(&self, r: Polynomial, modulus: Option<i64>) -> Result<Polynomial> {
        let r = r.resize(self.n);
        match modulus {
            Some(m) => {
                validate::modulus("modulus", m)?;
                Ok(r.modulo(m))
            }
            None => Ok(r),
        }
    }

    /// Ring sum, reduced mod `modulus` when given; length N
    pub fn add(&self, a: &Polynomial, b: &Polynomial, modulus: Option<i64>) -> Result<Polynomial> {
        self.ensure_in_ring(a, "ring add")?;
        self.ensure_in_ring(b, "ring add")?;
        self.finish(a.add(b), modulus)
    }

    /// Ring difference, reduced mod `modulus` when given; length N
    pub fn sub(&self, a: &Polynomial, b: &Polynomial, modulus: Option<i64>) -> Result<Polynomial> {
        self.ensure_in_ring(a, "ring sub")?;
        self.ensure_in_ring(b, "ring sub")?;
        self.finish(a.sub(b), modulus)
    }

    /// Cyclic convolution: `out[k] = sum of a[i] * b[j]` over `(i + j) mod N == k`
    ///
    /// With a modulus every accumulation step is reduced into `[0, modulus)`.
    pub fn mul(&self, a: &Polynomial, b: &Polynomial, modulus: Option<i64>) -> Result<Polynomial> {
        self.ensure_in_ring(a, "ring mul")?;
        self.ensure_in_ring(b, "ring mul")?;
        if let Some(m) = modulus {
            validate::modulus("modulus", m)?;
        }

        let n = self.n;
        let a = &a.coeffs()[..a.len().min(n)];
        let b = &b.coeffs()[..b.len().min(n)];
        let m = modulus.map(i128::from);

        // products of residues below 2^32 reach 2^64
        let mut out = vec![0i128; n];

        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                if y == 0 {
                    continue;
                }
                let k = (i + j) % n;
                out[k] = out[k]
                    .checked_add(i128::from(x) * i128::from(y))
                    .ok_or_else(|| Error::param("ring mul", "unreduced coefficient overflow"))?;
                if let Some(m) = m {
                    out[k] = out[k].rem_euclid(m);
                }
            }
        }

        let coeffs = out
            .into_iter()
            .map(|c| {
                i64::try_from(c).map_err(|_| {
                    Error::param("ring mul", "unreduced coefficient exceeds 64 bits")
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Polynomial::from(coeffs))
    }

    /// Long division over Z/pZ, returning `(quotient, remainder)`, both trimmed
    ///
    /// Each step cancels the leading term of the current remainder using the
    /// inverse of b's leading coefficient. Fails with `NonInvertible` when that
    /// coefficient has no inverse mod p, which includes b = 0. p must fit in
    /// 31 bits so that products of residues stay within i64.
    pub fn div(&self, a: &Polynomial, b: &Polynomial, p: i64) -> Result<(Polynomial, Polynomial)> {
        validate::modulus("p", p)?;
        validate::parameter(p <= 1 << 31, "p", "division modulus must fit in 31 bits")?;

        let b = b.modulo(p).trim();
        let u = mod_inv(b.leading_coefficient(), p).ok_or(Error::NonInvertible {
            operation: "ring div",
            modulus: p,
        })?;
        let db = b.degree();

        let mut r = a.modulo(p).trim();
        let mut q = vec![0i64; r.degree().saturating_sub(db) + 1];
        let mut iterations = 0usize;

        while !r.is_zero() && r.degree() >= db {
            if iterations >= self.iteration_limit {
                return Err(Error::IterationLimit {
                    operation: "ring div",
                    limit: self.iteration_limit,
                });
            }
            iterations += 1;

            let shift = r.degree() - db;
            let c = modulo(u * r.leading_coefficient(), p);
            q[shift] = modulo(q[shift] + c, p);

            let mut term = vec![0i64; shift + 1];
            term[shift] = c;
            r = r.sub(&Polynomial::from(term).mul(&b)).modulo(p).trim();
        }

        Ok((Polynomial::from(q).trim(), r))
    }

    /// Extended Euclid against x^N - 1 over Z/pZ
    ///
    /// Returns the Bezout coefficient `s` with `s * a = gcd (mod x^N - 1, p)`,
    /// reduced mod p and trimmed. The coefficient is not normalised by the gcd;
    /// see [`PolynomialRing::egcd_with_gcd`] to obtain the gcd as well.
    pub fn egcd(&self, a: &Polynomial, p: i64) -> Result<Polynomial> {
        self.egcd_with_gcd(a, p).map(|(s, _)| s)
    }

    /// Extended Euclid returning `(s, gcd)`, the gcd being the last non-zero remainder
    pub fn egcd_with_gcd(&self, a: &Polynomial, p: i64) -> Result<(Polynomial, Polynomial)> {
        self.ensure_in_ring(a, "ring egcd")?;
        validate::modulus("p", p)?;

        let mut ra = a.trim();
        let mut rb = self.reduction.clone();
        let mut sa = Polynomial::constant(1);
        let mut sb = Polynomial::zero(1);
        let mut iterations = 0usize;

        loop {
            if iterations >= self.iteration_limit {
                return Err(Error::IterationLimit {
                    operation: "ring egcd",
                    limit: self.iteration_limit,
                });
            }
            iterations += 1;

            let (q, r) = self.div(&ra, &rb, p)?;
            let sc = sa.sub(&q.mul(&sb)).modulo(p).trim();

            ra = rb;
            rb = r;
            sa = sb;
            sb = sc;

            if rb.is_zero() {
                break;
            }
        }

        Ok((sa.modulo(p).trim(), ra.modulo(p).trim()))
    }

    /// Inverse modulo a power of two `q`, lifted from the inverse modulo 2
    pub fn inv_gf2m(&self, a: &Polynomial, q: i64) -> Result<Polynomial> {
        self.ensure_in_ring(a, "ring inverse")?;
        validate::parameter(
            q >= 2 && is_power_of_two(q as u64),
            "q",
            "modulus must be a power of two",
        )?;

        let non_invertible = Error::NonInvertible {
            operation: "ring inverse",
            modulus: q,
        };

        let (mut f, gcd) = self.egcd_with_gcd(a, 2)?;
        if gcd.degree() != 0 || gcd.is_zero() {
            return Err(non_invertible);
        }

        let two = Polynomial::constant(2);
        let mut m = 2i64;
        while m < q {
            m = m.saturating_mul(m).min(q);
            let af = self.mul(a, &f, Some(m))?;
            let t = two.sub(&af).modulo(m);
            f = self.mul(&f, &t, Some(m))?;
        }
        let f = f.modulo(q).resize(self.n);

        let check = self.mul(a, &f, Some(q))?;
        if check.coeff(0) != 1 || check.coeffs()[1..].iter().any(|&c| c != 0) {
            return Err(non_invertible);
        }

        Ok(f)
    }

    /// Inverse of `a` modulo `p` in the ring; length N
    ///
    /// Scalars use the integer inverse, powers of two go through
    /// [`PolynomialRing::inv_gf2m`], and prime moduli use extended Euclid with
    /// the Bezout coefficient normalised by the inverse of the gcd.
    pub fn inv(&self, a: &Polynomial, p: i64) -> Result<Polynomial> {
        self.ensure_in_ring(a, "ring inverse")?;
        validate::modulus("p", p)?;

        let non_invertible = Error::NonInvertible {
            operation: "ring inverse",
            modulus: p,
        };

        if a.degree() == 0 {
            let u = mod_inv(a.coeff(0), p).ok_or(non_invertible)?;
            return Ok(Polynomial::constant(u).resize(self.n));
        }

        if is_power_of_two(p as u64) {
            return self.inv_gf2m(a, p);
        }

        if !is_prime(p as u64) {
            return Err(Error::param(
                "p",
                "inverse requires a prime or a power of two modulus",
            ));
        }

        let (s, gcd) = self.egcd_with_gcd(a, p)?;
        if gcd.degree() != 0 || gcd.is_zero() {
            return Err(non_invertible);
        }
        let c = mod_inv(gcd.coeff(0), p).ok_or(non_invertible)?;

        Ok(s.scale(c).modulo(p).resize(self.n))
    }
}
