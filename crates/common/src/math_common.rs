//! Common mathematical operations on signed integers

/// Canonical residue of `a` modulo `m`, always in `[0, m)`
///
/// Works for negative `a`; `m` must be positive.
#[inline]
pub fn modulo(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `a*x + b*y = g`, where `g` is the greatest
/// common divisor of `a` and `b`.
pub fn egcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut a, mut b) = (a, b);
    let (mut x, mut y, mut u, mut v) = (0i64, 1i64, 1i64, 0i64);

    while a != 0 {
        let q = b.div_euclid(a);
        let r = b.rem_euclid(a);
        let m = x - u * q;
        let n = y - v * q;
        b = a;
        a = r;
        x = u;
        y = v;
        u = m;
        v = n;
    }

    (b, x, y)
}

/// Compute a^(-1) mod m, in `[0, m)`
///
/// Returns `None` when `a` and `m` are not coprime or `m < 2`.
pub fn mod_inv(a: i64, m: i64) -> Option<i64> {
    if m < 2 {
        return None;
    }

    let (g, x, _) = egcd(modulo(a, m), m);
    if g != 1 {
        return None;
    }

    Some(modulo(x, m))
}

/// True when `n` is an exact power of two (1 included)
#[inline]
pub const fn is_power_of_two(n: u64) -> bool {
    n.is_power_of_two()
}

/// Trial-division primality test for small moduli
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest `b` with `2^b >= n`
///
/// `ceil_log2(1) == 0`; `n` must be non-zero.
#[inline]
pub const fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        return 0;
    }
    64 - (n - 1).leading_zeros()
}
