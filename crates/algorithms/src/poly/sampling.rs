//! sampling.rs - Sparse trinary polynomial sampling

use ntrumls_api::RandomSource;

use super::polynomial::Polynomial;
use crate::error::{Error, Result};

/// Sample a length-`len` polynomial with exactly `pos` coefficients equal to
/// +1 and `neg` equal to -1, all at distinct positions
///
/// Positions are drawn without replacement: each draw picks uniformly among
/// the positions still free.
pub fn sample_trinary<R: RandomSource>(
    rng: &mut R,
    pos: usize,
    neg: usize,
    len: usize,
) -> Result<Polynomial> {
    if pos + neg > len {
        return Err(Error::param(
            "trinary weight",
            format!("{} non-zero coefficients do not fit in length {}", pos + neg, len),
        ));
    }

    let mut coeffs = vec![0i64; len];
    let mut free: Vec<usize> = (0..len).collect();

    for value in core::iter::repeat(1i64).take(pos).chain(core::iter::repeat(-1i64).take(neg)) {
        let pick = rng
            .range(0, (free.len() - 1) as u64)
            .map_err(|_| Error::param("trinary weight", "random range rejected"))?;
        let idx = free.remove(pick as usize);
        coeffs[idx] = value;
    }

    Ok(Polynomial::from(coeffs))
}
