//! serialize.rs - Coefficient packing and byte-to-trit expansion

use ntrumls_common::ceil_log2;

use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Fixed byte width used to store one coefficient on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientWidth {
    /// One byte per coefficient (q <= 2^8)
    U8,
    /// Two little-endian bytes per coefficient (q <= 2^16)
    U16,
    /// Four little-endian bytes per coefficient
    U32,
}

impl CoefficientWidth {
    /// Width chosen from the bit length of the modulus
    pub const fn for_modulus(q: i64) -> Self {
        let bits = ceil_log2(q as u64);
        if bits > 16 {
            CoefficientWidth::U32
        } else if bits > 8 {
            CoefficientWidth::U16
        } else {
            CoefficientWidth::U8
        }
    }

    /// Bytes per coefficient
    pub const fn bytes(self) -> usize {
        match self {
            CoefficientWidth::U8 => 1,
            CoefficientWidth::U16 => 2,
            CoefficientWidth::U32 => 4,
        }
    }
}

/// Packed size of `n` coefficients reduced modulo `q`
pub const fn packed_len(n: usize, q: i64) -> usize {
    n * CoefficientWidth::for_modulus(q).bytes()
}

/// Reduce every coefficient into `[0, q)` and write it little-endian
pub fn pack_coeffs(poly: &Polynomial, q: i64) -> Result<Vec<u8>> {
    validate::modulus("q", q)?;
    validate::parameter(q <= 1 << 32, "q", "modulus must fit in 32 bits")?;

    let width = CoefficientWidth::for_modulus(q);
    let mut out = Vec::with_capacity(poly.len() * width.bytes());

    for &c in poly.modulo(q).coeffs() {
        match width {
            CoefficientWidth::U8 => out.push(c as u8),
            CoefficientWidth::U16 => out.extend_from_slice(&(c as u16).to_le_bytes()),
            CoefficientWidth::U32 => out.extend_from_slice(&(c as u32).to_le_bytes()),
        }
    }

    Ok(out)
}

/// Read exactly `n` coefficients packed by [`pack_coeffs`]
///
/// Fails with a length error unless `bytes` holds exactly `n` coefficients.
pub fn unpack_coeffs(bytes: &[u8], n: usize, q: i64) -> Result<Polynomial> {
    validate::modulus("q", q)?;

    let width = CoefficientWidth::for_modulus(q);
    validate::length("packed coefficients", bytes.len(), n * width.bytes())?;

    let coeffs = bytes
        .chunks_exact(width.bytes())
        .map(|chunk| match width {
            CoefficientWidth::U8 => chunk[0] as i64,
            CoefficientWidth::U16 => u16::from_le_bytes([chunk[0], chunk[1]]) as i64,
            CoefficientWidth::U32 => {
                u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as i64
            }
        })
        .collect::<Vec<_>>();

    Ok(Polynomial::from(coeffs))
}

/// Trit pair for each 3-bit group value
const TRIT_PAIRS: [(i64, i64); 8] = [
    (0, 0),
    (0, 1),
    (0, -1),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
];

/// Number of trits [`bytes_to_trits`] yields for `len` input bytes
pub const fn trit_count(len: usize) -> usize {
    len.div_ceil(3) * 16
}

/// Expand bytes into trits in {-1, 0, 1}
///
/// Input is zero-padded to a multiple of 3 bytes. Each 3-byte chunk is read as
/// a big-endian 24-bit integer and split into eight 3-bit groups, most
/// significant first; every group becomes two trits.
pub fn bytes_to_trits(bytes: &[u8]) -> Vec<i64> {
    let mut out = Vec::with_capacity(trit_count(bytes.len()));

    for chunk in bytes.chunks(3) {
        let mut block = [0u8; 3];
        block[..chunk.len()].copy_from_slice(chunk);
        let v = u32::from_be_bytes([0, block[0], block[1], block[2]]);

        for group in 0..8 {
            let t = (v >> (21 - 3 * group)) & 7;
            let (hi, lo) = TRIT_PAIRS[t as usize];
            out.push(hi);
            out.push(lo);
        }
    }

    out
}
