//! Polynomial engine over the convolution ring Z[x]/(x^N - 1)
//!
//! [`polynomial::Polynomial`] is a plain integer polynomial with pure
//! arithmetic; [`ring::PolynomialRing`] adds the cyclic reduction, division
//! and inversion built on it.

pub mod polynomial;
pub mod ring;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::polynomial::Polynomial;
    pub use super::ring::PolynomialRing;
    pub use super::sampling::sample_trinary;
    pub use super::serialize::{
        bytes_to_trits, pack_coeffs, packed_len, unpack_coeffs, CoefficientWidth,
    };
}
