//! Property-based tests for the convolution ring and its helpers

use ntrumls_algorithms::poly::serialize::{bytes_to_trits, pack_coeffs, trit_count, unpack_coeffs};
use ntrumls_algorithms::{Polynomial, PolynomialRing};
use ntrumls_common::{mod_inv, modulo};
use proptest::prelude::*;

const Q: i64 = 65536;

/// Dimension together with two ring elements of that dimension
fn ring_pair() -> impl Strategy<Value = (usize, Vec<i64>, Vec<i64>)> {
    (2usize..24).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(-500i64..500, n),
            prop::collection::vec(-500i64..500, n),
        )
    })
}

fn ring_triple() -> impl Strategy<Value = (usize, Vec<i64>, Vec<i64>, Vec<i64>)> {
    (2usize..24).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(-500i64..500, n),
            prop::collection::vec(-500i64..500, n),
            prop::collection::vec(-500i64..500, n),
        )
    })
}

/// Trinary element of a ring of dimension 3..20
fn trinary_element() -> impl Strategy<Value = (usize, Vec<i64>)> {
    (3usize..20).prop_flat_map(|n| (Just(n), prop::collection::vec(-1i64..=1, n)))
}

proptest! {
    #[test]
    fn ring_mul_commutes((n, a, b) in ring_pair()) {
        let ring = PolynomialRing::new(n).unwrap();
        let a = Polynomial::from(a);
        let b = Polynomial::from(b);

        prop_assert_eq!(ring.mul(&a, &b, None).unwrap(), ring.mul(&b, &a, None).unwrap());
        prop_assert_eq!(ring.mul(&a, &b, Some(Q)).unwrap(), ring.mul(&b, &a, Some(Q)).unwrap());
    }

    #[test]
    fn ring_mul_distributes_over_add((n, a, b, c) in ring_triple()) {
        let ring = PolynomialRing::new(n).unwrap();
        let a = Polynomial::from(a);
        let b = Polynomial::from(b);
        let c = Polynomial::from(c);

        let lhs = ring.mul(&a, &ring.add(&b, &c, Some(Q)).unwrap(), Some(Q)).unwrap();
        let ab = ring.mul(&a, &b, Some(Q)).unwrap();
        let ac = ring.mul(&a, &c, Some(Q)).unwrap();
        prop_assert_eq!(lhs, ring.add(&ab, &ac, Some(Q)).unwrap());
    }

    #[test]
    fn ring_results_have_dimension_length((n, a, b) in ring_pair()) {
        let ring = PolynomialRing::new(n).unwrap();
        let a = Polynomial::from(a).trim();
        let b = Polynomial::from(b);

        prop_assert_eq!(ring.add(&a, &b, None).unwrap().len(), n);
        prop_assert_eq!(ring.sub(&a, &b, Some(7)).unwrap().len(), n);
        prop_assert_eq!(ring.mul(&a, &b, Some(7)).unwrap().len(), n);
    }

    #[test]
    fn ring_inverse_is_inverse((n, a) in trinary_element(), modulus in prop::sample::select(vec![3i64, 5, 2, 32, 2048])) {
        let ring = PolynomialRing::new(n).unwrap();
        let a = Polynomial::from(a);

        if let Ok(inv) = ring.inv(&a, modulus) {
            prop_assert_eq!(inv.len(), n);
            let one = Polynomial::constant(1).resize(n);
            prop_assert_eq!(ring.mul(&a, &inv, Some(modulus)).unwrap(), one);
        }
    }

    #[test]
    fn pack_unpack_round_trip(
        q in prop::sample::select(vec![3i64, 256, 257, 65536, 1 << 20]),
        raw in prop::collection::vec(any::<i64>(), 0..64),
    ) {
        let poly = Polynomial::from(raw).modulo(q);
        let bytes = pack_coeffs(&poly, q).unwrap();
        prop_assert_eq!(unpack_coeffs(&bytes, poly.len(), q).unwrap(), poly);
    }

    #[test]
    fn trits_are_trinary(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        let trits = bytes_to_trits(&bytes);
        prop_assert_eq!(trits.len(), trit_count(bytes.len()));
        prop_assert!(trits.iter().all(|t| (-1..=1).contains(t)));
    }

    #[test]
    fn modulo_lands_in_range(a in any::<i32>(), m in 1i64..100_000) {
        let r = modulo(a as i64, m);
        prop_assert!((0..m).contains(&r));
        prop_assert_eq!((a as i64 - r) % m, 0);
    }

    #[test]
    fn mod_inv_inverts(a in -10_000i64..10_000, m in 2i64..10_000) {
        if let Some(inv) = mod_inv(a, m) {
            prop_assert_eq!(modulo(a * inv, m), 1 % m);
        }
    }
}
