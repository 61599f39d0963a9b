//! Test suite for the NTRUMLS signature scheme

use super::*;
use ntrumls_algorithms::{Polynomial, SeededSource};
use ntrumls_api::Error as ApiError;
use ntrumls_params::{NTRUMLS_443, NTRUMLS_563};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const TEST_MESSAGE: &[u8] = b"foo-bar";

fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xDEADBEEF)
}

fn scheme_563() -> NtruMls {
    NtruMls::new(NTRUMLS_563).unwrap()
}

// ========== Parameter Validation ==========

#[test]
fn test_standard_params_accepted() {
    assert!(NtruMls::<Sha3_256>::new(NTRUMLS_443).is_ok());
    assert!(NtruMls::<Sha3_256>::new(NTRUMLS_563).is_ok());
}

#[test]
fn test_invalid_params_rejected() {
    let cases = [
        NtruMlsParams::new("odd q", 443, 3, 65535, 10, 138, 46),
        NtruMlsParams::new("composite p", 443, 4, 65536, 10, 138, 46),
        NtruMlsParams::new("small N", 100, 3, 65536, 10, 138, 46),
        NtruMlsParams::new("heavy key", 443, 3, 65536, 300, 138, 46),
        NtruMlsParams::new("wide bound", 443, 3, 65536, 10, 40000, 46),
        NTRUMLS_443.with_max_sign_attempts(0),
    ];

    for params in cases {
        let result = NtruMls::<Sha3_256>::new(params);
        assert!(
            matches!(result, Err(ApiError::InvalidParameter { .. })),
            "{} should be rejected",
            params.name
        );
    }
}

// ========== Key Management ==========

#[test]
fn test_export_without_keypair() {
    let scheme = scheme_563();
    assert!(!scheme.has_keypair());
    assert_eq!(
        scheme.export().unwrap_err(),
        ApiError::KeypairMissing { context: "export" }
    );
    assert_eq!(
        scheme.export_sparse().unwrap_err(),
        ApiError::KeypairMissing {
            context: "export_sparse"
        }
    );
}

#[test]
fn test_create_produces_consistent_keys() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    assert!(scheme.has_keypair());
    assert_eq!(scheme.export().unwrap(), &keypair);

    let params = scheme.params();
    let f = keypair.private_key().f();
    let g = keypair.private_key().g();
    let h = keypair.public_key().h();

    assert_eq!(f.len(), params.n);
    assert_eq!(f.coeffs().iter().filter(|&&c| c == 1).count(), params.d + 1);
    assert_eq!(f.coeffs().iter().filter(|&&c| c == -1).count(), params.d);
    assert_eq!(g.coeffs().iter().filter(|&&c| c == 1).count(), params.d);
    assert_eq!(g.coeffs().iter().filter(|&&c| c == -1).count(), params.d);

    // h * f = p * g (mod q)
    let hf = scheme.ring().mul(h, f, Some(params.q)).unwrap();
    let pg = g.scale(params.p).modulo(params.q);
    assert_eq!(hf, pg);
}

#[test]
fn test_sparse_export_import_round_trip() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();

    let json = scheme.export_sparse().unwrap().to_json().unwrap();

    let mut restored = scheme_563();
    let imported = restored
        .import_sparse(&SparseKey::from_json(&json).unwrap())
        .unwrap();
    assert_eq!(imported, keypair);
    assert_eq!(restored.export().unwrap(), &keypair);
}

#[test]
fn test_import_sparse_rejects_bad_indices() {
    let mut scheme = scheme_563();
    let sparse = SparseKey {
        f: SparseIndices {
            pos: vec![0, 563],
            neg: vec![1],
        },
        g: SparseIndices::default(),
    };
    let err = scheme.import_sparse(&sparse).unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter { .. }));
    assert_eq!(err.context(), "ntrumls import");
    assert!(!scheme.has_keypair());
}

#[test]
fn test_import_validates_shape() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.generate(&mut rng).unwrap();

    let short_f = KeyPair::new(
        PrivateKey::new(
            keypair.private_key().f().resize(100),
            keypair.private_key().g().clone(),
        ),
        keypair.public_key().clone(),
    );
    assert!(scheme.import(short_f).is_err());

    let wide_g = KeyPair::new(
        PrivateKey::new(
            keypair.private_key().f().clone(),
            keypair.private_key().g().scale(2),
        ),
        keypair.public_key().clone(),
    );
    assert!(scheme.import(wide_g).is_err());

    let short_h = KeyPair::new(
        keypair.private_key().clone(),
        PublicKey::from(keypair.public_key().h().resize(10)),
    );
    assert!(scheme.import(short_h).is_err());
    assert!(!scheme.has_keypair());

    scheme.import(keypair.clone()).unwrap();
    assert_eq!(scheme.export().unwrap(), &keypair);
}

// ========== Challenge ==========

#[test]
fn test_challenge_shape() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let params = *scheme.params();

    let Challenge { sp, tp } = scheme.challenge(TEST_MESSAGE, keypair.public_key()).unwrap();
    assert_eq!(sp.len(), params.n);
    assert!(sp.gte(0) && sp.lt(params.p));
    // 32-byte digest -> 176 trits; the rest is padding
    assert!(sp.coeffs()[176..].iter().all(|&c| c == 0));

    let expected_tp = scheme
        .ring()
        .mul(keypair.public_key().h(), &sp, Some(params.q))
        .unwrap();
    assert_eq!(tp, expected_tp);

    let again = scheme.challenge(TEST_MESSAGE, keypair.public_key()).unwrap();
    assert_eq!(again.sp, sp);
    let other = scheme.challenge(b"foo-bar1", keypair.public_key()).unwrap();
    assert_ne!(other.sp, sp);
}

// ========== Sign / Verify ==========

#[test]
fn test_sign_verify_563() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let public = keypair.public_key();

    let signature = scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();
    let q = scheme.params().q;
    assert_eq!(signature.s().len(), scheme.params().n);
    assert!(signature.s().gte(0) && signature.s().lt(q));

    assert!(scheme.verify(TEST_MESSAGE, &signature, public));
    assert!(!scheme.verify(b"foo-bar1", &signature, public));

    // trailing garbage coefficients
    let mut extended = signature.s().coeffs().to_vec();
    extended.extend_from_slice(&[1, 2, 3]);
    let extended = NtruMlsSignature::from(Polynomial::from(extended));
    assert!(!scheme.verify(TEST_MESSAGE, &extended, public));

    // a single mutated coefficient
    let mut mutated = signature.s().coeffs().to_vec();
    mutated[0] = (mutated[0] + 1) % q;
    let mutated = NtruMlsSignature::from(Polynomial::from(mutated));
    assert!(!scheme.verify(TEST_MESSAGE, &mutated, public));

    // an unrelated public key
    let other = scheme.generate(&mut rng).unwrap();
    assert!(!scheme.verify(TEST_MESSAGE, &signature, other.public_key()));
}

#[test]
fn test_verify_rejects_bare_challenge() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();

    let challenge = scheme.challenge(TEST_MESSAGE, keypair.public_key()).unwrap();
    let forged = NtruMlsSignature::from(challenge.sp);
    assert!(!scheme.verify(TEST_MESSAGE, &forged, keypair.public_key()));
}

#[test]
fn test_verify_rejects_unreduced_signature() {
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let signature = scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();

    let q = scheme.params().q;
    let shifted = NtruMlsSignature::from(signature.s().add(&Polynomial::filled(1, q)));
    assert!(!scheme.verify(TEST_MESSAGE, &shifted, keypair.public_key()));
}

#[test]
fn test_verify_accepts_shift_by_multiple_of_p() {
    // verification only sees s mod p and every-coefficient bounds, so moving
    // one coefficient by p keeps the signature valid
    let mut scheme = scheme_563();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let signature = scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();
    let p = scheme.params().p;

    let mut shifted = signature.s().coeffs().to_vec();
    shifted[0] += p;
    let shifted = NtruMlsSignature::from(Polynomial::from(shifted));
    assert!(scheme.verify(TEST_MESSAGE, &shifted, keypair.public_key()));

    let mut off_by_one = signature.s().coeffs().to_vec();
    off_by_one[0] += p + 1;
    let off_by_one = NtruMlsSignature::from(Polynomial::from(off_by_one));
    assert!(!scheme.verify(TEST_MESSAGE, &off_by_one, keypair.public_key()));
}

#[test]
fn test_32_bit_modulus() {
    let q = 1i64 << 32;
    let params = NtruMlsParams::new("q32", 443, 3, q, 10, 138, 46);
    let mut scheme = NtruMls::<Sha3_256>::new(params).unwrap();

    // reduced inputs near q must not overflow the convolution
    let s = NtruMlsSignature::from(Polynomial::filled(443, q - 2));
    let public = PublicKey::from(Polynomial::filled(443, q - 1));
    assert!(!scheme.verify(TEST_MESSAGE, &s, &public));

    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let signature = scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();
    assert!(scheme.verify(TEST_MESSAGE, &signature, keypair.public_key()));
    assert_eq!(scheme.pack_signature(&signature).unwrap().len(), 443 * 4);
}

#[test]
fn test_signing_exhausted() {
    // with Bs = q/2 the s-side predicate rejects every candidate whose
    // coefficients are all positive
    let params = NtruMlsParams::new("strict", 443, 3, 65536, 10, 32768, 46).with_max_sign_attempts(4);
    let mut scheme = NtruMls::<Sha3_256>::new(params).unwrap();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();

    assert_eq!(
        scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap_err(),
        ApiError::SigningExhausted {
            context: "ntrumls sign",
            attempts: 4
        }
    );
}

#[test]
fn test_seeded_sources_are_deterministic() {
    let mut first = scheme_563();
    let mut second = scheme_563();

    let mut rng_a = SeededSource::seed_from_u64(42);
    let mut rng_b = SeededSource::seed_from_u64(42);

    let kp_a = first.create(&mut rng_a).unwrap();
    let kp_b = second.create(&mut rng_b).unwrap();
    assert_eq!(kp_a, kp_b);

    let sig_a = first.sign(TEST_MESSAGE, &kp_a, &mut rng_a).unwrap();
    let sig_b = second.sign(TEST_MESSAGE, &kp_b, &mut rng_b).unwrap();
    assert_eq!(sig_a, sig_b);

    // a restored stream continues where the original left off
    let state = rng_a.state();
    let mut resumed = SeededSource::restore(&state);
    let sig_c = first.sign(TEST_MESSAGE, &kp_a, &mut rng_a).unwrap();
    let sig_d = first.sign(TEST_MESSAGE, &kp_a, &mut resumed).unwrap();
    assert_eq!(sig_c, sig_d);
}

// ========== Encoding ==========

#[test]
fn test_packed_sizes_443() {
    let mut scheme = NtruMls::<Sha3_256>::new(NTRUMLS_443).unwrap();
    let mut rng = test_rng();
    let keypair = scheme.create(&mut rng).unwrap();
    let signature = scheme.sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();

    assert_eq!(public_key_bytes(&NTRUMLS_443), 886);
    assert_eq!(signature_bytes(&NTRUMLS_443), 886);

    let pk_bytes = scheme.pack_public_key(keypair.public_key()).unwrap();
    let sig_bytes = scheme.pack_signature(&signature).unwrap();
    assert_eq!(pk_bytes.len(), 886);
    assert_eq!(sig_bytes.len(), 886);

    let public = scheme.unpack_public_key(&pk_bytes).unwrap();
    let unpacked = scheme.unpack_signature(&sig_bytes).unwrap();
    assert_eq!(&public, keypair.public_key());
    assert!(scheme.verify(TEST_MESSAGE, &unpacked, &public));
}

#[test]
fn test_unpack_rejects_wrong_length() {
    let scheme = NtruMls::<Sha3_256>::new(NTRUMLS_443).unwrap();
    assert!(matches!(
        scheme.unpack_public_key(&[0u8; 885]),
        Err(ApiError::MalformedWireData { .. })
    ));
    assert!(matches!(
        scheme.unpack_signature(&[0u8; 887]),
        Err(ApiError::MalformedWireData { .. })
    ));
}

#[test]
fn test_pack_rejects_wrong_dimension() {
    let scheme = NtruMls::<Sha3_256>::new(NTRUMLS_443).unwrap();
    let short = NtruMlsSignature::from(Polynomial::zero(10));
    assert!(scheme.pack_signature(&short).is_err());
    assert!(scheme.pack_public_key(&PublicKey::from(Polynomial::zero(10))).is_err());
}

// ========== Trait Facade ==========

#[test]
fn test_signature_trait_round_trip() {
    let mut rng = test_rng();
    let keypair = NtruMls443::keypair(&mut rng).unwrap();
    let public = NtruMls443::public_key(&keypair);
    let secret = NtruMls443::secret_key(&keypair);

    assert_eq!(NtruMls443::name(), "NTRUMLS-443");

    let signature = NtruMls443::sign(TEST_MESSAGE, &secret, &mut rng).unwrap();
    assert!(NtruMls443::verify(TEST_MESSAGE, &signature, &public).is_ok());
    assert_eq!(
        NtruMls443::verify(b"foo-bar1", &signature, &public).unwrap_err(),
        ApiError::InvalidSignature {
            context: "NTRUMLS-443"
        }
    );
}

#[test]
fn test_signature_serialize() {
    let mut rng = test_rng();
    let keypair = NtruMls443::keypair(&mut rng).unwrap();
    let public = NtruMls443::public_key(&keypair);
    let signature = NtruMls443::sign(TEST_MESSAGE, &keypair, &mut rng).unwrap();

    assert_eq!(NtruMls443::PUBLIC_KEY_SIZE, 886);
    assert_eq!(NtruMls563::SIGNATURE_SIZE, 1126);

    let pk_bytes = NtruMls443::serialize_public_key(&public).unwrap();
    assert_eq!(pk_bytes.len(), NtruMls443::PUBLIC_KEY_SIZE);
    assert_eq!(NtruMls443::deserialize_public_key(&pk_bytes).unwrap(), public);

    let sig_bytes = NtruMls443::serialize_signature(&signature).unwrap();
    assert_eq!(sig_bytes.len(), NtruMls443::SIGNATURE_SIZE);
    assert_eq!(NtruMls443::deserialize_signature(&sig_bytes).unwrap(), signature);

    let sk_bytes = NtruMls443::serialize_secret_key(&keypair).unwrap();
    assert!(sk_bytes.starts_with(b"{\"f\":{\"pos\":["));
    assert_eq!(NtruMls443::deserialize_secret_key(&sk_bytes).unwrap(), keypair);

    assert!(matches!(
        NtruMls443::deserialize_secret_key(&[0xff, 0xfe]),
        Err(ApiError::SerializationError { .. })
    ));
}
