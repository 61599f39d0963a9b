//! End-to-end tests across the ntrumls crates

use ntrumls_algorithms::{Polynomial, PolynomialRing, SeededSource};
use ntrumls_api::{Error, Signature, SignatureSerialize};
use ntrumls_params::{NTRUMLS_443, NTRUMLS_563};
use ntrumls_sign::{NtruMls, NtruMls443, NtruMls563, NtruMlsSignature, SparseKey};
use ntrumls_tests::*;

#[test]
fn test_textbook_public_key() {
    let ring = PolynomialRing::new(TEXTBOOK_N).unwrap();
    let f = Polynomial::from_coeffs(&TEXTBOOK_F);
    let g = Polynomial::from_coeffs(&TEXTBOOK_G);

    let h = ntru_public_key(&ring, &f, &g, 3, 32).unwrap();
    assert_eq!(h.coeffs(), &TEXTBOOK_H);

    // h * f = p * g (mod q)
    let hf = ring.mul(&h, &f, Some(32)).unwrap();
    assert_eq!(hf, g.scale(3).modulo(32));
}

#[test]
fn test_end_to_end_563() {
    let mut rng = fixed_rng(1);
    let mut scheme: NtruMls = NtruMls::new(NTRUMLS_563).unwrap();
    let keypair = scheme.create(&mut rng).unwrap();

    let signature = scheme.sign(b"foo-bar", &keypair, &mut rng).unwrap();
    assert!(scheme.verify(b"foo-bar", &signature, keypair.public_key()));
    assert!(!scheme.verify(b"foo-bar1", &signature, keypair.public_key()));

    let mut garbage = signature.s().coeffs().to_vec();
    garbage.extend_from_slice(&[7, 7]);
    let garbage = NtruMlsSignature::from(Polynomial::from(garbage));
    assert!(!scheme.verify(b"foo-bar", &garbage, keypair.public_key()));

    let stranger = NtruMls::<ntrumls_algorithms::Sha3_256>::new(NTRUMLS_563)
        .unwrap()
        .generate(&mut rng)
        .unwrap();
    assert!(!scheme.verify(b"foo-bar", &signature, stranger.public_key()));
}

#[test]
fn test_key_transport_between_instances() {
    let mut rng = fixed_rng(2);
    let mut signer: NtruMls = NtruMls::new(NTRUMLS_443).unwrap();
    let keypair = signer.create(&mut rng).unwrap();

    // the private key travels as JSON, the public key and signature as bytes
    let json = signer.export_sparse().unwrap().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    for half in ["f", "g"] {
        for sign in ["pos", "neg"] {
            let indices = parsed[half][sign].as_array().unwrap();
            assert_eq!(indices.len(), if half == "f" && sign == "pos" { 11 } else { 10 });
        }
    }

    let mut restored: NtruMls = NtruMls::new(NTRUMLS_443).unwrap();
    let imported = restored
        .import_sparse(&SparseKey::from_json(&json).unwrap())
        .unwrap();
    assert_eq!(imported, keypair);

    let message = b"transported key";
    let signature = restored.sign(message, &imported, &mut rng).unwrap();
    let sig_bytes = restored.pack_signature(&signature).unwrap();
    let pk_bytes = signer.pack_public_key(keypair.public_key()).unwrap();

    let verifier: NtruMls = NtruMls::new(NTRUMLS_443).unwrap();
    let public = verifier.unpack_public_key(&pk_bytes).unwrap();
    let signature = verifier.unpack_signature(&sig_bytes).unwrap();
    assert!(verifier.verify(message, &signature, &public));
}

#[test]
fn test_wrong_parameter_set_rejected() {
    let mut rng = fixed_rng(3);
    let kp = NtruMls443::keypair(&mut rng).unwrap();
    let sig = NtruMls443::sign(b"message", &kp, &mut rng).unwrap();

    let pk = NtruMls443::public_key(&kp);
    assert!(matches!(
        NtruMls563::verify(b"message", &sig, &pk),
        Err(Error::InvalidSignature { .. })
    ));
    assert!(matches!(
        NtruMls563::sign(b"message", &kp, &mut rng),
        Err(Error::InvalidParameter { .. })
    ));

    let pk_bytes = NtruMls443::serialize_public_key(&pk).unwrap();
    assert!(matches!(
        NtruMls563::deserialize_public_key(&pk_bytes),
        Err(Error::MalformedWireData { .. })
    ));
}

#[test]
fn test_seeded_source_replays_session() {
    let mut source = SeededSource::seed_from_u64(99);
    let kp = NtruMls443::keypair(&mut source).unwrap();
    let checkpoint = source.state();
    let first = NtruMls443::sign(b"replay", &kp, &mut source).unwrap();

    let mut replay = SeededSource::restore(&checkpoint);
    let second = NtruMls443::sign(b"replay", &kp, &mut replay).unwrap();
    assert_eq!(first, second);

    let pk = NtruMls443::public_key(&kp);
    assert!(NtruMls443::verify(b"replay", &second, &pk).is_ok());
}
