//! Integration tests for the full encrypt/decrypt flow

use toycrypt_api::Pke;
use toycrypt_kem::ecdh::derive_public_key;
use toycrypt_params::TOY_97;
use toycrypt_pke::ecies::{decrypt, encrypt, EciesToy97};
use toycrypt_tests::{seeded_rng, toy_curve};

use toycrypt_algorithms::ec::Scalar;

fn scalar(value: u64) -> Scalar {
    Scalar::new(value, TOY_97.n).unwrap()
}

#[test]
fn two_simulated_parties_exchange_a_message() {
    // the whole demo, end to end: Bob publishes Q, Alice encrypts to it,
    // Bob decrypts with d
    let bob_secret = scalar(7);
    let bob_public = derive_public_key(&TOY_97, &bob_secret).unwrap();

    let alice_ephemeral = scalar(5);
    let message = encrypt(
        &TOY_97,
        "meet me at the whiteboard",
        &alice_ephemeral,
        &bob_public,
    )
    .unwrap();

    // only C1 and the hex ciphertext cross the boundary
    let received = decrypt(
        &TOY_97,
        &message.ciphertext,
        &message.ephemeral_point,
        &bob_secret,
    )
    .unwrap();
    assert_eq!(received, "meet me at the whiteboard");
}

#[test]
fn every_non_degenerate_scalar_pair_round_trips() {
    for d in 1..50u64 {
        for k in 1..50u64 {
            if d * k % 50 == 0 {
                continue;
            }
            let q = derive_public_key(&TOY_97, &scalar(d)).unwrap();
            let message = encrypt(&TOY_97, "hi", &scalar(k), &q).unwrap();
            let plaintext = decrypt(
                &TOY_97,
                &message.ciphertext,
                &message.ephemeral_point,
                &scalar(d),
            )
            .unwrap();
            assert_eq!(plaintext, "hi", "d = {}, k = {}", d, k);
        }
    }
}

#[test]
fn ciphertext_is_lowercase_hex_of_the_plaintext_length() {
    let q = derive_public_key(&TOY_97, &scalar(7)).unwrap();
    let message = encrypt(&TOY_97, "four", &scalar(5), &q).unwrap();
    assert_eq!(message.ciphertext.len(), 8);
    assert!(message
        .ciphertext
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    // and the hex decodes back to exactly the xored bytes
    let bytes = hex::decode(&message.ciphertext).unwrap();
    assert_eq!(bytes.len(), 4);
}

#[test]
fn ephemeral_point_is_on_curve_and_matches_k() {
    let curve = toy_curve();
    let q = derive_public_key(&TOY_97, &scalar(7)).unwrap();
    let message = encrypt(&TOY_97, "hi", &scalar(5), &q).unwrap();
    assert!(curve.is_on_curve(&message.ephemeral_point));
    assert_eq!(
        message.ephemeral_point,
        derive_public_key(&TOY_97, &scalar(5)).unwrap()
    );
}

#[test]
fn trait_level_round_trip_with_fresh_keys() {
    let mut rng = seeded_rng(99);
    let (pk, sk) = EciesToy97::keypair(&TOY_97, &mut rng).unwrap();

    let mut round_trips = 0;
    for _ in 0..20 {
        if let Ok(message) = EciesToy97::encrypt(&TOY_97, &pk, "trait-driven", &mut rng) {
            assert_eq!(
                EciesToy97::decrypt(&TOY_97, &sk, &message).unwrap(),
                "trait-driven"
            );
            round_trips += 1;
        }
    }
    assert!(round_trips > 0);
}

#[test]
fn decrypt_failures_are_descriptive_values_not_panics() {
    let d = scalar(7);
    let c1 = derive_public_key(&TOY_97, &scalar(5)).unwrap();

    // malformed hex
    let err = decrypt(&TOY_97, "78zz4", &c1, &d).unwrap_err();
    assert!(format!("{}", err).contains("hex"));

    // off-curve C1
    let curve = toy_curve();
    let field = *curve.field();
    let off_curve = toycrypt_algorithms::ec::Point::Affine {
        x: field.element(1),
        y: field.element(1),
    };
    let err = decrypt(&TOY_97, "7846", &off_curve, &d).unwrap_err();
    assert!(format!("{}", err).contains("curve"));
}
