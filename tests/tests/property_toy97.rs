//! Property-based tests for the Toy-97 engine

use proptest::prelude::*;
use toycrypt_algorithms::codec::{decode_hex, encode_hex};
use toycrypt_algorithms::ec::Point;
use toycrypt_algorithms::ec::{enumerate_points, Scalar};
use toycrypt_algorithms::stream::{xor, Lcg32};
use toycrypt_kem::ecdh::derive_public_key;
use toycrypt_params::TOY_97;
use toycrypt_pke::ecies::{decrypt, encrypt};
use toycrypt_tests::toy_curve;

/// A scalar in the valid range for Toy-97
fn valid_scalar() -> impl Strategy<Value = u64> {
    1..50u64
}

/// An arbitrary point from the 99-element enumeration
fn curve_point() -> impl Strategy<Value = Point> {
    (0..99usize).prop_map(|i| enumerate_points(&TOY_97).unwrap()[i])
}

proptest! {
    #[test]
    fn addition_commutes(p in curve_point(), q in curve_point()) {
        let curve = toy_curve();
        prop_assert_eq!(curve.add(&p, &q), curve.add(&q, &p));
    }

    #[test]
    fn identity_laws_hold(p in curve_point()) {
        let curve = toy_curve();
        prop_assert_eq!(curve.add(&p, &Point::Identity), p);
        prop_assert_eq!(curve.add(&curve.negate(&p), &p), Point::Identity);
    }

    #[test]
    fn addition_closes_over_the_curve(p in curve_point(), q in curve_point()) {
        let curve = toy_curve();
        prop_assert!(curve.is_on_curve(&curve.add(&p, &q)));
    }

    #[test]
    fn scalar_multiplication_commutes(d in any::<u64>(), k in any::<u64>()) {
        // k·(d·G) == d·(k·G) for arbitrary non-negative integers, the
        // algebraic identity the whole key agreement depends on
        let curve = toy_curve();
        let g = curve.generator();
        let dk = curve.scalar_mul(k, &curve.scalar_mul(d, &g));
        let kd = curve.scalar_mul(d, &curve.scalar_mul(k, &g));
        prop_assert_eq!(dk, kd);
    }

    #[test]
    fn keystream_is_deterministic(seed in any::<u32>(), len in 0..512usize) {
        prop_assert_eq!(
            Lcg32::keystream_bytes(seed, len),
            Lcg32::keystream_bytes(seed, len)
        );
    }

    #[test]
    fn xor_with_a_keystream_is_an_involution(
        seed in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let keystream = Lcg32::keystream_bytes(seed, data.len());
        let once = xor(&data, &keystream).unwrap();
        let twice = xor(&once, &keystream).unwrap();
        prop_assert_eq!(twice, data);
    }

    #[test]
    fn hex_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn encrypt_decrypt_round_trips(
        d in valid_scalar(),
        k in valid_scalar(),
        plaintext in ".*"
    ) {
        // pairs whose product is a multiple of the group order collapse
        // the shared point to the identity and are rejected by design
        prop_assume!(d * k % 50 != 0);

        let secret = Scalar::new(d, TOY_97.n).unwrap();
        let ephemeral = Scalar::new(k, TOY_97.n).unwrap();
        let public = derive_public_key(&TOY_97, &secret).unwrap();

        let message = encrypt(&TOY_97, &plaintext, &ephemeral, &public).unwrap();
        let recovered = decrypt(
            &TOY_97,
            &message.ciphertext,
            &message.ephemeral_point,
            &secret,
        )
        .unwrap();
        prop_assert_eq!(recovered, plaintext);
    }
}

#[test]
fn enumeration_is_stable_across_runs() {
    let first = enumerate_points(&TOY_97).unwrap();
    for _ in 0..5 {
        assert_eq!(enumerate_points(&TOY_97).unwrap(), first);
    }
    assert!(!first.is_empty());
}
