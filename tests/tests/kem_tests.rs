//! Integration tests for the key-agreement layer

use toycrypt_api::Kem;
use toycrypt_kem::ecdh::{self, EcdhToy97};
use toycrypt_params::{CurveParams, TOY_97};
use toycrypt_tests::{seeded_rng, toy_curve};

#[test]
fn the_claimed_group_order_holds() {
    // n is trusted everywhere else in the workspace; this is where the
    // trust is actually checked
    assert!(toy_curve().verify_generator_order());
}

#[test]
fn ecdh_agreement_over_many_random_keypairs() {
    let mut rng = seeded_rng(2024);
    let mut agreements = 0;
    for _ in 0..1000 {
        let alice = EcdhToy97::keypair(&TOY_97, &mut rng).unwrap();
        let bob = EcdhToy97::keypair(&TOY_97, &mut rng).unwrap();

        let alice_side = ecdh::shared_seed(&TOY_97, alice.secret(), &bob.public());
        let bob_side = ecdh::shared_seed(&TOY_97, bob.secret(), &alice.public());

        match (alice_side, bob_side) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.value(), b.value());
                agreements += 1;
            }
            (Err(_), Err(_)) => {
                // both sides must agree even about the degenerate case
            }
            (a, b) => panic!("one-sided failure: {:?} vs {:?}", a, b),
        }
    }
    assert!(agreements > 500, "too few non-degenerate keypairs: {}", agreements);
}

#[test]
fn kem_flow_via_the_trait() {
    let mut rng = seeded_rng(7);
    let recipient = EcdhToy97::keypair(&TOY_97, &mut rng).unwrap();
    let pk = EcdhToy97::public_key(&recipient);
    let sk = EcdhToy97::secret_key(&recipient);

    let mut agreed = 0;
    for _ in 0..50 {
        if let Ok((c1, sender_seed)) = EcdhToy97::encapsulate(&TOY_97, &mut rng, &pk) {
            let receiver_seed = EcdhToy97::decapsulate(&TOY_97, &sk, &c1).unwrap();
            assert_eq!(sender_seed, receiver_seed);
            agreed += 1;
        }
    }
    assert!(agreed > 0, "no encapsulation attempt succeeded");
}

#[test]
fn adversarial_parameters_are_usable_for_probing() {
    // tests may substitute alternate parameter sets; a base point that is
    // not on the curve must be caught at construction
    let bogus = CurveParams {
        g_x: 1,
        g_y: 1,
        ..TOY_97
    };
    assert!(toycrypt_algorithms::ec::Curve::new(&bogus).is_err());

    // a wrong order claim is constructible but fails verification
    let wrong_order = CurveParams { n: 51, ..TOY_97 };
    let curve = toycrypt_algorithms::ec::Curve::new(&wrong_order).unwrap();
    assert!(!curve.verify_generator_order());
}
