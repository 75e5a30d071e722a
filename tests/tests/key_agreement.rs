//! Diffie-Hellman round trips and degenerate-draw rejection

use ecrypt_algorithms::ec::{generate_keypair, PointRelation};
use ecrypt_kem::ecdh::{derive_shared_secret, exchange};
use ecrypt_tests::{frp256v1, seeded_rng, tiny_curve};
use num_traits::Zero;

#[test]
fn agreement_round_trip_on_frp256v1() {
    let curve = frp256v1();
    let mut rng = seeded_rng(101);

    let alice = generate_keypair(&curve, &mut rng).unwrap();
    let bob = generate_keypair(&curve, &mut rng).unwrap();

    let alice_secret = derive_shared_secret(alice.private(), bob.public(), &curve);
    let bob_secret = derive_shared_secret(bob.private(), alice.public(), &curve);

    assert_eq!(
        curve.classify(&alice_secret, &bob_secret),
        PointRelation::Same
    );
    assert!(curve.contains(&alice_secret));
}

#[test]
fn exchange_flow_agrees_on_both_curves() {
    let mut rng = seeded_rng(102);
    for curve in [tiny_curve(), frp256v1()] {
        let secret = exchange(&curve, &mut rng).unwrap();
        assert!(curve.contains(&secret));
    }
}

#[test]
fn generated_keys_are_never_degenerate() {
    // the tiny 19-element group maximizes the chance of a degenerate draw
    // actually occurring, so rejection sampling gets exercised for real
    let curve = tiny_curve();
    let mut rng = seeded_rng(103);

    for _ in 0..500 {
        let pair = generate_keypair(&curve, &mut rng).unwrap();
        assert!(!pair.private().is_zero());
        let (x, y) = pair.public().coordinates().expect("regular public point");
        assert!(!x.is_zero());
        assert!(!y.is_zero());
    }
}

#[test]
fn private_scalars_stay_below_the_order() {
    let curve = frp256v1();
    let mut rng = seeded_rng(104);

    for _ in 0..5 {
        let pair = generate_keypair(&curve, &mut rng).unwrap();
        assert!(pair.private() < curve.order());
    }
}
