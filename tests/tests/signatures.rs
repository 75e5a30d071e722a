//! Signature scheme end-to-end checks

use ecrypt_algorithms::ec::{generate_keypair, Point};
use ecrypt_sign::ecdsa::{sign_message, verify_message, Verification};
use ecrypt_tests::{frp256v1, seeded_rng, tiny_curve};

#[test]
fn round_trip_on_frp256v1() {
    let curve = frp256v1();
    let mut rng = seeded_rng(301);

    let message = Point::from_literals(
        "0x4815abc84c4c84c841c5c41c8de48d48ed48f4b84f4b4f84158184a14515bf51",
        "0xa254589855825fd2f52d5f2e52d25f52a525255a555c5c5d5c5dd4e4f4f45544",
    )
    .unwrap();

    let signer = generate_keypair(&curve, &mut rng).unwrap();
    let signature = sign_message(&message, signer.private(), &curve, &mut rng).unwrap();

    assert_eq!(
        verify_message(&message, &signature, signer.public(), &curve),
        Verification::Valid
    );
}

#[test]
fn any_coordinate_change_invalidates() {
    let curve = frp256v1();
    let mut rng = seeded_rng(302);

    let message = Point::from_literals("0x1111", "0x2222").unwrap();
    let signer = generate_keypair(&curve, &mut rng).unwrap();
    let signature = sign_message(&message, signer.private(), &curve, &mut rng).unwrap();

    let (m1, m2) = message.coordinates().unwrap();
    let tampered_first = Point::Affine {
        x: m1 + 1u32,
        y: m2.clone(),
    };
    let tampered_second = Point::Affine {
        x: m1.clone(),
        y: m2 + 1u32,
    };

    // no partial validity: one bad half invalidates the whole message
    for altered in [tampered_first, tampered_second] {
        assert_eq!(
            verify_message(&altered, &signature, signer.public(), &curve),
            Verification::Invalid
        );
    }
}

#[test]
fn swapped_signature_halves_invalidate() {
    let curve = frp256v1();
    let mut rng = seeded_rng(303);

    // sign (m, m') and verify against (m', m): each half checks the other
    // coordinate's signature and must fail unless m = m'
    let message = Point::from_literals("0xaaaa", "0xbbbb").unwrap();
    let swapped = Point::from_literals("0xbbbb", "0xaaaa").unwrap();

    let signer = generate_keypair(&curve, &mut rng).unwrap();
    let signature = sign_message(&message, signer.private(), &curve, &mut rng).unwrap();

    assert_eq!(
        verify_message(&swapped, &signature, signer.public(), &curve),
        Verification::Invalid
    );
}

#[test]
fn tiny_curve_signatures_verify_for_all_messages() {
    let curve = tiny_curve();
    let mut rng = seeded_rng(304);
    let signer = generate_keypair(&curve, &mut rng).unwrap();

    for m1 in 0u32..19 {
        for m2 in 0u32..19 {
            let message = Point::Affine {
                x: m1.into(),
                y: m2.into(),
            };
            let signature = sign_message(&message, signer.private(), &curve, &mut rng).unwrap();
            assert!(
                verify_message(&message, &signature, signer.public(), &curve).is_valid(),
                "({}, {})",
                m1,
                m2
            );
        }
    }
}
