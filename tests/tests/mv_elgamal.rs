//! MV-ElGamal end-to-end round trips

use ecrypt_algorithms::ec::{generate_keypair, Point};
use ecrypt_pke::mv_elgamal::{decrypt, encrypt};
use ecrypt_pke::Error;
use ecrypt_tests::{frp256v1, seeded_rng, tiny_curve};

#[test]
fn round_trip_on_frp256v1() {
    let curve = frp256v1();
    let mut rng = seeded_rng(201);

    // the original demonstration vector: an off-curve coordinate pair
    let message = Point::from_literals(
        "0x5a2f6bb522c82ea7397955e9e8350b0871c7845d9746a4979650231ddb15c005",
        "0xbb63b52f3a8106413bb697073a0c50a7e7ba989656aa8120ec3a7861a6cae9d3",
    )
    .unwrap();

    let recipient = generate_keypair(&curve, &mut rng).unwrap();
    let ciphertext = encrypt(&message, recipient.public(), &curve, &mut rng).unwrap();

    // the masked pair must not leak the plaintext coordinates
    assert_ne!(
        (ciphertext.c1(), ciphertext.c2()),
        message.coordinates().unwrap()
    );

    let decrypted = decrypt(recipient.private(), &ciphertext, &curve).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn repeated_encryptions_of_the_same_message_differ() {
    let curve = frp256v1();
    let mut rng = seeded_rng(202);

    let message = Point::from_literals("0x1234", "0x5678").unwrap();
    let recipient = generate_keypair(&curve, &mut rng).unwrap();

    let first = encrypt(&message, recipient.public(), &curve, &mut rng).unwrap();
    let second = encrypt(&message, recipient.public(), &curve, &mut rng).unwrap();

    // fresh ephemeral keys give fresh masks
    assert_ne!(first.ephemeral(), second.ephemeral());
    assert_ne!((first.c1(), first.c2()), (second.c1(), second.c2()));

    for ciphertext in [first, second] {
        let decrypted = decrypt(recipient.private(), &ciphertext, &curve).unwrap();
        assert_eq!(decrypted, message);
    }
}

#[test]
fn tiny_curve_round_trips_for_every_plaintext() {
    let curve = tiny_curve();
    let mut rng = seeded_rng(203);
    let recipient = generate_keypair(&curve, &mut rng).unwrap();

    for m1 in 1u32..17 {
        for m2 in 1u32..17 {
            let message = Point::Affine {
                x: m1.into(),
                y: m2.into(),
            };
            let ciphertext = encrypt(&message, recipient.public(), &curve, &mut rng).unwrap();
            let decrypted = decrypt(recipient.private(), &ciphertext, &curve).unwrap();
            assert_eq!(decrypted, message, "({}, {})", m1, m2);
        }
    }
}

#[test]
fn wrong_recipient_cannot_read_the_message() {
    let curve = frp256v1();
    let mut rng = seeded_rng(204);

    let message = Point::from_literals("0xdead", "0xbeef").unwrap();
    let recipient = generate_keypair(&curve, &mut rng).unwrap();
    let eavesdropper = generate_keypair(&curve, &mut rng).unwrap();

    let ciphertext = encrypt(&message, recipient.public(), &curve, &mut rng).unwrap();
    match decrypt(eavesdropper.private(), &ciphertext, &curve) {
        Ok(garbage) => assert_ne!(garbage, message),
        Err(Error::DegenerateKey(_)) => {}
        Err(other) => panic!("unexpected error: {}", other),
    }
}
