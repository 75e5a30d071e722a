//! Cross-layer error lowering into the shared API error type

use ecrypt_algorithms::ec::{generate_keypair, Curve, MAX_SAMPLING_ATTEMPTS};
use ecrypt_api::Error as ApiError;
use ecrypt_tests::seeded_rng;
use num_bigint::BigUint;

#[test]
fn exhausted_sampling_lowers_to_the_api_error() {
    // n = 1 makes every draw zero, so the cap always trips
    let curve = Curve::from_literals("2", "2", "17", "5", "1", "1").unwrap();
    let mut rng = seeded_rng(401);

    let err = generate_keypair(&curve, &mut rng).unwrap_err();
    let api_err = ApiError::from(err);
    assert_eq!(
        api_err,
        ApiError::RetriesExhausted {
            operation: "key generation",
            attempts: MAX_SAMPLING_ATTEMPTS,
        }
    );
    assert!(api_err.to_string().contains("key generation"));
}

#[test]
fn degenerate_decryption_lowers_distinctly() {
    use ecrypt_pke::mv_elgamal::{decrypt, Ciphertext};
    use ecrypt_tests::tiny_curve;

    let curve = tiny_curve();
    // 7*G = (0, 6); with private = 1 the shared point keeps its zero
    // x-coordinate and the unmasking inverse does not exist
    let seven_g = curve.mul_literal(curve.generator(), "7").unwrap();
    let crafted = Ciphertext::new(seven_g, BigUint::from(5u32), BigUint::from(9u32));

    let err = decrypt(&BigUint::from(1u32), &crafted, &curve).unwrap_err();
    let api_err = ApiError::from(err);
    assert!(matches!(api_err, ApiError::DegenerateKey { .. }));
}

#[test]
fn bad_literals_lower_with_the_offending_text() {
    let err = Curve::from_literals("2", "2", "17q", "5", "1", "19").unwrap_err();
    let api_err = ApiError::from(err);
    assert_eq!(
        api_err,
        ApiError::InvalidLiteral {
            context: "parse_uint",
            literal: "17q".into(),
        }
    );
}
