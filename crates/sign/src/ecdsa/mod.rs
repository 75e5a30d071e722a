//! Coordinate-wise ECDSA signing and verification
//!
//! Signing a single value D under private scalar a:
//! draw an ephemeral key pair (k, Q = k·G), then
//!
//! ```text
//! s1 = Q.x mod n
//! s2 = (D + a·s1) · k⁻¹ mod n
//! ```
//!
//! redrawing until both components are non-zero. The pair rides in a
//! [`Point`] as (s1, s2). Verification recomputes
//! Z = (D·s2⁻¹)·G + (s1·s2⁻¹)·A and accepts iff Z is regular with
//! Z.x ≡ s1 (mod n).
//!
//! A message (m1, m2) is signed coordinate-wise: each half gets its own
//! signature point, and the message verifies only if both halves do.

use crate::error::{Error, Result};
use ecrypt_algorithms::bigint::Radix;
use ecrypt_algorithms::ec::{generate_keypair, Curve, Point, MAX_SAMPLING_ATTEMPTS};
use ecrypt_algorithms::error::Error as PrimitiveError;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Outcome of a signature check
///
/// An explicit result value: a mismatch is an expected, ordinary outcome the
/// caller branches on, never an error or a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The signature matches the value and public key
    Valid,
    /// The signature does not match
    Invalid,
}

impl Verification {
    /// Whether the check succeeded
    pub fn is_valid(self) -> bool {
        self == Verification::Valid
    }
}

/// Signature of a two-coordinate message: one signature point per coordinate
///
/// Invariant: each signature point's own coordinates (playing r and s) are
/// non-zero modulo n, enforced by the signing redraw loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSignature {
    sig1: Point,
    sig2: Point,
}

impl MessageSignature {
    /// The signature of the message's first coordinate
    pub fn sig1(&self) -> &Point {
        &self.sig1
    }

    /// The signature of the message's second coordinate
    pub fn sig2(&self) -> &Point {
        &self.sig2
    }

    /// Render both signature points in the requested radix
    pub fn format(&self, radix: Radix) -> String {
        format!(
            "{{ m1: {}, m2: {} }}",
            self.sig1.format(radix),
            self.sig2.format(radix),
        )
    }
}

impl fmt::Display for MessageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Radix::Hex))
    }
}

/// Sign a single value, 0 <= value < n
///
/// Redraws the whole ephemeral key while either signature component is zero
/// modulo n; gives up with a retries-exhausted error after
/// [`MAX_SAMPLING_ATTEMPTS`] rejected draws.
pub fn sign_value<R: RngCore + CryptoRng>(
    value: &BigUint,
    private: &BigUint,
    curve: &Curve,
    rng: &mut R,
) -> Result<Point> {
    if value >= curve.order() {
        return Err(Error::InvalidValue(
            "value must be below the generator order",
        ));
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let ephemeral = generate_keypair(curve, rng)?;
        let (q_x, _) = ephemeral
            .public()
            .coordinates()
            .expect("generated public points are regular");

        let s1 = q_x % curve.order();
        if s1.is_zero() {
            continue;
        }

        // k < n and non-zero, so k is invertible whenever n is prime; a
        // composite n can still make this draw unusable, so redraw.
        let k_inv = match ephemeral.private().modinv(curve.order()) {
            Some(inv) => inv,
            None => continue,
        };

        let s2 = ((value + private * &s1) * k_inv) % curve.order();
        if s2.is_zero() {
            continue;
        }

        return Ok(Point::Affine { x: s1, y: s2 });
    }

    Err(Error::Primitive(PrimitiveError::RetriesExhausted {
        operation: "signature generation",
        attempts: MAX_SAMPLING_ATTEMPTS,
    }))
}

/// Sign a two-coordinate message: each coordinate independently
pub fn sign_message<R: RngCore + CryptoRng>(
    message: &Point,
    private: &BigUint,
    curve: &Curve,
    rng: &mut R,
) -> Result<MessageSignature> {
    let (m1, m2) = message
        .coordinates()
        .ok_or(Error::InvalidValue("message must be a coordinate pair"))?;

    Ok(MessageSignature {
        sig1: sign_value(m1, private, curve, rng)?,
        sig2: sign_value(m2, private, curve, rng)?,
    })
}

/// Check the signature of a single value against a public key
pub fn verify_value(
    value: &BigUint,
    signature: &Point,
    public: &Point,
    curve: &Curve,
) -> Verification {
    let (s1, s2) = match signature.coordinates() {
        Some((s1, s2)) => (s1 % curve.order(), s2 % curve.order()),
        None => return Verification::Invalid,
    };

    // s2 = 0 has no inverse; such a signature can never have been produced
    // by the signing loop
    let s2_inv = match s2.modinv(curve.order()) {
        Some(inv) => inv,
        None => return Verification::Invalid,
    };

    let v1 = (value * &s2_inv) % curve.order();
    let v2 = (&s1 * &s2_inv) % curve.order();

    let z = curve.add(
        &curve.mul(curve.generator(), &v1),
        &curve.mul(public, &v2),
    );

    match z.coordinates() {
        Some((z_x, _)) if z_x % curve.order() == s1 => Verification::Valid,
        _ => Verification::Invalid,
    }
}

/// Check a two-coordinate message signature
///
/// Valid iff both coordinate signatures verify; there is no partial-validity
/// state.
pub fn verify_message(
    message: &Point,
    signature: &MessageSignature,
    public: &Point,
    curve: &Curve,
) -> Verification {
    let (m1, m2) = match message.coordinates() {
        Some(coords) => coords,
        None => return Verification::Invalid,
    };

    let first = verify_value(m1, &signature.sig1, public, curve);
    let second = verify_value(m2, &signature.sig2, public, curve);

    if first.is_valid() && second.is_valid() {
        Verification::Valid
    } else {
        Verification::Invalid
    }
}
