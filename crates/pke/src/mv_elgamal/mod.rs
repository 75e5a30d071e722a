//! Menezes-Vanstone ElGamal encryption
//!
//! The plaintext is a pair (m1, m2) of field elements with 0 < m1, m2 < p,
//! carried as a [`Point`] that does not need to lie on the curve. The sender
//! draws an ephemeral key pair (k, R = k·G), computes the shared point
//! S = k·A against the recipient's public key A, and masks the plaintext
//! coordinate-wise: c1 = S.x·m1, c2 = S.y·m2 (mod p). The recipient recovers
//! S as a·R and unmasks with the coordinate inverses.

use crate::error::{Error, Result};
use ecrypt_algorithms::bigint::{format_uint, Radix};
use ecrypt_algorithms::ec::{generate_keypair, Curve, Point};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// An MV-ElGamal ciphertext: the ephemeral public point plus the two masked
/// plaintext coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    ephemeral: Point,
    c1: BigUint,
    c2: BigUint,
}

impl Ciphertext {
    /// Assemble a ciphertext from its transmitted parts
    pub fn new(ephemeral: Point, c1: BigUint, c2: BigUint) -> Self {
        Ciphertext { ephemeral, c1, c2 }
    }

    /// The sender's ephemeral public point R = k·G
    pub fn ephemeral(&self) -> &Point {
        &self.ephemeral
    }

    /// The first masked coordinate
    pub fn c1(&self) -> &BigUint {
        &self.c1
    }

    /// The second masked coordinate
    pub fn c2(&self) -> &BigUint {
        &self.c2
    }

    /// Render the ciphertext in the requested radix
    pub fn format(&self, radix: Radix) -> String {
        format!(
            "{{ R: {}, c1: {}, c2: {} }}",
            self.ephemeral.format(radix),
            format_uint(&self.c1, radix),
            format_uint(&self.c2, radix),
        )
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Radix::Hex))
    }
}

/// Check a plaintext pair against its domain: 0 < m < p for both halves
fn plaintext_coordinates<'a>(
    message: &'a Point,
    curve: &Curve,
) -> Result<(&'a BigUint, &'a BigUint)> {
    let (m1, m2) = message
        .coordinates()
        .ok_or(Error::InvalidPlaintext("message must be a coordinate pair"))?;
    if m1.is_zero() || m2.is_zero() {
        return Err(Error::InvalidPlaintext("coordinates must be non-zero"));
    }
    if m1 >= curve.prime() || m2 >= curve.prime() {
        return Err(Error::InvalidPlaintext(
            "coordinates must be below the field modulus",
        ));
    }
    Ok((m1, m2))
}

/// Encrypt a two-coordinate message for the holder of `recipient_public`
///
/// The message does not need to lie on the curve; only 0 < m1, m2 < p is
/// required.
pub fn encrypt<R: RngCore + CryptoRng>(
    message: &Point,
    recipient_public: &Point,
    curve: &Curve,
    rng: &mut R,
) -> Result<Ciphertext> {
    let (m1, m2) = plaintext_coordinates(message, curve)?;

    let ephemeral = generate_keypair(curve, rng)?;
    let shared = curve.mul(recipient_public, ephemeral.private());

    let (s_x, s_y) = match shared.coordinates() {
        Some((x, y)) if !x.is_zero() && !y.is_zero() => (x, y),
        _ => return Err(Error::DegenerateKey("encryption shared point")),
    };

    Ok(Ciphertext {
        c1: (s_x * m1) % curve.prime(),
        c2: (s_y * m2) % curve.prime(),
        ephemeral: ephemeral.public().clone(),
    })
}

/// Decrypt a ciphertext with the recipient's private scalar
///
/// Recovers T = private·R, which equals the sender's shared point by
/// Diffie-Hellman agreement, then unmasks each coordinate. A zero coordinate
/// of T has no modular inverse and is reported as [`Error::DegenerateKey`];
/// decryption with a wrong (but non-degenerate) key succeeds and simply
/// yields a plaintext that does not match.
pub fn decrypt(
    recipient_private: &BigUint,
    ciphertext: &Ciphertext,
    curve: &Curve,
) -> Result<Point> {
    let shared = curve.mul(&ciphertext.ephemeral, recipient_private);

    let (t_x, t_y) = match shared.coordinates() {
        Some((x, y)) => (x.clone(), y.clone()),
        None => return Err(Error::DegenerateKey("decryption shared point")),
    };

    let x_inv = t_x
        .modinv(curve.prime())
        .ok_or(Error::DegenerateKey("decryption shared point x"))?;
    let y_inv = t_y
        .modinv(curve.prime())
        .ok_or(Error::DegenerateKey("decryption shared point y"))?;

    Ok(Point::Affine {
        x: (&ciphertext.c1 * x_inv) % curve.prime(),
        y: (&ciphertext.c2 * y_inv) % curve.prime(),
    })
}
