//! Diffie-Hellman key agreement on a caller-supplied curve
//!
//! Both participants hold a key pair on the same curve. Each multiplies the
//! other's public point by their own private scalar and obtains the same
//! group element (a·b)·G, which serves as the shared secret.

use crate::error::{Error, Result};
use ecrypt_algorithms::ec::{generate_keypair, Curve, Point, PointRelation};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// Derive the shared secret from one's own private scalar and the peer's
/// public point: `own_private · peer_public`
pub fn derive_shared_secret(own_private: &BigUint, peer_public: &Point, curve: &Curve) -> Point {
    curve.mul(peer_public, own_private)
}

/// Run a complete two-party exchange with fresh keys and return the agreed
/// secret point
///
/// Generates a key pair for each side, derives the secret on both ends and
/// verifies agreement through point classification rather than trusting the
/// algebra. A disagreement means the caller wired the wrong keys together
/// and is reported as [`Error::AgreementMismatch`].
pub fn exchange<R: RngCore + CryptoRng>(curve: &Curve, rng: &mut R) -> Result<Point> {
    let alice = generate_keypair(curve, rng)?;
    let bob = generate_keypair(curve, rng)?;

    let alice_secret = derive_shared_secret(alice.private(), bob.public(), curve);
    let bob_secret = derive_shared_secret(bob.private(), alice.public(), curve);

    if curve.classify(&alice_secret, &bob_secret) != PointRelation::Same {
        return Err(Error::AgreementMismatch);
    }

    Ok(alice_secret)
}
