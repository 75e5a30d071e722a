//! Key pairs and rejection-sampled key generation

use crate::bigint::{format_uint, random_below, Radix};
use crate::ec::{Curve, Point};
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroize;

/// Attempt cap for the rejection-sampling loops
///
/// On any cryptographically sized curve a single rejection is already
/// negligible; the cap exists so a misconfigured curve surfaces as
/// [`Error::RetriesExhausted`] instead of a silent infinite loop, and so
/// tests can assert termination.
pub const MAX_SAMPLING_ATTEMPTS: u32 = 64;

/// A private scalar and its public point
///
/// Invariant: `public == private · G` on the generating curve, with
/// `private` in [1, n) and neither public coordinate zero — enforced by
/// [`generate_keypair`]'s rejection sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: BigUint,
    public: Point,
}

impl KeyPair {
    /// The private scalar
    pub fn private(&self) -> &BigUint {
        &self.private
    }

    /// The public point
    pub fn public(&self) -> &Point {
        &self.public
    }

    /// Render both key halves in the requested radix
    pub fn format(&self, radix: Radix) -> String {
        format!(
            "{{ private: {}, public: {} }}",
            format_uint(&self.private, radix),
            self.public.format(radix),
        )
    }
}

impl Zeroize for KeyPair {
    fn zeroize(&mut self) {
        // BigUint exposes no mutable limb access, so overwriting with zero
        // is the strongest cleanup available for the private scalar.
        self.private = BigUint::zero();
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Radix::Hex))
    }
}

/// Generate a key pair on `curve` by rejection sampling
///
/// Draws a uniform scalar x in [0, n) and computes x·G. The whole draw is
/// rejected — not adjusted — while x is zero or the public point is
/// infinity or has a zero coordinate, so no weak key ever escapes. Gives up
/// with [`Error::RetriesExhausted`] after [`MAX_SAMPLING_ATTEMPTS`]
/// rejections.
pub fn generate_keypair<R: RngCore + CryptoRng>(curve: &Curve, rng: &mut R) -> Result<KeyPair> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let private = random_below(rng, curve.order());
        if private.is_zero() {
            continue;
        }

        let public = curve.mul(curve.generator(), &private);
        let degenerate = match &public {
            Point::Affine { x, y } => x.is_zero() || y.is_zero(),
            Point::Infinity => true,
        };
        if degenerate {
            continue;
        }

        return Ok(KeyPair { private, public });
    }

    Err(Error::RetriesExhausted {
        operation: "key generation",
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}
