//! Elliptic-curve data model and arithmetic
//!
//! Curves are short Weierstrass curves y² = x³ + a·x + b over a prime field
//! F_p, built at run time from caller-supplied parameters. Points are affine
//! coordinate pairs plus a distinguished point at infinity acting as the
//! group identity.
//!
//! The addition entry point dispatches on a three-way relationship
//! classification ([`PointRelation`]) between its operands: equal points are
//! doubled, mutually inverse points sum to infinity, and distinct points go
//! through the chord formula. This classification — not a plain equality
//! test — is what keeps the dispatch exhaustive, including the degenerate
//! self-inverse case y ≡ 0 (mod p).

mod arithmetic;
mod curve;
mod keys;
mod point;

pub use curve::Curve;
pub use keys::{generate_keypair, KeyPair, MAX_SAMPLING_ATTEMPTS};
pub use point::{Point, PointRelation};
