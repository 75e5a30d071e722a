//! Elliptic-curve primitives over caller-supplied prime-field curves
//!
//! This crate implements the algebraic core of the ecrypt library: points
//! and curves in short Weierstrass form y² = x³ + a·x + b over F_p, the
//! case-distinguishing affine addition law, double-and-add scalar
//! multiplication, curve validation, and rejection-sampled key generation.
//!
//! Curve parameters are supplied by the caller as integer literal strings
//! (see [`bigint::parse_uint`] for the accepted convention) and are not
//! validated beyond a usable modulus; singularity and point-membership
//! checks are available on request. Arithmetic is variable-time by design —
//! this library targets correctness over arbitrary curves, not side-channel
//! resistance.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Arbitrary-precision boundary: literal parsing, radix rendering, sampling
pub mod bigint;
pub use bigint::{format_uint, parse_uint, random_below, Radix};

// Elliptic-curve data model and arithmetic
pub mod ec;
pub use ec::{generate_keypair, Curve, KeyPair, Point, PointRelation, MAX_SAMPLING_ATTEMPTS};
