//! # ecrypt
//!
//! Elliptic-curve cryptography over caller-supplied short Weierstrass
//! curves: affine point arithmetic, curve validation, Diffie-Hellman key
//! agreement, MV-ElGamal encryption and a coordinate-wise ECDSA-style
//! signature scheme, all running on arbitrary-precision integers.
//!
//! Curve parameters arrive as integer literal strings (`"0x1a"`, `"26"`,
//! `"0b11010"`), so human-authored test vectors paste straight in:
//!
//! ```
//! use ecrypt::algorithms::ec::Curve;
//!
//! // the 19-element teaching group on y^2 = x^3 + 2x + 2 over F_17
//! let curve = Curve::from_literals("2", "2", "17", "5", "1", "19").unwrap();
//! assert!(!curve.is_singular());
//! assert!(curve.contains(curve.generator()));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ecrypt-api`](api): shared error type
//! - [`ecrypt-params`](params): named curve parameter sets
//! - [`ecrypt-algorithms`](algorithms): bignum boundary + the EC core
//! - [`ecrypt-kem`](kem): Diffie-Hellman key agreement
//! - [`ecrypt-sign`](sign): digital signatures
//! - [`ecrypt-pke`](pke): public key encryption
//!
//! Arithmetic is variable-time; this library favors arbitrary-curve
//! correctness and readability over side-channel resistance and is not a
//! replacement for a hardened fixed-curve implementation.

#![forbid(unsafe_code)]

pub use ecrypt_api as api;
pub use ecrypt_params as params;

pub use ecrypt_algorithms as algorithms;
pub use ecrypt_kem as kem;
pub use ecrypt_sign as sign;
pub use ecrypt_pke as pke;

/// Common imports for ecrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // The arbitrary-precision integer type scalars travel in
    pub use num_bigint::BigUint;

    // Core data model and arithmetic
    pub use crate::algorithms::bigint::{format_uint, parse_uint, random_below, Radix};
    pub use crate::algorithms::ec::{
        generate_keypair, Curve, KeyPair, Point, PointRelation,
    };

    // Named parameter sets
    pub use crate::params::{CurveParams, FRP256V1, NIST_P256, SECP256K1};

    // Protocols
    pub use crate::kem::ecdh::{derive_shared_secret, exchange};
    pub use crate::pke::mv_elgamal::{decrypt, encrypt, Ciphertext};
    pub use crate::sign::ecdsa::{
        sign_message, sign_value, verify_message, verify_value, MessageSignature, Verification,
    };
}
