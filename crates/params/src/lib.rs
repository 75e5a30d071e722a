//! Named curve parameter sets for the ecrypt library
//!
//! Parameters are carried as integer literal strings in the same convention
//! the rest of the library accepts at its boundary: `0x`/`0b` prefixes select
//! hexadecimal or binary, no prefix selects decimal. This keeps the tables
//! directly comparable with published test vectors. No validation happens
//! here; a [`weierstrass::CurveParams`] is plain data until a curve is built
//! from it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod weierstrass;

pub use weierstrass::{CurveParams, FRP256V1, NIST_P256, SECP256K1};
