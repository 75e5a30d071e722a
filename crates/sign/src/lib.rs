//! Digital signatures for the ecrypt library
//!
//! An ECDSA-style scheme over caller-supplied curves with one twist
//! inherited from the system's message model: a message is itself a
//! two-coordinate point (m1, m2), and each coordinate is signed
//! independently, producing a pair of signature points rather than a single
//! (r, s) scalar pair.
//!
//! A failed check is an ordinary [`Verification::Invalid`] result value, not
//! an error.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::{
    sign_message, sign_value, verify_message, verify_value, MessageSignature, Verification,
};
pub use error::{Error, Result};
