//! Public key encryption for the ecrypt library
//!
//! Implements the Menezes-Vanstone variant of elliptic-curve ElGamal.
//! Where plain EC-ElGamal must first map the plaintext onto a curve point,
//! the MV variant takes any pair of field elements and masks each with one
//! coordinate of a Diffie-Hellman shared point, so no encoding step exists.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod mv_elgamal;

pub use error::{Error, Result};
pub use mv_elgamal::{decrypt, encrypt, Ciphertext};
