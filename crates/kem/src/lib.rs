//! Elliptic-curve Diffie-Hellman key agreement
//!
//! Thin protocol layer over [`ecrypt_algorithms::ec`]: shared-secret
//! derivation from one's own private scalar and the peer's public point,
//! plus the classic two-party exchange flow with a classification-based
//! agreement check.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdh;
pub mod error;

pub use ecdh::{derive_shared_secret, exchange};
pub use error::{Error, Result};
