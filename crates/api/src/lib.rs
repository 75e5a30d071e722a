//! Public API types for the ecrypt library
//!
//! This crate provides the shared surface for the ecrypt ecosystem: the
//! error type every other crate converts into, and the associated `Result`
//! alias. The algorithm and protocol crates keep their own, more precise
//! error enums and lower them into [`Error`] at their API boundary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

pub use error::{Error, Result};
