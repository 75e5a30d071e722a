//! Arbitrary-precision boundary helpers
//!
//! Integer values cross the library boundary as literal strings in one
//! convention: a `0x`/`0X` prefix selects hexadecimal, `0b`/`0B` selects
//! binary, no prefix selects decimal. Internally everything runs on
//! [`BigUint`]; nothing below this module re-parses strings.

use crate::error::{Error, Result};
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// Rendering radix for the human-readable presentation helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// Base 2, rendered with a `0b` prefix
    Binary,
    /// Base 10, rendered without a prefix
    Decimal,
    /// Base 16, rendered with a `0x` prefix
    Hex,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }
}

/// Parse a non-negative integer literal, auto-detecting the radix by prefix
///
/// Accepted forms: `"0x1a"`, `"0b110"`, `"26"`. Field elements and scalars
/// are non-negative, so a sign is rejected along with any malformed digits.
pub fn parse_uint(literal: &str) -> Result<BigUint> {
    let trimmed = literal.trim();
    let (digits, radix) = if let Some(rest) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
        (rest, 2)
    } else {
        (trimmed, 10)
    };

    if digits.is_empty() {
        return Err(Error::Literal {
            context: "parse_uint",
            literal: literal.to_string(),
        });
    }

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| Error::Literal {
        context: "parse_uint",
        literal: literal.to_string(),
    })
}

/// Render a value in the requested radix, with the matching prefix
pub fn format_uint(value: &BigUint, radix: Radix) -> String {
    format!("{}{}", radix.prefix(), value.to_str_radix(radix.base()))
}

/// Sample a uniform integer in `[0, bound)` from a caller-supplied generator
///
/// The generator is owned by the caller and passed by reference; this module
/// keeps no sampling state of its own. `bound` must be positive.
pub fn random_below<R: RngCore + CryptoRng>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}
