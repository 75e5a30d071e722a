//! Curve points in affine coordinates

use crate::bigint::{format_uint, parse_uint, Radix};
use crate::error::Result;
use num_bigint::BigUint;
use std::fmt;

/// A point on (or off) an elliptic curve
///
/// Coordinates are non-negative integers, conceptually reduced modulo the
/// curve's prime but not required to be: reduction happens lazily during
/// classification and arithmetic. A regular point fed into arithmetic is
/// assumed to satisfy the curve equation; membership is only checked when
/// explicitly requested through [`Curve::contains`](super::Curve::contains).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, identity element of curve addition
    Infinity,
    /// A regular affine point
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

/// Relationship between two points modulo a curve's prime
///
/// Produced by [`Curve::classify`](super::Curve::classify) and consumed by
/// the addition dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRelation {
    /// Both operands represent the same group element
    Same,
    /// The operands are inverses of each other (their sum is infinity)
    ///
    /// Also reported for a self-inverse point compared with itself
    /// (common y ≡ 0 mod p), so the dispatcher routes that doubling to
    /// infinity.
    Inverse,
    /// Distinct group elements with distinct x-coordinates
    Different,
}

impl Point {
    /// Build a regular point from two coordinate literals
    pub fn from_literals(x: &str, y: &str) -> Result<Self> {
        Ok(Point::Affine {
            x: parse_uint(x)?,
            y: parse_uint(y)?,
        })
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Borrow the affine coordinates, if any
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Reduce both coordinates modulo `modulus`
    ///
    /// The point at infinity has no coordinates and reduces to itself.
    pub fn reduce(&self, modulus: &BigUint) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x % modulus,
                y: y % modulus,
            },
        }
    }

    /// Render the point in the requested radix
    pub fn format(&self, radix: Radix) -> String {
        match self {
            Point::Infinity => String::from("infinity"),
            Point::Affine { x, y } => {
                format!("({}, {})", format_uint(x, radix), format_uint(y, radix))
            }
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Radix::Hex))
    }
}
