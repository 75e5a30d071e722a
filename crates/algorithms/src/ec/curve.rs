//! Short Weierstrass curves over prime fields

use crate::bigint::{format_uint, parse_uint, Radix};
use crate::ec::Point;
use crate::error::{Error, Result};
use ecrypt_params::CurveParams;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// An elliptic curve y² = x³ + a·x + b over F_p with generator G of order n
///
/// Immutable after construction. The caller is responsible for supplying a
/// curve that satisfies the usual invariants (p an odd prime > 3, G on the
/// curve, n the order of G); beyond a usable modulus, the library only
/// verifies what is asked of it through [`Curve::is_singular`] and
/// [`Curve::contains`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) p: BigUint,
    pub(crate) g: Point,
    pub(crate) n: BigUint,
}

impl Curve {
    /// Build a curve from six integer literal strings
    ///
    /// e.g. `Curve::from_literals("25", "0x25", "0b1111", "0", "0x1111", "23")`
    /// sets a = 25, b = 37, p = 15, G = (0, 4369), n = 23.
    pub fn from_literals(
        a: &str,
        b: &str,
        p: &str,
        g_x: &str,
        g_y: &str,
        n: &str,
    ) -> Result<Self> {
        let p = parse_uint(p)?;
        if p < BigUint::from(2u32) {
            return Err(Error::param("p", "field modulus must be at least 2"));
        }
        Ok(Curve {
            a: parse_uint(a)?,
            b: parse_uint(b)?,
            p,
            g: Point::from_literals(g_x, g_y)?,
            n: parse_uint(n)?,
        })
    }

    /// Build a curve from a named parameter set
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        Curve::from_literals(
            params.a, params.b, params.p, params.g_x, params.g_y, params.n,
        )
    }

    /// Coefficient a of the curve equation
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b of the curve equation
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The prime field order p
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// The generator point G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The order n of the generator point
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Whether the curve is singular: (4a³ + 27b²) ≡ 0 (mod p)
    ///
    /// A singular curve has no well-defined group law and must not be used
    /// for any of the protocols.
    pub fn is_singular(&self) -> bool {
        let a_cubed = &self.a * &self.a * &self.a;
        let b_squared = &self.b * &self.b;
        let discriminant = BigUint::from(4u32) * a_cubed + BigUint::from(27u32) * b_squared;
        (discriminant % &self.p).is_zero()
    }

    /// Whether `point` lies on the curve
    ///
    /// The point at infinity is considered on every curve (identity-element
    /// convention). A regular point is on the curve iff
    /// y² ≡ x³ + a·x + b (mod p).
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = (y * y) % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Render the curve parameters in the requested radix
    pub fn format(&self, radix: Radix) -> String {
        format!(
            "{{ a: {}, b: {}, p: {}, G: {}, n: {} }}",
            format_uint(&self.a, radix),
            format_uint(&self.b, radix),
            format_uint(&self.p, radix),
            self.g.format(radix),
            format_uint(&self.n, radix),
        )
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Radix::Hex))
    }
}
