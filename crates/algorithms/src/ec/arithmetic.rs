//! The affine group law: classification, negation, addition, doubling and
//! double-and-add scalar multiplication
//!
//! All operations take explicit point arguments and produce new values; the
//! curve itself is never mutated, so independent callers need no locking.
//!
//! Modular inverses taken here are guaranteed to exist whenever the stated
//! preconditions hold (p prime, operands routed by [`Curve::classify`]); a
//! failing inverse therefore indicates a broken internal invariant and
//! panics rather than returning an error.

use crate::bigint::parse_uint;
use crate::ec::{Curve, Point, PointRelation};
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::Zero;

/// (a + b) mod p
fn mod_add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// (a - b) mod p, for b already reduced below p
fn mod_sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

/// (a * b) mod p
fn mod_mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

impl Curve {
    /// Classify the relationship between two points modulo p
    ///
    /// Coordinates are reduced before comparison, so unreduced points
    /// classify the same as their canonical forms. The self-inverse
    /// degenerate case (matching coordinates with y ≡ 0 mod p) is reported
    /// as [`PointRelation::Inverse`] even though the operands are equal;
    /// the addition dispatcher relies on this to route the sum to infinity.
    pub fn classify(&self, p: &Point, q: &Point) -> PointRelation {
        match (p, q) {
            (Point::Infinity, Point::Infinity) => PointRelation::Same,
            (Point::Infinity, _) | (_, Point::Infinity) => PointRelation::Different,
            (Point::Affine { x: px, y: py }, Point::Affine { x: qx, y: qy }) => {
                let px = px % &self.p;
                let py = py % &self.p;
                let qx = qx % &self.p;
                let qy = qy % &self.p;

                if px != qx {
                    return PointRelation::Different;
                }
                if py == qy {
                    if py.is_zero() {
                        return PointRelation::Inverse;
                    }
                    return PointRelation::Same;
                }
                if mod_add(&py, &qy, &self.p).is_zero() {
                    return PointRelation::Inverse;
                }
                PointRelation::Different
            }
        }
    }

    /// The group inverse -P
    ///
    /// Infinity maps to itself; (x, y) maps to (x, (p - y) mod p).
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => {
                let y = y % &self.p;
                Point::Affine {
                    x: x.clone(),
                    y: (&self.p - &y) % &self.p,
                }
            }
        }
    }

    /// The group sum P + Q
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        // infinity is the identity: P + oo == oo + P == P
        if p.is_infinity() {
            return q.clone();
        }
        if q.is_infinity() {
            return p.clone();
        }
        match self.classify(p, q) {
            PointRelation::Same => self.double(p),
            PointRelation::Inverse => Point::Infinity,
            PointRelation::Different => self.add_distinct(p, q),
        }
    }

    /// The doubled point 2P, via the tangent formula
    ///
    /// Precondition: P is a regular point that is not its own inverse
    /// (P.y ≢ 0 mod p). Callers must route self-inverse doublings to
    /// infinity beforehand — [`Curve::add`] does. Panics on violation.
    pub fn double(&self, p: &Point) -> Point {
        let (px, py) = match p.reduce(&self.p) {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => panic!("point doubling requires a regular point"),
        };

        let two_y = mod_add(&py, &py, &self.p);
        let denominator = two_y
            .modinv(&self.p)
            .expect("point doubling requires P.y to be invertible modulo p");

        // s = (3*x^2 + a) / (2*y)
        let three_x_squared = mod_mul(&BigUint::from(3u32), &mod_mul(&px, &px, &self.p), &self.p);
        let numerator = mod_add(&three_x_squared, &(&self.a % &self.p), &self.p);
        let s = mod_mul(&numerator, &denominator, &self.p);

        // Rx = s^2 - 2*x ; Ry = s*(x - Rx) - y
        let rx = mod_sub(&mod_sub(&mod_mul(&s, &s, &self.p), &px, &self.p), &px, &self.p);
        let ry = mod_sub(&mod_mul(&s, &mod_sub(&px, &rx, &self.p), &self.p), &py, &self.p);

        Point::Affine { x: rx, y: ry }
    }

    /// Chord addition of two points with distinct x-coordinates
    ///
    /// With p prime and P.x ≠ Q.x (mod p) — guaranteed by the `Different`
    /// classification — the slope denominator is always invertible.
    fn add_distinct(&self, p: &Point, q: &Point) -> Point {
        let (px, py) = match p.reduce(&self.p) {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => unreachable!("handled by the addition dispatcher"),
        };
        let (qx, qy) = match q.reduce(&self.p) {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => unreachable!("handled by the addition dispatcher"),
        };

        // s = (P.y - Q.y) / (P.x - Q.x)
        let denominator = mod_sub(&px, &qx, &self.p)
            .modinv(&self.p)
            .expect("distinct points must have invertible x-difference modulo p");
        let s = mod_mul(&mod_sub(&py, &qy, &self.p), &denominator, &self.p);

        // Rx = s^2 - P.x - Q.x ; Ry = s*(P.x - Rx) - P.y
        let rx = mod_sub(&mod_sub(&mod_mul(&s, &s, &self.p), &px, &self.p), &qx, &self.p);
        let ry = mod_sub(&mod_mul(&s, &mod_sub(&px, &rx, &self.p), &self.p), &py, &self.p);

        Point::Affine { x: rx, y: ry }
    }

    /// Scalar multiplication k·P by double-and-add
    ///
    /// Walks the bits of k from least significant upward, accumulating the
    /// current addend on set bits and doubling it after every bit:
    /// O(log k) point operations. k = 0 yields infinity.
    pub fn mul(&self, p: &Point, k: &BigUint) -> Point {
        let mut acc = Point::Infinity;
        let mut addend = p.clone();

        for bit in 0..k.bits() {
            if k.bit(bit) {
                acc = self.add(&acc, &addend);
            }
            addend = self.add(&addend, &addend);
        }

        acc
    }

    /// Scalar multiplication with the scalar supplied as an integer literal
    ///
    /// Boundary convenience over [`Curve::mul`]:
    /// `curve.mul_literal(&p, "1444")` computes 1444·P.
    pub fn mul_literal(&self, p: &Point, k: &str) -> Result<Point> {
        Ok(self.mul(p, &parse_uint(k)?))
    }
}
