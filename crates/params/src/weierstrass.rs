//! Short Weierstrass curve parameters over prime fields
//!
//! Each set describes a curve y² = x³ + a·x + b over F_p with a generator
//! point G of order n.

/// Parameters of a short Weierstrass curve, as integer literal strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name
    pub name: &'static str,
    /// Coefficient a of the curve equation
    pub a: &'static str,
    /// Coefficient b of the curve equation
    pub b: &'static str,
    /// Prime field order p
    pub p: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
    /// Order n of the generator point
    pub n: &'static str,
}

/// ANSSI FRP256v1
pub const FRP256V1: CurveParams = CurveParams {
    name: "FRP256v1",
    a: "0xf1fd178c0b3ad58f10126de8ce42435b3961adbcabc8ca6de8fcf353d86e9c00",
    b: "0xee353fca5428a9300d4aba754a44c00fdfec0c9ae4b1a1803075ed967b7bb73f",
    p: "0xf1fd178c0b3ad58f10126de8ce42435b3961adbcabc8ca6de8fcf353d86e9c03",
    g_x: "0xb6b3d4c356c139eb31183d4749d423958c27d2dcaf98b70164c97a2dd98f5cff",
    g_y: "0x6142e0f7c8b204911f9271f0f3ecef8c2701c307e8e4c9e183115a1554062cfb",
    n: "0xf1fd178c0b3ad58f10126de8ce42435b53dc67e140d2bf941ffdd459c6d655e1",
};

/// NIST P-256 (secp256r1)
pub const NIST_P256: CurveParams = CurveParams {
    name: "NIST P-256",
    a: "0xffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    p: "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    g_x: "0x6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    g_y: "0x4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
};

/// secp256k1
pub const SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    a: "0",
    b: "7",
    p: "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    g_x: "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    g_y: "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
};
