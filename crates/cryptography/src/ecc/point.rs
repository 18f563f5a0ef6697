// Copyright (C) 2015-2025 The Neo Project.
//
// point.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Points on secp256r1.

use super::{ECCError, ECCResult, ECCurve, ECFieldElement};
use neo_bigint::BigInteger;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// A point on secp256r1: either the point at infinity or an affine
/// `(x, y)` pair on the curve.
///
/// Points order by `x` then `y`, with infinity first. Multisignature
/// redeem scripts sort their public keys in this order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ECPoint {
    coords: Option<(ECFieldElement, ECFieldElement)>,
}

#[inline]
fn curve() -> &'static ECCurve {
    ECCurve::secp256r1()
}

/// `numerator / denominator`, `None` for a vertical line.
fn slope(numerator: &ECFieldElement, denominator: &ECFieldElement) -> Option<ECFieldElement> {
    numerator.divide(denominator).ok()
}

impl ECPoint {
    /// The point at infinity.
    pub const fn infinity() -> Self {
        Self { coords: None }
    }

    /// The curve's base point.
    pub fn generator() -> Self {
        curve().generator()
    }

    pub(crate) fn from_affine(x: ECFieldElement, y: ECFieldElement) -> Self {
        Self {
            coords: Some((x, y)),
        }
    }

    /// Creates an affine point, checking the curve equation.
    pub fn new(x: ECFieldElement, y: ECFieldElement) -> ECCResult<Self> {
        let point = Self::from_affine(x, y);
        if !point.is_on_curve() {
            return Err(ECCError::PointNotOnCurve);
        }
        Ok(point)
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    pub fn x(&self) -> Option<&ECFieldElement> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&ECFieldElement> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Whether the point satisfies `y^2 = x^3 + ax + b`.
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            None => true,
            Some((x, y)) => y.square() == Self::curve_rhs(x),
        }
    }

    fn curve_rhs(x: &ECFieldElement) -> ECFieldElement {
        let a = ECFieldElement::from_reduced(curve().a.clone());
        let b = ECFieldElement::from_reduced(curve().b.clone());
        &(&(&x.square() * x) + &(&a * x)) + &b
    }

    /// Size of the compressed encoding.
    pub fn size(&self) -> usize {
        if self.is_infinity() {
            1
        } else {
            1 + curve().expected_ec_point_length
        }
    }

    /// Decodes a point from its SEC1 encoding.
    ///
    /// Accepts `0x00` (infinity), `0x02`/`0x03` followed by 32 bytes of `x`,
    /// and `0x04` followed by 32 bytes each of `x` and `y`.
    pub fn from_bytes(encoded: &[u8]) -> ECCResult<Self> {
        let len = curve().expected_ec_point_length;
        match encoded.first().copied() {
            None => Err(ECCError::InvalidPointFormat("empty encoding".to_string())),
            Some(0x00) if encoded.len() == 1 => Ok(Self::infinity()),
            Some(tag @ (0x02 | 0x03)) => {
                if encoded.len() != 1 + len {
                    return Err(ECCError::InvalidPointFormat(format!(
                        "compressed point must be {} bytes, got {}",
                        1 + len,
                        encoded.len()
                    )));
                }
                let x = ECFieldElement::new(BigInteger::from_bytes_be(&encoded[1..]))?;
                Self::decompress(tag & 1 == 1, x)
            }
            Some(0x04) => {
                if encoded.len() != 1 + 2 * len {
                    return Err(ECCError::InvalidPointFormat(format!(
                        "uncompressed point must be {} bytes, got {}",
                        1 + 2 * len,
                        encoded.len()
                    )));
                }
                let x = ECFieldElement::new(BigInteger::from_bytes_be(&encoded[1..1 + len]))?;
                let y = ECFieldElement::new(BigInteger::from_bytes_be(&encoded[1 + len..]))?;
                Self::new(x, y)
            }
            Some(tag) => Err(ECCError::InvalidPointFormat(format!(
                "invalid point encoding tag {:#04x}",
                tag
            ))),
        }
    }

    fn decompress(y_odd: bool, x: ECFieldElement) -> ECCResult<Self> {
        let alpha = Self::curve_rhs(&x);
        let beta = alpha
            .sqrt()
            .ok_or_else(|| ECCError::InvalidPointFormat("invalid point compression".to_string()))?;
        let y = if beta.value().test_bit(0) == y_odd {
            beta
        } else {
            -&beta
        };
        Ok(Self::from_affine(x, y))
    }

    /// Encodes the point.
    ///
    /// # Arguments
    ///
    /// * `compressed` - Emit the 33-byte form instead of the 65-byte form
    pub fn encode_point(&self, compressed: bool) -> Vec<u8> {
        match &self.coords {
            None => vec![0x00],
            Some((x, y)) => {
                let mut out = Vec::with_capacity(65);
                if compressed {
                    out.push(if y.value().test_bit(0) { 0x03 } else { 0x02 });
                    out.extend_from_slice(&x.to_byte_array());
                } else {
                    out.push(0x04);
                    out.extend_from_slice(&x.to_byte_array());
                    out.extend_from_slice(&y.to_byte_array());
                }
                out
            }
        }
    }

    pub fn negate(&self) -> Self {
        match &self.coords {
            None => Self::infinity(),
            Some((x, y)) => Self::from_affine(x.clone(), -y),
        }
    }

    pub fn twice(&self) -> Self {
        let (x, y) = match &self.coords {
            None => return Self::infinity(),
            Some(coords) => coords,
        };
        if y.is_zero() {
            return Self::infinity();
        }
        let two = ECFieldElement::from_u32(2);
        let three = ECFieldElement::from_u32(3);
        let a = ECFieldElement::from_reduced(curve().a.clone());
        let gamma = match slope(&(&(&x.square() * &three) + &a), &(y * &two)) {
            Some(gamma) => gamma,
            None => return Self::infinity(),
        };
        let x3 = &gamma.square() - &(x * &two);
        let y3 = &(&gamma * &(x - &x3)) - y;
        Self::from_affine(x3, y3)
    }

    fn add_point(&self, other: &ECPoint) -> ECPoint {
        let ((x1, y1), (x2, y2)) = match (&self.coords, &other.coords) {
            (None, _) => return other.clone(),
            (_, None) => return self.clone(),
            (Some(a), Some(b)) => (a, b),
        };
        if x1 == x2 {
            if y1 == y2 {
                return self.twice();
            }
            return Self::infinity();
        }
        let gamma = match slope(&(y2 - y1), &(x2 - x1)) {
            Some(gamma) => gamma,
            None => return Self::infinity(),
        };
        let x3 = &(&gamma.square() - x1) - x2;
        let y3 = &(&gamma * &(x1 - &x3)) - y1;
        Self::from_affine(x3, y3)
    }

    /// Scalar multiplication by windowed NAF.
    ///
    /// The window width grows with the scalar's bit length; the odd
    /// multiples `P, 3P, 5P, ...` are precomputed once per call.
    pub fn multiply(&self, k: &BigInteger) -> ECPoint {
        if k.is_negative() {
            return self.multiply(&k.abs()).negate();
        }
        if k.is_zero() || self.is_infinity() {
            return Self::infinity();
        }

        let m = k.bit_length();
        let (width, req_pre_comp_len) = match m {
            0..=12 => (2, 1),
            13..=40 => (3, 2),
            41..=120 => (4, 4),
            121..=336 => (5, 8),
            337..=896 => (6, 16),
            897..=2304 => (7, 32),
            _ => (8, 127),
        };

        let twice_p = self.twice();
        let mut pre_comp = Vec::with_capacity(req_pre_comp_len);
        pre_comp.push(self.clone());
        for i in 1..req_pre_comp_len {
            let next = &twice_p + &pre_comp[i - 1];
            pre_comp.push(next);
        }

        let wnaf = Self::window_naf(width, k);
        let mut q = Self::infinity();
        for &digit in wnaf.iter().rev() {
            q = q.twice();
            if digit > 0 {
                q = &q + &pre_comp[((digit - 1) / 2) as usize];
            } else if digit < 0 {
                q = &q - &pre_comp[((-digit - 1) / 2) as usize];
            }
        }
        q
    }

    /// Width-`width` non-adjacent form of `k`, least significant digit first.
    fn window_naf(width: u32, k: &BigInteger) -> Vec<i8> {
        let pow2w = 1i32 << width;
        let mut wnaf = vec![0i8; k.bit_length() as usize + 1];
        let mut k = k.clone();
        let mut i = 0;
        let mut length = 0;
        while k.is_positive() {
            if k.test_bit(0) {
                let remainder = (0..width as u64)
                    .filter(|&b| k.test_bit(b))
                    .fold(0i32, |acc, b| acc | (1 << b));
                let digit = if remainder & (pow2w >> 1) != 0 {
                    remainder - pow2w
                } else {
                    remainder
                };
                wnaf[i] = digit as i8;
                k = &k - &BigInteger::from(digit);
                length = i;
            }
            k = &k >> 1;
            i += 1;
        }
        wnaf.truncate(length + 1);
        wnaf
    }

    /// `k·p + l·q` with a single shared doubling ladder (Shamir's trick).
    pub fn sum_of_two_multiplies(p: &ECPoint, k: &BigInteger, q: &ECPoint, l: &BigInteger) -> ECPoint {
        let m = k.bit_length().max(l.bit_length());
        let z = p + q;
        let mut r = Self::infinity();
        for i in (0..m).rev() {
            r = r.twice();
            match (k.test_bit(i), l.test_bit(i)) {
                (true, true) => r = &r + &z,
                (true, false) => r = &r + p,
                (false, true) => r = &r + q,
                (false, false) => {}
            }
        }
        r
    }
}

impl Add for &ECPoint {
    type Output = ECPoint;

    fn add(self, other: &ECPoint) -> ECPoint {
        self.add_point(other)
    }
}

impl Sub for &ECPoint {
    type Output = ECPoint;

    fn sub(self, other: &ECPoint) -> ECPoint {
        self.add_point(&other.negate())
    }
}

impl Neg for &ECPoint {
    type Output = ECPoint;

    fn neg(self) -> ECPoint {
        self.negate()
    }
}

impl Mul<&BigInteger> for &ECPoint {
    type Output = ECPoint;

    fn mul(self, k: &BigInteger) -> ECPoint {
        self.multiply(k)
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.encode_point(true)))
    }
}

impl FromStr for ECPoint {
    type Err = ECCError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| ECCError::InvalidPointFormat(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}
