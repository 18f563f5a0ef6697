// Copyright (C) 2015-2025 The Neo Project.
//
// integer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The [`BigInteger`] value type.

use crate::error::{BigIntError, BigIntResult};
use crate::limbs::{self, Limb, LIMB_BITS};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};
use std::str::FromStr;

/// Sign of a [`BigInteger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Stored as a sign plus a normalized little-endian sequence of 32-bit limbs.
/// Values are immutable; every operation returns a new integer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    sign: Sign,
    mag: Vec<Limb>,
}

impl BigInteger {
    pub const ZERO: BigInteger = BigInteger {
        sign: Sign::Zero,
        mag: Vec::new(),
    };

    pub(crate) fn from_parts(sign: Sign, mut mag: Vec<Limb>) -> Self {
        limbs::normalize(&mut mag);
        if mag.is_empty() || sign == Sign::Zero {
            return Self::ZERO;
        }
        Self { sign, mag }
    }

    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.mag
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn one() -> Self {
        Self::from(1u32)
    }

    #[inline]
    pub fn minus_one() -> Self {
        Self::from(-1i32)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        match self.sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag == [1]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |low| low & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => Self::from_parts(Sign::Positive, self.mag.clone()),
            _ => self.clone(),
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            sign: self.sign.flip(),
            mag: self.mag.clone(),
        }
    }

    fn add_impl(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Self::from_parts(a, limbs::add(&self.mag, &other.mag)),
            (a, b) => match limbs::cmp(&self.mag, &other.mag) {
                Ordering::Equal => Self::ZERO,
                Ordering::Greater => Self::from_parts(a, limbs::sub(&self.mag, &other.mag)),
                Ordering::Less => Self::from_parts(b, limbs::sub(&other.mag, &self.mag)),
            },
        }
    }

    fn sub_impl(&self, other: &Self) -> Self {
        self.add_impl(&other.negate())
    }

    fn mul_impl(&self, other: &Self) -> Self {
        Self::from_parts(
            self.sign.product(other.sign),
            limbs::mul(&self.mag, &other.mag),
        )
    }

    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder carries the sign of
    /// the dividend.
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> BigIntResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = limbs::divrem(&self.mag, &divisor.mag);
        Ok((
            Self::from_parts(self.sign.product(divisor.sign), q),
            Self::from_parts(self.sign, r),
        ))
    }

    pub fn checked_div(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Number of bits in the minimal two's-complement representation,
    /// excluding the sign bit.
    pub fn bit_length(&self) -> u64 {
        match self.sign {
            Sign::Negative => limbs::bit_length(&limbs::sub(&self.mag, &[1])),
            _ => limbs::bit_length(&self.mag),
        }
    }

    /// Index of the lowest set bit, `None` for zero.
    pub fn lowest_set_bit(&self) -> Option<u64> {
        self.mag.iter().enumerate().find(|(_, &l)| l != 0).map(|(i, &l)| {
            i as u64 * LIMB_BITS as u64 + l.trailing_zeros() as u64
        })
    }

    /// Tests bit `index` of the two's-complement representation.
    pub fn test_bit(&self, index: u64) -> bool {
        match self.sign {
            Sign::Negative => !limbs::test_bit(&limbs::sub(&self.mag, &[1]), index),
            _ => limbs::test_bit(&self.mag, index),
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        match (self.sign, self.mag.as_slice()) {
            (Sign::Zero, _) => Some(0),
            (Sign::Positive, [lo]) => Some(*lo as u64),
            (Sign::Positive, [lo, hi]) => Some(((*hi as u64) << 32) | *lo as u64),
            _ => None,
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.abs().to_u64()?;
        match self.sign {
            Sign::Negative if magnitude <= i64::MAX as u64 + 1 => {
                Some((magnitude as i64).wrapping_neg())
            }
            Sign::Negative => None,
            _ => i64::try_from(magnitude).ok(),
        }
    }

    /// Nearest-below `f64` approximation.
    pub fn to_f64(&self) -> f64 {
        let value = self
            .mag
            .iter()
            .rev()
            .fold(0f64, |acc, &l| acc * 4_294_967_296f64 + l as f64);
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Converts a double, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`BigIntError::NotFinite`] for NaN and infinities.
    pub fn from_f64(value: f64) -> BigIntResult<Self> {
        if !value.is_finite() {
            return Err(BigIntError::NotFinite(value.to_bits()));
        }
        let bits = value.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i64;
        if exponent < 1023 {
            // |value| < 1, subnormals included
            return Ok(Self::ZERO);
        }
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let shift = exponent - 1075;
        let magnitude = Self::from(mantissa);
        let magnitude = if shift >= 0 {
            magnitude << shift as usize
        } else {
            magnitude >> (-shift) as usize
        };
        Ok(if value < 0.0 { -magnitude } else { magnitude })
    }

    /// Parses digits in the given radix, with an optional leading sign.
    ///
    /// # Errors
    ///
    /// Returns a format error for an empty string, a radix outside 2..=36 or
    /// any character that is not a digit of the radix.
    pub fn parse_radix(text: &str, radix: u32) -> BigIntResult<Self> {
        if !(2..=36).contains(&radix) {
            return Err(BigIntError::InvalidRadix(radix));
        }
        let (sign, digits, offset) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &text[1..], 1),
            Some(b'+') => (Sign::Positive, &text[1..], 1),
            _ => (Sign::Positive, text, 0),
        };
        if digits.is_empty() {
            return Err(BigIntError::Empty);
        }
        let mut mag = Vec::new();
        for (i, c) in digits.chars().enumerate() {
            let digit = c.to_digit(radix).ok_or(BigIntError::InvalidDigit {
                digit: c,
                position: i + offset,
                radix,
            })?;
            limbs::mul_add_small_assign(&mut mag, radix, digit);
        }
        Ok(Self::from_parts(sign, mag))
    }

    /// Renders the value in the given radix with lowercase digits.
    ///
    /// Radixes outside 2..=36 fall back to decimal.
    pub fn to_string_radix(&self, radix: u32) -> String {
        let radix = if (2..=36).contains(&radix) { radix } else { 10 };
        if self.is_zero() {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        let mut rest = self.mag.clone();
        while !rest.is_empty() {
            let (q, r) = limbs::divrem_small(&rest, radix);
            digits.push(std::char::from_digit(r, radix).unwrap_or('0'));
            rest = q;
        }
        if self.is_negative() {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => limbs::cmp(&self.mag, &other.mag),
                Sign::Negative => limbs::cmp(&other.mag, &self.mag),
            },
            other => other,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(16))
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(s, 10)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_parts(Sign::Positive, vec![value as Limb, (value >> 32) as Limb])
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<u8> for BigInteger {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<usize> for BigInteger {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl<'a, 'b> $imp<&'b BigInteger> for &'a BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &'b BigInteger) -> BigInteger {
                self.$inner(rhs)
            }
        }

        impl<'b> $imp<&'b BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &'b BigInteger) -> BigInteger {
                (&self).$inner(rhs)
            }
        }

        impl<'a> $imp<BigInteger> for &'a BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$inner(&rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                (&self).$inner(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_impl);
forward_binop!(Sub, sub, sub_impl);
forward_binop!(Mul, mul, mul_impl);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger {
            sign: self.sign.flip(),
            mag: self.mag,
        }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Shl<usize> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, bits: usize) -> BigInteger {
        BigInteger::from_parts(self.sign, limbs::shl(&self.mag, bits))
    }
}

impl Shl<usize> for BigInteger {
    type Output = BigInteger;

    fn shl(self, bits: usize) -> BigInteger {
        &self << bits
    }
}

/// Arithmetic shift: negative values round toward negative infinity.
impl Shr<usize> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, bits: usize) -> BigInteger {
        let shifted = limbs::shr(&self.mag, bits);
        if self.is_negative() && limbs::any_low_bits(&self.mag, bits) {
            BigInteger::from_parts(Sign::Negative, limbs::add(&shifted, &[1]))
        } else {
            BigInteger::from_parts(self.sign, shifted)
        }
    }
}

impl Shr<usize> for BigInteger {
    type Output = BigInteger;

    fn shr(self, bits: usize) -> BigInteger {
        &self >> bits
    }
}
