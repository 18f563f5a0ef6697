// Copyright (C) 2015-2025 The Neo Project.
//
// field_element.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Field element implementation for elliptic curve operations.

use super::{ECCError, ECCResult, ECCurve};
use neo_bigint::{BigInteger, Endianness};
use rand::RngCore;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

/// Represents an element of the secp256r1 base field, `0 <= value < q`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ECFieldElement {
    value: BigInteger,
}

#[inline]
fn curve() -> &'static ECCurve {
    ECCurve::secp256r1()
}

/// Reduces into `[0, q)`; `q` is a non-zero constant.
fn reduce(value: &BigInteger) -> BigInteger {
    value.modulo(&curve().q).unwrap_or_default()
}

impl ECFieldElement {
    /// Creates a new field element.
    ///
    /// # Arguments
    ///
    /// * `value` - The value of the field element
    ///
    /// # Returns
    ///
    /// A new `ECFieldElement` or an error if the value is outside `[0, q)`
    pub fn new(value: BigInteger) -> ECCResult<Self> {
        if value.is_negative() || value >= curve().q {
            return Err(ECCError::InvalidFieldElement);
        }
        Ok(Self { value })
    }

    /// Wraps a value already known to lie in `[0, q)`.
    pub(crate) fn from_reduced(value: BigInteger) -> Self {
        debug_assert!(!value.is_negative() && value < curve().q);
        Self { value }
    }

    pub(crate) fn from_u32(value: u32) -> Self {
        Self::from_reduced(BigInteger::from(value))
    }

    pub fn value(&self) -> &BigInteger {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Big-endian encoding left-padded to 32 bytes.
    pub fn to_byte_array(&self) -> [u8; 32] {
        let bytes = self.value.to_bytes(Endianness::Big);
        let mut out = [0u8; 32];
        let start = 32usize.saturating_sub(bytes.len());
        out[start..].copy_from_slice(&bytes[bytes.len().saturating_sub(32)..]);
        out
    }

    /// Computes the square of this field element.
    pub fn square(&self) -> Self {
        self * self
    }

    /// Computes the multiplicative inverse of this field element.
    pub fn invert(&self) -> ECCResult<Self> {
        self.value
            .mod_inverse(&curve().q)
            .map(Self::from_reduced)
            .map_err(|_| ECCError::NotInvertible)
    }

    /// `self / other`.
    pub fn divide(&self, other: &Self) -> ECCResult<Self> {
        Ok(self * &other.invert()?)
    }

    /// Raises this field element to the specified power.
    pub fn pow(&self, exp: &BigInteger) -> Self {
        Self::from_reduced(self.value.mod_pow(exp, &curve().q).unwrap_or_default())
    }

    /// Computes a square root, sampling Lucas parameters from the thread RNG
    /// when the field needs them.
    pub fn sqrt(&self) -> Option<Self> {
        self.sqrt_with_rng(&mut rand::thread_rng())
    }

    /// Computes a square root with an injected random source.
    ///
    /// # Returns
    ///
    /// `None` when the element is a quadratic non-residue
    pub fn sqrt_with_rng<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<Self> {
        lucas_sqrt(&self.value, &curve().q, rng).map(Self::from_reduced)
    }
}

/// Square root of `value` modulo the odd prime `q`.
///
/// When `q ≡ 3 (mod 4)` the root is `value^((q >> 2) + 1)`. Otherwise a
/// Lucas sequence with a random parameter `P` is evaluated; a fresh `P` is
/// drawn from `rng` until the sequence yields the root or proves there is
/// none.
pub fn lucas_sqrt<R: RngCore + ?Sized>(
    value: &BigInteger,
    q: &BigInteger,
    rng: &mut R,
) -> Option<BigInteger> {
    let value = value.modulo(q).ok()?;

    if q.test_bit(1) {
        let z = value.mod_pow(&((q >> 2) + BigInteger::one()), q).ok()?;
        return ((&z * &z).modulo(q).ok()? == value).then_some(z);
    }

    let q_minus_one = q - BigInteger::one();
    let legendre_exponent = &q_minus_one >> 1;
    if !value.mod_pow(&legendre_exponent, q).ok()?.is_one() {
        return None;
    }

    let u = &q_minus_one >> 2;
    let k = (&u << 1) + BigInteger::one();
    let four_q = (&value << 2).modulo(q).ok()?;
    let bits = q.bit_length();

    loop {
        let p = loop {
            let candidate = BigInteger::random_bits(bits, rng);
            if &candidate >= q {
                continue;
            }
            let discriminant = &candidate * &candidate - &four_q;
            if discriminant.mod_pow(&legendre_exponent, q).ok()? == q_minus_one {
                break candidate;
            }
        };

        let (u_k, v_k) = fast_lucas_sequence(q, &p, &value, &k)?;
        if (&v_k * &v_k).modulo(q).ok()? == four_q {
            let v = if v_k.test_bit(0) { &v_k + q } else { v_k };
            return Some(v >> 1);
        }
        if !(u_k.is_one() || u_k == q_minus_one) {
            return None;
        }
        trace!("lucas sequence degenerate, resampling P");
    }
}

/// Computes `(U_k, V_k)` of the Lucas sequence with parameters `(P, Q)`
/// modulo `p`.
fn fast_lucas_sequence(
    p: &BigInteger,
    big_p: &BigInteger,
    big_q: &BigInteger,
    k: &BigInteger,
) -> Option<(BigInteger, BigInteger)> {
    let m = |v: BigInteger| v.modulo(p).ok();

    let n = k.bit_length();
    let s = k.lowest_set_bit().unwrap_or(0);

    let mut uh = BigInteger::one();
    let mut vl = BigInteger::from(2);
    let mut vh = big_p.clone();
    let mut ql = BigInteger::one();
    let mut qh = BigInteger::one();

    for j in (s + 1..n).rev() {
        ql = m(&ql * &qh)?;
        if k.test_bit(j) {
            qh = m(&ql * big_q)?;
            uh = m(&uh * &vh)?;
            vl = m(&vh * &vl - big_p * &ql)?;
            vh = m(&vh * &vh - (&qh << 1))?;
        } else {
            qh = ql.clone();
            uh = m(&uh * &vl - &ql)?;
            vh = m(&vh * &vl - big_p * &ql)?;
            vl = m(&vl * &vl - (&ql << 1))?;
        }
    }

    ql = m(&ql * &qh)?;
    qh = m(&ql * big_q)?;
    uh = m(&uh * &vl - &ql)?;
    vl = m(&vh * &vl - big_p * &ql)?;
    ql = m(&ql * &qh)?;

    for _ in 0..s {
        uh = m(&uh * &vl)?;
        vl = m(&vl * &vl - (&ql << 1))?;
        ql = m(&ql * &ql)?;
    }

    Some((uh, vl))
}

impl Add for &ECFieldElement {
    type Output = ECFieldElement;

    fn add(self, other: &ECFieldElement) -> ECFieldElement {
        ECFieldElement::from_reduced(reduce(&(&self.value + &other.value)))
    }
}

impl Sub for &ECFieldElement {
    type Output = ECFieldElement;

    fn sub(self, other: &ECFieldElement) -> ECFieldElement {
        ECFieldElement::from_reduced(reduce(&(&self.value - &other.value)))
    }
}

impl Mul for &ECFieldElement {
    type Output = ECFieldElement;

    fn mul(self, other: &ECFieldElement) -> ECFieldElement {
        ECFieldElement::from_reduced(reduce(&(&self.value * &other.value)))
    }
}

impl Neg for &ECFieldElement {
    type Output = ECFieldElement;

    fn neg(self) -> ECFieldElement {
        if self.value.is_zero() {
            return self.clone();
        }
        ECFieldElement::from_reduced(&curve().q - &self.value)
    }
}

impl fmt::Display for ECFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn fe(v: u32) -> ECFieldElement {
        ECFieldElement::from_u32(v)
    }

    #[test]
    fn test_range_check() {
        assert!(ECFieldElement::new(BigInteger::from(-1)).is_err());
        assert!(ECFieldElement::new(curve().q.clone()).is_err());
        assert!(ECFieldElement::new(&curve().q - BigInteger::one()).is_ok());
    }

    #[test]
    fn test_arithmetic_wraps() {
        let max = ECFieldElement::new(&curve().q - BigInteger::one()).unwrap();
        assert_eq!(&max + &fe(1), fe(0));
        assert_eq!(&fe(0) - &fe(1), max);
        assert_eq!(-&fe(1), max);
        assert_eq!(-&fe(0), fe(0));
        assert_eq!(&max * &max, fe(1));
    }

    #[test]
    fn test_invert() {
        let x = fe(12345);
        assert_eq!(&x * &x.invert().unwrap(), fe(1));
        assert_eq!(fe(0).invert(), Err(ECCError::NotInvertible));
        assert_eq!(fe(10).divide(&fe(5)).unwrap(), fe(2));
    }

    #[test]
    fn test_sqrt_three_mod_four() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let x = fe(987654321);
        let root = x.square().sqrt_with_rng(&mut rng).unwrap();
        assert!(root == x || root == -&x);
        // q ≡ 3 mod 4, so -1 is a non-residue
        assert!((-&fe(1)).sqrt().is_none());
    }

    #[test]
    fn test_lucas_sqrt_one_mod_four() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        // 2^255 - 19 and 10^9 + 9 are both ≡ 1 mod 4
        let primes = [
            (BigInteger::one() << 255) - BigInteger::from(19),
            BigInteger::from(1_000_000_009u64),
            BigInteger::from(13),
        ];
        for q in primes.iter() {
            for seed in 2u32..40 {
                let x = BigInteger::from(seed).pow(7).modulo(q).unwrap();
                if x.is_zero() {
                    continue;
                }
                let square = (&x * &x).modulo(q).unwrap();
                let root = lucas_sqrt(&square, q, &mut rng).unwrap();
                assert_eq!((&root * &root).modulo(q).unwrap(), square);
            }
        }
    }

    #[test]
    fn test_lucas_sqrt_non_residue() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        // 2 is a non-residue mod 13
        assert!(lucas_sqrt(&BigInteger::from(2), &BigInteger::from(13), &mut rng).is_none());
    }

    #[test]
    fn test_to_byte_array() {
        let bytes = fe(0x0102).to_byte_array();
        assert_eq!(&bytes[30..], &[1, 2]);
        assert!(bytes[..30].iter().all(|&b| b == 0));
    }
}
