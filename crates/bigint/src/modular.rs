// Copyright (C) 2015-2025 The Neo Project.
//
// modular.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Modular arithmetic.

use crate::error::{BigIntError, BigIntResult};
use crate::integer::BigInteger;

impl BigInteger {
    /// Euclidean remainder: the result lies in `[0, |modulus|)`.
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivisionByZero`] when `modulus` is zero.
    pub fn modulo(&self, modulus: &BigInteger) -> BigIntResult<BigInteger> {
        let r = self.checked_rem(modulus)?;
        if r.is_negative() {
            Ok(r + modulus.abs())
        } else {
            Ok(r)
        }
    }

    /// Greatest common divisor of the absolute values.
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        let (mut a, mut b) = (self.abs(), other.abs());
        while !b.is_zero() {
            let r = match a.checked_rem(&b) {
                Ok(r) => r,
                Err(_) => break,
            };
            a = b;
            b = r;
        }
        a
    }

    /// Multiplicative inverse modulo `modulus` via the extended Euclidean
    /// algorithm.
    ///
    /// # Arguments
    ///
    /// * `modulus` - A positive modulus
    ///
    /// # Returns
    ///
    /// The unique `x` in `[0, modulus)` with `self * x ≡ 1`, or an arithmetic
    /// error when `modulus` is zero or negative, or when `self` and `modulus`
    /// share a factor.
    pub fn mod_inverse(&self, modulus: &BigInteger) -> BigIntResult<BigInteger> {
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(BigIntError::NonPositiveModulus);
        }

        let mut old_r = self.modulo(modulus)?;
        let mut r = modulus.clone();
        let mut old_s = BigInteger::one();
        let mut s = BigInteger::zero();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r)?;
            old_r = std::mem::replace(&mut r, rem);
            let next_s = &old_s - &(&q * &s);
            old_s = std::mem::replace(&mut s, next_s);
        }

        if !old_r.is_one() {
            return Err(BigIntError::NotInvertible);
        }
        old_s.modulo(modulus)
    }

    /// `self^exponent mod modulus` by left-to-right square-and-multiply.
    ///
    /// A negative exponent raises the modular inverse instead.
    pub fn mod_pow(&self, exponent: &BigInteger, modulus: &BigInteger) -> BigIntResult<BigInteger> {
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(BigIntError::NonPositiveModulus);
        }

        let (base, exponent) = if exponent.is_negative() {
            (self.mod_inverse(modulus)?, exponent.abs())
        } else {
            (self.modulo(modulus)?, exponent.clone())
        };

        let mut result = BigInteger::one();
        for i in (0..exponent.bit_length()).rev() {
            result = (&result * &result).modulo(modulus)?;
            if exponent.test_bit(i) {
                result = (&result * &base).modulo(modulus)?;
            }
        }
        result.modulo(modulus)
    }
}
