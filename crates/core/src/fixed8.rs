// Copyright (C) 2015-2025 The Neo Project.
//
// fixed8.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fixed-point amounts with eight decimal places.

use crate::error::{CoreError, CoreResult};
use neo_bigint::BigInteger;
use neo_config::{FIXED8_DECIMALS, FIXED8_ONE};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An amount stored as an unsigned count of 10^-8 units.
///
/// Arithmetic is checked: overflow and underflow are errors, never wrap.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fixed8(u64);

impl Fixed8 {
    pub const ZERO: Fixed8 = Fixed8(0);
    pub const ONE: Fixed8 = Fixed8(FIXED8_ONE);
    /// The smallest representable amount, 0.00000001.
    pub const SATOSHI: Fixed8 = Fixed8(1);
    pub const MAX: Fixed8 = Fixed8(u64::MAX);

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Creates `value` whole units.
    pub fn from_integer(value: u64) -> CoreResult<Self> {
        value
            .checked_mul(FIXED8_ONE)
            .map(Self)
            .ok_or(CoreError::Fixed8Overflow)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount has no fractional part.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.0 % FIXED8_ONE == 0
    }

    pub fn checked_add(self, other: Fixed8) -> CoreResult<Fixed8> {
        self.0
            .checked_add(other.0)
            .map(Fixed8)
            .ok_or(CoreError::Fixed8Overflow)
    }

    pub fn checked_sub(self, other: Fixed8) -> CoreResult<Fixed8> {
        self.0
            .checked_sub(other.0)
            .map(Fixed8)
            .ok_or(CoreError::Fixed8Underflow)
    }

    /// Multiplies two amounts, truncating below 10^-8.
    pub fn checked_mul(self, other: Fixed8) -> CoreResult<Fixed8> {
        let product = (self.0 as u128) * (other.0 as u128) / FIXED8_ONE as u128;
        u64::try_from(product)
            .map(Fixed8)
            .map_err(|_| CoreError::Fixed8Overflow)
    }

    /// Sums `values`, failing on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Fixed8>>(values: I) -> CoreResult<Fixed8> {
        values
            .into_iter()
            .try_fold(Fixed8::ZERO, |total, value| total.checked_add(value))
    }

    /// Parses decimal text with at most eight fractional digits.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for anything but digits with one optional point,
    /// `Fixed8Overflow` when the value does not fit.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidFormat(format!("invalid Fixed8 text {:?}", text));

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > FIXED8_DECIMALS as usize
            || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole_value = match whole {
            "" => 0,
            digits => digits.parse::<u64>().map_err(|_| CoreError::Fixed8Overflow)?,
        };
        let fraction_value = match fraction {
            "" => 0,
            digits => {
                let scale = 10u64.pow(FIXED8_DECIMALS - digits.len() as u32);
                digits.parse::<u64>().map_err(|_| invalid())? * scale
            }
        };

        Self::from_integer(whole_value)?.checked_add(Fixed8(fraction_value))
    }

    pub fn to_big_integer(&self) -> BigInteger {
        BigInteger::from(self.0)
    }

    /// Converts a raw count of 10^-8 units.
    pub fn from_big_integer(value: &BigInteger) -> CoreResult<Self> {
        if value.is_negative() {
            return Err(CoreError::Fixed8Underflow);
        }
        value.to_u64().map(Fixed8).ok_or(CoreError::Fixed8Overflow)
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / FIXED8_ONE;
        let fraction = self.0 % FIXED8_ONE;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:08}", fraction);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl fmt::Debug for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed8({})", self)
    }
}

impl FromStr for Fixed8 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serializable for Fixed8 {
    fn size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u64(self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_u64()?))
    }
}
