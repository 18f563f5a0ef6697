// Copyright (C) 2015-2025 The Neo Project.
//
// bytes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Byte-buffer conversions.
//!
//! Unsigned conversions work on the magnitude only. Signed conversions use
//! two's complement and always emit the shortest unambiguous form: one
//! extra `0x00` or `0xff` byte is appended when the sign bit of the
//! magnitude's top byte would otherwise be misread.

use crate::integer::{BigInteger, Sign};
use crate::limbs::Limb;

/// Byte order of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

fn to_little_endian(bytes: &[u8], endian: Endianness) -> Vec<u8> {
    match endian {
        Endianness::Little => bytes.to_vec(),
        Endianness::Big => bytes.iter().rev().copied().collect(),
    }
}

fn from_little_endian(mut bytes: Vec<u8>, endian: Endianness) -> Vec<u8> {
    if endian == Endianness::Big {
        bytes.reverse();
    }
    bytes
}

fn limbs_from_le(bytes: &[u8]) -> Vec<Limb> {
    bytes
        .chunks(4)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0 as Limb, |acc, &b| (acc << 8) | b as Limb)
        })
        .collect()
}

fn le_from_limbs(limbs: &[Limb]) -> Vec<u8> {
    let mut out: Vec<u8> = limbs.iter().flat_map(|l| l.to_le_bytes()).collect();
    while out.last() == Some(&0) {
        out.pop();
    }
    out
}

/// Negates a little-endian two's-complement buffer in place.
fn twos_complement(bytes: &mut [u8]) {
    let mut carry = true;
    for b in bytes.iter_mut() {
        let (value, overflow) = (!*b).overflowing_add(carry as u8);
        *b = value;
        carry = overflow;
    }
}

impl BigInteger {
    /// Reads an unsigned magnitude.
    pub fn from_bytes(bytes: &[u8], endian: Endianness) -> Self {
        let le = to_little_endian(bytes, endian);
        Self::from_parts(Sign::Positive, limbs_from_le(&le))
    }

    /// Reads a two's-complement value. An empty buffer is zero.
    pub fn from_signed_bytes(bytes: &[u8], endian: Endianness) -> Self {
        let mut le = to_little_endian(bytes, endian);
        match le.last() {
            Some(&top) if top & 0x80 != 0 => {
                twos_complement(&mut le);
                Self::from_parts(Sign::Negative, limbs_from_le(&le))
            }
            _ => Self::from_parts(Sign::Positive, limbs_from_le(&le)),
        }
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes, Endianness::Big)
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes, Endianness::Little)
    }

    /// Minimal unsigned magnitude of `|self|`. Zero yields an empty buffer.
    pub fn to_bytes(&self, endian: Endianness) -> Vec<u8> {
        from_little_endian(le_from_limbs(self.magnitude()), endian)
    }

    /// Minimal two's-complement form. Zero yields an empty buffer.
    pub fn to_signed_bytes(&self, endian: Endianness) -> Vec<u8> {
        let mut le = le_from_limbs(self.magnitude());
        match self.sign() {
            Sign::Zero => return Vec::new(),
            Sign::Positive => {
                if le.last().map_or(false, |&top| top & 0x80 != 0) {
                    le.push(0x00);
                }
            }
            Sign::Negative => {
                twos_complement(&mut le);
                if le.last().map_or(false, |&top| top & 0x80 == 0) {
                    le.push(0xff);
                }
            }
        }
        from_little_endian(le, endian)
    }

    /// Unsigned big-endian magnitude left-padded to `len` bytes.
    ///
    /// Returns `None` when the magnitude needs more than `len` bytes.
    pub fn to_bytes_be_padded(&self, len: usize) -> Option<Vec<u8>> {
        let bytes = self.to_bytes(Endianness::Big);
        if bytes.len() > len {
            return None;
        }
        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_boundaries() {
        let cases: &[(i64, &[u8])] = &[
            (0, &[]),
            (1, &[0x01]),
            (-1, &[0xff]),
            (127, &[0x7f]),
            (128, &[0x80, 0x00]),
            (-128, &[0x80]),
            (-129, &[0x7f, 0xff]),
            (255, &[0xff, 0x00]),
            (-255, &[0x01, 0xff]),
            (256, &[0x00, 0x01]),
            (-256, &[0x00, 0xff]),
            (65536, &[0x00, 0x00, 0x01]),
        ];
        for (value, bytes) in cases {
            let big = BigInteger::from(*value);
            assert_eq!(big.to_signed_bytes(Endianness::Little), bytes.to_vec(), "{}", value);
            assert_eq!(BigInteger::from_signed_bytes(bytes, Endianness::Little), big);
        }
    }

    #[test]
    fn test_big_endian_signed() {
        let big = BigInteger::from(-129);
        assert_eq!(big.to_signed_bytes(Endianness::Big), vec![0xff, 0x7f]);
        assert_eq!(BigInteger::from_signed_bytes(&[0xff, 0x7f], Endianness::Big), big);
    }

    #[test]
    fn test_unsigned_strips_leading_zeros() {
        let big = BigInteger::from_bytes(&[0x00, 0x00, 0x01, 0x02], Endianness::Big);
        assert_eq!(big, BigInteger::from(0x0102));
        assert_eq!(big.to_bytes(Endianness::Big), vec![0x01, 0x02]);
        assert_eq!(big.to_bytes(Endianness::Little), vec![0x02, 0x01]);
        assert!(BigInteger::zero().to_bytes(Endianness::Big).is_empty());
    }

    #[test]
    fn test_padded() {
        let big = BigInteger::from(0x0102);
        assert_eq!(big.to_bytes_be_padded(4), Some(vec![0, 0, 1, 2]));
        assert_eq!(big.to_bytes_be_padded(1), None);
    }
}
