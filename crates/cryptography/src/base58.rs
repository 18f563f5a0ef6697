// Copyright (C) 2015-2025 The Neo Project.
//
// base58.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Base58 and Base58Check text encodings.
//!
//! Digits are produced by repeated division of the big-endian value by 58.
//! Each leading zero byte is carried as one leading `'1'`.

use crate::hash::{HashProvider, NativeHasher};
use neo_bigint::{BigInteger, Endianness};
use thiserror::Error;

/// The Bitcoin/Neo Base58 alphabet.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const CHECKSUM_SIZE: usize = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Error {
    #[error("base58: invalid character '{0}' at position {1}")]
    InvalidChar(char, usize),

    #[error("base58check: invalid length")]
    InvalidLength,

    #[error("base58check: invalid checksum")]
    InvalidChecksum,

    #[error("base58check: expected prefix {0} but got {1}")]
    InvalidPrefix(u8, u8),

    #[error("base58check: expected suffix {0} but got {1}")]
    InvalidSuffix(u8, u8),
}

fn digit_of(ch: char) -> Option<u32> {
    if !ch.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&c| c == ch as u8)
        .map(|index| index as u32)
}

/// Encodes `data` as Base58.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let radix = BigInteger::from(58u32);
    let mut value = BigInteger::from_bytes_be(&data[zeros..]);

    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&radix).unwrap_or_default();
        digits.push(ALPHABET[remainder.to_u64().unwrap_or(0) as usize]);
        value = quotient;
    }
    digits.extend(std::iter::repeat(ALPHABET[0]).take(zeros));
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes Base58 text.
///
/// # Errors
///
/// [`Base58Error::InvalidChar`] for any character outside the alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let radix = BigInteger::from(58u32);
    let mut value = BigInteger::zero();
    let mut zeros = 0usize;
    let mut leading = true;

    for (position, ch) in text.chars().enumerate() {
        let digit = digit_of(ch).ok_or(Base58Error::InvalidChar(ch, position))?;
        if leading && digit == 0 {
            zeros += 1;
            continue;
        }
        leading = false;
        value = &value * &radix + BigInteger::from(digit);
    }

    let mut out = vec![0u8; zeros];
    out.extend(value.to_bytes(Endianness::Big));
    Ok(out)
}

pub trait ToBase58 {
    fn to_base58(&self) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase58 for T {
    fn to_base58(&self) -> String {
        encode(self.as_ref())
    }
}

pub trait FromBase58 {
    fn from_base58(&self) -> Result<Vec<u8>, Base58Error>;
}

impl<T: AsRef<str> + ?Sized> FromBase58 for T {
    fn from_base58(&self) -> Result<Vec<u8>, Base58Error> {
        decode(self.as_ref())
    }
}

/// Base58 with an optional prefix byte, an optional suffix byte and a
/// four-byte double-SHA-256 checksum.
pub trait ToBase58Check {
    fn to_base58_check(&self, prefix: Option<u8>, suffix: Option<u8>) -> String {
        self.to_base58_check_with(prefix, suffix, &NativeHasher)
    }

    fn to_base58_check_with<H: HashProvider + ?Sized>(
        &self,
        prefix: Option<u8>,
        suffix: Option<u8>,
        hasher: &H,
    ) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> ToBase58Check for T {
    fn to_base58_check_with<H: HashProvider + ?Sized>(
        &self,
        prefix: Option<u8>,
        suffix: Option<u8>,
        hasher: &H,
    ) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(1 + src.len() + 1 + CHECKSUM_SIZE);

        if let Some(prefix) = prefix {
            buf.push(prefix);
        }
        buf.extend_from_slice(src);
        if let Some(suffix) = suffix {
            buf.push(suffix);
        }

        let check = hasher.hash256(&buf);
        buf.extend_from_slice(&check[..CHECKSUM_SIZE]);

        encode(&buf)
    }
}

pub trait FromBase58Check: Sized {
    fn from_base58_check<T: AsRef<str>>(
        src: T,
        prefix: Option<u8>,
        suffix: Option<u8>,
    ) -> Result<Self, Base58Error> {
        Self::from_base58_check_with(src, prefix, suffix, &NativeHasher)
    }

    fn from_base58_check_with<T: AsRef<str>, H: HashProvider + ?Sized>(
        src: T,
        prefix: Option<u8>,
        suffix: Option<u8>,
        hasher: &H,
    ) -> Result<Self, Base58Error>;
}

impl FromBase58Check for Vec<u8> {
    fn from_base58_check_with<T: AsRef<str>, H: HashProvider + ?Sized>(
        src: T,
        prefix: Option<u8>,
        suffix: Option<u8>,
        hasher: &H,
    ) -> Result<Vec<u8>, Base58Error> {
        let min_size = CHECKSUM_SIZE + 1 + prefix.map_or(0, |_| 1) + suffix.map_or(0, |_| 1);
        let start_at = if prefix.is_some() { 1 } else { 0 };

        let v = decode(src.as_ref())?;
        let s = v.as_slice();
        if s.len() < min_size {
            return Err(Base58Error::InvalidLength);
        }

        let (body, checksum) = s.split_at(s.len() - CHECKSUM_SIZE);
        if hasher.hash256(body)[..CHECKSUM_SIZE] != *checksum {
            return Err(Base58Error::InvalidChecksum);
        }

        if let Some(prefix) = prefix {
            if prefix != body[0] {
                return Err(Base58Error::InvalidPrefix(prefix, body[0]));
            }
        }

        match suffix {
            Some(suffix) => {
                let last = body[body.len() - 1];
                if last != suffix {
                    return Err(Base58Error::InvalidSuffix(suffix, last));
                }
                Ok(body[start_at..body.len() - 1].to_vec())
            }
            None => Ok(body[start_at..].to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_base58_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world");
        assert_eq!(decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_base58_rejects_foreign_characters() {
        assert_eq!(decode("0abc"), Err(Base58Error::InvalidChar('0', 0)));
        assert_eq!(decode("abIc"), Err(Base58Error::InvalidChar('I', 2)));
        assert_eq!(decode("ab€"), Err(Base58Error::InvalidChar('€', 2)));
    }

    #[test]
    fn test_base58_check() {
        let origin = "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";
        let decoded = Vec::from_base58_check(origin, Some(0x00), None).unwrap();
        assert_eq!(decoded.len(), 20);
        assert_eq!(decoded.to_base58_check(Some(0x00), None), origin);

        let encoded = "1234567890".to_base58_check(None, Some(0x01));
        let decoded = Vec::from_base58_check(&encoded, None, Some(0x01)).unwrap();
        assert_eq!(decoded, b"1234567890");
        assert_eq!(
            Vec::from_base58_check(&encoded, None, Some(0x02)),
            Err(Base58Error::InvalidSuffix(0x02, 0x01))
        );
        assert_eq!(
            Vec::from_base58_check("1234567890", None, None),
            Err(Base58Error::InvalidChar('0', 9))
        );

        let mut corrupted = encoded.into_bytes();
        corrupted[3] = if corrupted[3] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert_eq!(
            Vec::from_base58_check(&corrupted, None, Some(0x01)),
            Err(Base58Error::InvalidChecksum)
        );
    }

    #[test]
    fn test_base58_address() {
        let addr = "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";
        let decoded = Vec::from_base58_check(addr, None, None).unwrap();
        assert_eq!(decoded, hex!("17e4f124b1c3b23553f07cebfb852b2a60aa6c6d94"));

        let hash = Vec::from_base58_check(addr, Some(0x17), None).unwrap();
        assert_eq!(hash.len(), 20);
        assert_eq!(
            Vec::from_base58_check(addr, Some(0x35), None),
            Err(Base58Error::InvalidPrefix(0x35, 0x17))
        );
    }
}
