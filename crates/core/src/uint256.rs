// Copyright (C) 2015-2025 The Neo Project.
//
// uint256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt256`, a 256-bit unsigned integer.
//!
//! Transaction ids and asset ids are `UInt256` values.

use crate::error::{CoreError, CoreResult};
use neo_config::HASH_SIZE;
use neo_cryptography::{hash256, HashProvider};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// Represents a 256-bit unsigned integer stored little-endian.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT256_SIZE])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt256` from its little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; UINT256_SIZE] = value.try_into().map_err(|_| {
            CoreError::InvalidFormat(format!("UInt256 needs 32 bytes, got {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    #[inline]
    pub fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }

    /// Parses big-endian hex text, with or without a `0x` prefix.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.len() != UINT256_SIZE * 2 {
            return Err(CoreError::InvalidFormat(format!(
                "UInt256 needs 64 hex digits, got {}",
                s.len()
            )));
        }
        let mut bytes =
            hex::decode(s).map_err(|e| CoreError::InvalidFormat(format!("UInt256: {}", e)))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Double SHA-256 of `data`.
    pub fn hash(data: &[u8]) -> Self {
        Self(hash256(data))
    }

    pub fn hash_with<H: HashProvider + ?Sized>(data: &[u8], hasher: &H) -> Self {
        Self(hasher.hash256(data))
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    #[inline]
    fn from(value: [u8; UINT256_SIZE]) -> Self {
        Self(value)
    }
}

impl From<UInt256> for [u8; UINT256_SIZE] {
    #[inline]
    fn from(value: UInt256) -> Self {
        value.0
    }
}

impl Ord for UInt256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for UInt256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        UINT256_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_fixed()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let text = "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";
        let value = UInt256::parse(text).unwrap();
        assert_eq!(value.to_array()[0], 0x9b);
        assert_eq!(value.to_array()[31], 0xc5);
        assert_eq!(value.to_string(), text);
        assert_eq!(text[2..].parse::<UInt256>().unwrap(), value);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(UInt256::from_bytes(&[0u8; 31]).is_err());
        assert!(UInt256::parse("0x1234").is_err());
    }

    #[test]
    fn test_ordering_and_zero() {
        let mut a = [0u8; 32];
        a[31] = 1;
        let mut b = [0xffu8; 32];
        b[31] = 0;
        assert!(UInt256::from(b) < UInt256::from(a));
        assert!(UInt256::zero().is_zero());
        assert!(!UInt256::from(a).is_zero());
    }

    #[test]
    fn test_hash_matches_double_sha256() {
        let hash = UInt256::hash(b"");
        assert_eq!(
            hex::encode(hash.to_array()),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
