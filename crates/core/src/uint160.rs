// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, a 160-bit unsigned integer.
//!
//! Script hashes and asset administrators are `UInt160` values. The bytes are
//! kept in wire order (little-endian); text forms show them reversed.

use crate::error::{CoreError, CoreResult};
use neo_config::ADDRESS_SIZE;
use neo_cryptography::{hash160, Base58Error, FromBase58Check, ToBase58Check};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from its little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; UINT160_SIZE] = value.try_into().map_err(|_| {
            CoreError::InvalidFormat(format!("UInt160 needs 20 bytes, got {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Gets the little-endian bytes.
    #[inline]
    pub fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.0
    }

    /// Parses big-endian hex text, with or without a `0x` prefix.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.len() != UINT160_SIZE * 2 {
            return Err(CoreError::InvalidFormat(format!(
                "UInt160 needs 40 hex digits, got {}",
                s.len()
            )));
        }
        let mut bytes =
            hex::decode(s).map_err(|e| CoreError::InvalidFormat(format!("UInt160: {}", e)))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to `0x`-prefixed big-endian hex.
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Creates a `UInt160` from a script by computing its hash.
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    /// Renders this script hash as a Base58Check address.
    pub fn to_address(&self, version: u8) -> String {
        self.0.to_base58_check(Some(version), None)
    }

    /// Parses a Base58Check address carrying `version`.
    pub fn from_address(address: &str, version: u8) -> CoreResult<Self> {
        let payload = Vec::<u8>::from_base58_check(address, Some(version), None)
            .map_err(|e: Base58Error| CoreError::Crypto(e.into()))?;
        Self::from_bytes(&payload)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    #[inline]
    fn from(value: [u8; UINT160_SIZE]) -> Self {
        Self(value)
    }
}

impl From<UInt160> for [u8; UINT160_SIZE] {
    #[inline]
    fn from(value: UInt160) -> Self {
        value.0
    }
}

/// Numeric order: the last (most significant) byte compares first.
impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        UINT160_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_fixed()?))
    }
}
