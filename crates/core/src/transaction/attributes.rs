// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes.
//!
//! The usage byte fixes the payload shape: hashes and ECDH keys carry 32
//! bytes, `Script` 20, `DescriptionUrl` a one-byte length prefix, and
//! `Description` and the remarks a var-int prefix.

use crate::error::{CoreError, CoreResult};
use neo_config::{ADDRESS_SIZE, HASH_SIZE, MAX_ATTRIBUTE_DATA_SIZE};
use neo_io::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction attribute usages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionAttributeUsage {
    /// 0x00
    ContractHash,
    /// 0x02, x coordinate of a key with an even y.
    Ecdh02,
    /// 0x03, x coordinate of a key with an odd y.
    Ecdh03,
    /// 0x20, an additional script hash to verify.
    Script,
    /// 0x30
    Vote,
    /// 0x81
    DescriptionUrl,
    /// 0x90
    Description,
    /// `Hash1` through `Hash15`, 0xa1 to 0xaf.
    Hash(u8),
    /// `Remark` (0) through `Remark15`, 0xf0 to 0xff.
    Remark(u8),
}

/// How the payload of an attribute is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    Fixed(usize),
    /// One length byte, then the data.
    ShortPrefixed,
    /// Var-int length, then at most 65535 bytes.
    VarBytes,
}

impl TransactionAttributeUsage {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => Self::ContractHash,
            0x02 => Self::Ecdh02,
            0x03 => Self::Ecdh03,
            0x20 => Self::Script,
            0x30 => Self::Vote,
            0x81 => Self::DescriptionUrl,
            0x90 => Self::Description,
            0xa1..=0xaf => Self::Hash(byte - 0xa0),
            0xf0..=0xff => Self::Remark(byte - 0xf0),
            _ => return None,
        })
    }

    pub fn byte(&self) -> u8 {
        match self {
            Self::ContractHash => 0x00,
            Self::Ecdh02 => 0x02,
            Self::Ecdh03 => 0x03,
            Self::Script => 0x20,
            Self::Vote => 0x30,
            Self::DescriptionUrl => 0x81,
            Self::Description => 0x90,
            Self::Hash(n) => 0xa0u8.wrapping_add(*n),
            Self::Remark(n) => 0xf0u8.wrapping_add(*n),
        }
    }

    pub fn shape(&self) -> AttributeShape {
        match self {
            Self::ContractHash | Self::Vote | Self::Hash(_) | Self::Ecdh02 | Self::Ecdh03 => {
                AttributeShape::Fixed(HASH_SIZE)
            }
            Self::Script => AttributeShape::Fixed(ADDRESS_SIZE),
            Self::DescriptionUrl => AttributeShape::ShortPrefixed,
            Self::Description | Self::Remark(_) => AttributeShape::VarBytes,
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            Self::Hash(n) => (1..=15).contains(n),
            Self::Remark(n) => *n <= 15,
            _ => true,
        }
    }
}

impl fmt::Display for TransactionAttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(n) => write!(f, "Hash{}", n),
            Self::Remark(0) => f.write_str("Remark"),
            Self::Remark(n) => write!(f, "Remark{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

/// A typed byte blob attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionAttribute {
    usage: TransactionAttributeUsage,
    data: Vec<u8>,
}

impl TransactionAttribute {
    /// Creates an attribute, checking the payload against the usage's shape.
    pub fn new(usage: TransactionAttributeUsage, data: Vec<u8>) -> CoreResult<Self> {
        if !usage.is_valid() {
            return Err(CoreError::UnknownAttributeUsage(usage.byte()));
        }
        let limit = match usage.shape() {
            AttributeShape::Fixed(expected) if data.len() != expected => {
                return Err(CoreError::AttributeLength {
                    usage: usage.to_string(),
                    expected,
                    actual: data.len(),
                });
            }
            AttributeShape::Fixed(_) => return Ok(Self { usage, data }),
            AttributeShape::ShortPrefixed => u8::MAX as usize,
            AttributeShape::VarBytes => MAX_ATTRIBUTE_DATA_SIZE,
        };
        if data.len() > limit {
            return Err(CoreError::AttributeLength {
                usage: usage.to_string(),
                expected: limit,
                actual: data.len(),
            });
        }
        Ok(Self { usage, data })
    }

    /// A `Remark` carrying free text, typically used to make ids unique.
    pub fn remark(text: &str) -> CoreResult<Self> {
        Self::new(TransactionAttributeUsage::Remark(0), text.as_bytes().to_vec())
    }

    pub fn script(script_hash: &crate::UInt160) -> Self {
        Self {
            usage: TransactionAttributeUsage::Script,
            data: script_hash.to_array().to_vec(),
        }
    }

    pub fn usage(&self) -> TransactionAttributeUsage {
        self.usage
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self.usage.shape() {
            AttributeShape::Fixed(len) => len,
            AttributeShape::ShortPrefixed => 1 + self.data.len(),
            AttributeShape::VarBytes => get_var_bytes_size(self.data.len()),
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.usage.byte())?;
        match self.usage.shape() {
            AttributeShape::Fixed(_) => writer.write_bytes(&self.data),
            AttributeShape::ShortPrefixed => {
                writer.write_u8(self.data.len() as u8)?;
                writer.write_bytes(&self.data)
            }
            AttributeShape::VarBytes => writer.write_var_bytes(&self.data),
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let byte = reader.read_u8()?;
        let usage = TransactionAttributeUsage::from_u8(byte)
            .ok_or_else(|| IoError::from(CoreError::UnknownAttributeUsage(byte)))?;
        let data = match usage.shape() {
            AttributeShape::Fixed(len) => reader.read_bytes(len)?,
            AttributeShape::ShortPrefixed => {
                let len = reader.read_u8()? as usize;
                reader.read_bytes(len)?
            }
            AttributeShape::VarBytes => reader.read_var_bytes(MAX_ATTRIBUTE_DATA_SIZE)?,
        };
        Ok(Self { usage, data })
    }
}
