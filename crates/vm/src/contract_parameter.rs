// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed contract invocation arguments.

use neo_bigint::BigInteger;
use neo_cryptography::ECPoint;
use std::fmt;

/// The type tag of a contract parameter, as stored in Publish transactions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractParameterType {
    Signature = 0x00,
    Boolean = 0x01,
    Integer = 0x02,
    Hash160 = 0x03,
    Hash256 = 0x04,
    #[default]
    ByteArray = 0x05,
    PublicKey = 0x06,
    String = 0x07,
    Array = 0x10,
    Map = 0x12,
    InteropInterface = 0xf0,
    /// Only valid as a return type.
    Void = 0xff,
}

impl ContractParameterType {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => ContractParameterType::Signature,
            0x01 => ContractParameterType::Boolean,
            0x02 => ContractParameterType::Integer,
            0x03 => ContractParameterType::Hash160,
            0x04 => ContractParameterType::Hash256,
            0x05 => ContractParameterType::ByteArray,
            0x06 => ContractParameterType::PublicKey,
            0x07 => ContractParameterType::String,
            0x10 => ContractParameterType::Array,
            0x12 => ContractParameterType::Map,
            0xf0 => ContractParameterType::InteropInterface,
            0xff => ContractParameterType::Void,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::String => "String",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value passed to a contract through an invocation script.
///
/// Hashes are carried in their little-endian wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Signature([u8; 64]),
    Boolean(bool),
    Integer(BigInteger),
    Hash160([u8; 20]),
    Hash256([u8; 32]),
    ByteArray(Vec<u8>),
    PublicKey(ECPoint),
    String(String),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    pub fn parameter_type(&self) -> ContractParameterType {
        match self {
            ContractParameter::Signature(_) => ContractParameterType::Signature,
            ContractParameter::Boolean(_) => ContractParameterType::Boolean,
            ContractParameter::Integer(_) => ContractParameterType::Integer,
            ContractParameter::Hash160(_) => ContractParameterType::Hash160,
            ContractParameter::Hash256(_) => ContractParameterType::Hash256,
            ContractParameter::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameter::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameter::String(_) => ContractParameterType::String,
            ContractParameter::Array(_) => ContractParameterType::Array,
        }
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(BigInteger::from(value))
    }
}

impl From<BigInteger> for ContractParameter {
    fn from(value: BigInteger) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        ContractParameter::ByteArray(value)
    }
}

impl From<ECPoint> for ContractParameter {
    fn from(value: ECPoint) -> Self {
        ContractParameter::PublicKey(value)
    }
}
