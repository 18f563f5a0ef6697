// Copyright (C) 2015-2025 The Neo Project.
//
// payloads.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Kind-specific transaction payloads.
//!
//! Every transaction kind owns exactly one payload variant; the payload is
//! written between the version byte and the attributes.

use crate::coin_reference::CoinReference;
use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::uint160::UInt160;
use neo_config::{CodecLimits, MAX_ASSET_NAME, MAX_SHORT_STRING, MAX_STATE_DESCRIPTORS};
use neo_cryptography::ECPoint;
use neo_io::helper::{get_var_bytes_size, get_var_size};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_vm::ContractParameterType;
use std::fmt;

/// Largest contract script a Publish transaction may carry.
pub const MAX_CONTRACT_SCRIPT: usize = 0x0100_0000;
/// Largest Publish description.
pub const MAX_DESCRIPTION: usize = 65_536;
/// Largest state descriptor key.
pub const MAX_STATE_KEY: usize = 100;
/// Largest state descriptor field name.
pub const MAX_STATE_FIELD: usize = 32;
/// Largest state descriptor value.
pub const MAX_STATE_VALUE: usize = 65_535;

/// Transaction type tags.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Miner = 0x00,
    Issue = 0x01,
    Claim = 0x02,
    Enrollment = 0x20,
    Register = 0x40,
    Contract = 0x80,
    State = 0x90,
    Publish = 0xd0,
    Invocation = 0xd1,
}

impl TransactionType {
    pub fn from_u8(byte: u8) -> CoreResult<Self> {
        Ok(match byte {
            0x00 => Self::Miner,
            0x01 => Self::Issue,
            0x02 => Self::Claim,
            0x20 => Self::Enrollment,
            0x40 => Self::Register,
            0x80 => Self::Contract,
            0x90 => Self::State,
            0xd0 => Self::Publish,
            0xd1 => Self::Invocation,
            _ => return Err(CoreError::UnknownTransactionType(byte)),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Miner => "Miner",
            Self::Issue => "Issue",
            Self::Claim => "Claim",
            Self::Enrollment => "Enrollment",
            Self::Register => "Register",
            Self::Contract => "Contract",
            Self::State => "State",
            Self::Publish => "Publish",
            Self::Invocation => "Invocation",
        }
    }

    /// Highest version the ledger accepts for this kind.
    pub fn max_version(&self) -> u8 {
        match self {
            Self::Issue | Self::Publish | Self::Invocation => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Asset classes a Register transaction can create.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    GoverningToken = 0x00,
    UtilityToken = 0x01,
    Currency = 0x08,
    CreditFlag = 0x40,
    Token = 0x60,
    DutyFlag = 0x80,
    Share = 0x90,
    Invoice = 0x98,
}

impl AssetType {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => Self::GoverningToken,
            0x01 => Self::UtilityToken,
            0x08 => Self::Currency,
            0x40 => Self::CreditFlag,
            0x60 => Self::Token,
            0x80 => Self::DutyFlag,
            0x90 => Self::Share,
            0x98 => Self::Invoice,
            _ => return None,
        })
    }
}

/// Register transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPayload {
    pub asset_type: AssetType,
    pub name: String,
    pub amount: Fixed8,
    pub precision: u8,
    pub owner: ECPoint,
    pub admin: UInt160,
}

/// State descriptor target.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    Account = 0x40,
    Validator = 0x48,
}

/// One state change carried by a State transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDescriptor {
    pub state_type: StateType,
    pub key: Vec<u8>,
    pub field: String,
    pub value: Vec<u8>,
}

impl StateDescriptor {
    fn check(&self) -> CoreResult<()> {
        let (key_len, field) = match self.state_type {
            StateType::Account => (20, "Votes"),
            StateType::Validator => (33, "Registered"),
        };
        if self.key.len() != key_len || self.field != field {
            return Err(CoreError::InvalidTransaction(format!(
                "{:?} descriptor needs a {}-byte key and field {:?}",
                self.state_type, key_len, field
            )));
        }
        Ok(())
    }
}

impl Serializable for StateDescriptor {
    fn size(&self) -> usize {
        1 + get_var_bytes_size(self.key.len())
            + get_var_bytes_size(self.field.len())
            + get_var_bytes_size(self.value.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.state_type as u8)?;
        writer.write_var_bytes(&self.key)?;
        writer.write_var_string(&self.field)?;
        writer.write_var_bytes(&self.value)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let state_type = match reader.read_u8()? {
            0x40 => StateType::Account,
            0x48 => StateType::Validator,
            other => {
                return Err(IoError::invalid_data(format!(
                    "unknown state type 0x{:02x}",
                    other
                )))
            }
        };
        let descriptor = Self {
            state_type,
            key: reader.read_var_bytes(MAX_STATE_KEY)?,
            field: reader.read_var_string(MAX_STATE_FIELD)?,
            value: reader.read_var_bytes(MAX_STATE_VALUE)?,
        };
        descriptor.check()?;
        Ok(descriptor)
    }
}

/// Publish transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPayload {
    pub script: Vec<u8>,
    pub parameter_list: Vec<ContractParameterType>,
    pub return_type: ContractParameterType,
    /// Written only from version 1 on.
    pub need_storage: bool,
    pub name: String,
    pub code_version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

/// Invocation transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPayload {
    pub script: Vec<u8>,
    /// Written only from version 1 on; must be a whole number of GAS.
    pub gas: Fixed8,
}

/// The kind of a transaction together with its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionPayload {
    Miner { nonce: u32 },
    Issue,
    Claim { claims: Vec<CoinReference> },
    Enrollment { public_key: ECPoint },
    Register(RegisterPayload),
    Contract,
    State { descriptors: Vec<StateDescriptor> },
    Publish(PublishPayload),
    Invocation(InvocationPayload),
}

fn write_ec_point(writer: &mut BinaryWriter, point: &ECPoint) -> IoResult<()> {
    writer.write_bytes(&point.encode_point(true))
}

/// Reads an encoded point: `0x00` alone, or a tag followed by 32 or 64 bytes.
pub(crate) fn read_ec_point(reader: &mut MemoryReader) -> IoResult<ECPoint> {
    let tag = reader.peek()?;
    let len = match tag {
        0x00 => 1,
        0x02 | 0x03 => 33,
        0x04 => 65,
        other => {
            return Err(IoError::invalid_data(format!(
                "invalid point encoding tag 0x{:02x}",
                other
            )))
        }
    };
    let encoded = reader.read_memory(len)?;
    ECPoint::from_bytes(encoded).map_err(|e| IoError::invalid_data(e.to_string()))
}

fn read_parameter_type(byte: u8) -> IoResult<ContractParameterType> {
    ContractParameterType::from_u8(byte)
        .ok_or_else(|| IoError::invalid_data(format!("unknown parameter type 0x{:02x}", byte)))
}

impl TransactionPayload {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Miner { .. } => TransactionType::Miner,
            Self::Issue => TransactionType::Issue,
            Self::Claim { .. } => TransactionType::Claim,
            Self::Enrollment { .. } => TransactionType::Enrollment,
            Self::Register(_) => TransactionType::Register,
            Self::Contract => TransactionType::Contract,
            Self::State { .. } => TransactionType::State,
            Self::Publish(_) => TransactionType::Publish,
            Self::Invocation(_) => TransactionType::Invocation,
        }
    }

    /// Serialized size of the payload at `version`.
    pub fn size(&self, version: u8) -> usize {
        match self {
            Self::Miner { .. } => 4,
            Self::Issue | Self::Contract => 0,
            Self::Claim { claims } => {
                get_var_size(claims.len() as u64) + claims.iter().map(|c| c.size()).sum::<usize>()
            }
            Self::Enrollment { public_key } => public_key.size(),
            Self::Register(p) => {
                1 + get_var_bytes_size(p.name.len()) + 8 + 1 + p.owner.size() + 20
            }
            Self::State { descriptors } => {
                get_var_size(descriptors.len() as u64)
                    + descriptors.iter().map(|d| d.size()).sum::<usize>()
            }
            Self::Publish(p) => {
                get_var_bytes_size(p.script.len())
                    + get_var_bytes_size(p.parameter_list.len())
                    + 1
                    + usize::from(version >= 1)
                    + [&p.name, &p.code_version, &p.author, &p.email, &p.description]
                        .iter()
                        .map(|s| get_var_bytes_size(s.len()))
                        .sum::<usize>()
            }
            Self::Invocation(p) => {
                get_var_bytes_size(p.script.len()) + if version >= 1 { 8 } else { 0 }
            }
        }
    }

    pub(crate) fn serialize(&self, version: u8, writer: &mut BinaryWriter) -> IoResult<()> {
        match self {
            Self::Miner { nonce } => writer.write_u32(*nonce),
            Self::Issue | Self::Contract => Ok(()),
            Self::Claim { claims } => neo_io::helper::serialize_array(claims, writer),
            Self::Enrollment { public_key } => write_ec_point(writer, public_key),
            Self::Register(p) => {
                writer.write_u8(p.asset_type as u8)?;
                writer.write_var_string(&p.name)?;
                p.amount.serialize(writer)?;
                writer.write_u8(p.precision)?;
                write_ec_point(writer, &p.owner)?;
                p.admin.serialize(writer)
            }
            Self::State { descriptors } => neo_io::helper::serialize_array(descriptors, writer),
            Self::Publish(p) => {
                writer.write_var_bytes(&p.script)?;
                let parameters: Vec<u8> = p.parameter_list.iter().map(|t| *t as u8).collect();
                writer.write_var_bytes(&parameters)?;
                writer.write_u8(p.return_type as u8)?;
                if version >= 1 {
                    writer.write_bool(p.need_storage)?;
                }
                writer.write_var_string(&p.name)?;
                writer.write_var_string(&p.code_version)?;
                writer.write_var_string(&p.author)?;
                writer.write_var_string(&p.email)?;
                writer.write_var_string(&p.description)
            }
            Self::Invocation(p) => {
                writer.write_var_bytes(&p.script)?;
                if version >= 1 {
                    p.gas.serialize(writer)?;
                }
                Ok(())
            }
        }
    }

    pub(crate) fn deserialize(
        kind: TransactionType,
        version: u8,
        reader: &mut MemoryReader,
        limits: &CodecLimits,
    ) -> IoResult<Self> {
        let payload = match kind {
            TransactionType::Miner => Self::Miner {
                nonce: reader.read_u32()?,
            },
            TransactionType::Issue => Self::Issue,
            TransactionType::Contract => Self::Contract,
            TransactionType::Claim => Self::Claim {
                claims: neo_io::helper::deserialize_array(reader, limits.max_inputs)?,
            },
            TransactionType::Enrollment => Self::Enrollment {
                public_key: read_ec_point(reader)?,
            },
            TransactionType::Register => {
                let byte = reader.read_u8()?;
                let asset_type = AssetType::from_u8(byte).ok_or_else(|| {
                    IoError::invalid_data(format!("unknown asset type 0x{:02x}", byte))
                })?;
                Self::Register(RegisterPayload {
                    asset_type,
                    name: reader.read_var_string(MAX_ASSET_NAME)?,
                    amount: Fixed8::deserialize(reader)?,
                    precision: reader.read_u8()?,
                    owner: read_ec_point(reader)?,
                    admin: UInt160::deserialize(reader)?,
                })
            }
            TransactionType::State => Self::State {
                descriptors: neo_io::helper::deserialize_array(reader, MAX_STATE_DESCRIPTORS)?,
            },
            TransactionType::Publish => {
                let script = reader.read_var_bytes(MAX_CONTRACT_SCRIPT)?;
                let parameter_list = reader
                    .read_var_memory(MAX_SHORT_STRING)?
                    .iter()
                    .map(|b| read_parameter_type(*b))
                    .collect::<IoResult<Vec<_>>>()?;
                let return_type = read_parameter_type(reader.read_u8()?)?;
                let need_storage = version >= 1 && reader.read_bool()?;
                Self::Publish(PublishPayload {
                    script,
                    parameter_list,
                    return_type,
                    need_storage,
                    name: reader.read_var_string(MAX_SHORT_STRING)?,
                    code_version: reader.read_var_string(MAX_SHORT_STRING)?,
                    author: reader.read_var_string(MAX_SHORT_STRING)?,
                    email: reader.read_var_string(MAX_SHORT_STRING)?,
                    description: reader.read_var_string(MAX_DESCRIPTION)?,
                })
            }
            TransactionType::Invocation => {
                let script = reader.read_var_bytes(limits.max_script_size)?;
                let gas = if version >= 1 {
                    Fixed8::deserialize(reader)?
                } else {
                    Fixed8::ZERO
                };
                Self::Invocation(InvocationPayload { script, gas })
            }
        };
        payload.check()?;
        Ok(payload)
    }

    /// Checks the field constraints that the wire layout alone cannot express.
    pub fn check(&self) -> CoreResult<()> {
        match self {
            Self::Claim { claims } if claims.is_empty() => Err(CoreError::InvalidTransaction(
                "claim transaction without claims".to_string(),
            )),
            Self::Register(p) if p.precision > 8 => Err(CoreError::InvalidTransaction(format!(
                "asset precision {} exceeds 8",
                p.precision
            ))),
            Self::State { descriptors } => descriptors.iter().try_for_each(StateDescriptor::check),
            Self::Invocation(p) if p.script.is_empty() => Err(CoreError::InvalidTransaction(
                "invocation script is empty".to_string(),
            )),
            Self::Invocation(p) if !p.gas.is_integral() => Err(CoreError::InvalidTransaction(
                format!("invocation gas {} is not a whole number", p.gas),
            )),
            _ => Ok(()),
        }
    }
}
