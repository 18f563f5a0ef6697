// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for ledger values and the transaction codec.

use neo_bigint::BigIntError;
use neo_config::ErrorKind;
use neo_io::IoError;
use neo_vm::VmError;
use thiserror::Error;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Fixed8 overflow")]
    Fixed8Overflow,

    #[error("Fixed8 underflow")]
    Fixed8Underflow,

    #[error("Unknown transaction type 0x{0:02x}")]
    UnknownTransactionType(u8),

    #[error("Unsupported version {version} for {kind} transaction")]
    UnsupportedVersion { kind: &'static str, version: u8 },

    #[error("Unknown attribute usage 0x{0:02x}")]
    UnknownAttributeUsage(u8),

    #[error("Attribute {usage} expects {expected} bytes, got {actual}")]
    AttributeLength {
        usage: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Insufficient funds for asset {asset}: need {required}, have {available}")]
    InsufficientFunds {
        asset: String,
        required: String,
        available: String,
    },

    #[error("Invalid multisignature parameters: m={m}, n={n}")]
    InvalidMultiSig { m: usize, n: usize },

    #[error("Transaction is {size} bytes, the limit is {max}")]
    TransactionTooLarge { size: usize, max: usize },

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error(transparent)]
    Crypto(#[from] neo_cryptography::Error),

    #[error(transparent)]
    BigInt(#[from] BigIntError),
}

impl CoreError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Fixed8Overflow
            | CoreError::Fixed8Underflow
            | CoreError::InvalidMultiSig { .. }
            | CoreError::InsufficientFunds { .. }
            | CoreError::TransactionTooLarge { .. } => ErrorKind::Constraint,
            CoreError::Io(e) => e.kind(),
            CoreError::Vm(e) => e.kind(),
            CoreError::Crypto(e) => e.kind(),
            CoreError::BigInt(e) => e.kind(),
            _ => ErrorKind::Format,
        }
    }
}

impl From<CoreError> for IoError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Io(e) => e,
            other => IoError::invalid_data(other.to_string()),
        }
    }
}

impl From<neo_cryptography::ECCError> for CoreError {
    fn from(error: neo_cryptography::ECCError) -> Self {
        CoreError::Crypto(error.into())
    }
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
