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

//! Wallet error types.

use neo_config::{ConfigError, ErrorKind};
use neo_core::CoreError;
use neo_cryptography::{Base58Error, WifError};
use neo_vm::VmError;
use thiserror::Error;

/// Wallet-related errors.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Invalid NEP-2 key: {0}")]
    InvalidNep2Key(String),

    #[error("NEP-2 key does not match the passphrase")]
    Nep2Mismatch,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Address version mismatch: expected {expected:#04x}, got {actual:#04x}")]
    AddressVersion { expected: u8, actual: u8 },

    #[error("Not a single-signature verification script")]
    UnsupportedWitness,

    #[error(transparent)]
    Crypto(#[from] neo_cryptography::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WalletError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::InvalidNep2Key(_)
            | WalletError::InvalidAddress(_)
            | WalletError::AddressVersion { .. }
            | WalletError::UnsupportedWitness => ErrorKind::Format,
            WalletError::Nep2Mismatch => ErrorKind::Constraint,
            WalletError::Crypto(e) => e.kind(),
            WalletError::Core(e) => e.kind(),
            WalletError::Config(e) => e.kind(),
        }
    }
}

impl From<Base58Error> for WalletError {
    fn from(error: Base58Error) -> Self {
        WalletError::Crypto(error.into())
    }
}

impl From<VmError> for WalletError {
    fn from(error: VmError) -> Self {
        WalletError::Core(error.into())
    }
}

impl From<WifError> for WalletError {
    fn from(error: WifError) -> Self {
        WalletError::Crypto(error.into())
    }
}

/// Result type for wallet operations.
pub type WalletResult<T> = std::result::Result<T, WalletError>;
