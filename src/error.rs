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

//! Top-level error type.

use neo_config::{ConfigError, ErrorKind};
use neo_core::CoreError;
use neo_wallets::WalletError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error("Logging already initialized: {0}")]
    LoggingInit(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Crypto(#[from] neo_cryptography::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LogFilter(_) => ErrorKind::Format,
            Error::LoggingInit(_) => ErrorKind::Constraint,
            Error::Config(e) => e.kind(),
            Error::Crypto(e) => e.kind(),
            Error::Core(e) => e.kind(),
            Error::Wallet(e) => e.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
