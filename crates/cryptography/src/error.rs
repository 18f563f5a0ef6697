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

//! Error types for the cryptography crate.

use crate::base58::Base58Error;
use crate::ecc::ECCError;
use crate::wif::WifError;
use neo_bigint::BigIntError;
use neo_config::ErrorKind;
use thiserror::Error;

/// Cryptography errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Signing requires a private key")]
    MissingPrivateKey,

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Cipher error: {0}")]
    Cipher(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    #[error(transparent)]
    Ecc(#[from] ECCError),

    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error(transparent)]
    Wif(#[from] WifError),

    #[error(transparent)]
    BigInt(#[from] BigIntError),
}

impl Error {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidKey(_) | Error::InvalidSignature(_) | Error::Cipher(_) => {
                ErrorKind::Format
            }
            Error::MissingPrivateKey | Error::KeyDerivation(_) => ErrorKind::Constraint,
            Error::Ecc(e) => e.kind(),
            Error::Base58(_) | Error::Wif(_) => ErrorKind::Format,
            Error::BigInt(e) => e.kind(),
        }
    }
}

/// Result type for cryptography operations
pub type Result<T> = std::result::Result<T, Error>;
