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

//! Error types for binary encoding and decoding.

use neo_config::ErrorKind;
use thiserror::Error;

/// IO errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Value {value} exceeds the maximum of {max}")]
    ExceedsLimit { value: u64, max: u64 },

    #[error("Non-canonical var-int: {value} encoded with marker 0x{marker:02x}")]
    NonCanonicalVarInt { marker: u8, value: u64 },

    #[error("Invalid boolean value: {0}")]
    InvalidBool(u8),

    #[error("Invalid UTF-8 sequence")]
    InvalidUtf8,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("{0} trailing bytes after the object")]
    TrailingBytes(usize),

    #[error("Write failed: {0}")]
    Write(String),
}

impl IoError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        IoError::InvalidData(message.into())
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::ExceedsLimit { .. } => ErrorKind::Constraint,
            _ => ErrorKind::Format,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(error: std::io::Error) -> Self {
        IoError::Write(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for IoError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        IoError::InvalidUtf8
    }
}

/// Result type for IO operations
pub type IoResult<T> = std::result::Result<T, IoError>;
