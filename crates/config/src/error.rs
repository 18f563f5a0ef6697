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

//! Error types shared by the configuration layer.

use thiserror::Error;

/// Broad classification every error in the workspace maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed string or buffer, unknown tag, checksum mismatch.
    Format,
    /// Division by zero, non-invertible value, out-of-range signature field.
    Arithmetic,
    /// A value does not fit its field or a count exceeds its ceiling.
    Constraint,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown network type: {0}")]
    UnknownNetwork(String),

    #[error("Invalid scrypt parameters: {0}")]
    InvalidScrypt(String),

    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to render settings: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidScrypt(_) | ConfigError::InvalidSetting { .. } => {
                ErrorKind::Constraint
            }
            _ => ErrorKind::Format,
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
