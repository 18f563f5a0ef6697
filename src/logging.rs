// Copyright (C) 2015-2025 The Neo Project.
//
// logging.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Subscriber setup for applications built on these crates.
//!
//! The library crates only emit `tracing` events; nothing here runs unless
//! the application calls it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Compact,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directives, e.g. `info,neo_core=debug`
    pub level: String,
    pub format: LogFormat,
    pub include_target: bool,
    /// Read `RUST_LOG` before falling back to `level`
    pub use_env: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            include_target: true,
            use_env: true,
        }
    }
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    if config.use_env {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(&config.level).map_err(|e| Error::LogFilter(e.to_string()))
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// `LogFilter` for unparsable directives, `LoggingInit` when a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(config.include_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.include_target))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.include_target))
            .try_init(),
    };
    installed.map_err(|e| Error::LoggingInit(e.to_string()))
}

/// Installs a text subscriber with the given filter directives.
pub fn init_tracing(filter: &str) -> Result<()> {
    init_logging(&LogConfig {
        level: filter.to_string(),
        use_env: false,
        ..LogConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let config = LogConfig {
            level: "neo_core=notalevel".to_string(),
            use_env: false,
            ..LogConfig::default()
        };
        assert!(matches!(build_filter(&config), Err(Error::LogFilter(_))));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing("warn");
        assert!(matches!(init_tracing("warn"), Err(Error::LoggingInit(_))));
    }
}
