// Copyright (C) 2015-2025 The Neo Project.
//
// settings.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Protocol settings
//!
//! Runtime-selectable protocol values: network identity, address version,
//! scrypt cost and the ceilings the binary codec enforces while decoding.

use crate::{
    ConfigError, ConfigResult, NetworkType, ScryptParameters, ADDRESS_VERSION,
    MAX_SCRIPT_SIZE, MAX_TRANSACTION_ATTRIBUTES, MAX_TRANSACTION_INPUTS,
    MAX_TRANSACTION_OUTPUTS, MAX_TRANSACTION_SIZE, MAX_TRANSACTION_WITNESSES,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Ceilings applied by the ledger codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    pub max_transaction_size: usize,
    pub max_attributes: usize,
    pub max_inputs: usize,
    pub max_outputs: usize,
    pub max_witnesses: usize,
    pub max_script_size: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_transaction_size: MAX_TRANSACTION_SIZE,
            max_attributes: MAX_TRANSACTION_ATTRIBUTES,
            max_inputs: MAX_TRANSACTION_INPUTS,
            max_outputs: MAX_TRANSACTION_OUTPUTS,
            max_witnesses: MAX_TRANSACTION_WITNESSES,
            max_script_size: MAX_SCRIPT_SIZE,
        }
    }
}

/// Protocol settings for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolSettings {
    pub network: NetworkType,
    pub magic: u32,
    pub address_version: u8,
    pub scrypt: ScryptParameters,
    pub limits: CodecLimits,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::for_network(NetworkType::MainNet)
    }
}

impl ProtocolSettings {
    /// Default settings for the given network.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            magic: network.magic(),
            address_version: network.address_version(),
            scrypt: ScryptParameters::default_nep2(),
            limits: CodecLimits::default(),
        }
    }

    /// Parses settings from TOML text and validates them.
    ///
    /// Missing keys fall back to the MainNet defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let settings: ProtocolSettings = toml::from_str(text)?;
        settings.validate()?;
        debug!(
            network = %settings.network,
            magic = settings.magic,
            address_version = settings.address_version,
            "loaded protocol settings"
        );
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Renders the settings as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks internal consistency.
    pub fn validate(&self) -> ConfigResult<()> {
        self.scrypt.validate()?;

        if self.limits.max_attributes > MAX_TRANSACTION_ATTRIBUTES {
            return Err(ConfigError::InvalidSetting {
                field: "limits.max_attributes",
                reason: format!("must not exceed {}", MAX_TRANSACTION_ATTRIBUTES),
            });
        }
        if self.limits.max_script_size == 0 || self.limits.max_transaction_size == 0 {
            return Err(ConfigError::InvalidSetting {
                field: "limits",
                reason: "size ceilings must be positive".to_string(),
            });
        }
        if self.address_version != ADDRESS_VERSION && self.network == NetworkType::MainNet {
            return Err(ConfigError::InvalidSetting {
                field: "address_version",
                reason: format!("MainNet uses version {:#04x}", ADDRESS_VERSION),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_mainnet() {
        let settings = ProtocolSettings::default();
        assert_eq!(settings.network, NetworkType::MainNet);
        assert_eq!(settings.magic, 7_630_401);
        assert_eq!(settings.address_version, 0x17);
        assert_eq!(settings.limits.max_attributes, 16);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings = ProtocolSettings::from_toml_str(
            r#"
            network = "TestNet"
            magic = 1953787457

            [scrypt]
            n = 1024
            r = 1
            p = 1
            "#,
        )
        .unwrap();
        assert_eq!(settings.network, NetworkType::TestNet);
        assert_eq!(settings.scrypt, ScryptParameters::fast());
        assert_eq!(settings.limits, CodecLimits::default());
    }

    #[test]
    fn test_invalid_scrypt_is_rejected() {
        let err = ProtocolSettings::from_toml_str("[scrypt]\nn = 1000\nr = 1\np = 1\n").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Constraint);
    }

    #[test]
    fn test_malformed_toml_is_format_error() {
        let err = ProtocolSettings::from_toml_str("network = [").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Format);
    }
}
