// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Config integration tests
//!
//! Loading protocol settings from disk and round-tripping them through TOML
//! and JSON.

use neo_config::{NetworkType, ProtocolSettings, ScryptParameters};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "network = \"Private\"").unwrap();
    writeln!(file, "magic = 56753").unwrap();
    writeln!(file, "[limits]").unwrap();
    writeln!(file, "max_outputs = 1024").unwrap();

    let settings = ProtocolSettings::load(file.path()).unwrap();
    assert_eq!(settings.network, NetworkType::Private);
    assert_eq!(settings.magic, 56_753);
    assert_eq!(settings.limits.max_outputs, 1024);
    assert_eq!(settings.limits.max_attributes, 16);
}

#[test]
fn test_missing_file_is_error() {
    assert!(ProtocolSettings::load("/nonexistent/neo-protocol.toml").is_err());
}

#[test]
fn test_toml_round_trip() {
    let mut settings = ProtocolSettings::for_network(NetworkType::TestNet);
    settings.scrypt = ScryptParameters::fast();

    let text = settings.to_toml_string().unwrap();
    let parsed = ProtocolSettings::from_toml_str(&text).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_json_serialization() {
    let settings = ProtocolSettings::default();
    let json = serde_json::to_string(&settings).unwrap();
    let parsed: ProtocolSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);
    assert!(json.contains("\"MainNet\""));
}

#[test]
fn test_mainnet_rejects_foreign_address_version() {
    let err = ProtocolSettings::from_toml_str("address_version = 53\n");
    assert!(err.is_err());
}
