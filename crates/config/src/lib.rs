// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Configuration Module
//!
//! Protocol constants, network identities and the loadable protocol settings
//! shared by every crate of the Neo 2.x signing and wire-format core.

pub mod error;
pub mod scrypt_parameters;
pub mod settings;

pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use scrypt_parameters::ScryptParameters;
pub use settings::{CodecLimits, ProtocolSettings};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a private key scalar in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of a Base58Check checksum in bytes
pub const CHECKSUM_SIZE: usize = 4;

/// Default address version byte ('A' prefixed addresses)
pub const ADDRESS_VERSION: u8 = 0x17;
/// Leading byte of a WIF payload
pub const WIF_VERSION: u8 = 0x80;
/// Trailing byte of a WIF payload marking a compressed public key
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;
/// NEP-2 payload prefix
pub const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];

/// Network limits constants
pub const MAX_TRANSACTION_SIZE: usize = 102_400; // 100KB
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
pub const MAX_TRANSACTION_OUTPUTS: usize = 65_536;
pub const MAX_TRANSACTION_INPUTS: usize = 0x0100_0000;
pub const MAX_TRANSACTION_WITNESSES: usize = 0x0100_0000;
pub const MAX_STATE_DESCRIPTORS: usize = 16;

/// Maximum script size in bytes
pub const MAX_SCRIPT_SIZE: usize = 65_536; // 64KB
/// Maximum payload of a variable-length attribute
pub const MAX_ATTRIBUTE_DATA_SIZE: usize = 65_535;
/// Maximum length of a syscall name or a short descriptive string
pub const MAX_SHORT_STRING: usize = 252;
/// Maximum length of an asset name
pub const MAX_ASSET_NAME: usize = 1024;

/// Number of fractional digits carried by Fixed8 values
pub const FIXED8_DECIMALS: u32 = 8;
/// 10^8
pub const FIXED8_ONE: u64 = 100_000_000;

/// Id of the governing token (NEO), little-endian,
/// `0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b`.
pub const GOVERNING_TOKEN_ID: [u8; HASH_SIZE] = [
    0x9b, 0x7c, 0xff, 0xda, 0xa6, 0x74, 0xbe, 0xae, 0x0f, 0x93, 0x0e, 0xbe, 0x60, 0x85, 0xaf, 0x90,
    0x93, 0xe5, 0xfe, 0x56, 0xb3, 0x4a, 0x5c, 0x22, 0x0c, 0xcd, 0xcf, 0x6e, 0xfc, 0x33, 0x6f, 0xc5,
];
/// Id of the utility token (GAS), little-endian,
/// `0x602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7`.
pub const UTILITY_TOKEN_ID: [u8; HASH_SIZE] = [
    0xe7, 0x2d, 0x28, 0x69, 0x79, 0xee, 0x6c, 0xb1, 0xb7, 0xe6, 0x5d, 0xfd, 0xdf, 0xb2, 0xe3, 0x84,
    0x10, 0x0b, 0x8d, 0x14, 0x8e, 0x77, 0x58, 0xde, 0x42, 0xe4, 0x16, 0x8b, 0x71, 0x79, 0x2c, 0x60,
];

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 7_630_401,
            NetworkType::TestNet => 1_953_787_457,
            NetworkType::Private => 56_753,
        }
    }

    /// Gets the address version
    pub fn address_version(&self) -> u8 {
        ADDRESS_VERSION
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}
