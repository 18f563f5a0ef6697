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

//! # Neo Legacy
//!
//! Signing and wire-format core for the Neo 2.x UTXO ledger.
//!
//! - [`neo_bigint`] - arbitrary-precision integers
//! - [`neo_cryptography`] - hashes, secp256r1 ECDSA, Base58Check, WIF, AES and scrypt
//! - [`neo_io`] - binary reader and writer
//! - [`neo_vm`] - opcodes, script building and disassembly
//! - [`neo_core`] - transactions and their canonical encoding
//! - [`neo_wallets`] - key pairs, NEP-2 and transaction signing
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_legacy::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
//! let key = KeyPair::generate(&mut rng);
//!
//! let mut tx = Transaction::contract();
//! tx.attributes.push(TransactionAttribute::remark("hello").unwrap());
//! Helper::sign_transaction(&mut tx, &[key], &mut rng).unwrap();
//!
//! let decoded = Transaction::from_bytes(&tx.to_bytes().unwrap()).unwrap();
//! assert!(Helper::verify_witness_signature(&decoded, &decoded.witnesses()[0]).unwrap());
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod logging;

pub use neo_bigint as bigint;
pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

pub use error::{Error, Result};
pub use logging::{init_logging, init_tracing, LogConfig, LogFormat};

/// Common imports
pub mod prelude {
    pub use crate::config::{ProtocolSettings, ScryptParameters, ADDRESS_VERSION};
    pub use crate::core::{
        CoinReference, Contract, Fixed8, Transaction, TransactionAttribute, TransactionBuilder,
        TransactionOutput, TransactionPayload, UInt160, UInt256, Unspent, Witness,
    };
    pub use crate::crypto::{ECDsa, ECPoint, Signature};
    pub use crate::io::{Serializable, SerializableExt};
    pub use crate::vm::{OpCode, ScriptBuilder};
    pub use crate::wallets::{Helper, KeyPair};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
