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

//! Neo Wallets Library
//!
//! Key handling for the Neo 2.x UTXO ledger:
//! - `KeyPair` with WIF import and export
//! - NEP-2 passphrase protection
//! - Address conversion and transaction signing through `Helper`

pub mod error;
pub mod helper;
pub mod key_pair;
pub mod nep2;

pub use error::{WalletError, WalletResult};
pub use helper::Helper;
pub use key_pair::KeyPair;
pub use nep2::{decrypt_nep2, encrypt_nep2};
