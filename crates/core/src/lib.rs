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

//! # Neo Core
//!
//! Ledger types of the Neo 2.x UTXO model and their canonical wire form.
//!
//! ## Example
//!
//! ```rust
//! use neo_core::{Fixed8, Transaction, TransactionOutput, UInt160, UInt256};
//!
//! let mut tx = Transaction::contract();
//! tx.outputs.push(TransactionOutput::new(
//!     UInt256::zero(),
//!     Fixed8::parse("1.5").unwrap(),
//!     UInt160::zero(),
//! ));
//! let id = tx.hash().unwrap();
//! assert_eq!(Transaction::from_bytes(&tx.to_bytes().unwrap()).unwrap().hash().unwrap(), id);
//! ```
//!
//! ## Modules
//!
//! - `uint160`, `uint256`, `fixed8` - fixed-width values
//! - `transaction`, `witness`, `coin_reference`, `transaction_output` - the ledger record
//! - `contract` - signature and multisignature verification scripts
//! - `builders` - input selection and change for new transactions

#![warn(rustdoc::missing_crate_level_docs)]

pub mod builders;
pub mod coin_reference;
pub mod contract;
pub mod error;
pub mod fixed8;
pub mod transaction;
pub mod transaction_output;
pub mod uint160;
pub mod uint256;
pub mod witness;

pub use builders::{TransactionBuilder, Unspent};
pub use coin_reference::CoinReference;
pub use contract::Contract;
pub use error::{CoreError, CoreResult};
pub use fixed8::Fixed8;
pub use transaction::{
    AssetType, AttributeShape, InvocationPayload, PublishPayload, RegisterPayload,
    StateDescriptor, StateType, Transaction, TransactionAttribute, TransactionAttributeUsage,
    TransactionPayload, TransactionType,
};
pub use transaction_output::TransactionOutput;
pub use uint160::UInt160;
pub use uint256::UInt256;
pub use witness::Witness;
