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

//! Transaction module for Neo 2.x UTXO transactions.
//!
//! - `core` - the `Transaction` struct, witness ordering and the id
//! - `payloads` - transaction kinds and their kind-specific fields
//! - `attributes` - attribute usages and payload shapes
//! - `serialization` - the signed and unsigned wire forms

pub mod attributes;
pub mod core;
pub mod payloads;
pub mod serialization;

pub use attributes::{AttributeShape, TransactionAttribute, TransactionAttributeUsage};
pub use self::core::Transaction;
pub use payloads::{
    AssetType, InvocationPayload, PublishPayload, RegisterPayload, StateDescriptor, StateType,
    TransactionPayload, TransactionType,
};
