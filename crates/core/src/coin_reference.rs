// Copyright (C) 2015-2025 The Neo Project.
//
// coin_reference.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! A pointer to one output of an earlier transaction.

use crate::uint256::UInt256;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a serialized coin reference.
pub const COIN_REFERENCE_SIZE: usize = 32 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoinReference {
    /// Id of the transaction holding the output.
    pub prev_hash: UInt256,
    /// Position of the output in that transaction.
    pub prev_index: u16,
}

impl CoinReference {
    pub fn new(prev_hash: UInt256, prev_index: u16) -> Self {
        Self {
            prev_hash,
            prev_index,
        }
    }
}

impl fmt::Display for CoinReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prev_hash, self.prev_index)
    }
}

impl Serializable for CoinReference {
    fn size(&self) -> usize {
        COIN_REFERENCE_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        Serializable::serialize(&self.prev_hash, writer)?;
        writer.write_u16(self.prev_index)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            prev_hash: <UInt256 as Serializable>::deserialize(reader)?,
            prev_index: reader.read_u16()?,
        })
    }
}
