// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_output.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction outputs.

use crate::fixed8::Fixed8;
use crate::uint160::UInt160;
use crate::uint256::UInt256;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};

/// Size of a serialized output.
pub const TRANSACTION_OUTPUT_SIZE: usize = 32 + 8 + 20;

/// An amount of one asset assigned to a script hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub asset_id: UInt256,
    pub value: Fixed8,
    pub script_hash: UInt160,
}

impl TransactionOutput {
    pub fn new(asset_id: UInt256, value: Fixed8, script_hash: UInt160) -> Self {
        Self {
            asset_id,
            value,
            script_hash,
        }
    }
}

impl Serializable for TransactionOutput {
    fn size(&self) -> usize {
        TRANSACTION_OUTPUT_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        Serializable::serialize(&self.asset_id, writer)?;
        Serializable::serialize(&self.value, writer)?;
        Serializable::serialize(&self.script_hash, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            asset_id: <UInt256 as Serializable>::deserialize(reader)?,
            value: <Fixed8 as Serializable>::deserialize(reader)?,
            script_hash: <UInt160 as Serializable>::deserialize(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    #[test]
    fn test_layout() {
        let output = TransactionOutput::new(
            UInt256::from([1u8; 32]),
            Fixed8::from_raw(0x0102030405060708),
            UInt160::from([2u8; 20]),
        );
        let bytes = output.to_array().unwrap();
        assert_eq!(bytes.len(), TRANSACTION_OUTPUT_SIZE);
        assert_eq!(&bytes[32..40], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(&bytes[40..], &[2u8; 20]);
        assert_eq!(TransactionOutput::from_array(&bytes).unwrap(), output);
    }
}
