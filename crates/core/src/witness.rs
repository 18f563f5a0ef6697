// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Witness: an invocation script paired with the verification script it
//! satisfies.

use crate::uint160::UInt160;
use neo_config::MAX_SCRIPT_SIZE;
use neo_io::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};

/// Represents a witness of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Witness {
    /// Pushes the signatures or other arguments.
    pub invocation_script: Vec<u8>,
    /// The script whose hash identifies the account being proven.
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// The hash of the verification script.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script)
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_bytes_size(self.invocation_script.len())
            + get_var_bytes_size(self.verification_script.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script)?;
        writer.write_var_bytes(&self.verification_script)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_SCRIPT_SIZE)?;
        let verification_script = reader.read_var_bytes(MAX_SCRIPT_SIZE)?;
        Ok(Self {
            invocation_script,
            verification_script,
        })
    }
}
