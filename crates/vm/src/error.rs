// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for script building and disassembly.

use crate::op_code::OpCode;
use neo_config::ErrorKind;
use thiserror::Error;

/// VM script errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("Unknown opcode 0x{byte:02x} at offset {offset}")]
    UnknownOpcode { offset: usize, byte: u8 },

    #[error("Truncated operand for {opcode} at offset {offset}: {reason}")]
    TruncatedOperand {
        offset: usize,
        opcode: OpCode,
        reason: String,
    },

    #[error("{0} is not a jump instruction")]
    InvalidJump(OpCode),

    #[error("Syscall name is {0} bytes, the limit is 252")]
    SyscallTooLong(usize),

    #[error("Cannot push {0} bytes, the limit is 4294967295")]
    PushTooLarge(usize),
}

impl VmError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VmError::UnknownOpcode { .. } | VmError::TruncatedOperand { .. } => ErrorKind::Format,
            VmError::InvalidJump(_) | VmError::SyscallTooLong(_) | VmError::PushTooLarge(_) => {
                ErrorKind::Constraint
            }
        }
    }
}

/// Result type for VM script operations
pub type VmResult<T> = std::result::Result<T, VmError>;
