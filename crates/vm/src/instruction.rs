// Copyright (C) 2015-2025 The Neo Project.
//
// instruction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script disassembly.
//!
//! [`Disassembler`] walks a script lazily and yields one [`Instruction`] per
//! opcode. It stops after the end of the script or after the first
//! malformed instruction; that final instruction carries the error instead
//! of the iterator failing.

use crate::error::VmError;
use crate::op_code::{OpCode, OperandSize};
use neo_bigint::{BigInteger, Endianness};
use neo_config::MAX_SHORT_STRING;
use neo_io::{IoError, MemoryReader};
use std::fmt;
use tracing::trace;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Offset of the opcode byte within the script.
    pub address: usize,
    /// The raw opcode byte.
    pub byte: u8,
    /// The decoded opcode, `None` for an unassigned byte.
    pub opcode: Option<OpCode>,
    /// The operand bytes, without any length prefix.
    pub operand: Vec<u8>,
    /// Set on the last instruction of a malformed script.
    pub error: Option<VmError>,
}

impl Instruction {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn operand_size(&self) -> OperandSize {
        self.opcode
            .map(OpCode::operand_size)
            .unwrap_or(OperandSize::None)
    }

    /// The data pushed by `PUSH0`, `PUSHBYTESn` and `PUSHDATAn`.
    pub fn push_data(&self) -> Option<&[u8]> {
        if self.is_error() {
            return None;
        }
        match self.opcode? {
            op if op <= OpCode::PUSHDATA4 => Some(self.operand.as_slice()),
            _ => None,
        }
    }

    /// The integer pushed by this instruction, decoding push data as
    /// two's-complement little-endian.
    pub fn push_integer(&self) -> Option<BigInteger> {
        match self.opcode? {
            OpCode::PUSHM1 => Some(BigInteger::minus_one()),
            op if op >= OpCode::PUSH1 && op <= OpCode::PUSH16 => {
                Some(BigInteger::from(op as u8 - OpCode::PUSH1 as u8 + 1))
            }
            _ => self
                .push_data()
                .map(|data| BigInteger::from_signed_bytes(data, Endianness::Little)),
        }
    }

    /// The interop service name of a `SYSCALL`.
    pub fn syscall_name(&self) -> Option<&str> {
        match (self.opcode?, &self.error) {
            (OpCode::SYSCALL, None) => std::str::from_utf8(&self.operand).ok(),
            _ => None,
        }
    }

    /// The relative offset of a jump or call.
    pub fn jump_offset(&self) -> Option<i16> {
        match (self.opcode?.is_jump(), self.operand.as_slice()) {
            (true, &[lo, hi]) => Some(i16::from_le_bytes([lo, hi])),
            _ => None,
        }
    }

    /// The script hash targeted by `APPCALL` or `TAILCALL`.
    pub fn app_call_hash(&self) -> Option<[u8; 20]> {
        match self.opcode? {
            OpCode::APPCALL | OpCode::TAILCALL => self.operand.as_slice().try_into().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}: ", self.address)?;
        match self.opcode {
            Some(op) => write!(f, "{}", op)?,
            None => write!(f, "0x{:02x}", self.byte)?,
        }
        if let Some(name) = self.syscall_name() {
            write!(f, " {}", name)?;
        } else if !self.operand.is_empty() {
            write!(f, " {}", hex::encode(&self.operand))?;
        }
        if let Some(error) = &self.error {
            write!(f, " <{}>", error)?;
        }
        Ok(())
    }
}

/// Restartable lazy disassembler over a script.
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    script: &'a [u8],
    position: usize,
    finished: bool,
}

impl<'a> Disassembler<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            position: 0,
            finished: false,
        }
    }

    /// Rewinds to the first instruction.
    pub fn reset(&mut self) {
        self.position = 0;
        self.finished = false;
    }

    fn read_operand(reader: &mut MemoryReader<'a>, op: OpCode) -> Result<Vec<u8>, IoError> {
        match op.operand_size() {
            OperandSize::None => Ok(Vec::new()),
            OperandSize::Fixed(size) => reader.read_bytes(size),
            OperandSize::JumpOffset => reader.read_bytes(2),
            OperandSize::Prefix(width) => {
                let len = match width {
                    1 => reader.read_u8()? as usize,
                    2 => reader.read_u16()? as usize,
                    _ => reader.read_u32()? as usize,
                };
                reader.read_bytes(len)
            }
            OperandSize::SysCall => reader.read_var_bytes(MAX_SHORT_STRING),
        }
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        if self.finished || self.position >= self.script.len() {
            return None;
        }

        let address = self.position;
        let script = self.script;
        let mut reader = MemoryReader::new(&script[address..]);
        let byte = reader.read_u8().ok()?;

        let (opcode, operand, error) = match OpCode::from_u8(byte) {
            None => (
                None,
                Vec::new(),
                Some(VmError::UnknownOpcode {
                    offset: address,
                    byte,
                }),
            ),
            Some(op) => match Self::read_operand(&mut reader, op) {
                Ok(operand) => (Some(op), operand, None),
                Err(e) => (
                    Some(op),
                    reader.read_to_end().to_vec(),
                    Some(VmError::TruncatedOperand {
                        offset: address,
                        opcode: op,
                        reason: e.to_string(),
                    }),
                ),
            },
        };

        if let Some(error) = &error {
            trace!(%error, "disassembly stopped");
            self.finished = true;
        }
        self.position = address + reader.position();

        Some(Instruction {
            address,
            byte,
            opcode,
            operand,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_verification_script() {
        let mut script = vec![0x21];
        script.extend_from_slice(&[0x02; 33]);
        script.push(0xAC);

        let ops: Vec<_> = Disassembler::new(&script).collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].opcode, Some(OpCode::PUSHBYTES33));
        assert_eq!(ops[0].push_data(), Some(&[0x02; 33][..]));
        assert_eq!(ops[1].address, 34);
        assert_eq!(ops[1].opcode, Some(OpCode::CHECKSIG));
        assert!(ops.iter().all(|op| !op.is_error()));
    }

    #[test]
    fn test_unknown_opcode_ends_sequence() {
        let script = [0x51, 0x50, 0x51];
        let ops: Vec<_> = Disassembler::new(&script).collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[1].error,
            Some(VmError::UnknownOpcode { offset: 1, byte: 0x50 })
        );
        assert_eq!(ops[1].to_string(), "0001: 0x50 <Unknown opcode 0x50 at offset 1>");
    }

    #[test]
    fn test_short_read_flags_last_instruction() {
        let script = [0x4D, 0x05, 0x00, 0x01, 0x02];
        let ops: Vec<_> = Disassembler::new(&script).collect();
        assert_eq!(ops.len(), 1);
        assert!(ops[0].is_error());
        assert_eq!(ops[0].push_data(), None);
        assert_eq!(ops[0].error.as_ref().map(VmError::kind), Some(neo_config::ErrorKind::Format));
    }

    #[test]
    fn test_reset_restarts() {
        let script = [0x00, 0x4F, 0x60];
        let mut disassembler = Disassembler::new(&script);
        let first: Vec<_> = disassembler.by_ref().collect();
        assert!(disassembler.next().is_none());
        disassembler.reset();
        let second: Vec<_> = disassembler.collect();
        assert_eq!(first, second);
        assert_eq!(
            second.iter().filter_map(Instruction::push_integer).collect::<Vec<_>>(),
            vec![BigInteger::zero(), BigInteger::minus_one(), BigInteger::from(16)]
        );
    }

    #[test]
    fn test_operand_helpers() {
        let mut script = vec![0x68, 0x03];
        script.extend_from_slice(b"Foo");
        script.extend_from_slice(&[0x62, 0xfe, 0xff, 0x67]);
        script.extend_from_slice(&[9u8; 20]);

        let ops: Vec<_> = Disassembler::new(&script).collect();
        assert_eq!(ops[0].syscall_name(), Some("Foo"));
        assert_eq!(ops[1].jump_offset(), Some(-2));
        assert_eq!(ops[2].app_call_hash(), Some([9u8; 20]));
        assert_eq!(ops[1].to_string(), "0005: JMP feff");
    }
}
