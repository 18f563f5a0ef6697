// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder for AVM scripts.
//!
//! Integers -1 and 0 through 16 get their dedicated opcodes; any other
//! value is pushed as its minimal two's-complement little-endian bytes.

use crate::contract_parameter::ContractParameter;
use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;
use neo_bigint::{BigInteger, Endianness};
use neo_config::MAX_SHORT_STRING;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits an opcode followed by its raw operand.
    pub fn emit_with_operand(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(op);
        self.emit_bytes(operand)
    }

    /// Emits raw bytes to the script.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits a push operation with the given data.
    ///
    /// Up to 75 bytes use the inline `PUSHBYTESn` opcodes; longer data uses
    /// `PUSHDATA1`, `PUSHDATA2` or `PUSHDATA4` by length.
    ///
    /// # Errors
    ///
    /// [`VmError::PushTooLarge`] when the length does not fit `PUSHDATA4`.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        self.emit_push_header(data.len())?;
        Ok(self.emit_bytes(data))
    }

    /// The push opcode and length operand for `len` bytes of data.
    fn emit_push_header(&mut self, len: usize) -> VmResult<&mut Self> {
        if len <= OpCode::PUSHBYTES75 as usize {
            self.emit(len as u8);
        } else if len < 0x100 {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len < 0x10000 {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.emit_bytes(&(len as u16).to_le_bytes());
        } else {
            let len = u32::try_from(len).map_err(|_| VmError::PushTooLarge(len))?;
            self.emit_opcode(OpCode::PUSHDATA4);
            self.emit_bytes(&len.to_le_bytes());
        }
        Ok(self)
    }

    fn small_int_opcode(value: &BigInteger) -> Option<u8> {
        if *value == BigInteger::minus_one() {
            return Some(OpCode::PUSHM1 as u8);
        }
        match value.to_u64() {
            Some(0) => Some(OpCode::PUSH0 as u8),
            Some(small @ 1..=16) => Some(OpCode::PUSH1 as u8 - 1 + small as u8),
            _ => None,
        }
    }

    /// Emits a push operation for an integer.
    pub fn emit_push_number(&mut self, value: &BigInteger) -> VmResult<&mut Self> {
        match Self::small_int_opcode(value) {
            Some(op) => Ok(self.emit(op)),
            None => self.emit_push_bytes(&value.to_signed_bytes(Endianness::Little)),
        }
    }

    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        let value = BigInteger::from(value);
        if let Some(op) = Self::small_int_opcode(&value) {
            return self.emit(op);
        }
        // At most eight bytes, so always a PUSHBYTESn.
        let bytes = value.to_signed_bytes(Endianness::Little);
        self.emit(bytes.len() as u8).emit_bytes(&bytes)
    }

    /// Emits a push operation for a boolean.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    /// Emits a push operation for a string.
    pub fn emit_push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.emit_push_bytes(value.as_bytes())
    }

    /// Emits a typed contract parameter; arrays are pushed element by
    /// element in reverse, then packed.
    pub fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> VmResult<&mut Self> {
        match parameter {
            ContractParameter::Signature(signature) => self.emit_push_bytes(signature),
            ContractParameter::Boolean(value) => Ok(self.emit_push_bool(*value)),
            ContractParameter::Integer(value) => self.emit_push_number(value),
            ContractParameter::Hash160(hash) => self.emit_push_bytes(hash),
            ContractParameter::Hash256(hash) => self.emit_push_bytes(hash),
            ContractParameter::ByteArray(data) => self.emit_push_bytes(data),
            ContractParameter::PublicKey(point) => self.emit_push_bytes(&point.encode_point(true)),
            ContractParameter::String(value) => self.emit_push_string(value),
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    self.emit_push_parameter(item)?;
                }
                Ok(self
                    .emit_push_int(items.len() as i64)
                    .emit_opcode(OpCode::PACK))
            }
        }
    }

    /// Emits a jump operation.
    ///
    /// # Errors
    ///
    /// [`VmError::InvalidJump`] unless `op` is `JMP`, `JMPIF`, `JMPIFNOT` or `CALL`.
    pub fn emit_jump(&mut self, op: OpCode, offset: i16) -> VmResult<&mut Self> {
        if !op.is_jump() {
            return Err(VmError::InvalidJump(op));
        }
        Ok(self.emit_with_operand(op, &offset.to_le_bytes()))
    }

    /// Emits a call to the contract with the given little-endian script hash.
    pub fn emit_app_call(&mut self, script_hash: &[u8; 20], use_tail_call: bool) -> &mut Self {
        let op = if use_tail_call {
            OpCode::TAILCALL
        } else {
            OpCode::APPCALL
        };
        self.emit_with_operand(op, script_hash)
    }

    /// Emits `operation(args...)` against a contract: the arguments packed
    /// into an array, the operation name, then the app call.
    pub fn emit_app_call_operation(
        &mut self,
        script_hash: &[u8; 20],
        operation: &str,
        args: &[ContractParameter],
    ) -> VmResult<&mut Self> {
        for arg in args.iter().rev() {
            self.emit_push_parameter(arg)?;
        }
        self.emit_push_int(args.len() as i64)
            .emit_opcode(OpCode::PACK)
            .emit_push_string(operation)?;
        Ok(self.emit_app_call(script_hash, false))
    }

    /// Emits a syscall operation.
    ///
    /// # Errors
    ///
    /// [`VmError::SyscallTooLong`] when the name exceeds 252 bytes.
    pub fn emit_syscall(&mut self, api: &str) -> VmResult<&mut Self> {
        let api_bytes = api.as_bytes();
        if api_bytes.len() > MAX_SHORT_STRING {
            return Err(VmError::SyscallTooLong(api_bytes.len()));
        }

        self.emit_opcode(OpCode::SYSCALL);
        self.emit(api_bytes.len() as u8);
        Ok(self.emit_bytes(api_bytes))
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushed(value: i64) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(value);
        builder.into_bytes()
    }

    #[test]
    fn test_emit_opcode() {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_opcode(OpCode::PUSH1)
            .emit_opcode(OpCode::PUSH2)
            .emit_opcode(OpCode::ADD);

        assert_eq!(builder.to_array(), vec![0x51, 0x52, 0x93]);
    }

    #[test]
    fn test_emit_push_int() {
        assert_eq!(pushed(-1), vec![0x4F]);
        assert_eq!(pushed(0), vec![0x00]);
        assert_eq!(pushed(1), vec![0x51]);
        assert_eq!(pushed(16), vec![0x60]);
        assert_eq!(pushed(17), vec![0x01, 0x11]);
        assert_eq!(pushed(128), vec![0x02, 0x80, 0x00]);
        assert_eq!(pushed(255), vec![0x02, 0xff, 0x00]);
        assert_eq!(pushed(-2), vec![0x01, 0xfe]);
        assert_eq!(pushed(-129), vec![0x02, 0x7f, 0xff]);
        assert_eq!(pushed(65536), vec![0x03, 0x00, 0x00, 0x01]);
        assert_eq!(pushed(-100000), vec![0x03, 0x60, 0x79, 0xfe]);
    }

    #[test]
    fn test_emit_push_bool() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bool(true).emit_push_bool(false);
        assert_eq!(builder.to_array(), vec![0x51, 0x00]);
    }

    #[test]
    fn test_emit_push_bytes_lengths() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bytes(&[]).unwrap();
        assert_eq!(builder.to_array(), vec![0x00]);

        for (len, header) in [
            (75usize, vec![0x4B]),
            (76, vec![0x4C, 76]),
            (255, vec![0x4C, 0xff]),
            (256, vec![0x4D, 0x00, 0x01]),
            (65535, vec![0x4D, 0xff, 0xff]),
            (65536, vec![0x4E, 0x00, 0x00, 0x01, 0x00]),
        ] {
            let mut builder = ScriptBuilder::new();
            builder.emit_push_bytes(&vec![7u8; len]).unwrap();
            let script = builder.into_bytes();
            assert_eq!(&script[..header.len()], header.as_slice(), "length {len}");
            assert_eq!(script.len(), header.len() + len);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_push_length_must_fit_pushdata4() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_header(u32::MAX as usize).unwrap();
        assert_eq!(builder.to_array(), vec![0x4E, 0xff, 0xff, 0xff, 0xff]);

        let mut builder = ScriptBuilder::new();
        let too_long = u32::MAX as usize + 1;
        let error = builder.emit_push_header(too_long).unwrap_err();
        assert_eq!(error, VmError::PushTooLarge(too_long));
        assert_eq!(error.kind(), neo_config::ErrorKind::Constraint);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_emit_jump() {
        let mut builder = ScriptBuilder::new();
        builder.emit_jump(OpCode::JMP, 10).unwrap();
        builder.emit_jump(OpCode::JMPIFNOT, -3).unwrap();
        assert_eq!(builder.to_array(), vec![0x62, 10, 0, 0x64, 0xfd, 0xff]);

        assert_eq!(
            builder.emit_jump(OpCode::RET, 1).unwrap_err(),
            VmError::InvalidJump(OpCode::RET)
        );
    }

    #[test]
    fn test_emit_syscall() {
        let mut builder = ScriptBuilder::new();
        builder.emit_syscall("Neo.Runtime.CheckWitness").unwrap();

        let script = builder.to_array();
        assert_eq!(script[0], OpCode::SYSCALL as u8);
        assert_eq!(script[1], 24);
        assert_eq!(&script[2..], b"Neo.Runtime.CheckWitness");

        let long = "x".repeat(253);
        assert_eq!(
            builder.emit_syscall(&long).unwrap_err(),
            VmError::SyscallTooLong(253)
        );
    }

    #[test]
    fn test_emit_app_call_operation() {
        let hash = [0xabu8; 20];
        let mut builder = ScriptBuilder::new();
        builder.emit_app_call_operation(
            &hash,
            "transfer",
            &[ContractParameter::from(5i64), ContractParameter::Boolean(true)],
        )
        .unwrap();

        let mut expected = vec![0x51, 0x55, 0x52, 0xC1, 0x08];
        expected.extend_from_slice(b"transfer");
        expected.push(0x67);
        expected.extend_from_slice(&hash);
        assert_eq!(builder.to_array(), expected);

        let mut tail = ScriptBuilder::new();
        tail.emit_app_call(&hash, true);
        assert_eq!(tail.to_array()[0], 0x69);
    }

    #[test]
    fn test_emit_push_nested_array() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_parameter(&ContractParameter::Array(vec![
            ContractParameter::ByteArray(vec![1, 2]),
            ContractParameter::Array(vec![]),
        ]))
        .unwrap();
        assert_eq!(
            builder.to_array(),
            vec![0x00, 0xC1, 0x02, 0x01, 0x02, 0x52, 0xC1]
        );
    }
}
