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

//! # Neo Virtual Machine scripts
//!
//! The Neo 2.x AVM opcode table together with the tools that produce and
//! inspect scripts: [`ScriptBuilder`] emits pushes, calls and syscalls,
//! and [`Disassembler`] walks a script back into [`Instruction`]s.
//!
//! ## Example
//!
//! ```rust
//! use neo_vm::{Disassembler, OpCode, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push_int(17).emit_opcode(OpCode::RET);
//! let script = builder.to_array();
//!
//! let ops: Vec<_> = Disassembler::new(&script).collect();
//! assert_eq!(ops[0].opcode, Some(OpCode::PUSHBYTES1));
//! assert_eq!(ops[1].opcode, Some(OpCode::RET));
//! ```

pub mod contract_parameter;
pub mod error;
pub mod instruction;
pub mod op_code;
pub mod script_builder;

pub use contract_parameter::{ContractParameter, ContractParameterType};
pub use error::{VmError, VmResult};
pub use instruction::{Disassembler, Instruction};
pub use op_code::{OpCode, OperandSize};
pub use script_builder::ScriptBuilder;
