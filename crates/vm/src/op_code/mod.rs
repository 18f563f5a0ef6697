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

//! The Neo 2.x AVM opcode table.
//!
//! Each opcode carries its byte value, its mnemonic and the shape of the
//! operand that follows it in a script.

mod operand_size;

pub use operand_size::OperandSize;

use std::fmt;

macro_rules! opcodes {
    ($($(#[$meta:meta])* $name:ident = $value:literal => $operand:expr,)*) => {
        /// An AVM instruction code.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum OpCode {
            $($(#[$meta])* $name = $value,)*
        }

        impl OpCode {
            /// Every defined opcode in byte order.
            pub const ALL: &'static [OpCode] = &[$(OpCode::$name,)*];

            /// Looks up the opcode for a byte, `None` when the byte is unassigned.
            pub fn from_u8(byte: u8) -> Option<Self> {
                match byte {
                    $($value => Some(OpCode::$name),)*
                    _ => None,
                }
            }

            /// The mnemonic, e.g. `"CHECKSIG"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(OpCode::$name => stringify!($name),)*
                }
            }

            /// The operand that follows this opcode in a script.
            pub fn operand_size(self) -> OperandSize {
                match self {
                    $(OpCode::$name => $operand,)*
                }
            }
        }
    };
}

opcodes! {
    // Constants
    /// An empty array of bytes is pushed onto the stack.
    PUSH0 = 0x00 => OperandSize::None,
    /// The next byte is data to be pushed onto the stack.
    PUSHBYTES1 = 0x01 => OperandSize::Fixed(1),
    PUSHBYTES2 = 0x02 => OperandSize::Fixed(2),
    PUSHBYTES3 = 0x03 => OperandSize::Fixed(3),
    PUSHBYTES4 = 0x04 => OperandSize::Fixed(4),
    PUSHBYTES5 = 0x05 => OperandSize::Fixed(5),
    PUSHBYTES6 = 0x06 => OperandSize::Fixed(6),
    PUSHBYTES7 = 0x07 => OperandSize::Fixed(7),
    PUSHBYTES8 = 0x08 => OperandSize::Fixed(8),
    PUSHBYTES9 = 0x09 => OperandSize::Fixed(9),
    PUSHBYTES10 = 0x0A => OperandSize::Fixed(10),
    PUSHBYTES11 = 0x0B => OperandSize::Fixed(11),
    PUSHBYTES12 = 0x0C => OperandSize::Fixed(12),
    PUSHBYTES13 = 0x0D => OperandSize::Fixed(13),
    PUSHBYTES14 = 0x0E => OperandSize::Fixed(14),
    PUSHBYTES15 = 0x0F => OperandSize::Fixed(15),
    PUSHBYTES16 = 0x10 => OperandSize::Fixed(16),
    PUSHBYTES17 = 0x11 => OperandSize::Fixed(17),
    PUSHBYTES18 = 0x12 => OperandSize::Fixed(18),
    PUSHBYTES19 = 0x13 => OperandSize::Fixed(19),
    PUSHBYTES20 = 0x14 => OperandSize::Fixed(20),
    PUSHBYTES21 = 0x15 => OperandSize::Fixed(21),
    PUSHBYTES22 = 0x16 => OperandSize::Fixed(22),
    PUSHBYTES23 = 0x17 => OperandSize::Fixed(23),
    PUSHBYTES24 = 0x18 => OperandSize::Fixed(24),
    PUSHBYTES25 = 0x19 => OperandSize::Fixed(25),
    PUSHBYTES26 = 0x1A => OperandSize::Fixed(26),
    PUSHBYTES27 = 0x1B => OperandSize::Fixed(27),
    PUSHBYTES28 = 0x1C => OperandSize::Fixed(28),
    PUSHBYTES29 = 0x1D => OperandSize::Fixed(29),
    PUSHBYTES30 = 0x1E => OperandSize::Fixed(30),
    PUSHBYTES31 = 0x1F => OperandSize::Fixed(31),
    PUSHBYTES32 = 0x20 => OperandSize::Fixed(32),
    PUSHBYTES33 = 0x21 => OperandSize::Fixed(33),
    PUSHBYTES34 = 0x22 => OperandSize::Fixed(34),
    PUSHBYTES35 = 0x23 => OperandSize::Fixed(35),
    PUSHBYTES36 = 0x24 => OperandSize::Fixed(36),
    PUSHBYTES37 = 0x25 => OperandSize::Fixed(37),
    PUSHBYTES38 = 0x26 => OperandSize::Fixed(38),
    PUSHBYTES39 = 0x27 => OperandSize::Fixed(39),
    PUSHBYTES40 = 0x28 => OperandSize::Fixed(40),
    PUSHBYTES41 = 0x29 => OperandSize::Fixed(41),
    PUSHBYTES42 = 0x2A => OperandSize::Fixed(42),
    PUSHBYTES43 = 0x2B => OperandSize::Fixed(43),
    PUSHBYTES44 = 0x2C => OperandSize::Fixed(44),
    PUSHBYTES45 = 0x2D => OperandSize::Fixed(45),
    PUSHBYTES46 = 0x2E => OperandSize::Fixed(46),
    PUSHBYTES47 = 0x2F => OperandSize::Fixed(47),
    PUSHBYTES48 = 0x30 => OperandSize::Fixed(48),
    PUSHBYTES49 = 0x31 => OperandSize::Fixed(49),
    PUSHBYTES50 = 0x32 => OperandSize::Fixed(50),
    PUSHBYTES51 = 0x33 => OperandSize::Fixed(51),
    PUSHBYTES52 = 0x34 => OperandSize::Fixed(52),
    PUSHBYTES53 = 0x35 => OperandSize::Fixed(53),
    PUSHBYTES54 = 0x36 => OperandSize::Fixed(54),
    PUSHBYTES55 = 0x37 => OperandSize::Fixed(55),
    PUSHBYTES56 = 0x38 => OperandSize::Fixed(56),
    PUSHBYTES57 = 0x39 => OperandSize::Fixed(57),
    PUSHBYTES58 = 0x3A => OperandSize::Fixed(58),
    PUSHBYTES59 = 0x3B => OperandSize::Fixed(59),
    PUSHBYTES60 = 0x3C => OperandSize::Fixed(60),
    PUSHBYTES61 = 0x3D => OperandSize::Fixed(61),
    PUSHBYTES62 = 0x3E => OperandSize::Fixed(62),
    PUSHBYTES63 = 0x3F => OperandSize::Fixed(63),
    PUSHBYTES64 = 0x40 => OperandSize::Fixed(64),
    PUSHBYTES65 = 0x41 => OperandSize::Fixed(65),
    PUSHBYTES66 = 0x42 => OperandSize::Fixed(66),
    PUSHBYTES67 = 0x43 => OperandSize::Fixed(67),
    PUSHBYTES68 = 0x44 => OperandSize::Fixed(68),
    PUSHBYTES69 = 0x45 => OperandSize::Fixed(69),
    PUSHBYTES70 = 0x46 => OperandSize::Fixed(70),
    PUSHBYTES71 = 0x47 => OperandSize::Fixed(71),
    PUSHBYTES72 = 0x48 => OperandSize::Fixed(72),
    PUSHBYTES73 = 0x49 => OperandSize::Fixed(73),
    PUSHBYTES74 = 0x4A => OperandSize::Fixed(74),
    /// The next 75 bytes are data to be pushed onto the stack.
    PUSHBYTES75 = 0x4B => OperandSize::Fixed(75),
    /// The next byte contains the number of bytes to be pushed.
    PUSHDATA1 = 0x4C => OperandSize::Prefix(1),
    /// The next two bytes contain the number of bytes to be pushed.
    PUSHDATA2 = 0x4D => OperandSize::Prefix(2),
    /// The next four bytes contain the number of bytes to be pushed.
    PUSHDATA4 = 0x4E => OperandSize::Prefix(4),
    /// The number -1 is pushed onto the stack.
    PUSHM1 = 0x4F => OperandSize::None,
    /// The number 1 is pushed onto the stack.
    PUSH1 = 0x51 => OperandSize::None,
    PUSH2 = 0x52 => OperandSize::None,
    PUSH3 = 0x53 => OperandSize::None,
    PUSH4 = 0x54 => OperandSize::None,
    PUSH5 = 0x55 => OperandSize::None,
    PUSH6 = 0x56 => OperandSize::None,
    PUSH7 = 0x57 => OperandSize::None,
    PUSH8 = 0x58 => OperandSize::None,
    PUSH9 = 0x59 => OperandSize::None,
    PUSH10 = 0x5A => OperandSize::None,
    PUSH11 = 0x5B => OperandSize::None,
    PUSH12 = 0x5C => OperandSize::None,
    PUSH13 = 0x5D => OperandSize::None,
    PUSH14 = 0x5E => OperandSize::None,
    PUSH15 = 0x5F => OperandSize::None,
    /// The number 16 is pushed onto the stack.
    PUSH16 = 0x60 => OperandSize::None,

    // Flow control
    /// Does nothing.
    NOP = 0x61 => OperandSize::None,
    JMP = 0x62 => OperandSize::JumpOffset,
    JMPIF = 0x63 => OperandSize::JumpOffset,
    JMPIFNOT = 0x64 => OperandSize::JumpOffset,
    CALL = 0x65 => OperandSize::JumpOffset,
    RET = 0x66 => OperandSize::None,
    /// Calls the contract whose script hash follows the opcode.
    APPCALL = 0x67 => OperandSize::Fixed(20),
    /// Invokes the interop service named by the var-string operand.
    SYSCALL = 0x68 => OperandSize::SysCall,
    TAILCALL = 0x69 => OperandSize::Fixed(20),

    // Stack
    DUPFROMALTSTACK = 0x6A => OperandSize::None,
    TOALTSTACK = 0x6B => OperandSize::None,
    FROMALTSTACK = 0x6C => OperandSize::None,
    XDROP = 0x6D => OperandSize::None,
    XSWAP = 0x72 => OperandSize::None,
    XTUCK = 0x73 => OperandSize::None,
    DEPTH = 0x74 => OperandSize::None,
    DROP = 0x75 => OperandSize::None,
    DUP = 0x76 => OperandSize::None,
    NIP = 0x77 => OperandSize::None,
    OVER = 0x78 => OperandSize::None,
    PICK = 0x79 => OperandSize::None,
    ROLL = 0x7A => OperandSize::None,
    ROT = 0x7B => OperandSize::None,
    SWAP = 0x7C => OperandSize::None,
    TUCK = 0x7D => OperandSize::None,

    // Splice
    CAT = 0x7E => OperandSize::None,
    SUBSTR = 0x7F => OperandSize::None,
    LEFT = 0x80 => OperandSize::None,
    RIGHT = 0x81 => OperandSize::None,
    SIZE = 0x82 => OperandSize::None,

    // Bitwise logic
    INVERT = 0x83 => OperandSize::None,
    AND = 0x84 => OperandSize::None,
    OR = 0x85 => OperandSize::None,
    XOR = 0x86 => OperandSize::None,
    EQUAL = 0x87 => OperandSize::None,

    // Arithmetic
    INC = 0x8B => OperandSize::None,
    DEC = 0x8C => OperandSize::None,
    SIGN = 0x8D => OperandSize::None,
    NEGATE = 0x8F => OperandSize::None,
    ABS = 0x90 => OperandSize::None,
    NOT = 0x91 => OperandSize::None,
    NZ = 0x92 => OperandSize::None,
    ADD = 0x93 => OperandSize::None,
    SUB = 0x94 => OperandSize::None,
    MUL = 0x95 => OperandSize::None,
    DIV = 0x96 => OperandSize::None,
    MOD = 0x97 => OperandSize::None,
    SHL = 0x98 => OperandSize::None,
    SHR = 0x99 => OperandSize::None,
    BOOLAND = 0x9A => OperandSize::None,
    BOOLOR = 0x9B => OperandSize::None,
    NUMEQUAL = 0x9C => OperandSize::None,
    NUMNOTEQUAL = 0x9E => OperandSize::None,
    LT = 0x9F => OperandSize::None,
    GT = 0xA0 => OperandSize::None,
    LTE = 0xA1 => OperandSize::None,
    GTE = 0xA2 => OperandSize::None,
    MIN = 0xA3 => OperandSize::None,
    MAX = 0xA4 => OperandSize::None,
    WITHIN = 0xA5 => OperandSize::None,

    // Crypto
    SHA1 = 0xA7 => OperandSize::None,
    SHA256 = 0xA8 => OperandSize::None,
    HASH160 = 0xA9 => OperandSize::None,
    HASH256 = 0xAA => OperandSize::None,
    /// Verifies a signature against a public key.
    CHECKSIG = 0xAC => OperandSize::None,
    VERIFY = 0xAD => OperandSize::None,
    /// Verifies m of n signatures against n public keys.
    CHECKMULTISIG = 0xAE => OperandSize::None,

    // Array and map
    ARRAYSIZE = 0xC0 => OperandSize::None,
    /// Packs the top n items into an array.
    PACK = 0xC1 => OperandSize::None,
    UNPACK = 0xC2 => OperandSize::None,
    PICKITEM = 0xC3 => OperandSize::None,
    SETITEM = 0xC4 => OperandSize::None,
    NEWARRAY = 0xC5 => OperandSize::None,
    NEWSTRUCT = 0xC6 => OperandSize::None,
    NEWMAP = 0xC7 => OperandSize::None,
    APPEND = 0xC8 => OperandSize::None,
    REVERSE = 0xC9 => OperandSize::None,
    REMOVE = 0xCA => OperandSize::None,
    HASKEY = 0xCB => OperandSize::None,
    KEYS = 0xCC => OperandSize::None,
    VALUES = 0xCD => OperandSize::None,

    // Stack isolation
    CALL_I = 0xE0 => OperandSize::Fixed(4),
    CALL_E = 0xE1 => OperandSize::Fixed(22),
    CALL_ED = 0xE2 => OperandSize::Fixed(2),
    CALL_ET = 0xE3 => OperandSize::Fixed(22),
    CALL_EDT = 0xE4 => OperandSize::Fixed(2),

    // Exceptions
    THROW = 0xF0 => OperandSize::None,
    THROWIFNOT = 0xF1 => OperandSize::None,
}

impl OpCode {
    /// Alias of `PUSH0`.
    pub const PUSHF: OpCode = OpCode::PUSH0;
    /// Alias of `PUSH1`.
    pub const PUSHT: OpCode = OpCode::PUSH1;

    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Whether the opcode takes a two-byte relative jump offset.
    pub fn is_jump(self) -> bool {
        matches!(self.operand_size(), OperandSize::JumpOffset)
    }

    /// Whether the opcode pushes a constant or data onto the stack.
    pub fn is_push(self) -> bool {
        self <= OpCode::PUSH16
    }

    /// Parses a mnemonic.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        OpCode::from_u8(byte).ok_or(byte)
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
