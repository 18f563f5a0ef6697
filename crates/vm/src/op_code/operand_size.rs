// Copyright (C) 2015-2025 The Neo Project.
//
// operand_size.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Operand size information for AVM opcodes.

/// The shape of the operand that follows an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSize {
    /// No operand.
    None,

    /// Exactly this many bytes.
    Fixed(usize),

    /// A little-endian length of this many bytes, then that many bytes.
    Prefix(usize),

    /// A signed 16-bit little-endian offset relative to the opcode.
    JumpOffset,

    /// A var-int length then the interop service name.
    SysCall,
}

impl OperandSize {
    /// Creates a new operand size with a fixed size.
    ///
    /// # Arguments
    ///
    /// * `size` - The fixed size of the operand
    ///
    /// # Returns
    ///
    /// A new OperandSize with the specified fixed size
    pub fn fixed(size: usize) -> Self {
        OperandSize::Fixed(size)
    }

    /// Creates a new operand size with a size prefix.
    ///
    /// # Arguments
    ///
    /// * `size_prefix` - The width of the length prefix: 1, 2 or 4 bytes
    ///
    /// # Returns
    ///
    /// A new OperandSize with the specified size prefix
    pub fn prefix(size_prefix: usize) -> Self {
        OperandSize::Prefix(size_prefix)
    }

    /// Gets the fixed size of the operand, 0 when it is not fixed.
    pub fn size(&self) -> usize {
        match self {
            OperandSize::Fixed(size) => *size,
            OperandSize::JumpOffset => 2,
            _ => 0,
        }
    }

    /// Gets the width of the length prefix, 0 when there is none.
    pub fn size_prefix(&self) -> usize {
        match self {
            OperandSize::Prefix(prefix) => *prefix,
            _ => 0,
        }
    }

    pub fn has_fixed_size(&self) -> bool {
        self.size() > 0
    }

    pub fn has_size_prefix(&self) -> bool {
        self.size_prefix() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_size() {
        let op_size = OperandSize::fixed(4);
        assert_eq!(op_size.size(), 4);
        assert_eq!(op_size.size_prefix(), 0);
        assert!(op_size.has_fixed_size());
        assert!(!op_size.has_size_prefix());
    }

    #[test]
    fn test_size_prefix() {
        let op_size = OperandSize::prefix(2);
        assert_eq!(op_size.size(), 0);
        assert_eq!(op_size.size_prefix(), 2);
        assert!(!op_size.has_fixed_size());
        assert!(op_size.has_size_prefix());
    }

    #[test]
    fn test_jump_offset_is_two_bytes() {
        assert_eq!(OperandSize::JumpOffset.size(), 2);
        assert!(!OperandSize::SysCall.has_fixed_size());
        assert!(!OperandSize::None.has_size_prefix());
    }
}
