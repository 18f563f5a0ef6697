// Copyright (C) 2015-2025 The Neo Project.
//
// memory_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Bounds-checked reader over a borrowed byte slice.

use crate::{IoError, IoResult};
use byteorder::{ByteOrder, LittleEndian};
use std::mem::size_of;

/// Reads Neo wire-format values from a byte slice.
///
/// Every read checks the remaining length first, so a short buffer yields
/// [`IoError::UnexpectedEof`] rather than a panic.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        let remaining = self.remaining();
        if move_by > remaining {
            Err(IoError::UnexpectedEof {
                needed: move_by,
                remaining,
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline(always)]
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure_position(1)?;
        Ok(self.memory[self.pos])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::InvalidBool(other)),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_i8(&mut self) -> IoResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(LittleEndian::read_u16(self.read_memory(size_of::<u16>())?))
    }

    #[inline(always)]
    pub fn read_i16(&mut self) -> IoResult<i16> {
        Ok(LittleEndian::read_i16(self.read_memory(size_of::<i16>())?))
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(LittleEndian::read_u32(self.read_memory(size_of::<u32>())?))
    }

    #[inline(always)]
    pub fn read_i32(&mut self) -> IoResult<i32> {
        Ok(LittleEndian::read_i32(self.read_memory(size_of::<i32>())?))
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(LittleEndian::read_u64(self.read_memory(size_of::<u64>())?))
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(LittleEndian::read_i64(self.read_memory(size_of::<i64>())?))
    }

    /// Reads a variable-length integer no greater than `max`.
    ///
    /// Values must use their shortest encoding; a value that would have fit
    /// a smaller marker is rejected as non-canonical.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let marker = self.read_u8()?;
        let (value, floor) = match marker {
            0xfd => (self.read_u16()? as u64, 0xfd),
            0xfe => (self.read_u32()? as u64, 0x1_0000),
            0xff => (self.read_u64()?, 0x1_0000_0000),
            _ => (marker as u64, 0),
        };
        if value < floor {
            return Err(IoError::NonCanonicalVarInt { marker, value });
        }
        if value > max {
            return Err(IoError::ExceedsLimit { value, max });
        }
        Ok(value)
    }

    #[inline(always)]
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    pub fn read_bytes(&mut self, count: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_memory(count)?.to_vec())
    }

    pub fn read_fixed<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_memory(N)?);
        Ok(out)
    }

    #[inline(always)]
    pub fn read_var_memory(&mut self, max: usize) -> IoResult<&'a [u8]> {
        let length = self.read_var_int(max as u64)? as usize;
        self.read_memory(length)
    }

    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_var_memory(max)?.to_vec())
    }

    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let data = self.read_var_memory(max)?;
        Ok(String::from_utf8(data.to_vec())?)
    }

    #[inline(always)]
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let result = &self.memory[self.pos..];
        self.pos = self.memory.len();
        result
    }

    /// Fails unless every byte has been consumed.
    pub fn ensure_end(&self) -> IoResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(IoError::TrailingBytes(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [1u8, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xff];
        let mut reader = MemoryReader::new(&data);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0x12345678);
        assert_eq!(reader.peek().unwrap(), 0xff);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert!(reader.is_empty());
        assert_eq!(
            reader.read_u8(),
            Err(IoError::UnexpectedEof {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_read_bool_rejects_other_values() {
        let mut reader = MemoryReader::new(&[2]);
        assert_eq!(reader.read_bool(), Err(IoError::InvalidBool(2)));
    }

    #[test]
    fn test_var_int_limits() {
        let mut reader = MemoryReader::new(&[0xfd, 0x00, 0x01]);
        assert_eq!(
            reader.read_var_int(0xff),
            Err(IoError::ExceedsLimit {
                value: 0x100,
                max: 0xff
            })
        );

        let mut reader = MemoryReader::new(&[0xfd, 0x00, 0x01]);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x100);
    }

    #[test]
    fn test_var_int_rejects_non_canonical() {
        for data in [
            &[0xfd, 0xfc, 0x00][..],
            &[0xfe, 0xff, 0xff, 0x00, 0x00][..],
            &[0xff, 0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0][..],
        ] {
            let mut reader = MemoryReader::new(data);
            assert!(matches!(
                reader.read_var_int(u64::MAX),
                Err(IoError::NonCanonicalVarInt { .. })
            ));
        }
    }

    #[test]
    fn test_var_bytes_short_read() {
        let mut reader = MemoryReader::new(&[0x05, 1, 2]);
        assert_eq!(
            reader.read_var_bytes(16),
            Err(IoError::UnexpectedEof {
                needed: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_var_string() {
        let mut reader = MemoryReader::new(&[0x03, b'N', b'E', b'O', 0x01, 0xff]);
        assert_eq!(reader.read_var_string(3).unwrap(), "NEO");
        assert_eq!(reader.read_var_string(3), Err(IoError::InvalidUtf8));
        reader.ensure_end().unwrap();
    }

    #[test]
    fn test_read_fixed_and_trailing() {
        let mut reader = MemoryReader::new(&[1, 2, 3, 4, 5]);
        assert_eq!(reader.read_fixed::<4>().unwrap(), [1, 2, 3, 4]);
        assert_eq!(reader.ensure_end(), Err(IoError::TrailingBytes(1)));
        assert_eq!(reader.read_to_end(), &[5]);
    }
}
