// Copyright (C) 2015-2025 The Neo Project.
//
// binary_writer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Little-endian binary writer.

use crate::IoResult;
use byteorder::{LittleEndian, WriteBytesExt};

/// A binary writer that appends Neo wire-format values to an owned buffer.
///
/// # Examples
///
/// ```rust
/// use neo_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_u32(42).unwrap();
/// writer.write_var_string("Neo").unwrap();
///
/// assert_eq!(writer.to_bytes(), [42, 0, 0, 0, 3, b'N', b'e', b'o']);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write_bool(&mut self, value: bool) -> IoResult<()> {
        self.write_u8(value as u8)
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        Ok(self.buffer.write_u8(value)?)
    }

    pub fn write_i8(&mut self, value: i8) -> IoResult<()> {
        Ok(self.buffer.write_i8(value)?)
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        Ok(self.buffer.write_u16::<LittleEndian>(value)?)
    }

    pub fn write_i16(&mut self, value: i16) -> IoResult<()> {
        Ok(self.buffer.write_i16::<LittleEndian>(value)?)
    }

    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        Ok(self.buffer.write_u32::<LittleEndian>(value)?)
    }

    pub fn write_i32(&mut self, value: i32) -> IoResult<()> {
        Ok(self.buffer.write_i32::<LittleEndian>(value)?)
    }

    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        Ok(self.buffer.write_u64::<LittleEndian>(value)?)
    }

    pub fn write_i64(&mut self, value: i64) -> IoResult<()> {
        Ok(self.buffer.write_i64::<LittleEndian>(value)?)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes a variable-length integer: one byte below `0xfd`, otherwise a
    /// marker byte followed by a 16, 32 or 64-bit little-endian value.
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xfd {
            self.write_u8(value as u8)
        } else if value <= 0xffff {
            self.write_u8(0xfd)?;
            self.write_u16(value as u16)
        } else if value <= 0xffff_ffff {
            self.write_u8(0xfe)?;
            self.write_u32(value as u32)
        } else {
            self.write_u8(0xff)?;
            self.write_u64(value)
        }
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.write_var_int(bytes.len() as u64)?;
        self.write_bytes(bytes)
    }

    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_writer() {
        let mut writer = BinaryWriter::new();

        writer.write_bool(true).unwrap();
        writer.write_u8(42).unwrap();
        writer.write_i16(-1000).unwrap();
        writer.write_u32(1_000_000).unwrap();
        writer.write_i64(-1_000_000_000_000).unwrap();
        writer.write_var_string("Hello, Neo!").unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&[1]);
        expected.extend_from_slice(&[42]);
        expected.extend_from_slice(&(-1000i16).to_le_bytes());
        expected.extend_from_slice(&1_000_000u32.to_le_bytes());
        expected.extend_from_slice(&(-1_000_000_000_000i64).to_le_bytes());
        expected.extend_from_slice(&[11]);
        expected.extend_from_slice(b"Hello, Neo!");

        assert_eq!(writer.into_bytes(), expected);
    }

    #[test]
    fn test_var_int_boundaries() {
        let cases: [(u64, &[u8]); 7] = [
            (0, &[0x00]),
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0xffff, &[0xfd, 0xff, 0xff]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0xffff_ffff, &[0xfe, 0xff, 0xff, 0xff, 0xff]),
            (0x1_0000_0000, &[0xff, 0, 0, 0, 0, 1, 0, 0, 0]),
        ];
        for (value, encoded) in cases {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value).unwrap();
            assert_eq!(writer.as_bytes(), encoded, "value {value:#x}");
        }
    }
}
