// Copyright (C) 2015-2025 The Neo Project.
//
// serializable.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits and utilities for Neo objects.

use crate::{BinaryWriter, IoResult, MemoryReader};

/// Represents Neo objects that have a fixed binary wire form.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified BinaryWriter.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes the object using the specified MemoryReader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Creates an object from a byte array that holds exactly one object.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        reader.ensure_end()?;
        Ok(value)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for serialization.
pub mod helper {
    use super::Serializable;
    use crate::{BinaryWriter, IoResult, MemoryReader};

    /// Serializes a collection of serializable objects.
    pub fn serialize_array<T: Serializable>(
        items: &[T],
        writer: &mut BinaryWriter,
    ) -> IoResult<()> {
        writer.write_var_int(items.len() as u64)?;
        for item in items {
            item.serialize(writer)?;
        }
        Ok(())
    }

    /// Deserializes a collection of at most `max` serializable objects.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int(max as u64)? as usize;
        // count is untrusted
        let mut items = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }

    /// Gets the size of a serialized array.
    pub fn get_array_size<T: Serializable>(items: &[T]) -> usize {
        items
            .iter()
            .fold(get_var_size(items.len() as u64), |size, item| size + item.size())
    }

    /// Gets the size of a variable-length integer.
    pub fn get_var_size(value: u64) -> usize {
        if value < 0xFD {
            1
        } else if value <= 0xFFFF {
            3
        } else if value <= 0xFFFFFFFF {
            5
        } else {
            9
        }
    }

    /// Gets the size of a length-prefixed byte string.
    pub fn get_var_bytes_size(len: usize) -> usize {
        get_var_size(len as u64) + len
    }
}

#[cfg(test)]
mod tests {
    use super::helper::*;
    use super::*;
    use crate::IoError;

    /// A coin-reference-like record: index then flag.
    #[derive(Debug, PartialEq)]
    struct Slot(u16, bool);

    impl Serializable for Slot {
        fn size(&self) -> usize {
            3
        }

        fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
            writer.write_u16(self.0)?;
            writer.write_bool(self.1)
        }

        fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
            Ok(Slot(reader.read_u16()?, reader.read_bool()?))
        }
    }

    #[test]
    fn test_to_array_layout() {
        let slot = Slot(0x0102, true);
        assert_eq!(slot.to_array().unwrap(), vec![0x02, 0x01, 0x01]);
        assert_eq!(Slot::from_array(&[0x02, 0x01, 0x01]).unwrap(), slot);
        assert_eq!(
            Slot::from_array(&[0x02, 0x01, 0x00, 0xff]),
            Err(IoError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_array_prefix_and_ceiling() {
        let slots: Vec<_> = (0..3u16).map(|i| Slot(i, i % 2 == 0)).collect();
        let mut writer = BinaryWriter::new();
        serialize_array(&slots, &mut writer).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes[0], 3);
        assert_eq!(bytes.len(), get_array_size(&slots));

        let decoded: Vec<Slot> = deserialize_array(&mut MemoryReader::new(&bytes), 3).unwrap();
        assert_eq!(decoded, slots);
        assert!(deserialize_array::<Slot>(&mut MemoryReader::new(&bytes), 2).is_err());
    }

    #[test]
    fn test_huge_count_is_bounded_by_input() {
        // count 0xffff with no items behind it
        let bytes = [0xfd, 0xff, 0xff];
        assert!(deserialize_array::<Slot>(&mut MemoryReader::new(&bytes), usize::MAX).is_err());
    }

    #[test]
    fn test_var_sizes() {
        let cases = [
            (0u64, 1),
            (0xfc, 1),
            (0xfd, 3),
            (0xffff, 3),
            (0x1_0000, 5),
            (0xffff_ffff, 5),
            (0x1_0000_0000, 9),
        ];
        for (value, size) in cases {
            assert_eq!(get_var_size(value), size, "{:#x}", value);
        }
        assert_eq!(get_var_bytes_size(300), 303);
    }
}
