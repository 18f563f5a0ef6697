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

//! Integration tests for the Neo 2.x wire primitives.

use neo_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable, SerializableExt};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct MockWitness {
    invocation_script: Vec<u8>,
    verification_script: Vec<u8>,
}

impl Serializable for MockWitness {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(self.invocation_script.len())
            + helper::get_var_bytes_size(self.verification_script.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script)?;
        writer.write_var_bytes(&self.verification_script)?;
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(MockWitness {
            invocation_script: reader.read_var_bytes(65536)?,
            verification_script: reader.read_var_bytes(65536)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MockTransaction {
    kind: u8,
    version: u8,
    nonce: u32,
    witnesses: Vec<MockWitness>,
}

impl Serializable for MockTransaction {
    fn size(&self) -> usize {
        1 + 1 + 4 + helper::get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.kind)?;
        writer.write_u8(self.version)?;
        writer.write_u32(self.nonce)?;
        helper::serialize_array(&self.witnesses, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(MockTransaction {
            kind: reader.read_u8()?,
            version: reader.read_u8()?,
            nonce: reader.read_u32()?,
            witnesses: helper::deserialize_array(reader, 16)?,
        })
    }
}

#[test]
fn test_transaction_like_serialization_workflow() {
    let original = MockTransaction {
        kind: 0x00,
        version: 0,
        nonce: 123456789,
        witnesses: vec![
            MockWitness {
                invocation_script: vec![0x40; 65],
                verification_script: vec![0x21; 35],
            },
            MockWitness {
                invocation_script: vec![],
                verification_script: vec![0x51],
            },
        ],
    };

    let bytes = original.to_array().unwrap();
    assert_eq!(bytes.len(), original.size());
    assert_eq!(&bytes[..6], &[0x00, 0x00, 0x15, 0xcd, 0x5b, 0x07]);
    assert_eq!(MockTransaction::from_array(&bytes).unwrap(), original);

    // every strict prefix is a short read
    for cut in 0..bytes.len() {
        assert!(matches!(
            MockTransaction::from_array(&bytes[..cut]),
            Err(IoError::UnexpectedEof { .. })
        ));
    }
}

#[test]
fn test_nested_ceiling_is_constraint_error() {
    let mut writer = BinaryWriter::new();
    writer.write_bytes(&[0, 0, 0, 0, 0, 0]).unwrap();
    writer.write_var_int(17).unwrap();
    let error = MockTransaction::from_array(writer.as_bytes()).unwrap_err();
    assert_eq!(error, IoError::ExceedsLimit { value: 17, max: 16 });
    assert_eq!(error.kind(), neo_config::ErrorKind::Constraint);
}

proptest! {
    #[test]
    fn prop_var_int_round_trip(value in any::<u64>()) {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value).unwrap();
        prop_assert_eq!(writer.len(), helper::get_var_size(value));

        let bytes = writer.into_bytes();
        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_var_bytes_round_trip(data in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&data).unwrap();
        let bytes = writer.into_bytes();
        prop_assert_eq!(bytes.len(), helper::get_var_bytes_size(data.len()));

        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_bytes(data.len()).unwrap(), data);
    }
}
