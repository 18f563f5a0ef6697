// Copyright (C) 2015-2025 The Neo Project.
//
// serialization.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction serialization.
//!
//! Layout: type, version, payload, attributes, inputs, outputs and, in the
//! signed form only, witnesses.

use crate::error::{CoreError, CoreResult};
use crate::witness::Witness;
use neo_config::CodecLimits;
use neo_io::helper::{deserialize_array, get_array_size, serialize_array};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable, SerializableExt};

use super::core::Transaction;
use super::payloads::{TransactionPayload, TransactionType};

impl Transaction {
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.transaction_type() as u8)?;
        writer.write_u8(self.version)?;
        self.payload.serialize(self.version, writer)?;
        serialize_array(&self.attributes, writer)?;
        serialize_array(&self.inputs, writer)?;
        serialize_array(&self.outputs, writer)
    }

    fn deserialize_unsigned(reader: &mut MemoryReader, limits: &CodecLimits) -> IoResult<Self> {
        let kind = TransactionType::from_u8(reader.read_u8()?)?;
        let version = reader.read_u8()?;
        if version > kind.max_version() {
            return Err(CoreError::UnsupportedVersion {
                kind: kind.name(),
                version,
            }
            .into());
        }
        let payload = TransactionPayload::deserialize(kind, version, reader, limits)?;
        let attributes = deserialize_array(reader, limits.max_attributes)?;
        let inputs = deserialize_array(reader, limits.max_inputs)?;
        let outputs = deserialize_array(reader, limits.max_outputs)?;
        Ok(Self {
            version,
            payload,
            attributes,
            inputs,
            outputs,
            witnesses: Vec::new(),
        })
    }

    /// Reads the signed form, holding it to every ceiling in `limits`
    /// including the total encoded size.
    fn deserialize_signed(reader: &mut MemoryReader, limits: &CodecLimits) -> IoResult<Self> {
        let start = reader.position();
        let mut tx = Self::deserialize_unsigned(reader, limits)?;
        tx.witnesses = deserialize_array::<Witness>(reader, limits.max_witnesses)?;
        check_size(reader.position() - start, limits)?;
        Ok(tx)
    }

    fn unsigned_size(&self) -> usize {
        2 + self.payload.size(self.version)
            + get_array_size(&self.attributes)
            + get_array_size(&self.inputs)
            + get_array_size(&self.outputs)
    }

    /// The bytes that are hashed and signed: everything but the witnesses.
    pub fn unsigned_bytes(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decodes an unsigned transaction; trailing bytes are an error.
    pub fn from_unsigned_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let limits = CodecLimits::default();
        check_size(bytes.len(), &limits)?;
        let mut reader = MemoryReader::new(bytes);
        let tx = Self::deserialize_unsigned(&mut reader, &limits)?;
        reader.ensure_end()?;
        Ok(tx)
    }

    /// Encodes the signed form.
    pub fn to_bytes(&self) -> CoreResult<Vec<u8>> {
        Ok(self.to_array()?)
    }

    /// Decodes a signed transaction under the default ceilings.
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        Self::from_bytes_with_limits(bytes, &CodecLimits::default())
    }

    /// Decodes a signed transaction under `limits`.
    pub fn from_bytes_with_limits(bytes: &[u8], limits: &CodecLimits) -> CoreResult<Self> {
        check_size(bytes.len(), limits)?;
        let mut reader = MemoryReader::new(bytes);
        let tx = Self::deserialize_signed(&mut reader, limits)?;
        reader.ensure_end()?;
        Ok(tx)
    }

    pub fn to_hex(&self) -> CoreResult<String> {
        Ok(hex::encode(self.to_bytes()?))
    }

    pub fn from_hex(text: &str) -> CoreResult<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| CoreError::InvalidFormat(format!("transaction hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }
}

fn check_size(size: usize, limits: &CodecLimits) -> CoreResult<()> {
    if size > limits.max_transaction_size {
        return Err(CoreError::TransactionTooLarge {
            size,
            max: limits.max_transaction_size,
        });
    }
    Ok(())
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        serialize_array(&self.witnesses, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_signed(reader, &CodecLimits::default())
    }
}
