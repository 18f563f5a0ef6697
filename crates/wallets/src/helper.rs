// Copyright (C) 2015-2025 The Neo Project.
//
// helper.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Address conversion and transaction signing.

use crate::error::{WalletError, WalletResult};
use crate::key_pair::KeyPair;
use neo_config::ADDRESS_SIZE;
use neo_core::contract::signature_contract_key;
use neo_core::{Transaction, UInt160, Witness};
use neo_cryptography::{ECDsa, FromBase58Check, NativeHasher};
use neo_vm::{Disassembler, OpCode, ScriptBuilder};
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// A helper class related to wallets.
pub struct Helper;

impl Helper {
    /// Converts the specified script hash to an address.
    pub fn to_address(script_hash: &UInt160, version: u8) -> String {
        script_hash.to_address(version)
    }

    /// Converts the specified address to a script hash.
    ///
    /// # Errors
    ///
    /// Fails on a bad checksum, a payload that is not 21 bytes, or a
    /// version byte other than `version`.
    pub fn to_script_hash(address: &str, version: u8) -> WalletResult<UInt160> {
        let data = Vec::<u8>::from_base58_check(address, None, None)?;
        if data.len() != ADDRESS_SIZE + 1 {
            return Err(WalletError::InvalidAddress(format!(
                "expected {} bytes after Base58Check decoding, got {}",
                ADDRESS_SIZE + 1,
                data.len()
            )));
        }
        if data[0] != version {
            return Err(WalletError::AddressVersion {
                expected: version,
                actual: data[0],
            });
        }
        Ok(UInt160::from_bytes(&data[1..])?)
    }

    /// Signs the unsigned form of `tx` with every key and attaches one
    /// witness per key, replacing any witness already present for it.
    pub fn sign_transaction<R>(
        tx: &mut Transaction,
        keys: &[KeyPair],
        rng: &mut R,
    ) -> WalletResult<()>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let message = tx.unsigned_bytes()?;
        for key in keys {
            let signature = key.sign(&message, rng)?;
            let mut invocation = ScriptBuilder::new();
            invocation.emit_push_bytes(&signature)?;

            let script_hash = key.script_hash();
            tx.remove_witness(&script_hash);
            tx.add_witness(Witness::new(
                invocation.into_bytes(),
                key.verification_script(),
            ));
            debug!(%script_hash, "signed transaction");
        }
        Ok(())
    }

    /// Checks that `witness` holds a valid signature over `tx` by the key in
    /// its single-signature verification script.
    ///
    /// Returns `Ok(false)` for a malformed or wrong signature.
    ///
    /// # Errors
    ///
    /// `UnsupportedWitness` when the verification script is not a
    /// single-signature contract.
    pub fn verify_witness_signature(tx: &Transaction, witness: &Witness) -> WalletResult<bool> {
        let public_key = signature_contract_key(&witness.verification_script)
            .ok_or(WalletError::UnsupportedWitness)?;

        let ops: Vec<_> = Disassembler::new(&witness.invocation_script).collect();
        let signature = match ops.as_slice() {
            [push] if push.opcode == Some(OpCode::PUSHBYTES64) => push.push_data(),
            _ => None,
        };
        let Some(signature) = signature else {
            return Ok(false);
        };

        let message = tx.unsigned_bytes()?;
        Ok(ECDsa::from_public_key(public_key).verify_bytes(&message, signature, &NativeHasher))
    }
}
