// Copyright (C) 2015-2025 The Neo Project.
//
// contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Redeem scripts: the verification scripts an address stands for.

use crate::error::{CoreError, CoreResult};
use crate::uint160::UInt160;
use neo_cryptography::ECPoint;
use neo_vm::{ContractParameterType, Disassembler, OpCode, ScriptBuilder};

/// Most public keys a multisignature script may list.
pub const MAX_MULTISIG_KEYS: usize = 1024;

/// A verification script together with the parameters its invocation
/// script must push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    script: Vec<u8>,
    parameter_list: Vec<ContractParameterType>,
}

impl Contract {
    pub fn new(script: Vec<u8>, parameter_list: Vec<ContractParameterType>) -> Self {
        Self {
            script,
            parameter_list,
        }
    }

    /// `PUSHBYTES33 <key> CHECKSIG`.
    pub fn signature(public_key: &ECPoint) -> Self {
        Self {
            script: signature_redeem_script(public_key),
            parameter_list: vec![ContractParameterType::Signature],
        }
    }

    /// `m`-of-`keys.len()` multisignature contract.
    pub fn multi_sig(m: usize, public_keys: &[ECPoint]) -> CoreResult<Self> {
        Ok(Self {
            script: multi_sig_redeem_script(m, public_keys)?,
            parameter_list: vec![ContractParameterType::Signature; m],
        })
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn parameter_list(&self) -> &[ContractParameterType] {
        &self.parameter_list
    }

    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    pub fn address(&self, version: u8) -> String {
        self.script_hash().to_address(version)
    }
}

/// Builds the single-signature verification script for `public_key`.
pub fn signature_redeem_script(public_key: &ECPoint) -> Vec<u8> {
    let encoded = public_key.encode_point(true);
    let mut builder = ScriptBuilder::new();
    // An encoded key is at most 33 bytes, so its length byte is the
    // PUSHBYTESn opcode.
    builder
        .emit(encoded.len() as u8)
        .emit_bytes(&encoded)
        .emit_opcode(OpCode::CHECKSIG);
    builder.into_bytes()
}

/// Builds an `m`-of-`n` verification script with the keys in ascending order.
///
/// # Errors
///
/// `InvalidMultiSig` unless `1 <= m <= n <= 1024`.
pub fn multi_sig_redeem_script(m: usize, public_keys: &[ECPoint]) -> CoreResult<Vec<u8>> {
    let n = public_keys.len();
    if m == 0 || m > n || n > MAX_MULTISIG_KEYS {
        return Err(CoreError::InvalidMultiSig { m, n });
    }

    let mut keys = public_keys.to_vec();
    keys.sort();

    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(m as i64);
    for key in &keys {
        builder.emit_push_bytes(&key.encode_point(true))?;
    }
    builder
        .emit_push_int(n as i64)
        .emit_opcode(OpCode::CHECKMULTISIG);
    Ok(builder.into_bytes())
}

/// The public key of a single-signature verification script, if `script`
/// is one.
pub fn signature_contract_key(script: &[u8]) -> Option<ECPoint> {
    let ops: Vec<_> = Disassembler::new(script).collect();
    match ops.as_slice() {
        [push, check]
            if push.opcode == Some(OpCode::PUSHBYTES33)
                && check.opcode == Some(OpCode::CHECKSIG)
                && !check.is_error() =>
        {
            ECPoint::from_bytes(push.push_data()?).ok()
        }
        _ => None,
    }
}

pub fn is_signature_contract(script: &[u8]) -> bool {
    signature_contract_key(script).is_some()
}

/// `(m, keys)` of a multisignature verification script, if `script` is one.
pub fn multi_sig_contract_keys(script: &[u8]) -> Option<(usize, Vec<ECPoint>)> {
    let ops: Vec<_> = Disassembler::new(script).collect();
    let (last, body) = ops.split_last()?;
    if last.opcode != Some(OpCode::CHECKMULTISIG) || last.is_error() || body.len() < 3 {
        return None;
    }
    let m = body.first()?.push_integer()?.to_u64()? as usize;
    let n = body.last()?.push_integer()?.to_u64()? as usize;
    let keys = body[1..body.len() - 1]
        .iter()
        .map(|op| match op.opcode {
            Some(OpCode::PUSHBYTES33) => ECPoint::from_bytes(op.push_data()?).ok(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    if keys.len() != n || m == 0 || m > n {
        return None;
    }
    Some((m, keys))
}

pub fn is_multi_sig_contract(script: &[u8]) -> bool {
    multi_sig_contract_keys(script).is_some()
}
