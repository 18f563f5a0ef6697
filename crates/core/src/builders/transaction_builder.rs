// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Builder for transfer and invocation transactions.

use crate::coin_reference::CoinReference;
use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::transaction::{InvocationPayload, Transaction, TransactionAttribute, TransactionPayload};
use crate::transaction_output::TransactionOutput;
use crate::uint160::UInt160;
use crate::uint256::UInt256;
use neo_config::UTILITY_TOKEN_ID;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// An output the caller can spend, with the reference that points to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unspent {
    pub reference: CoinReference,
    pub output: TransactionOutput,
}

impl Unspent {
    pub fn new(reference: CoinReference, output: TransactionOutput) -> Self {
        Self { reference, output }
    }
}

/// Assembles an unsigned transaction from outputs and a spendable set.
///
/// Inputs are picked per asset in the order the unspent set was supplied,
/// until the outputs and fees of that asset are covered. The GAS consumed by
/// an invocation counts as a fee in the utility token. Any excess returns to
/// the change address.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    version: u8,
    payload: TransactionPayload,
    attributes: Vec<TransactionAttribute>,
    outputs: Vec<TransactionOutput>,
    fees: Vec<(UInt256, Fixed8)>,
    unspent: Vec<Unspent>,
    change_address: Option<UInt160>,
    utility_token: UInt256,
}

impl TransactionBuilder {
    fn with_payload(version: u8, payload: TransactionPayload) -> Self {
        Self {
            version,
            payload,
            attributes: Vec::new(),
            outputs: Vec::new(),
            fees: Vec::new(),
            unspent: Vec::new(),
            change_address: None,
            utility_token: UInt256::from(UTILITY_TOKEN_ID),
        }
    }

    /// Starts a Contract (transfer) transaction.
    pub fn contract() -> Self {
        Self::with_payload(0, TransactionPayload::Contract)
    }

    /// Starts a version 1 Invocation transaction.
    ///
    /// # Arguments
    ///
    /// * `script` - The script to run, must not be empty
    /// * `gas` - GAS consumed by the script, a whole number
    pub fn invocation(script: Vec<u8>, gas: Fixed8) -> Self {
        Self::with_payload(
            1,
            TransactionPayload::Invocation(InvocationPayload { script, gas }),
        )
    }

    pub fn attribute(mut self, attribute: TransactionAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn output(mut self, output: TransactionOutput) -> Self {
        self.outputs.push(output);
        self
    }

    /// Sends `value` of `asset_id` to `script_hash`.
    pub fn transfer(self, asset_id: UInt256, value: Fixed8, script_hash: UInt160) -> Self {
        self.output(TransactionOutput::new(asset_id, value, script_hash))
    }

    /// Requires `amount` of `asset_id` to be spent without an output, as a fee.
    pub fn fee(mut self, asset_id: UInt256, amount: Fixed8) -> Self {
        self.fees.push((asset_id, amount));
        self
    }

    /// Adds spendable outputs, in preference order.
    pub fn unspent<I: IntoIterator<Item = Unspent>>(mut self, unspent: I) -> Self {
        self.unspent.extend(unspent);
        self
    }

    /// Where excess input value goes; defaults to the owner of the first
    /// selected input.
    pub fn change_address(mut self, script_hash: UInt160) -> Self {
        self.change_address = Some(script_hash);
        self
    }

    /// Overrides the asset that pays for invocation GAS, for private chains
    /// that registered their own utility token.
    pub fn utility_token(mut self, asset_id: UInt256) -> Self {
        self.utility_token = asset_id;
        self
    }

    fn required(&self) -> CoreResult<BTreeMap<UInt256, Fixed8>> {
        let mut required = BTreeMap::new();
        let system_fee = match &self.payload {
            TransactionPayload::Invocation(p) => Some((self.utility_token, p.gas)),
            _ => None,
        };
        let outputs = self.outputs.iter().map(|o| (o.asset_id, o.value));
        for (asset_id, value) in outputs.chain(self.fees.iter().copied()).chain(system_fee) {
            let total = required.entry(asset_id).or_insert(Fixed8::ZERO);
            *total = total.checked_add(value)?;
        }
        Ok(required)
    }

    /// Selects inputs, adds change and returns the unsigned transaction.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` when the unspent set cannot cover an asset, and
    /// any payload or count violation of the finished transaction.
    pub fn build(self) -> CoreResult<Transaction> {
        let required = self.required()?;
        let mut inputs = Vec::new();
        let mut change = Vec::new();
        let mut seen = HashSet::new();

        for (asset_id, needed) in &required {
            if needed.is_zero() {
                continue;
            }
            let mut gathered = Fixed8::ZERO;
            let mut selected = 0usize;
            for coin in self.unspent.iter().filter(|u| u.output.asset_id == *asset_id) {
                if gathered >= *needed {
                    break;
                }
                if !seen.insert(coin.reference) {
                    continue;
                }
                gathered = gathered.checked_add(coin.output.value)?;
                inputs.push(*coin);
                selected += 1;
            }
            if gathered < *needed {
                return Err(CoreError::InsufficientFunds {
                    asset: asset_id.to_string(),
                    required: needed.to_string(),
                    available: gathered.to_string(),
                });
            }
            debug!(asset = %asset_id, needed = %needed, selected, "selected inputs");

            let excess = gathered.checked_sub(*needed)?;
            if !excess.is_zero() {
                change.push((*asset_id, excess));
            }
        }

        let change_address = match (self.change_address, inputs.first()) {
            (Some(address), _) => Some(address),
            (None, Some(first)) => Some(first.output.script_hash),
            (None, None) => None,
        };

        let mut tx = Transaction::new(self.payload);
        tx.version = self.version;
        tx.attributes = self.attributes;
        tx.inputs = inputs.iter().map(|u| u.reference).collect();
        tx.outputs = self.outputs;
        if let Some(address) = change_address {
            tx.outputs.extend(
                change
                    .into_iter()
                    .map(|(asset_id, value)| TransactionOutput::new(asset_id, value, address)),
            );
        }
        tx.validate()?;
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(tag: u8) -> UInt256 {
        UInt256::from([tag; 32])
    }

    fn coin(tag: u8, index: u16, asset_id: UInt256, whole: u64, owner: UInt160) -> Unspent {
        Unspent::new(
            CoinReference::new(UInt256::from([tag; 32]), index),
            TransactionOutput::new(asset_id, Fixed8::from_integer(whole).unwrap(), owner),
        )
    }

    #[test]
    fn test_selects_in_order_and_returns_change() {
        let owner = UInt160::from([1; 20]);
        let to = UInt160::from([2; 20]);
        let neo = asset(0xaa);

        let tx = TransactionBuilder::contract()
            .transfer(neo, Fixed8::from_integer(5).unwrap(), to)
            .unspent([
                coin(1, 0, neo, 3, owner),
                coin(2, 0, neo, 4, owner),
                coin(3, 0, neo, 10, owner),
            ])
            .build()
            .unwrap();

        assert_eq!(tx.inputs.len(), 2);
        assert_eq!(tx.inputs[0].prev_hash, UInt256::from([1; 32]));
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[1].script_hash, owner);
        assert_eq!(tx.outputs[1].value, Fixed8::from_integer(2).unwrap());
    }

    #[test]
    fn test_exact_amount_has_no_change() {
        let owner = UInt160::from([1; 20]);
        let neo = asset(0xaa);
        let tx = TransactionBuilder::contract()
            .transfer(neo, Fixed8::from_integer(3).unwrap(), UInt160::zero())
            .unspent([coin(1, 0, neo, 3, owner)])
            .change_address(UInt160::from([9; 20]))
            .build()
            .unwrap();
        assert_eq!(tx.outputs.len(), 1);
    }

    #[test]
    fn test_insufficient_funds() {
        let owner = UInt160::from([1; 20]);
        let neo = asset(0xaa);
        let gas = asset(0xbb);
        let error = TransactionBuilder::contract()
            .transfer(neo, Fixed8::from_integer(5).unwrap(), owner)
            .unspent([coin(1, 0, neo, 3, owner), coin(2, 0, gas, 100, owner)])
            .build()
            .unwrap_err();
        assert!(matches!(error, CoreError::InsufficientFunds { ref available, .. } if available == "3"));
        assert_eq!(error.kind(), neo_config::ErrorKind::Constraint);
    }

    #[test]
    fn test_invocation_with_fee() {
        let owner = UInt160::from([1; 20]);
        let gas = UInt256::from(UTILITY_TOKEN_ID);
        let tx = TransactionBuilder::invocation(vec![0x51], Fixed8::ONE)
            .fee(gas, Fixed8::ONE)
            .attribute(TransactionAttribute::script(&owner))
            .unspent([coin(1, 0, gas, 5, owner)])
            .build()
            .unwrap();

        assert_eq!(tx.version, 1);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].value, Fixed8::from_integer(3).unwrap());
        assert_eq!(tx.attributes.len(), 1);
    }

    #[test]
    fn test_invocation_gas_is_covered_by_inputs() {
        let owner = UInt160::from([1; 20]);
        let gas = UInt256::from(UTILITY_TOKEN_ID);
        let two = Fixed8::from_integer(2).unwrap();

        let tx = TransactionBuilder::invocation(vec![0x51], two)
            .fee(gas, Fixed8::ONE)
            .unspent([coin(1, 0, gas, 1, owner), coin(2, 0, gas, 1, owner), coin(3, 0, gas, 1, owner)])
            .build()
            .unwrap();
        assert_eq!(tx.inputs.len(), 3);
        assert!(tx.outputs.is_empty());

        let error = TransactionBuilder::invocation(vec![0x51], two)
            .fee(gas, Fixed8::ONE)
            .unspent([coin(1, 0, gas, 1, owner), coin(2, 0, gas, 1, owner)])
            .build()
            .unwrap_err();
        assert!(matches!(error, CoreError::InsufficientFunds { ref required, .. } if required == "3"));

        let private_gas = asset(0xbb);
        let tx = TransactionBuilder::invocation(vec![0x51], two)
            .utility_token(private_gas)
            .unspent([coin(4, 0, private_gas, 2, owner)])
            .build()
            .unwrap();
        assert_eq!(tx.inputs.len(), 1);
    }

    #[test]
    fn test_duplicate_unspent_counted_once() {
        let owner = UInt160::from([1; 20]);
        let neo = asset(0xaa);
        let error = TransactionBuilder::contract()
            .transfer(neo, Fixed8::from_integer(4).unwrap(), owner)
            .unspent([coin(1, 0, neo, 3, owner), coin(1, 0, neo, 3, owner)])
            .build()
            .unwrap_err();
        assert!(matches!(error, CoreError::InsufficientFunds { .. }));
    }
}
