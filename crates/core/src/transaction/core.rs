// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The `Transaction` struct and its witness handling.

use crate::coin_reference::CoinReference;
use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::transaction_output::TransactionOutput;
use crate::uint160::UInt160;
use crate::uint256::UInt256;
use crate::witness::Witness;
use neo_cryptography::{HashProvider, NativeHasher};
use std::collections::BTreeMap;
use tracing::debug;

use super::attributes::TransactionAttribute;
use super::payloads::{TransactionPayload, TransactionType};

/// Represents a Neo 2.x UTXO transaction.
///
/// The id is the double SHA-256 of the unsigned form, which stops before
/// the witnesses, so signing never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The version of the transaction.
    pub version: u8,
    /// The kind of the transaction and its kind-specific fields.
    pub payload: TransactionPayload,
    pub attributes: Vec<TransactionAttribute>,
    pub inputs: Vec<CoinReference>,
    pub outputs: Vec<TransactionOutput>,
    /// Kept sorted by verification script hash.
    pub(crate) witnesses: Vec<Witness>,
}

impl Transaction {
    /// Creates a version 0 transaction with no attributes, inputs, outputs or witnesses.
    pub fn new(payload: TransactionPayload) -> Self {
        Self {
            version: 0,
            payload,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// A transfer-only transaction.
    pub fn contract() -> Self {
        Self::new(TransactionPayload::Contract)
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.payload.transaction_type()
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    /// Attaches a witness, keeping the list in ascending script hash order.
    ///
    /// The order depends only on the set of witnesses, never on the order
    /// they were added in.
    pub fn add_witness(&mut self, witness: Witness) {
        debug!(
            script_hash = %witness.script_hash(),
            count = self.witnesses.len() + 1,
            "adding witness"
        );
        self.witnesses.push(witness);
        self.witnesses.sort_by_cached_key(Witness::script_hash);
    }

    /// Detaches the witness whose verification script hashes to `script_hash`.
    pub fn remove_witness(&mut self, script_hash: &UInt160) -> Option<Witness> {
        let index = self
            .witnesses
            .iter()
            .position(|w| w.script_hash() == *script_hash)?;
        Some(self.witnesses.remove(index))
    }

    pub fn clear_witnesses(&mut self) {
        self.witnesses.clear();
    }

    /// The transaction id.
    pub fn hash(&self) -> CoreResult<UInt256> {
        self.hash_with(&NativeHasher)
    }

    /// The transaction id, computed with the given hash capability.
    pub fn hash_with<H: HashProvider + ?Sized>(&self, hasher: &H) -> CoreResult<UInt256> {
        Ok(UInt256::hash_with(&self.unsigned_bytes()?, hasher))
    }

    /// Sums the outputs per asset.
    pub fn references_by_asset(&self) -> CoreResult<BTreeMap<UInt256, Fixed8>> {
        let mut totals = BTreeMap::new();
        for output in &self.outputs {
            let total = totals.entry(output.asset_id).or_insert(Fixed8::ZERO);
            *total = total.checked_add(output.value)?;
        }
        Ok(totals)
    }

    /// Checks counts and payload rules before the transaction is encoded.
    pub fn validate(&self) -> CoreResult<()> {
        let kind = self.transaction_type();
        if self.version > kind.max_version() {
            return Err(CoreError::UnsupportedVersion {
                kind: kind.name(),
                version: self.version,
            });
        }
        if self.attributes.len() > neo_config::MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::InvalidTransaction(format!(
                "{} attributes exceed the limit of {}",
                self.attributes.len(),
                neo_config::MAX_TRANSACTION_ATTRIBUTES
            )));
        }
        if self.outputs.len() > neo_config::MAX_TRANSACTION_OUTPUTS {
            return Err(CoreError::InvalidTransaction(format!(
                "{} outputs exceed the limit of {}",
                self.outputs.len(),
                neo_config::MAX_TRANSACTION_OUTPUTS
            )));
        }
        self.payload.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::payloads::InvocationPayload;

    fn witness(tag: u8) -> Witness {
        Witness::new(vec![0x40, tag], vec![tag])
    }

    #[test]
    fn test_witness_order_ignores_insertion_order() {
        let tags = [0x51u8, 0x52, 0x53, 0x54, 0x55];
        let mut forward = Transaction::contract();
        let mut backward = Transaction::contract();
        for tag in tags {
            forward.add_witness(witness(tag));
        }
        for tag in tags.iter().rev() {
            backward.add_witness(witness(*tag));
        }
        assert_eq!(forward.witnesses(), backward.witnesses());

        let hashes: Vec<_> = forward.witnesses().iter().map(Witness::script_hash).collect();
        assert!(hashes.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_remove_witness() {
        let mut tx = Transaction::contract();
        tx.add_witness(witness(0x51));
        tx.add_witness(witness(0x52));

        let target = witness(0x51).script_hash();
        assert_eq!(tx.remove_witness(&target), Some(witness(0x51)));
        assert_eq!(tx.remove_witness(&target), None);
        assert_eq!(tx.witnesses().len(), 1);
    }

    #[test]
    fn test_references_by_asset() {
        let neo = UInt256::from([1; 32]);
        let gas = UInt256::from([2; 32]);
        let to = UInt160::zero();
        let mut tx = Transaction::contract();
        tx.outputs = vec![
            TransactionOutput::new(neo, Fixed8::from_integer(3).unwrap(), to),
            TransactionOutput::new(gas, Fixed8::ONE, to),
            TransactionOutput::new(neo, Fixed8::from_integer(4).unwrap(), to),
        ];

        let totals = tx.references_by_asset().unwrap();
        assert_eq!(totals[&neo], Fixed8::from_integer(7).unwrap());
        assert_eq!(totals[&gas], Fixed8::ONE);

        tx.outputs.push(TransactionOutput::new(gas, Fixed8::MAX, to));
        assert_eq!(tx.references_by_asset().unwrap_err(), CoreError::Fixed8Overflow);
    }

    #[test]
    fn test_validate_version_ceiling() {
        let mut tx = Transaction::contract();
        tx.version = 1;
        assert!(matches!(
            tx.validate(),
            Err(CoreError::UnsupportedVersion { kind: "Contract", version: 1 })
        ));

        let mut invocation = Transaction::new(TransactionPayload::Invocation(InvocationPayload {
            script: vec![0x51],
            gas: Fixed8::ZERO,
        }));
        invocation.version = 1;
        assert!(invocation.validate().is_ok());
    }
}
