// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wire-format tests for transactions.

use hex_literal::hex;
use neo_config::{CodecLimits, ErrorKind, GOVERNING_TOKEN_ID, UTILITY_TOKEN_ID};
use neo_core::{
    AssetType, CoinReference, CoreError, Fixed8, Transaction, TransactionAttribute,
    TransactionOutput, TransactionPayload, TransactionType, UInt160, UInt256, Witness,
};

const UNSIGNED: [u8; 103] = hex!(
    "800001f0026869011111111111111111111111111111111111111111111111111111111111111111"
    "010001222222222222222222222222222222222222222222222222222222222222222280d1f00800"
    "0000003333333333333333333333333333333333333333"
);

fn sample() -> Transaction {
    let mut tx = Transaction::contract();
    tx.attributes.push(TransactionAttribute::remark("hi").unwrap());
    tx.inputs.push(CoinReference::new(UInt256::from([0x11; 32]), 1));
    tx.outputs.push(TransactionOutput::new(
        UInt256::from([0x22; 32]),
        Fixed8::parse("1.5").unwrap(),
        UInt160::from([0x33; 20]),
    ));
    tx
}

#[test]
fn test_unsigned_bytes_and_id() {
    let tx = sample();
    assert_eq!(tx.unsigned_bytes().unwrap(), UNSIGNED);
    assert_eq!(
        tx.hash().unwrap().to_string(),
        "0x1a8aff44e45fbefe9153099f6fe031cc6986a20de0c5892b68f9692f5c4aa1b6"
    );

    let decoded = Transaction::from_unsigned_bytes(&UNSIGNED).unwrap();
    assert_eq!(decoded, tx);
    assert_eq!(decoded.transaction_type(), TransactionType::Contract);
}

// Transactions of the NEO 2 mainnet genesis block, as broadcast.
const GENESIS_MINER: [u8; 10] = hex!("00001dac2b7c00000000");
const GENESIS_REGISTER_NEO: [u8; 107] = hex!(
    "400000455b7b226c616e67223a227a682d434e222c226e616d65223a22e5b08fe89a81e882a1227d2c7b"
    "226c616e67223a22656e222c226e616d65223a22416e745368617265227d5d0000c16ff28623000000"
    "da1745e9b549bd0bfa1a569971c77eba30cd5a4b00000000"
);
const GENESIS_REGISTER_GAS: [u8; 106] = hex!(
    "400001445b7b226c616e67223a227a682d434e222c226e616d65223a22e5b08fe89a81e5b881227d2c7b"
    "226c616e67223a22656e222c226e616d65223a22416e74436f696e227d5d0000c16ff286230008009f7f"
    "d096d37ed2c0e3f7f0cfc924beef4ffceb6800000000"
);

#[test]
fn test_mainnet_genesis_transactions() {
    let miner = Transaction::from_bytes(&GENESIS_MINER).unwrap();
    assert_eq!(miner.payload, TransactionPayload::Miner { nonce: 2_083_236_893 });
    assert_eq!(
        miner.hash().unwrap().to_string(),
        "0xfb5bd72b2d6792d75dc2f1084ffa9e9f70ca85543c717a6b13d9959b452a57d6"
    );
    assert_eq!(miner.to_bytes().unwrap(), GENESIS_MINER);

    let neo = Transaction::from_bytes(&GENESIS_REGISTER_NEO).unwrap();
    assert_eq!(neo.hash().unwrap(), UInt256::from(GOVERNING_TOKEN_ID));
    assert_eq!(
        neo.hash().unwrap().to_string(),
        "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b"
    );
    let TransactionPayload::Register(register) = &neo.payload else {
        panic!("expected a register payload, got {:?}", neo.payload);
    };
    assert_eq!(register.asset_type, AssetType::GoverningToken);
    assert_eq!(register.amount, Fixed8::from_integer(100_000_000).unwrap());
    assert_eq!(register.precision, 0);
    assert!(register.owner.is_infinity());
    assert_eq!(register.admin, UInt160::from_script(&[0x51]));
    assert_eq!(neo.to_bytes().unwrap(), GENESIS_REGISTER_NEO);

    let gas = Transaction::from_bytes(&GENESIS_REGISTER_GAS).unwrap();
    assert_eq!(gas.hash().unwrap(), UInt256::from(UTILITY_TOKEN_ID));
    assert_eq!(
        gas.hash().unwrap().to_string(),
        "0x602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7"
    );
    let TransactionPayload::Register(register) = &gas.payload else {
        panic!("expected a register payload, got {:?}", gas.payload);
    };
    assert_eq!(register.asset_type, AssetType::UtilityToken);
    assert_eq!(register.precision, 8);
    assert_eq!(register.admin, UInt160::from_script(&[0x00]));
}

#[test]
fn test_witnesses_do_not_change_id() {
    let mut tx = sample();
    let id = tx.hash().unwrap();

    tx.add_witness(Witness::new(vec![0x40, 0x01], vec![0x51]));
    assert_eq!(tx.hash().unwrap(), id);

    let signed = tx.to_bytes().unwrap();
    assert_eq!(&signed[..UNSIGNED.len()], &UNSIGNED[..]);
    assert_eq!(&signed[UNSIGNED.len()..], &hex!("010240010151")[..]);

    let decoded = Transaction::from_bytes(&signed).unwrap();
    assert_eq!(decoded.witnesses().len(), 1);
    assert_eq!(decoded.hash().unwrap(), id);
    assert_eq!(decoded, tx);

    tx.clear_witnesses();
    assert_eq!(tx.hash().unwrap(), id);
}

#[test]
fn test_hex_round_trip() {
    let mut tx = sample();
    tx.add_witness(Witness::new(vec![0x40, 0x02], vec![0x52]));
    let text = tx.to_hex().unwrap();
    assert_eq!(Transaction::from_hex(&text).unwrap(), tx);
    assert!(matches!(
        Transaction::from_hex("zz"),
        Err(CoreError::InvalidFormat(_))
    ));
}

#[test]
fn test_rejects_trailing_and_truncated_input() {
    let mut signed = sample().to_bytes().unwrap();
    signed.push(0);
    let error = Transaction::from_bytes(&signed).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Format);

    let truncated = &UNSIGNED[..UNSIGNED.len() - 1];
    assert!(Transaction::from_unsigned_bytes(truncated).is_err());
}

#[test]
fn test_rejects_oversized_input() {
    let bytes = vec![0u8; 102_401];
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        CoreError::TransactionTooLarge {
            size: 102_401,
            max: 102_400
        }
    );

    let limits = CodecLimits {
        max_transaction_size: 64,
        ..CodecLimits::default()
    };
    let signed = sample().to_bytes().unwrap();
    assert!(matches!(
        Transaction::from_bytes_with_limits(&signed, &limits),
        Err(CoreError::TransactionTooLarge { max: 64, .. })
    ));
}

#[test]
fn test_stream_decoding_honours_limits() {
    use neo_io::SerializableExt;

    let mut tx = sample();
    tx.add_witness(Witness::new(vec![0x40; 60_000], vec![0x51]));
    tx.add_witness(Witness::new(vec![0x40; 60_000], vec![0x52]));
    let signed = tx.to_bytes().unwrap();
    assert!(signed.len() > 102_400);
    assert!(<Transaction as SerializableExt>::from_array(&signed).is_err());

    let mut small = sample();
    small.add_witness(Witness::new(vec![0x40, 0x01], vec![0x51]));
    let signed = small.to_bytes().unwrap();
    assert_eq!(<Transaction as SerializableExt>::from_array(&signed).unwrap(), small);

    let limits = CodecLimits {
        max_witnesses: 0,
        ..CodecLimits::default()
    };
    assert!(Transaction::from_bytes_with_limits(&signed, &limits).is_err());
    assert!(Transaction::from_bytes_with_limits(&signed, &CodecLimits::default()).is_ok());
}

#[test]
fn test_rejects_unknown_type_and_version() {
    let mut bytes = UNSIGNED.to_vec();
    bytes[0] = 0x7f;
    assert!(Transaction::from_unsigned_bytes(&bytes).is_err());

    let mut bytes = UNSIGNED.to_vec();
    bytes[1] = 1;
    assert!(Transaction::from_unsigned_bytes(&bytes).is_err());
}

#[test]
fn test_output_serde_json() {
    let output = sample().outputs[0];
    let json = serde_json::to_string(&output).unwrap();
    let back: TransactionOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed8_text_round_trip(raw in any::<u64>()) {
            let value = Fixed8::from_raw(raw);
            prop_assert_eq!(Fixed8::parse(&value.to_string()).unwrap(), value);
        }

        #[test]
        fn decode_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = Transaction::from_bytes(&bytes);
            let _ = Transaction::from_unsigned_bytes(&bytes);
        }

        #[test]
        fn witness_order_is_insertion_independent(tags in proptest::collection::vec(any::<u8>(), 1..8)) {
            let mut forward = sample();
            let mut backward = sample();
            for tag in &tags {
                forward.add_witness(Witness::new(vec![*tag], vec![*tag, 0xac]));
            }
            for tag in tags.iter().rev() {
                backward.add_witness(Witness::new(vec![*tag], vec![*tag, 0xac]));
            }
            prop_assert_eq!(forward.to_bytes().unwrap(), backward.to_bytes().unwrap());
        }
    }
}
