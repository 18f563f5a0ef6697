// Copyright (C) 2015-2025 The Neo Project.
//
// property_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Property-based checks of BigInteger against the num-bigint reference.

use neo_bigint::{BigInteger, Endianness};
use num_bigint::BigInt;
use num_traits::Euclid;
use proptest::prelude::*;

fn to_ref(value: &BigInteger) -> BigInt {
    BigInt::from_signed_bytes_le(&value.to_signed_bytes(Endianness::Little))
}

fn from_ref(value: &BigInt) -> BigInteger {
    BigInteger::from_signed_bytes(&value.to_signed_bytes_le(), Endianness::Little)
}

fn signed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..48)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_signed_bytes_match_reference(bytes in signed_bytes()) {
        let ours = BigInteger::from_signed_bytes(&bytes, Endianness::Little);
        let reference = BigInt::from_signed_bytes_le(&bytes);
        prop_assert_eq!(to_ref(&ours), reference.clone());
        prop_assert_eq!(ours.to_string(), reference.to_string());
    }

    #[test]
    fn prop_unsigned_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..48)) {
        let mut minimal = bytes.clone();
        while minimal.first() == Some(&0) {
            minimal.remove(0);
        }
        let value = BigInteger::from_bytes(&bytes, Endianness::Big);
        prop_assert_eq!(value.to_bytes(Endianness::Big), minimal.clone());

        minimal.reverse();
        let mut le = bytes.clone();
        le.reverse();
        let value = BigInteger::from_bytes(&le, Endianness::Little);
        prop_assert_eq!(value.to_bytes(Endianness::Little), minimal);
    }

    #[test]
    fn prop_signed_round_trip(bytes in signed_bytes()) {
        for endian in [Endianness::Little, Endianness::Big] {
            let value = BigInteger::from_signed_bytes(&bytes, endian);
            let encoded = value.to_signed_bytes(endian);
            prop_assert!(encoded.len() <= bytes.len());
            prop_assert_eq!(BigInteger::from_signed_bytes(&encoded, endian), value.clone());
            prop_assert_eq!(BigInteger::from_signed_bytes(&encoded, endian).to_signed_bytes(endian), encoded);
        }
    }

    #[test]
    fn prop_arithmetic_matches_reference(a in signed_bytes(), b in signed_bytes()) {
        let (x, y) = (
            BigInteger::from_signed_bytes(&a, Endianness::Little),
            BigInteger::from_signed_bytes(&b, Endianness::Little),
        );
        let (rx, ry) = (to_ref(&x), to_ref(&y));

        prop_assert_eq!(to_ref(&(&x + &y)), &rx + &ry);
        prop_assert_eq!(to_ref(&(&x - &y)), &rx - &ry);
        prop_assert_eq!(to_ref(&(&x * &y)), &rx * &ry);

        if !y.is_zero() {
            let (q, r) = x.div_rem(&y).unwrap();
            prop_assert_eq!(to_ref(&q), &rx / &ry);
            prop_assert_eq!(to_ref(&r), &rx % &ry);

            let m = x.modulo(&y).unwrap();
            prop_assert!(!m.is_negative());
            prop_assert!(m < y.abs());
            prop_assert_eq!(to_ref(&m), rx.rem_euclid(&ry));
        }
    }

    #[test]
    fn prop_division_identity(a in prop::collection::vec(any::<u32>(), 1..12),
                              b in prop::collection::vec(any::<u32>(), 1..6)) {
        let to_bytes = |limbs: &[u32]| limbs.iter().flat_map(|l| l.to_le_bytes()).collect::<Vec<u8>>();
        let x = BigInteger::from_bytes(&to_bytes(&a), Endianness::Little);
        let y = BigInteger::from_bytes(&to_bytes(&b), Endianness::Little);
        prop_assume!(!y.is_zero());
        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(&(&q * &y) + &r, x);
        prop_assert!(r < y);
    }

    #[test]
    fn prop_shifts_match_reference(bytes in signed_bytes(), bits in 0usize..130) {
        let x = BigInteger::from_signed_bytes(&bytes, Endianness::Little);
        let rx = to_ref(&x);
        prop_assert_eq!(to_ref(&(&x << bits)), &rx << bits);
        prop_assert_eq!(to_ref(&(&x >> bits)), &rx >> bits);
    }

    #[test]
    fn prop_radix_round_trip(bytes in signed_bytes(), radix in 2u32..=36) {
        let x = BigInteger::from_signed_bytes(&bytes, Endianness::Little);
        let text = x.to_string_radix(radix);
        prop_assert_eq!(BigInteger::parse_radix(&text, radix).unwrap(), x.clone());
        prop_assert_eq!(text, to_ref(&x).to_str_radix(radix));
    }

    #[test]
    fn prop_mod_pow_and_inverse(base in any::<u64>(), exp in any::<u32>(), modulus in 2u64..u64::MAX) {
        let (b, e, m) = (BigInteger::from(base), BigInteger::from(exp), BigInteger::from(modulus));
        let expected = BigInt::from(base).modpow(&BigInt::from(exp), &BigInt::from(modulus));
        prop_assert_eq!(to_ref(&b.mod_pow(&e, &m).unwrap()), expected);

        if let Ok(inverse) = b.mod_inverse(&m) {
            prop_assert!((&inverse * &b).modulo(&m).unwrap().is_one());
        } else {
            prop_assert!(!b.gcd(&m).is_one());
        }
    }
}

#[test]
fn test_from_ref_helper_round_trips() {
    let value: BigInt = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(to_ref(&from_ref(&value)), value);
}
