// Copyright (C) 2015-2025 The Neo Project.
//
// property_based_crypto_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Property-based tests for curve arithmetic, ECDSA and Base58Check.

use neo_bigint::BigInteger;
use neo_cryptography::{
    base58, ECCurve, ECDsa, ECPoint, FromBase58Check, NativeHasher, Signature, ToBase58Check,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn scalar_strategy() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>()).prop_filter("scalar must lie in [1, n)", |bytes| {
        let d = BigInteger::from_bytes_be(bytes);
        !d.is_zero() && d < ECCurve::secp256r1().n
    })
}

mod ecc_properties {
    use super::*;

    #[test]
    fn test_group_identities() {
        let curve = ECCurve::secp256r1();
        let g = ECPoint::generator();
        assert!(g.multiply(&BigInteger::zero()).is_infinity());
        assert!(g.multiply(&curve.n).is_infinity());
        assert_eq!(&g + &ECPoint::infinity(), g);
        assert!((&g + &g.negate()).is_infinity());
        assert_eq!(g.twice(), &g + &g);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Property: point encodings decode back to the same point
        #[test]
        fn prop_point_encoding_round_trip(d in scalar_strategy()) {
            let point = ECPoint::generator().multiply(&BigInteger::from_bytes_be(&d));
            for compressed in [true, false] {
                let encoded = point.encode_point(compressed);
                prop_assert_eq!(encoded.len(), if compressed { 33 } else { 65 });
                prop_assert_eq!(ECPoint::from_bytes(&encoded).unwrap(), point.clone());
            }
        }

        /// Property: scalar multiplication distributes over scalar addition
        #[test]
        fn prop_multiply_distributes(a in scalar_strategy(), b in scalar_strategy()) {
            let g = ECPoint::generator();
            let a = BigInteger::from_bytes_be(&a);
            let b = BigInteger::from_bytes_be(&b);
            let lhs = g.multiply(&(&a + &b));
            let rhs = &g.multiply(&a) + &g.multiply(&b);
            prop_assert_eq!(lhs, rhs);
        }
    }
}

mod ecdsa_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        /// Property: a signature verifies under its own key and is low-s
        #[test]
        fn prop_sign_verify(
            d in scalar_strategy(),
            message in prop::collection::vec(any::<u8>(), 0..128),
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let signer = ECDsa::from_private_key(&d).unwrap();
            let signature = signer.sign(&message, &NativeHasher, &mut rng).unwrap();

            prop_assert!(signature.is_low_s());
            prop_assert!(signature.s() <= &ECCurve::secp256r1().half_n);

            let verifier = ECDsa::from_public_key(signer.public_key().clone());
            prop_assert!(verifier.verify(&message, &signature, &NativeHasher));
        }

        /// Property: flipping any bit of the signature or message breaks verification
        #[test]
        fn prop_bit_flips_fail(
            d in scalar_strategy(),
            message in prop::collection::vec(any::<u8>(), 1..64),
            seed in any::<u64>(),
            signature_bit in 0usize..512,
            message_bit in any::<prop::sample::Index>(),
        ) {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let signer = ECDsa::from_private_key(&d).unwrap();
            let signature = signer.sign(&message, &NativeHasher, &mut rng).unwrap();

            let mut flipped = signature.to_bytes();
            flipped[signature_bit / 8] ^= 1 << (signature_bit % 8);
            prop_assert!(!signer.verify_bytes(&message, &flipped, &NativeHasher));

            let mut tampered = message.clone();
            let bit = message_bit.index(tampered.len() * 8);
            tampered[bit / 8] ^= 1 << (bit % 8);
            prop_assert!(!signer.verify(&tampered, &signature, &NativeHasher));
        }

        /// Property: random bytes never verify
        #[test]
        fn prop_random_signatures_fail(
            message in prop::array::uniform32(any::<u8>()),
            r in prop::array::uniform32(any::<u8>()),
            s in prop::array::uniform32(any::<u8>()),
        ) {
            let verifier = ECDsa::from_public_key(ECPoint::generator());
            let mut raw = [0u8; 64];
            raw[..32].copy_from_slice(&r);
            raw[32..].copy_from_slice(&s);
            prop_assert!(!verifier.verify_bytes(&message, &raw, &NativeHasher));
        }
    }

    #[test]
    fn test_fixture_public_key() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let signer = ECDsa::from_private_key(&one).unwrap();
        assert_eq!(
            hex::encode(signer.public_key().encode_point(true)),
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );

        let signer = ECDsa::from_private_key(&[1u8; 32]).unwrap();
        assert_eq!(
            signer.public_key().to_string(),
            "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16"
        );
    }

    #[test]
    fn test_zero_signature_rejected() {
        assert!(Signature::from_bytes(&[0u8; 64]).is_err());
        let verifier = ECDsa::from_public_key(ECPoint::generator());
        assert!(!verifier.verify_bytes(b"msg", &[0u8; 64], &NativeHasher));
    }
}

mod base58_properties {
    use super::*;

    proptest! {
        /// Property: Base58 agrees with the bs58 crate
        #[test]
        fn prop_base58_matches_bs58(data in prop::collection::vec(any::<u8>(), 0..64)) {
            let ours = base58::encode(&data);
            prop_assert_eq!(&ours, &bs58::encode(&data).into_string());
            prop_assert_eq!(base58::decode(&ours).unwrap(), data);
        }

        /// Property: 21-byte payloads survive Base58Check and any corrupted byte fails
        #[test]
        fn prop_base58_check_detects_corruption(
            payload in prop::array::uniform21(any::<u8>()),
            index in 0usize..25,
            mask in 1u8..=255,
        ) {
            let encoded = payload.to_base58_check(None, None);
            prop_assert_eq!(Vec::from_base58_check(&encoded, None, None).unwrap(), payload.to_vec());

            let mut raw = base58::decode(&encoded).unwrap();
            raw[index] ^= mask;
            let corrupted = base58::encode(&raw);
            prop_assert!(Vec::from_base58_check(&corrupted, None, None).is_err());
        }
    }
}
