// Copyright (C) 2015-2025 The Neo Project.
//
// curve.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Named curve parameters.

use super::{ECFieldElement, ECPoint};
use hex_literal::hex;
use neo_bigint::BigInteger;
use once_cell::sync::Lazy;

/// Short-Weierstrass curve `y^2 = x^3 + ax + b` over the prime field `q`,
/// with a base point of prime order `n`.
#[derive(Debug)]
pub struct ECCurve {
    pub q: BigInteger,
    pub a: BigInteger,
    pub b: BigInteger,
    pub n: BigInteger,
    /// `floor(n / 2)`, the ceiling for low-s signatures.
    pub half_n: BigInteger,
    gx: BigInteger,
    gy: BigInteger,
    /// Byte length of one encoded coordinate.
    pub expected_ec_point_length: usize,
}

static SECP256R1: Lazy<ECCurve> = Lazy::new(|| {
    let q = BigInteger::from_bytes_be(&hex!(
        "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"
    ));
    let n = BigInteger::from_bytes_be(&hex!(
        "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"
    ));
    ECCurve {
        expected_ec_point_length: ((q.bit_length() + 7) / 8) as usize,
        q,
        a: BigInteger::from_bytes_be(&hex!(
            "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"
        )),
        b: BigInteger::from_bytes_be(&hex!(
            "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"
        )),
        half_n: &n >> 1,
        n,
        gx: BigInteger::from_bytes_be(&hex!(
            "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"
        )),
        gy: BigInteger::from_bytes_be(&hex!(
            "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
        )),
    }
});

impl ECCurve {
    /// The secp256r1 (NIST P-256) curve used by Neo.
    pub fn secp256r1() -> &'static ECCurve {
        &SECP256R1
    }

    /// The base point G.
    pub fn generator(&self) -> ECPoint {
        ECPoint::from_affine(
            ECFieldElement::from_reduced(self.gx.clone()),
            ECFieldElement::from_reduced(self.gy.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secp256r1_parameters() {
        let curve = ECCurve::secp256r1();
        assert_eq!(curve.expected_ec_point_length, 32);
        assert_eq!(&curve.q - &curve.a, BigInteger::from(3));
        assert_eq!(curve.q.bit_length(), 256);
        assert!(curve.q.test_bit(0) && curve.q.test_bit(1));
        assert!(curve.generator().is_on_curve());
    }
}
