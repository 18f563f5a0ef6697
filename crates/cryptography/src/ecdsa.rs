// Copyright (C) 2015-2025 The Neo Project.
//
// ecdsa.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ECDSA over secp256r1.
//!
//! Signing draws its nonce from a caller-supplied random source and always
//! produces low-s signatures. Verification never fails with an error; a
//! malformed or mismatching signature simply verifies as `false`.

use crate::ecc::{ECCurve, ECPoint};
use crate::hash::HashProvider;
use crate::{Error, Result};
use neo_bigint::{BigInteger, Endianness};
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::trace;

/// Size of an encoded `r ∥ s` signature.
pub const SIGNATURE_SIZE: usize = 64;

/// An ECDSA signature `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigInteger,
    s: BigInteger,
}

impl Signature {
    /// Creates a signature, rejecting components outside `[1, n)`.
    pub fn new(r: BigInteger, s: BigInteger) -> Result<Self> {
        let n = &ECCurve::secp256r1().n;
        for (name, value) in [("r", &r), ("s", &s)] {
            if !value.is_positive() || value >= n {
                return Err(Error::InvalidSignature(format!("{} is out of range", name)));
            }
        }
        Ok(Self { r, s })
    }

    pub fn r(&self) -> &BigInteger {
        &self.r
    }

    pub fn s(&self) -> &BigInteger {
        &self.s
    }

    /// Whether `s <= n / 2`.
    pub fn is_low_s(&self) -> bool {
        &self.s <= &ECCurve::secp256r1().half_n
    }

    /// 32-byte big-endian `r` followed by 32-byte big-endian `s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        write_padded(&self.r, &mut out[..32]);
        write_padded(&self.s, &mut out[32..]);
        out
    }

    /// Parses a 64-byte `r ∥ s` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_SIZE,
                bytes.len()
            )));
        }
        Self::new(
            BigInteger::from_bytes_be(&bytes[..32]),
            BigInteger::from_bytes_be(&bytes[32..]),
        )
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

fn write_padded(value: &BigInteger, out: &mut [u8]) {
    let bytes = value.to_bytes(Endianness::Big);
    let start = out.len().saturating_sub(bytes.len());
    let skip = bytes.len().saturating_sub(out.len());
    out[start..].copy_from_slice(&bytes[skip..]);
}

/// Converts a message digest into the integer `e`, keeping only the
/// leftmost `bitlen(n)` bits of a longer digest.
pub fn calculate_e(n: &BigInteger, message: &[u8]) -> BigInteger {
    let message_bit_length = message.len() as u64 * 8;
    let trunc = BigInteger::from_bytes_be(message);
    let n_bits = n.bit_length();
    if n_bits < message_bit_length {
        &trunc >> (message_bit_length - n_bits) as usize
    } else {
        trunc
    }
}

/// ECDSA signer and verifier bound to one key.
#[derive(Clone)]
pub struct ECDsa {
    private_key: Option<BigInteger>,
    public_key: ECPoint,
}

impl fmt::Debug for ECDsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ECDsa")
            .field("public_key", &self.public_key)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}

impl ECDsa {
    /// Creates a signer from a 32-byte big-endian private scalar, deriving
    /// its public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] unless the key is 32 bytes and
    /// `1 <= d < n`.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self> {
        if private_key.len() != 32 {
            return Err(Error::InvalidKey(format!(
                "expected 32 bytes, got {}",
                private_key.len()
            )));
        }
        let d = BigInteger::from_bytes_be(private_key);
        let curve = ECCurve::secp256r1();
        if d.is_zero() || d >= curve.n {
            return Err(Error::InvalidKey("scalar is outside [1, n)".to_string()));
        }
        let public_key = curve.generator().multiply(&d);
        Ok(Self {
            private_key: Some(d),
            public_key,
        })
    }

    /// Creates a verifier.
    pub fn from_public_key(public_key: ECPoint) -> Self {
        Self {
            private_key: None,
            public_key,
        }
    }

    pub fn public_key(&self) -> &ECPoint {
        &self.public_key
    }

    pub fn can_sign(&self) -> bool {
        self.private_key.is_some()
    }

    /// Hashes `message` with SHA-256 and signs the digest.
    pub fn sign<H, R>(&self, message: &[u8], hasher: &H, rng: &mut R) -> Result<Signature>
    where
        H: HashProvider + ?Sized,
        R: RngCore + CryptoRng + ?Sized,
    {
        self.sign_hash(&hasher.sha256(message), rng)
    }

    /// Signs a precomputed digest.
    ///
    /// Nonces are drawn uniformly from `[1, n)` and redrawn while `r` or `s`
    /// comes out zero. The returned `s` is normalized to `s <= n / 2`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPrivateKey`] when this instance only holds a public key.
    pub fn sign_hash<R>(&self, hash: &[u8], rng: &mut R) -> Result<Signature>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let d = self.private_key.as_ref().ok_or(Error::MissingPrivateKey)?;
        let curve = ECCurve::secp256r1();
        let n = &curve.n;
        let e = calculate_e(n, hash);
        let g = curve.generator();
        let n_minus_one = n - BigInteger::one();

        loop {
            let k = BigInteger::random_below(&n_minus_one, rng)? + BigInteger::one();
            let point = g.multiply(&k);
            let r = match point.x() {
                Some(x) => x.value().modulo(n)?,
                None => continue,
            };
            if r.is_zero() {
                trace!("ecdsa nonce produced r = 0, resampling");
                continue;
            }

            let s = (k.mod_inverse(n)? * (&e + d * &r)).modulo(n)?;
            if s.is_zero() {
                trace!("ecdsa nonce produced s = 0, resampling");
                continue;
            }

            let s = if s > curve.half_n { n - &s } else { s };
            return Ok(Signature { r, s });
        }
    }

    /// Hashes `message` with SHA-256 and verifies `signature` over it.
    pub fn verify<H>(&self, message: &[u8], signature: &Signature, hasher: &H) -> bool
    where
        H: HashProvider + ?Sized,
    {
        self.verify_hash(&hasher.sha256(message), signature)
    }

    /// Verifies a signature over a precomputed digest.
    pub fn verify_hash(&self, hash: &[u8], signature: &Signature) -> bool {
        let curve = ECCurve::secp256r1();
        let n = &curve.n;
        let (r, s) = (&signature.r, &signature.s);
        if !r.is_positive() || r >= n || !s.is_positive() || s >= n {
            return false;
        }
        if self.public_key.is_infinity() {
            return false;
        }

        let e = calculate_e(n, hash);
        let c = match s.mod_inverse(n) {
            Ok(c) => c,
            Err(_) => return false,
        };
        let (u1, u2) = match ((&e * &c).modulo(n), (r * &c).modulo(n)) {
            (Ok(u1), Ok(u2)) => (u1, u2),
            _ => return false,
        };

        let point = ECPoint::sum_of_two_multiplies(&curve.generator(), &u1, &self.public_key, &u2);
        match point.x().map(|x| x.value().modulo(n)) {
            Some(Ok(v)) => &v == r,
            _ => false,
        }
    }

    /// Verifies a 64-byte `r ∥ s` signature; malformed input yields `false`.
    pub fn verify_bytes<H>(&self, message: &[u8], signature: &[u8], hasher: &H) -> bool
    where
        H: HashProvider + ?Sized,
    {
        match Signature::from_bytes(signature) {
            Ok(signature) => self.verify(message, &signature, hasher),
            Err(_) => false,
        }
    }
}
