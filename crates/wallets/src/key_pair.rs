// Copyright (C) 2015-2025 The Neo Project.
//
// key_pair.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Private/public key pairs.

use crate::error::{WalletError, WalletResult};
use neo_config::PRIVATE_KEY_SIZE;
use neo_core::contract::signature_redeem_script;
use neo_core::UInt160;
use neo_cryptography::{ECDsa, ECPoint, NativeHasher, Signature};
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::trace;
use zeroize::Zeroizing;

/// Represents a private/public key pair in wallets.
///
/// The private key bytes are wiped when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
    signer: ECDsa,
}

impl KeyPair {
    /// Creates a key pair from a 32-byte big-endian private key.
    ///
    /// # Errors
    ///
    /// Fails unless the key is 32 bytes long and `1 <= d < n`.
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        let signer = ECDsa::from_private_key(private_key)?;
        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        bytes.copy_from_slice(private_key);
        Ok(Self {
            private_key: bytes,
            signer,
        })
    }

    /// Draws a fresh key from `rng`.
    pub fn generate<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        loop {
            rng.fill_bytes(candidate.as_mut_slice());
            match Self::from_private_key(candidate.as_slice()) {
                Ok(pair) => return pair,
                Err(_) => trace!("drawn scalar outside [1, n), redrawing"),
            }
        }
    }

    /// Decodes a WIF string.
    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        let private_key = neo_cryptography::from_wif(wif)?;
        Self::from_private_key(private_key.as_slice())
    }

    pub fn to_wif(&self) -> String {
        neo_cryptography::to_wif(&self.private_key)
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    pub fn public_key(&self) -> &ECPoint {
        self.signer.public_key()
    }

    /// The 33-byte compressed public key.
    pub fn compressed_public_key(&self) -> Vec<u8> {
        self.public_key().encode_point(true)
    }

    /// `PUSHBYTES33 <public key> CHECKSIG`.
    pub fn verification_script(&self) -> Vec<u8> {
        signature_redeem_script(self.public_key())
    }

    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script())
    }

    pub fn address(&self, version: u8) -> String {
        self.script_hash().to_address(version)
    }

    /// Signs SHA-256(`message`) and returns the 64-byte `r ∥ s` form.
    pub fn sign<R>(&self, message: &[u8], rng: &mut R) -> WalletResult<[u8; 64]>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let signature: Signature = self.signer.sign(message, &NativeHasher, rng)?;
        Ok(signature.to_bytes())
    }

    /// Checks a 64-byte signature over `message` against this public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.signer.verify_bytes(message, signature, &NativeHasher)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", self.public_key())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.compressed_public_key()))
    }
}

impl TryFrom<&[u8]> for KeyPair {
    type Error = WalletError;

    fn try_from(value: &[u8]) -> WalletResult<Self> {
        Self::from_private_key(value)
    }
}
