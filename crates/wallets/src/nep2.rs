// Copyright (C) 2015-2025 The Neo Project.
//
// nep2.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! NEP-2 passphrase-protected private keys.
//!
//! Layout of the Base58Check payload: `01 42 e0`, the first four bytes of
//! hash256(address), then AES-256-ECB(private key XOR derived[..32]) under
//! derived[32..].

use crate::error::{WalletError, WalletResult};
use crate::key_pair::KeyPair;
use neo_config::{ScryptParameters, NEP2_PREFIX, PRIVATE_KEY_SIZE};
use neo_cryptography::aes::AES256_KEY_SIZE;
use neo_cryptography::{
    hash256, Aes256Ecb, BlockCipher, FromBase58Check, KeyDerivation, ScryptKdf, ToBase58Check,
};
use tracing::debug;
use zeroize::Zeroizing;

const NEP2_KEY_SIZE: usize = 39;
const ADDRESS_HASH_SIZE: usize = 4;
const DERIVED_KEY_SIZE: usize = 2 * PRIVATE_KEY_SIZE;

fn address_hash(key: &KeyPair, version: u8) -> [u8; ADDRESS_HASH_SIZE] {
    let digest = hash256(key.address(version).as_bytes());
    let mut hash = [0u8; ADDRESS_HASH_SIZE];
    hash.copy_from_slice(&digest[..ADDRESS_HASH_SIZE]);
    hash
}

fn split_derived(derived: &[u8]) -> WalletResult<(&[u8], [u8; AES256_KEY_SIZE])> {
    if derived.len() != DERIVED_KEY_SIZE {
        return Err(WalletError::InvalidNep2Key(format!(
            "derived key is {} bytes, expected {}",
            derived.len(),
            DERIVED_KEY_SIZE
        )));
    }
    let (half1, half2) = derived.split_at(PRIVATE_KEY_SIZE);
    let mut cipher_key = [0u8; AES256_KEY_SIZE];
    cipher_key.copy_from_slice(half2);
    Ok((half1, cipher_key))
}

/// Encrypts `key` under `passphrase` with the supplied capabilities.
///
/// The passphrase is used as UTF-8 bytes without normalization.
pub fn encrypt_nep2<K, C>(
    key: &KeyPair,
    passphrase: &str,
    version: u8,
    params: &ScryptParameters,
    kdf: &K,
    cipher: &C,
) -> WalletResult<String>
where
    K: KeyDerivation + ?Sized,
    C: BlockCipher + ?Sized,
{
    params.validate()?;
    let hash = address_hash(key, version);
    let derived = kdf.derive(passphrase.as_bytes(), &hash, params, DERIVED_KEY_SIZE)?;
    let (half1, cipher_key) = split_derived(&derived)?;
    let cipher_key = Zeroizing::new(cipher_key);

    let mut xored = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    for (out, (k, d)) in xored.iter_mut().zip(key.private_key().iter().zip(half1)) {
        *out = k ^ d;
    }
    let encrypted = cipher.encrypt_ecb(&cipher_key, xored.as_slice())?;

    let mut buffer = Vec::with_capacity(NEP2_KEY_SIZE);
    buffer.extend_from_slice(&NEP2_PREFIX);
    buffer.extend_from_slice(&hash);
    buffer.extend_from_slice(&encrypted);
    debug!(n = params.n, r = params.r, p = params.p, "encrypted nep2 key");
    Ok(buffer.to_base58_check(None, None))
}

/// Recovers the key pair inside `nep2`.
///
/// # Errors
///
/// `Nep2Mismatch` when the recovered key's address does not hash to the
/// stored address hash, which is what a wrong passphrase produces.
pub fn decrypt_nep2<K, C>(
    nep2: &str,
    passphrase: &str,
    version: u8,
    params: &ScryptParameters,
    kdf: &K,
    cipher: &C,
) -> WalletResult<KeyPair>
where
    K: KeyDerivation + ?Sized,
    C: BlockCipher + ?Sized,
{
    params.validate()?;
    let raw = Zeroizing::new(Vec::<u8>::from_base58_check(nep2, None, None)?);
    if raw.len() != NEP2_KEY_SIZE {
        return Err(WalletError::InvalidNep2Key(format!(
            "payload is {} bytes, expected {}",
            raw.len(),
            NEP2_KEY_SIZE
        )));
    }
    if raw[..3] != NEP2_PREFIX {
        return Err(WalletError::InvalidNep2Key(format!(
            "unexpected prefix {}",
            hex::encode(&raw[..3])
        )));
    }
    let stored_hash = &raw[3..3 + ADDRESS_HASH_SIZE];
    let encrypted = &raw[3 + ADDRESS_HASH_SIZE..];

    let derived = kdf.derive(passphrase.as_bytes(), stored_hash, params, DERIVED_KEY_SIZE)?;
    let (half1, cipher_key) = split_derived(&derived)?;
    let cipher_key = Zeroizing::new(cipher_key);
    let decrypted = Zeroizing::new(cipher.decrypt_ecb(&cipher_key, encrypted)?);

    let mut private_key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    for (out, (e, d)) in private_key.iter_mut().zip(decrypted.iter().zip(half1)) {
        *out = e ^ d;
    }
    let key = KeyPair::from_private_key(private_key.as_slice())
        .map_err(|_| WalletError::Nep2Mismatch)?;
    if address_hash(&key, version) != stored_hash {
        return Err(WalletError::Nep2Mismatch);
    }
    Ok(key)
}

impl KeyPair {
    /// Exports this key as NEP-2 with scrypt and AES-256-ECB.
    pub fn export_nep2(
        &self,
        passphrase: &str,
        version: u8,
        params: &ScryptParameters,
    ) -> WalletResult<String> {
        encrypt_nep2(self, passphrase, version, params, &ScryptKdf, &Aes256Ecb)
    }

    /// Imports a NEP-2 key with scrypt and AES-256-ECB.
    pub fn from_nep2(
        nep2: &str,
        passphrase: &str,
        version: u8,
        params: &ScryptParameters,
    ) -> WalletResult<Self> {
        decrypt_nep2(nep2, passphrase, version, params, &ScryptKdf, &Aes256Ecb)
    }
}
