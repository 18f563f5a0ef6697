// Copyright (C) 2015-2025 The Neo Project.
//
// aes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! AES-256 in ECB mode, the block cipher NEP-2 wraps private keys with.

use crate::{Error, Result};
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

pub const AES256_KEY_SIZE: usize = 32;

const AES_BLOCK_SIZE: usize = 16;

/// Block cipher capability with a fixed 32-byte key and block-aligned input.
pub trait BlockCipher {
    /// Encrypts `data` (a multiple of 16 bytes) and returns the ciphertext.
    fn encrypt_ecb(&self, key: &[u8; AES256_KEY_SIZE], data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `data` (a multiple of 16 bytes) and returns the plaintext.
    fn decrypt_ecb(&self, key: &[u8; AES256_KEY_SIZE], data: &[u8]) -> Result<Vec<u8>>;
}

/// [`BlockCipher`] backed by the `aes` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Ecb;

fn check_aligned(data: &[u8]) -> Result<()> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(Error::Cipher(format!(
            "data length {} is not a multiple of {}",
            data.len(),
            AES_BLOCK_SIZE
        )));
    }
    Ok(())
}

impl BlockCipher for Aes256Ecb {
    fn encrypt_ecb(&self, key: &[u8; AES256_KEY_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        check_aligned(data)?;
        let cipher = Aes256::new(GenericArray::from_slice(key));
        let mut buf = data.to_vec();
        buf.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.encrypt_block(block));
        Ok(buf)
    }

    fn decrypt_ecb(&self, key: &[u8; AES256_KEY_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        check_aligned(data)?;
        let cipher = Aes256::new(GenericArray::from_slice(key));
        let mut buf = data.to_vec();
        buf.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.decrypt_block(block));
        Ok(buf)
    }
}
