// Copyright (C) 2015-2025 The Neo Project.
//
// hash.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Hash functions for Neo cryptography.
//!
//! SHA-256 and RIPEMD-160 are consumed through the [`HashProvider`]
//! capability so callers can substitute their own primitive. The free
//! functions are shorthands over [`NativeHasher`].

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Hash primitives required by the ledger core.
///
/// Implementors provide SHA-256 and RIPEMD-160; the Neo combinations are
/// derived from those two.
pub trait HashProvider {
    /// SHA-256 of `data`.
    fn sha256(&self, data: &[u8]) -> [u8; 32];

    /// RIPEMD-160 of `data`.
    fn ripemd160(&self, data: &[u8]) -> [u8; 20];

    /// Double SHA-256, used for transaction ids and Base58Check checksums.
    fn hash256(&self, data: &[u8]) -> [u8; 32] {
        self.sha256(&self.sha256(data))
    }

    /// RIPEMD-160 of SHA-256, used for script hashes.
    fn hash160(&self, data: &[u8]) -> [u8; 20] {
        self.ripemd160(&self.sha256(data))
    }
}

impl<T: HashProvider + ?Sized> HashProvider for &T {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        (**self).sha256(data)
    }

    fn ripemd160(&self, data: &[u8]) -> [u8; 20] {
        (**self).ripemd160(data)
    }
}

/// [`HashProvider`] backed by the `sha2` and `ripemd` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHasher;

impl HashProvider for NativeHasher {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn ripemd160(&self, data: &[u8]) -> [u8; 20] {
        let mut hasher = Ripemd160::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    NativeHasher.sha256(data)
}

/// Computes RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    NativeHasher.ripemd160(data)
}

/// Computes Hash160 (RIPEMD-160 of SHA-256) of the input data.
/// This is commonly used for Neo addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    NativeHasher.hash160(data)
}

/// Computes Hash256 (double SHA-256) of the input data.
/// This is commonly used for Neo transaction hashes.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    NativeHasher.hash256(data)
}
