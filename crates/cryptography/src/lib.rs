// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Cryptography
//!
//! Hashing, secp256r1 arithmetic, ECDSA and the Base58Check/WIF text
//! encodings used by the Neo 2.x ledger. Hash, cipher and key-derivation
//! primitives are reached through capability traits so callers can plug
//! in their own implementations.
//!
//! ## Example
//!
//! ```rust
//! use neo_cryptography::{ECDsa, NativeHasher};
//! use rand::rngs::OsRng;
//!
//! let mut key = [0u8; 32];
//! key[31] = 7;
//! let signer = ECDsa::from_private_key(&key).unwrap();
//! let signature = signer.sign(b"message", &NativeHasher, &mut OsRng).unwrap();
//! assert!(signer.verify(b"message", &signature, &NativeHasher));
//! ```

pub mod aes;
pub mod base58;
pub mod ecc;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod scrypt;
pub mod wif;

pub use aes::{Aes256Ecb, BlockCipher};
pub use base58::{Base58Error, FromBase58, FromBase58Check, ToBase58, ToBase58Check};
pub use ecc::{ECCError, ECCurve, ECFieldElement, ECPoint};
pub use ecdsa::{ECDsa, Signature};
pub use error::{Error, Result};
pub use hash::{hash160, hash256, ripemd160, sha256, HashProvider, NativeHasher};
pub use scrypt::{KeyDerivation, ScryptKdf};
pub use wif::{from_wif, to_wif, Wif, WifDecode, WifEncode, WifError};
