// Copyright (C) 2015-2025 The Neo Project.
//
// wif.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wallet Import Format for private keys.

use crate::base58::{Base58Error, FromBase58Check, ToBase58Check};
use neo_config::{PRIVATE_KEY_SIZE, WIF_COMPRESSED_FLAG, WIF_VERSION};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifError {
    #[error("wif-decode: {0}")]
    InvalidBase58Encoded(#[from] Base58Error),

    #[error("wif-decode: invalid length '{0}'")]
    InvalidWifLength(usize),

    #[error("wif-decode: invalid version '{0}'")]
    InvalidVersion(u8),

    #[error("wif-decode: invalid compressed flag '{0}'")]
    InvalidCompressedFlag(u8),

    #[error("wif-decode: key is not marked compressed")]
    Uncompressed,
}

/// A decoded WIF payload. The buffer is wiped on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Wif {
    version: u8,

    compressed: bool,

    // version byte, data bytes and the optional compressed flag byte
    whole: Vec<u8>,
}

impl Wif {
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn data(&self) -> &[u8] {
        if self.compressed {
            &self.whole[1..self.whole.len() - 1]
        } else {
            &self.whole[1..]
        }
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

pub trait WifEncode {
    fn wif_encode(&self, version: u8, compressed: bool) -> String;
}

pub trait WifDecode {
    fn wif_decode(&self, expected_data_size: usize) -> Result<Wif, WifError>;
}

impl<T: AsRef<[u8]> + ?Sized> WifEncode for T {
    fn wif_encode(&self, version: u8, compressed: bool) -> String {
        let data = self.as_ref();
        let mut buf = Zeroizing::new(Vec::with_capacity(1 + data.len() + 1));

        buf.push(version);
        buf.extend_from_slice(data);
        if compressed {
            buf.push(WIF_COMPRESSED_FLAG);
        }

        buf.to_base58_check(None, None)
    }
}

impl<T: AsRef<str> + ?Sized> WifDecode for T {
    fn wif_decode(&self, expected_data_size: usize) -> Result<Wif, WifError> {
        let whole = Vec::from_base58_check(self.as_ref(), None, None)?;

        // version byte plus payload, optionally plus the flag
        let len = whole.len();
        if len != expected_data_size + 1 && len != expected_data_size + 2 {
            return Err(WifError::InvalidWifLength(len));
        }

        let compressed = len == expected_data_size + 2;
        let last = whole.last().copied().unwrap_or(0);
        if compressed && last != WIF_COMPRESSED_FLAG {
            return Err(WifError::InvalidCompressedFlag(last));
        }

        Ok(Wif {
            version: whole[0],
            compressed,
            whole,
        })
    }
}

/// Encodes a 32-byte private key as a Neo WIF string (`0x80`, compressed).
pub fn to_wif(private_key: &[u8; PRIVATE_KEY_SIZE]) -> String {
    private_key.wif_encode(WIF_VERSION, true)
}

/// Decodes a Neo WIF string into its 32-byte private key.
///
/// Neo only issues compressed keys, so the `0x01` flag is mandatory.
pub fn from_wif(wif: &str) -> Result<Zeroizing<[u8; PRIVATE_KEY_SIZE]>, WifError> {
    let decoded = wif.wif_decode(PRIVATE_KEY_SIZE)?;
    if decoded.version() != WIF_VERSION {
        return Err(WifError::InvalidVersion(decoded.version()));
    }
    if !decoded.compressed() {
        return Err(WifError::Uncompressed);
    }

    let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    key.copy_from_slice(decoded.data());
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_wif_fixtures() {
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(
            to_wif(&one),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
        assert_eq!(
            to_wif(&[1u8; 32]),
            "KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHH"
        );

        let key = from_wif("L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP").unwrap();
        assert_eq!(
            *key,
            hex!("CBF4B9F70470856BB4F40F80B87EDB90865997FFEE6DF315AB166D713AF433A5")
        );
    }

    #[test]
    fn test_wif_rejects_uncompressed_and_foreign_versions() {
        let key = [7u8; 32];
        let uncompressed = key.wif_encode(WIF_VERSION, false);
        assert_eq!(from_wif(&uncompressed).unwrap_err(), WifError::Uncompressed);

        let testnet = key.wif_encode(0xef, true);
        assert_eq!(from_wif(&testnet).unwrap_err(), WifError::InvalidVersion(0xef));

        let short = [7u8; 30].wif_encode(WIF_VERSION, true);
        assert_eq!(from_wif(&short).unwrap_err(), WifError::InvalidWifLength(32));
    }

    #[test]
    fn test_wif_rejects_bad_flag() {
        let mut payload = vec![WIF_VERSION];
        payload.extend_from_slice(&[9u8; 32]);
        payload.push(0x02);
        let encoded = payload.to_base58_check(None, None);
        assert_eq!(
            encoded.wif_decode(32).unwrap_err(),
            WifError::InvalidCompressedFlag(0x02)
        );
    }
}
