// Copyright (C) 2015-2025 The Neo Project.
//
// scrypt.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Scrypt key derivation capability.

use crate::{Error, Result};
use neo_config::ScryptParameters;
use zeroize::Zeroizing;

/// Password-based key derivation capability.
pub trait KeyDerivation {
    /// Derives `len` bytes from `password` and `salt`.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ScryptParameters,
        len: usize,
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// [`KeyDerivation`] backed by the `scrypt` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScryptKdf;

impl KeyDerivation for ScryptKdf {
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ScryptParameters,
        len: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        params
            .validate()
            .map_err(|e| Error::KeyDerivation(e.to_string()))?;
        let scrypt_params = scrypt::Params::new(params.log_n(), params.r, params.p, len)
            .map_err(|e| Error::KeyDerivation(e.to_string()))?;

        let mut output = Zeroizing::new(vec![0u8; len]);
        scrypt::scrypt(password, salt, &scrypt_params, output.as_mut_slice())
            .map_err(|e| Error::KeyDerivation(e.to_string()))?;
        Ok(output)
    }
}
