// Copyright (C) 2015-2025 The Neo Project.
//
// scrypt_parameters.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Scrypt parameters for NEP-2 key protection.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Scrypt cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParameters {
    /// CPU/memory cost parameter (N).
    pub n: u32,

    /// Block size parameter (r).
    pub r: u32,

    /// Parallelization parameter (p).
    pub p: u32,
}

impl ScryptParameters {
    /// Creates new scrypt parameters.
    pub fn new(n: u32, r: u32, p: u32) -> ConfigResult<Self> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    /// Gets the default scrypt parameters for NEP-2.
    pub const fn default_nep2() -> Self {
        Self {
            n: 16384, // 2^14
            r: 8,
            p: 8,
        }
    }

    /// Gets fast scrypt parameters (for testing).
    pub const fn fast() -> Self {
        Self { n: 1024, r: 1, p: 1 }
    }

    /// Base-two logarithm of N, the form the `scrypt` crate takes.
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Validates the scrypt parameters.
    pub fn validate(&self) -> ConfigResult<()> {
        // N must be a power of 2 and greater than 1
        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(ConfigError::InvalidScrypt(
                "N must be a power of 2 greater than 1".to_string(),
            ));
        }

        if self.r == 0 {
            return Err(ConfigError::InvalidScrypt(
                "R must be greater than 0".to_string(),
            ));
        }

        if self.p == 0 {
            return Err(ConfigError::InvalidScrypt(
                "P must be greater than 0".to_string(),
            ));
        }

        if self.r > u32::MAX / 128 || self.n > u32::MAX / (128 * self.r) {
            return Err(ConfigError::InvalidScrypt(
                "N and R are too large".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the memory usage in bytes.
    pub fn memory_usage(&self) -> u64 {
        128 * self.r as u64 * self.n as u64
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self::default_nep2()
    }
}
