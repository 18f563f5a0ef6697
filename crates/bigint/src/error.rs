// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for big integer operations.

use neo_config::ErrorKind;
use thiserror::Error;

/// Errors raised by [`crate::BigInteger`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Value is not invertible modulo the given modulus")]
    NotInvertible,

    #[error("Modulus must be positive")]
    NonPositiveModulus,

    #[error("Radix {0} is outside 2..=36")]
    InvalidRadix(u32),

    #[error("Invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    #[error("Empty number string")]
    Empty,

    /// Holds the raw bits of the rejected `f64`.
    #[error("Cannot convert non-finite value {} to an integer", f64::from_bits(*.0))]
    NotFinite(u64),

    #[error("Random bound must be positive")]
    InvalidBound,
}

impl BigIntError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigIntError::DivisionByZero
            | BigIntError::NotInvertible
            | BigIntError::NonPositiveModulus
            | BigIntError::InvalidBound => ErrorKind::Arithmetic,
            BigIntError::InvalidRadix(_)
            | BigIntError::InvalidDigit { .. }
            | BigIntError::Empty
            | BigIntError::NotFinite(_) => ErrorKind::Format,
        }
    }
}

/// Result type for big integer operations
pub type BigIntResult<T> = std::result::Result<T, BigIntError>;
