// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Elliptic curve arithmetic over secp256r1.

mod curve;
mod field_element;
mod point;

pub use curve::ECCurve;
pub use field_element::{lucas_sqrt, ECFieldElement};
pub use point::ECPoint;

use neo_config::ErrorKind;
use thiserror::Error;

/// Errors raised by curve arithmetic and point decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ECCError {
    #[error("Invalid field element")]
    InvalidFieldElement,

    #[error("Invalid point encoding: {0}")]
    InvalidPointFormat(String),

    #[error("Point is not on the curve")]
    PointNotOnCurve,

    #[error("Field element is not invertible")]
    NotInvertible,
}

impl ECCError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ECCError::NotInvertible => ErrorKind::Arithmetic,
            ECCError::InvalidFieldElement => ErrorKind::Constraint,
            ECCError::InvalidPointFormat(_) | ECCError::PointNotOnCurve => ErrorKind::Format,
        }
    }
}

/// Result type for ECC operations
pub type ECCResult<T> = std::result::Result<T, ECCError>;
