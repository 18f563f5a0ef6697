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

//! Neo BigInteger
//!
//! Arbitrary-precision signed integers used for money amounts, curve
//! coordinates and script literals.
//!
//! ## Example
//!
//! ```rust
//! use neo_bigint::{BigInteger, Endianness};
//!
//! let value: BigInteger = "-129".parse().unwrap();
//! assert_eq!(value.to_signed_bytes(Endianness::Little), vec![0x7f, 0xff]);
//! assert_eq!(value.modulo(&BigInteger::from(10)).unwrap(), BigInteger::from(1));
//! ```

pub mod bytes;
pub mod error;
pub mod integer;
mod limbs;
pub mod modular;
pub mod random;

pub use bytes::Endianness;
pub use error::{BigIntError, BigIntResult};
pub use integer::{BigInteger, Sign};
