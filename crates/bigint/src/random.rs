// Copyright (C) 2015-2025 The Neo Project.
//
// random.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Random sampling over a caller-supplied source.

use crate::error::{BigIntError, BigIntResult};
use crate::integer::{BigInteger, Sign};
use crate::limbs::{Limb, LIMB_BITS};
use rand::RngCore;

impl BigInteger {
    /// Uniform value in `[0, 2^bits)`.
    pub fn random_bits<R: RngCore + ?Sized>(bits: u64, rng: &mut R) -> BigInteger {
        if bits == 0 {
            return BigInteger::zero();
        }
        let limb_count = bits.div_ceil(LIMB_BITS as u64) as usize;
        let mut mag: Vec<Limb> = (0..limb_count).map(|_| rng.next_u32()).collect();
        let excess = limb_count as u64 * LIMB_BITS as u64 - bits;
        if excess > 0 {
            if let Some(top) = mag.last_mut() {
                *top &= Limb::MAX >> excess;
            }
        }
        BigInteger::from_parts(Sign::Positive, mag)
    }

    /// Uniform value in `[0, bound)` by rejection sampling.
    ///
    /// # Errors
    ///
    /// [`BigIntError::InvalidBound`] when `bound` is not positive.
    pub fn random_below<R: RngCore + ?Sized>(
        bound: &BigInteger,
        rng: &mut R,
    ) -> BigIntResult<BigInteger> {
        if !bound.is_positive() {
            return Err(BigIntError::InvalidBound);
        }
        let bits = bound.bit_length();
        loop {
            let candidate = Self::random_bits(bits, rng);
            if &candidate < bound {
                return Ok(candidate);
            }
        }
    }

    /// Uniform value in `[low, high)`.
    pub fn random_range<R: RngCore + ?Sized>(
        low: &BigInteger,
        high: &BigInteger,
        rng: &mut R,
    ) -> BigIntResult<BigInteger> {
        Ok(low + Self::random_below(&(high - low), rng)?)
    }
}
