// Copyright (C) 2015-2025 The Neo Project.
//
// limbs.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Magnitude arithmetic on little-endian `u32` limb vectors.
//!
//! Every function here works on unsigned magnitudes and returns normalized
//! vectors (no most-significant zero limbs). Signs are handled one level up
//! in [`crate::BigInteger`].

use std::cmp::Ordering;

pub(crate) type Limb = u32;
pub(crate) const LIMB_BITS: u32 = Limb::BITS;
const BASE: u64 = 1 << LIMB_BITS;

pub(crate) trait Widening: Sized {
    type DoubleWidth;

    fn add_with_carrying(self, rhs: Self, carry: bool) -> (Self, bool);

    fn sub_with_borrowing(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// `self * rhs + addend + carry`, split into (low, high).
    fn mul_add_with_carrying(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self);
}

impl Widening for u32 {
    type DoubleWidth = u64;

    #[inline]
    fn add_with_carrying(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (r1, o1) = self.overflowing_add(rhs);
        if carry {
            let (r2, o2) = r1.overflowing_add(1);
            (r2, o1 || o2)
        } else {
            (r1, o1)
        }
    }

    #[inline]
    fn sub_with_borrowing(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (r1, o1) = self.overflowing_sub(rhs);
        if borrow {
            let (r2, o2) = r1.overflowing_sub(1);
            (r2, o1 || o2)
        } else {
            (r1, o1)
        }
    }

    #[inline]
    fn mul_add_with_carrying(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self) {
        let r = self as Self::DoubleWidth * rhs as Self::DoubleWidth
            + addend as Self::DoubleWidth
            + carry as Self::DoubleWidth;
        (r as Self, (r >> LIMB_BITS) as Self)
    }
}

/// Drops most-significant zero limbs.
#[inline]
pub(crate) fn normalize(limbs: &mut Vec<Limb>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// View of `limbs` without most-significant zero limbs.
#[inline]
pub(crate) fn trimmed(limbs: &[Limb]) -> &[Limb] {
    let mut len = limbs.len();
    while len > 0 && limbs[len - 1] == 0 {
        len -= 1;
    }
    &limbs[..len]
}

pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    let (a, b) = (trimmed(a), trimmed(b));
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        other => other,
    }
}

pub(crate) fn add(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (r, c) = x.add_with_carrying(y, carry);
        out.push(r);
        carry = c;
    }
    if carry {
        out.push(1);
    }
    normalize(&mut out);
    out
}

/// `a - b`; requires `a >= b`.
pub(crate) fn sub(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = a.to_vec();
    sub_assign(&mut out, b);
    normalize(&mut out);
    out
}

/// In-place `a -= b`; requires `a >= b`. Leaves `a` unnormalized.
pub(crate) fn sub_assign(a: &mut [Limb], b: &[Limb]) {
    let mut borrow = false;
    for i in 0..a.len() {
        let y = b.get(i).copied().unwrap_or(0);
        if i >= b.len() && !borrow {
            break;
        }
        let (r, c) = a[i].sub_with_borrowing(y, borrow);
        a[i] = r;
        borrow = c;
    }
    debug_assert!(!borrow);
}

pub(crate) fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = x.mul_add_with_carrying(y, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
    normalize(&mut out);
    out
}

pub(crate) fn mul_small(a: &[Limb], m: Limb) -> Vec<Limb> {
    if m == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &x in a {
        let (lo, hi) = x.mul_add_with_carrying(m, 0, carry);
        out.push(lo);
        carry = hi;
    }
    out.push(carry);
    normalize(&mut out);
    out
}

/// `a * m + c` in place.
pub(crate) fn mul_add_small_assign(a: &mut Vec<Limb>, m: Limb, c: Limb) {
    let mut carry = c;
    for x in a.iter_mut() {
        let (lo, hi) = x.mul_add_with_carrying(m, 0, carry);
        *x = lo;
        carry = hi;
    }
    if carry != 0 {
        a.push(carry);
    }
    normalize(a);
}

/// Divides by a single limb, returning (quotient, remainder).
pub(crate) fn divrem_small(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(d != 0);
    let mut q = vec![0; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | a[i] as u64;
        q[i] = (cur / d as u64) as Limb;
        rem = cur % d as u64;
    }
    normalize(&mut q);
    (q, rem as Limb)
}

/// Long division, returning (quotient, remainder). `b` must be non-zero.
///
/// Each quotient limb is first bracketed from the remainder's top two limbs
/// over the divisor's top limb: `num / (top + 1) <= q <= num / top`. The
/// bracket is then narrowed by binary search to the largest `q` whose trial
/// product `b * q` does not exceed the current remainder window.
pub(crate) fn divrem(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let (a, b) = (trimmed(a), trimmed(b));
    debug_assert!(!b.is_empty());
    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = divrem_small(a, b[0]);
        let mut r = vec![r];
        normalize(&mut r);
        return (q, r);
    }

    let n = b.len();
    let top = b[n - 1] as u64;
    let mut rem = a.to_vec();
    rem.push(0);
    let mut q = vec![0; a.len() - n + 1];

    for i in (0..q.len()).rev() {
        let num = ((rem[i + n] as u64) << LIMB_BITS) | rem[i + n - 1] as u64;
        let mut lo = num / (top + 1);
        let mut hi = (num / top).min(BASE - 1);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if cmp(&mul_small(b, mid as Limb), &rem[i..]) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        if lo != 0 {
            let trial = mul_small(b, lo as Limb);
            sub_assign(&mut rem[i..], &trial);
        }
        q[i] = lo as Limb;
    }

    normalize(&mut q);
    normalize(&mut rem);
    (q, rem)
}

pub(crate) fn shl(a: &[Limb], bits: usize) -> Vec<Limb> {
    if a.is_empty() {
        return Vec::new();
    }
    let limbs = bits / LIMB_BITS as usize;
    let shift = (bits % LIMB_BITS as usize) as u32;
    let mut out = vec![0; limbs];
    if shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0;
        for &x in a {
            out.push((x << shift) | carry);
            carry = x >> (LIMB_BITS - shift);
        }
        out.push(carry);
    }
    normalize(&mut out);
    out
}

pub(crate) fn shr(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limbs = bits / LIMB_BITS as usize;
    if limbs >= a.len() {
        return Vec::new();
    }
    let shift = (bits % LIMB_BITS as usize) as u32;
    let src = &a[limbs..];
    let mut out = Vec::with_capacity(src.len());
    if shift == 0 {
        out.extend_from_slice(src);
    } else {
        for i in 0..src.len() {
            let hi = src.get(i + 1).copied().unwrap_or(0);
            out.push((src[i] >> shift) | (hi << (LIMB_BITS - shift)));
        }
    }
    normalize(&mut out);
    out
}

/// Whether any of the lowest `bits` bits is set.
pub(crate) fn any_low_bits(a: &[Limb], bits: usize) -> bool {
    let limbs = bits / LIMB_BITS as usize;
    let shift = bits % LIMB_BITS as usize;
    if a.iter().take(limbs).any(|&x| x != 0) {
        return true;
    }
    match (shift, a.get(limbs)) {
        (0, _) | (_, None) => false,
        (s, Some(&x)) => x & ((1 << s) - 1) != 0,
    }
}

pub(crate) fn bit_length(a: &[Limb]) -> u64 {
    let a = trimmed(a);
    match a.last() {
        None => 0,
        Some(&top) => (a.len() as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64,
    }
}

pub(crate) fn test_bit(a: &[Limb], index: u64) -> bool {
    let limb = (index / LIMB_BITS as u64) as usize;
    match a.get(limb) {
        Some(&x) => (x >> (index % LIMB_BITS as u64)) & 1 == 1,
        None => false,
    }
}
