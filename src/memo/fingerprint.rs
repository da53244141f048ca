// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 64-bit fingerprints of search states.
//!
//! Each row width goes through a 32-bit avalanche mix, and the results are
//! folded into a seed with a multiplicative-xor combiner. The seed starts
//! at the row count. Obligations are folded in after the widths, top of
//! stack first.
//!
//! Fingerprints are not verified against the full state on lookup: two
//! different states that collide share a memo entry.

use crate::geometry::Width;
use crate::trail::ObligationStack;

const MIX: i32 = 0x45d9f3b;
const GOLDEN: u32 = 0x9e37_79b9;

#[inline]
fn mix_width(width: Width) -> i32 {
    let mut x = width;
    x = ((x >> 16) ^ x).wrapping_mul(MIX);
    x = ((x >> 16) ^ x).wrapping_mul(MIX);
    (x >> 16) ^ x
}

/// Fold one 32-bit value into `seed`.
#[inline]
fn combine(seed: u64, value: u32) -> u64 {
    let term = u64::from(value.wrapping_add(GOLDEN))
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2);
    seed ^ term
}

fn fold_widths(seed: u64, widths: &[Width]) -> u64 {
    widths
        .iter()
        .fold(seed, |seed, &width| combine(seed, mix_width(width) as u32))
}

/// Fingerprint of a shape with no pending obligations.
///
/// # Examples
///
/// ```
/// use staircase_tilings::memo::fingerprint;
///
/// assert_eq!(fingerprint(&[]), 0);
/// assert_eq!(fingerprint(&[1, 2, 3]), 14340105791766);
/// ```
pub fn fingerprint(widths: &[Width]) -> u64 {
    fold_widths(widths.len() as u64, widths)
}

/// Fingerprint of a shape together with its obligation stack.
///
/// The length seed is OR'd with the stack size, and each obligation
/// contributes its tile size and then its row.
pub fn fingerprint_with_obligations(widths: &[Width], pending: &ObligationStack) -> u64 {
    let seed = widths.len() as u64 | pending.len() as u64;
    pending.iter().fold(fold_widths(seed, widths), |seed, obligation| {
        let seed = combine(seed, obligation.tile_size as u32);
        combine(seed, obligation.row as u32)
    })
}
