//! The wyhash multiply-fold primitive.
//!
//! ```text
//! mix(a, b) = let r = a × b as u128
//!             in (r >> 64) ⊕ (r & 0xFFFFFFFFFFFFFFFF)
//! ```
//!
//! Every stage of the digest goes through this one operation, so its
//! correctness reduces entirely to [`full_multiply`].

use super::wide::full_multiply;

/// Multiply `a` and `b` to 128 bits and XOR the two halves together.
///
/// # Examples
///
/// ```
/// use wydigest::hash::mixer::mix;
///
/// assert_eq!(mix(0, 0xdead_beef), 0);
/// assert_eq!(mix(1 << 32, 1 << 32), 1);
/// ```
#[inline(always)]
#[must_use]
pub const fn mix(a: u64, b: u64) -> u64 {
    let r = full_multiply(a, b);
    r.low ^ r.high
}
