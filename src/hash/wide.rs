//! Full-width 64×64 → 128-bit unsigned multiplication.
//!
//! The wyhash mixer needs both halves of the exact unsigned product. Rust has a
//! native `u128`, which LLVM lowers to a single widening multiply (`mul` on
//! x86-64, `mul` + `umulh` on AArch64), so that is the primary path.
//!
//! [`multiply_high_from_signed`] is the portable correction for targets whose
//! only multiply-high is *signed*. The digest does not call it; it is tested
//! against the native path. The signed high half differs from the unsigned
//! one whenever either operand has bit 63 set.
//!
//! # Examples
//!
//! ```
//! use wydigest::hash::wide::{full_multiply, WideProduct};
//!
//! let p = full_multiply(u64::MAX, u64::MAX);
//! assert_eq!(p, WideProduct { low: 1, high: u64::MAX - 1 });
//! ```

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

/// The 128-bit result of a widening multiply, split into 64-bit halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideProduct {
    /// Least-significant 64 bits.
    pub low: u64,
    /// Most-significant 64 bits.
    pub high: u64,
}

impl WideProduct {
    /// Reassemble the product as a native `u128`.
    #[inline]
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }
}

impl From<u128> for WideProduct {
    #[inline]
    fn from(value: u128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as u64,
        }
    }
}

/// Exact unsigned product of `x` and `y`.
///
/// Total over all `u64` pairs; `(high:low) == x * y` as an unsigned 128-bit integer.
#[inline(always)]
#[must_use]
pub const fn full_multiply(x: u64, y: u64) -> WideProduct {
    let r = (x as u128) * (y as u128);
    WideProduct {
        low: r as u64,
        high: (r >> 64) as u64,
    }
}

/// High 64 bits of the unsigned product of `x` and `y`.
#[inline(always)]
#[must_use]
pub const fn multiply_high(x: u64, y: u64) -> u64 {
    full_multiply(x, y).high
}

/// Unsigned multiply-high derived from a signed multiply-high.
///
/// Hacker's Delight, 2nd ed, section 8-3:
///
/// ```text
/// uhigh(x, y) = shigh(x, y) + (y & (x >>> 63)) + (x & (y >>> 63))
/// ```
///
/// where `>>>` is an arithmetic shift producing an all-ones or all-zeros mask.
#[inline]
#[must_use]
pub const fn multiply_high_from_signed(x: u64, y: u64) -> u64 {
    let signed_high = (((x as i64 as i128) * (y as i64 as i128)) >> 64) as u64;
    let x_mask = ((x as i64) >> 63) as u64;
    let y_mask = ((y as i64) >> 63) as u64;
    signed_high
        .wrapping_add(y & x_mask)
        .wrapping_add(x & y_mask)
}
