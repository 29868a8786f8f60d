//! The wyhash digest (final version 4).
//!
//! WyHash is a fast, high-quality non-cryptographic hash function designed by
//! Wang Yi. This module is the orchestration layer: it combines a seed, a
//! [`Secret`] and a [`ByteView`] into one `u64`.
//!
//! # Algorithm Overview
//!
//! ```text
//! 1. Normalize the view to little-endian reads
//! 2. seed' = seed ⊕ mix(seed ⊕ s.a, s.b)
//! 3. Load (a, b) from the input:
//!      0 bytes     a = b = 0
//!      1-3 bytes   a = p[0]<<16 | p[len/2]<<8 | p[len-1], b = 0
//!      4-16 bytes  two overlapping pairs of 32-bit reads
//!      17+ bytes   48-byte blocks into three lanes, then 16-byte steps,
//!                  then (a, b) = the last 16 bytes of the input
//! 4. (a, b) = mum(a ⊕ s.b, b ⊕ seed')
//!    return mix(a ⊕ s.a ⊕ len, b ⊕ s.b)
//! ```
//!
//! The tail reads of step 3 re-read the final 16 bytes even when the loops
//! already consumed them. That overlap is part of the algorithm.
//!
//! # Byte Order
//!
//! Every integer read goes through the normalized view, so a big-endian host,
//! or an external buffer declared big-endian, produces the same digest as a
//! little-endian slice holding the same bytes.
//!
//! # Examples
//!
//! ```
//! use wydigest::hash::wyhash::wyhash;
//!
//! assert_eq!(wyhash(b"", 0), 0x0409_638e_e2bd_e459);
//! assert_eq!(wyhash(b"abc", 2), 0x32dd_92e4_b291_5153);
//! ```
//!
//! # References
//!
//! - Wang Yi: "wyhash - The FASTEST QUALITY hash" (https://github.com/wangyi-fudan/wyhash)

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unreadable_literal)]

use super::mixer::mix;
use super::secret::Secret;
use super::wide::full_multiply;
use crate::error::Result;
use crate::memory::{ByteOrder, ByteView};

/// Byte order the mixing arithmetic is defined in.
pub const REQUIRED_BYTE_ORDER: ByteOrder = ByteOrder::Little;

/// Hash `bytes` with `seed` and the default secret.
#[inline]
#[must_use]
pub fn wyhash(bytes: &[u8], seed: u64) -> u64 {
    wyhash_with_secret(bytes, seed, &Secret::DEFAULT)
}

/// Hash `bytes` with `seed` and a caller-supplied secret.
#[inline]
#[must_use]
pub fn wyhash_with_secret(bytes: &[u8], seed: u64, secret: &Secret) -> u64 {
    digest_total(&ByteView::new(bytes), seed, secret)
}

/// Digest of a view that is known to be self-consistent.
///
/// Every `ByteView` bounds its own reads, and [`digest`] only reads offsets
/// derived from `view.len()`, so the error arm cannot be reached.
#[inline]
pub(crate) fn digest_total(view: &ByteView<'_>, seed: u64, secret: &Secret) -> u64 {
    match digest(view, seed, secret) {
        Ok(hash) => hash,
        Err(err) => unreachable!("wyhash read outside its own view: {err}"),
    }
}

/// Core wyhash over any view.
pub(crate) fn digest(input: &ByteView<'_>, seed: u64, secret: &Secret) -> Result<u64> {
    let normalized;
    let view = if input.order() == REQUIRED_BYTE_ORDER {
        input
    } else {
        normalized = input.clone().with_order(REQUIRED_BYTE_ORDER);
        &normalized
    };

    let len = view.len();

    #[cfg(feature = "trace")]
    tracing::trace!(len, seed, reversed = !std::ptr::eq(view, input), "wyhash::digest");

    let mut seed = seed ^ mix(seed ^ secret.a, secret.b);

    let (a, b) = if len <= 16 {
        if len >= 4 {
            read_four_to_sixteen(view, len)?
        } else if len > 0 {
            (read_three_or_fewer(view, len)?, 0)
        } else {
            (0, 0)
        }
    } else {
        let large = digest_large(view, seed, secret)?;
        seed = large.seed;
        (large.a, large.b)
    };

    let r = full_multiply(a ^ secret.b, b ^ seed);
    Ok(mix(r.low ^ secret.a ^ len as u64, r.high ^ secret.b))
}

/// `p[0]<<16 | p[len/2]<<8 | p[len-1]`; bytes overlap for `len < 3`.
#[inline(always)]
fn read_three_or_fewer(view: &ByteView<'_>, len: usize) -> Result<u64> {
    debug_assert!((1..=3).contains(&len));
    Ok(u64::from(view.get_u8(0)?) << 16
        | u64::from(view.get_u8(len >> 1)?) << 8
        | u64::from(view.get_u8(len - 1)?))
}

/// Two overlapping pairs of 32-bit reads covering 4 to 16 bytes.
///
/// For `len >= 8` the second word of each pair sits four bytes in from its
/// end of the input; below 8 it collapses onto the first word.
#[inline(always)]
fn read_four_to_sixteen(view: &ByteView<'_>, len: usize) -> Result<(u64, u64)> {
    debug_assert!((4..=16).contains(&len));
    let step = (len >> 3) << 2;
    let a = u64::from(view.get_u32(0)?) << 32 | u64::from(view.get_u32(step)?);
    let b = u64::from(view.get_u32(len - 4)?) << 32 | u64::from(view.get_u32(len - 4 - step)?);
    Ok((a, b))
}

/// State handed back from the block loops.
struct LargeState {
    seed: u64,
    a: u64,
    b: u64,
}

/// Inputs over 16 bytes: three-lane 48-byte blocks, 16-byte steps, tail.
fn digest_large(view: &ByteView<'_>, mut seed: u64, secret: &Secret) -> Result<LargeState> {
    let len = view.len();
    debug_assert!(len > 16);

    let mut i = len;
    let mut offset = 0;

    if i > 48 {
        let mut see1 = seed;
        let mut see2 = seed;
        while i > 48 {
            seed = mix(
                view.get_u64(offset)? ^ secret.b,
                view.get_u64(offset + 8)? ^ seed,
            );
            see1 = mix(
                view.get_u64(offset + 16)? ^ secret.c,
                view.get_u64(offset + 24)? ^ see1,
            );
            see2 = mix(
                view.get_u64(offset + 32)? ^ secret.d,
                view.get_u64(offset + 40)? ^ see2,
            );
            offset += 48;
            i -= 48;
        }
        seed ^= see1 ^ see2;
    }

    while i > 16 {
        seed = mix(
            view.get_u64(offset)? ^ secret.b,
            view.get_u64(offset + 8)? ^ seed,
        );
        offset += 16;
        i -= 16;
    }

    // Last 16 bytes of the input, whatever the loops covered.
    Ok(LargeState {
        seed,
        a: view.get_u64(offset + i - 16)?,
        b: view.get_u64(offset + i - 8)?,
    })
}
