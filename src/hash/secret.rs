//! The four-lane wyhash secret.
//!
//! The secret diversifies the mixer independently of the seed. Keeping it out
//! of reach of whoever chooses the input is what makes targeted collision
//! flooding impractical. It is not a cryptographic key.

#![allow(clippy::unreadable_literal)]

use crate::error::{Result, WyHashError};
use std::fmt;

/// Four 64-bit constants that parameterize the wyhash mixer.
///
/// Any bit pattern is accepted. The published defaults use odd lanes with
/// balanced popcounts; secrets that ignore that produce weaker mixing but are
/// not rejected.
///
/// # Examples
///
/// ```
/// use wydigest::Secret;
///
/// let secret = Secret::new(1, 3, 5, 7);
/// assert_eq!(secret.to_array(), [1, 3, 5, 7]);
/// assert_eq!(Secret::try_from(&[1u64, 3, 5, 7][..]).unwrap(), secret);
/// assert!(Secret::try_from(&[1u64, 3, 5][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Secret {
    /// First lane; folded with the seed and into the final mix.
    pub a: u64,
    /// Second lane; keys the first accumulator and the finalizer.
    pub b: u64,
    /// Third lane; keys the second block accumulator.
    pub c: u64,
    /// Fourth lane; keys the third block accumulator.
    pub d: u64,
}

impl Secret {
    /// Number of lanes in a secret.
    pub const LANES: usize = 4;

    /// The published wyhash secret, used when nothing else is configured.
    pub const DEFAULT: Self = Self::new(
        0xa076_1d64_78bd_642f,
        0xe703_7ed1_a0b4_28db,
        0x8ebc_6af0_9c88_c6e3,
        0x5899_65cc_7537_4cc3,
    );

    /// Build a secret from its four lanes.
    #[must_use]
    pub const fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Build a secret from an array of lanes.
    #[must_use]
    pub const fn from_array(lanes: [u64; 4]) -> Self {
        Self::new(lanes[0], lanes[1], lanes[2], lanes[3])
    }

    /// The lanes as an array, in `a, b, c, d` order.
    #[must_use]
    pub const fn to_array(self) -> [u64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Lane at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`] unless `index < 4`.
    pub fn get(&self, index: usize) -> Result<u64> {
        match index {
            0 => Ok(self.a),
            1 => Ok(self.b),
            2 => Ok(self.c),
            3 => Ok(self.d),
            _ => Err(WyHashError::out_of_range(index, 1, Self::LANES)),
        }
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<[u64; 4]> for Secret {
    fn from(lanes: [u64; 4]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<Secret> for [u64; 4] {
    fn from(secret: Secret) -> Self {
        secret.to_array()
    }
}

impl TryFrom<&[u64]> for Secret {
    type Error = WyHashError;

    fn try_from(lanes: &[u64]) -> Result<Self> {
        let lanes: [u64; 4] = lanes.try_into().map_err(|_| {
            WyHashError::invalid_configuration(format!(
                "secret needs exactly {} lanes, got {}",
                Self::LANES,
                lanes.len()
            ))
        })?;
        Ok(Self::from_array(lanes))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Secret({:#018x}, {:#018x}, {:#018x}, {:#018x})",
            self.a, self.b, self.c, self.d
        )
    }
}
