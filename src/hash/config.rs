//! Immutable digest configuration.
//!
//! A [`HashConfig`] is a seed plus a [`Secret`]. It is `Copy`, never mutated
//! by hashing, and safe to share across any number of threads.
//!
//! # Examples
//!
//! ```
//! use wydigest::{HashConfig, Secret};
//!
//! let config = HashConfig::default().with_seed(4);
//! assert_eq!(config.hash(b"abcdefghijklmnopqrstuvwxyz"), 0x7a43_afb6_1d7f_5f40);
//!
//! let keyed = config.with_secret(Secret::new(1, 3, 5, 7));
//! assert_ne!(keyed.hash(b"abc"), config.hash(b"abc"));
//! assert_eq!(keyed.seed(), 4);
//! ```

use super::secret::Secret;
use super::wyhash::{digest, digest_total};
use crate::error::Result;
use crate::memory::ByteView;
use std::fmt;

/// Seed and secret for the wyhash digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashConfig {
    seed: u64,
    secret: Secret,
}

impl HashConfig {
    /// Seed `0` with [`Secret::DEFAULT`].
    pub const DEFAULT: Self = Self::new(0, Secret::DEFAULT);

    /// Build a configuration from a seed and a secret.
    #[must_use]
    pub const fn new(seed: u64, secret: Secret) -> Self {
        Self { seed, secret }
    }

    /// Same secret, different seed.
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self::new(seed, self.secret)
    }

    /// Same seed, different secret.
    #[must_use]
    pub const fn with_secret(self, secret: Secret) -> Self {
        Self::new(self.seed, secret)
    }

    /// The seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The secret.
    ///
    /// Keep it away from whoever controls the input if flooding resistance matters.
    #[must_use]
    pub const fn secret(&self) -> Secret {
        self.secret
    }

    /// Digest of a whole slice.
    #[inline]
    #[must_use]
    pub fn hash(&self, bytes: &[u8]) -> u64 {
        self.hash_view(&ByteView::new(bytes))
    }

    /// Digest of `bytes[offset..offset + len]`.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// `offset + len` exceeds `bytes.len()`. Nothing is read in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wydigest::HashConfig;
    ///
    /// let frame = b"..abc..";
    /// let config = HashConfig::default().with_seed(2);
    /// assert_eq!(config.hash_range(frame, 2, 3).unwrap(), config.hash(b"abc"));
    /// assert!(config.hash_range(frame, 5, 3).is_err());
    /// ```
    pub fn hash_range(&self, bytes: &[u8], offset: usize, len: usize) -> Result<u64> {
        let view = ByteView::from_slice(bytes, offset, len)?;
        digest(&view, self.seed, &self.secret)
    }

    /// Digest of any view, whatever its storage or declared order.
    #[inline]
    #[must_use]
    pub fn hash_view(&self, view: &ByteView<'_>) -> u64 {
        digest_total(view, self.seed, &self.secret)
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::DEFAULT {
            return f.write_str("HashConfig::DEFAULT");
        }
        write!(f, "HashConfig[seed={:#x}, secret=", self.seed)?;
        if self.secret == Secret::DEFAULT {
            f.write_str("Secret::DEFAULT")?;
        } else {
            write!(f, "{}", self.secret)?;
        }
        f.write_str("]")
    }
}
