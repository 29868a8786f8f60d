//! Error types for wydigest operations.
//!
//! Every error in this crate is a caller programming error: an offset or length
//! that does not fit the backing storage, or a secret built from the wrong
//! number of lanes. The digest itself performs no I/O, so there is no transient
//! error class and nothing is ever retried.
//!
//! # Error Propagation
//!
//! ```
//! use wydigest::{HashConfig, Result};
//!
//! fn hash_header(packet: &[u8]) -> Result<u64> {
//!     let digest = HashConfig::default().hash_range(packet, 0, 16)?;
//!     Ok(digest)
//! }
//! # assert!(hash_header(&[0u8; 32]).is_ok());
//! # assert!(hash_header(&[0u8; 8]).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for wydigest operations.
///
/// All fallible operations return [`Result<T>`] where the error type is [`WyHashError`].
pub type Result<T> = std::result::Result<T, WyHashError>;

/// Errors that can occur while building views, secrets or digests.
///
/// `Clone` + `PartialEq` so tests can compare errors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WyHashError {
    /// A read, slice or range does not fit inside the backing storage.
    ///
    /// Detected before any memory is touched.
    OutOfRange {
        /// Start of the rejected access.
        offset: usize,
        /// Number of bytes the access needed.
        size: usize,
        /// Number of bytes actually available.
        length: usize,
    },

    /// A configuration value is malformed.
    ///
    /// Raised when a [`Secret`](crate::Secret) is built from a collection that
    /// does not hold exactly four lanes.
    InvalidConfiguration {
        /// Human-readable description of what's invalid.
        message: String,
    },
}

impl fmt::Display for WyHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                size,
                length,
            } => {
                write!(
                    f,
                    "Range [{}..{}+{}) out of bounds for length {}",
                    offset, offset, size, length
                )
            }
            Self::InvalidConfiguration { message } => {
                write!(f, "Invalid hash configuration: {}.", message)
            }
        }
    }
}

impl std::error::Error for WyHashError {}

impl WyHashError {
    /// Create an `OutOfRange` error.
    #[must_use]
    pub fn out_of_range(offset: usize, size: usize, length: usize) -> Self {
        Self::OutOfRange {
            offset,
            size,
            length,
        }
    }

    /// Create an `InvalidConfiguration` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use wydigest::WyHashError;
    ///
    /// let err = WyHashError::invalid_configuration(format!("expected 4 lanes, got {}", 3));
    /// assert!(err.to_string().contains("3"));
    /// ```
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Returns `true` for bounds violations.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Check that `size` bytes starting at `offset` fit inside `length`.
///
/// Overflowing `offset + size` counts as out of range.
#[inline]
pub(crate) fn check_range(offset: usize, size: usize, length: usize) -> Result<()> {
    match offset.checked_add(size) {
        Some(end) if end <= length => Ok(()),
        _ => Err(WyHashError::out_of_range(offset, size, length)),
    }
}
