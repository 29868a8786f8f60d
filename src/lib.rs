//! wydigest: byte-order independent wyhash fingerprints.
//!
//! wydigest computes the 64-bit [wyhash](https://github.com/wangyi-fudan/wyhash)
//! digest (final version 4) of a byte sequence, keyed by a 64-bit seed and a
//! four-lane [`Secret`]. The result depends only on the bytes, never on the host's
//! byte order or on how the bytes are stored.
//!
//! # Quick Start
//!
//! ```
//! use wydigest::HashConfig;
//!
//! let config = HashConfig::default().with_seed(3);
//! assert_eq!(config.hash(b"message digest"), 0x8619_1240_89a3_a16b);
//! ```
//!
//! # Storage Independence
//!
//! The digest reads through a [`ByteView`], a bounded window that is exactly one of:
//!
//! - a borrowed slice (`Native`), read in host order without copying;
//! - a shared [`ExternalBuffer`] (`External`), read in whatever order its owner declared;
//! - an order-reversing decorator (`Reversed`) over either of the above.
//!
//! ```
//! use wydigest::{ByteOrder, ByteView, ExternalBuffer, HashConfig};
//!
//! let bytes = b"abcdefghijklmnopqrstuvwxyz";
//! let config = HashConfig::default().with_seed(4);
//!
//! let borrowed = ByteView::new(bytes);
//! let foreign = ExternalBuffer::copy_from_slice(bytes, ByteOrder::Big);
//!
//! assert_eq!(config.hash_view(&borrowed), config.hash_view(&foreign.view()));
//! assert_eq!(config.hash_view(&borrowed), 0x7a43_afb6_1d7f_5f40);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Secret`], [`HashConfig`] and [`ByteOrder`]
//! - `trace` - `tracing` events on digest entry and byte-order normalization
//!
//! # Non-goals
//!
//! wyhash is not a cryptographic hash. The secret raises the cost of
//! hash-flooding, nothing more.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types and result aliases
pub mod error;

/// The digest, its arithmetic and configuration
pub mod hash;

/// Byte views over borrowed and shared storage
pub mod memory;

pub use error::{Result, WyHashError};
pub use hash::{
    wyhash, wyhash_with_secret, Fingerprint, HashConfig, Secret, WyBuildHasher, WyHasher,
};
pub use memory::{ByteOrder, ByteView, ExternalBuffer};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use wydigest::prelude::*;
///
/// let config = HashConfig::default();
/// assert_eq!(config.fingerprint(b""), 0x0409_638e_e2bd_e459);
/// ```
pub mod prelude {
    pub use crate::error::{Result, WyHashError};
    pub use crate::hash::{Fingerprint, HashConfig, Secret, WyBuildHasher, WyHasher};
    pub use crate::memory::{ByteOrder, ByteView, ExternalBuffer};
}
