//! `std::hash` integration and the [`Fingerprint`] abstraction.
//!
//! [`WyHasher`] buffers everything written to it and runs the digest once on
//! `finish()`. That is full materialization, not streaming: the buffer grows
//! with the input, so it suits map keys and small records, not unbounded data.
//!
//! Integer writes are encoded little-endian before buffering, so a key hashes
//! the same on every host.
//!
//! `str`'s `Hash` impl appends a `0xff` terminator after the UTF-8 bytes. Use
//! [`WyHasher::write_str`] when the result must equal [`HashConfig::hash`] of
//! the same text.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use wydigest::hash::hasher::WyBuildHasher;
//!
//! let mut map: HashMap<&str, u32, WyBuildHasher> = HashMap::with_hasher(WyBuildHasher::new());
//! map.insert("key", 42);
//! assert_eq!(map.get("key"), Some(&42));
//! ```

#![allow(clippy::module_name_repetitions)]

use super::config::HashConfig;
use crate::memory::ByteView;
use std::hash::{BuildHasher, Hasher};

/// Name reported by every wyhash-backed fingerprint source.
pub const ALGORITHM_NAME: &str = "wyhash";

/// A source of 64-bit fingerprints over bytes.
///
/// Lets callers (dedup indexes, content-addressed caches) abstract over how
/// the fingerprint is configured. Implementations must be deterministic for
/// the life of the value.
///
/// # Examples
///
/// ```
/// use wydigest::{Fingerprint, HashConfig};
///
/// fn dedup_key<F: Fingerprint>(source: &F, record: &[u8]) -> u64 {
///     source.fingerprint(record)
/// }
///
/// let config = HashConfig::default();
/// assert_eq!(dedup_key(&config, b"row"), dedup_key(&config, b"row"));
/// assert_eq!(config.name(), "wyhash");
/// ```
pub trait Fingerprint: Send + Sync {
    /// Fingerprint of a whole slice.
    fn fingerprint(&self, bytes: &[u8]) -> u64;

    /// Fingerprint of a view.
    ///
    /// The default copies the view out and fingerprints the copy.
    /// Implementations that can read views directly should override it.
    fn fingerprint_view(&self, view: &ByteView<'_>) -> u64 {
        self.fingerprint(&view.to_vec())
    }

    /// Algorithm name for logs and stored metadata.
    fn name(&self) -> &'static str;
}

impl Fingerprint for HashConfig {
    #[inline]
    fn fingerprint(&self, bytes: &[u8]) -> u64 {
        self.hash(bytes)
    }

    #[inline]
    fn fingerprint_view(&self, view: &ByteView<'_>) -> u64 {
        self.hash_view(view)
    }

    #[inline]
    fn name(&self) -> &'static str {
        ALGORITHM_NAME
    }
}

/// Buffering [`Hasher`] that finishes with the wyhash digest.
///
/// Not meant to be shared while in use; each `build_hasher` call gets a fresh one.
#[derive(Debug, Clone)]
pub struct WyHasher {
    config: HashConfig,
    buffer: Vec<u8>,
}

impl WyHasher {
    /// Fresh hasher with the given configuration.
    #[must_use]
    pub fn new(config: HashConfig) -> Self {
        Self {
            config,
            buffer: Vec::with_capacity(64),
        }
    }

    /// The configuration `finish()` hashes with.
    #[must_use]
    pub const fn config(&self) -> HashConfig {
        self.config
    }

    /// Bytes buffered so far.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Append the UTF-8 bytes of `s`, with no terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::Hasher;
    /// use wydigest::{HashConfig, WyHasher};
    ///
    /// let config = HashConfig::default().with_seed(2);
    /// let mut hasher = WyHasher::new(config);
    /// hasher.write_str("abc");
    /// assert_eq!(hasher.finish(), config.hash(b"abc"));
    /// ```
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Append the raw bytes of a view, whatever its storage or declared order.
    pub fn write_view(&mut self, view: &ByteView<'_>) {
        view.extend_into(&mut self.buffer);
    }

    /// Drop buffered bytes, keeping the configuration and the allocation.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Algorithm name, always `"wyhash"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        ALGORITHM_NAME
    }
}

impl Default for WyHasher {
    fn default() -> Self {
        Self::new(HashConfig::DEFAULT)
    }
}

impl Hasher for WyHasher {
    fn finish(&self) -> u64 {
        self.config.hash(&self.buffer)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn write_u8(&mut self, i: u8) {
        self.buffer.push(i);
    }

    fn write_u16(&mut self, i: u16) {
        self.write(&i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    fn write_u128(&mut self, i: u128) {
        self.write(&i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        // Widen so 32- and 64-bit hosts agree.
        self.write_u64(i as u64);
    }
}

/// [`BuildHasher`] for `HashMap`/`HashSet`, carrying a [`HashConfig`].
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use wydigest::hash::hasher::WyBuildHasher;
///
/// let mut seen = HashSet::with_hasher(WyBuildHasher::with_seed(7));
/// assert!(seen.insert(b"frame-1".to_vec()));
/// assert!(!seen.insert(b"frame-1".to_vec()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WyBuildHasher {
    config: HashConfig,
}

impl WyBuildHasher {
    /// Builder with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: HashConfig::DEFAULT,
        }
    }

    /// Builder with an explicit seed and the default secret.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self::with_config(HashConfig::DEFAULT.with_seed(seed))
    }

    /// Builder with a full configuration.
    #[must_use]
    pub const fn with_config(config: HashConfig) -> Self {
        Self { config }
    }
}

impl BuildHasher for WyBuildHasher {
    type Hasher = WyHasher;

    fn build_hasher(&self) -> Self::Hasher {
        WyHasher::new(self.config)
    }
}
