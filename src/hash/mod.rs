//! The wyhash digest and its building blocks.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── wide.rs      - 64×64 → 128-bit unsigned multiply
//! ├── mixer.rs     - mix(a, b): multiply and fold the halves
//! ├── secret.rs    - Secret: the four mixer lanes
//! ├── config.rs    - HashConfig: seed + secret, public digest API
//! ├── wyhash.rs    - the digest itself
//! ├── hasher.rs    - std::hash integration and the Fingerprint trait
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use wydigest::hash::HashConfig;
//!
//! let config = HashConfig::default();
//! let fingerprint = config.hash(b"hello");
//! assert_eq!(fingerprint, config.hash(b"hello"));
//! ```
//!
//! # Choosing an Entry Point
//!
//! | Entry point                    | Input                       | Fallible |
//! |--------------------------------|-----------------------------|----------|
//! | [`wyhash`]                     | `&[u8]`, seed               | no       |
//! | [`HashConfig::hash`]           | `&[u8]`                     | no       |
//! | [`HashConfig::hash_range`]     | `&[u8]`, offset, length     | yes      |
//! | [`HashConfig::hash_view`]      | any [`ByteView`](crate::memory::ByteView) | no |
//! | [`WyBuildHasher`]              | anything `Hash`             | no       |

pub mod config;
pub mod hasher;
pub mod mixer;
pub mod secret;
pub mod wide;
pub mod wyhash;

pub use config::HashConfig;
pub use hasher::{Fingerprint, WyBuildHasher, WyHasher};
pub use mixer::mix;
pub use secret::Secret;
pub use wide::{full_multiply, WideProduct};
pub use wyhash::{wyhash, wyhash_with_secret};
