//! Byte-order-aware, zero-copy access to bounded byte ranges.
//!
//! The digest never touches a `&[u8]` directly. It reads fixed-width integers
//! through a [`ByteView`], which hides where the bytes live and which order
//! they are declared in.
//!
//! # Module Structure
//!
//! ```text
//! memory/
//! ├── view.rs      - ByteView: Native / External / Reversed variants
//! ├── external.rs  - ExternalBuffer: shared, possibly foreign-order storage
//! └── mod.rs       - ByteOrder and re-exports
//! ```
//!
//! # Byte Order
//!
//! A view declares how its multi-byte reads are interpreted. Borrowed slices
//! always declare the host's order, because that is how the bytes physically
//! sit in memory. External buffers declare whatever their owner says. Asking a
//! view for the other order wraps it in a decorator that byte-swaps each
//! multi-byte read; asking again unwraps it.
//!
//! ```
//! use wydigest::memory::{ByteOrder, ByteView};
//!
//! let bytes = [0x01u8, 0x02, 0x03, 0x04];
//! let view = ByteView::new(&bytes);
//!
//! let le = view.clone().with_order(ByteOrder::Little);
//! let be = view.with_order(ByteOrder::Big);
//! assert_eq!(le.get_u32(0).unwrap(), 0x0403_0201);
//! assert_eq!(be.get_u32(0).unwrap(), 0x0102_0304);
//! ```

pub mod external;
pub mod view;

pub use external::ExternalBuffer;
pub use view::ByteView;

/// Interpretation of multi-byte integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// The order the host stores integers in.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// The order the host stores integers in.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// The opposite order.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    /// Whether this is the host's order.
    #[inline]
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }

    #[inline(always)]
    pub(crate) const fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    #[inline(always)]
    pub(crate) const fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    #[inline(always)]
    pub(crate) const fn decode_u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::Little => u64::from_le_bytes(bytes),
            Self::Big => u64::from_be_bytes(bytes),
        }
    }
}
