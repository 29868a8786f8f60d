//! Caller-owned buffers that may declare a foreign byte order.
//!
//! [`ExternalBuffer`] is the boundary type for bytes that did not come from a
//! plain slice: network frames, shared caches, data written by a big-endian
//! producer. It pairs a reference-counted [`Bytes`] handle with the order the
//! owner says multi-byte values are stored in.
//!
//! `Bytes` is immutable once frozen, so cloning the handle is a consistent
//! snapshot of bounds and contents. Mutable sources (`BytesMut`) offer no such
//! guarantee and are copied by [`ExternalBuffer::snapshot`].

use super::{ByteOrder, ByteView};
use bytes::{Bytes, BytesMut};

/// Shared bytes plus their declared byte order.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use wydigest::memory::{ByteOrder, ExternalBuffer};
/// use wydigest::HashConfig;
///
/// let payload = b"message digest";
/// let foreign = ExternalBuffer::new(Bytes::from_static(payload), ByteOrder::Big);
///
/// // The digest normalizes order, so storage does not change the result.
/// let config = HashConfig::default().with_seed(3);
/// assert_eq!(config.hash_view(&foreign.view()), config.hash(payload));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalBuffer {
    data: Bytes,
    order: ByteOrder,
}

impl ExternalBuffer {
    /// Wrap an existing handle with its declared order.
    #[must_use]
    pub const fn new(data: Bytes, order: ByteOrder) -> Self {
        Self { data, order }
    }

    /// Wrap static bytes without copying.
    #[must_use]
    pub const fn from_static(data: &'static [u8], order: ByteOrder) -> Self {
        Self::new(Bytes::from_static(data), order)
    }

    /// Copy `data` into a new shared buffer.
    #[must_use]
    pub fn copy_from_slice(data: &[u8], order: ByteOrder) -> Self {
        Self::new(Bytes::copy_from_slice(data), order)
    }

    /// Copy the current contents of a mutable buffer.
    ///
    /// The owner may keep writing to `source`; the snapshot never sees it.
    #[must_use]
    pub fn snapshot(source: &BytesMut, order: ByteOrder) -> Self {
        #[cfg(feature = "trace")]
        tracing::debug!(len = source.len(), ?order, "ExternalBuffer::snapshot");

        Self::copy_from_slice(source, order)
    }

    /// Number of bytes in the buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the buffer holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Declared order of multi-byte values.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// The shared handle.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &Bytes {
        &self.data
    }

    /// Give up the wrapper and return the handle.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// A view over the whole buffer; same as [`ByteView::from_external`].
    #[must_use]
    pub fn view(&self) -> ByteView<'static> {
        ByteView::from_external(self)
    }
}

impl From<Vec<u8>> for ExternalBuffer {
    /// Takes ownership of `data` as host-order bytes.
    fn from(data: Vec<u8>) -> Self {
        Self::new(Bytes::from(data), ByteOrder::NATIVE)
    }
}

impl From<Bytes> for ExternalBuffer {
    /// Treats `data` as host-order bytes.
    fn from(data: Bytes) -> Self {
        Self::new(data, ByteOrder::NATIVE)
    }
}
