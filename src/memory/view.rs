//! The [`ByteView`] sum type.
//!
//! Three storage variants, closed and matched exhaustively:
//!
//! | Variant    | Backing                         | Declared order      | Copies |
//! |------------|---------------------------------|---------------------|--------|
//! | `Native`   | borrowed `&[u8]`                | host order          | never  |
//! | `External` | shared [`Bytes`] handle         | owner-declared      | never  |
//! | `Reversed` | another view                    | opposite of source  | never  |
//!
//! Every read and slice is bounds-checked against the view's own length before
//! any byte is touched.

#![allow(clippy::module_name_repetitions)]

use super::external::ExternalBuffer;
use super::ByteOrder;
use crate::error::{check_range, Result};
use bytes::Bytes;

/// A bounded, byte-order-aware window over some bytes.
///
/// Cloning is cheap: a slice copy, a reference-count bump, or (for `Reversed`)
/// one small box.
///
/// # Examples
///
/// ```
/// use wydigest::memory::{ByteOrder, ByteView};
///
/// let data = b"0123456789abcdef";
/// let view = ByteView::new(data);
///
/// let tail = view.slice(8, 8).unwrap();
/// assert_eq!(tail.len(), 8);
/// assert_eq!(tail.get_u8(0).unwrap(), b'8');
///
/// // Reads never escape the slice.
/// assert!(tail.get_u64(1).is_err());
/// ```
#[derive(Debug, Clone)]
pub enum ByteView<'a> {
    /// Borrowed contiguous bytes, read in host order.
    Native(&'a [u8]),

    /// Shared bytes owned elsewhere, read in the order their owner declared.
    External {
        /// Snapshot of the owner's buffer.
        bytes: Bytes,
        /// Declared interpretation of multi-byte reads.
        order: ByteOrder,
    },

    /// Decorator that reports the opposite order of its source and
    /// byte-swaps every multi-byte read.
    Reversed(Box<ByteView<'a>>),
}

impl<'a> ByteView<'a> {
    /// View an entire slice in host order. Never copies.
    #[inline]
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self::Native(bytes)
    }

    /// View `len` bytes of `bytes` starting at `offset`, in host order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// `offset + len` exceeds `bytes.len()`.
    pub fn from_slice(bytes: &'a [u8], offset: usize, len: usize) -> Result<Self> {
        check_range(offset, len, bytes.len())?;
        Ok(Self::Native(&bytes[offset..offset + len]))
    }

    /// View an external buffer.
    ///
    /// Takes a handle on the buffer's current contents, length and order. A
    /// buffer that is later replaced or re-declared by its owner does not
    /// affect the returned view.
    #[must_use]
    pub fn from_external(buffer: &ExternalBuffer) -> ByteView<'static> {
        #[cfg(feature = "trace")]
        tracing::trace!(len = buffer.len(), order = ?buffer.order(), "ByteView::from_external");

        ByteView::External {
            bytes: buffer.as_bytes().clone(),
            order: buffer.order(),
        }
    }

    /// Number of bytes in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Native(bytes) => bytes.len(),
            Self::External { bytes, .. } => bytes.len(),
            Self::Reversed(source) => source.len(),
        }
    }

    /// `true` if the view holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How multi-byte reads are interpreted.
    #[inline]
    #[must_use]
    pub fn order(&self) -> ByteOrder {
        match self {
            Self::Native(_) => ByteOrder::NATIVE,
            Self::External { order, .. } => *order,
            Self::Reversed(source) => source.order().reverse(),
        }
    }

    /// Zero-copy sub-view of `len` bytes starting at `offset`.
    ///
    /// The result shares backing storage and declared order with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// `offset + len > self.len()`.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self> {
        check_range(offset, len, self.len())?;
        Ok(match self {
            Self::Native(bytes) => Self::Native(&bytes[offset..offset + len]),
            Self::External { bytes, order } => Self::External {
                bytes: bytes.slice(offset..offset + len),
                order: *order,
            },
            Self::Reversed(source) => Self::Reversed(Box::new(source.slice(offset, len)?)),
        })
    }

    /// Reinterpret the view in `target` order.
    ///
    /// Returns `self` untouched if it already reads in `target` order. A
    /// `Reversed` view asked for its source's order unwraps to the source, so
    /// reversing twice is the identity.
    #[must_use]
    pub fn with_order(self, target: ByteOrder) -> Self {
        if self.order() == target {
            return self;
        }
        match self {
            Self::Reversed(source) => *source,
            other => {
                #[cfg(feature = "trace")]
                tracing::trace!(len = other.len(), ?target, "ByteView: inserting order reversal");

                Self::Reversed(Box::new(other))
            }
        }
    }

    /// Read one byte. Single bytes have no order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// `offset >= self.len()`.
    #[inline]
    pub fn get_u8(&self, offset: usize) -> Result<u8> {
        self.load::<1>(offset).map(|[b]| b)
    }

    /// Read two bytes as a `u16` in this view's order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// the read would exceed `self.len()`.
    #[inline]
    pub fn get_u16(&self, offset: usize) -> Result<u16> {
        match self {
            Self::Reversed(source) => source.get_u16(offset).map(u16::swap_bytes),
            _ => Ok(self.order().decode_u16(self.load(offset)?)),
        }
    }

    /// Read four bytes as a `u32` in this view's order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// the read would exceed `self.len()`.
    #[inline]
    pub fn get_u32(&self, offset: usize) -> Result<u32> {
        match self {
            Self::Reversed(source) => source.get_u32(offset).map(u32::swap_bytes),
            _ => Ok(self.order().decode_u32(self.load(offset)?)),
        }
    }

    /// Read eight bytes as a `u64` in this view's order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// the read would exceed `self.len()`.
    #[inline]
    pub fn get_u64(&self, offset: usize) -> Result<u64> {
        match self {
            Self::Reversed(source) => source.get_u64(offset).map(u64::swap_bytes),
            _ => Ok(self.order().decode_u64(self.load(offset)?)),
        }
    }

    /// Copy `dest.len()` raw bytes starting at `offset` into `dest`.
    ///
    /// Raw bytes are the same through every order.
    ///
    /// # Errors
    ///
    /// Returns [`WyHashError::OutOfRange`](crate::WyHashError::OutOfRange) if
    /// the range would exceed `self.len()`; `dest` is untouched in that case.
    pub fn copy_to_slice(&self, offset: usize, dest: &mut [u8]) -> Result<()> {
        check_range(offset, dest.len(), self.len())?;
        let end = offset + dest.len();
        match self {
            Self::Native(bytes) => dest.copy_from_slice(&bytes[offset..end]),
            Self::External { bytes, .. } => dest.copy_from_slice(&bytes[offset..end]),
            Self::Reversed(source) => source.copy_to_slice(offset, dest)?,
        }
        Ok(())
    }

    /// Copy the whole view out as raw bytes.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            Self::Native(bytes) => bytes.to_vec(),
            Self::External { bytes, .. } => bytes.to_vec(),
            Self::Reversed(source) => source.to_vec(),
        }
    }

    /// Append the whole view's raw bytes to `out`.
    pub(crate) fn extend_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Native(bytes) => out.extend_from_slice(bytes),
            Self::External { bytes, .. } => out.extend_from_slice(bytes),
            Self::Reversed(source) => source.extend_into(out),
        }
    }

    /// Bounds-checked raw load of `N` bytes.
    #[inline(always)]
    fn load<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        self.copy_to_slice(offset, &mut out)?;
        Ok(out)
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl From<&ExternalBuffer> for ByteView<'static> {
    fn from(buffer: &ExternalBuffer) -> Self {
        ByteView::from_external(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DATA: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        0x10,
    ];

    fn all_variants(data: &[u8]) -> Vec<ByteView<'_>> {
        let external = ExternalBuffer::copy_from_slice(data, ByteOrder::NATIVE.reverse());
        vec![
            ByteView::new(data),
            ByteView::from_external(&external),
            ByteView::new(data).with_order(ByteOrder::NATIVE.reverse()),
            ByteView::from_external(&external).with_order(ByteOrder::NATIVE),
        ]
    }

    #[test]
    fn test_native_reports_host_order() {
        let view = ByteView::new(&DATA);
        assert_eq!(view.order(), ByteOrder::NATIVE);
        assert_eq!(view.len(), 16);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_from_slice_bounds() {
        let view = ByteView::from_slice(&DATA, 4, 8).unwrap();
        assert_eq!(view.len(), 8);
        assert_eq!(view.get_u8(0).unwrap(), 0x05);

        assert!(ByteView::from_slice(&DATA, 10, 7).unwrap_err().is_out_of_range());
        assert!(ByteView::from_slice(&DATA, usize::MAX, 2).is_err());
        assert!(ByteView::from_slice(&DATA, 16, 0).unwrap().is_empty());
    }

    #[test]
    fn test_reads_in_each_order() {
        let le = ByteView::new(&DATA).with_order(ByteOrder::Little);
        let be = ByteView::new(&DATA).with_order(ByteOrder::Big);

        assert_eq!(le.order(), ByteOrder::Little);
        assert_eq!(be.order(), ByteOrder::Big);

        assert_eq!(le.get_u16(0).unwrap(), 0x0201);
        assert_eq!(be.get_u16(0).unwrap(), 0x0102);
        assert_eq!(le.get_u32(4).unwrap(), 0x0807_0605);
        assert_eq!(be.get_u32(4).unwrap(), 0x0506_0708);
        assert_eq!(le.get_u64(8).unwrap(), 0x100f_0e0d_0c0b_0a09);
        assert_eq!(be.get_u64(8).unwrap(), 0x090a_0b0c_0d0e_0f10);
        assert_eq!(le.get_u8(15).unwrap(), be.get_u8(15).unwrap());
    }

    #[test]
    fn test_external_declared_order() {
        let buffer = ExternalBuffer::from_static(&DATA, ByteOrder::Big);
        let view = ByteView::from_external(&buffer);
        assert!(matches!(view, ByteView::External { .. }));
        assert_eq!(view.order(), ByteOrder::Big);
        assert_eq!(view.get_u32(0).unwrap(), 0x0102_0304);

        let le = view.with_order(ByteOrder::Little);
        assert!(matches!(le, ByteView::Reversed(_)));
        assert_eq!(le.get_u32(0).unwrap(), 0x0403_0201);
    }

    #[test]
    fn test_with_order_same_is_identity() {
        let view = ByteView::new(&DATA).with_order(ByteOrder::NATIVE);
        assert!(matches!(view, ByteView::Native(_)));
    }

    #[test]
    fn test_double_reversal_unwraps() {
        let native = ByteOrder::NATIVE;
        let view = ByteView::new(&DATA)
            .with_order(native.reverse())
            .with_order(native);
        assert!(matches!(view, ByteView::Native(_)));
        assert_eq!(view.get_u64(0).unwrap(), ByteView::new(&DATA).get_u64(0).unwrap());
    }

    #[test]
    fn test_reads_out_of_range() {
        for view in all_variants(&DATA) {
            assert!(view.get_u8(16).is_err());
            assert!(view.get_u16(15).is_err());
            assert!(view.get_u32(13).is_err());
            assert!(view.get_u64(9).is_err());
            assert!(view.get_u64(usize::MAX).is_err());

            assert!(view.get_u8(15).is_ok());
            assert!(view.get_u16(14).is_ok());
            assert!(view.get_u32(12).is_ok());
            assert!(view.get_u64(8).is_ok());
        }
    }

    #[test]
    fn test_slice_stays_within_parent() {
        for view in all_variants(&DATA) {
            let inner = view.slice(4, 8).unwrap();
            assert_eq!(inner.len(), 8);
            assert_eq!(inner.order(), view.order());
            assert_eq!(inner.get_u64(0).unwrap(), view.get_u64(4).unwrap());
            assert!(inner.get_u8(8).is_err());
            assert!(inner.slice(1, 8).is_err());
            assert!(view.slice(9, 8).is_err());
        }
    }

    #[test]
    fn test_slice_of_reversed_stays_reversed() {
        let view = ByteView::new(&DATA).with_order(ByteOrder::NATIVE.reverse());
        let inner = view.slice(2, 4).unwrap();
        assert!(matches!(inner, ByteView::Reversed(_)));
        assert_eq!(inner.order(), ByteOrder::NATIVE.reverse());
    }

    #[test]
    fn test_copy_to_slice_ignores_order() {
        for view in all_variants(&DATA) {
            let mut out = [0u8; 5];
            view.copy_to_slice(3, &mut out).unwrap();
            assert_eq!(out, [0x04, 0x05, 0x06, 0x07, 0x08]);
            assert_eq!(view.to_vec(), DATA.to_vec());
        }
    }

    #[test]
    fn test_extend_into_appends_raw_bytes() {
        for view in all_variants(&DATA) {
            let mut out = vec![0xee];
            view.slice(12, 4).unwrap().extend_into(&mut out);
            assert_eq!(out, [0xee, 0x0d, 0x0e, 0x0f, 0x10]);
        }
    }

    #[test]
    fn test_copy_to_slice_failure_leaves_dest() {
        let view = ByteView::new(&DATA);
        let mut out = [0xaa; 4];
        assert!(view.copy_to_slice(14, &mut out).is_err());
        assert_eq!(out, [0xaa; 4]);
    }

    #[test]
    fn test_empty_view() {
        let view = ByteView::new(&[]);
        assert!(view.is_empty());
        assert!(view.get_u8(0).is_err());
        assert!(view.slice(0, 0).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn big_and_little_see_same_bytes(data in proptest::collection::vec(any::<u8>(), 8..64), offset in 0usize..56) {
            prop_assume!(offset + 8 <= data.len());
            let le = ByteView::new(&data).with_order(ByteOrder::Little);
            let be = ByteView::new(&data).with_order(ByteOrder::Big);
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&data[offset..offset + 8]);

            prop_assert_eq!(le.get_u64(offset).unwrap(), u64::from_le_bytes(raw));
            prop_assert_eq!(be.get_u64(offset).unwrap(), u64::from_be_bytes(raw));
            prop_assert_eq!(le.get_u64(offset).unwrap(), be.get_u64(offset).unwrap().swap_bytes());
        }

        #[test]
        fn double_reversal_reads_identically(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let view = ByteView::new(&data);
            let round = view.clone().with_order(ByteOrder::Big).with_order(ByteOrder::Little)
                .with_order(view.order());
            prop_assert_eq!(round.order(), view.order());
            for offset in 0..data.len().saturating_sub(7) {
                prop_assert_eq!(round.get_u64(offset).unwrap(), view.get_u64(offset).unwrap());
            }
            for offset in 0..data.len().saturating_sub(3) {
                prop_assert_eq!(round.get_u32(offset).unwrap(), view.get_u32(offset).unwrap());
            }
        }
    }
}
