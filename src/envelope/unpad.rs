//! In-place and view-narrowing unpad adapters.

use bytes::{Buf, Bytes, BytesMut};

use super::extent::compute_extent;
use crate::error::UnpadError;

/// Buffers that can have an envelope stripped from them.
///
/// After a successful call the buffer holds exactly the payload. After a failed
/// call it is left as it was.
pub trait Unpad {
    /// Strip the length header and trailing padding from `self`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnpadError`] if `self` does not hold a valid envelope.
    fn unpad(&mut self) -> Result<(), UnpadError>;
}

impl Unpad for Vec<u8> {
    fn unpad(&mut self) -> Result<(), UnpadError> {
        let extent = compute_extent(self)?;
        self.copy_within(extent.range(), 0);
        self.truncate(extent.len());
        Ok(())
    }
}

impl Unpad for BytesMut {
    fn unpad(&mut self) -> Result<(), UnpadError> {
        let extent = compute_extent(self)?;
        self.truncate(extent.end());
        self.advance(extent.start());
        Ok(())
    }
}

impl<'a> Unpad for &'a [u8] {
    fn unpad(&mut self) -> Result<(), UnpadError> {
        let view: &'a [u8] = *self;
        let extent = compute_extent(view)?;
        *self = &view[extent.range()];
        Ok(())
    }
}

impl Unpad for Bytes {
    fn unpad(&mut self) -> Result<(), UnpadError> {
        let extent = compute_extent(self)?;
        *self = self.slice(extent.range());
        Ok(())
    }
}

/// Strip the envelope from an optionally supplied buffer.
///
/// This is the entry point for callers holding a buffer that may be absent;
/// a missing buffer is reported rather than treated as empty.
///
/// # Errors
///
/// Returns [`UnpadError::NullInput`] if `buffer` is `None`, otherwise any
/// error from [`Unpad::unpad`].
///
/// # Examples
///
/// ```
/// use private_cdn::{UnpadError, envelope::remove_padding};
///
/// let mut body = b"\x00\x00\x00\x02hi\xff\xff".to_vec();
/// remove_padding(Some(&mut body)).expect("valid envelope");
/// assert_eq!(body, b"hi");
///
/// assert_eq!(remove_padding::<Vec<u8>>(None), Err(UnpadError::NullInput));
/// ```
pub fn remove_padding<B>(buffer: Option<&mut B>) -> Result<(), UnpadError>
where
    B: Unpad + ?Sized,
{
    buffer.ok_or(UnpadError::NullInput)?.unpad()
}
