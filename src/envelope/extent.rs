//! Validation of the envelope header against the buffer it prefixes.

use std::ops::Range;

use crate::{
    byte_order::{LENGTH_HEADER_SIZE, read_length_header},
    error::UnpadError,
};

/// Location of the payload inside a padded buffer.
///
/// An extent is only produced for a buffer that contains it, so
/// [`range`](Self::range) can index that buffer directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadExtent {
    start: usize,
    len: usize,
}

impl PayloadExtent {
    /// Offset of the first payload byte. Always [`LENGTH_HEADER_SIZE`].
    #[must_use]
    pub const fn start(&self) -> usize { self.start }

    /// Payload length as declared by the header.
    #[must_use]
    pub const fn len(&self) -> usize { self.len }

    /// Returns true if the envelope carries an empty payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Offset one past the last payload byte; padding starts here.
    #[must_use]
    pub const fn end(&self) -> usize { self.start + self.len }

    /// Byte range of the payload within the padded buffer.
    #[must_use]
    pub const fn range(&self) -> Range<usize> { self.start..self.end() }
}

/// Validate the envelope in `src` and locate its payload.
///
/// Only the header is read; payload and padding bytes are never inspected.
///
/// # Errors
///
/// Returns [`UnpadError::MissingLengthField`] if `src` is shorter than the
/// header and [`UnpadError::PayloadTooShort`] if the declared length does not
/// fit in the bytes that follow it.
///
/// # Examples
///
/// ```
/// use private_cdn::envelope::compute_extent;
///
/// let extent = compute_extent(b"\x00\x00\x00\x05Hello\x00\x00\x00").expect("valid envelope");
/// assert_eq!(extent.range(), 4..9);
/// ```
pub fn compute_extent(src: &[u8]) -> Result<PayloadExtent, UnpadError> {
    locate(src).inspect_err(|err| {
        tracing::debug!(error = %err, buffer_len = src.len(), "rejected padded buffer");
    })
}

fn locate(src: &[u8]) -> Result<PayloadExtent, UnpadError> {
    let Some(declared) = read_length_header(src) else {
        return Err(UnpadError::MissingLengthField { have: src.len() });
    };

    let available = src.len() - LENGTH_HEADER_SIZE;
    let too_short = UnpadError::PayloadTooShort {
        declared,
        available,
    };

    // `declared` is attacker-controlled; neither step may wrap.
    let len = usize::try_from(declared).map_err(|_| too_short)?;
    let required = LENGTH_HEADER_SIZE.checked_add(len).ok_or(too_short)?;
    if src.len() < required {
        return Err(too_short);
    }

    Ok(PayloadExtent {
        start: LENGTH_HEADER_SIZE,
        len,
    })
}

/// Borrow the payload of the envelope in `src` without copying.
///
/// # Errors
///
/// Returns the same errors as [`compute_extent`].
pub fn payload(src: &[u8]) -> Result<&[u8], UnpadError> {
    let extent = compute_extent(src)?;
    Ok(&src[extent.range()])
}

/// Number of padding bytes trailing the payload in `src`.
///
/// # Errors
///
/// Returns the same errors as [`compute_extent`].
pub fn padding_len(src: &[u8]) -> Result<usize, UnpadError> {
    let extent = compute_extent(src)?;
    Ok(src.len() - extent.end())
}
