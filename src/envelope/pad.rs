//! Envelope construction.
//!
//! Choosing the envelope size is the caller's decision; these helpers only
//! check that the payload fits.

use bytes::{BufMut, BytesMut};

use crate::{
    byte_order::{LENGTH_HEADER_SIZE, write_network_u32},
    error::PadError,
};

/// Smallest envelope able to carry `payload_len` bytes, i.e. one with no padding.
///
/// # Errors
///
/// Returns [`PadError::LengthOverflow`] if `payload_len` does not fit the
/// 32-bit header.
pub fn min_envelope_len(payload_len: usize) -> Result<usize, PadError> {
    u32::try_from(payload_len)
        .ok()
        .and_then(|_| LENGTH_HEADER_SIZE.checked_add(payload_len))
        .ok_or(PadError::LengthOverflow { len: payload_len })
}

fn encode_header(
    payload_len: usize,
    total_len: usize,
) -> Result<[u8; LENGTH_HEADER_SIZE], PadError> {
    let declared =
        u32::try_from(payload_len).map_err(|_| PadError::LengthOverflow { len: payload_len })?;
    if min_envelope_len(payload_len)? > total_len {
        return Err(PadError::PayloadTooLarge {
            payload: payload_len,
            capacity: total_len,
        });
    }
    Ok(write_network_u32(declared))
}

/// Wrap `payload` in a zero-padded envelope of exactly `total_len` bytes.
///
/// # Errors
///
/// Returns [`PadError::PayloadTooLarge`] if header and payload exceed
/// `total_len`, or [`PadError::LengthOverflow`] if the payload length does not
/// fit the header.
///
/// # Examples
///
/// ```
/// use private_cdn::envelope::pad_to;
///
/// let padded = pad_to(b"Hello", 12).expect("payload fits");
/// assert_eq!(padded, b"\x00\x00\x00\x05Hello\x00\x00\x00");
/// ```
pub fn pad_to(payload: &[u8], total_len: usize) -> Result<Vec<u8>, PadError> {
    let header = encode_header(payload.len(), total_len)?;
    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    out.resize(total_len, 0);
    Ok(out)
}

/// Append a zero-padded envelope of `total_len` bytes carrying `payload` to `dst`.
///
/// `dst` is left untouched on failure.
///
/// # Errors
///
/// Returns the same errors as [`pad_to`].
pub fn pad_into(payload: &[u8], total_len: usize, dst: &mut BytesMut) -> Result<(), PadError> {
    let header = encode_header(payload.len(), total_len)?;
    dst.reserve(total_len);
    dst.put_slice(&header);
    dst.put_slice(payload);
    dst.put_bytes(0, total_len - LENGTH_HEADER_SIZE - payload.len());
    Ok(())
}
