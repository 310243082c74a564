//! Error types for envelope parsing and construction.
//!
//! [`UnpadError`] covers every way a padded buffer can be rejected.
//! [`PadError`] covers the inverse operation. Both are plain values: they carry
//! no I/O state and are cheap to copy, so callers can match on them freely.

use thiserror::Error;

/// Reasons a padded buffer cannot be unpadded.
///
/// A failed unpad never modifies the buffer it was given.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UnpadError {
    /// No buffer was supplied.
    #[error("no buffer supplied")]
    NullInput,

    /// Fewer bytes than the length header itself.
    #[error("missing length field: have {have} of 4 header bytes")]
    MissingLengthField {
        /// Bytes available in the buffer.
        have: usize,
    },

    /// The header declares more payload than the buffer holds.
    ///
    /// Also reported when `declared + 4` is not representable, since no
    /// buffer could ever satisfy such a header.
    #[error("payload too short: header declares {declared} bytes, {available} available")]
    PayloadTooShort {
        /// Payload length read from the header.
        declared: u32,
        /// Bytes following the header.
        available: usize,
    },
}

/// Reasons a payload cannot be wrapped in an envelope.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PadError {
    /// Header plus payload do not fit in the requested envelope size.
    #[error("payload of {payload} bytes does not fit an envelope of {capacity} bytes")]
    PayloadTooLarge {
        /// Payload length in bytes.
        payload: usize,
        /// Requested total envelope length.
        capacity: usize,
    },

    /// The payload length cannot be expressed in the 32-bit header.
    #[error("payload length {len} exceeds the 32-bit length header")]
    LengthOverflow {
        /// Payload length in bytes.
        len: usize,
    },
}
