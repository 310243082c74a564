//! Fixtures and drivers for testing `private_cdn` envelope handling.
//!
//! Fixtures build raw wire bytes directly rather than through
//! [`private_cdn::pad_to`], so they can express envelopes the encoder would
//! refuse to produce. Drivers push those bytes through the streaming codec
//! over an in-memory duplex stream.
//!
//! ```rust
//! use private_cdn::envelope::payload;
//! use private_cdn_testing::valid_envelope;
//!
//! let wire = valid_envelope(b"Hello", 3);
//! assert_eq!(payload(&wire), Ok(&b"Hello"[..]));
//! ```

pub mod drive;
pub mod fixtures;

pub use drive::{DEFAULT_CAPACITY, drive_padded_body, drive_padded_body_with_capacity};
pub use fixtures::{
    header_only,
    overflowing_header,
    patterned_padding_envelope,
    truncated_header,
    truncated_payload,
    valid_envelope,
};
