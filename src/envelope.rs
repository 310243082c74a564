//! Length-prefixed padding envelopes.
//!
//! A padded response body is laid out as
//!
//! ```text
//! [declared_length: u32 BE][payload: declared_length bytes][padding: *]
//! ```
//!
//! so that every body in a size bucket occupies the same number of bytes on
//! the wire. This module validates that layout and strips the header and
//! padding again.
//!
//! All unpad paths share [`compute_extent`]; the [`Unpad`] implementations
//! only differ in how they narrow their buffer:
//!
//! - `Vec<u8>` and [`BytesMut`](bytes::BytesMut) are shrunk in place.
//! - `&[u8]` and [`Bytes`](bytes::Bytes) are narrowed to a sub-view of the same storage.
//!
//! A rejected buffer is never modified.
//!
//! ```
//! use private_cdn::envelope::{Unpad, pad_to};
//!
//! let padded = pad_to(b"Hello", 12).expect("payload fits");
//! let mut view: &[u8] = &padded;
//! view.unpad().expect("valid envelope");
//! assert_eq!(view, b"Hello");
//! ```

mod extent;
mod pad;
mod unpad;

pub use extent::{PayloadExtent, compute_extent, padding_len, payload};
pub use pad::{min_envelope_len, pad_into, pad_to};
pub use unpad::{Unpad, remove_padding};

pub use crate::byte_order::LENGTH_HEADER_SIZE;
