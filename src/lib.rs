#![doc(html_root_url = "https://docs.rs/private_cdn/latest")]
//! Public API for the `private_cdn` library.
//!
//! Content fetched from a private CDN arrives wrapped in a fixed-size envelope:
//! a big-endian `u32` payload length, the payload, then padding up to the
//! bucket size. This crate validates those envelopes and strips them, either
//! in place on an owned buffer or by narrowing a borrowed view, and provides a
//! `tokio_util` codec for bodies that arrive as a stream.

pub mod byte_order;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;

pub use codec::{CodecError, PaddedBodyCodec, read_padded_body};
pub use config::PaddingConfig;
pub use envelope::{PayloadExtent, Unpad, compute_extent, pad_to, remove_padding};
pub use error::{PadError, UnpadError};
