//! Streaming codec for padded response bodies.
//!
//! A padded body has no terminator: the envelope header says how much of it is
//! payload, but the padding runs to the end of the stream. [`PaddedBodyCodec`]
//! therefore buffers the body as it arrives and only unpads it once the
//! stream ends, via [`Decoder::decode_eof`]. Buffering is bounded by
//! [`PaddingConfig::max_envelope_length`].
//!
//! ```
//! use futures::StreamExt;
//! use private_cdn::codec::PaddedBodyCodec;
//! use tokio_util::codec::FramedRead;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> std::io::Result<()> {
//! let body: &[u8] = b"\x00\x00\x00\x05Hello\x00\x00\x00";
//! let mut frames = FramedRead::new(body, PaddedBodyCodec::default());
//! let payload = frames.next().await.expect("one body")?;
//! assert_eq!(&payload[..], b"Hello");
//! # Ok(())
//! # }
//! ```

use std::io;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::codec::{Decoder, Encoder, FramedRead};

use crate::{
    byte_order::{LENGTH_HEADER_SIZE, read_length_header},
    config::PaddingConfig,
    envelope::{Unpad, min_envelope_len, pad_into, padding_len},
    error::UnpadError,
};

pub mod error;

pub use error::CodecError;

/// Decoder and encoder for a single padded body per stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaddedBodyCodec {
    config: PaddingConfig,
}

impl PaddedBodyCodec {
    /// Construct a codec using `config`.
    #[must_use]
    pub fn new(config: PaddingConfig) -> Self { Self { config } }

    /// Reject bodies that cannot fit the configured limit.
    ///
    /// Once the header is available, a declared payload larger than the limit
    /// is rejected straight away instead of after buffering up to the limit.
    fn check_limit(&self, src: &BytesMut) -> Result<(), CodecError> {
        let max = self.config.max_envelope_length();
        if src.len() > max {
            return Err(CodecError::Oversized {
                size: src.len(),
                max,
            });
        }

        if let Some(declared) = read_length_header(src) {
            let required = usize::try_from(declared)
                .ok()
                .and_then(|len| LENGTH_HEADER_SIZE.checked_add(len))
                .unwrap_or(usize::MAX);
            if required > max {
                return Err(CodecError::Oversized {
                    size: required,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl Decoder for PaddedBodyCodec {
    type Item = Bytes;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // Padding runs to end of stream, so a body is never complete before EOF.
        self.check_limit(src)?;
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        self.check_limit(src)?;

        let envelope_len = src.len();
        let padding = padding_len(src).map_err(CodecError::from)?;
        src.unpad().map_err(CodecError::from)?;
        tracing::debug!(
            envelope_len,
            payload_len = src.len(),
            padding_len = padding,
            "unpadded response body"
        );
        Ok(Some(src.split().freeze()))
    }
}

impl Encoder<Bytes> for PaddedBodyCodec {
    type Error = io::Error;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let total = match self.config.bucket_size() {
            Some(bucket) => bucket,
            None => min_envelope_len(item.len()).map_err(CodecError::from)?,
        };
        let max = self.config.max_envelope_length();
        if total > max {
            return Err(CodecError::Oversized { size: total, max }.into());
        }
        pad_into(&item, total, dst).map_err(CodecError::from)?;
        Ok(())
    }
}

/// Read one padded body from `reader` and return its payload.
///
/// # Errors
///
/// Returns an [`io::Error`] if reading fails, the body exceeds the configured
/// limit, or the body is not a valid envelope. Envelope errors, including an
/// empty stream, use [`io::ErrorKind::InvalidData`] and wrap a [`CodecError`].
pub async fn read_padded_body<R>(reader: R, config: PaddingConfig) -> io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let mut frames = FramedRead::new(reader, PaddedBodyCodec::new(config));
    match frames.next().await {
        Some(body) => body,
        None => Err(CodecError::from(UnpadError::MissingLengthField { have: 0 }).into()),
    }
}
