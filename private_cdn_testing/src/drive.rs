//! Drive wire bytes through the streaming body codec.

use std::io;

use bytes::Bytes;
use private_cdn::{PaddingConfig, read_padded_body};
use tokio::io::AsyncWriteExt;

/// Default in-memory duplex buffer size for [`drive_padded_body`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// Write `chunks` into one end of a duplex stream and read a padded body from
/// the other.
///
/// Each chunk is written and flushed separately, so the codec sees the body
/// arrive in pieces.
///
/// # Errors
///
/// Returns any error from [`read_padded_body`] or from writing the chunks.
///
/// ```rust
/// use private_cdn::PaddingConfig;
/// use private_cdn_testing::{drive_padded_body, valid_envelope};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> std::io::Result<()> {
/// let wire = valid_envelope(b"Hello", 3);
/// let chunks = wire.chunks(2).map(<[u8]>::to_vec).collect();
/// let payload = drive_padded_body(chunks, PaddingConfig::default()).await?;
/// assert_eq!(&payload[..], b"Hello");
/// # Ok(())
/// # }
/// ```
pub async fn drive_padded_body(chunks: Vec<Vec<u8>>, config: PaddingConfig) -> io::Result<Bytes> {
    drive_padded_body_with_capacity(chunks, config, DEFAULT_CAPACITY).await
}

/// Variant of [`drive_padded_body`] with an explicit duplex buffer size.
///
/// # Errors
///
/// Returns any error from [`read_padded_body`] or from writing the chunks.
pub async fn drive_padded_body_with_capacity(
    chunks: Vec<Vec<u8>>,
    config: PaddingConfig,
    capacity: usize,
) -> io::Result<Bytes> {
    let (mut client, server) = tokio::io::duplex(capacity);

    let writer = async move {
        for chunk in &chunks {
            client.write_all(chunk).await?;
            client.flush().await?;
        }
        client.shutdown().await
    };
    let reader = read_padded_body(server, config);

    let (written, body) = tokio::join!(writer, reader);
    match body {
        // The reader may stop early on an oversized body, which breaks the pipe.
        Err(err) => Err(err),
        Ok(payload) => written.map(|()| payload),
    }
}
