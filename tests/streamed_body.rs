//! Integration tests reading padded bodies through the streaming codec.

use std::io;

use private_cdn::{CodecError, PaddingConfig, UnpadError};
use private_cdn_testing::{
    drive_padded_body,
    drive_padded_body_with_capacity,
    overflowing_header,
    truncated_payload,
    valid_envelope,
};
use rstest::rstest;

fn chunked(wire: &[u8], size: usize) -> Vec<Vec<u8>> {
    wire.chunks(size).map(<[u8]>::to_vec).collect()
}

fn codec_error(err: &io::Error) -> &CodecError {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<CodecError>())
        .expect("io error should wrap a codec error")
}

#[rstest]
#[case::single_chunk(usize::MAX)]
#[case::bytes(1)]
#[case::odd(3)]
#[case::larger_than_header(7)]
#[tokio::test]
async fn chunked_bodies_unpad(#[case] chunk_size: usize) {
    let wire = valid_envelope(b"streamed payload", 47);
    let payload = drive_padded_body(chunked(&wire, chunk_size), PaddingConfig::default())
        .await
        .expect("valid envelope");
    assert_eq!(&payload[..], b"streamed payload");
}

#[tokio::test]
async fn small_duplex_buffer_still_delivers_body() {
    let wire = valid_envelope(&[0x42; 300], 700);
    let payload =
        drive_padded_body_with_capacity(chunked(&wire, 64), PaddingConfig::default(), 16)
            .await
            .expect("valid envelope");
    assert_eq!(payload.len(), 300);
    assert!(payload.iter().all(|&b| b == 0x42));
}

#[tokio::test]
async fn truncated_stream_is_invalid_data() {
    let wire = truncated_payload(b"Hello", 3);
    let err = drive_padded_body(chunked(&wire, 2), PaddingConfig::default())
        .await
        .expect_err("truncated body");
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(
        codec_error(&err).as_unpad(),
        Some(&UnpadError::PayloadTooShort {
            declared: 5,
            available: 2,
        })
    );
}

#[tokio::test]
async fn hostile_header_is_rejected_before_buffering() {
    let wire = overflowing_header(0, 8192);
    let err = drive_padded_body(chunked(&wire, 512), PaddingConfig::new(1024))
        .await
        .expect_err("hostile header");
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(codec_error(&err).error_type(), "oversized");
}

#[tokio::test]
async fn padding_past_limit_is_rejected() {
    let wire = valid_envelope(b"small", 2048);
    let err = drive_padded_body(chunked(&wire, 256), PaddingConfig::new(1024))
        .await
        .expect_err("body over limit");
    assert_eq!(codec_error(&err).error_type(), "oversized");
}
