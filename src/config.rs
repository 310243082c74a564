//! Configuration for streaming envelope decoding and encoding.
//!
//! [`PaddingConfig`] derives [`serde::Deserialize`] so it can be embedded in an
//! application's own configuration file. Missing fields take their defaults.

use serde::Deserialize;

use crate::byte_order::LENGTH_HEADER_SIZE;

/// Largest envelope the body codec will buffer (64 MiB).
///
/// Limits passed to [`PaddingConfig::new`] are clamped to at most this value
/// to keep buffering bounded regardless of configuration.
pub const MAX_ENVELOPE_LENGTH: usize = 64 * 1024 * 1024;

/// Default envelope limit (16 MiB).
pub const DEFAULT_MAX_ENVELOPE_LENGTH: usize = 16 * 1024 * 1024;

pub(crate) fn clamp_envelope_length(value: usize) -> usize {
    value.clamp(LENGTH_HEADER_SIZE, MAX_ENVELOPE_LENGTH)
}

/// Limits and sizing applied by [`PaddedBodyCodec`](crate::codec::PaddedBodyCodec).
///
/// The limit is clamped whenever a value is built, including by
/// deserialisation, so equality always compares effective limits.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(from = "RawPaddingConfig")]
pub struct PaddingConfig {
    /// Largest padded body accepted, header and padding included.
    max_envelope_length: usize,
    /// Envelope size used when encoding. `None` encodes without padding.
    bucket_size: Option<usize>,
}

impl PaddingConfig {
    /// Construct a configuration with the given envelope limit.
    ///
    /// The limit is clamped to `LENGTH_HEADER_SIZE..=MAX_ENVELOPE_LENGTH`.
    #[must_use]
    pub fn new(max_envelope_length: usize) -> Self {
        Self {
            max_envelope_length: clamp_envelope_length(max_envelope_length),
            bucket_size: None,
        }
    }

    /// Set the envelope size used when encoding.
    #[must_use]
    pub fn with_bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = Some(bucket_size);
        self
    }

    /// Largest padded body accepted, after clamping.
    #[must_use]
    pub fn max_envelope_length(&self) -> usize { self.max_envelope_length }

    /// Envelope size used when encoding, if any.
    #[must_use]
    pub fn bucket_size(&self) -> Option<usize> { self.bucket_size }
}

impl Default for PaddingConfig {
    fn default() -> Self { Self::new(DEFAULT_MAX_ENVELOPE_LENGTH) }
}

/// Wire form of [`PaddingConfig`] before the limit is clamped.
#[derive(Deserialize)]
#[serde(default)]
struct RawPaddingConfig {
    max_envelope_length: usize,
    bucket_size: Option<usize>,
}

impl Default for RawPaddingConfig {
    fn default() -> Self {
        Self {
            max_envelope_length: DEFAULT_MAX_ENVELOPE_LENGTH,
            bucket_size: None,
        }
    }
}

impl From<RawPaddingConfig> for PaddingConfig {
    fn from(raw: RawPaddingConfig) -> Self {
        Self {
            max_envelope_length: clamp_envelope_length(raw.max_envelope_length),
            bucket_size: raw.bucket_size,
        }
    }
}
