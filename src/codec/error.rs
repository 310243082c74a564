//! Error types for the body codec.
//!
//! [`CodecError`] wraps the envelope errors together with the codec's own
//! buffering limit and transport failures, and converts into [`io::Error`] so
//! it can flow through `tokio_util` framing.
//!
//! | Variant | `io::ErrorKind` |
//! |---------|-----------------|
//! | `Unpad` | `InvalidData` |
//! | `Oversized` | `InvalidData` |
//! | `Pad` | `InvalidInput` |
//! | `Io` | preserved |

use std::io;

use thiserror::Error;

use crate::error::{PadError, UnpadError};

/// Top-level codec error taxonomy.
///
/// # Examples
///
/// ```
/// use private_cdn::{UnpadError, codec::CodecError};
///
/// let err = CodecError::from(UnpadError::MissingLengthField { have: 2 });
/// assert_eq!(err.error_type(), "unpad");
///
/// let io_err: std::io::Error = err.into();
/// assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
/// ```
#[derive(Debug, Error)]
pub enum CodecError {
    /// The buffered body is not a valid envelope.
    #[error("malformed padded body: {0}")]
    Unpad(#[from] UnpadError),

    /// An outgoing payload could not be wrapped.
    #[error("cannot pad body: {0}")]
    Pad(#[from] PadError),

    /// The buffered body grew past the configured limit.
    #[error("padded body exceeds max length: {size} > {max}")]
    Oversized {
        /// Bytes buffered so far.
        size: usize,
        /// Configured maximum envelope length.
        max: usize,
    },

    /// Transport layer I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Returns the error category as a string for logging.
    ///
    /// One of: `"unpad"`, `"pad"`, `"oversized"`, or `"io"`.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Unpad(_) => "unpad",
            Self::Pad(_) => "pad",
            Self::Oversized { .. } => "oversized",
            Self::Io(_) => "io",
        }
    }

    /// Returns the envelope error, if this is one.
    #[must_use]
    pub fn as_unpad(&self) -> Option<&UnpadError> {
        match self {
            Self::Unpad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodecError> for io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => e,
            CodecError::Pad(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            CodecError::Unpad(_) | CodecError::Oversized { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
