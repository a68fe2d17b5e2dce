//! Error types for LZEVIL codec operations.
//!
//! The codec distinguishes three failure classes on corrupt or truncated
//! input, plus pass-through I/O errors from the underlying source or sink.
//! Misuse of the API (out-of-range bit counts, invalid table definitions,
//! oversized declared lengths) is a programmer error and panics instead of
//! returning one of these variants.

use std::io;
use thiserror::Error;

/// The main error type for LZEVIL operations.
#[derive(Debug, Error)]
pub enum LzevilError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The compressed stream is malformed: no Huffman symbol matched within
    /// the maximum code length, or the header declared a negative size.
    #[error("invalid data")]
    InvalidData,

    /// The source ended while the decoder still needed bytes to complete a
    /// code or a literal.
    #[error("unexpected end of stream")]
    UnexpectedEof,
}

/// Result type alias for LZEVIL operations.
pub type Result<T> = std::result::Result<T, LzevilError>;

impl From<LzevilError> for io::Error {
    /// Map onto an `io::Error` for the `std::io::Read`/`Write` adapters,
    /// unwrapping pass-through I/O errors and keeping the codec error as the
    /// payload otherwise.
    fn from(err: LzevilError) -> Self {
        match err {
            LzevilError::Io(e) => e,
            LzevilError::InvalidData => {
                io::Error::new(io::ErrorKind::InvalidData, LzevilError::InvalidData)
            }
            LzevilError::UnexpectedEof => {
                io::Error::new(io::ErrorKind::UnexpectedEof, LzevilError::UnexpectedEof)
            }
        }
    }
}

/// Terminal condition latched by a bit reader or a codec handle.
///
/// Both the encoder and the decoder latch their first failure and report it
/// on every subsequent call. `io::Error` is not `Clone`, so the latch stores
/// this `Copy` kind and rebuilds an equivalent [`LzevilError`] on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Clean end of the underlying stream, hit before any byte of a refill
    /// was consumed.
    Eof,
    /// The stream ended partway through a multi-byte refill.
    UnexpectedEof,
    /// No symbol matched within the maximum code length.
    InvalidData,
    /// The underlying reader or writer failed.
    Io(io::ErrorKind),
}

impl Fault {
    /// Rebuild the error this fault was latched from.
    ///
    /// `Eof` is the normal loop terminator rather than a failure; callers
    /// handle it before reaching for an error, so it maps to the closest
    /// failure kind here only for totality.
    pub fn into_error(self) -> LzevilError {
        match self {
            Fault::Eof | Fault::UnexpectedEof => LzevilError::UnexpectedEof,
            Fault::InvalidData => LzevilError::InvalidData,
            Fault::Io(kind) => LzevilError::Io(kind.into()),
        }
    }

    /// Capture the latchable kind of an error.
    pub fn of(err: &LzevilError) -> Self {
        match err {
            LzevilError::Io(e) => Fault::Io(e.kind()),
            LzevilError::InvalidData => Fault::InvalidData,
            LzevilError::UnexpectedEof => Fault::UnexpectedEof,
        }
    }
}

impl From<Fault> for LzevilError {
    fn from(fault: Fault) -> Self {
        fault.into_error()
    }
}
