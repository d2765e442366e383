use serde::{de, ser};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while transcoding or transferring legacy mesh data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A custom error message from serde
    #[error("{0}")]
    Message(String),

    /// Attempted to read past the end of the input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A string contained non-UTF-8 bytes
    #[error("string contains invalid bytes")]
    InvalidString,

    /// The boolean encoding was neither 0 nor 1
    #[error("invalid boolean encoding: {0} (must be 0 or 1)")]
    InvalidBool(u32),

    /// Data exceeded the declared maximum length
    #[error("length {got} exceeds maximum {max}")]
    LengthOverflow { max: u32, got: u64 },

    /// The legacy mesh transcoder does not carry this serde data model type
    #[error("XDR mesh data does not support type: {0}")]
    Unsupported(&'static str),

    /// An I/O error occurred on an already open stream
    #[error("I/O error: {0}")]
    Io(String),

    /// The file could not be opened in the requested direction
    #[error("accessing file {path} failed: {reason}")]
    FileAccess { path: String, reason: String },

    /// The header tag names no known originating software
    #[error("no originating software can be determined for header string '{0}'")]
    UnrecognizedHeader(String),

    /// A dialect code or name outside DEAL/MGF/LIBM
    #[error("unknown originating format: {0}")]
    UnknownDialect(String),

    /// A text record could not be read
    #[error("text stream not readable at record {record}: {reason}")]
    StreamState { record: usize, reason: String },

    /// Unknown access mode, or a transfer on a closed handle
    #[error("invalid file access mode: {0}")]
    InvalidMode(String),

    /// The caller's buffer is shorter than `numvar * size`
    #[error("data block needs {need} elements but the buffer holds {got}")]
    BufferTooSmall { need: usize, got: usize },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(e.to_string())
        }
    }
}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
