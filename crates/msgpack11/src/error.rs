//! Error type shared by the accessors, the encoder and the decoder.

use msgpack11_buffers::BufferError;
use thiserror::Error;

use crate::Type;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// An accessor asked for a case the value does not hold.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: Type, actual: Type },

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key not found")]
    KeyNotFound,

    /// A string, binary, extension or container is longer than the wire
    /// format can express (`u32::MAX`).
    #[error("{what} length {len} exceeds the MessagePack limit")]
    LengthExceeded { what: &'static str, len: usize },

    /// A numeric cast would lose the value.
    #[error("number out of range for {target}")]
    OutOfRange { target: Type },

    #[error("invalid opcode 0x{byte:02x} at offset {offset}")]
    InvalidOpcode { byte: u8, offset: usize },

    #[error("truncated input at offset {offset}")]
    TruncatedInput { offset: usize },

    #[error("nesting deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize },

    /// A string payload was read as `&str` but is not UTF-8. `offset` is the
    /// first bad byte within the payload.
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// `has_shape` found a missing or mistyped field.
    #[error("bad type for {field}")]
    Shape { field: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<BufferError> for Error {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { offset } => Error::TruncatedInput { offset },
            BufferError::Io { source, .. } => Error::Io(source),
        }
    }
}

impl Error {
    pub(crate) fn mismatch(expected: Type, actual: Type) -> Self {
        Error::TypeMismatch { expected, actual }
    }
}
