//! Byte sources and sinks for the msgpack11 codec.
//!
//! The codec only needs two narrow capabilities: an append-only output
//! channel ([`ByteSink`]) and a sequential, fallible input channel
//! ([`ByteSource`]). This crate provides both traits together with an
//! in-memory [`Reader`], an [`IoReader`] adapter for any [`std::io::Read`],
//! and a growable [`Writer`].

mod io_reader;
mod reader;
mod sink;
mod source;
mod writer;

pub use io_reader::IoReader;
pub use reader::Reader;
pub use sink::ByteSink;
pub use source::ByteSource;
pub use writer::Writer;

/// `true` when the host stores multi-byte integers most significant byte
/// first. Wire values are always big-endian; the `to_be_bytes` /
/// `from_be_bytes` conversions used throughout swap only on little-endian
/// hosts.
pub const HOST_IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// Failure reported by a [`ByteSource`].
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// The source ran out of bytes before the read was satisfied.
    #[error("unexpected end of buffer at offset {offset}")]
    EndOfBuffer { offset: usize },
    /// The underlying reader failed.
    #[error("read failed at offset {offset}: {source}")]
    Io {
        offset: usize,
        #[source]
        source: std::io::Error,
    },
}

impl BufferError {
    /// Offset (bytes consumed from the source) at which the read failed.
    pub fn offset(&self) -> usize {
        match self {
            BufferError::EndOfBuffer { offset } | BufferError::Io { offset, .. } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_endianness_matches_native_bytes() {
        let native = 0x0102u16.to_ne_bytes();
        assert_eq!(HOST_IS_BIG_ENDIAN, native[0] == 0x01);
    }

    #[test]
    fn buffer_error_reports_offset() {
        assert_eq!(BufferError::EndOfBuffer { offset: 7 }.offset(), 7);
        let err = BufferError::Io {
            offset: 3,
            source: std::io::Error::other("boom"),
        };
        assert_eq!(err.offset(), 3);
        assert!(err.to_string().contains("boom"));
    }
}
