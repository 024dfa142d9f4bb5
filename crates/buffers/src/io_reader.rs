//! [`ByteSource`] adapter over [`std::io::Read`].

use std::io::{self, Read};

use crate::{BufferError, ByteSource};

/// Upper bound on how much is reserved up front for a single `read_vec`.
/// Larger payloads grow as bytes actually arrive.
const MAX_PREALLOC: usize = 64 * 1024;

/// Wraps any [`Read`] implementation as a [`ByteSource`].
///
/// The adapter counts consumed bytes so decode errors can report offsets.
/// `ErrorKind::UnexpectedEof` from the inner reader becomes
/// [`BufferError::EndOfBuffer`]; other failures become [`BufferError::Io`].
///
/// # Example
///
/// ```
/// use msgpack11_buffers::{ByteSource, IoReader};
///
/// let mut source = IoReader::new(&[0x12u8, 0x34][..]);
/// assert_eq!(source.read_u16().unwrap(), 0x1234);
/// assert_eq!(source.position(), 2);
/// ```
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
    pos: usize,
}

impl<R: Read> IoReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn error(&self, err: io::Error) -> BufferError {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            BufferError::EndOfBuffer { offset: self.pos }
        } else {
            BufferError::Io {
                offset: self.pos,
                source: err,
            }
        }
    }
}

impl<R: Read> ByteSource for IoReader<R> {
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        // `Read::read_exact` already retries on `Interrupted`.
        self.inner.read_exact(buf).map_err(|e| self.error(e))?;
        self.pos += buf.len();
        Ok(())
    }

    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::with_capacity(len.min(MAX_PREALLOC));
        let result = (&mut self.inner).take(len as u64).read_to_end(&mut out);
        let read = result.map_err(|e| self.error(e))?;
        self.pos += read;
        if read < len {
            return Err(BufferError::EndOfBuffer { offset: self.pos });
        }
        Ok(out)
    }

    fn position(&self) -> usize {
        self.pos
    }
}
