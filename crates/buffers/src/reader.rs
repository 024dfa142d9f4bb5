//! Binary buffer reader with cursor tracking.

use crate::{BufferError, ByteSource};

/// A cursor over an in-memory byte slice.
///
/// Every read is bounds-checked; a read that cannot be satisfied returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use msgpack11_buffers::{ByteSource, Reader};
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_u8().unwrap(), 0x01);
/// assert_eq!(reader.read_u16().unwrap(), 0x0203);
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.uint8 = uint8;
        self.x = 0;
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns the unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }

    /// Checks that `n` more bytes are available from the current cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if n > self.remaining() {
            Err(BufferError::EndOfBuffer { offset: self.x })
        } else {
            Ok(())
        }
    }

    /// Returns the next `size` bytes without copying and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.uint8[start..self.x])
    }
}

impl ByteSource for Reader<'_> {
    #[inline]
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        let bytes = self.buf(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }

    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        self.buf(len).map(<[u8]>::to_vec)
    }

    fn position(&self) -> usize {
        self.x
    }

    fn is_exhausted(&self) -> bool {
        self.x >= self.uint8.len()
    }
}
