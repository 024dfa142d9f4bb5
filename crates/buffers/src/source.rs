//! Sequential, fallible byte input.

use crate::BufferError;

/// A sequential input channel that reports short or failed reads.
///
/// Implementors supply the three primitive reads; the big-endian helpers are
/// provided on top of [`ByteSource::read_exact`].
pub trait ByteSource {
    /// Reads a single byte.
    fn read_u8(&mut self) -> Result<u8, BufferError>;

    /// Fills `buf` completely or fails.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError>;

    /// Reads exactly `len` bytes into a fresh vector.
    ///
    /// Implementations must not trust `len` for allocation before the bytes
    /// are known to exist: a hostile length prefix can claim 4 GiB.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, BufferError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    /// Returns `true` if no more bytes can be read. Sources that cannot tell
    /// without blocking report `false`.
    fn is_exhausted(&self) -> bool {
        false
    }

    #[inline]
    fn read_i8(&mut self) -> Result<i8, BufferError> {
        self.read_u8().map(|b| b as i8)
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, BufferError> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok(u16::from_be_bytes(b))
    }

    #[inline]
    fn read_i16(&mut self) -> Result<i16, BufferError> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok(i16::from_be_bytes(b))
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(u32::from_be_bytes(b))
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(i32::from_be_bytes(b))
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok(u64::from_be_bytes(b))
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok(i64::from_be_bytes(b))
    }

    #[inline]
    fn read_f32(&mut self) -> Result<f32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(f32::from_be_bytes(b))
    }

    #[inline]
    fn read_f64(&mut self) -> Result<f64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact(&mut b)?;
        Ok(f64::from_be_bytes(b))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        (**self).read_u8()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        (**self).read_exact(buf)
    }

    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        (**self).read_vec(len)
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}
