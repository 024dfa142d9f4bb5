//! Binary buffer writer with auto-growing capacity.

use crate::ByteSink;

/// A growable output buffer.
///
/// Bytes accumulate until [`Writer::flush`] hands out everything written
/// since the previous flush. A [`Writer::mark`] / [`Writer::truncate_to_mark`]
/// pair discards a partially written value.
///
/// # Example
///
/// ```
/// use msgpack11_buffers::{ByteSink, Writer};
///
/// let mut writer = Writer::new();
/// writer.put_u8(0x01);
/// writer.put_u16(0x0203);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes written since the last flush.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Current write position, usable with [`Writer::truncate_to_mark`].
    pub fn mark(&self) -> usize {
        self.uint8.len()
    }

    /// Drops everything written after `mark`.
    pub fn truncate_to_mark(&mut self, mark: usize) {
        self.uint8.truncate(mark);
    }

    /// Returns the written data, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}

impl ByteSink for Writer {
    #[inline]
    fn put_u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    fn put_slice(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.put_u8(0x01);
        writer.put_u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u32() {
        let mut writer = Writer::new();
        writer.put_u32(0x01020304);
        assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.put_u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        assert!(writer.is_empty());
        writer.put_u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_truncate_to_mark() {
        let mut writer = Writer::with_capacity(16);
        writer.put_u8(0xc0);
        let mark = writer.mark();
        writer.put_slice(&[1, 2, 3]);
        assert_eq!(writer.len(), 4);
        writer.truncate_to_mark(mark);
        assert_eq!(writer.as_slice(), &[0xc0]);
    }

    #[test]
    fn test_i64() {
        let mut writer = Writer::new();
        writer.put_i64(-2);
        assert_eq!(
            writer.flush(),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }
}
