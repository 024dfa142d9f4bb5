//! Append-only byte output.

/// An append-only output channel.
///
/// Implementors supply [`ByteSink::put_u8`] and [`ByteSink::put_slice`];
/// every multi-byte helper writes big-endian.
pub trait ByteSink {
    fn put_u8(&mut self, val: u8);

    fn put_slice(&mut self, buf: &[u8]);

    #[inline]
    fn put_i8(&mut self, val: i8) {
        self.put_u8(val as u8);
    }

    #[inline]
    fn put_u16(&mut self, val: u16) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_i16(&mut self, val: i16) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_u32(&mut self, val: u32) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_i32(&mut self, val: i32) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_u64(&mut self, val: u64) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_i64(&mut self, val: i64) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_f32(&mut self, val: f32) {
        self.put_slice(&val.to_be_bytes());
    }

    #[inline]
    fn put_f64(&mut self, val: f64) {
        self.put_slice(&val.to_be_bytes());
    }

    /// Writes a tag byte followed by a one-byte field.
    #[inline]
    fn put_u8_u8(&mut self, tag: u8, val: u8) {
        self.put_slice(&[tag, val]);
    }

    /// Writes a tag byte followed by a big-endian `u16`.
    #[inline]
    fn put_u8_u16(&mut self, tag: u8, val: u16) {
        let [a, b] = val.to_be_bytes();
        self.put_slice(&[tag, a, b]);
    }

    /// Writes a tag byte followed by a big-endian `u32`.
    #[inline]
    fn put_u8_u32(&mut self, tag: u8, val: u32) {
        let [a, b, c, d] = val.to_be_bytes();
        self.put_slice(&[tag, a, b, c, d]);
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn put_u8(&mut self, val: u8) {
        self.push(val);
    }

    #[inline]
    fn put_slice(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn put_u8(&mut self, val: u8) {
        (**self).put_u8(val);
    }

    #[inline]
    fn put_slice(&mut self, buf: &[u8]) {
        (**self).put_slice(buf);
    }
}
