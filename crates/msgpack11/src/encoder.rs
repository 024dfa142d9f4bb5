//! `MsgPackEncoder`: writes a [`Value`] tree as MessagePack.
//!
//! Every integer takes the smallest wire form that holds its value, so the
//! declared width of the input never matters: `UInt64(5)` and `Int8(5)` both
//! encode as the single byte `0x05`. Floats keep their declared precision.

use msgpack11_buffers::{ByteSink, Writer};
use tracing::debug;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::{Extension, Map, Value};

pub struct MsgPackEncoder<W = Writer> {
    pub writer: W,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `value` and returns the bytes. On error nothing is left
    /// behind in the internal writer.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>> {
        let mark = self.writer.mark();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.truncate_to_mark(mark);
                Err(err)
            }
        }
    }
}

impl<W: ByteSink> MsgPackEncoder<W> {
    /// Wraps an arbitrary sink. Bytes are appended as they are produced; a
    /// failed encode may leave a partial value in the sink.
    pub fn with_sink(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `value` and everything below it. Fails only when a length
    /// does not fit the wire format.
    pub fn write_any(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int8(i) => self.write_i64(i64::from(*i)),
            Value::Int16(i) => self.write_i64(i64::from(*i)),
            Value::Int32(i) => self.write_i64(i64::from(*i)),
            Value::Int64(i) => self.write_i64(*i),
            Value::UInt8(u) => self.write_u64(u64::from(*u)),
            Value::UInt16(u) => self.write_u64(u64::from(*u)),
            Value::UInt32(u) => self.write_u64(u64::from(*u)),
            Value::UInt64(u) => self.write_u64(*u),
            Value::Float32(f) => self.write_f32(*f),
            Value::Float64(f) => self.write_f64(*f),
            Value::String(s) => self.write_str_bytes(s.as_bytes())?,
            Value::Binary(b) => self.write_bin(b)?,
            Value::Array(arr) => self.write_arr(arr)?,
            Value::Object(obj) => self.write_obj(obj)?,
            Value::Extension(ext) => self.write_ext(ext)?,
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.put_u8(NIL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.put_u8(if b { TRUE } else { FALSE });
    }

    pub fn write_f32(&mut self, f: f32) {
        self.writer.put_u8(FLOAT32);
        self.writer.put_f32(f);
    }

    pub fn write_f64(&mut self, f: f64) {
        self.writer.put_u8(FLOAT64);
        self.writer.put_f64(f);
    }

    /// Non-negative integer in the narrowest of positive fixint, uint8,
    /// uint16, uint32, uint64.
    pub fn write_u64(&mut self, num: u64) {
        let writer = &mut self.writer;
        if num <= u64::from(POS_FIXINT_MAX) {
            writer.put_u8(num as u8);
        } else if num <= 0xff {
            writer.put_u8_u8(UINT8, num as u8);
        } else if num <= 0xffff {
            writer.put_u8_u16(UINT16, num as u16);
        } else if num <= 0xffff_ffff {
            writer.put_u8_u32(UINT32, num as u32);
        } else {
            writer.put_u8(UINT64);
            writer.put_u64(num);
        }
    }

    /// Signed integer; non-negative values take the unsigned forms, negative
    /// ones the narrowest of negative fixint, int8, int16, int32, int64.
    pub fn write_i64(&mut self, num: i64) {
        if num >= 0 {
            self.write_u64(num as u64);
            return;
        }
        let writer = &mut self.writer;
        if num >= -0x20 {
            writer.put_u8(NEG_FIXINT | (num as u8 & 0x1f));
        } else if num >= i64::from(i8::MIN) {
            writer.put_u8(INT8);
            writer.put_i8(num as i8);
        } else if num >= i64::from(i16::MIN) {
            writer.put_u8(INT16);
            writer.put_i16(num as i16);
        } else if num >= i64::from(i32::MIN) {
            writer.put_u8(INT32);
            writer.put_i32(num as i32);
        } else {
            writer.put_u8(INT64);
            writer.put_i64(num);
        }
    }

    /// `length` is in bytes.
    pub fn write_str_hdr(&mut self, length: usize) -> Result<()> {
        if length <= FIXSTR_MAX {
            self.writer.put_u8(FIXSTR | length as u8);
        } else if length <= 0xff {
            self.writer.put_u8_u8(STR8, length as u8);
        } else if length <= 0xffff {
            self.writer.put_u8_u16(STR16, length as u16);
        } else {
            self.writer.put_u8_u32(STR32, wire_len("string", length)?);
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_str_bytes(s.as_bytes())
    }

    /// Writes a `str` frame around `bytes` without checking that they are
    /// UTF-8.
    pub fn write_str_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_str_hdr(bytes.len())?;
        self.writer.put_slice(bytes);
        Ok(())
    }

    /// Binary has no fix form; the shortest header is `bin8`.
    pub fn write_bin_hdr(&mut self, length: usize) -> Result<()> {
        if length <= 0xff {
            self.writer.put_u8_u8(BIN8, length as u8);
        } else if length <= 0xffff {
            self.writer.put_u8_u16(BIN16, length as u16);
        } else {
            self.writer.put_u8_u32(BIN32, wire_len("binary", length)?);
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<()> {
        self.write_bin_hdr(buf.len())?;
        self.writer.put_slice(buf);
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<()> {
        if length <= FIXCONTAINER_MAX {
            self.writer.put_u8(FIXARRAY | length as u8);
        } else if length <= 0xffff {
            self.writer.put_u8_u16(ARRAY16, length as u16);
        } else {
            self.writer.put_u8_u32(ARRAY32, wire_len("array", length)?);
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<()> {
        self.write_arr_hdr(arr.len())?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_obj_hdr(&mut self, length: usize) -> Result<()> {
        if length <= FIXCONTAINER_MAX {
            self.writer.put_u8(FIXMAP | length as u8);
        } else if length <= 0xffff {
            self.writer.put_u8_u16(MAP16, length as u16);
        } else {
            self.writer.put_u8_u32(MAP32, wire_len("map", length)?);
        }
        Ok(())
    }

    /// Entries are written in the map's iteration (insertion) order.
    pub fn write_obj(&mut self, obj: &Map) -> Result<()> {
        self.write_obj_hdr(obj.len())?;
        for (key, value) in obj {
            self.write_any(key)?;
            self.write_any(value)?;
        }
        Ok(())
    }

    /// Writes the extension header including the type byte. Payloads of
    /// 1, 2, 4, 8 or 16 bytes use the fixext forms.
    pub fn write_ext_hdr(&mut self, tag: u8, length: usize) -> Result<()> {
        let writer = &mut self.writer;
        match length {
            1 => writer.put_u8(FIXEXT1),
            2 => writer.put_u8(FIXEXT2),
            4 => writer.put_u8(FIXEXT4),
            8 => writer.put_u8(FIXEXT8),
            16 => writer.put_u8(FIXEXT16),
            _ if length <= 0xff => writer.put_u8_u8(EXT8, length as u8),
            _ if length <= 0xffff => writer.put_u8_u16(EXT16, length as u16),
            _ => writer.put_u8_u32(EXT32, wire_len("extension", length)?),
        }
        writer.put_u8(tag);
        Ok(())
    }

    pub fn write_ext(&mut self, ext: &Extension) -> Result<()> {
        self.write_ext_hdr(ext.tag, ext.data.len())?;
        self.writer.put_slice(&ext.data);
        Ok(())
    }
}

fn wire_len(what: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        debug!(what, len, "length exceeds MessagePack limit");
        Error::LengthExceeded { what, len }
    })
}
