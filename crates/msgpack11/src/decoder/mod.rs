//! Depth-bounded MessagePack decoder.
//!
//! Every read goes through a [`ByteSource`], so a short or failed read at any
//! depth aborts the whole value with [`Error::TruncatedInput`] (or
//! [`Error::Io`]); partially built containers are dropped.

mod opcode;
mod options;

use msgpack11_buffers::{ByteSource, Reader};
use tracing::{debug, trace};

use crate::constants::FIXEXT1;
use crate::error::{Error, Result};
use crate::{Extension, Map, Str, Value};

use opcode::{Op, Width, OPCODES};
pub use options::{DecoderOptions, DEFAULT_MAX_DEPTH};

/// Containers never reserve more slots up front than this, whatever length
/// the header declares.
const PREALLOC_LIMIT: usize = 4096;

/// Result of [`Decoder::decode_all`].
#[derive(Debug, Default)]
pub struct DecodeAll {
    /// Every value decoded before the first failure.
    pub values: Vec<Value>,
    /// Offset just past the last successfully decoded value.
    pub offset: usize,
    /// The failure that stopped decoding, if any.
    pub error: Option<Error>,
}

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes the first value in `input`. Trailing bytes are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<Value> {
        self.decode_from(&mut Reader::new(input))
    }

    /// Decodes one value from `source`. After a failure the source position
    /// is unspecified.
    pub fn decode_from<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Value> {
        let start = source.position();
        Parser::new(source, self.options.max_depth)
            .parse(0)
            .inspect_err(|err| debug!(error = %err, offset = start, "msgpack decode failed"))
    }

    /// Decodes values back to back until `input` is exhausted or one fails.
    ///
    /// ```
    /// use msgpack11::Decoder;
    ///
    /// let all = Decoder::new().decode_all(&[0x01, 0x02, 0xc1]);
    /// assert_eq!(all.values.len(), 2);
    /// assert_eq!(all.offset, 2);
    /// assert!(all.error.is_some());
    /// ```
    pub fn decode_all(&self, input: &[u8]) -> DecodeAll {
        let mut reader = Reader::new(input);
        let mut out = DecodeAll::default();
        while !reader.is_exhausted() {
            match self.decode_from(&mut reader) {
                Ok(value) => {
                    out.values.push(value);
                    out.offset = reader.position();
                }
                Err(err) => {
                    debug!(
                        decoded = out.values.len(),
                        offset = out.offset,
                        "decode_all stopped early"
                    );
                    out.error = Some(err);
                    break;
                }
            }
        }
        out
    }
}

struct Parser<'s, S: ?Sized> {
    source: &'s mut S,
    max_depth: usize,
}

impl<'s, S: ByteSource + ?Sized> Parser<'s, S> {
    fn new(source: &'s mut S, max_depth: usize) -> Self {
        Self { source, max_depth }
    }

    fn parse(&mut self, depth: usize) -> Result<Value> {
        let offset = self.source.position();
        let byte = self.source.read_u8()?;
        let value = match OPCODES[byte as usize] {
            Op::Invalid => return Err(Error::InvalidOpcode { byte, offset }),
            Op::PosFixInt => Value::UInt8(byte),
            Op::NegFixInt => Value::Int8(byte as i8),
            Op::Nil => Value::Null,
            Op::False => Value::Bool(false),
            Op::True => Value::Bool(true),
            Op::Float32 => Value::Float32(self.source.read_f32()?),
            Op::Float64 => Value::Float64(self.source.read_f64()?),
            Op::UInt8 => Value::UInt8(self.source.read_u8()?),
            Op::UInt16 => Value::UInt16(self.source.read_u16()?),
            Op::UInt32 => Value::UInt32(self.source.read_u32()?),
            Op::UInt64 => Value::UInt64(self.source.read_u64()?),
            Op::Int8 => Value::Int8(self.source.read_i8()?),
            Op::Int16 => Value::Int16(self.source.read_i16()?),
            Op::Int32 => Value::Int32(self.source.read_i32()?),
            Op::Int64 => Value::Int64(self.source.read_i64()?),
            Op::FixStr => self.string(usize::from(byte & 0x1f))?,
            Op::Str(width) => {
                let len = self.length(width)?;
                self.string(len)?
            }
            Op::Bin(width) => {
                let len = self.length(width)?;
                Value::Binary(self.source.read_vec(len)?)
            }
            Op::FixExt => self.extension(1 << (byte - FIXEXT1))?,
            Op::Ext(width) => {
                let len = self.length(width)?;
                self.extension(len)?
            }
            Op::FixArray => self.array(usize::from(byte & 0x0f), depth)?,
            Op::Array(width) => {
                let len = self.length(width)?;
                self.array(len, depth)?
            }
            Op::FixMap => self.map(usize::from(byte & 0x0f), depth)?,
            Op::Map(width) => {
                let len = self.length(width)?;
                self.map(len, depth)?
            }
        };
        Ok(value)
    }

    fn length(&mut self, width: Width) -> Result<usize> {
        let len = match width {
            Width::W8 => u32::from(self.source.read_u8()?),
            Width::W16 => u32::from(self.source.read_u16()?),
            Width::W32 => self.source.read_u32()?,
        };
        Ok(len as usize)
    }

    /// Depth of a container opened at `depth`, or an error past the limit.
    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }
        Ok(depth)
    }

    /// The payload is kept as raw bytes; UTF-8 is checked on access.
    fn string(&mut self, len: usize) -> Result<Value> {
        let bytes = self.source.read_vec(len)?;
        Ok(Value::String(Str::from(bytes)))
    }

    fn extension(&mut self, len: usize) -> Result<Value> {
        let tag = self.source.read_u8()?;
        let data = self.source.read_vec(len)?;
        Ok(Value::Extension(Extension { tag, data }))
    }

    fn array(&mut self, len: usize, depth: usize) -> Result<Value> {
        let depth = self.enter(depth)?;
        trace!(len, depth, "array");
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(self.parse(depth)?);
        }
        Ok(Value::Array(items))
    }

    /// Duplicate keys keep the first value seen.
    fn map(&mut self, len: usize, depth: usize) -> Result<Value> {
        let depth = self.enter(depth)?;
        trace!(len, depth, "map");
        let mut map = Map::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            let key = self.parse(depth)?;
            let value = self.parse(depth)?;
            map.entry(key).or_insert(value);
        }
        Ok(Value::Object(map))
    }
}
