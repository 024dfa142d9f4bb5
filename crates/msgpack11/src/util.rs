//! One-shot helpers over [`MsgPackEncoder`] and [`Decoder`].

use std::io::{Read, Write};

use msgpack11_buffers::{ByteSink, ByteSource, IoReader};

use crate::decoder::{DecodeAll, Decoder, DecoderOptions};
use crate::encoder::MsgPackEncoder;
use crate::error::Result;
use crate::Value;

/// Encodes `value` into a fresh buffer.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    MsgPackEncoder::new().encode(value)
}

/// Appends the encoding of `value` to `sink`.
pub fn encode_into<S: ByteSink>(value: &Value, sink: &mut S) -> Result<()> {
    MsgPackEncoder::with_sink(sink).write_any(value)
}

/// Encodes `value` and writes it to `writer` in one `write_all`.
pub fn encode_to_writer<W: Write>(value: &Value, mut writer: W) -> Result<()> {
    let bytes = encode(value)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Decodes the first value in `input` with default options.
///
/// A failed decode carries its reason in the error; callers that want the
/// null-equivalent value can use `unwrap_or_default()`.
///
/// ```
/// use msgpack11::{decode, Value};
///
/// assert_eq!(decode(&[0x92, 0x01, 0xa1, b'x']).unwrap()[1], Value::from("x"));
/// assert!(decode(&[0x92, 0x01]).unwrap_or_default().is_null());
/// ```
pub fn decode(input: &[u8]) -> Result<Value> {
    Decoder::new().decode(input)
}

pub fn decode_with(input: &[u8], options: DecoderOptions) -> Result<Value> {
    Decoder::with_options(options).decode(input)
}

/// Decodes one value from any byte source, such as an [`IoReader`].
pub fn decode_from<S: ByteSource + ?Sized>(source: &mut S) -> Result<Value> {
    Decoder::new().decode_from(source)
}

pub fn decode_from_with<S: ByteSource + ?Sized>(
    source: &mut S,
    options: DecoderOptions,
) -> Result<Value> {
    Decoder::with_options(options).decode_from(source)
}

/// Decodes one value from a [`std::io::Read`].
pub fn decode_reader<R: Read>(reader: R) -> Result<Value> {
    decode_from(&mut IoReader::new(reader))
}

pub fn decode_all(input: &[u8]) -> DecodeAll {
    Decoder::new().decode_all(input)
}

pub fn decode_all_with(input: &[u8], options: DecoderOptions) -> DecodeAll {
    Decoder::with_options(options).decode_all(input)
}
