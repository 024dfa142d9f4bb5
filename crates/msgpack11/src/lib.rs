//! MessagePack values, encoding and decoding.
//!
//! [`Value`] models every MessagePack type. [`MsgPackEncoder`] writes each
//! value in its narrowest wire form and [`Decoder`] reads untrusted bytes
//! back with a bounded nesting depth.
//!
//! ```
//! use msgpack11::{decode, encode, Value};
//!
//! let mut doc = Value::object();
//! doc["name"] = Value::from("widget");
//! doc["sizes"] = vec![Value::from(3u8), Value::from(300u16)].into();
//!
//! let bytes = encode(&doc).unwrap();
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back, doc);
//! assert_eq!(back["sizes"][1].integer_value().unwrap(), 300);
//! ```

mod constants;
mod decoder;
mod encoder;
mod error;
mod util;
mod value;

pub use decoder::{DecodeAll, Decoder, DecoderOptions, DEFAULT_MAX_DEPTH};
pub use encoder::MsgPackEncoder;
pub use error::{Error, Result};
pub use util::{
    decode, decode_all, decode_all_with, decode_from, decode_from_with, decode_reader,
    decode_with, encode, encode_into, encode_to_writer,
};
pub use value::{Extension, Map, Str, Type, Value, ValueIndex};

pub use msgpack11_buffers::{
    BufferError, ByteSink, ByteSource, IoReader, Reader, Writer, HOST_IS_BIG_ENDIAN,
};
