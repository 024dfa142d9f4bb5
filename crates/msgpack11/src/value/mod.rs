//! The MessagePack value model.
//!
//! [`Value`] is a closed sum type over every MessagePack case. Containers own
//! their children exclusively; `Clone` is a deep copy, so mutating one value
//! is never observable through another.

mod cast;
mod cmp;
mod extension;
mod from;
mod index;
mod shape;
mod text;
mod types;

use indexmap::IndexMap;

use crate::error::{Error, Result};

pub use extension::Extension;
pub use index::ValueIndex;
pub use text::Str;
pub use types::Type;

/// Object storage. Entries iterate, and therefore encode, in insertion
/// order.
pub type Map = IndexMap<Value, Value>;

/// One MessagePack datum.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    /// Text exactly as it appeared on the wire; see [`Str`].
    String(Str),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Object(Map),
    Extension(Extension),
}

macro_rules! scalar_accessors {
    ($($name:ident => $variant:ident($ty:ty);)*) => {
        $(
            #[doc = concat!("Returns the payload if this is a `", stringify!($variant), "`.")]
            pub fn $name(&self) -> Result<$ty> {
                match *self {
                    Value::$variant(v) => Ok(v),
                    _ => Err(Error::mismatch(Type::$variant, self.type_tag())),
                }
            }
        )*
    };
}

macro_rules! type_predicates {
    ($($name:ident => $variant:ident;)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> bool {
                self.type_tag() == Type::$variant
            }
        )*
    };
}

impl Value {
    /// Builds an empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// Builds an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn type_tag(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int8(_) => Type::Int8,
            Value::Int16(_) => Type::Int16,
            Value::Int32(_) => Type::Int32,
            Value::Int64(_) => Type::Int64,
            Value::UInt8(_) => Type::UInt8,
            Value::UInt16(_) => Type::UInt16,
            Value::UInt32(_) => Type::UInt32,
            Value::UInt64(_) => Type::UInt64,
            Value::Float32(_) => Type::Float32,
            Value::Float64(_) => Type::Float64,
            Value::String(_) => Type::String,
            Value::Binary(_) => Type::Binary,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
            Value::Extension(_) => Type::Extension,
        }
    }

    // Category predicates test tag bits only.

    #[inline]
    pub fn is_number(&self) -> bool {
        self.type_tag().is_number()
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        self.type_tag().is_int()
    }

    type_predicates! {
        is_null => Null;
        is_bool => Bool;
        is_int8 => Int8;
        is_int16 => Int16;
        is_int32 => Int32;
        is_int64 => Int64;
        is_uint8 => UInt8;
        is_uint16 => UInt16;
        is_uint32 => UInt32;
        is_uint64 => UInt64;
        is_float32 => Float32;
        is_float64 => Float64;
        is_string => String;
        is_binary => Binary;
        is_array => Array;
        is_object => Object;
        is_extension => Extension;
    }

    scalar_accessors! {
        as_bool => Bool(bool);
        as_i8 => Int8(i8);
        as_i16 => Int16(i16);
        as_i32 => Int32(i32);
        as_i64 => Int64(i64);
        as_u8 => UInt8(u8);
        as_u16 => UInt16(u16);
        as_u32 => UInt32(u32);
        as_u64 => UInt64(u64);
        as_f32 => Float32(f32);
        as_f64 => Float64(f64);
    }

    /// Any numeric case widened to `f64`. Wide integers may round.
    pub fn number_value(&self) -> Result<f64> {
        match *self {
            Value::Float32(v) => Ok(v as f64),
            Value::Float64(v) => Ok(v),
            _ if self.is_int() => self.integer_value().map(|v| v as f64),
            _ => Err(Error::mismatch(Type::Float64, self.type_tag())),
        }
    }

    /// Any integer case widened to `i128`, which holds both `i64::MIN` and
    /// `u64::MAX` exactly.
    pub fn integer_value(&self) -> Result<i128> {
        match *self {
            Value::Int8(v) => Ok(v as i128),
            Value::Int16(v) => Ok(v as i128),
            Value::Int32(v) => Ok(v as i128),
            Value::Int64(v) => Ok(v as i128),
            Value::UInt8(v) => Ok(v as i128),
            Value::UInt16(v) => Ok(v as i128),
            Value::UInt32(v) => Ok(v as i128),
            Value::UInt64(v) => Ok(v as i128),
            _ => Err(Error::mismatch(Type::Int64, self.type_tag())),
        }
    }

    /// The text of a `String` value. Fails with [`Error::InvalidUtf8`] when
    /// the payload is not UTF-8; [`Value::as_text`] reaches the raw bytes.
    pub fn as_str(&self) -> Result<&str> {
        self.as_text()?.as_str()
    }

    pub fn as_text(&self) -> Result<&Str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(Error::mismatch(Type::String, self.type_tag())),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut Str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::mismatch(Type::String, other.type_tag())),
        }
    }

    /// The payload of a `Binary` value. Strings are not accepted.
    pub fn as_binary(&self) -> Result<&[u8]> {
        match self {
            Value::Binary(b) => Ok(b),
            _ => Err(Error::mismatch(Type::Binary, self.type_tag())),
        }
    }

    pub fn as_binary_mut(&mut self) -> Result<&mut Vec<u8>> {
        match self {
            Value::Binary(b) => Ok(b),
            other => Err(Error::mismatch(Type::Binary, other.type_tag())),
        }
    }

    /// Elements of an `Array`, in order.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(Error::mismatch(Type::Array, self.type_tag())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::mismatch(Type::Array, other.type_tag())),
        }
    }

    /// Entries of an `Object`, in insertion order.
    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(Error::mismatch(Type::Object, self.type_tag())),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(Error::mismatch(Type::Object, other.type_tag())),
        }
    }

    pub fn as_extension(&self) -> Result<&Extension> {
        match self {
            Value::Extension(ext) => Ok(ext),
            _ => Err(Error::mismatch(Type::Extension, self.type_tag())),
        }
    }

    pub fn as_extension_mut(&mut self) -> Result<&mut Extension> {
        match self {
            Value::Extension(ext) => Ok(ext),
            other => Err(Error::mismatch(Type::Extension, other.type_tag())),
        }
    }

    /// Reads an element or entry. Never inserts.
    ///
    /// ```
    /// use msgpack11::Value;
    ///
    /// let arr = Value::from(vec![Value::from(1u8), Value::from("two")]);
    /// assert_eq!(arr.get(1).unwrap().as_str().unwrap(), "two");
    /// assert!(arr.get(2).is_err());
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Mutable access to an element or entry. Indexing an object by key
    /// inserts a `Null` entry when the key is absent; array indices are
    /// never extended.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_case() {
        assert_eq!(Value::Null.type_tag(), Type::Null);
        assert_eq!(Value::from(1i16).type_tag(), Type::Int16);
        assert_eq!(Value::from(1u64).type_tag(), Type::UInt64);
        assert_eq!(Value::from(1.0f32).type_tag(), Type::Float32);
        assert_eq!(Value::from("x").type_tag(), Type::String);
        assert_eq!(Value::from(vec![1u8, 2]).type_tag(), Type::Binary);
        assert_eq!(Value::array().type_tag(), Type::Array);
        assert_eq!(Value::object().type_tag(), Type::Object);
        assert_eq!(
            Value::from(Extension::new(1, vec![0u8])).type_tag(),
            Type::Extension
        );
    }

    #[test]
    fn predicates() {
        let v = Value::from(7u32);
        assert!(v.is_number());
        assert!(v.is_int());
        assert!(v.is_uint32());
        assert!(!v.is_int32());
        let f = Value::from(1.5f64);
        assert!(f.is_number());
        assert!(!f.is_int());
        assert!(Value::Null.is_null());
        assert!(!Value::from(true).is_number());
    }

    #[test]
    fn scalar_accessor_mismatch() {
        let v = Value::from(5i8);
        assert_eq!(v.as_i8().unwrap(), 5);
        let err = v.as_u8().unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: Type::UInt8,
                actual: Type::Int8
            }
        ));
    }

    #[test]
    fn numeric_widening() {
        assert_eq!(
            Value::from(u64::MAX).integer_value().unwrap(),
            u64::MAX as i128
        );
        assert_eq!(Value::from(-3i32).number_value().unwrap(), -3.0);
        assert_eq!(Value::from(0.25f32).number_value().unwrap(), 0.25);
        assert!(Value::from(0.25f32).integer_value().is_err());
        assert!(Value::from("1").number_value().is_err());
    }

    #[test]
    fn container_accessors() {
        let mut v = Value::from("abc");
        v.as_string_mut().unwrap().push_str("d");
        assert_eq!(v.as_str().unwrap(), "abcd");
        assert!(v.as_array().is_err());

        let mut arr = Value::array();
        arr.as_array_mut().unwrap().push(Value::Null);
        assert_eq!(arr.as_array().unwrap().len(), 1);

        let mut bin = Value::from(vec![1u8]);
        bin.as_binary_mut().unwrap().push(2);
        assert_eq!(bin.as_binary().unwrap(), &[1, 2]);

        let mut ext = Value::from(Extension::new(9, vec![1u8]));
        ext.as_extension_mut().unwrap().tag = 10;
        assert_eq!(ext.as_extension().unwrap().tag, 10);
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Value::from(vec![Value::from(1u8)]);
        let b = a.clone();
        a.as_array_mut().unwrap().push(Value::from(2u8));
        assert_eq!(b.as_array().unwrap().len(), 1);
        assert_eq!(a.as_array().unwrap().len(), 2);
    }
}
