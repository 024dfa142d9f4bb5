//! Element and entry access by position or key.

use std::ops;

use super::{Type, Value};
use crate::error::{Error, Result};

/// A type that can index into a [`Value`]: `usize` for arrays, strings or
/// arbitrary values for object keys.
///
/// Reads never mutate. Mutable key access inserts a `Null` entry when the
/// key is absent, so `obj["b"] = 2.into()` works like an associative
/// container.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        let items = v.as_array()?;
        items.get(*self).ok_or(Error::IndexOutOfRange {
            index: *self,
            len: items.len(),
        })
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        let items = v.as_array_mut()?;
        let len = items.len();
        items
            .get_mut(*self)
            .ok_or(Error::IndexOutOfRange { index: *self, len })
    }
}

impl ValueIndex for Value {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        v.as_object()?.get(self).ok_or(Error::KeyNotFound)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        match v {
            Value::Object(map) => Ok(map.entry(self.clone()).or_insert(Value::Null)),
            other => Err(Error::mismatch(Type::Object, other.type_tag())),
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        Value::from(self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        Value::from(self).index_into_mut(v)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }
}

impl<T: ValueIndex + ?Sized> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(v)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::Value {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// Panics with the access error, like slice indexing. Use [`Value::get`]
/// for a fallible read.
impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        match index.index_into(self) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Inserts absent object keys; panics on type mismatch or an out-of-range
/// array index.
impl<I: ValueIndex> ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.index_into_mut(self) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}
