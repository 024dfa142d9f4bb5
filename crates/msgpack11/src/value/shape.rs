//! Field-by-field type checks on objects.

use super::{Type, Value};
use crate::error::{Error, Result};

impl Value {
    /// Checks that this is an object and that each named field exists with
    /// the given type. Fails on the first field that does not match.
    ///
    /// ```
    /// use msgpack11::{Type, Value};
    ///
    /// let mut point = Value::object();
    /// point["x"] = 1.5f64.into();
    /// point["y"] = 2.5f64.into();
    /// assert!(point.has_shape(&[("x", Type::Float64), ("y", Type::Float64)]).is_ok());
    /// assert!(point.has_shape(&[("z", Type::Float64)]).is_err());
    /// ```
    pub fn has_shape(&self, fields: &[(&str, Type)]) -> Result<()> {
        self.as_object()?;
        for &(name, ty) in fields {
            match self.get(name) {
                Ok(v) if v.type_tag() == ty => {}
                _ => {
                    return Err(Error::Shape {
                        field: name.to_owned(),
                    })
                }
            }
        }
        Ok(())
    }
}
