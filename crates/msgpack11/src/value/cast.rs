//! Checked conversions from any numeric case to a fixed width.
//!
//! Integers convert when the target holds the value. Floats convert to an
//! integer width only when they are whole and in range; to a float width
//! they always convert, rounding as `as` does.

use super::{Type, Value};
use crate::error::{Error, Result};

macro_rules! int_casts {
    ($($name:ident => $ty:ty, $target:ident;)*) => {
        $(
            #[doc = concat!("Any number as `", stringify!($ty), "`, if it fits exactly.")]
            pub fn $name(&self) -> Result<$ty> {
                let target = Type::$target;
                <$ty>::try_from(self.whole(target)?).map_err(|_| Error::OutOfRange { target })
            }
        )*
    };
}

impl Value {
    /// The value as a whole number, accepting integral floats.
    fn whole(&self, target: Type) -> Result<i128> {
        let f = match *self {
            Value::Float32(f) => f as f64,
            Value::Float64(f) => f,
            _ => return self.integer_value(),
        };
        // Every integer target is narrower than this window.
        if f.fract() != 0.0 || !(-1.0e20..=1.0e20).contains(&f) {
            return Err(Error::OutOfRange { target });
        }
        Ok(f as i128)
    }

    int_casts! {
        to_i8 => i8, Int8;
        to_i16 => i16, Int16;
        to_i32 => i32, Int32;
        to_i64 => i64, Int64;
        to_u8 => u8, UInt8;
        to_u16 => u16, UInt16;
        to_u32 => u32, UInt32;
        to_u64 => u64, UInt64;
    }

    pub fn to_f32(&self) -> Result<f32> {
        self.number_value().map(|f| f as f32)
    }

    pub fn to_f64(&self) -> Result<f64> {
        self.number_value()
    }
}
