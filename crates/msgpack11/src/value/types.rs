//! Type tags and their category lattice.

use std::fmt;

const NUMBER_BIT: u8 = 1;
const INT_BITS: u8 = 2 | NUMBER_BIT;

/// Discriminant of a [`Value`](crate::Value).
///
/// The numeric representation is a bit lattice: bit 0 (`NUMBER`) is set on
/// every float and integer case, bits 0-1 (`INT`) are both set on the eight
/// integer cases, and the upper bits make each concrete case unique. The
/// category bits are part of the discriminant itself, so they can never
/// drift from the concrete case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Type {
    Null = 1 << 2,
    Float32 = 2 << 2 | NUMBER_BIT,
    Float64 = 3 << 2 | NUMBER_BIT,
    Int8 = 4 << 2 | INT_BITS,
    Int16 = 5 << 2 | INT_BITS,
    Int32 = 6 << 2 | INT_BITS,
    Int64 = 7 << 2 | INT_BITS,
    UInt8 = 8 << 2 | INT_BITS,
    UInt16 = 9 << 2 | INT_BITS,
    UInt32 = 10 << 2 | INT_BITS,
    UInt64 = 11 << 2 | INT_BITS,
    Bool = 12 << 2,
    String = 13 << 2,
    Binary = 14 << 2,
    Array = 15 << 2,
    Object = 16 << 2,
    Extension = 17 << 2,
}

impl Type {
    /// Flag set on every numeric case.
    pub const NUMBER: u8 = NUMBER_BIT;
    /// Flags set on every integer case (includes `NUMBER`).
    pub const INT: u8 = INT_BITS;

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        self.bits() & Type::NUMBER != 0
    }

    #[inline]
    pub const fn is_int(self) -> bool {
        self.bits() & Type::INT == Type::INT
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        self.is_number() && !self.is_int()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Float32 => "float32",
            Type::Float64 => "float64",
            Type::Int8 => "int8",
            Type::Int16 => "int16",
            Type::Int32 => "int32",
            Type::Int64 => "int64",
            Type::UInt8 => "uint8",
            Type::UInt16 => "uint16",
            Type::UInt32 => "uint32",
            Type::UInt64 => "uint64",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Binary => "binary",
            Type::Array => "array",
            Type::Object => "object",
            Type::Extension => "extension",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
