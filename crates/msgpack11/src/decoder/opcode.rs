//! The 256-entry first-byte dispatch table.
//!
//! Built at compile time from a short list of `(last byte, handler)` ranges:
//! each entry covers every byte from the previous entry's end up to and
//! including its own last byte.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    W8,
    W16,
    W32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Invalid,
    PosFixInt,
    FixMap,
    FixArray,
    FixStr,
    Nil,
    False,
    True,
    Bin(Width),
    Ext(Width),
    Float32,
    Float64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    FixExt,
    Str(Width),
    Array(Width),
    Map(Width),
    NegFixInt,
}

const RANGES: [(u8, Op); 37] = [
    (POS_FIXINT_MAX, Op::PosFixInt),
    (FIXARRAY - 1, Op::FixMap),
    (FIXSTR - 1, Op::FixArray),
    (NIL - 1, Op::FixStr),
    (NIL, Op::Nil),
    (NEVER_USED, Op::Invalid),
    (FALSE, Op::False),
    (TRUE, Op::True),
    (BIN8, Op::Bin(Width::W8)),
    (BIN16, Op::Bin(Width::W16)),
    (BIN32, Op::Bin(Width::W32)),
    (EXT8, Op::Ext(Width::W8)),
    (EXT16, Op::Ext(Width::W16)),
    (EXT32, Op::Ext(Width::W32)),
    (FLOAT32, Op::Float32),
    (FLOAT64, Op::Float64),
    (UINT8, Op::UInt8),
    (UINT16, Op::UInt16),
    (UINT32, Op::UInt32),
    (UINT64, Op::UInt64),
    (INT8, Op::Int8),
    (INT16, Op::Int16),
    (INT32, Op::Int32),
    (INT64, Op::Int64),
    (FIXEXT1, Op::FixExt),
    (FIXEXT2, Op::FixExt),
    (FIXEXT4, Op::FixExt),
    (FIXEXT8, Op::FixExt),
    (FIXEXT16, Op::FixExt),
    (STR8, Op::Str(Width::W8)),
    (STR16, Op::Str(Width::W16)),
    (STR32, Op::Str(Width::W32)),
    (ARRAY16, Op::Array(Width::W16)),
    (ARRAY32, Op::Array(Width::W32)),
    (MAP16, Op::Map(Width::W16)),
    (MAP32, Op::Map(Width::W32)),
    (0xff, Op::NegFixInt),
];

const fn expand() -> [Op; 256] {
    let mut table = [Op::Invalid; 256];
    let mut byte = 0usize;
    let mut i = 0;
    while i < RANGES.len() {
        let (last, op) = RANGES[i];
        while byte <= last as usize {
            table[byte] = op;
            byte += 1;
        }
        i += 1;
    }
    table
}

pub(crate) static OPCODES: [Op; 256] = expand();
