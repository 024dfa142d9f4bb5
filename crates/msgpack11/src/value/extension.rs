//! Opaque MessagePack extension values.

/// An application-defined `(type, payload)` pair.
///
/// The type byte is carried through untouched; no registry interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Extension {
    pub tag: u8,
    pub data: Vec<u8>,
}

impl Extension {
    pub fn new(tag: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            data: data.into(),
        }
    }
}

impl From<(u8, Vec<u8>)> for Extension {
    fn from((tag, data): (u8, Vec<u8>)) -> Self {
        Self { tag, data }
    }
}
