//! Equality, ordering and hashing across value cases.
//!
//! Numbers compare by value regardless of width or signedness: two integers
//! are widened to `i128`, anything involving a float goes through `f64`.
//! Other cases compare structurally when the cases match and by type tag
//! otherwise. Equality is exactly "ordering reports `Equal`", and hashing is
//! structural so that equal values hash equally.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{Map, Value};

#[derive(Clone, Copy)]
enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }
}

impl Value {
    fn numeric(&self) -> Option<Numeric> {
        match *self {
            Value::Float32(v) => Some(Numeric::Float(v as f64)),
            Value::Float64(v) => Some(Numeric::Float(v)),
            _ => self.integer_value().ok().map(Numeric::Int),
        }
    }

    /// Three-way comparison; `None` when a NaN makes the operands unordered.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use msgpack11::Value;
    ///
    /// assert_eq!(
    ///     Value::from(u64::MAX).compare(&Value::from(-1i8)),
    ///     Some(Ordering::Greater)
    /// );
    /// assert_eq!(Value::from(f64::NAN).compare(&Value::from(0u8)), None);
    /// ```
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        cmp_values(self, other, false)
    }

    /// A total order for sorting: like [`Value::compare`], except that NaN
    /// sorts above every other number and equal to itself.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        cmp_values(self, other, true).unwrap_or(Ordering::Equal)
    }

    /// Hash of the value, consistent with `==`.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

fn cmp_f64(a: f64, b: f64, total: bool) -> Option<Ordering> {
    match a.partial_cmp(&b) {
        Some(ord) => Some(ord),
        None if total => Some(a.is_nan().cmp(&b.is_nan())),
        None => None,
    }
}

fn cmp_values(a: &Value, b: &Value, total: bool) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.numeric(), b.numeric()) {
        return match (x, y) {
            (Numeric::Int(x), Numeric::Int(y)) => Some(x.cmp(&y)),
            _ => cmp_f64(x.as_f64(), y.as_f64(), total),
        };
    }

    let (ta, tb) = (a.type_tag(), b.type_tag());
    if ta != tb {
        return Some(ta.bits().cmp(&tb.bits()));
    }

    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::String(x), Value::String(y)) => Some(x.as_bytes().cmp(y.as_bytes())),
        (Value::Binary(x), Value::Binary(y)) => Some(x.cmp(y)),
        (Value::Extension(x), Value::Extension(y)) => Some(x.cmp(y)),
        (Value::Array(x), Value::Array(y)) => cmp_seq(x.iter(), y.iter(), total),
        (Value::Object(x), Value::Object(y)) => {
            let x = sorted_entries(x);
            let y = sorted_entries(y);
            cmp_seq(
                x.iter().flat_map(|(k, v)| [*k, *v]),
                y.iter().flat_map(|(k, v)| [*k, *v]),
                total,
            )
        }
        _ => None,
    }
}

fn cmp_seq<'a>(
    mut x: impl Iterator<Item = &'a Value>,
    mut y: impl Iterator<Item = &'a Value>,
    total: bool,
) -> Option<Ordering> {
    loop {
        match (x.next(), y.next()) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some(a), Some(b)) => match cmp_values(a, b, total) {
                Some(Ordering::Equal) => {}
                other => return other,
            },
        }
    }
}

/// Object entries in key order, so comparison ignores insertion order.
fn sorted_entries(map: &Map) -> Vec<(&Value, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    entries
}

fn eq_values(a: &Value, b: &Value) -> bool {
    if let (Some(x), Some(y)) = (a.numeric(), b.numeric()) {
        return match (x, y) {
            (Numeric::Int(x), Numeric::Int(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        };
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Binary(x), Value::Binary(y)) => x == y,
        (Value::Extension(x), Value::Extension(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| eq_values(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| eq_values(v, w)))
        }
        _ => false,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        eq_values(self, other)
    }
}

/// NaN is the one value not equal to itself; a NaN object key can be
/// stored but never looked up.
impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

const NUMBER_HASH_TAG: u8 = 0x01;

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(n) = self.numeric() {
            // Every number is hashed through its f64 image, the coarsest
            // promotion equality uses; -0.0 folds into 0.0.
            state.write_u8(NUMBER_HASH_TAG);
            let f = n.as_f64();
            let f = if f == 0.0 { 0.0 } else { f };
            state.write_u64(f.to_bits());
            return;
        }
        state.write_u8(self.type_tag().bits());
        match self {
            Value::Bool(b) => b.hash(state),
            Value::String(s) => s.as_bytes().hash(state),
            Value::Binary(b) => b.hash(state),
            Value::Extension(ext) => ext.hash(state),
            Value::Array(items) => {
                state.write_usize(items.len());
                for item in items {
                    item.hash(state);
                }
            }
            Value::Object(map) => {
                // Order-independent: sum the per-entry hashes.
                state.write_usize(map.len());
                let sum = map.iter().fold(0u64, |acc, (k, v)| {
                    let mut h = DefaultHasher::new();
                    k.hash(&mut h);
                    v.hash(&mut h);
                    acc.wrapping_add(h.finish())
                });
                state.write_u64(sum);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Extension;

    fn obj(entries: &[(&str, Value)]) -> Value {
        entries
            .iter()
            .map(|(k, v)| (Value::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn cross_width_integers() {
        assert_eq!(
            Value::from(u64::MAX).compare(&Value::from(-1i8)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(-1i8).compare(&Value::from(0u8)),
            Some(Ordering::Less)
        );
        assert_eq!(Value::from(300u16), Value::from(300i64));
        assert_ne!(Value::from(i64::MIN), Value::from(u64::MAX));
    }

    #[test]
    fn floats_against_integers() {
        let x = Value::from(1.5f64);
        assert!(x > Value::from(1i32));
        assert!(x < Value::from(2i32));
        assert_eq!(Value::from(2.0f32), Value::from(2u8));
        assert_eq!(Value::from(0.5f32), Value::from(0.5f64));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::from(f64::NAN);
        assert_eq!(nan.compare(&nan), None);
        assert_ne!(nan, nan.clone());
        assert_eq!(
            nan.total_cmp(&Value::from(f64::INFINITY)),
            Ordering::Greater
        );
        assert_eq!(nan.total_cmp(&nan), Ordering::Equal);
    }

    #[test]
    fn distinct_cases_order_by_tag() {
        assert_eq!(
            Value::Null.compare(&Value::from(false)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from("a").compare(&Value::array()),
            Some(Ordering::Less)
        );
        // Numbers sit between null and bool in tag order.
        assert!(Value::from(u64::MAX) < Value::from(false));
        assert_ne!(Value::from(1u8), Value::from(true));
    }

    #[test]
    fn structural_ordering() {
        assert!(Value::from("abc") < Value::from("abd"));
        assert!(Value::from("ab") < Value::from("abc"));
        assert!(Value::from(vec![1u8, 2]) < Value::from(vec![1u8, 3]));
        let a: Value = vec![Value::from(1u8), Value::from(2u8)].into();
        let b: Value = vec![Value::from(1u8), Value::from(2.5f64)].into();
        assert!(a < b);
        let low = Value::from(Extension::new(1, vec![9u8]));
        assert!(low < Value::from(Extension::new(2, vec![0u8])));
    }

    #[test]
    fn objects_ignore_insertion_order() {
        let a = obj(&[("x", 1u8.into()), ("y", 2u8.into())]);
        let b = obj(&[("y", 2i64.into()), ("x", 1.0f64.into())]);
        assert_eq!(a, b);
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
        assert_eq!(a.hash_code(), b.hash_code());

        let c = obj(&[("x", 1u8.into()), ("y", 3u8.into())]);
        assert_ne!(a, c);
        assert_eq!(a.compare(&c), Some(Ordering::Less));
    }

    #[test]
    fn equal_values_hash_equally() {
        let pairs = [
            (Value::from(1u8), Value::from(1.0f64)),
            (Value::from(-7i16), Value::from(-7i64)),
            (Value::from(0.0f64), Value::from(-0.0f32)),
            (Value::from(u64::MAX), Value::from(u64::MAX as f64)),
            (
                Value::from(vec![Value::from(1u8)]),
                Value::from(vec![Value::from(1i32)]),
            ),
        ];
        for (a, b) in pairs {
            assert_eq!(a, b, "{a:?} vs {b:?}");
            assert_eq!(a.hash_code(), b.hash_code(), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn container_hash_is_structural() {
        let a = Value::from(vec![1u8, 2, 3]);
        let b = Value::from(vec![1u8, 2, 3]);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a.hash_code(), Value::from(vec![3u8, 2, 1]).hash_code());
    }
}
