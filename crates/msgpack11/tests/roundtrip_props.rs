use msgpack11::{decode, encode, Error, Extension, Map, Str, Value};
use proptest::collection::vec;
use proptest::prelude::*;

fn integer() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i8>().prop_map(Value::Int8),
        any::<i16>().prop_map(Value::Int16),
        any::<i32>().prop_map(Value::Int32),
        any::<i64>().prop_map(Value::Int64),
        any::<u8>().prop_map(Value::UInt8),
        any::<u16>().prop_map(Value::UInt16),
        any::<u32>().prop_map(Value::UInt32),
        any::<u64>().prop_map(Value::UInt64),
    ]
}

/// Every scalar case; floats stay finite so `==` is reflexive.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        integer(),
        (-1.0e30f32..1.0e30).prop_map(Value::Float32),
        (-1.0e300f64..1.0e300).prop_map(Value::Float64),
        ".{0,40}".prop_map(Value::from),
        vec(any::<u8>(), 0..40).prop_map(|raw| Value::String(Str::from(raw))),
        vec(any::<u8>(), 0..300).prop_map(Value::Binary),
        (any::<u8>(), vec(any::<u8>(), 0..20))
            .prop_map(|(tag, data)| Value::Extension(Extension::new(tag, data))),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..20).prop_map(Value::Array),
            vec((inner.clone(), inner), 0..20)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn decode_inverts_encode(v in value()) {
        let bytes = encode(&v).unwrap();
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(&back, &v);
        prop_assert_eq!(back.hash_code(), v.hash_code());
        // The decoded tree already uses minimal widths.
        prop_assert_eq!(encode(&back).unwrap(), bytes);
    }

    #[test]
    fn any_prefix_is_truncated(v in value(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&v).unwrap();
        let cut = cut.index(bytes.len());
        let result = decode(&bytes[..cut]);
        prop_assert!(
            matches!(result, Err(Error::TruncatedInput { .. })),
            "cut {}: {:?}",
            cut,
            result
        );
        prop_assert!(result.unwrap_or_default().is_null());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in vec(any::<u8>(), 0..512)) {
        let _ = decode(&bytes);
        let all = msgpack11::decode_all(&bytes);
        prop_assert!(all.offset <= bytes.len());
    }

    #[test]
    fn integer_order_matches_i128(a in any::<i64>(), b in any::<u64>()) {
        let (x, y) = (Value::Int64(a), Value::UInt64(b));
        prop_assert_eq!(x.compare(&y), Some((a as i128).cmp(&(b as i128))));
    }

    #[test]
    fn equal_numbers_hash_equally(n in any::<i32>()) {
        let forms = [Value::Int32(n), Value::Int64(n as i64), Value::Float64(n as f64)];
        for pair in forms.windows(2) {
            prop_assert_eq!(&pair[0], &pair[1]);
            prop_assert_eq!(pair[0].hash_code(), pair[1].hash_code());
        }
    }
}
