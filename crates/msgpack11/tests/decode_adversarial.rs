use msgpack11::{
    decode, decode_all, decode_from, decode_with, encode, DecoderOptions, Error, IoReader, Value,
};

fn nested(depth: usize) -> Value {
    let mut v = Value::from(0u8);
    for _ in 0..depth {
        v = Value::Array(vec![v]);
    }
    v
}

fn sample() -> Value {
    vec![
        ("name", Value::from("widget")),
        ("blob", Value::from(vec![1u8, 2, 3])),
        ("n", Value::from(-70_000i32)),
        ("list", Value::from(vec![Value::from(1.5f64), Value::Null])),
    ]
    .into_iter()
    .collect()
}

#[test]
fn every_truncation_fails_cleanly() {
    let bytes = encode(&sample()).unwrap();
    for cut in 0..bytes.len() {
        let err = decode(&bytes[..cut]).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput { .. }), "cut {cut}: {err}");
    }
    assert_eq!(decode(&bytes).unwrap(), sample());
}

#[test]
fn failed_decode_yields_null_and_message() {
    let bytes = encode(&sample()).unwrap();
    let result = decode(&bytes[..bytes.len() - 1]);
    let message = result.as_ref().map_err(ToString::to_string).unwrap_err();
    assert!(message.starts_with("truncated input"), "{message}");
    assert!(result.unwrap_or_default().is_null());
}

#[test]
fn reserved_byte_is_invalid() {
    assert!(matches!(
        decode(&[0xc1]).unwrap_err(),
        Error::InvalidOpcode { byte: 0xc1, offset: 0 }
    ));
    // Inside a container the whole value fails.
    assert!(matches!(
        decode(&[0x82, 0xa1, b'a', 0x01, 0xc1, 0x02]).unwrap_err(),
        Error::InvalidOpcode { offset: 4, .. }
    ));
}

#[test]
fn depth_guard() {
    let n = 50;
    let bytes = encode(&nested(n)).unwrap();
    let fail = decode_with(&bytes, DecoderOptions::default().with_max_depth(n - 1));
    assert!(matches!(fail, Err(Error::NestingTooDeep { max_depth }) if max_depth == n - 1));
    let ok = decode_with(&bytes, DecoderOptions::default().with_max_depth(n)).unwrap();
    assert_eq!(ok, nested(n));
}

#[test]
fn default_depth_stops_hostile_nesting() {
    // A megabyte of fixarray(1) headers.
    let bytes = vec![0x91u8; 1 << 20];
    assert!(matches!(
        decode(&bytes).unwrap_err(),
        Error::NestingTooDeep { max_depth: 200 }
    ));
    let map_bomb: Vec<u8> = std::iter::repeat([0x81u8, 0xc0]).take(1000).flatten().collect();
    assert!(matches!(
        decode(&map_bomb).unwrap_err(),
        Error::NestingTooDeep { .. }
    ));
}

#[test]
fn oversized_length_prefixes() {
    let headers: [&[u8]; 6] = [
        &[0xdb, 0xff, 0xff, 0xff, 0xff, b'a'],
        &[0xc6, 0xff, 0xff, 0xff, 0xff, 0x00],
        &[0xc9, 0xff, 0xff, 0xff, 0xff, 0x01, 0x00],
        &[0xdd, 0xff, 0xff, 0xff, 0xff, 0xc0],
        &[0xdf, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xc0],
        &[0xde, 0xff, 0xff],
    ];
    for bytes in headers {
        let err = decode(bytes).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput { .. }), "{bytes:02x?}: {err}");
    }
}

#[test]
fn multi_decode_keeps_prefix() {
    let mut bytes = encode(&Value::from(1u8)).unwrap();
    bytes.extend(encode(&Value::from(2u8)).unwrap());
    let boundary = bytes.len();
    bytes.extend([0xc1, 0xc1, 0xc1]);

    let all = decode_all(&bytes);
    assert_eq!(all.values, vec![Value::from(1u8), Value::from(2u8)]);
    assert_eq!(all.offset, boundary);
    let error = all.error.expect("decode_all should report the garbage");
    assert!(!error.to_string().is_empty());
}

#[test]
fn multi_decode_clean_input() {
    let all = decode_all(&[0xc0, 0xc3, 0xa1, b'z']);
    assert_eq!(all.values.len(), 3);
    assert_eq!(all.offset, 4);
    assert!(all.error.is_none());

    let empty = decode_all(&[]);
    assert!(empty.values.is_empty());
    assert_eq!(empty.offset, 0);
    assert!(empty.error.is_none());
}

#[test]
fn multi_decode_truncated_tail() {
    let all = decode_all(&[0x01, 0x92, 0x01]);
    assert_eq!(all.values, vec![Value::from(1u8)]);
    assert_eq!(all.offset, 1);
    assert!(matches!(all.error, Some(Error::TruncatedInput { .. })));
}

#[test]
fn stream_decoding() {
    let mut bytes = encode(&sample()).unwrap();
    bytes.extend(encode(&Value::from("next")).unwrap());
    let mut source = IoReader::new(bytes.as_slice());
    assert_eq!(decode_from(&mut source).unwrap(), sample());
    assert_eq!(decode_from(&mut source).unwrap(), Value::from("next"));
    assert!(matches!(
        decode_from(&mut source).unwrap_err(),
        Error::TruncatedInput { .. }
    ));
}

#[test]
fn str_payloads_are_not_validated() {
    let mut bytes = vec![0x93, 0x01, 0xa3, b'a', 0xc3, 0x28, 0x02];
    let v = decode(&bytes).unwrap();
    assert_eq!(v[1].as_text().unwrap().as_bytes(), [b'a', 0xc3, 0x28]);
    assert!(matches!(v[1].as_str(), Err(Error::InvalidUtf8 { offset: 1 })));
    assert_eq!(v[1].as_text().unwrap().to_str_lossy(), "a\u{fffd}(");
    assert_eq!(encode(&v).unwrap(), bytes);

    bytes.extend([0xa1, 0xff, 0xc0]);
    let all = decode_all(&bytes);
    assert_eq!(all.values.len(), 3);
    assert_eq!(all.offset, bytes.len());
    assert!(all.error.is_none());
}

#[test]
fn trailing_bytes_are_ignored() {
    assert_eq!(decode(&[0x05, 0xc1, 0xc1]).unwrap(), Value::from(5u8));
}
