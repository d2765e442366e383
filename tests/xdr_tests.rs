use serde::{Deserialize, Serialize};
use xdr_mgf::{Deserializer, Error, Serializer, from_bytes, from_reader, to_bytes};


#[test]
fn test_i32_min_max() {
    for v in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(v, from_bytes::<i32>(&to_bytes(&v).unwrap()).unwrap());
    }
}

#[test]
fn test_i32_big_endian_twos_complement() {
    assert_eq!(to_bytes(&-2i32).unwrap(), [0xFF, 0xFF, 0xFF, 0xFE]);
    assert_eq!(to_bytes(&0x01020304i32).unwrap(), [1, 2, 3, 4]);
}

#[test]
fn test_u32_big_endian() {
    let bytes = to_bytes(&0xDEADBEEFu32).unwrap();
    assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_bool_is_four_bytes() {
    assert_eq!(to_bytes(&true).unwrap(), [0, 0, 0, 1]);
    assert!(!from_bytes::<bool>(&[0, 0, 0, 0]).unwrap());
}

#[test]
fn test_f64_double_layout() {
    let bytes = to_bytes(&1.0f64).unwrap();
    assert_eq!(bytes, [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_f64_roundtrip_bits() {
    for v in [std::f64::consts::PI, -0.0, f64::MIN_POSITIVE, f64::INFINITY, f64::NAN] {
        let decoded: f64 = from_bytes(&to_bytes(&v).unwrap()).unwrap();
        assert_eq!(v.to_bits(), decoded.to_bits());
    }
}

#[test]
fn test_string_padding() {
    for (s, total) in [("", 4usize), ("A", 8), ("ABCD", 8), ("LIBM 5", 12), ("DEAL 003:003", 16)] {
        let bytes = to_bytes(s).unwrap();
        assert_eq!(bytes.len(), total, "string {:?}", s);
        assert_eq!(&bytes[..4], (s.len() as u32).to_be_bytes());
        for &b in &bytes[4 + s.len()..] {
            assert_eq!(b, 0, "non-zero pad for {:?}", s);
        }
        assert_eq!(s.to_string(), from_bytes::<String>(&bytes).unwrap());
    }
}

#[test]
fn test_bounded_string_within_limit() {
    let mut buf = Vec::new();
    Serializer::new(&mut buf).encode_string("MGF  002:000", 12).unwrap();
    assert_eq!(buf.len(), 16);

    let mut de = Deserializer::new(&buf[..]);
    assert_eq!(de.decode_string(12).unwrap(), "MGF  002:000");
}

#[test]
fn test_bounded_string_overflow() {
    let mut buf = Vec::new();
    let err = Serializer::new(&mut buf).encode_string("LIBM 12345678", 12).unwrap_err();
    assert_eq!(err, Error::LengthOverflow { max: 12, got: 13 });
    assert!(buf.is_empty());

    let bytes = to_bytes("LIBM 12345678").unwrap();
    let err = Deserializer::new(&bytes[..]).decode_string(12).unwrap_err();
    assert_eq!(err, Error::LengthOverflow { max: 12, got: 13 });
}

#[test]
fn test_vector_no_count_prefix() {
    let v: [i32; 3] = [1, 2, 3];
    let bytes = to_bytes(&v).unwrap();
    assert_eq!(bytes, [0,0,0,1, 0,0,0,2, 0,0,0,3]);
    assert_eq!(v, from_bytes::<[i32; 3]>(&bytes).unwrap());
}

#[test]
fn test_tuple_mixed_widths() {
    let v = (7i32, 0.5f64);
    let bytes = to_bytes(&v).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(v, from_bytes::<(i32, f64)>(&bytes).unwrap());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct NodeRecord { id: i32, x: f64, y: f64, boundary: bool }

#[test]
fn test_struct_fields_consecutive() {
    let n = NodeRecord { id: 12, x: 0.25, y: -1.5, boundary: true };
    let bytes = to_bytes(&n).unwrap();
    assert_eq!(bytes.len(), 4 + 8 + 8 + 4);
    assert_eq!(&bytes[..4], [0, 0, 0, 12]);
    assert_eq!(n, from_bytes(&bytes).unwrap());
}

#[test]
fn test_unit_void() {
    assert_eq!(to_bytes(&()).unwrap().len(), 0);
    from_bytes::<()>(&[]).unwrap();
}

#[test]
fn test_counted_array_unsupported() {
    let err = to_bytes(&vec![1u32, 2, 3]).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    assert!(matches!(from_bytes::<Vec<u32>>(&[0, 0, 0, 0]), Err(Error::Unsupported(_))));
}

#[test]
fn test_optional_data_unsupported() {
    assert!(matches!(to_bytes(&Some(1i32)), Err(Error::Unsupported(_))));
    assert!(matches!(to_bytes(&Option::<i32>::None), Err(Error::Unsupported(_))));
}

#[test]
fn test_error_unexpected_eof() {
    let result = from_bytes::<i32>(&[0, 0, 0]);
    assert_eq!(result.unwrap_err(), Error::UnexpectedEof);
    let result = from_bytes::<f64>(&[0, 0, 0, 0]);
    assert_eq!(result.unwrap_err(), Error::UnexpectedEof);
}

#[test]
fn test_error_invalid_bool() {
    assert_eq!(from_bytes::<bool>(&[0, 0, 0, 2]).unwrap_err(), Error::InvalidBool(2));
}

#[test]
fn test_corrupt_length_is_eof_not_allocation() {
    let bytes = [0xFF, 0xFF, 0xFF, 0xFF, b'a', b'b'];
    assert_eq!(from_bytes::<String>(&bytes).unwrap_err(), Error::UnexpectedEof);

    let mut de = Deserializer::new(&bytes[..]);
    assert_eq!(
        de.decode_opaque(u32::MAX).unwrap_err(),
        Error::UnexpectedEof
    );
}

#[test]
fn test_error_invalid_string() {
    let bytes = [0, 0, 0, 2, 0xFF, 0xFE, 0, 0];
    assert_eq!(from_bytes::<String>(&bytes).unwrap_err(), Error::InvalidString);
}

#[test]
fn test_from_reader_consecutive_items() {
    let mut buf = Vec::new();
    let mut ser = Serializer::new(&mut buf);
    ser.encode_string("LIBM 3", 12).unwrap();
    [4i32, 5, 6].serialize(&mut ser).unwrap();

    let mut cursor = std::io::Cursor::new(buf);
    let mut de = Deserializer::new(&mut cursor);
    assert_eq!(de.decode_string(12).unwrap(), "LIBM 3");
    assert_eq!([4, 5, 6], <[i32; 3]>::deserialize(&mut de).unwrap());
    let rest = de.into_reader();
    assert_eq!(rest.position() as usize, rest.get_ref().len());
}

#[test]
fn test_from_reader_cursor() {
    let bytes = to_bytes(&[1.5f64, -2.0]).unwrap();
    let decoded: [f64; 2] = from_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(decoded, [1.5, -2.0]);
}
