//! XDR encoder for legacy mesh files (RFC 4506)
//!
//! The [`Serializer`] is generic over any `W: std::io::Write`. Binary mesh
//! files are produced by `xdrstdio` streams, which only ever emit a handful of
//! XDR items, so this serializer covers exactly those:
//!
//! - Integers: 4 bytes (signed or unsigned), Hyper: 8 bytes, all big-endian
//! - Floats: IEEE 754, 4 bytes; Doubles: 8 bytes
//! - Strings/Bytes: 4-byte length prefix + data + 0–3 zero-padding bytes
//! - Fixed-length vectors (tuples) and structs: elements consecutively, no prefix
//!
//! Optional data, discriminated unions, counted arrays and maps never appear
//! in a mesh file and are rejected with [`Error::Unsupported`].

use crate::error::{Error, Result};
use serde::ser::{self, Impossible, Serialize};
use std::io::Write;

// ── Public entry points ────────────────────────────────────────────────────

/// Serialize `value` into a freshly allocated `Vec<u8>` of XDR bytes.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::new());
    value.serialize(&mut ser)?;
    Ok(ser.into_writer())
}

// ── Serializer ─────────────────────────────────────────────────────────────

/// The XDR encoder. Generic over any `W: Write`.
///
/// ```rust
/// use xdr_mgf::ser::Serializer;
/// use serde::Serialize;
///
/// let mut buf = Vec::new();
/// let mut ser = Serializer::new(&mut buf);
/// (1i32, 2.5f64).serialize(&mut ser).unwrap();
/// assert_eq!(buf.len(), 12);
/// ```
pub struct Serializer<W: Write> {
    writer: W,
}

impl<W: Write> Serializer<W> {
    /// Create a new serializer that writes into `writer`.
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    /// Consume the serializer and return the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }

    /// XDR bounded string (`string<max>`): 4-byte length + padded bytes.
    ///
    /// Fails with [`Error::LengthOverflow`] when `s` is longer than `max`,
    /// the same check `xdr_string` applies on encode.
    pub fn encode_string(&mut self, s: &str, max: u32) -> Result<()> {
        let got = s.len() as u64;
        if got > u64::from(max) {
            return Err(Error::LengthOverflow { max, got });
        }
        self.write_opaque_variable(s.as_bytes())
    }

    // ── Internal helpers ───────────────────────────────────────────────────

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.writer.write_all(bytes)?)
    }

    fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// Write `bytes` followed by enough zero bytes to reach a 4-byte boundary.
    fn write_padded_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes)?;
        let remainder = bytes.len() % 4;
        if remainder != 0 {
            let pad = [0u8; 3];
            self.write_all(&pad[..4 - remainder])?;
        }
        Ok(())
    }

    /// XDR variable-length opaque: 4-byte length + padded data.
    fn write_opaque_variable(&mut self, bytes: &[u8]) -> Result<()> {
        let len = u32::try_from(bytes.len()).map_err(|_| Error::LengthOverflow {
            max: u32::MAX,
            got: bytes.len() as u64,
        })?;
        self.write_u32(len)?;
        self.write_padded_bytes(bytes)
    }
}

// ── serde::Serializer impl ─────────────────────────────────────────────────

impl<'a, W: Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    /// XDR Bool → 4-byte unsigned int: 0 (false) or 1 (true)
    fn serialize_bool(self, v: bool) -> Result<()> {
        self.write_u32(u32::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.write_i32(v.into())
    }
    fn serialize_i16(self, v: i16) -> Result<()> {
        self.write_i32(v.into())
    }
    /// `xdr_int`: 4 bytes, big-endian, two's complement
    fn serialize_i32(self, v: i32) -> Result<()> {
        self.write_i32(v)
    }
    fn serialize_i64(self, v: i64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.write_u32(v.into())
    }
    fn serialize_u16(self, v: u16) -> Result<()> {
        self.write_u32(v.into())
    }
    fn serialize_u32(self, v: u32) -> Result<()> {
        self.write_u32(v)
    }
    fn serialize_u64(self, v: u64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }
    /// `xdr_double`: IEEE 754, 8 bytes
    fn serialize_f64(self, v: f64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(Error::Unsupported("char"))
    }

    /// Unbounded XDR string. Use [`Serializer::encode_string`] for `string<max>`.
    fn serialize_str(self, v: &str) -> Result<()> {
        self.write_opaque_variable(v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.write_opaque_variable(v)
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::Unsupported("optional data"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<()> {
        Err(Error::Unsupported("optional data"))
    }

    /// XDR void: 0 bytes
    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::Unsupported("counted array"))
    }

    /// `xdr_vector`: fixed-length array, elements without a length prefix
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("map"))
    }

    /// XDR structure: fields encoded consecutively, no count prefix
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("enum"))
    }
}

// ── Compound serializer impls ──────────────────────────────────────────────

impl<'a, W: Write> ser::SerializeTuple for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, W: Write> ser::SerializeTupleStruct for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, W: Write> ser::SerializeStruct for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}
