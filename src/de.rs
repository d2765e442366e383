//! XDR decoder for legacy mesh files (RFC 4506)
//!
//! Reads from any `std::io::Read`, so a binary mesh file can be decoded block
//! by block straight off a buffered file handle.

use crate::error::{Error, Result};
use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use std::io::Read;

/// Deserialize a value from XDR bytes.
pub fn from_bytes<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_reader(input)
}

/// Deserialize a value from an XDR byte stream.
pub fn from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    let mut de = Deserializer::new(reader);
    T::deserialize(&mut de)
}

/// The XDR decoder. Pulls 4-byte aligned items from a reader.
pub struct Deserializer<R: Read> {
    reader: R,
}

impl<R: Read> Deserializer<R> {
    pub fn new(reader: R) -> Self {
        Deserializer { reader }
    }

    /// Consume the deserializer and return the inner reader.
    pub fn into_reader(self) -> R {
        self.reader
    }

    /// XDR bounded opaque (`opaque<max>`), returned as raw bytes.
    ///
    /// Fails with [`Error::LengthOverflow`] when the encoded length exceeds
    /// `max`, before any of the body is consumed.
    pub fn decode_opaque(&mut self, max: u32) -> Result<Vec<u8>> {
        let n = self.read_u32()?;
        if n > max {
            return Err(Error::LengthOverflow {
                max,
                got: n.into(),
            });
        }
        self.read_padded_bytes(n as usize)
    }

    /// XDR bounded string (`string<max>`).
    pub fn decode_string(&mut self, max: u32) -> Result<String> {
        let bytes = self.decode_opaque(max)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidString)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read a big-endian u32 (XDR basic block)
    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    /// Read `n` bytes of data plus their 0–3 padding bytes.
    ///
    /// The buffer grows with the bytes actually read, so a corrupt length
    /// ends in `UnexpectedEof` rather than a huge allocation.
    fn read_padded_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.by_ref().take(n as u64).read_to_end(&mut data)?;
        if data.len() != n {
            return Err(Error::UnexpectedEof);
        }
        let remainder = n % 4;
        if remainder != 0 {
            let mut pad = [0u8; 3];
            self.reader.read_exact(&mut pad[..4 - remainder])?;
        }
        Ok(data)
    }

    fn read_variable_opaque(&mut self) -> Result<Vec<u8>> {
        let n = self.read_u32()? as usize;
        self.read_padded_bytes(n)
    }
}

// ── Main Deserializer impl ─────────────────────────────────────────────────

impl<'de, 'a, R: Read> de::Deserializer<'de> for &'a mut Deserializer<R> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported(
            "self-describing data (XDR mesh files carry no type tags)",
        ))
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.read_u32()? {
            0 => visitor.visit_bool(false),
            1 => visitor.visit_bool(true),
            v => Err(Error::InvalidBool(v)),
        }
    }

    fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i8(self.read_i32()? as i8)
    }

    fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i16(self.read_i32()? as i16)
    }

    fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i32(self.read_i32()?)
    }

    fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i64(i64::from_be_bytes(self.take()?))
    }

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u8(self.read_u32()? as u8)
    }

    fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u16(self.read_u32()? as u16)
    }

    fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(self.read_u32()?)
    }

    fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u64(u64::from_be_bytes(self.take()?))
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f32(f32::from_be_bytes(self.take()?))
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f64(f64::from_be_bytes(self.take()?))
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let bytes = self.read_variable_opaque()?;
        let s = String::from_utf8(bytes).map_err(|_| Error::InvalidString)?;
        visitor.visit_string(s)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.deserialize_byte_buf(visitor)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.read_variable_opaque()?)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    /// `xdr_vector`: fixed length, no count prefix
    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(FixedSeq::new(self, len))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(FixedSeq::new(self, len))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(FixedSeq::new(self, fields.len()))
    }

    serde::forward_to_deserialize_any! {
        i128 u128 char option seq map enum identifier ignored_any
    }
}

// ── FixedSeq: known element count ──────────────────────────────────────────

struct FixedSeq<'a, R: Read> {
    de: &'a mut Deserializer<R>,
    remaining: usize,
}

impl<'a, R: Read> FixedSeq<'a, R> {
    fn new(de: &'a mut Deserializer<R>, count: usize) -> Self {
        FixedSeq {
            de,
            remaining: count,
        }
    }
}

impl<'de, 'a, R: Read> SeqAccess<'de> for FixedSeq<'a, R> {
    type Error = Error;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.remaining)
    }
}
