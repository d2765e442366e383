//! Data block transfer.
//!
//! A block is `size` records of `numvar` values stored flat in the caller's
//! buffer. Binary files hold it as a single XDR vector; text files hold one
//! record per line.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::handle::{Transport, XdrMgf};
use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::ser::{self, SerializeTuple};
use std::fmt;

impl XdrMgf {
    /// Write `array` to, or fill it from, the open file.
    ///
    /// Returns `numvar * size` whatever the mode. Only the first
    /// `numvar * size` elements of `array` are touched.
    pub fn data_blk<T: Element>(
        &mut self,
        array: &mut [T],
        numvar: usize,
        size: usize,
    ) -> Result<usize> {
        let transport = self
            .transport
            .as_mut()
            .ok_or_else(|| Error::InvalidMode("no file is open".to_string()))?;

        let total = numvar.saturating_mul(size);
        if array.len() < total {
            return Err(Error::BufferTooSmall {
                need: total,
                got: array.len(),
            });
        }
        if size == 0 {
            return Ok(0);
        }
        let block = &mut array[..total];
        let mode = transport.mode();

        match transport {
            Transport::Encode(enc) => {
                let mut vector = ser::Serializer::serialize_tuple(&mut *enc, total)?;
                for v in block.iter() {
                    vector.serialize_element(v)?;
                }
                vector.end()?;
            }
            Transport::Decode(dec) => BlockSeed(block).deserialize(&mut *dec)?,
            Transport::WriteAscii(w) => {
                for record in 0..size {
                    w.write_record(&block[record * numvar..(record + 1) * numvar])?;
                }
                w.flush()?;
            }
            Transport::ReadAscii(r) => {
                for record in 0..size {
                    r.read_record(&mut block[record * numvar..(record + 1) * numvar], record)?;
                }
            }
        }

        tracing::debug!(
            %mode,
            kind = T::KIND,
            numvar,
            size,
            "transferred data block"
        );
        Ok(total)
    }
}

/// Fills a slice in place from an XDR vector of the same length.
struct BlockSeed<'a, T>(&'a mut [T]);

impl<'de, T: Element> DeserializeSeed<'de> for BlockSeed<'_, T> {
    type Value = ();

    fn deserialize<D: de::Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<(), D::Error> {
        let len = self.0.len();
        deserializer.deserialize_tuple(len, self)
    }
}

impl<'de, T: Element> Visitor<'de> for BlockSeed<'_, T> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a vector of {} {} values", self.0.len(), T::KIND)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<(), A::Error> {
        for i in 0..self.0.len() {
            match seq.next_element()? {
                Some(v) => self.0[i] = v,
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        Ok(())
    }
}
