//! File signature: the first field of every legacy mesh file.
//!
//! ```text
//! DEAL 003:003
//! MGF  002:000
//! LIBM <levels>
//! ```
//!
//! Text files carry the signature as the first line. XDR files carry it as a
//! `string<12>` field, so a binary `LIBM` header fits at most 7 level digits.

use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::format::Dialect;
use crate::ser::Serializer;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Maximum length of the binary signature field.
pub const HEADER_LEN: u32 = 12;

/// Longest binary signature read back whole for an error message.
const HEADER_SCAN_LEN: u32 = 256;

/// Originating dialect plus its payload, as stored in a file header.
///
/// The level count is always 0 unless the dialect is [`Dialect::Libm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature {
    dialect: Dialect,
    levels: u32,
}

impl Signature {
    /// `levels` is dropped for dialects other than `LIBM`.
    pub fn new(dialect: Dialect, levels: u32) -> Self {
        let levels = if dialect == Dialect::Libm { levels } else { 0 };
        Signature { dialect, levels }
    }

    pub fn deal() -> Self {
        Signature::new(Dialect::Deal, 0)
    }

    pub fn mgf() -> Self {
        Signature::new(Dialect::Mgf, 0)
    }

    pub fn libm(levels: u32) -> Self {
        Signature::new(Dialect::Libm, levels)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Number of mesh levels; 0 for `DEAL` and `MGF`.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Classify a header line by its 4-byte tag.
    ///
    /// The tag is compared in full, so `"MGF "` needs its trailing space and
    /// `"MGFX"` is rejected. For `LIBM` the rest of the line is the level count.
    pub fn parse(line: &str) -> Result<Self> {
        let unrecognized = || Error::UnrecognizedHeader(line.to_string());
        match line.as_bytes().get(..4) {
            Some(b"DEAL") => Ok(Signature::deal()),
            Some(b"MGF ") => Ok(Signature::mgf()),
            Some(b"LIBM") => {
                let levels = line[4..].trim().parse().map_err(|_| unrecognized())?;
                Ok(Signature::libm(levels))
            }
            _ => Err(unrecognized()),
        }
    }

    /// Write the signature as an XDR `string<12>`.
    pub fn encode<W: Write>(&self, ser: &mut Serializer<W>) -> Result<()> {
        ser.encode_string(&self.to_string(), HEADER_LEN)
    }

    /// Read and classify an XDR `string<12>` signature.
    ///
    /// A field that is not valid UTF-8 or longer than 12 bytes is reported
    /// like any other unknown header, with its text in the error.
    pub fn decode<R: Read>(de: &mut Deserializer<R>) -> Result<Self> {
        let bytes = match de.decode_opaque(HEADER_SCAN_LEN) {
            Ok(bytes) => bytes,
            Err(Error::LengthOverflow { got, .. }) => {
                return Err(Error::UnrecognizedHeader(format!("<{got}-byte header>")));
            }
            Err(e) => return Err(e),
        };
        let line = String::from_utf8_lossy(&bytes);
        if bytes.len() > HEADER_LEN as usize {
            return Err(Error::UnrecognizedHeader(line.into_owned()));
        }
        Signature::parse(&line)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dialect.version() {
            Some((major, minor)) => write!(f, "{} {:03}:{:03}", self.dialect.tag(), major, minor),
            None => write!(f, "{} {}", self.dialect.tag(), self.levels),
        }
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Signature::parse(s)
    }
}
