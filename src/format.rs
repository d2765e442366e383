//! Access modes and originating file dialects.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a file is accessed: transport (XDR binary or text) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Write XDR binary (`ENCODE`)
    Encode,
    /// Read XDR binary (`DECODE`)
    Decode,
    /// Write plain text (`W_ASCII`)
    WriteAscii,
    /// Read plain text (`R_ASCII`)
    ReadAscii,
}

impl Mode {
    pub fn is_binary(self) -> bool {
        matches!(self, Mode::Encode | Mode::Decode)
    }

    pub fn is_write(self) -> bool {
        matches!(self, Mode::Encode | Mode::WriteAscii)
    }

    /// The legacy name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "ENCODE",
            Mode::Decode => "DECODE",
            Mode::WriteAscii => "W_ASCII",
            Mode::ReadAscii => "R_ASCII",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy codes: ENCODE = 0, DECODE = 1, W_ASCII = 2, R_ASCII = 3.
impl TryFrom<i32> for Mode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            0 => Ok(Mode::Encode),
            1 => Ok(Mode::Decode),
            2 => Ok(Mode::WriteAscii),
            3 => Ok(Mode::ReadAscii),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "ENCODE" => Ok(Mode::Encode),
            "DECODE" => Ok(Mode::Decode),
            "W_ASCII" => Ok(Mode::WriteAscii),
            "R_ASCII" => Ok(Mode::ReadAscii),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// The legacy tool that produced a mesh file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// deal.II style, version 3:3
    #[default]
    Deal,
    /// MGF style, version 2:0
    Mgf,
    /// libMesh style, carries a level count
    Libm,
}

impl Dialect {
    /// The 4-byte header tag, including the trailing space of `"MGF "`.
    pub fn tag(self) -> &'static str {
        match self {
            Dialect::Deal => "DEAL",
            Dialect::Mgf => "MGF ",
            Dialect::Libm => "LIBM",
        }
    }

    /// The fixed `(major, minor)` header version, if the dialect has one.
    pub fn version(self) -> Option<(u32, u32)> {
        match self {
            Dialect::Deal => Some((3, 3)),
            Dialect::Mgf => Some((2, 0)),
            Dialect::Libm => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}

/// Legacy codes: DEAL = 0, MGF = 1, LIBM = 2.
impl TryFrom<i32> for Dialect {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            0 => Ok(Dialect::Deal),
            1 => Ok(Dialect::Mgf),
            2 => Ok(Dialect::Libm),
            other => Err(Error::UnknownDialect(other.to_string())),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "DEAL" => Ok(Dialect::Deal),
            "MGF" => Ok(Dialect::Mgf),
            "LIBM" => Ok(Dialect::Libm),
            other => Err(Error::UnknownDialect(other.to_string())),
        }
    }
}
