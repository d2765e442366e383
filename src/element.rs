//! Element kinds a data block can hold.
//!
//! Mesh files only ever contain 32-bit integers (connectivity, boundary and
//! subdomain ids) and reals (coordinates, field values). Each kind fixes its
//! XDR representation through serde and its text representation through
//! [`Element::write_text`] and [`Element::SEPARATOR`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, Write};

mod private {
    pub trait Sealed {}
}

impl private::Sealed for i32 {}
impl private::Sealed for f64 {}

/// A value that can travel through a data block.
///
/// This trait is sealed: only `i32` (`xdr_int`) and `f64` (`xdr_double`)
/// implement it. The binary real codec is fixed to 8-byte IEEE doubles;
/// extended precision host reals have no representation here.
pub trait Element: private::Sealed + Copy + Serialize + DeserializeOwned {
    /// Short name used in log events.
    const KIND: &'static str;

    /// Written after every value of a text record, including the last one.
    const SEPARATOR: &'static str;

    /// Write the text form of this value (without separator).
    fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()>;

    /// Parse one whitespace-delimited text token.
    fn parse_text(token: &str) -> Option<Self>;
}

impl Element for i32 {
    const KIND: &'static str = "int";
    const SEPARATOR: &'static str = " ";

    fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }

    fn parse_text(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Element for f64 {
    const KIND: &'static str = "real";
    const SEPARATOR: &'static str = " \t";

    /// C `%.16e`: 16 digits after the point, signed exponent of at least two
    /// digits, e.g. `-1.2500000000000000e-03`.
    fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.is_nan() {
            return w.write_all(b"nan");
        }
        if self.is_infinite() {
            let s: &[u8] = if *self < 0.0 { b"-inf" } else { b"inf" };
            return w.write_all(s);
        }
        let s = format!("{self:.16e}");
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(w, "{mantissa}e{sign}{digits:0>2}")
            }
            None => w.write_all(s.as_bytes()),
        }
    }

    fn parse_text(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}
