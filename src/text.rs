//! Plain text transport.
//!
//! Text mesh files were written with formatted stream insertion and read back
//! with whitespace-skipping extraction. [`TextReader`] and [`TextWriter`]
//! reproduce that token and line behaviour over buffered I/O.

use crate::element::Element;
use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};

/// Whitespace-token reader that remembers whether end of input was hit.
pub(crate) struct TextReader<R: BufRead> {
    reader: R,
    eof: bool,
}

impl<R: BufRead> TextReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        TextReader { reader, eof: false }
    }

    /// False once a read ran into end of input.
    pub(crate) fn good(&self) -> bool {
        !self.eof
    }

    /// Read one line, without its `'\n'`.
    pub(crate) fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let n = self.reader.read_until(b'\n', &mut line)?;
        if n == 0 || line.last() != Some(&b'\n') {
            self.eof = true;
        } else {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Read one record of `out.len()` values, then skip one character.
    pub(crate) fn read_record<T: Element>(&mut self, out: &mut [T], record: usize) -> Result<()> {
        if !self.good() {
            return Err(Error::StreamState {
                record,
                reason: "end of input reached before record".to_string(),
            });
        }
        for slot in out.iter_mut() {
            let token = self.read_token()?.ok_or_else(|| Error::StreamState {
                record,
                reason: format!("end of input while reading {} value", T::KIND),
            })?;
            *slot = T::parse_text(&token).ok_or_else(|| Error::StreamState {
                record,
                reason: format!("cannot parse '{token}' as {} value", T::KIND),
            })?;
        }
        self.ignore()
    }

    /// Consume a single character, usually the record's newline.
    fn ignore(&mut self) -> Result<()> {
        let available = !self.reader.fill_buf()?.is_empty();
        if available {
            self.reader.consume(1);
        } else {
            self.eof = true;
        }
        Ok(())
    }

    /// Skip leading whitespace. Returns false at end of input.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            let n = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let exhausted = n == buf.len();
            self.reader.consume(n);
            if !exhausted {
                return Ok(true);
            }
        }
    }

    fn read_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            self.eof = true;
            return Ok(None);
        }
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            let done = n < buf.len();
            token.extend_from_slice(&buf[..n]);
            self.reader.consume(n);
            if done {
                break;
            }
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

/// Line writer for text mesh files.
pub(crate) struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub(crate) fn new(writer: W) -> Self {
        TextWriter { writer }
    }

    pub(crate) fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Every value is followed by the element separator, then `'\n'`.
    pub(crate) fn write_record<T: Element>(&mut self, values: &[T]) -> Result<()> {
        for v in values {
            v.write_text(&mut self.writer)?;
            self.writer.write_all(T::SEPARATOR.as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}
