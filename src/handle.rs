//! The file handle: one open stream per access mode.

use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::format::{Dialect, Mode};
use crate::header::Signature;
use crate::ser::Serializer;
use crate::text::{TextReader, TextWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// The stream owned by an open handle. Each variant holds only what its mode
/// needs.
pub(crate) enum Transport {
    Encode(Serializer<BufWriter<File>>),
    Decode(Deserializer<BufReader<File>>),
    WriteAscii(TextWriter<BufWriter<File>>),
    ReadAscii(TextReader<BufReader<File>>),
}

impl Transport {
    fn open(mode: Mode, path: &Path) -> Result<Self> {
        let file = if mode.is_write() {
            File::create(path)
        } else {
            File::open(path)
        }
        .map_err(|e| Error::FileAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(match mode {
            Mode::Encode => Transport::Encode(Serializer::new(BufWriter::new(file))),
            Mode::Decode => Transport::Decode(Deserializer::new(BufReader::new(file))),
            Mode::WriteAscii => Transport::WriteAscii(TextWriter::new(BufWriter::new(file))),
            Mode::ReadAscii => Transport::ReadAscii(TextReader::new(BufReader::new(file))),
        })
    }

    pub(crate) fn mode(&self) -> Mode {
        match self {
            Transport::Encode(_) => Mode::Encode,
            Transport::Decode(_) => Mode::Decode,
            Transport::WriteAscii(_) => Mode::WriteAscii,
            Transport::ReadAscii(_) => Mode::ReadAscii,
        }
    }

    /// Write the signature, or read and classify it.
    fn transfer_header(&mut self, signature: Signature) -> Result<Signature> {
        match self {
            Transport::Encode(ser) => signature.encode(ser).map(|()| signature),
            Transport::Decode(de) => Signature::decode(de),
            Transport::WriteAscii(w) => w.write_line(&signature.to_string()).map(|()| signature),
            Transport::ReadAscii(r) => Signature::parse(&r.read_line()?),
        }
    }

    /// Flush pending output. The file itself is closed when `self` drops.
    fn close(self) -> Result<()> {
        match self {
            Transport::Encode(mut ser) => ser.flush(),
            Transport::WriteAscii(mut w) => w.flush(),
            Transport::Decode(_) | Transport::ReadAscii(_) => Ok(()),
        }
    }
}

/// A legacy mesh data file opened in one of the four access modes.
///
/// The handle starts closed. [`XdrMgf::init`] opens a file and transfers its
/// signature; [`XdrMgf::data_blk`] then moves data blocks; [`XdrMgf::fini`]
/// (or dropping the handle) closes it again.
///
/// ```rust,no_run
/// use xdr_mgf::{Mode, Signature, XdrMgf};
///
/// let mut out = XdrMgf::with_signature(Signature::libm(2));
/// out.init(Mode::Encode, "mesh.xdr")?;
/// let mut conn = [0, 1, 2, 1, 2, 3];
/// out.data_blk(&mut conn, 3, 2)?;
/// out.fini()?;
///
/// let mut inp = XdrMgf::new();
/// inp.init(Mode::Decode, "mesh.xdr")?;
/// assert_eq!(inp.num_levels(), 2);
/// # Ok::<(), xdr_mgf::Error>(())
/// ```
#[derive(Default)]
pub struct XdrMgf {
    pub(crate) transport: Option<Transport>,
    path: Option<PathBuf>,
    signature: Signature,
}

impl XdrMgf {
    /// A closed handle that will write a `DEAL` signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// A closed handle that will write `signature` when opened for writing.
    pub fn with_signature(signature: Signature) -> Self {
        XdrMgf {
            transport: None,
            path: None,
            signature,
        }
    }

    /// Open `path` in `mode` and transfer the file signature.
    ///
    /// Any file already open is closed first. Write modes write the current
    /// signature; read modes replace it with the one found in the file. On
    /// error the handle is left closed.
    pub fn init<P: AsRef<Path>>(&mut self, mode: Mode, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Err(e) = self.fini() {
            tracing::warn!(error = %e, "failed to close previous mesh file");
        }

        let mut transport = Transport::open(mode, path)?;
        let signature = transport.transfer_header(self.signature)?;
        tracing::debug!(
            %mode,
            path = %path.display(),
            dialect = %signature.dialect(),
            levels = signature.levels(),
            "opened mesh file"
        );

        self.signature = signature;
        self.transport = Some(transport);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Flush and close the open file, if any. Calling it again is a no-op.
    pub fn fini(&mut self) -> Result<()> {
        let Some(transport) = self.transport.take() else {
            return Ok(());
        };
        let mode = transport.mode();
        let result = transport.close();
        if let Some(path) = self.path.take() {
            tracing::debug!(%mode, path = %path.display(), "closed mesh file");
        }
        result
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// The access mode, or `None` while closed.
    pub fn mode(&self) -> Option<Mode> {
        self.transport.as_ref().map(Transport::mode)
    }

    /// The path of the open file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// The originating dialect: the one to write, or the one last read.
    pub fn orig_flag(&self) -> Dialect {
        self.signature.dialect()
    }

    /// Mesh levels of a `LIBM` file; 0 for the other dialects.
    pub fn num_levels(&self) -> u32 {
        self.signature.levels()
    }

    pub fn set_signature(&mut self, signature: Signature) {
        self.signature = signature;
    }

    /// Switching away from `LIBM` resets the level count to 0.
    pub fn set_orig_flag(&mut self, dialect: Dialect) {
        self.signature = Signature::new(dialect, self.signature.levels());
    }

    /// Ignored unless the dialect is `LIBM`.
    pub fn set_num_levels(&mut self, levels: u32) {
        self.signature = Signature::new(self.signature.dialect(), levels);
    }
}

impl Drop for XdrMgf {
    fn drop(&mut self) {
        if let Err(e) = self.fini() {
            tracing::warn!(error = %e, "failed to close mesh file on drop");
        }
    }
}
