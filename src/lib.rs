//! # xdr-mgf
//!
//! Reader and writer for legacy finite-element mesh data files in the
//! `DEAL`, `MGF` and `LIBM` dialects, stored either as XDR (eXternal Data
//! Representation, RFC 4506) binary or as plain text.
//!
//! ## Overview
//!
//! A mesh file starts with a signature naming the tool that wrote it,
//! followed by flat blocks of 32-bit integers or reals. The surrounding mesh
//! reader decides which blocks to transfer and in which order; this crate
//! only moves them.
//!
//! | Mode | Transport | Signature | Data block |
//! |------|-----------|-----------|------------|
//! | `Encode` / `Decode` | XDR binary | `string<12>` | one XDR vector of `numvar * size` elements |
//! | `WriteAscii` / `ReadAscii` | text | first line | `size` lines of `numvar` values |
//!
//! Signatures:
//!
//! ```text
//! DEAL 003:003
//! MGF  002:000
//! LIBM <levels>
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use xdr_mgf::{Dialect, Mode, Signature, XdrMgf};
//!
//! let mut coords = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
//!
//! let mut out = XdrMgf::with_signature(Signature::mgf());
//! out.init(Mode::WriteAscii, "mesh.mgf")?;
//! out.data_blk(&mut coords, 2, 3)?;
//! out.fini()?;
//!
//! let mut read_back = [0.0; 6];
//! let mut inp = XdrMgf::new();
//! inp.init(Mode::ReadAscii, "mesh.mgf")?;
//! assert_eq!(inp.orig_flag(), Dialect::Mgf);
//! inp.data_blk(&mut read_back, 2, 3)?;
//! assert_eq!(coords, read_back);
//! # Ok::<(), xdr_mgf::Error>(())
//! ```

mod block;
pub mod de;
pub mod element;
pub mod error;
pub mod format;
pub mod handle;
pub mod header;
pub mod ser;
mod text;

pub use de::{Deserializer, from_bytes, from_reader};
pub use element::Element;
pub use error::{Error, Result};
pub use format::{Dialect, Mode};
pub use handle::XdrMgf;
pub use header::{HEADER_LEN, Signature};
pub use ser::{Serializer, to_bytes};
