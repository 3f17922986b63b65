//! Tape file sink
//!
//! [`TapeWriter`] wraps the output stream the encoded blocks land in. It is
//! append-only: entries go out at the current position, which in
//! [`OpenMode::Append`] is the end of the already recorded stream.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::entry::CasEntry;
use crate::error::CasResult;

/// How the target tape file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Truncate an existing file, or create a fresh one.
    Create,
    /// Keep the existing blocks and write behind them. The file is created
    /// when missing.
    Append,
}

/// Append-only sink for CAS tape entries.
#[derive(Debug)]
pub struct TapeWriter<W: Write> {
    inner: W,
}

impl TapeWriter<BufWriter<File>> {
    /// Open `path` as a buffered tape sink in the given mode.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = match mode {
            OpenMode::Create => File::create(path)?,
            OpenMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
        };
        debug!(path = %path.display(), ?mode, "opened tape sink");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TapeWriter<W> {
    /// Wrap an already open sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Encode `entry` and append its blocks to the sink.
    ///
    /// A failed entry (address overflow) contributes nothing to the sink;
    /// validation runs before the first byte is emitted.
    pub fn write_entry(&mut self, entry: &CasEntry) -> CasResult<()> {
        entry.write_to(&mut self.inner)?;
        debug!(
            name = ?entry.name().map(ToString::to_string),
            payload = entry.payload_len(),
            "wrote tape entry"
        );
        Ok(())
    }

    /// Flush buffered blocks and hand back the inner sink.
    pub fn finish(mut self) -> CasResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
