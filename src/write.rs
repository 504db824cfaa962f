use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::element::{Element, ElementCounts};
use crate::error::{ConvertError, Result};

/// Writer for the consolidated `.tetra` format.
///
/// ```text
/// vc <n>
/// ec <n>
/// fc <n>
/// tc <n>
/// tnc <n>
///
/// v <x> <y> <z>
/// e <i> <j>
/// ...
/// ```
pub struct TetraWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl TetraWriter<BufWriter<File>> {
    /// Create (or truncate) the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|source| ConvertError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(f), path))
    }
}

impl<W: Write> TetraWriter<W> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    /// Five `<tag> <count>` lines followed by one blank line.
    pub fn write_header(&mut self, counts: &ElementCounts) -> Result<()> {
        write_count_lines(&mut self.inner, counts).map_err(|source| self.unwritable(source))
    }

    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        writeln!(self.inner, "{element}").map_err(|source| self.unwritable(source))
    }

    /// Flush buffered output and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(|source| self.unwritable(source))?;
        Ok(self.inner)
    }

    fn unwritable(&self, source: io::Error) -> ConvertError {
        ConvertError::OutputUnwritable {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_count_lines(w: &mut impl Write, counts: &ElementCounts) -> io::Result<()> {
    for (kind, count) in counts.iter() {
        writeln!(w, "{} {count}", kind.count_tag())?;
    }
    writeln!(w)
}
