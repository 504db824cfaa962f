use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::element::{ElementCounts, ElementKind};
use crate::error::Result;
use crate::read::TetgenReader;
use crate::write::TetraWriter;

/// Base name of the mesh the binary converts.
pub const DEFAULT_BASENAME: &str = "softbunny";

/// File names of one TetGen run and of the `.tetra` file made from it.
///
/// Inputs are `<dir>/<basename>.1.<ext>`, output is `<dir>/<basename>.tetra`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TetgenPaths {
    dir: PathBuf,
    basename: String,
}

impl TetgenPaths {
    pub fn new(dir: impl Into<PathBuf>, basename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            basename: basename.into(),
        }
    }

    pub fn input(&self, kind: ElementKind) -> PathBuf {
        self.dir
            .join(format!("{}.1.{}", self.basename, kind.extension()))
    }

    pub fn output(&self) -> PathBuf {
        self.dir.join(format!("{}.tetra", self.basename))
    }
}

/// `softbunny` in the working directory.
impl Default for TetgenPaths {
    fn default() -> Self {
        Self::new(PathBuf::new(), DEFAULT_BASENAME)
    }
}

/// The five open TetGen files of one run.
pub struct TetgenInputs<R> {
    vertex: TetgenReader<R>,
    edge: TetgenReader<R>,
    face: TetgenReader<R>,
    tetra: TetgenReader<R>,
    neighbor: TetgenReader<R>,
}

impl TetgenInputs<BufReader<File>> {
    /// Open every input in processing order; the first failure aborts.
    pub fn open(paths: &TetgenPaths) -> Result<Self> {
        Ok(Self::new(
            TetgenReader::open(paths.input(ElementKind::Vertex))?,
            TetgenReader::open(paths.input(ElementKind::Edge))?,
            TetgenReader::open(paths.input(ElementKind::Face))?,
            TetgenReader::open(paths.input(ElementKind::Tetra))?,
            TetgenReader::open(paths.input(ElementKind::Neighbor))?,
        ))
    }
}

impl<R: BufRead> TetgenInputs<R> {
    pub fn new(
        vertex: TetgenReader<R>,
        edge: TetgenReader<R>,
        face: TetgenReader<R>,
        tetra: TetgenReader<R>,
        neighbor: TetgenReader<R>,
    ) -> Self {
        Self {
            vertex,
            edge,
            face,
            tetra,
            neighbor,
        }
    }

    pub fn reader_mut(&mut self, kind: ElementKind) -> &mut TetgenReader<R> {
        match kind {
            ElementKind::Vertex => &mut self.vertex,
            ElementKind::Edge => &mut self.edge,
            ElementKind::Face => &mut self.face,
            ElementKind::Tetra => &mut self.tetra,
            ElementKind::Neighbor => &mut self.neighbor,
        }
    }
}

/// Outcome of one conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Counts taken from the input headers (and written to the output header).
    pub declared: ElementCounts,
    /// Rows actually emitted per kind.
    pub written: ElementCounts,
}

impl ConversionSummary {
    /// `false` when some input ran out of rows before its header count.
    pub fn is_complete(&self) -> bool {
        ElementKind::ALL
            .into_iter()
            .all(|k| self.written[k] == self.declared[k].max(0))
    }
}

/// Convert the TetGen files named by `paths` into `paths.output()`.
///
/// All inputs are opened before the output is created, so a missing input
/// leaves any existing `.tetra` file untouched. Every handle is closed when
/// this returns, on success or error.
pub fn convert(paths: &TetgenPaths) -> Result<ConversionSummary> {
    let mut inputs = TetgenInputs::open(paths)?;
    let mut output = TetraWriter::create(paths.output())?;
    let summary = convert_streams(&mut inputs, &mut output)?;
    output.finish()?;
    info!(
        "wrote {} ({} vertices, {} edges, {} faces, {} tetras, {} neighbors)",
        paths.output().display(),
        summary.written[ElementKind::Vertex],
        summary.written[ElementKind::Edge],
        summary.written[ElementKind::Face],
        summary.written[ElementKind::Tetra],
        summary.written[ElementKind::Neighbor],
    );
    Ok(summary)
}

/// Stream-level conversion: headers first, then each kind in order.
///
/// Rows are written as soon as they are parsed. A kind whose file runs out
/// (end of input or a blank line) before its header count is cut short
/// and processing moves on to the next kind.
pub fn convert_streams<R: BufRead, W: Write>(
    inputs: &mut TetgenInputs<R>,
    output: &mut TetraWriter<W>,
) -> Result<ConversionSummary> {
    let mut declared = ElementCounts::default();
    for kind in ElementKind::ALL {
        declared[kind] = inputs.reader_mut(kind).read_count()?;
    }
    output.write_header(&declared)?;

    let mut written = ElementCounts::default();
    for kind in ElementKind::ALL {
        let reader = inputs.reader_mut(kind);
        let count = declared[kind];
        let mut cnt = 0;
        while cnt < count {
            let Some(element) = reader.read_element(kind)? else {
                warn!(
                    "{}: header declares {count} rows but input ends after {cnt}",
                    reader.path().display()
                );
                break;
            };
            output.write_element(&element)?;
            cnt += 1;
        }
        written[kind] = cnt;
        info!("{}: {cnt} {kind} rows", reader.path().display());
    }

    Ok(ConversionSummary { declared, written })
}
