use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::element::{Element, ElementCounts, ElementKind};
use crate::error::{ConvertError, Result};
use crate::mesh::TetraMesh;
use crate::utils::{parse_float, parse_int, split_fields};

/// Line-oriented reader over one TetGen output file (`.node`, `.edge`, ...).
///
/// The first line is a header whose first token is the row count; every
/// following line is `<row index> <field1> ... <fieldN> [ignored...]`.
pub struct TetgenReader<R> {
    inner: R,
    path: PathBuf,
    line: usize,
    buf: String,
}

impl TetgenReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| ConvertError::open(path, e))?;
        // File::open accepts a directory on Linux
        let meta = f.metadata().map_err(|e| ConvertError::open(path, e))?;
        if meta.is_dir() {
            return Err(ConvertError::FileUnreadable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            });
        }
        Ok(Self::new(BufReader::new(f), path))
    }
}

impl<R: BufRead> TetgenReader<R> {
    /// Wrap an already-open stream; `path` is only used in diagnostics.
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            line: 0,
            buf: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next line into `buf`. Returns `false` at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self
            .inner
            .read_line(&mut self.buf)
            .map_err(|source| ConvertError::FileUnreadable {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }

    /// Read the header line and return its first token as the row count.
    pub fn read_count(&mut self) -> Result<i64> {
        self.next_line()?;
        let line = self.line.max(1);
        let token = self.buf.split_whitespace().next().ok_or_else(|| {
            ConvertError::MalformedHeader {
                path: self.path.clone(),
                line,
                reason: "no row count".to_string(),
            }
        })?;
        parse_int(token).map_err(|reason| ConvertError::MalformedHeader {
            path: self.path.clone(),
            line,
            reason,
        })
    }

    /// Read one data row of `kind`.
    ///
    /// Returns `Ok(None)` on end of input or a blank line; the caller treats
    /// that as a short read and stops reading this file.
    pub fn read_element(&mut self, kind: ElementKind) -> Result<Option<Element>> {
        if !self.next_line()? {
            return Ok(None);
        }
        let fields = split_fields(&self.buf);
        if fields.is_empty() {
            return Ok(None);
        }
        // field 0 is TetGen's own row index
        parse_element(kind, &fields[1..])
            .map(Some)
            .map_err(|reason| ConvertError::MalformedRow {
                path: self.path.clone(),
                line: self.line,
                reason,
            })
    }
}

/// Build an element from the fields following the leading column.
/// Fields past the kind's arity are ignored.
fn parse_element(kind: ElementKind, fields: &[&str]) -> std::result::Result<Element, String> {
    let arity = kind.arity();
    if fields.len() < arity {
        return Err(format!(
            "{kind} row needs {arity} fields, found {}",
            fields.len()
        ));
    }
    let fields = &fields[..arity];
    let element = match kind {
        ElementKind::Vertex => Element::Vertex(floats(fields)?),
        ElementKind::Edge => Element::Edge(ints(fields)?),
        ElementKind::Face => Element::Face(ints(fields)?),
        ElementKind::Tetra => Element::Tetra(ints(fields)?),
        ElementKind::Neighbor => Element::Neighbor(ints(fields)?),
    };
    Ok(element)
}

fn ints<const N: usize>(fields: &[&str]) -> std::result::Result<[i64; N], String> {
    let mut out = [0i64; N];
    for (slot, token) in out.iter_mut().zip(fields) {
        *slot = parse_int(token)?;
    }
    Ok(out)
}

fn floats<const N: usize>(fields: &[&str]) -> std::result::Result<[f64; N], String> {
    let mut out = [0f64; N];
    for (slot, token) in out.iter_mut().zip(fields) {
        *slot = parse_float(token)?;
    }
    Ok(out)
}

/// Read only the five-line count block at the top of a `.tetra` file.
pub fn read_tetra_header(path: impl AsRef<Path>) -> Result<ElementCounts> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| ConvertError::open(path, e))?;
    parse_tetra_header(BufReader::new(f), path)
}

pub fn parse_tetra_header(reader: impl BufRead, path: &Path) -> Result<ElementCounts> {
    header_from_lines(&mut reader.lines(), path)
}

/// Load a whole `.tetra` file.
///
/// Blank lines and lines with an unrecognised tag are skipped. Every kind
/// must have exactly as many rows as its header count.
pub fn read_tetra(path: impl AsRef<Path>) -> Result<TetraMesh> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| ConvertError::open(path, e))?;
    parse_tetra(BufReader::new(f), path)
}

pub fn parse_tetra(reader: impl BufRead, path: &Path) -> Result<TetraMesh> {
    let mut lines = reader.lines();
    let declared = header_from_lines(&mut lines, path)?;

    let mut mesh = TetraMesh::default();
    for (offset, line) in lines.enumerate() {
        let line_no = ElementKind::ALL.len() + 1 + offset;
        let line = line.map_err(|source| unreadable(path, source))?;
        let fields = split_fields(&line);
        let Some(&tag) = fields.first() else {
            continue;
        };
        let Some(kind) = ElementKind::from_prefix(tag) else {
            debug!("{}:{line_no}: skipping line with tag `{tag}`", path.display());
            continue;
        };
        let element =
            parse_element(kind, &fields[1..]).map_err(|reason| ConvertError::MalformedRow {
                path: path.to_path_buf(),
                line: line_no,
                reason,
            })?;
        mesh.push(element);
    }

    for (kind, count) in declared.iter() {
        let found = mesh.len(kind);
        if i64::try_from(found).map_or(true, |found| found != count) {
            return Err(ConvertError::CountMismatch {
                path: path.to_path_buf(),
                kind,
                declared: count,
                found,
            });
        }
    }
    Ok(mesh)
}

fn header_from_lines(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    path: &Path,
) -> Result<ElementCounts> {
    let mut counts = ElementCounts::default();
    for (idx, kind) in ElementKind::ALL.into_iter().enumerate() {
        let line_no = idx + 1;
        let malformed = |reason: String| ConvertError::MalformedHeader {
            path: path.to_path_buf(),
            line: line_no,
            reason,
        };
        let line = match lines.next() {
            Some(line) => line.map_err(|source| unreadable(path, source))?,
            None => return Err(malformed(format!("missing `{}` line", kind.count_tag()))),
        };
        let fields = split_fields(&line);
        match fields.as_slice() {
            [tag, count, ..] if *tag == kind.count_tag() => {
                counts[kind] = parse_int(count).map_err(malformed)?;
            }
            _ => {
                return Err(malformed(format!(
                    "expected `{} <count>`, found `{}`",
                    kind.count_tag(),
                    line.trim()
                )))
            }
        }
    }
    Ok(counts)
}

fn unreadable(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    }
}
