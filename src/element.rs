use std::fmt;
use std::ops::{Index, IndexMut};

use crate::utils::format_float;

/// The five kinds of rows TetGen writes, one file per kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
    Tetra,
    Neighbor,
}

impl ElementKind {
    /// Processing order, which is also the order of the `.tetra` header block.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Vertex,
        ElementKind::Edge,
        ElementKind::Face,
        ElementKind::Tetra,
        ElementKind::Neighbor,
    ];

    /// Extension of the TetGen file holding this kind (`<name>.1.<ext>`).
    pub fn extension(self) -> &'static str {
        match self {
            ElementKind::Vertex => "node",
            ElementKind::Edge => "edge",
            ElementKind::Face => "face",
            ElementKind::Tetra => "ele",
            ElementKind::Neighbor => "neigh",
        }
    }

    /// Tag of this kind's line in the `.tetra` header block.
    pub fn count_tag(self) -> &'static str {
        match self {
            ElementKind::Vertex => "vc",
            ElementKind::Edge => "ec",
            ElementKind::Face => "fc",
            ElementKind::Tetra => "tc",
            ElementKind::Neighbor => "tnc",
        }
    }

    /// Leading tag of this kind's row lines in the `.tetra` file.
    pub fn prefix(self) -> &'static str {
        match self {
            ElementKind::Vertex => "v",
            ElementKind::Edge => "e",
            ElementKind::Face => "f",
            ElementKind::Tetra => "t",
            ElementKind::Neighbor => "tn",
        }
    }

    /// Number of fields kept from each row (the row index column excluded).
    pub fn arity(self) -> usize {
        match self {
            ElementKind::Vertex => 3,
            ElementKind::Edge => 2,
            ElementKind::Face => 3,
            ElementKind::Tetra => 4,
            ElementKind::Neighbor => 4,
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<ElementKind> {
        ElementKind::ALL.into_iter().find(|k| k.prefix() == prefix)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
            ElementKind::Face => "face",
            ElementKind::Tetra => "tetra",
            ElementKind::Neighbor => "neighbor",
        };
        f.write_str(name)
    }
}

/// One data row with its index column already dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Vertex([f64; 3]),
    Edge([i64; 2]),
    Face([i64; 3]),
    Tetra([i64; 4]),
    Neighbor([i64; 4]),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Vertex(_) => ElementKind::Vertex,
            Element::Edge(_) => ElementKind::Edge,
            Element::Face(_) => ElementKind::Face,
            Element::Tetra(_) => ElementKind::Tetra,
            Element::Neighbor(_) => ElementKind::Neighbor,
        }
    }
}

/// Renders the `.tetra` row: `"<prefix> <f1> ... <fn>"`, no newline.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().prefix())?;
        match self {
            Element::Vertex(xyz) => {
                for v in xyz {
                    write!(f, " {}", format_float(*v))?;
                }
            }
            Element::Edge(ids) => write_ids(f, ids)?,
            Element::Face(ids) => write_ids(f, ids)?,
            Element::Tetra(ids) | Element::Neighbor(ids) => write_ids(f, ids)?,
        }
        Ok(())
    }
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &[i64]) -> fmt::Result {
    for id in ids {
        write!(f, " {id}")?;
    }
    Ok(())
}

/// One count per element kind, indexed by `ElementKind`.
///
/// Counts are signed since header values are taken verbatim; a negative
/// count is echoed to the output header and simply yields no rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementCounts([i64; 5]);

impl ElementCounts {
    pub fn new(vertices: i64, edges: i64, faces: i64, tetras: i64, neighbors: i64) -> Self {
        Self([vertices, edges, faces, tetras, neighbors])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, i64)> + '_ {
        ElementKind::ALL.into_iter().map(|k| (k, self[k]))
    }
}

impl Index<ElementKind> for ElementCounts {
    type Output = i64;

    fn index(&self, kind: ElementKind) -> &i64 {
        &self.0[kind.slot()]
    }
}

impl IndexMut<ElementKind> for ElementCounts {
    fn index_mut(&mut self, kind: ElementKind) -> &mut i64 {
        &mut self.0[kind.slot()]
    }
}
