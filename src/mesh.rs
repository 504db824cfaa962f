use crate::element::{Element, ElementCounts, ElementKind};

/// Tetrahedral mesh as loaded from a `.tetra` file, rows in file order.
///
/// Indices are kept exactly as written; nothing checks that they refer to
/// existing vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TetraMesh {
    pub vertices: Vec<[f64; 3]>,
    pub edges: Vec<[i64; 2]>,
    pub faces: Vec<[i64; 3]>,
    pub tetras: Vec<[i64; 4]>,
    pub neighbors: Vec<[i64; 4]>,
}

impl TetraMesh {
    pub fn push(&mut self, element: Element) {
        match element {
            Element::Vertex(v) => self.vertices.push(v),
            Element::Edge(e) => self.edges.push(e),
            Element::Face(f) => self.faces.push(f),
            Element::Tetra(t) => self.tetras.push(t),
            Element::Neighbor(n) => self.neighbors.push(n),
        }
    }

    pub fn len(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.vertices.len(),
            ElementKind::Edge => self.edges.len(),
            ElementKind::Face => self.faces.len(),
            ElementKind::Tetra => self.tetras.len(),
            ElementKind::Neighbor => self.neighbors.len(),
        }
    }

    /// Row counts per kind, in the same shape as a `.tetra` header.
    pub fn counts(&self) -> ElementCounts {
        let mut counts = ElementCounts::default();
        for kind in ElementKind::ALL {
            counts[kind] = self.len(kind) as i64;
        }
        counts
    }
}
