//! Non-fatal data-quality defects found while importing.
//!
//! A defect never aborts an import: the offending entity stays in the mesh
//! with whatever was parsed, the defect is logged at `warn` level, and it
//! is returned to the caller inside the import report.

use std::fmt;

use crate::topology::cell_dim::CellDim;
use crate::topology::ids::CellId;

/// A defect in the source mesh that the importer reports but keeps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Defect {
    /// Both extrema of the edge are the same vertex.
    ZeroLengthEdge { edge: CellId },
    /// The polygon area is below the degeneracy tolerance.
    DegenerateFace { face: CellId, area: f64 },
    /// The face record ran out of tokens before its declared shape was read.
    MalformedFaceRecord { line: usize, tokens: usize },
}

impl Defect {
    /// The table the defect was found in.
    pub fn table(&self) -> CellDim {
        match self {
            Defect::ZeroLengthEdge { .. } => CellDim::Edge,
            Defect::DegenerateFace { .. } | Defect::MalformedFaceRecord { .. } => CellDim::Face,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::ZeroLengthEdge { edge } => write!(f, "edge {edge} has length equal to zero"),
            Defect::DegenerateFace { face, area } => {
                write!(f, "degenerate polygon detected (id = {face}, area = {area:e})")
            }
            Defect::MalformedFaceRecord { line, tokens } => {
                write!(f, "malformed face record on line {line} ({tokens} tokens)")
            }
        }
    }
}

/// Ordered collection of defects for one import.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefectLog {
    defects: Vec<Defect>,
}

impl DefectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `defect` and keep it.
    pub fn report(&mut self, defect: Defect) {
        log::warn!("{defect}");
        self.defects.push(defect);
    }

    pub fn len(&self) -> usize {
        self.defects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Defect> {
        self.defects.iter()
    }

    /// Defects found in the `table` table.
    pub fn for_table(&self, table: CellDim) -> impl Iterator<Item = &Defect> + '_ {
        self.defects.iter().filter(move |d| d.table() == table)
    }

    pub fn as_slice(&self) -> &[Defect] {
        &self.defects
    }

    pub fn into_vec(self) -> Vec<Defect> {
        self.defects
    }
}

impl<'a> IntoIterator for &'a DefectLog {
    type Item = &'a Defect;
    type IntoIter = std::slice::Iter<'a, Defect>;

    fn into_iter(self) -> Self::IntoIter {
        self.defects.iter()
    }
}
