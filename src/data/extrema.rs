//! Edge extrema storage: a `2 × N` array of vertex ids, one column per edge.

use crate::topology::ids::CellId;

/// Column-major extrema array; row 0 is the origin, row 1 the end vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extrema {
    columns: Vec<[CellId; 2]>,
}

impl Extrema {
    /// Allocate `len` columns with both extrema set to vertex 0.
    pub fn zeros(len: usize) -> Self {
        Self {
            columns: vec![[0; 2]; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `[origin, end]` of column `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<[CellId; 2]> {
        self.columns.get(slot).copied()
    }

    /// Iterate over row `0` (origins) or row `1` (ends).
    pub fn row(&self, row: usize) -> impl Iterator<Item = CellId> + '_ {
        self.columns
            .iter()
            .filter(move |_| row < 2)
            .map(move |c| c[row])
    }

    #[inline]
    pub fn as_columns(&self) -> &[[CellId; 2]] {
        &self.columns
    }

    pub(crate) fn set(&mut self, slot: usize, origin: CellId, end: CellId) {
        self.columns[slot] = [origin, end];
    }
}
