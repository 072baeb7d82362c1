//! Cell dimension metadata for the three mesh tables.

use std::fmt;

/// Topological dimension of a mesh cell.
///
/// The mesh format stores one table per dimension: 0D cells (vertices),
/// 1D cells (edges) and 2D cells (polygonal faces).
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum CellDim {
    /// 0D cell.
    Vertex,
    /// 1D cell bounded by two vertices.
    Edge,
    /// 2D polygonal cell.
    Face,
}

impl CellDim {
    /// All dimensions in import order.
    pub const ALL: [CellDim; 3] = [CellDim::Vertex, CellDim::Edge, CellDim::Face];

    /// Returns the topological dimension as an integer.
    pub fn dimension(self) -> u8 {
        match self {
            CellDim::Vertex => 0,
            CellDim::Edge => 1,
            CellDim::Face => 2,
        }
    }

    /// Conventional file name of the table for this dimension.
    pub fn file_name(self) -> &'static str {
        match self {
            CellDim::Vertex => "Cell0Ds.csv",
            CellDim::Edge => "Cell1Ds.csv",
            CellDim::Face => "Cell2Ds.csv",
        }
    }

    /// Header line written in front of the table for this dimension.
    pub fn header(self) -> &'static str {
        match self {
            CellDim::Vertex => "Id;Marker;X;Y",
            CellDim::Edge => "Id;Marker;Origin;End",
            CellDim::Face => "Id;Marker;NumVertices;Vertices;NumEdges;Edges",
        }
    }
}

impl fmt::Display for CellDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellDim::Vertex => "vertex",
            CellDim::Edge => "edge",
            CellDim::Face => "face",
        };
        f.write_str(name)
    }
}
