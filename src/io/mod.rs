//! Cell table readers and writers.
//!
//! This module provides trait-based readers for the three delimited text
//! tables that describe a planar polygonal mesh, and a writer that emits
//! the same format.
//!
//! # Format
//! One file per cell dimension, each starting with a header line that is
//! always discarded:
//!
//! | Table    | Record                                         |
//! |----------|------------------------------------------------|
//! | vertices | `id;marker;x;y`                                |
//! | edges    | `id;marker;origin;end`                         |
//! | faces    | `id;marker;nVertices;v1;...;vN;nEdges;e1;...;eM` |
//!
//! The separator is configurable through [`tokens::Delimiter`]; fields
//! are trimmed, and blank lines are ignored.

pub mod edges;
pub mod faces;
pub mod table;
pub mod tokens;
pub mod vertices;
pub mod writer;

use crate::diagnostics::DefectLog;
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use std::io::Read;

pub use edges::EdgeTableReader;
pub use faces::FaceTableReader;
pub use tokens::Delimiter;
pub use vertices::VertexTableReader;
pub use writer::TableWriter;

/// Trait for readers that turn one cell table into its in-memory form.
pub trait CellTableReader {
    /// Table value produced by the reader.
    type Table;
    /// Cell dimension of the table.
    const DIM: CellDim;

    /// Buffer and parse the whole table from `reader`.
    ///
    /// Structural problems fail the read; data-quality defects are
    /// appended to `defects` and parsing continues.
    fn read<R: Read>(
        &self,
        reader: R,
        defects: &mut DefectLog,
    ) -> Result<Self::Table, MeshImportError>;
}
