#![cfg_attr(docsrs, feature(doc_cfg))]
//! # polymesh
//!
//! polymesh imports a planar polygonal mesh stored as three delimited text
//! tables (vertices, edges and polygonal faces) and validates it while
//! building an immutable in-memory mesh for downstream geometry code and
//! visualization exporters.
//!
//! ## Features
//! - Readers for the vertex (`Cell0Ds`), edge (`Cell1Ds`) and face (`Cell2Ds`)
//!   tables, including variable-width face records
//! - Marker registries mapping boundary tags to entity ids per dimension
//! - Zero-length edge and degenerate polygon detection, reported as
//!   non-fatal [`Defect`](diagnostics::Defect)s instead of aborting
//! - Typed fatal errors ([`MeshImportError`](mesh_error::MeshImportError))
//!   carrying the import stage that was reached
//! - A table writer that reproduces the input format bit-for-bit
//!
//! ## Usage
//! ```no_run
//! use polymesh::prelude::*;
//!
//! let report = import_mesh("./mesh")?;
//! for defect in &report.defects {
//!     eprintln!("{defect}");
//! }
//! let coordinates = report.mesh.coordinates();
//! let extrema = report.mesh.extrema();
//! # let _ = (coordinates, extrema);
//! # Ok::<(), polymesh::mesh_error::ImportFailure>(())
//! ```
//!
//! ## Ids
//! By default ids must be 0-based, unique and smaller than the row count of
//! their table, and they double as array indices. Use
//! [`IdPolicy::Sparse`](topology::IdPolicy::Sparse) to accept arbitrary
//! unique ids.

pub mod data;
pub mod debug_invariants;
pub mod diagnostics;
pub mod geometry;
pub mod import;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::coordinates::Coordinates;
    pub use crate::data::extrema::Extrema;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::diagnostics::{Defect, DefectLog};
    pub use crate::geometry::measure::{DEGENERATE_AREA_TOLERANCE, polygon_area, signed_area};
    pub use crate::import::{
        ImportOptions, ImportReport, ImportStage, MeshImporter, MeshSource, import_mesh,
    };
    pub use crate::io::{CellTableReader, Delimiter, TableWriter};
    pub use crate::mesh::{EdgeTable, FaceRef, FaceTable, PolygonalMesh, VertexTable};
    pub use crate::mesh_error::{ImportFailure, MeshImportError};
    pub use crate::topology::{CellDim, CellId, IdPolicy, Marker, MarkerRegistry};
}
