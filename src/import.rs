//! Mesh import orchestration.
//!
//! The importer runs the three table readers strictly in order, vertices,
//! then edges, then faces, because the face reader resolves vertex ids
//! against the coordinates loaded first. The first failure stops the
//! import: later sources are never opened. Each reader builds its own
//! table, and the [`PolygonalMesh`] is assembled only once all three
//! succeeded, so a failed import never exposes a partial mesh.
//!
//! ```text
//! NotStarted ──vertices──▶ VerticesLoaded ──edges──▶ EdgesLoaded ──faces──▶ FacesLoaded
//!      │                        │                        │
//!      └────────────────────────┴────────────────────────┴──▶ ImportFailure { reached, error }
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::diagnostics::DefectLog;
use crate::geometry::measure::DEGENERATE_AREA_TOLERANCE;
use crate::io::CellTableReader;
use crate::io::edges::EdgeTableReader;
use crate::io::faces::FaceTableReader;
use crate::io::tokens::Delimiter;
use crate::io::vertices::VertexTableReader;
use crate::mesh::PolygonalMesh;
use crate::mesh_error::{ImportFailure, MeshImportError};
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::IdPolicy;

/// Options shared by the three table readers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImportOptions {
    /// Field separator of all three tables.
    pub delimiter: Delimiter,
    /// How ids map to storage slots.
    pub id_policy: IdPolicy,
    /// Faces with a smaller absolute area are reported as degenerate.
    pub area_tolerance: f64,
    /// Run the zero-length edge and degenerate face checks.
    pub check_geometry: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            id_policy: IdPolicy::default(),
            area_tolerance: DEGENERATE_AREA_TOLERANCE,
            check_geometry: true,
        }
    }
}

impl ImportOptions {
    /// Reject option combinations no reader can honour.
    pub fn validate(&self) -> Result<(), MeshImportError> {
        if !self.area_tolerance.is_finite() || self.area_tolerance < 0.0 {
            return Err(MeshImportError::InvalidOption(format!(
                "area tolerance must be finite and non-negative, got {}",
                self.area_tolerance
            )));
        }
        if let Delimiter::Char(sep) = self.delimiter {
            // letters cover exponents and `inf`/`NaN` spellings
            if sep.is_alphanumeric() || matches!(sep, '.' | '-' | '+') {
                return Err(MeshImportError::InvalidOption(format!(
                    "delimiter `{sep}` collides with numeric fields"
                )));
            }
        }
        Ok(())
    }
}

/// Progress of a single import attempt.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum ImportStage {
    NotStarted,
    VerticesLoaded,
    EdgesLoaded,
    FacesLoaded,
}

impl ImportStage {
    /// The table loaded to leave this stage, if any.
    pub fn next_table(self) -> Option<CellDim> {
        match self {
            ImportStage::NotStarted => Some(CellDim::Vertex),
            ImportStage::VerticesLoaded => Some(CellDim::Edge),
            ImportStage::EdgesLoaded => Some(CellDim::Face),
            ImportStage::FacesLoaded => None,
        }
    }

    fn advance(self) -> Self {
        match self {
            ImportStage::NotStarted => ImportStage::VerticesLoaded,
            ImportStage::VerticesLoaded => ImportStage::EdgesLoaded,
            ImportStage::EdgesLoaded | ImportStage::FacesLoaded => ImportStage::FacesLoaded,
        }
    }
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportStage::NotStarted => "not started",
            ImportStage::VerticesLoaded => "vertices loaded",
            ImportStage::EdgesLoaded => "edges loaded",
            ImportStage::FacesLoaded => "faces loaded",
        };
        f.write_str(name)
    }
}

/// Locations of the three table files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSource {
    vertices: PathBuf,
    edges: PathBuf,
    faces: PathBuf,
}

impl MeshSource {
    pub fn new(
        vertices: impl Into<PathBuf>,
        edges: impl Into<PathBuf>,
        faces: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vertices: vertices.into(),
            edges: edges.into(),
            faces: faces.into(),
        }
    }

    /// `Cell0Ds.csv`, `Cell1Ds.csv` and `Cell2Ds.csv` inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(CellDim::Vertex.file_name()),
            dir.join(CellDim::Edge.file_name()),
            dir.join(CellDim::Face.file_name()),
        )
    }

    /// Path of the table for `dim`.
    pub fn path(&self, dim: CellDim) -> &Path {
        match dim {
            CellDim::Vertex => &self.vertices,
            CellDim::Edge => &self.edges,
            CellDim::Face => &self.faces,
        }
    }

    fn open(&self, dim: CellDim) -> Result<File, MeshImportError> {
        let path = self.path(dim);
        File::open(path).map_err(|err| MeshImportError::Unreadable {
            table: dim,
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImportReport {
    pub mesh: PolygonalMesh,
    /// Non-fatal defects, in detection order.
    pub defects: DefectLog,
}

impl ImportReport {
    /// Returns `true` when no defect was found.
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn into_mesh(self) -> PolygonalMesh {
        self.mesh
    }
}

/// Runs the vertex, edge and face readers in order.
#[derive(Debug, Default, Clone)]
pub struct MeshImporter {
    options: ImportOptions,
}

impl MeshImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import the mesh described by the three files of `source`.
    ///
    /// Each file is opened only when its stage is reached and closed
    /// before the next stage starts.
    pub fn import(&self, source: &MeshSource) -> Result<ImportReport, ImportFailure> {
        self.run(
            || source.open(CellDim::Vertex),
            || source.open(CellDim::Edge),
            || source.open(CellDim::Face),
        )
    }

    /// Import from three in-memory or streaming sources.
    ///
    /// Readers are consumed in order; a reader is never touched once an
    /// earlier stage has failed.
    pub fn import_from_readers<V, E, F>(
        &self,
        vertices: V,
        edges: E,
        faces: F,
    ) -> Result<ImportReport, ImportFailure>
    where
        V: Read,
        E: Read,
        F: Read,
    {
        self.run(|| Ok(vertices), || Ok(edges), || Ok(faces))
    }

    fn run<V, E, F>(
        &self,
        vertices: impl FnOnce() -> Result<V, MeshImportError>,
        edges: impl FnOnce() -> Result<E, MeshImportError>,
        faces: impl FnOnce() -> Result<F, MeshImportError>,
    ) -> Result<ImportReport, ImportFailure>
    where
        V: Read,
        E: Read,
        F: Read,
    {
        let mut stage = ImportStage::NotStarted;
        let fail = |reached: ImportStage| {
            move |error: MeshImportError| {
                log::debug!("import stopped at stage `{reached}`: {error}");
                ImportFailure { reached, error }
            }
        };

        self.options.validate().map_err(fail(stage))?;
        let mut defects = DefectLog::new();

        let vertex_table = vertices()
            .and_then(|src| VertexTableReader::new(self.options).read(src, &mut defects))
            .map_err(fail(stage))?;
        stage = stage.advance();
        log::debug!("{stage}: {} vertices", vertex_table.len());

        let edge_table = edges()
            .and_then(|src| EdgeTableReader::new(self.options).read(src, &mut defects))
            .map_err(fail(stage))?;
        stage = stage.advance();
        log::debug!("{stage}: {} edges", edge_table.len());

        let face_table = faces()
            .and_then(|src| {
                FaceTableReader::new(self.options, &vertex_table).read(src, &mut defects)
            })
            .map_err(fail(stage))?;
        stage = stage.advance();
        log::debug!("{stage}: {} faces", face_table.len());

        let mesh = PolygonalMesh::new(vertex_table, edge_table, face_table);
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&mesh),
            "imported mesh"
        );
        log::info!(
            "imported mesh: {} vertices, {} edges, {} faces, {} defects",
            mesh.count(CellDim::Vertex),
            mesh.count(CellDim::Edge),
            mesh.count(CellDim::Face),
            defects.len()
        );
        Ok(ImportReport { mesh, defects })
    }
}

/// Import `Cell0Ds.csv`, `Cell1Ds.csv` and `Cell2Ds.csv` from `dir` with
/// default options.
pub fn import_mesh(dir: impl AsRef<Path>) -> Result<ImportReport, ImportFailure> {
    MeshImporter::default().import(&MeshSource::from_dir(dir))
}
