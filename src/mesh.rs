//! The imported polygonal mesh.
//!
//! Each table is an independent immutable value built by its loader; the
//! importer assembles them into a [`PolygonalMesh`] only after all three
//! loaders have succeeded. All per-entity arrays are indexed by storage
//! slot, which equals the entity id under [`IdPolicy::Dense`](crate::topology::IdPolicy).

use crate::data::coordinates::Coordinates;
use crate::data::extrema::Extrema;
use crate::geometry::measure::polygon_area;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::{CellId, IdIndex, Marker, NO_MARKER};
use crate::topology::markers::MarkerRegistry;

/// 0D cells: ids, coordinates and markers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VertexTable {
    pub(crate) ids: Vec<CellId>,
    pub(crate) index: IdIndex,
    pub(crate) coordinates: Coordinates,
    pub(crate) markers: Vec<Marker>,
    pub(crate) registry: MarkerRegistry,
}

impl VertexTable {
    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Vertex ids in the order their records were read.
    #[inline]
    pub fn ids(&self) -> &[CellId] {
        &self.ids
    }

    #[inline]
    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    /// The `3 × N` coordinate array.
    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Marker tag → vertex ids.
    #[inline]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Planar coordinates of vertex `id`.
    pub fn coordinate(&self, id: CellId) -> Option<[f64; 2]> {
        self.index.slot(id).and_then(|slot| self.coordinates.xy(slot))
    }

    /// Marker of vertex `id`; `None` for unknown or untagged vertices.
    pub fn marker(&self, id: CellId) -> Option<Marker> {
        marker_at(&self.index, &self.markers, id)
    }

    /// Coordinates of a vertex ring, or the first id that does not resolve.
    pub(crate) fn ring(&self, vertex_ids: &[CellId]) -> Result<Vec<[f64; 2]>, CellId> {
        vertex_ids
            .iter()
            .map(|&id| self.coordinate(id).ok_or(id))
            .collect()
    }
}

/// 1D cells: ids, extrema and markers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgeTable {
    pub(crate) ids: Vec<CellId>,
    pub(crate) index: IdIndex,
    pub(crate) extrema: Extrema,
    pub(crate) markers: Vec<Marker>,
    pub(crate) registry: MarkerRegistry,
}

impl EdgeTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> &[CellId] {
        &self.ids
    }

    #[inline]
    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    /// The `2 × N` extrema array.
    #[inline]
    pub fn extrema_array(&self) -> &Extrema {
        &self.extrema
    }

    #[inline]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// `[origin, end]` vertex ids of edge `id`.
    pub fn extrema(&self, id: CellId) -> Option<[CellId; 2]> {
        self.index.slot(id).and_then(|slot| self.extrema.get(slot))
    }

    pub fn marker(&self, id: CellId) -> Option<Marker> {
        marker_at(&self.index, &self.markers, id)
    }
}

/// Borrowed view of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRef<'a> {
    pub id: CellId,
    /// Boundary vertex ids in traversal order.
    pub vertices: &'a [CellId],
    /// Bounding edge ids.
    pub edges: &'a [CellId],
    pub marker: Option<Marker>,
}

/// 2D cells: ids, vertex rings, edge lists and markers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FaceTable {
    pub(crate) ids: Vec<CellId>,
    pub(crate) index: IdIndex,
    pub(crate) vertices: Vec<Vec<CellId>>,
    pub(crate) edges: Vec<Vec<CellId>>,
    pub(crate) markers: Vec<Marker>,
    pub(crate) registry: MarkerRegistry,
}

impl FaceTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> &[CellId] {
        &self.ids
    }

    #[inline]
    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    /// Vertex rings, indexed by slot.
    #[inline]
    pub fn vertex_lists(&self) -> &[Vec<CellId>] {
        &self.vertices
    }

    /// Edge lists, indexed by slot.
    #[inline]
    pub fn edge_lists(&self) -> &[Vec<CellId>] {
        &self.edges
    }

    #[inline]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Look up face `id`.
    pub fn face(&self, id: CellId) -> Option<FaceRef<'_>> {
        let slot = self.index.slot(id)?;
        Some(FaceRef {
            id,
            vertices: self.vertices.get(slot)?,
            edges: self.edges.get(slot)?,
            marker: self.markers.get(slot).copied().filter(|&m| m != NO_MARKER),
        })
    }

    pub fn marker(&self, id: CellId) -> Option<Marker> {
        marker_at(&self.index, &self.markers, id)
    }

    /// Absolute shoelace area of face `id`.
    ///
    /// Returns `None` if the face is unknown or one of its vertices is
    /// missing from `vertices`.
    pub fn area(&self, id: CellId, vertices: &VertexTable) -> Option<f64> {
        let face = self.face(id)?;
        let ring = vertices.ring(face.vertices).ok()?;
        Some(polygon_area(&ring))
    }
}

fn marker_at(index: &IdIndex, markers: &[Marker], id: CellId) -> Option<Marker> {
    index
        .slot(id)
        .and_then(|slot| markers.get(slot).copied())
        .filter(|&m| m != NO_MARKER)
}

/// A fully imported planar polygonal mesh.
///
/// Built once by the importer and read-only afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolygonalMesh {
    vertices: VertexTable,
    edges: EdgeTable,
    faces: FaceTable,
}

static_assertions::assert_impl_all!(PolygonalMesh: Send, Sync);

impl PolygonalMesh {
    pub(crate) fn new(vertices: VertexTable, edges: EdgeTable, faces: FaceTable) -> Self {
        Self {
            vertices,
            edges,
            faces,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &FaceTable {
        &self.faces
    }

    /// Coordinate array for exporters.
    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.vertices.coordinates
    }

    /// Extrema array for exporters.
    #[inline]
    pub fn extrema(&self) -> &Extrema {
        &self.edges.extrema
    }

    /// Number of entities of dimension `dim`.
    pub fn count(&self, dim: CellDim) -> usize {
        match dim {
            CellDim::Vertex => self.vertices.len(),
            CellDim::Edge => self.edges.len(),
            CellDim::Face => self.faces.len(),
        }
    }

    /// Marker registry of dimension `dim`.
    pub fn markers(&self, dim: CellDim) -> &MarkerRegistry {
        match dim {
            CellDim::Vertex => &self.vertices.registry,
            CellDim::Edge => &self.edges.registry,
            CellDim::Face => &self.faces.registry,
        }
    }

    /// Consume the mesh and return its three tables.
    pub fn into_tables(self) -> (VertexTable, EdgeTable, FaceTable) {
        (self.vertices, self.edges, self.faces)
    }
}
