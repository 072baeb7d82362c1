//! Face (2D cell) table reader.
//!
//! Records are variable width:
//!
//! ```text
//! id;marker;nVertices;v1;...;vN;nEdges;e1;...;eM
//! ```
//!
//! The counts are read inline and decide how many tokens follow. A record
//! that runs out of tokens is reported as [`Defect::MalformedFaceRecord`]
//! and kept with whatever was parsed (missing marker → `0`, missing lists →
//! empty or truncated). Every vertex of a complete face must resolve
//! against the already-loaded vertex table; the polygon area is then
//! checked against the configured tolerance. A malformed record whose ring
//! does not resolve is kept without an area check.

use std::io::Read;

use crate::diagnostics::{Defect, DefectLog};
use crate::geometry::measure::{is_degenerate_area, polygon_area};
use crate::import::ImportOptions;
use crate::io::CellTableReader;
use crate::io::table::read_records;
use crate::io::tokens::TokenCursor;
use crate::mesh::{FaceTable, VertexTable};
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::{CellId, Marker, NO_MARKER, SlotAssigner};
use crate::topology::markers::MarkerRegistry;

/// Smallest well-formed record: id, marker, count, one vertex, count, one edge.
const MIN_FACE_TOKENS: usize = 6;

/// Reads the face table against an already-loaded vertex table.
#[derive(Debug, Clone)]
pub struct FaceTableReader<'v> {
    options: ImportOptions,
    vertices: &'v VertexTable,
}

impl<'v> FaceTableReader<'v> {
    pub fn new(options: ImportOptions, vertices: &'v VertexTable) -> Self {
        Self { options, vertices }
    }
}

/// Fields of one face record.
struct ParsedFace {
    id: CellId,
    marker: Marker,
    vertices: Vec<CellId>,
    edges: Vec<CellId>,
    complete: bool,
}

fn parse_face(cursor: &mut TokenCursor<'_>) -> Result<ParsedFace, MeshImportError> {
    let mut complete = cursor.len() >= MIN_FACE_TOKENS;
    let id: CellId = cursor.require("id")?;
    let marker = cursor.next::<Marker>("marker")?.unwrap_or(NO_MARKER);

    let mut counted = |count_field: &'static str,
                       item_field: &'static str|
     -> Result<Vec<CellId>, MeshImportError> {
        match cursor.next::<usize>(count_field)? {
            Some(count) => {
                let (items, all_present) = cursor.take_counted(count, item_field)?;
                complete &= all_present;
                Ok(items)
            }
            None => {
                complete = false;
                Ok(Vec::new())
            }
        }
    };
    let vertices = counted("vertex count", "vertex id")?;
    let edges = counted("edge count", "edge id")?;

    Ok(ParsedFace {
        id,
        marker,
        vertices,
        edges,
        complete,
    })
}

impl CellTableReader for FaceTableReader<'_> {
    type Table = FaceTable;
    const DIM: CellDim = CellDim::Face;

    fn read<R: Read>(
        &self,
        reader: R,
        defects: &mut DefectLog,
    ) -> Result<FaceTable, MeshImportError> {
        let records = read_records(reader, Self::DIM)?;
        let count = records.len();

        let mut assigner = SlotAssigner::new(Self::DIM, self.options.id_policy, count);
        let mut ids = Vec::with_capacity(count);
        let mut vertex_lists = vec![Vec::new(); count];
        let mut edge_lists = vec![Vec::new(); count];
        let mut markers = vec![NO_MARKER; count];
        let mut registry = MarkerRegistry::new();

        for record in &records {
            let mut cursor = TokenCursor::new(record, self.options.delimiter, Self::DIM);
            let face = parse_face(&mut cursor)?;
            if !face.complete {
                defects.report(Defect::MalformedFaceRecord {
                    line: record.line,
                    tokens: cursor.len(),
                });
            }

            let slot = assigner.assign(face.id, record.line)?;
            match self.vertices.ring(&face.vertices) {
                Ok(ring) => {
                    if self.options.check_geometry {
                        let area = polygon_area(&ring);
                        if is_degenerate_area(area, self.options.area_tolerance) {
                            defects.report(Defect::DegenerateFace {
                                face: face.id,
                                area,
                            });
                        }
                    }
                }
                // an overrunning count reads later fields as vertex ids
                Err(vertex) if !face.complete => {
                    log::debug!(
                        "face {}: skipping area check, vertex {vertex} of a malformed record does not resolve",
                        face.id
                    );
                }
                Err(vertex) => {
                    return Err(MeshImportError::UnknownVertex {
                        face: face.id,
                        vertex,
                    });
                }
            }

            ids.push(face.id);
            markers[slot] = face.marker;
            registry.register(face.marker, face.id);
            vertex_lists[slot] = face.vertices;
            edge_lists[slot] = face.edges;
        }

        Ok(FaceTable {
            ids,
            index: assigner.finish(),
            vertices: vertex_lists,
            edges: edge_lists,
            markers,
            registry,
        })
    }
}
