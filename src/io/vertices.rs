//! Vertex (0D cell) table reader.
//!
//! Records are `id;marker;x;y`. The coordinate of each record is written
//! to the column of its slot, so rows may appear in any order.

use std::io::Read;

use crate::data::coordinates::Coordinates;
use crate::diagnostics::DefectLog;
use crate::import::ImportOptions;
use crate::io::CellTableReader;
use crate::io::table::read_records;
use crate::io::tokens::TokenCursor;
use crate::mesh::VertexTable;
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::{CellId, Marker, NO_MARKER, SlotAssigner};
use crate::topology::markers::MarkerRegistry;

/// Reads the vertex table.
#[derive(Debug, Default, Clone)]
pub struct VertexTableReader {
    options: ImportOptions,
}

impl VertexTableReader {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }
}

impl CellTableReader for VertexTableReader {
    type Table = VertexTable;
    const DIM: CellDim = CellDim::Vertex;

    fn read<R: Read>(
        &self,
        reader: R,
        _defects: &mut DefectLog,
    ) -> Result<VertexTable, MeshImportError> {
        let records = read_records(reader, Self::DIM)?;
        let count = records.len();

        let mut assigner = SlotAssigner::new(Self::DIM, self.options.id_policy, count);
        let mut ids = Vec::with_capacity(count);
        let mut coordinates = Coordinates::zeros(count);
        let mut markers = vec![NO_MARKER; count];
        let mut registry = MarkerRegistry::new();

        for record in &records {
            let mut cursor = TokenCursor::new(record, self.options.delimiter, Self::DIM);
            let id: CellId = cursor.require("id")?;
            let marker: Marker = cursor.require("marker")?;
            let x: f64 = cursor.require("x")?;
            let y: f64 = cursor.require("y")?;

            let slot = assigner.assign(id, record.line)?;
            coordinates.set_xy(slot, x, y);
            markers[slot] = marker;
            ids.push(id);
            registry.register(marker, id);
        }

        Ok(VertexTable {
            ids,
            index: assigner.finish(),
            coordinates,
            markers,
            registry,
        })
    }
}
