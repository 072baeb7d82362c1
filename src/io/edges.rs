//! Edge (1D cell) table reader.
//!
//! Records are `id;marker;origin;end`. An edge whose extrema coincide is
//! kept and reported as a [`Defect::ZeroLengthEdge`].

use std::io::Read;

use crate::data::extrema::Extrema;
use crate::diagnostics::{Defect, DefectLog};
use crate::geometry::measure::is_zero_length;
use crate::import::ImportOptions;
use crate::io::CellTableReader;
use crate::io::table::read_records;
use crate::io::tokens::TokenCursor;
use crate::mesh::EdgeTable;
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::{CellId, Marker, NO_MARKER, SlotAssigner};
use crate::topology::markers::MarkerRegistry;

/// Reads the edge table.
#[derive(Debug, Default, Clone)]
pub struct EdgeTableReader {
    options: ImportOptions,
}

impl EdgeTableReader {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }
}

impl CellTableReader for EdgeTableReader {
    type Table = EdgeTable;
    const DIM: CellDim = CellDim::Edge;

    fn read<R: Read>(
        &self,
        reader: R,
        defects: &mut DefectLog,
    ) -> Result<EdgeTable, MeshImportError> {
        let records = read_records(reader, Self::DIM)?;
        let count = records.len();

        let mut assigner = SlotAssigner::new(Self::DIM, self.options.id_policy, count);
        let mut ids = Vec::with_capacity(count);
        let mut extrema = Extrema::zeros(count);
        let mut markers = vec![NO_MARKER; count];
        let mut registry = MarkerRegistry::new();

        for record in &records {
            let mut cursor = TokenCursor::new(record, self.options.delimiter, Self::DIM);
            let id: CellId = cursor.require("id")?;
            let marker: Marker = cursor.require("marker")?;
            let origin: CellId = cursor.require("origin")?;
            let end: CellId = cursor.require("end")?;

            let slot = assigner.assign(id, record.line)?;
            extrema.set(slot, origin, end);
            markers[slot] = marker;
            ids.push(id);
            registry.register(marker, id);

            if self.options.check_geometry && is_zero_length([origin, end]) {
                defects.report(Defect::ZeroLengthEdge { edge: id });
            }
        }

        Ok(EdgeTable {
            ids,
            index: assigner.finish(),
            extrema,
            markers,
            registry,
        })
    }
}
