//! Writes cell tables back in the format the readers accept.
//!
//! Rows are written in the order their records were read. Coordinates use
//! Rust's shortest round-trip float formatting, so reading a written table
//! reproduces every coordinate bit for bit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::tokens::Delimiter;
use crate::mesh::{EdgeTable, FaceTable, PolygonalMesh, VertexTable};
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::{CellId, IdIndex};

/// Serializes vertex, edge and face tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableWriter {
    delimiter: Delimiter,
}

impl TableWriter {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    fn write_header<W: Write>(&self, writer: &mut W, dim: CellDim) -> Result<(), MeshImportError> {
        let sep = self.delimiter.separator().to_string();
        writeln!(writer, "{}", dim.header().replace(';', &sep))?;
        Ok(())
    }

    fn write_row<W: Write, T: std::fmt::Display>(
        &self,
        writer: &mut W,
        fields: impl IntoIterator<Item = T>,
    ) -> Result<(), MeshImportError> {
        let sep = self.delimiter.separator();
        for (idx, field) in fields.into_iter().enumerate() {
            if idx > 0 {
                write!(writer, "{sep}")?;
            }
            write!(writer, "{field}")?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write the vertex table (`id;marker;x;y`).
    pub fn write_vertices<W: Write>(
        &self,
        mut writer: W,
        table: &VertexTable,
    ) -> Result<(), MeshImportError> {
        self.write_header(&mut writer, CellDim::Vertex)?;
        for (&id, slot) in table.ids.iter().zip(slots(table.index(), &table.ids)?) {
            let [x, y, _] = table.coordinates.as_columns()[slot];
            let marker = table.markers[slot];
            self.write_row(
                &mut writer,
                [id.to_string(), marker.to_string(), x.to_string(), y.to_string()],
            )?;
        }
        Ok(())
    }

    /// Write the edge table (`id;marker;origin;end`).
    pub fn write_edges<W: Write>(
        &self,
        mut writer: W,
        table: &EdgeTable,
    ) -> Result<(), MeshImportError> {
        self.write_header(&mut writer, CellDim::Edge)?;
        for (&id, slot) in table.ids.iter().zip(slots(table.index(), &table.ids)?) {
            let [origin, end] = table.extrema.as_columns()[slot];
            self.write_row(&mut writer, [id, table.markers[slot], origin, end])?;
        }
        Ok(())
    }

    /// Write the face table (`id;marker;nV;v...;nE;e...`).
    pub fn write_faces<W: Write>(
        &self,
        mut writer: W,
        table: &FaceTable,
    ) -> Result<(), MeshImportError> {
        self.write_header(&mut writer, CellDim::Face)?;
        for (&id, slot) in table.ids.iter().zip(slots(table.index(), &table.ids)?) {
            let vertices = &table.vertices[slot];
            let edges = &table.edges[slot];
            let fields = [id as usize, table.markers[slot] as usize, vertices.len()]
                .into_iter()
                .chain(vertices.iter().map(|&v| v as usize))
                .chain(std::iter::once(edges.len()))
                .chain(edges.iter().map(|&e| e as usize));
            self.write_row(&mut writer, fields)?;
        }
        Ok(())
    }

    /// Write all three tables into `dir` under their conventional names.
    pub fn write_mesh_to_dir(
        &self,
        dir: impl AsRef<Path>,
        mesh: &PolygonalMesh,
    ) -> Result<(), MeshImportError> {
        let dir = dir.as_ref();
        let create = |dim: CellDim| -> Result<BufWriter<File>, MeshImportError> {
            Ok(BufWriter::new(File::create(dir.join(dim.file_name()))?))
        };

        let mut out = create(CellDim::Vertex)?;
        self.write_vertices(&mut out, mesh.vertices())?;
        out.flush()?;

        let mut out = create(CellDim::Edge)?;
        self.write_edges(&mut out, mesh.edges())?;
        out.flush()?;

        let mut out = create(CellDim::Face)?;
        self.write_faces(&mut out, mesh.faces())?;
        out.flush()?;
        Ok(())
    }
}

/// Resolve every id to its slot, failing on an id the index does not know.
fn slots(
    index: &IdIndex,
    ids: &[CellId],
) -> Result<Vec<usize>, MeshImportError> {
    ids.iter()
        .map(|&id| {
            index.slot(id).ok_or_else(|| {
                MeshImportError::InvariantViolation(format!("id {id} has no storage slot"))
            })
        })
        .collect()
}
