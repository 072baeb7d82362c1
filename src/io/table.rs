//! Shared prologue for the three cell tables.
//!
//! A table source is buffered completely, its first line (the header) is
//! discarded unconditionally and blank lines are skipped. A table with no
//! data rows left is a fatal [`MeshImportError::EmptyTable`].

use std::io::Read;

use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;

/// One data row of a table, with its 1-based line number in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub text: String,
}

/// Buffer `reader` and return its data rows.
pub fn read_records<R: Read>(
    mut reader: R,
    table: CellDim,
) -> Result<Vec<Record>, MeshImportError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|err| MeshImportError::ReadFailed {
            table,
            message: err.to_string(),
        })?;

    let records: Vec<Record> = contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| Record {
            line: idx + 1,
            text: text.to_string(),
        })
        .collect();

    if records.is_empty() {
        return Err(MeshImportError::EmptyTable(table));
    }
    log::debug!("{table} table: {} data rows", records.len());
    Ok(records)
}
