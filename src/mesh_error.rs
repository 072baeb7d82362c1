//! MeshImportError: unified error type for the polymesh import pipeline.
//!
//! Every structural failure (unreadable source, empty table, malformed
//! field, invalid id) is reported through [`MeshImportError`]. Data-quality
//! problems that do not abort an import are modelled separately as
//! [`Defect`](crate::diagnostics::Defect) records.

use crate::import::ImportStage;
use crate::topology::cell_dim::CellDim;
use crate::topology::ids::CellId;
use thiserror::Error;

/// Unified error type for polymesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshImportError {
    /// The source of a table could not be opened or read.
    #[error("cannot read {table} table `{path}`: {message}")]
    Unreadable {
        table: CellDim,
        path: String,
        message: String,
    },
    /// An opened table source failed mid-read or is not valid UTF-8.
    #[error("cannot read {table} table: {message}")]
    ReadFailed { table: CellDim, message: String },
    /// I/O failure while writing a stream.
    #[error("I/O error: {0}")]
    Io(String),
    /// The table has no data rows after the header.
    #[error("there is no {0}")]
    EmptyTable(CellDim),
    /// A required field is absent from a record.
    #[error("{table} table, line {line}: missing field `{field}`")]
    MissingField {
        table: CellDim,
        line: usize,
        field: &'static str,
    },
    /// A field could not be parsed as the expected type.
    #[error("{table} table, line {line}: invalid {field} `{raw}`")]
    InvalidField {
        table: CellDim,
        line: usize,
        field: &'static str,
        raw: String,
    },
    /// A dense id is not smaller than the number of rows in its table.
    #[error("{table} table, line {line}: id {id} is out of range for {count} rows")]
    IdOutOfRange {
        table: CellDim,
        line: usize,
        id: CellId,
        count: usize,
    },
    /// The same id appears on more than one row.
    #[error("{table} table, line {line}: duplicate id {id}")]
    DuplicateId {
        table: CellDim,
        line: usize,
        id: CellId,
    },
    /// A face refers to a vertex id that was never loaded.
    #[error("face {face} references unknown vertex {vertex}")]
    UnknownVertex { face: CellId, vertex: CellId },
    /// Import options are inconsistent.
    #[error("invalid import option: {0}")]
    InvalidOption(String),
    /// An internal consistency check failed.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl MeshImportError {
    /// The table the error was raised for, if it is tied to one.
    pub fn table(&self) -> Option<CellDim> {
        match self {
            MeshImportError::Unreadable { table, .. }
            | MeshImportError::ReadFailed { table, .. }
            | MeshImportError::MissingField { table, .. }
            | MeshImportError::InvalidField { table, .. }
            | MeshImportError::IdOutOfRange { table, .. }
            | MeshImportError::DuplicateId { table, .. } => Some(*table),
            MeshImportError::EmptyTable(table) => Some(*table),
            MeshImportError::UnknownVertex { .. } => Some(CellDim::Face),
            MeshImportError::Io(_)
            | MeshImportError::InvalidOption(_)
            | MeshImportError::InvariantViolation(_) => None,
        }
    }
}

impl From<std::io::Error> for MeshImportError {
    fn from(err: std::io::Error) -> Self {
        MeshImportError::Io(err.to_string())
    }
}

/// A failed import attempt: the error plus the last stage that completed.
///
/// `reached` is [`ImportStage::NotStarted`] when the vertex table failed,
/// [`ImportStage::VerticesLoaded`] when the edge table failed, and so on.
/// No loader after the failing one is run.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("mesh import failed after stage `{reached}`: {error}")]
pub struct ImportFailure {
    pub reached: ImportStage,
    #[source]
    pub error: MeshImportError,
}
