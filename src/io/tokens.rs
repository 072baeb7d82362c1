//! Field splitting and a bounds-checked cursor over record tokens.

use std::str::FromStr;

use crate::io::table::Record;
use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;

/// Field separator used by all three tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Delimiter {
    /// A single separator character; fields are trimmed of whitespace.
    Char(char),
    /// Runs of whitespace separate fields.
    Whitespace,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Char(';')
    }
}

impl Delimiter {
    /// Split `line` into trimmed fields.
    ///
    /// Empty fields left by a trailing separator are dropped.
    pub fn split(self, line: &str) -> Vec<&str> {
        let mut fields: Vec<&str> = match self {
            Delimiter::Char(sep) => line.split(sep).map(str::trim).collect(),
            Delimiter::Whitespace => line.split_whitespace().collect(),
        };
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        fields
    }

    /// The separator written between fields.
    pub fn separator(self) -> char {
        match self {
            Delimiter::Char(sep) => sep,
            Delimiter::Whitespace => ' ',
        }
    }
}

/// Cursor over the tokens of one record.
///
/// `next` returns `Ok(None)` once the tokens run out, so callers decide
/// whether a missing field fails the record or is tolerated.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
    table: CellDim,
    line: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(record: &'a Record, delimiter: Delimiter, table: CellDim) -> Self {
        Self {
            tokens: delimiter.split(&record.text),
            pos: 0,
            table,
            line: record.line,
        }
    }

    /// Total number of tokens in the record.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Source line of the record.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parse the next token as `field`, or `None` when exhausted.
    pub fn next<T: FromStr>(&mut self, field: &'static str) -> Result<Option<T>, MeshImportError> {
        let Some(raw) = self.tokens.get(self.pos).copied() else {
            return Ok(None);
        };
        self.pos += 1;
        raw.parse::<T>()
            .map(Some)
            .map_err(|_| MeshImportError::InvalidField {
                table: self.table,
                line: self.line,
                field,
                raw: raw.to_string(),
            })
    }

    /// Parse the next token as `field`, failing if it is absent.
    pub fn require<T: FromStr>(&mut self, field: &'static str) -> Result<T, MeshImportError> {
        self.next(field)?.ok_or(MeshImportError::MissingField {
            table: self.table,
            line: self.line,
            field,
        })
    }

    /// Read up to `count` tokens as `field`.
    ///
    /// Returns the parsed values and whether all `count` were present.
    pub fn take_counted<T: FromStr>(
        &mut self,
        count: usize,
        field: &'static str,
    ) -> Result<(Vec<T>, bool), MeshImportError> {
        let available = count.min(self.remaining());
        let mut values = Vec::with_capacity(available);
        for _ in 0..available {
            if let Some(value) = self.next(field)? {
                values.push(value);
            }
        }
        Ok((values, available == count))
    }
}
