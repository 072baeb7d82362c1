//! Cell ids, marker tags and the id → storage-slot mapping.
//!
//! Every table row carries an integer id. Under [`IdPolicy::Dense`] the id
//! is used directly as the storage slot, so ids must be unique and smaller
//! than the row count; the assigner rejects anything else up front instead
//! of silently overwriting a slot. Under [`IdPolicy::Sparse`] ids may be
//! arbitrary (but unique) and slots are handed out in record order.

use crate::mesh_error::MeshImportError;
use crate::topology::cell_dim::CellDim;
use hashbrown::HashMap;

/// Identifier of a vertex, edge or face as written in its table.
pub type CellId = u32;

/// Integer tag attached to an entity. `0` means "untagged".
pub type Marker = u32;

/// The marker value that denotes an untagged entity.
pub const NO_MARKER: Marker = 0;

/// How table ids relate to storage slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IdPolicy {
    /// Ids are 0-based, unique and smaller than the row count; slot = id.
    #[default]
    Dense,
    /// Ids are unique but otherwise unconstrained; slot = record order.
    Sparse,
}

/// Resolves ids to storage slots for one table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IdIndex {
    /// Slot equals id for every id below `len`.
    Dense { len: usize },
    /// Explicit id → slot map.
    Sparse(HashMap<CellId, usize>),
}

impl IdIndex {
    /// Returns the slot holding `id`, if the id is known.
    #[inline]
    pub fn slot(&self, id: CellId) -> Option<usize> {
        match self {
            IdIndex::Dense { len } => {
                let slot = id as usize;
                (slot < *len).then_some(slot)
            }
            IdIndex::Sparse(map) => map.get(&id).copied(),
        }
    }

    /// Returns `true` when `id` resolves to a slot.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of ids known to the index.
    pub fn len(&self) -> usize {
        match self {
            IdIndex::Dense { len } => *len,
            IdIndex::Sparse(map) => map.len(),
        }
    }

    /// Returns `true` when the index holds no ids.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The policy this index was built under.
    pub fn policy(&self) -> IdPolicy {
        match self {
            IdIndex::Dense { .. } => IdPolicy::Dense,
            IdIndex::Sparse(_) => IdPolicy::Sparse,
        }
    }
}

/// Hands out storage slots while a table is parsed.
#[derive(Debug)]
pub(crate) struct SlotAssigner {
    table: CellDim,
    count: usize,
    state: AssignerState,
}

#[derive(Debug)]
enum AssignerState {
    Dense { seen: Vec<bool> },
    Sparse { map: HashMap<CellId, usize> },
}

impl SlotAssigner {
    /// Prepare an assigner for a table with `count` data rows.
    pub(crate) fn new(table: CellDim, policy: IdPolicy, count: usize) -> Self {
        let state = match policy {
            IdPolicy::Dense => AssignerState::Dense {
                seen: vec![false; count],
            },
            IdPolicy::Sparse => AssignerState::Sparse {
                map: HashMap::with_capacity(count),
            },
        };
        Self {
            table,
            count,
            state,
        }
    }

    /// Assign the slot for `id`, read from source line `line`.
    pub(crate) fn assign(&mut self, id: CellId, line: usize) -> Result<usize, MeshImportError> {
        match &mut self.state {
            AssignerState::Dense { seen } => {
                let slot = id as usize;
                if slot >= self.count {
                    return Err(MeshImportError::IdOutOfRange {
                        table: self.table,
                        line,
                        id,
                        count: self.count,
                    });
                }
                if std::mem::replace(&mut seen[slot], true) {
                    return Err(MeshImportError::DuplicateId {
                        table: self.table,
                        line,
                        id,
                    });
                }
                Ok(slot)
            }
            AssignerState::Sparse { map } => {
                let slot = map.len();
                if map.insert(id, slot).is_some() {
                    return Err(MeshImportError::DuplicateId {
                        table: self.table,
                        line,
                        id,
                    });
                }
                Ok(slot)
            }
        }
    }

    /// Freeze the assignments into an [`IdIndex`].
    pub(crate) fn finish(self) -> IdIndex {
        match self.state {
            AssignerState::Dense { .. } => IdIndex::Dense { len: self.count },
            AssignerState::Sparse { map } => IdIndex::Sparse(map),
        }
    }
}
