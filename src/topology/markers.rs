//! Marker registry for boundary-condition bookkeeping.
//!
//! A registry maps a non-zero marker tag to the ids of every entity
//! carrying it, in the order those entities were registered. Entities
//! tagged `0` are never stored.

use std::collections::BTreeMap;

use crate::topology::ids::{CellId, Marker, NO_MARKER};

/// Marker tag → entity ids, one registry per cell dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkerRegistry {
    markers: BTreeMap<Marker, Vec<CellId>>,
}

impl MarkerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that entity `id` carries `marker`.
    ///
    /// Returns `false` (and records nothing) for the untagged marker `0`.
    pub fn register(&mut self, marker: Marker, id: CellId) -> bool {
        if marker == NO_MARKER {
            return false;
        }
        self.markers.entry(marker).or_default().push(id);
        true
    }

    /// Ids tagged with `marker`, in registration order.
    pub fn ids(&self, marker: Marker) -> &[CellId] {
        self.markers.get(&marker).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if at least one entity carries `marker`.
    pub fn contains(&self, marker: Marker) -> bool {
        self.markers.contains_key(&marker)
    }

    /// Returns the number of entities tagged with `marker`.
    pub fn stratum_size(&self, marker: Marker) -> usize {
        self.ids(marker).len()
    }

    /// All distinct markers, sorted ascending.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.keys().copied()
    }

    /// Iterate over `(marker, ids)` pairs, sorted by marker.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, &[CellId])> + '_ {
        self.markers.iter().map(|(&marker, ids)| (marker, ids.as_slice()))
    }

    /// Number of distinct markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true when no entity is tagged.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Total number of tagged entities across all markers.
    pub fn tagged_count(&self) -> usize {
        self.markers.values().map(Vec::len).sum()
    }
}
