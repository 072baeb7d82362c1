use crate::mesh::{EdgeTable, FaceTable, PolygonalMesh, VertexTable};
use crate::mesh_error::MeshImportError;
use crate::topology::ids::{CellId, IdIndex, Marker, NO_MARKER};
use crate::topology::markers::MarkerRegistry;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshImportError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

fn violation(msg: String) -> MeshImportError {
    MeshImportError::InvariantViolation(msg)
}

/// Checks shared by every table: ids resolve to distinct slots, per-slot
/// arrays match the row count, and the registry mirrors the per-slot markers.
fn check_table(
    name: &str,
    ids: &[CellId],
    index: &IdIndex,
    slot_lens: &[usize],
    markers: &[Marker],
    registry: &MarkerRegistry,
) -> Result<(), MeshImportError> {
    let len = ids.len();
    if index.len() != len {
        return Err(violation(format!(
            "{name}: index holds {} ids for {len} rows",
            index.len()
        )));
    }
    for (i, &slot_len) in slot_lens.iter().enumerate() {
        if slot_len != len {
            return Err(violation(format!(
                "{name}: array #{i} has {slot_len} slots for {len} rows"
            )));
        }
    }

    let mut seen = vec![false; len];
    for &id in ids {
        let slot = index
            .slot(id)
            .filter(|&slot| slot < len)
            .ok_or_else(|| violation(format!("{name}: id {id} has no slot")))?;
        if std::mem::replace(&mut seen[slot], true) {
            return Err(violation(format!("{name}: slot {slot} is shared")));
        }
    }

    for (marker, tagged) in registry.iter() {
        for &id in tagged {
            let stored = index.slot(id).and_then(|slot| markers.get(slot).copied());
            if stored != Some(marker) {
                return Err(violation(format!(
                    "{name}: id {id} registered under marker {marker} but stores {stored:?}"
                )));
            }
        }
    }
    let tagged = markers.iter().filter(|&&m| m != NO_MARKER).count();
    if tagged != registry.tagged_count() {
        return Err(violation(format!(
            "{name}: {tagged} tagged entities but {} registry entries",
            registry.tagged_count()
        )));
    }
    Ok(())
}

impl DebugInvariants for VertexTable {
    fn validate_invariants(&self) -> Result<(), MeshImportError> {
        check_table(
            "vertices",
            &self.ids,
            &self.index,
            &[self.coordinates.len(), self.markers.len()],
            &self.markers,
            &self.registry,
        )
    }
}

impl DebugInvariants for EdgeTable {
    fn validate_invariants(&self) -> Result<(), MeshImportError> {
        check_table(
            "edges",
            &self.ids,
            &self.index,
            &[self.extrema.len(), self.markers.len()],
            &self.markers,
            &self.registry,
        )
    }
}

impl DebugInvariants for FaceTable {
    fn validate_invariants(&self) -> Result<(), MeshImportError> {
        check_table(
            "faces",
            &self.ids,
            &self.index,
            &[self.vertices.len(), self.edges.len(), self.markers.len()],
            &self.markers,
            &self.registry,
        )
    }
}

impl DebugInvariants for PolygonalMesh {
    fn validate_invariants(&self) -> Result<(), MeshImportError> {
        self.vertices().validate_invariants()?;
        self.edges().validate_invariants()?;
        self.faces().validate_invariants()
    }
}
