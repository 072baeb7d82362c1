//! Mesh topology vocabulary: cell dimensions, ids and marker registries.
//!
//! These are the leaf types every table loader builds on:
//! - [`cell_dim::CellDim`] names the table a value belongs to
//! - [`ids`] holds the id/marker aliases and the id → slot mapping
//! - [`markers::MarkerRegistry`] accumulates marker tags per dimension

pub mod cell_dim;
pub mod ids;
pub mod markers;

pub use cell_dim::CellDim;
pub use ids::{CellId, IdIndex, IdPolicy, Marker, NO_MARKER};
pub use markers::MarkerRegistry;
