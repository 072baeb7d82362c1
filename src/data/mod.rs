//! Dense per-entity arrays produced by the table loaders.
//!
//! These are the structures handed to visualization exporters: the
//! vertex coordinate array and the edge extrema array.

pub mod coordinates;
pub mod extrema;

pub use coordinates::Coordinates;
pub use extrema::Extrema;
