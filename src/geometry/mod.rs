//! Geometry utilities for polymesh.
//!
//! This module provides the two validation measures applied during import:
//! zero-length edges and degenerate polygon areas.

pub mod measure;
