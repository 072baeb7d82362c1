//! Length and area checks used while importing.
//!
//! # Polygon area
//! Faces are given as a ring of vertex ids in boundary traversal order.
//! The signed area follows the shoelace formula over consecutive vertex
//! pairs, wrapping the last vertex back to the first:
//!
//! ```text
//! A = 1/2 * Σ (x_a * y_b - x_b * y_a)
//! ```
//!
//! A positive value means counter-clockwise winding. A face whose absolute
//! area is below [`DEGENERATE_AREA_TOLERANCE`] is considered degenerate.
//!
//! # Examples
//! ```rust
//! use polymesh::geometry::measure::{polygon_area, signed_area};
//!
//! let triangle = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! assert_eq!(signed_area(&triangle), 0.5);
//!
//! let collinear = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
//! assert_eq!(polygon_area(&collinear), 0.0);
//! ```

use itertools::Itertools;

use crate::topology::ids::CellId;

/// Faces with an absolute area below this value are reported as degenerate.
pub const DEGENERATE_AREA_TOLERANCE: f64 = 1e-16;

/// Shoelace signed area of a closed ring of `(x, y)` points.
///
/// Rings with fewer than three points have zero area.
pub fn signed_area(ring: &[[f64; 2]]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let twice_area: f64 = ring
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| a[0] * b[1] - b[0] * a[1])
        .sum();
    0.5 * twice_area
}

/// Absolute shoelace area of a closed ring.
#[inline]
pub fn polygon_area(ring: &[[f64; 2]]) -> f64 {
    signed_area(ring).abs()
}

/// Returns `true` when `area` is not a usable polygon area.
///
/// NaN areas (from non-finite coordinates) count as degenerate.
#[inline]
pub fn is_degenerate_area(area: f64, tolerance: f64) -> bool {
    area.is_nan() || area < tolerance
}

/// An edge has zero length when both extrema name the same vertex.
#[inline]
pub fn is_zero_length(extrema: [CellId; 2]) -> bool {
    extrema[0] == extrema[1]
}
