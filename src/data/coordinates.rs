//! Vertex coordinate storage.
//!
//! Coordinates are laid out as a `3 × N` column array: one column per
//! vertex slot, rows `x`, `y` and `z`. Meshes are planar, so the `z` row
//! stays at zero; it exists because visualization exporters expect three
//! rows.

/// Number of rows in the coordinate array.
pub const COORDINATE_ROWS: usize = 3;

/// Column-major coordinate array, one column per vertex slot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinates {
    columns: Vec<[f64; COORDINATE_ROWS]>,
}

impl Coordinates {
    /// Allocate `len` zeroed columns.
    pub fn zeros(len: usize) -> Self {
        Self {
            columns: vec![[0.0; COORDINATE_ROWS]; len],
        }
    }

    /// Number of columns (vertex slots).
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when there are no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows; always three.
    #[inline]
    pub fn rows(&self) -> usize {
        COORDINATE_ROWS
    }

    /// Planar `(x, y)` of column `slot`.
    #[inline]
    pub fn xy(&self, slot: usize) -> Option<[f64; 2]> {
        self.columns.get(slot).map(|c| [c[0], c[1]])
    }

    /// Full `(x, y, z)` column `slot`.
    #[inline]
    pub fn column(&self, slot: usize) -> Option<[f64; COORDINATE_ROWS]> {
        self.columns.get(slot).copied()
    }

    /// Iterate over the values of one row (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// Yields nothing for a row index past the last row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        self.columns
            .iter()
            .filter(move |_| row < COORDINATE_ROWS)
            .map(move |c| c[row])
    }

    /// All columns in slot order.
    #[inline]
    pub fn as_columns(&self) -> &[[f64; COORDINATE_ROWS]] {
        &self.columns
    }

    /// Write the planar coordinates of column `slot`; `z` is left untouched.
    pub(crate) fn set_xy(&mut self, slot: usize, x: f64, y: f64) {
        let column = &mut self.columns[slot];
        column[0] = x;
        column[1] = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_start_at_origin_and_keep_zero_z() {
        let mut coords = Coordinates::zeros(2);
        coords.set_xy(1, 3.5, -2.0);
        assert_eq!(coords.column(0), Some([0.0, 0.0, 0.0]));
        assert_eq!(coords.column(1), Some([3.5, -2.0, 0.0]));
        assert_eq!(coords.xy(1), Some([3.5, -2.0]));
        assert_eq!(coords.xy(2), None);
    }

    #[test]
    fn rows_read_across_columns() {
        let mut coords = Coordinates::zeros(3);
        for slot in 0..3 {
            coords.set_xy(slot, slot as f64, 10.0 * slot as f64);
        }
        assert_eq!(coords.row(0).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(coords.row(1).collect::<Vec<_>>(), vec![0.0, 10.0, 20.0]);
        assert!(coords.row(2).all(|z| z == 0.0));
        assert_eq!(coords.row(3).count(), 0);
        assert_eq!(coords.rows(), 3);
    }
}
