//! Two-dimensional offset-addressed storage.
//!
//! [`OffsetMatrix`] keeps one [`OffsetVector`] per row for the rows
//! `[min, max]`. Rows are ragged: each grows its own column run
//! independently. Rows are stored inline in a single `Vec`, and growing
//! the row range downward moves the existing rows rather than copying
//! them.

use std::fmt;
use std::ops::Index;

use offstore_core::{slot_index, Coord, StoreConfig, StoreError};

use crate::growth;
use crate::vector::OffsetVector;

/// A ragged grid of values addressed by absolute `(row, col)`.
///
/// # Examples
///
/// ```
/// use offstore_store::OffsetMatrix;
///
/// let mut m = OffsetMatrix::new(0u32);
/// m.set(5, -2, 10).unwrap();
/// m.set(3, 8, 20).unwrap();
///
/// assert_eq!(m.min(), 3);
/// assert_eq!(m.max(), Some(5));
/// assert_eq!(m.get(5, -2), 10);
/// assert_eq!(m.get(4, 0), 0); // row 4 exists but is empty
/// assert!(m.get_row(4).unwrap().is_empty());
/// assert!(m.get_row(6).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetMatrix<T> {
    min: Coord,
    rows: Vec<OffsetVector<T>>,
    default_value: T,
    config: StoreConfig,
}

impl<T: Copy + PartialEq> OffsetMatrix<T> {
    /// Create an empty matrix with default limits.
    pub fn new(default_value: T) -> Self {
        Self::with_config(default_value, StoreConfig::new())
    }

    /// Create an empty matrix with the given limits. Rows created later
    /// inherit them.
    pub fn with_config(default_value: T, config: StoreConfig) -> Self {
        Self {
            min: 0,
            rows: Vec::new(),
            default_value,
            config,
        }
    }

    /// Coordinate of the first row; `0` when empty.
    pub fn min(&self) -> Coord {
        self.min
    }

    /// Coordinate of the last row, or `None` when empty.
    pub fn max(&self) -> Option<Coord> {
        self.rows
            .len()
            .checked_sub(1)
            .map(|n| self.min + n as Coord)
    }

    /// Number of rows, materialized or empty.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The value reported for unmaterialized coordinates.
    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// The limits this matrix and its rows grow under.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Borrow the row at `row`.
    ///
    /// Fails with [`StoreError::RowNotFound`] when `row` is outside
    /// `[min, max]`.
    pub fn get_row(&self, row: Coord) -> Result<&OffsetVector<T>, StoreError> {
        self.row_slot(row)
            .map(|i| &self.rows[i])
            .ok_or(StoreError::RowNotFound { row })
    }

    /// Mutably borrow the row at `row`, creating it (and every row between
    /// it and the current range) if needed.
    pub fn get_row_mut(&mut self, row: Coord) -> Result<&mut OffsetVector<T>, StoreError> {
        let (default_value, config) = (self.default_value, self.config);
        let index = growth::cover(&mut self.rows, &mut self.min, row, &self.config, || {
            OffsetVector::with_config(default_value, config)
        })?;
        Ok(&mut self.rows[index])
    }

    /// Store `val` at `(row, col)`, growing rows and columns as needed.
    ///
    /// Column gaps are filled with the matrix default. On a column error
    /// the row range may already have grown to include `row`.
    pub fn set(&mut self, row: Coord, col: Coord, val: T) -> Result<(), StoreError> {
        let fill = self.default_value;
        self.get_row_mut(row)?.set_with_fill(col, val, fill)
    }

    /// Value at `(row, col)`, or the default when not materialized.
    pub fn get(&self, row: Coord, col: Coord) -> T {
        match self.row_slot(row) {
            Some(i) => self.rows[i].get(col),
            None => self.default_value,
        }
    }

    /// Whether `(row, col)` is materialized.
    pub fn contains(&self, row: Coord, col: Coord) -> bool {
        self.row_slot(row).is_some_and(|i| self.rows[i].is_in(col))
    }

    /// Total materialized slots across every row.
    pub fn values(&self) -> usize {
        self.rows.iter().map(OffsetVector::len).sum()
    }

    /// Number of materialized slots equal to `val`.
    ///
    /// Positions that merely read as the default are not counted.
    pub fn count(&self, val: &T) -> usize {
        self.rows.iter().map(|r| r.count(val)).sum()
    }

    /// Drop every row and reset `min` to `0`.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.min = 0;
    }

    /// Release spare capacity in the row sequence and in every row.
    pub fn shrink_to_fit(&mut self) {
        self.rows.shrink_to_fit();
        for r in &mut self.rows {
            r.shrink_to_fit();
        }
    }

    /// Iterate `(row coordinate, row)` in ascending order, empty rows
    /// included.
    pub fn rows(&self) -> impl Iterator<Item = (Coord, &OffsetVector<T>)> + '_ {
        let min = self.min;
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, r)| (min + i as Coord, r))
    }

    /// Replace every row with `rows`, the first sitting at `min`.
    ///
    /// The caller has checked the span against the limits and the
    /// coordinate range.
    pub(crate) fn replace_rows(&mut self, min: Coord, rows: Vec<OffsetVector<T>>) {
        self.min = if rows.is_empty() { 0 } else { min };
        self.rows = rows;
    }

    /// Slot of `row` in the row sequence, if materialized.
    fn row_slot(&self, row: Coord) -> Option<usize> {
        if row < self.min {
            return None;
        }
        slot_index(self.min, row)
            .ok()
            .filter(|&i| i < self.rows.len())
    }
}

impl<T: Copy + PartialEq> Index<(Coord, Coord)> for OffsetMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (Coord, Coord)) -> &T {
        match self.row_slot(row) {
            Some(i) => &self.rows[i][col],
            None => &self.default_value,
        }
    }
}

/// Renders a `matrix:` header line, then one line per row:
/// `row (len): col=value, col=value, ...`. An empty matrix renders the
/// header line alone.
impl<T: Copy + PartialEq + fmt::Display> fmt::Display for OffsetMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix:")?;
        for (row, r) in self.rows() {
            write!(f, "{row:>2} ({}): ", r.len())?;
            for (col, value) in r.iter() {
                write!(f, "{col}={value}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: i32 = 999;

    #[test]
    fn new_is_empty() {
        let m = OffsetMatrix::new(DEFAULT);
        assert!(m.is_empty());
        assert_eq!(m.min(), 0);
        assert_eq!(m.max(), None);
        assert_eq!(m.values(), 0);
    }

    #[test]
    fn fresh_matrix_reads_default() {
        let m = OffsetMatrix::new(DEFAULT);
        for (row, col) in [(0, 0), (-4, 9), (i64::MAX, i64::MIN)] {
            assert_eq!(m.get(row, col), DEFAULT);
            assert_eq!(m[(row, col)], DEFAULT);
        }
    }

    #[test]
    fn first_set_materializes_one_row() {
        let mut m = OffsetMatrix::new(DEFAULT);
        m.set(7, 3, 1).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.min(), 7);
        assert_eq!(m.values(), 1);
        assert_eq!(m.get(7, 3), 1);
    }

    #[test]
    fn rows_grow_in_both_directions() {
        let mut m = OffsetMatrix::new(DEFAULT);
        m.set(42, 0, 1).unwrap();
        m.set(20, 5, 2).unwrap();
        m.set(40, -3, 3).unwrap();
        m.set(42, 1, 4).unwrap();

        assert_eq!(m.min(), 20);
        assert_eq!(m.max(), Some(42));
        assert_eq!(m.len(), 23);
        assert_eq!(m.get(42, 0), 1);
        assert_eq!(m.get(20, 5), 2);
        assert_eq!(m.get(40, -3), 3);
        assert_eq!(m.get(42, 1), 4);
        assert_eq!(m.get(30, 0), DEFAULT);
        assert_eq!(m.values(), 4);
    }

    #[test]
    fn rows_are_ragged() {
        let mut m = OffsetMatrix::new(0u8);
        m.set(0, 10, 1).unwrap();
        m.set(1, -10, 1).unwrap();
        m.set(1, -5, 1).unwrap();
        let r0 = m.get_row(0).unwrap();
        let r1 = m.get_row(1).unwrap();
        assert_eq!((r0.min(), r0.len()), (10, 1));
        assert_eq!((r1.min(), r1.len()), (-10, 6));
    }

    #[test]
    fn new_rows_do_not_alias() {
        let mut m = OffsetMatrix::new(0i32);
        m.set(5, 0, 1).unwrap();
        m.set(2, 0, 2).unwrap();
        m.get_row_mut(3).unwrap().set(0, 3).unwrap();
        assert_eq!(m.get(3, 0), 3);
        assert_eq!(m.get(4, 0), 0);
        assert!(m.get_row(4).unwrap().is_empty());
    }

    #[test]
    fn created_rows_inherit_default_and_config() {
        let config = StoreConfig::new().with_max_span(4);
        let mut m = OffsetMatrix::with_config(-1i16, config);
        let row = m.get_row_mut(9).unwrap();
        assert_eq!(row.default_value(), -1);
        assert_eq!(row.config(), &config);
        assert!(m.set(9, 0, 1).is_ok());
        assert!(matches!(
            m.set(9, 4, 1),
            Err(StoreError::SpanTooLarge { requested: 5, limit: 4 })
        ));
    }

    #[test]
    fn checked_row_lookup() {
        let mut m = OffsetMatrix::new(0u32);
        assert_eq!(m.get_row(0).unwrap_err(), StoreError::RowNotFound { row: 0 });
        m.set(-2, 0, 1).unwrap();
        m.set(2, 0, 1).unwrap();
        assert!(m.get_row(-2).is_ok());
        assert!(m.get_row(0).is_ok());
        assert_eq!(m.get_row(3).unwrap_err(), StoreError::RowNotFound { row: 3 });
        assert_eq!(m.get_row(-3).unwrap_err(), StoreError::RowNotFound { row: -3 });
    }

    #[test]
    fn values_and_count() {
        let mut m = OffsetMatrix::new(0i32);
        m.set(0, 0, 5).unwrap();
        m.set(0, 3, 5).unwrap();
        m.set(2, 1, 7).unwrap();
        assert_eq!(m.values(), 5);
        assert_eq!(m.count(&5), 2);
        assert_eq!(m.count(&7), 1);
        // Two gap slots in row 0; row 1 is empty and contributes nothing.
        assert_eq!(m.count(&0), 2);
    }

    #[test]
    fn clear_resets_fully() {
        let mut m = OffsetMatrix::new(DEFAULT);
        m.set(-8, 1, 1).unwrap();
        m.set(8, 1, 1).unwrap();
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.min(), 0);
        assert_eq!(m.get(8, 1), DEFAULT);

        for row in [42, 20, 40] {
            m.set(row, 0, 1).unwrap();
        }
        assert_eq!(m.min(), 20);
        assert_eq!(m.max(), Some(42));
    }

    #[test]
    fn contains_only_materialized() {
        let mut m = OffsetMatrix::new(0u8);
        m.set(1, 1, 0).unwrap();
        assert!(m.contains(1, 1));
        assert!(!m.contains(1, 2));
        assert!(!m.contains(0, 1));
    }

    #[test]
    fn row_overflow_is_rejected() {
        let mut m = OffsetMatrix::new(0u8);
        m.set(i64::MIN, 0, 1).unwrap();
        let err = m.set(i64::MAX, 0, 1).unwrap_err();
        assert!(matches!(err, StoreError::CoordinateOverflow { .. }));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn display_lists_rows() {
        let mut m = OffsetMatrix::new(0i32);
        m.set(1, 2, 7).unwrap();
        m.set(3, 0, 9).unwrap();
        let text = m.to_string();
        assert_eq!(text, "matrix:\n 1 (1): 2=7, \n 2 (0): \n 3 (1): 0=9, \n");
    }

    #[test]
    fn display_empty() {
        assert_eq!(OffsetMatrix::new(0u8).to_string(), "matrix:\n");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeMap;

        proptest! {
            #[test]
            fn reads_match_last_writes(
                writes in proptest::collection::vec(
                    (-40i64..40, -40i64..40, any::<i16>()),
                    1..64,
                ),
            ) {
                let mut m = OffsetMatrix::new(0i16);
                let mut model = BTreeMap::new();
                for &(row, col, val) in &writes {
                    m.set(row, col, val).unwrap();
                    model.insert((row, col), val);
                }
                for row in -42..42 {
                    for col in -42..42 {
                        let expected = model.get(&(row, col)).copied().unwrap_or(0);
                        prop_assert_eq!(m.get(row, col), expected);
                    }
                }
                let rows: std::collections::BTreeSet<_> = model.keys().map(|k| k.0).collect();
                prop_assert_eq!(m.min(), *rows.iter().next().unwrap());
                prop_assert_eq!(m.max(), rows.iter().next_back().copied());
            }
        }
    }
}
