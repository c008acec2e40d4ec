//! Reusable container fixtures.
//!
//! - [`zigzag_coords`]: a deterministic coordinate order that forces
//!   growth in both directions.
//! - [`matrix_from_triples`]: build a matrix from `(row, col, value)`.
//! - [`checkerboard_matrix`]: a ragged matrix with rows on both sides of
//!   zero.
//! - [`assert_same_reads`]: compare two matrices over a window.

use offstore_core::Coord;
use offstore_store::OffsetMatrix;

/// Stride of the permutation used by [`zigzag_coords`]. Coprime with
/// every span length that is not a multiple of it.
pub const ZIGZAG_STRIDE: u64 = 7919;

/// `n` distinct coordinates from `[-span/2, span - span/2)` in an order
/// that jumps back and forth across the range, so a container filled in
/// this order grows downward and upward repeatedly.
///
/// `span` must be at least `n` and not a multiple of [`ZIGZAG_STRIDE`].
pub fn zigzag_coords(n: usize, span: u64) -> Vec<Coord> {
    assert!(span >= n as u64, "span {span} smaller than count {n}");
    assert!(span % ZIGZAG_STRIDE != 0, "span must be coprime with the stride");
    let half = (span / 2) as Coord;
    (0..n as u64)
        .map(|i| ((i * ZIGZAG_STRIDE) % span) as Coord - half)
        .collect()
}

/// Build a matrix by applying `triples` in order.
pub fn matrix_from_triples<T: Copy + PartialEq>(
    triples: &[(Coord, Coord, T)],
    default_value: T,
) -> OffsetMatrix<T> {
    let mut m = OffsetMatrix::new(default_value);
    for &(row, col, value) in triples {
        m.set(row, col, value)
            .unwrap_or_else(|e| panic!("fixture write ({row}, {col}) failed: {e}"));
    }
    m
}

/// A matrix with rows `[-rows/2, rows/2)`. Every other row is left empty;
/// populated rows hold `row * 1000 + col` for a run of columns whose
/// start and length depend on the row.
pub fn checkerboard_matrix(rows: usize, default_value: i32) -> OffsetMatrix<i32> {
    let half = (rows / 2) as Coord;
    let mut triples = Vec::new();
    for row in -half..(rows as Coord - half) {
        if row.rem_euclid(2) == 1 {
            continue;
        }
        let start = -(row.abs() % 5);
        let len = 1 + (row.abs() % 7);
        for col in start..start + len {
            triples.push((row, col, (row * 1000 + col) as i32));
        }
    }
    let mut m = matrix_from_triples(&triples, default_value);
    if rows > 0 {
        // Make the row range cover the requested rows even when the edge
        // rows are empty.
        m.get_row_mut(-half).expect("first row");
        m.get_row_mut(rows as Coord - half - 1).expect("last row");
    }
    m
}

/// Panic unless `a` and `b` read the same at every coordinate of
/// `rows × cols`.
pub fn assert_same_reads<T>(
    a: &OffsetMatrix<T>,
    b: &OffsetMatrix<T>,
    rows: std::ops::RangeInclusive<Coord>,
    cols: std::ops::RangeInclusive<Coord>,
) where
    T: Copy + PartialEq + std::fmt::Debug,
{
    for row in rows {
        for col in cols.clone() {
            assert_eq!(a.get(row, col), b.get(row, col), "mismatch at ({row}, {col})");
        }
    }
}
