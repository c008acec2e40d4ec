//! Benchmark workloads for the offstore containers.
//!
//! - [`dense_profile`]: a square block of rows filled left to right
//! - [`ragged_profile`]: rows of varying width on both sides of zero
//! - [`descending_cols`]: a column order that grows every row downward

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use offstore_core::Coord;
use offstore_store::OffsetMatrix;

/// A `side × side` matrix of `f32` starting at `(0, 0)`, every cell set
/// to `row * side + col`.
pub fn dense_profile(side: usize) -> OffsetMatrix<f32> {
    let mut m = OffsetMatrix::new(0.0f32);
    let n = side as Coord;
    for row in 0..n {
        for col in 0..n {
            m.set(row, col, (row * n + col) as f32).unwrap();
        }
    }
    m
}

/// `rows` rows centred on zero. Row `r` holds `1 + (|r| * 37) % width`
/// values starting at column `-(|r| % 64)`.
pub fn ragged_profile(rows: usize, width: usize) -> OffsetMatrix<u32> {
    let mut m = OffsetMatrix::new(0u32);
    let half = (rows / 2) as Coord;
    let width = width.max(1) as Coord;
    for row in -half..(rows as Coord - half) {
        let start = -(row.abs() % 64);
        let len = 1 + (row.abs() * 37) % width;
        for col in start..start + len {
            m.set(row, col, (row.unsigned_abs() as u32) ^ (col as u32))
                .unwrap();
        }
    }
    m
}

/// `n` column coordinates in strictly descending order ending at zero.
pub fn descending_cols(n: usize) -> Vec<Coord> {
    (0..n as Coord).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_profile_is_full() {
        let m = dense_profile(8);
        assert_eq!(m.len(), 8);
        assert_eq!(m.values(), 64);
        assert_eq!(m.get(7, 7), 63.0);
    }

    #[test]
    fn ragged_profile_spans_both_signs() {
        let m = ragged_profile(100, 50);
        assert_eq!(m.min(), -50);
        assert_eq!(m.max(), Some(49));
        assert!(m.values() > 100);
    }

    #[test]
    fn descending_cols_end_at_zero() {
        assert_eq!(descending_cols(4), vec![3, 2, 1, 0]);
    }
}
