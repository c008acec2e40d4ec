//! The [`Coord`] type alias and checked span arithmetic.
//!
//! Coordinates are absolute and signed. Every conversion between a
//! coordinate and a slot index goes through the helpers here so that no
//! caller ever wraps silently.

use crate::error::StoreError;

/// An absolute row or column coordinate.
///
/// Signed and 64 bits wide, so spans may sit anywhere on the integer
/// line, including below zero.
pub type Coord = i64;

/// Slot index of `coord` within a span whose first slot is `min`.
///
/// Callers guarantee `coord >= min`. Returns
/// [`StoreError::CoordinateOverflow`] when the distance does not fit in
/// a `usize` (or in a `Coord` in the first place).
///
/// # Examples
///
/// ```
/// use offstore_core::slot_index;
///
/// assert_eq!(slot_index(-3, 4).unwrap(), 7);
/// assert!(slot_index(i64::MIN, i64::MAX).is_err());
/// ```
pub fn slot_index(min: Coord, coord: Coord) -> Result<usize, StoreError> {
    coord
        .checked_sub(min)
        .and_then(|d| usize::try_from(d).ok())
        .ok_or(StoreError::CoordinateOverflow { coord, min })
}

/// Coordinate of the last slot of a span of `len` slots starting at `min`.
///
/// `len` must be at least one.
pub fn last_coord(min: Coord, len: usize) -> Result<Coord, StoreError> {
    let overflow = StoreError::CoordinateOverflow {
        coord: min,
        min,
    };
    let steps = len
        .checked_sub(1)
        .and_then(|n| Coord::try_from(n).ok())
        .ok_or(overflow.clone())?;
    min.checked_add(steps).ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_from_negative_min() {
        assert_eq!(slot_index(-10, -10).unwrap(), 0);
        assert_eq!(slot_index(-10, 5).unwrap(), 15);
    }

    #[test]
    fn slot_index_rejects_unrepresentable_distance() {
        let err = slot_index(i64::MIN, 0).unwrap_err();
        assert_eq!(
            err,
            StoreError::CoordinateOverflow {
                coord: 0,
                min: i64::MIN
            }
        );
        assert!(slot_index(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn slot_index_rejects_coord_below_min() {
        assert!(slot_index(5, 4).is_err());
    }

    #[test]
    fn last_coord_of_single_slot_is_min() {
        assert_eq!(last_coord(42, 1).unwrap(), 42);
        assert_eq!(last_coord(-1, 3).unwrap(), 1);
    }

    #[test]
    fn last_coord_rejects_wrap() {
        assert!(last_coord(i64::MAX, 2).is_err());
        assert!(last_coord(0, 0).is_err());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn index_and_last_coord_agree(
                min in -1_000_000i64..1_000_000,
                len in 1usize..10_000,
            ) {
                let last = last_coord(min, len).unwrap();
                prop_assert_eq!(slot_index(min, last).unwrap(), len - 1);
            }
        }
    }
}
