//! Bidirectional span growth shared by vectors (over values) and matrices
//! (over rows).

use offstore_core::{slot_index, Coord, StoreConfig, StoreError};

/// Grow `slots` (whose first slot sits at `*min`) until it covers `coord`,
/// returning the slot index of `coord`.
///
/// New slots come from `fresh`. Growing downward appends the fresh slots
/// and rotates them to the head, so existing slots are moved rather than
/// cloned. Every check runs before the first mutation: on error, `slots`
/// and `min` are untouched.
pub(crate) fn cover<E>(
    slots: &mut Vec<E>,
    min: &mut Coord,
    coord: Coord,
    config: &StoreConfig,
    mut fresh: impl FnMut() -> E,
) -> Result<usize, StoreError> {
    if slots.is_empty() {
        check_limit(config, 1)?;
        slots.push(fresh());
        *min = coord;
        return Ok(0);
    }

    if coord < *min {
        let shift = slot_index(coord, *min)?;
        let new_len = slots.len().saturating_add(shift);
        check_limit(config, new_len)?;
        log::trace!("growing span down by {shift} slots to start at {coord}");
        slots.resize_with(new_len, &mut fresh);
        slots.rotate_right(shift);
        *min = coord;
        return Ok(0);
    }

    let index = slot_index(*min, coord)?;
    if index >= slots.len() {
        check_limit(config, index.saturating_add(1))?;
        slots.resize_with(index + 1, fresh);
    }
    Ok(index)
}

fn check_limit(config: &StoreConfig, requested: usize) -> Result<(), StoreError> {
    if config.allows(requested) {
        Ok(())
    } else {
        Err(StoreError::SpanTooLarge {
            requested,
            limit: config.max_span,
        })
    }
}
