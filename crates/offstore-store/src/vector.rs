//! One-dimensional offset-addressed storage.
//!
//! [`OffsetVector`] holds a dense run of values for the coordinates
//! `[min, max]` and answers every other coordinate with its default value.
//! Writing outside the run grows it in whichever direction is needed.

use std::ops::Index;

use offstore_core::{last_coord, slot_index, Coord, StoreConfig, StoreError};

use crate::growth;

/// A dense run of values addressed by absolute coordinate.
///
/// Writes always materialize: storing a value equal to the default still
/// grows the run to cover the coordinate, so [`len`](Self::len),
/// [`min`](Self::min) and [`max`](Self::max) reflect every write.
///
/// # Examples
///
/// ```
/// use offstore_store::OffsetVector;
///
/// let mut v = OffsetVector::new(-1i32);
/// v.set(42, 7).unwrap();
/// v.set(20, 3).unwrap();
///
/// assert_eq!(v.min(), 20);
/// assert_eq!(v.max(), Some(42));
/// assert_eq!(v.len(), 23);
/// assert_eq!(v.get(42), 7);
/// assert_eq!(v.get(30), -1); // inside the run, never written
/// assert_eq!(v.get(99), -1); // outside the run
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetVector<T> {
    min: Coord,
    slots: Vec<T>,
    default_value: T,
    config: StoreConfig,
}

impl<T: Copy + PartialEq> OffsetVector<T> {
    /// Create an empty vector with default limits.
    pub fn new(default_value: T) -> Self {
        Self::with_config(default_value, StoreConfig::new())
    }

    /// Create an empty vector with the given limits.
    pub fn with_config(default_value: T, config: StoreConfig) -> Self {
        Self {
            min: 0,
            slots: Vec::new(),
            default_value,
            config,
        }
    }

    /// Create a vector spanning `len` slots from `min`, every slot holding
    /// `default_value`.
    pub fn with_span(min: Coord, len: usize, default_value: T) -> Result<Self, StoreError> {
        Self::with_span_in(min, len, default_value, StoreConfig::new())
    }

    /// As [`with_span`](Self::with_span), under the given limits.
    ///
    /// The span is checked before anything is allocated.
    pub fn with_span_in(
        min: Coord,
        len: usize,
        default_value: T,
        config: StoreConfig,
    ) -> Result<Self, StoreError> {
        let mut v = Self::with_config(default_value, config);
        if len > 0 {
            v.check_span(min, len)?;
        }
        v.replace_span(min, vec![default_value; len])?;
        Ok(v)
    }

    /// Create a vector whose first value sits at `min`.
    pub fn from_values<I>(min: Coord, values: I, default_value: T) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_in(min, values, default_value, StoreConfig::new())
    }

    /// As [`from_values`](Self::from_values), under the given limits.
    ///
    /// At most `max_span + 1` values are drawn from `values`, so an
    /// unbounded iterator fails with [`StoreError::SpanTooLarge`].
    pub fn from_values_in<I>(
        min: Coord,
        values: I,
        default_value: T,
        config: StoreConfig,
    ) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::with_config(default_value, config);
        let slots: Vec<T> = values
            .into_iter()
            .take(config.max_span.saturating_add(1))
            .collect();
        v.replace_span(min, slots)?;
        Ok(v)
    }

    /// Coordinate of the first slot; `0` when empty.
    pub fn min(&self) -> Coord {
        self.min
    }

    /// Coordinate of the last slot, or `None` when empty.
    pub fn max(&self) -> Option<Coord> {
        // Construction and growth keep `min + len - 1` representable.
        self.slots
            .len()
            .checked_sub(1)
            .map(|n| self.min + n as Coord)
    }

    /// Number of materialized slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is materialized.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value reported for unmaterialized coordinates.
    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// The limits this vector grows under.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether `col` lies inside the materialized run.
    pub fn is_in(&self, col: Coord) -> bool {
        self.lookup(col).is_some()
    }

    /// Value at `col`, or the default when `col` is not materialized.
    pub fn get(&self, col: Coord) -> T {
        self.get_or(col, self.default_value)
    }

    /// Value at `col`, or `fallback` when `col` is not materialized.
    pub fn get_or(&self, col: Coord, fallback: T) -> T {
        self.lookup(col).copied().unwrap_or(fallback)
    }

    /// Store `val` at `col`, growing with the vector's own default.
    pub fn set(&mut self, col: Coord, val: T) -> Result<(), StoreError> {
        self.set_with_fill(col, val, self.default_value)
    }

    /// Store `val` at `col`; slots created to reach `col` hold `fill`.
    ///
    /// On error the vector is unchanged.
    pub fn set_with_fill(&mut self, col: Coord, val: T, fill: T) -> Result<(), StoreError> {
        let index = growth::cover(&mut self.slots, &mut self.min, col, &self.config, || fill)?;
        self.slots[index] = val;
        Ok(())
    }

    /// Drop every slot and reset `min` to `0`.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.min = 0;
    }

    /// Move the contents out, leaving this vector empty with the same
    /// default and limits.
    pub fn take(&mut self) -> Self {
        let taken = Self {
            min: self.min,
            slots: std::mem::take(&mut self.slots),
            default_value: self.default_value,
            config: self.config,
        };
        self.min = 0;
        taken
    }

    /// Release spare capacity in the backing storage.
    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// The materialized run, first slot at [`min`](Self::min).
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Iterate `(coordinate, value)` over the materialized run in
    /// ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        let min = self.min;
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, v)| (min + i as Coord, *v))
    }

    /// Number of materialized slots equal to `val`.
    pub fn count(&self, val: &T) -> usize {
        self.slots.iter().filter(|v| *v == val).count()
    }

    /// Replace the whole run with `slots` starting at `min`.
    ///
    /// An empty `slots` leaves the vector empty with `min` reset to `0`.
    pub(crate) fn replace_span(&mut self, min: Coord, slots: Vec<T>) -> Result<(), StoreError> {
        if slots.is_empty() {
            self.clear();
            return Ok(());
        }
        self.check_span(min, slots.len())?;
        self.min = min;
        self.slots = slots;
        Ok(())
    }

    /// Whether a non-empty run of `len` slots from `min` fits the limits.
    fn check_span(&self, min: Coord, len: usize) -> Result<(), StoreError> {
        if !self.config.allows(len) {
            return Err(StoreError::SpanTooLarge {
                requested: len,
                limit: self.config.max_span,
            });
        }
        last_coord(min, len)?;
        Ok(())
    }

    fn lookup(&self, col: Coord) -> Option<&T> {
        if col < self.min {
            return None;
        }
        slot_index(self.min, col)
            .ok()
            .and_then(|i| self.slots.get(i))
    }
}

impl<T: Copy + PartialEq> Index<Coord> for OffsetVector<T> {
    type Output = T;

    /// Borrow the value at `col`, or the default when not materialized.
    fn index(&self, col: Coord) -> &T {
        self.lookup(col).unwrap_or(&self.default_value)
    }
}
