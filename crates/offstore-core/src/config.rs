//! Container limits.

/// Limits applied to every vector and matrix.
///
/// Carried by each container and handed down to the rows a matrix
/// creates. The decoder consults the same limits before trusting counts
/// read from a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Largest number of slots a single span may hold.
    ///
    /// Applies to the columns of one vector and to the row sequence of a
    /// matrix independently. Growth past this limit fails with
    /// [`StoreError::SpanTooLarge`](crate::StoreError::SpanTooLarge)
    /// instead of attempting the allocation.
    ///
    /// Default: 268_435_456 (2^28).
    pub max_span: usize,
}

impl StoreConfig {
    /// Default span limit.
    pub const DEFAULT_MAX_SPAN: usize = 1 << 28;

    /// Create a config with default limits.
    pub const fn new() -> Self {
        Self {
            max_span: Self::DEFAULT_MAX_SPAN,
        }
    }

    /// Replace the span limit.
    pub const fn with_max_span(mut self, max_span: usize) -> Self {
        self.max_span = max_span;
        self
    }

    /// Whether a span of `len` slots is within the limit.
    pub fn allows(&self, len: usize) -> bool {
        len <= self.max_span
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
