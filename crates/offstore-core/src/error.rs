//! Error types for the offstore workspace.
//!
//! Split by subsystem: [`StoreError`] for in-memory container operations
//! and [`CodecError`] for persisting and restoring a matrix. Reads of
//! unmaterialized coordinates are never errors; they yield the default.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::coord::Coord;

/// Errors from container growth and row lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The distance between a coordinate and the span start cannot be
    /// represented without wrapping.
    CoordinateOverflow {
        /// The coordinate being addressed.
        coord: Coord,
        /// The current first coordinate of the span.
        min: Coord,
    },
    /// Growing to cover the coordinate would exceed the configured limit.
    SpanTooLarge {
        /// Slot count the growth would have produced.
        requested: usize,
        /// The configured `max_span`.
        limit: usize,
    },
    /// A checked row lookup addressed a row that is not materialized.
    RowNotFound {
        /// The requested row.
        row: Coord,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateOverflow { coord, min } => {
                write!(f, "coordinate overflow: {coord} is unreachable from span start {min}")
            }
            Self::SpanTooLarge { requested, limit } => {
                write!(f, "span too large: requested {requested} slots, limit {limit}")
            }
            Self::RowNotFound { row } => write!(f, "row {row} not found"),
        }
    }
}

impl Error for StoreError {}

/// Errors from saving or loading a matrix.
#[derive(Debug)]
pub enum CodecError {
    /// The target file could not be opened.
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// An I/O error occurred after the stream was open.
    Io(io::Error),
    /// The stream ended before a declared field or value block.
    Truncated {
        /// Which part of the layout was being read.
        detail: String,
    },
    /// A header or row header declares something impossible.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The declared total value count disagrees with the rows read.
    TotalMismatch {
        /// Total from the file header.
        declared: u64,
        /// Sum of the row column counts actually read.
        actual: u64,
    },
    /// Data remains after the last declared row.
    TrailingBytes,
    /// Rebuilding the matrix from the decoded spans failed.
    Store(StoreError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { detail } => write!(f, "truncated input: {detail}"),
            Self::Malformed { detail } => write!(f, "malformed input: {detail}"),
            Self::TotalMismatch { declared, actual } => {
                write!(
                    f,
                    "value count mismatch: header declares {declared}, rows hold {actual}"
                )
            }
            Self::TrailingBytes => write!(f, "unexpected data after the last row"),
            Self::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StoreError> for CodecError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
