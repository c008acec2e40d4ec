//! Offset-addressed vector and matrix containers.
//!
//! Both containers index by absolute, signed coordinates and grow their
//! dense backing storage in either direction as out-of-range coordinates
//! are written. Reads never grow storage: unmaterialized coordinates
//! report the container's default value.
//!
//! # Architecture
//!
//! - [`OffsetVector`] holds one dense run of values for `[min, max]`
//! - [`OffsetMatrix`] holds one `OffsetVector` per row for `[min, max]`,
//!   rows stored inline and independently sized
//! - Both share the same growth routine, applied to values or to rows
//! - [`codec`] persists a matrix in a fixed-width native-order layout;
//!   [`OffsetMatrix::save`] and [`OffsetMatrix::load`] wrap it for files
//!
//! # Write policy
//!
//! Every write materializes its coordinate, including writes of the
//! default value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
mod growth;
pub mod matrix;
mod persist;
pub mod vector;

pub use codec::Layout;
pub use matrix::OffsetMatrix;
pub use vector::OffsetVector;

pub use offstore_core::{CodecError, Coord, Element, StoreConfig, StoreError};
