//! Offstore: vectors and matrices addressed by absolute signed coordinates.
//!
//! This is the facade crate that re-exports the public API of the offstore
//! sub-crates. Storage for a coordinate range is materialized on first
//! write and grows downward as readily as upward; reads outside the
//! materialized range return the container's default value.
//!
//! # Quick start
//!
//! ```rust
//! use offstore::prelude::*;
//!
//! let mut m = OffsetMatrix::new(0i32);
//! m.set(5, -3, 7).unwrap();
//! m.set(-2, 10, 9).unwrap();
//!
//! assert_eq!(m.get(5, -3), 7);
//! assert_eq!(m.get(0, 0), 0);
//! assert_eq!(m.min(), -2);
//! assert_eq!(m.max(), Some(5));
//! assert_eq!(m.values(), 2);
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("m.bin");
//! m.save(&path).unwrap();
//!
//! let mut back = OffsetMatrix::new(0i32);
//! back.load(&path).unwrap();
//! assert_eq!(back, m);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `offstore-core` | Coordinates, element encoding, limits, errors |
//! | [`store`] | `offstore-store` | `OffsetVector`, `OffsetMatrix`, binary codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, element encoding, limits and errors (`offstore-core`).
///
/// The [`types::Element`] trait fixes how a value type is laid out on
/// disk; [`types::StoreConfig`] carries the span limit every container
/// enforces.
pub use offstore_core as types;

/// The containers and their codec (`offstore-store`).
///
/// [`store::OffsetVector`] is a single growable run,
/// [`store::OffsetMatrix`] a sequence of independently sized rows. The
/// [`store::codec`] module exposes stream-level encode and decode.
pub use offstore_store as store;

/// Common imports for typical offstore usage.
///
/// ```rust
/// use offstore::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use offstore_store::{Layout, OffsetMatrix, OffsetVector};

    // Core types
    pub use offstore_core::{Coord, Element, StoreConfig};

    // Errors
    pub use offstore_core::{CodecError, StoreError};
}
