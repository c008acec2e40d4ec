//! Core types for the offstore workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the containers and the codec: the [`Coord`] alias and
//! its checked arithmetic, the fixed-width [`Element`] trait, the
//! [`StoreConfig`] limits, and the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coord;
pub mod element;
pub mod error;

pub use config::StoreConfig;
pub use coord::{last_coord, slot_index, Coord};
pub use element::Element;
pub use error::{CodecError, StoreError};
