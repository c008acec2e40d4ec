//! Test utilities and fixtures for offstore development.
//!
//! Provides deterministic coordinate orders and pre-populated matrices
//! for the integration tests and benchmarks, plus a comparison helper
//! that checks two matrices read identically over a window.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_same_reads, checkerboard_matrix, matrix_from_triples, zigzag_coords, ZIGZAG_STRIDE,
};
