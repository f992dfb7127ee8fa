//! Structure flattening
//!
//! Converts an arbitrarily nested JSON value into a mapping from path
//! strings to scalar leaves. Object keys join with `.`, array elements
//! append `[i]`, and top-level records are seeded with a root marker.

pub mod types;
pub mod flattener;

pub use types::{FlattenConfig, FlattenedRecord, Path, DEFAULT_ROOT_MARKER};
pub use flattener::{flatten, Flattener};
