//! # psp
//!
//! Prototype-based similarity partitioning: classify a data set from a
//! precomputed matrix of pairwise similarities and a threshold.
//!
//! The greedy pass lives in [`partition`]; [`ClassMap`] wraps its result with
//! the operations that reshape a classification (reassign, sort, truncate)
//! and extend it to a larger data set (augment). [`matrix`] builds and checks
//! similarity matrices, and [`report`] renders class tables.
//!
//! Enable the `parallel` feature to spread row-wise work over rayon, and
//! `serde` to serialize results.

/// Error types used across `psp`.
pub mod error;
pub mod matrix;
pub mod partition;
pub mod report;

#[cfg(test)]
mod partition_tests;

pub use error::{Error, Result};
pub use matrix::{build_similarity_matrix, validate_inputs, ValidationConfig};
pub use partition::{
    partition, Augmentation, ClassEntry, ClassMap, ClassMapConfig, Partition, UNCLASSIFIED,
};
pub use report::{ClassTable, DEFAULT_MAX_LINES};
