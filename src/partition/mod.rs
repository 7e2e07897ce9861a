//! Prototype-based similarity partitioning.
//!
//! Classify a data set using nothing but pairwise similarities in [0, 1]
//! and a threshold. No coordinates, centroids, or iterations to convergence:
//!
//! 1. **Greedy pass** ([`partition`]): repeatedly take the unclassified
//!    element with the most unclassified neighbors (similarity >= threshold)
//!    as a prototype, and put it and those neighbors in a new class.
//! 2. **Reassign** ([`ClassMap::reassign`]): move every element to its most
//!    similar prototype, threshold ignored.
//! 3. **Sort** ([`ClassMap::sort`]): renumber classes by descending size.
//! 4. **Truncate** ([`ClassMap::truncate`]): keep the largest prototypes only,
//!    then reassign and sort.
//! 5. **Augment** ([`ClassMap::augment`]): classify a larger data set against
//!    the retained prototypes from a cross-similarity matrix.
//!
//! Classes are numbered from 1 in order of discovery (or size, after a sort).
//!
//! ## Ties
//!
//! Every argmax in this module takes the first maximum: the lowest remaining
//! index in the greedy pass, the lowest class number in reassignment and
//! augmentation. A different convention gives a different, equally valid
//! partition, so it is kept fixed for reproducibility.
//!
//! ## Not k-means
//!
//! The result is a deterministic greedy cover, not an optimum. Classes are
//! not refined after the greedy pass except by the explicit operations above.
//!
//! ## Usage
//!
//! ```rust
//! use ndarray::array;
//! use psp::partition::ClassMap;
//!
//! let points = [0.0_f32, 0.1, 0.2, 5.0, 5.1];
//! let sim = psp::matrix::build_similarity_matrix(&points, |a, b| {
//!     (-(a - b).abs()).exp()
//! })
//! .unwrap();
//!
//! let mut classes = ClassMap::new(&points, sim.view(), 0.5).unwrap();
//! classes.sort();
//! assert_eq!(classes.assignments(), &[1, 1, 1, 2, 2]);
//!
//! let more = [0.05_f32, 5.05, 9.0];
//! let sim2 = array![[0.95_f32, 0.01], [0.01, 0.95], [0.0, 0.02]];
//! let extended = classes.augment(&more, sim2.view()).unwrap();
//! assert_eq!(extended.assignments, vec![1, 2, 2]);
//! ```

mod augment;
mod classmap;
mod greedy;
mod index;

pub use augment::Augmentation;
pub use classmap::{ClassMap, ClassMapConfig};
pub use greedy::{partition, Partition};
pub use index::{ClassEntry, UNCLASSIFIED};
