//! Similarity matrices: construction and precondition checks.
//!
//! The partitioner consumes a dense N×N matrix of pairwise similarities in
//! [0, 1] with ones on the diagonal. Nothing in [`crate::partition`] needs
//! coordinates or a metric, so the matrix is the only thing that ever touches
//! the raw data.
//!
//! ```text
//!             x0    x1    x2
//!       x0 [ 1.0   0.9   0.1 ]
//!       x1 [ 0.9   1.0   0.2 ]      sim[i][j] == sim[j][i]
//!       x2 [ 0.1   0.2   1.0 ]      sim[i][i] == 1
//! ```
//!
//! For many similarity measures (correlation, kernels over Euclidean
//! distance) a vectorized computation over the whole data set is far faster
//! than [`build_similarity_matrix`], which calls the pairwise function
//! N(N+1)/2 times. Any `Array2<f32>` works as input.
//!
//! [`validate_inputs`] checks symmetry, the diagonal, and the data length.
//! It is off by default: the symmetry check walks the whole matrix, which
//! matters once N reaches the tens of thousands.

mod builder;
mod validate;

pub use builder::build_similarity_matrix;
pub use validate::{validate_inputs, ValidationConfig};
