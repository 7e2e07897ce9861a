//! The greedy covering pass.
//!
//! Each iteration picks the unclassified element with the most unclassified
//! neighbors (similarity at or above the threshold) and turns it and all of
//! those neighbors into one class:
//!
//! ```text
//! live = [0 .. N)
//! while live not empty:
//!     p       = argmax_i  |{ j in live : sim[i][j] >= t }|     (first i wins ties)
//!     members = { j in live : sim[p][j] >= t }
//!     classify members, live -= members
//! ```
//!
//! The mask and the array of live original indices shrink together, so row
//! `r` of the mask always describes original index `live[r]`.
//!
//! # Complexity
//!
//! - **Time**: O(N²) per iteration for the degree count, at most N
//!   iterations; in practice the mask shrinks quickly.
//! - **Space**: O(N²) for the boolean mask.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::index::{argmax, UNCLASSIFIED};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2, Axis};
use tracing::debug;

/// Output of the greedy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// 1-based class number of every element.
    pub assignments: Vec<usize>,
    /// Prototype index per class, in discovery order.
    pub prototypes: Vec<usize>,
    /// Member indices per class, ascending.
    pub members: Vec<Vec<usize>>,
}

impl Partition {
    /// Number of classes found.
    pub fn n_classes(&self) -> usize {
        self.prototypes.len()
    }
}

/// Partition a data set from its similarity matrix.
///
/// # Arguments
///
/// * `simmat` - N×N symmetric similarity matrix, values in [0, 1], ones on
///   the diagonal. Not validated beyond squareness; see
///   [`crate::matrix::validate_inputs`].
/// * `thresh` - Minimum similarity for two elements to count as neighbors.
///
/// # Errors
///
/// - [`Error::NotSquare`] if the matrix is not square.
/// - [`Error::EmptyInput`] if N is zero.
/// - [`Error::InvalidParameter`] if `thresh` is not in [0, 1].
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use psp::partition;
///
/// let sim = array![
///     [1.0_f32, 0.9, 0.1, 0.1],
///     [0.9, 1.0, 0.1, 0.1],
///     [0.1, 0.1, 1.0, 0.8],
///     [0.1, 0.1, 0.8, 1.0],
/// ];
/// let p = partition(sim.view(), 0.5).unwrap();
///
/// assert_eq!(p.assignments, vec![1, 1, 2, 2]);
/// assert_eq!(p.prototypes, vec![0, 2]);
/// ```
pub fn partition(simmat: ArrayView2<'_, f32>, thresh: f32) -> Result<Partition> {
    let (rows, cols) = simmat.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(Error::EmptyInput);
    }
    if !(0.0..=1.0).contains(&thresh) {
        return Err(Error::InvalidParameter {
            name: "thresh",
            message: "must be between 0 and 1",
        });
    }
    let n = rows;

    let mut mask: Array2<bool> = simmat.mapv(|s| s >= thresh);
    // Every element neighbors itself, whatever the diagonal holds.
    mask.diag_mut().fill(true);

    let mut live: Vec<usize> = (0..n).collect();
    let mut assignments = vec![UNCLASSIFIED; n];
    let mut prototypes = Vec::new();
    let mut members = Vec::new();

    while !live.is_empty() {
        let degrees = row_degrees(mask.view());
        let Some(row) = argmax(degrees) else {
            break;
        };

        let (hits, keep): (Vec<usize>, Vec<usize>) = (0..live.len()).partition(|&j| mask[[row, j]]);

        let class = prototypes.len() + 1;
        let class_members: Vec<usize> = hits.iter().map(|&j| live[j]).collect();
        for &idx in &class_members {
            assignments[idx] = class;
        }
        prototypes.push(live[row]);

        mask = mask.select(Axis(0), &keep).select(Axis(1), &keep);
        live = keep.iter().map(|&j| live[j]).collect();

        debug!(
            class,
            prototype = prototypes[class - 1],
            members = class_members.len(),
            unclassified = live.len(),
            "found class"
        );
        members.push(class_members);
    }

    Ok(Partition {
        assignments,
        prototypes,
        members,
    })
}

fn row_degrees(mask: ArrayView2<'_, bool>) -> Vec<usize> {
    let degree = |r: usize| mask.row(r).iter().filter(|&&m| m).count();

    #[cfg(feature = "parallel")]
    {
        (0..mask.nrows()).into_par_iter().map(degree).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..mask.nrows()).map(degree).collect()
    }
}
