use crate::error::{Error, Result};
use ndarray::Array2;

/// Build the symmetric similarity matrix for `data`.
///
/// `similarity` must return a value in [0, 1], and 1 for identical inputs.
/// It is evaluated once per unordered pair (diagonal included) and the
/// result mirrored across the diagonal.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `data` is empty.
/// - [`Error::SimilarityOutOfRange`] on the first value outside [0, 1]
///   (NaN included).
///
/// # Example
///
/// ```rust
/// use psp::matrix::build_similarity_matrix;
///
/// let data = [0.0_f32, 0.1, 5.0];
/// let sim = build_similarity_matrix(&data, |a, b| 1.0 / (1.0 + (a - b).abs())).unwrap();
///
/// assert_eq!(sim.dim(), (3, 3));
/// assert_eq!(sim[[0, 0]], 1.0);
/// assert_eq!(sim[[0, 2]], sim[[2, 0]]);
/// ```
pub fn build_similarity_matrix<T, F>(data: &[T], similarity: F) -> Result<Array2<f32>>
where
    F: Fn(&T, &T) -> f32,
{
    let n = data.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let mut sim = Array2::<f32>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let s = similarity(&data[i], &data[j]);
            if !(0.0..=1.0).contains(&s) {
                return Err(Error::SimilarityOutOfRange {
                    row: i,
                    col: j,
                    value: s,
                });
            }
            sim[[i, j]] = s;
            sim[[j, i]] = s;
        }
    }

    Ok(sim)
}
