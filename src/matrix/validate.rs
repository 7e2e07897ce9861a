use crate::error::{Error, Result};
use ndarray::ArrayView2;

/// Configuration for [`validate_inputs`].
///
/// Disabled by default. Comparisons use the `allclose` rule
/// `|a - b| <= atol + rtol * |b|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Run the checks at all.
    pub enabled: bool,
    /// Relative tolerance.
    pub rtol: f32,
    /// Absolute tolerance.
    pub atol: f32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl ValidationConfig {
    /// Create a new (disabled) validation configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the checks.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set relative tolerance.
    pub fn with_rtol(mut self, rtol: f32) -> Self {
        self.rtol = rtol;
        self
    }

    /// Set absolute tolerance.
    pub fn with_atol(mut self, atol: f32) -> Self {
        self.atol = atol;
        self
    }

    #[inline]
    fn close(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Check the preconditions of a similarity matrix against its data set.
///
/// Checks run in this order and stop at the first failure:
///
/// 1. square ([`Error::NotSquare`])
/// 2. symmetric ([`Error::NotSymmetric`])
/// 3. `data_len` equals the matrix side ([`Error::DimensionMismatch`])
/// 4. ones on the diagonal ([`Error::DiagonalNotOnes`])
///
/// Returns `Ok(())` without looking at the matrix when `config.enabled` is
/// false.
pub fn validate_inputs(
    data_len: usize,
    simmat: ArrayView2<'_, f32>,
    config: &ValidationConfig,
) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let (rows, cols) = simmat.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    let n = rows;

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (simmat[[i, j]], simmat[[j, i]]);
            // allclose is not symmetric in its arguments; test both orders.
            if !config.close(a, b) || !config.close(b, a) {
                return Err(Error::NotSymmetric { row: i, col: j });
            }
        }
    }

    if data_len != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: data_len,
        });
    }

    for (index, &value) in simmat.diag().iter().enumerate() {
        if !config.close(value, 1.0) {
            return Err(Error::DiagonalNotOnes { index, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn enabled() -> ValidationConfig {
        ValidationConfig::new().with_enabled(true)
    }

    #[test]
    fn test_valid_matrix_passes() {
        let sim = array![[1.0_f32, 0.3], [0.3, 1.0]];
        assert!(validate_inputs(2, sim.view(), &enabled()).is_ok());
    }

    #[test]
    fn test_disabled_skips_everything() {
        let sim = array![[0.2_f32, 0.9, 0.1], [0.0, 1.0, 0.4]];
        assert!(validate_inputs(7, sim.view(), &ValidationConfig::default()).is_ok());
    }

    #[test]
    fn test_not_square() {
        let sim = array![[1.0_f32, 0.3, 0.1], [0.3, 1.0, 0.2]];
        assert_eq!(
            validate_inputs(2, sim.view(), &enabled()),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_not_symmetric() {
        let sim = array![[1.0_f32, 0.3, 0.1], [0.3, 1.0, 0.2], [0.1, 0.7, 1.0]];
        assert_eq!(
            validate_inputs(3, sim.view(), &enabled()),
            Err(Error::NotSymmetric { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_symmetry_within_tolerance() {
        let sim = array![[1.0_f32, 0.3], [0.300_000_1, 1.0]];
        assert!(validate_inputs(2, sim.view(), &enabled()).is_ok());

        let strict = enabled().with_rtol(0.0).with_atol(0.0);
        assert!(validate_inputs(2, sim.view(), &strict).is_err());
    }

    #[test]
    fn test_data_length_mismatch() {
        let sim = array![[1.0_f32, 0.3], [0.3, 1.0]];
        assert_eq!(
            validate_inputs(3, sim.view(), &enabled()),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_diagonal_not_ones() {
        let sim = array![[1.0_f32, 0.3], [0.3, 0.9]];
        assert_eq!(
            validate_inputs(2, sim.view(), &enabled()),
            Err(Error::DiagonalNotOnes {
                index: 1,
                value: 0.9
            })
        );
    }
}
