//! Normal quantile-quantile pairing for residual diagnostics

use statrs::distribution::{ContinuousCDF, Normal};

use crate::errors::{StatsError, StatsResult};
use crate::tests::filter_nan;

/// One point of a QQ plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QqPoint {
    /// Standard-normal quantile at the plotting position (i - 0.5) / n
    pub theoretical: f64,
    /// Observed value of rank i
    pub sample: f64,
}

/// Pair each residual with its theoretical standard-normal quantile.
///
/// NaN residuals are filtered first, as in the tests themselves. The
/// rest are sorted ascending; rank i of n is paired with
/// `Phi^-1((i - 0.5) / n)`. Deterministic, and invariant (as a set of
/// pairs) under any reordering of the input.
pub fn normal_qq(residuals: &[f64]) -> StatsResult<Vec<QqPoint>> {
    let mut sorted = filter_nan(residuals);
    if sorted.is_empty() {
        return Err(StatsError::EmptyInput { field: "residuals" });
    }

    let normal =
        Normal::new(0.0, 1.0).map_err(|e| StatsError::InvalidInput(e.to_string()))?;

    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, sample)| QqPoint {
            theoretical: normal.inverse_cdf((i as f64 + 0.5) / n),
            sample,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plotting_positions() {
        let points = normal_qq(&[3.0, 1.0, 2.0, 4.0, 0.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(points.len(), 8);

        // quantiles at (i - 0.5)/8 for i = 1..8
        let expected = [
            -1.534121, -0.887147, -0.488776, -0.157311, 0.157311, 0.488776, 0.887147, 1.534121,
        ];
        for (point, want) in points.iter().zip(expected) {
            assert!((point.theoretical - want).abs() < 1e-5);
        }
        // samples come back sorted
        assert_eq!(points[0].sample, 0.0);
        assert_eq!(points[7].sample, 7.0);
    }

    #[test]
    fn test_symmetry_of_theoretical_quantiles() {
        let points = normal_qq(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((points[0].theoretical + points[4].theoretical).abs() < 1e-12);
        assert!(points[2].theoretical.abs() < 1e-12);
    }

    #[test]
    fn test_invariant_under_permutation() {
        let a = normal_qq(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        let b = normal_qq(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nan_residuals_are_filtered() {
        let clean = normal_qq(&[0.3, -0.1, 0.2, -0.4]).unwrap();
        let with_nan = normal_qq(&[0.3, f64::NAN, -0.1, 0.2, f64::NAN, -0.4]).unwrap();
        assert_eq!(with_nan, clean);
    }

    #[test]
    fn test_empty_input() {
        assert!(normal_qq(&[]).is_err());
        assert!(normal_qq(&[f64::NAN, f64::NAN]).is_err());
    }
}
