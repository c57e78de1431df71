//! Residuals around group means

use crate::errors::{StatsError, StatsResult};

/// Mean fitted to one group (or to the whole sample when ungrouped)
#[derive(Debug, Clone)]
pub struct GroupMean {
    /// Group label; `None` for the grand mean
    pub label: Option<String>,
    /// Fitted mean
    pub mean: f64,
    /// Observations in the group
    pub n: usize,
}

/// One residual per observation, in input order
#[derive(Debug, Clone)]
pub struct ResidualSet {
    /// observation minus its fitted mean
    pub residuals: Vec<f64>,
    /// Fitted mean per observation
    pub fitted: Vec<f64>,
    /// The means that were subtracted, one per group
    pub means: Vec<GroupMean>,
}

/// Compute residuals as observation minus its group mean, or minus the
/// grand mean when `groups` is `None`.
///
/// Residuals stay aligned with the input: observation `i` yields
/// `residuals[i]`. Within each group the residuals sum to (numerically
/// near) zero.
pub fn compute_residuals(values: &[f64], groups: Option<&[String]>) -> StatsResult<ResidualSet> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { field: "values" });
    }

    let Some(labels) = groups else {
        let grand = values.iter().sum::<f64>() / values.len() as f64;
        return Ok(ResidualSet {
            residuals: values.iter().map(|v| v - grand).collect(),
            fitted: vec![grand; values.len()],
            means: vec![GroupMean {
                label: None,
                mean: grand,
                n: values.len(),
            }],
        });
    };

    if labels.len() != values.len() {
        return Err(StatsError::DimensionMismatchMsg(format!(
            "{} values but {} group labels",
            values.len(),
            labels.len()
        )));
    }

    // First-appearance order; group counts are tiny here, linear scan is fine
    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for (value, label) in values.iter().zip(labels) {
        match sums.iter_mut().find(|(l, _, _)| l == label) {
            Some((_, sum, n)) => {
                *sum += value;
                *n += 1;
            }
            None => sums.push((label.clone(), *value, 1)),
        }
    }

    let means: Vec<GroupMean> = sums
        .into_iter()
        .map(|(label, sum, n)| GroupMean {
            label: Some(label),
            mean: sum / n as f64,
            n,
        })
        .collect();

    let mut fitted = Vec::with_capacity(values.len());
    for label in labels {
        let gm = means
            .iter()
            .find(|m| m.label.as_deref() == Some(label.as_str()))
            .ok_or_else(|| StatsError::InvalidInput(format!("unknown group '{label}'")))?;
        fitted.push(gm.mean);
    }

    Ok(ResidualSet {
        residuals: values.iter().zip(&fitted).map(|(v, f)| v - f).collect(),
        fitted,
        means,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grand_mean_residuals_sum_to_zero() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let set = compute_residuals(&values, None).unwrap();

        assert_eq!(set.residuals.len(), 8);
        assert_eq!(set.means.len(), 1);
        assert!((set.means[0].mean - 5.0).abs() < 1e-12);
        assert!(set.residuals.iter().sum::<f64>().abs() < 1e-10);
        assert!((set.residuals[0] - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_per_group_residuals_sum_to_zero() {
        let values = [1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
        let groups = labels(&["a", "a", "a", "b", "b", "b"]);
        let set = compute_residuals(&values, Some(&groups)).unwrap();

        for gm in &set.means {
            let sum: f64 = set
                .residuals
                .iter()
                .zip(&groups)
                .filter(|(_, l)| Some(l.as_str()) == gm.label.as_deref())
                .map(|(r, _)| r)
                .sum();
            assert!(sum.abs() < 1e-10);
        }
        assert_eq!(set.means[0].mean, 2.0);
        assert_eq!(set.means[1].mean, 20.0);
    }

    #[test]
    fn test_residuals_stay_aligned_with_input() {
        let values = [1.0, 10.0, 3.0, 30.0];
        let groups = labels(&["a", "b", "a", "b"]);
        let set = compute_residuals(&values, Some(&groups)).unwrap();

        assert_eq!(set.fitted, vec![2.0, 20.0, 2.0, 20.0]);
        assert_eq!(set.residuals, vec![-1.0, -10.0, 1.0, 10.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = compute_residuals(&[1.0, 2.0], Some(&labels(&["a"])));
        assert!(matches!(
            result,
            Err(StatsError::DimensionMismatchMsg(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_residuals(&[], None).is_err());
    }
}
