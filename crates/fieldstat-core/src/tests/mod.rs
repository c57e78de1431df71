//! Statistical hypothesis testing
//!
//! The t-test family used by the analysis workflow: one-sample,
//! two-sample (pooled and Welch), and paired.


use std::str::FromStr;

use crate::errors::{StatsError, StatsResult};

/// Alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// Mean differs from the reference (either direction)
    TwoSided,
    /// Mean is below the reference
    Less,
    /// Mean is above the reference
    Greater,
}

impl Alternative {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Less => "less",
            Alternative::Greater => "greater",
        }
    }
}

impl FromStr for Alternative {
    type Err = StatsError;

    fn from_str(s: &str) -> StatsResult<Self> {
        match s {
            "two-sided" | "two_sided" => Ok(Self::TwoSided),
            "less" => Ok(Self::Less),
            "greater" => Ok(Self::Greater),
            other => Err(StatsError::InvalidInput(format!(
                "alternative must be one of 'two-sided', 'less', 'greater' (got '{other}')"
            ))),
        }
    }
}

/// Generic test result structure for the t-test family
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Degrees of freedom (fractional under the Welch correction)
    pub df: f64,
    /// Estimated mean of the first sample (or of the differences, for paired)
    pub mean_a: f64,
    /// Estimated mean of the second sample, for unpaired two-sample tests
    pub mean_b: Option<f64>,
    /// Confidence interval lower bound for the estimated effect
    pub ci_lower: f64,
    /// Confidence interval upper bound for the estimated effect
    pub ci_upper: f64,
    /// Confidence level used
    pub confidence_level: f64,
    /// Total sample size
    pub n: usize,
    /// Group 1 sample size (for two-sample tests)
    pub n1: usize,
    /// Group 2 sample size (for two-sample tests)
    pub n2: usize,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Test method/name
    pub method: String,
}

impl Default for TestResult {
    fn default() -> Self {
        Self {
            statistic: f64::NAN,
            p_value: f64::NAN,
            df: f64::NAN,
            mean_a: f64::NAN,
            mean_b: None,
            ci_lower: f64::NAN,
            ci_upper: f64::NAN,
            confidence_level: 0.95,
            n: 0,
            n1: 0,
            n2: 0,
            alternative: Alternative::TwoSided,
            method: String::new(),
        }
    }
}

/// Filter NaN values from a slice
pub(crate) fn filter_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_from_str() {
        assert_eq!(Alternative::from_str("two-sided").unwrap(), Alternative::TwoSided);
        assert_eq!(Alternative::from_str("two_sided").unwrap(), Alternative::TwoSided);
        assert_eq!(Alternative::from_str("less").unwrap(), Alternative::Less);
        assert_eq!(Alternative::from_str("greater").unwrap(), Alternative::Greater);
        assert!(Alternative::from_str("both").is_err());
    }

    #[test]
    fn test_filter_nan() {
        let filtered = filter_nan(&[1.0, f64::NAN, 2.0]);
        assert_eq!(filtered, vec![1.0, 2.0]);
    }
}
