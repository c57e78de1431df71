//! Per-group summaries feeding the mean/SE figure

use crate::describe::{mean, std_error};
use crate::errors::{StatsError, StatsResult};

/// Mean and standard error of one group, the entire input of the
/// summary figure
#[derive(Debug, Clone)]
pub struct GroupSummary {
    /// Group label; empty for an ungrouped sample
    pub label: String,
    /// Observations in the group
    pub n: usize,
    /// Group mean
    pub mean: f64,
    /// Standard error of the mean: s / sqrt(n)
    pub std_error: f64,
}

/// Summarize each group as mean +/- standard error, in first-appearance
/// order. With `groups` absent the whole sample is one unlabeled group.
/// Groups need at least 2 observations for a standard error.
pub fn group_summaries(
    values: &[f64],
    groups: Option<&[String]>,
) -> StatsResult<Vec<GroupSummary>> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { field: "values" });
    }

    let Some(labels) = groups else {
        if values.len() < 2 {
            return Err(StatsError::InsufficientDataMsg(
                "standard error requires at least 2 observations".into(),
            ));
        }
        return Ok(vec![GroupSummary {
            label: String::new(),
            n: values.len(),
            mean: mean(values),
            std_error: std_error(values),
        }]);
    };

    if labels.len() != values.len() {
        return Err(StatsError::DimensionMismatchMsg(format!(
            "{} values but {} group labels",
            values.len(),
            labels.len()
        )));
    }

    let mut order: Vec<(&str, Vec<f64>)> = Vec::new();
    for (value, label) in values.iter().zip(labels) {
        match order.iter_mut().find(|(l, _)| *l == label.as_str()) {
            Some((_, vs)) => vs.push(*value),
            None => order.push((label.as_str(), vec![*value])),
        }
    }

    order
        .into_iter()
        .map(|(label, vs)| {
            if vs.len() < 2 {
                return Err(StatsError::InsufficientDataMsg(format!(
                    "group '{label}' has {} observation(s); standard error requires 2",
                    vs.len()
                )));
            }
            Ok(GroupSummary {
                label: label.to_string(),
                n: vs.len(),
                mean: mean(&vs),
                std_error: std_error(&vs),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ungrouped_summary() {
        let summaries = group_summaries(&[2.0, 4.0, 6.0], None).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].n, 3);
        assert_eq!(summaries[0].mean, 4.0);
        assert!((summaries[0].std_error - 2.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_grouped_summary_in_appearance_order() {
        let values = [10.0, 1.0, 30.0, 3.0];
        let groups = labels(&["high", "low", "high", "low"]);
        let summaries = group_summaries(&values, Some(&groups)).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].label, "high");
        assert_eq!(summaries[0].mean, 20.0);
        assert_eq!(summaries[1].label, "low");
        assert_eq!(summaries[1].mean, 2.0);
    }

    #[test]
    fn test_singleton_group_rejected() {
        let values = [1.0, 2.0, 3.0];
        let groups = labels(&["a", "a", "b"]);
        assert!(group_summaries(&values, Some(&groups)).is_err());
    }
}
