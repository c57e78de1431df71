use crate::errors::{StatsError, StatsResult};

/// A column of observations, optionally tagged with group labels and/or
/// pairing identifiers. Labels and identifiers, when present, are parallel
/// to `values`.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Observed measurements, in input order
    pub values: Vec<f64>,
    /// Group label per observation (two distinct labels for two-sample tests)
    pub groups: Option<Vec<String>>,
    /// Pairing identifier per observation (for paired designs)
    pub ids: Option<Vec<String>>,
}

impl Sample {
    /// Ungrouped sample.
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput { field: "values" });
        }
        Ok(Self {
            values,
            groups: None,
            ids: None,
        })
    }

    /// Grouped sample; `groups` must be parallel to `values`.
    pub fn with_groups(values: Vec<f64>, groups: Vec<String>) -> StatsResult<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput { field: "values" });
        }
        if groups.len() != values.len() {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "{} values but {} group labels",
                values.len(),
                groups.len()
            )));
        }
        Ok(Self {
            values,
            groups: Some(groups),
            ids: None,
        })
    }

    /// Attach pairing identifiers; must be parallel to `values`.
    pub fn with_ids(mut self, ids: Vec<String>) -> StatsResult<Self> {
        if ids.len() != self.values.len() {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "{} values but {} pairing ids",
                self.values.len(),
                ids.len()
            )));
        }
        self.ids = Some(ids);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into exactly two groups, ordered by first appearance of the
    /// label. Any other number of distinct labels is an error.
    pub fn split_two_groups(&self) -> StatsResult<((String, Vec<f64>), (String, Vec<f64>))> {
        let groups = self.groups.as_ref().ok_or(StatsError::EmptyInput {
            field: "group labels",
        })?;

        let mut split: Vec<(String, Vec<f64>)> = Vec::new();
        for (value, label) in self.values.iter().zip(groups) {
            match split.iter_mut().find(|(l, _)| l == label) {
                Some((_, vs)) => vs.push(*value),
                None => split.push((label.clone(), vec![*value])),
            }
        }

        if split.len() != 2 {
            return Err(StatsError::InvalidInput(format!(
                "expected exactly 2 groups, found {}",
                split.len()
            )));
        }
        let second = split.pop().ok_or(StatsError::EmptyInput { field: "groups" })?;
        let first = split.pop().ok_or(StatsError::EmptyInput { field: "groups" })?;
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_two_groups_first_appearance_order() {
        let s = Sample::with_groups(
            vec![1.0, 10.0, 2.0, 20.0],
            labels(&["b", "a", "b", "a"]),
        )
        .unwrap();
        let ((l1, g1), (l2, g2)) = s.split_two_groups().unwrap();
        assert_eq!(l1, "b");
        assert_eq!(g1, vec![1.0, 2.0]);
        assert_eq!(l2, "a");
        assert_eq!(g2, vec![10.0, 20.0]);
    }

    #[test]
    fn test_split_rejects_three_groups() {
        let s = Sample::with_groups(vec![1.0, 2.0, 3.0], labels(&["a", "b", "c"])).unwrap();
        assert!(s.split_two_groups().is_err());
    }

    #[test]
    fn test_mismatched_group_length() {
        assert!(Sample::with_groups(vec![1.0, 2.0], labels(&["a"])).is_err());
    }

    #[test]
    fn test_empty_sample() {
        assert!(Sample::new(vec![]).is_err());
    }
}
