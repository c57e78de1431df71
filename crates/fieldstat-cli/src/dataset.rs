//! CSV ingestion: named columns into a [`Sample`].

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use fieldstat_core::Sample;

/// Load one measurement column from a CSV file, optionally tagged with a
/// group column and a pairing-id column.
///
/// Missing files, missing columns, and non-numeric measurement cells are
/// immediate errors; nothing is coerced or retried.
pub fn load_sample(
    path: &Path,
    value_column: &str,
    group_column: Option<&str>,
    id_column: Option<&str>,
) -> Result<Sample> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("cannot read header row of {}", path.display()))?
        .clone();

    let column_index = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("column '{name}' not found (have: {})", headers.iter().collect::<Vec<_>>().join(", ")))
    };

    let value_idx = column_index(value_column)?;
    let group_idx = group_column.map(column_index).transpose()?;
    let id_idx = id_column.map(column_index).transpose()?;

    let mut values = Vec::new();
    let mut groups = Vec::new();
    let mut ids = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV row {}", row + 2))?;
        let cell = record
            .get(value_idx)
            .with_context(|| format!("row {} is missing column '{value_column}'", row + 2))?;
        let value: f64 = cell.parse().with_context(|| {
            format!("row {}: '{cell}' in column '{value_column}' is not numeric", row + 2)
        })?;
        values.push(value);

        if let Some(idx) = group_idx {
            let label = record
                .get(idx)
                .with_context(|| format!("row {} is missing its group label", row + 2))?;
            groups.push(label.to_string());
        }
        if let Some(idx) = id_idx {
            let id = record
                .get(idx)
                .with_context(|| format!("row {} is missing its pairing id", row + 2))?;
            ids.push(id.to_string());
        }
    }

    debug!(rows = values.len(), grouped = group_idx.is_some(), "loaded dataset");

    let mut sample = if groups.is_empty() {
        Sample::new(values)?
    } else {
        Sample::with_groups(values, groups)?
    };
    if !ids.is_empty() {
        sample = sample.with_ids(ids)?;
    }
    Ok(sample)
}

/// Split a grouped, id-tagged sample into two columns paired by id, in
/// the id order of the first group.
///
/// An id present in only one group, or repeated within a group, is a
/// user error.
pub fn paired_columns(sample: &Sample) -> Result<(Vec<f64>, Vec<f64>)> {
    let groups = match &sample.groups {
        Some(g) => g,
        None => bail!("paired analysis needs a group column"),
    };
    let ids = match &sample.ids {
        Some(i) => i,
        None => bail!("paired analysis needs an id column"),
    };

    let ((label_a, _), (label_b, _)) = sample.split_two_groups()?;

    let mut first: Vec<(&str, f64)> = Vec::new();
    let mut second: HashMap<&str, f64> = HashMap::new();
    for ((value, group), id) in sample.values.iter().zip(groups).zip(ids) {
        if *group == label_a {
            if first.iter().any(|(seen, _)| *seen == id.as_str()) {
                bail!("id '{id}' appears twice in group '{label_a}'");
            }
            first.push((id.as_str(), *value));
        } else if second.insert(id.as_str(), *value).is_some() {
            bail!("id '{id}' appears twice in group '{label_b}'");
        }
    }

    let mut column_a = Vec::with_capacity(first.len());
    let mut column_b = Vec::with_capacity(first.len());
    for (id, value) in &first {
        let Some(partner) = second.remove(id) else {
            bail!("id '{id}' is present in group '{label_a}' but not in '{label_b}'");
        };
        column_a.push(*value);
        column_b.push(partner);
    }
    if let Some(orphan) = second.keys().next() {
        bail!("id '{orphan}' is present in group '{label_b}' but not in '{label_a}'");
    }

    Ok((column_a, column_b))
}
