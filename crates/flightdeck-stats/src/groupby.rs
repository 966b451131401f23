//! Grouped aggregations over the categorical catalog columns.
//!
//! Both operations accumulate in a single pass and sort the result
//! themselves instead of leaning on the dataframe's group ordering: the
//! tie-break (first appearance in the dataset) is part of the contract.

use std::cmp::Ordering;
use std::collections::HashMap;

use anyhow::Result;

use flightdeck_core::catalog::CategoricalColumn;

use crate::frame::FlightFrame;
use crate::summary::checked_numeric;

/// Occurrence count per distinct value of a categorical column.
///
/// Ordered by count descending; equal counts keep the order in which the
/// values first appear in the dataset.
pub fn count_by(frame: &FlightFrame, column: &str) -> Result<Vec<(String, usize)>> {
    let column = CategoricalColumn::from_name(column)?;
    let values = frame.frame().column(column.as_str())?.utf8()?;

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        let Some(value) = value else { continue };
        counts
            .entry(value)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, idx));
    }

    let mut rows: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    Ok(rows
        .into_iter()
        .map(|(value, count, _)| (value.to_string(), count))
        .collect())
}

struct GroupAcc {
    sum: f64,
    count: usize,
    first: usize,
}

/// Arithmetic mean of a numeric column per distinct value of a categorical
/// column.
///
/// Ordered by mean descending; equal means keep first-appearance order.
/// Every group holds at least one row by construction, so the mean is
/// always defined.
pub fn mean_by(
    frame: &FlightFrame,
    group_column: &str,
    value_column: &str,
) -> Result<Vec<(String, f64)>> {
    let group = CategoricalColumn::from_name(group_column)?;
    let value_series = checked_numeric(frame.frame(), value_column)?;
    let values = value_series.f64()?;
    let groups = frame.frame().column(group.as_str())?.utf8()?;

    let mut accs: HashMap<&str, GroupAcc> = HashMap::new();
    for (idx, (key, value)) in groups.into_iter().zip(values.into_iter()).enumerate() {
        if let (Some(key), Some(value)) = (key, value) {
            let acc = accs.entry(key).or_insert(GroupAcc {
                sum: 0.0,
                count: 0,
                first: idx,
            });
            acc.sum += value;
            acc.count += 1;
        }
    }

    let mut rows: Vec<(&str, f64, usize)> = accs
        .into_iter()
        .map(|(key, acc)| (key, acc.sum / acc.count as f64, acc.first))
        .collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.2.cmp(&b.2))
    });
    Ok(rows
        .into_iter()
        .map(|(key, mean, _)| (key.to_string(), mean))
        .collect())
}
