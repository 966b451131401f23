//! Descriptive summaries and the fare-distribution histogram.

use anyhow::{bail, Result};
use polars::prelude::*;
use serde::Serialize;

use flightdeck_core::error::FlightdeckError;

use crate::frame::FlightFrame;

/// Count/mean/std/min/quartiles/max for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); 0.0 for a single value.
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Descriptive statistics for every numeric column of the frame.
pub fn describe(frame: &FlightFrame) -> Result<Vec<ColumnSummary>> {
    let df = frame.frame();
    let mut summaries = Vec::new();
    for name in numeric_columns(df) {
        let mut values = numeric_values(df, &name)?;
        values.sort_by(|a, b| a.total_cmp(b));
        summaries.push(summarize(&name, &values));
    }
    Ok(summaries)
}

/// Names of the numeric columns, in dataset order.
pub(crate) fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|series| series.dtype().is_numeric())
        .map(|series| series.name().to_string())
        .collect()
}

/// Non-null values of a numeric column as f64, in dataset order.
///
/// A non-numeric column is a schema error rather than a silent parse.
pub(crate) fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let series = checked_numeric(df, column)?;
    Ok(series.f64()?.into_iter().flatten().collect())
}

/// Cast a column to Float64 after verifying it is numeric to begin with.
pub(crate) fn checked_numeric(df: &DataFrame, column: &str) -> Result<Series> {
    let series = df.column(column)?;
    if !series.dtype().is_numeric() {
        return Err(
            FlightdeckError::Schema(format!("column \"{column}\" is not numeric")).into(),
        );
    }
    Ok(series.cast(&DataType::Float64)?)
}

fn summarize(column: &str, sorted: &[f64]) -> ColumnSummary {
    let count = sorted.len();
    let mean = if count == 0 {
        f64::NAN
    } else {
        sorted.iter().sum::<f64>() / count as f64
    };
    let std_dev = if count < 2 {
        0.0
    } else {
        let squared: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
        (squared / (count - 1) as f64).sqrt()
    };
    ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: percentile(sorted, 0.25),
        median: percentile(sorted, 0.5),
        q75: percentile(sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Percentile by linear interpolation between closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

/// One equal-width histogram bucket.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over a numeric column.
///
/// The final bin is inclusive of the maximum; a constant column collapses
/// into a single bin holding every value.
pub fn histogram(frame: &FlightFrame, column: &str, bins: usize) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        bail!("histogram needs at least one bin");
    }
    let values = numeric_values(frame.frame(), column)?;
    if values.is_empty() {
        bail!("column \"{column}\" has no values to bin");
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &values {
        let bucket = (((value - min) / width) as usize).min(bins - 1);
        counts[bucket] += 1;
    }
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + idx as f64 * width,
            upper: min + (idx + 1) as f64 * width,
            count,
        })
        .collect())
}
