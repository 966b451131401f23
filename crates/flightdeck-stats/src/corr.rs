//! Pairwise Pearson correlation over the numeric columns.

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use crate::frame::FlightFrame;
use crate::summary::{checked_numeric, numeric_columns};

/// Symmetric matrix of Pearson coefficients, diagonal pinned to 1.0.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient for a pair of columns, if both are present.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|column| column == a)?;
        let j = self.columns.iter().position(|column| column == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson coefficients for every pair of numeric columns.
///
/// Each off-diagonal pair is computed once and mirrored, so the matrix is
/// symmetric by construction. Rows where either value is null are skipped
/// pairwise. A zero-variance column correlates as NaN, the convention of
/// the usual statistics stacks.
pub fn correlation_matrix(frame: &FlightFrame) -> Result<CorrelationMatrix> {
    let df = frame.frame();
    let columns = numeric_columns(df);
    let mut casted = Vec::with_capacity(columns.len());
    for name in &columns {
        casted.push(checked_numeric(df, name)?);
    }

    let n = columns.len();
    let mut values = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let r = pearson(casted[i].f64()?, casted[j].f64()?);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    Ok(CorrelationMatrix { columns, values })
}

fn pearson(xs: &Float64Chunked, ys: &Float64Chunked) -> f64 {
    let mut pairs = Vec::with_capacity(xs.len());
    for (x, y) in xs.into_iter().zip(ys.into_iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            pairs.push((x, y));
        }
    }
    if pairs.is_empty() {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::test_support::fixture_frame;
    use crate::frame::FlightFrame;

    #[test]
    fn diagonal_is_exactly_one() {
        let frame = fixture_frame();
        let matrix = correlation_matrix(&frame).unwrap();
        for (i, _) in matrix.columns.iter().enumerate() {
            assert_eq!(matrix.values[i][i], 1.0);
        }
    }

    #[test]
    fn matrix_is_symmetric() {
        let frame = fixture_frame();
        let matrix = correlation_matrix(&frame).unwrap();
        let n = matrix.columns.len();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    #[test]
    fn linear_relations_reach_the_extremes() {
        let df = df![
            "airline" => &["A1", "A1", "A1", "A1"],
            "source_city" => &["Delhi", "Delhi", "Delhi", "Delhi"],
            "destination_city" => &["Mumbai", "Mumbai", "Mumbai", "Mumbai"],
            "departure_time" => &["Morning", "Morning", "Morning", "Morning"],
            "class" => &["Economy", "Economy", "Economy", "Economy"],
            "duration" => &[1.0, 2.0, 3.0, 4.0],
            "days_left" => &[4i64, 3, 2, 1],
            "price" => &[100.0, 200.0, 300.0, 400.0],
        ]
        .unwrap();
        let frame = FlightFrame::from_frame(df).unwrap();
        let matrix = correlation_matrix(&frame).unwrap();
        let price_duration = matrix.get("duration", "price").unwrap();
        assert!((price_duration - 1.0).abs() < 1e-12);
        let price_days = matrix.get("days_left", "price").unwrap();
        assert!((price_days + 1.0).abs() < 1e-12);
    }
}
