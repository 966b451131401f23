//! Exact-match filtering and the fare calculator contract.

use anyhow::{Context, Result};
use polars::prelude::*;

use flightdeck_core::catalog::CategoricalColumn;
use flightdeck_core::record::FlightRecord;

use crate::frame::{records_from, FlightFrame};

/// An exact-match constraint on one categorical column.
#[derive(Debug, Clone)]
pub struct Predicate {
    pub column: CategoricalColumn,
    pub value: String,
}

impl Predicate {
    pub fn new(column: CategoricalColumn, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Rows surviving a conjunction of exact-match predicates, in dataset order.
#[derive(Debug)]
pub struct FlightSubset {
    df: DataFrame,
}

/// Keep the rows where every predicate column equals its required value.
///
/// Values are compared with exact string equality (no case folding, no
/// wildcards). A predicate value that was never observed in its column is a
/// catalog error, so a typo cannot masquerade as "no matching flights".
/// With no predicates the whole dataset survives.
pub fn filter_exact(frame: &FlightFrame, predicates: &[Predicate]) -> Result<FlightSubset> {
    for predicate in predicates {
        frame
            .catalogs()
            .require(predicate.column, &predicate.value)?;
    }

    let Some((head, rest)) = predicates.split_first() else {
        return Ok(FlightSubset {
            df: frame.frame().clone(),
        });
    };

    let mut expr = col(head.column.as_str()).eq(lit(head.value.clone()));
    for predicate in rest {
        expr = expr.and(col(predicate.column.as_str()).eq(lit(predicate.value.clone())));
    }
    let df = frame
        .frame()
        .clone()
        .lazy()
        .filter(expr)
        .collect()
        .context("filtering flight records")?;
    Ok(FlightSubset { df })
}

impl FlightSubset {
    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Arithmetic mean of `price` over the subset.
    ///
    /// `None` means no records matched. That is an expected outcome, not a
    /// failure; callers render it as an informational notice.
    pub fn mean_price(&self) -> Result<Option<f64>> {
        let prices = self.df.column("price")?.f64()?;
        let mut sum = 0.0;
        let mut count = 0usize;
        for price in prices.into_iter().flatten() {
            sum += price;
            count += 1;
        }
        if count == 0 {
            Ok(None)
        } else {
            Ok(Some(sum / count as f64))
        }
    }

    /// The matching records as typed rows, in dataset order.
    pub fn records(&self) -> Result<Vec<FlightRecord>> {
        records_from(&self.df, self.df.height())
    }
}
