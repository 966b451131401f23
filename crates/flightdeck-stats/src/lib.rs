//! # flightdeck-stats: the flight record store and query layer
//!
//! Loads the flight dataset into an in-memory polars [`DataFrame`] once per
//! session and answers every query the report renderer needs:
//!
//! - [`FlightFrame::load`] — CSV ingestion, label canonicalization, schema
//!   checks, and catalog collection, all in one pass.
//! - [`describe`] — count/mean/std/min/quartiles/max per numeric column.
//! - [`count_by`] / [`mean_by`] — grouped aggregations over the categorical
//!   catalog columns, with a documented first-seen tie-break.
//! - [`filter_exact`] + [`FlightSubset::mean_price`] — the fare calculator
//!   contract: exact-match conjunction, then a mean that reports an empty
//!   selection as `None` rather than an error.
//! - [`correlation_matrix`] — pairwise Pearson coefficients over the
//!   numeric columns.
//! - [`histogram`] — equal-width bins for the fare distribution view.
//!
//! Every operation is a pure function of the immutable frame and its
//! arguments; nothing here mutates the dataset after load.
//!
//! [`DataFrame`]: polars::prelude::DataFrame

pub mod corr;
pub mod filter;
pub mod frame;
pub mod groupby;
pub mod summary;

pub use corr::{correlation_matrix, CorrelationMatrix};
pub use filter::{filter_exact, FlightSubset, Predicate};
pub use frame::FlightFrame;
pub use groupby::{count_by, mean_by};
pub use summary::{describe, histogram, ColumnSummary, HistogramBin};
