//! Unified error types for the flightdeck crates.
//!
//! This module provides a common error type [`FlightdeckError`] that can
//! represent failures from any layer of the system. The query layer wraps
//! these in `anyhow` contexts; the renderer matches on the kind to decide
//! between a fatal message and a configuration hint.

use thiserror::Error;

/// Unified error type for all flightdeck operations.
///
/// Only two conditions are user-visible failures: a dataset that cannot be
/// loaded ([`FlightdeckError::Load`]) and a query that references a column
/// or label outside the loaded catalogs ([`FlightdeckError::Catalog`]).
/// An empty filter result is not an error anywhere in the system.
#[derive(Error, Debug)]
pub enum FlightdeckError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset resource is missing or unparseable
    #[error("Load error: {0}")]
    Load(String),

    /// A required column is missing or has the wrong type
    #[error("Schema error: {0}")]
    Schema(String),

    /// A query referenced a column or label outside the loaded catalogs
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using FlightdeckError.
pub type FlightdeckResult<T> = Result<T, FlightdeckError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for FlightdeckError {
    fn from(err: anyhow::Error) -> Self {
        FlightdeckError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for FlightdeckError {
    fn from(s: String) -> Self {
        FlightdeckError::Other(s)
    }
}

impl From<&str> for FlightdeckError {
    fn from(s: &str) -> Self {
        FlightdeckError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlightdeckError::Load("airlines_flights_data.csv not found".into());
        assert!(err.to_string().contains("Load error"));
        assert!(err.to_string().contains("airlines_flights_data.csv"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FlightdeckError = io_err.into();
        assert!(matches!(err, FlightdeckError::Io(_)));
    }

    #[test]
    fn test_catalog_error_is_distinct_from_load() {
        let err = FlightdeckError::Catalog("no such airline".into());
        assert!(matches!(err, FlightdeckError::Catalog(_)));
        assert!(err.to_string().contains("Catalog error"));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> FlightdeckResult<()> {
            Err(FlightdeckError::Schema("missing column".into()))
        }

        fn outer() -> FlightdeckResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
