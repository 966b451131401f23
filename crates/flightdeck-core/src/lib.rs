//! # flightdeck-core: flight record model and catalogs
//!
//! Shared foundation for the flightdeck crates: the [`FlightRecord`] row
//! type, the categorical column catalogs with their label canonicalization
//! rules, and the unified [`FlightdeckError`] type used at API boundaries.
//!
//! Nothing in this crate touches the filesystem or depends on the dataframe
//! layer; it only defines the vocabulary the query layer and the report
//! renderer agree on.

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{
    canonical_airline, canonical_departure_time, Catalogs, CategoricalColumn,
};
pub use error::{FlightdeckError, FlightdeckResult};
pub use record::FlightRecord;
