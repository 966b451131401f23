//! The flight record row type and the fixed dataset schema.

use serde::{Deserialize, Serialize};

/// Columns every dataset must carry. Extra columns pass through untouched.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "airline",
    "source_city",
    "destination_city",
    "departure_time",
    "class",
    "duration",
    "days_left",
    "price",
];

/// One flight offer after canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub source_city: String,
    pub destination_city: String,
    /// Departure slot label ("Morning", "Early Morning", ...)
    pub departure_time: String,
    pub class: String,
    /// Flight duration in hours
    pub duration: f64,
    /// Days between booking and departure
    pub days_left: i64,
    /// Ticket price in rupees
    pub price: f64,
}
