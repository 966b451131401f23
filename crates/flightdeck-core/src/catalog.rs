//! Categorical column catalogs and label canonicalization.
//!
//! The source CSV carries a handful of label variants with underscores in
//! place of spaces. Canonicalization maps those to their display form once,
//! at load time; every label not in the respelling tables passes through
//! unchanged, which also makes the mapping idempotent.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{FlightdeckError, FlightdeckResult};

/// Raw airline spellings mapped to their display form.
static AIRLINE_RESPELLINGS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([("Air_India", "Air India"), ("GO_FIRST", "Go First")])
});

/// Raw departure-time slot spellings mapped to their display form.
static DEPARTURE_RESPELLINGS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("Early_Morning", "Early Morning"),
        ("Late_Night", "Late Night"),
    ])
});

/// Canonical display form of an airline label.
pub fn canonical_airline(raw: &str) -> &str {
    AIRLINE_RESPELLINGS.get(raw).copied().unwrap_or(raw)
}

/// Canonical display form of a departure-time slot label.
pub fn canonical_departure_time(raw: &str) -> &str {
    DEPARTURE_RESPELLINGS.get(raw).copied().unwrap_or(raw)
}

/// The categorical columns of the flight schema.
///
/// Grouping, counting, and exact-match filtering are only defined over
/// these columns; everything else is either numeric or passthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalColumn {
    Airline,
    SourceCity,
    DestinationCity,
    DepartureTime,
    Class,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 5] = [
        CategoricalColumn::Airline,
        CategoricalColumn::SourceCity,
        CategoricalColumn::DestinationCity,
        CategoricalColumn::DepartureTime,
        CategoricalColumn::Class,
    ];

    /// The column name as it appears in the dataset header.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoricalColumn::Airline => "airline",
            CategoricalColumn::SourceCity => "source_city",
            CategoricalColumn::DestinationCity => "destination_city",
            CategoricalColumn::DepartureTime => "departure_time",
            CategoricalColumn::Class => "class",
        }
    }

    /// Resolve a header name to a categorical column.
    ///
    /// Anything outside the five catalog columns is a configuration error,
    /// not a silently empty grouping.
    pub fn from_name(name: &str) -> FlightdeckResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|column| column.as_str() == name)
            .ok_or_else(|| {
                let known = Self::ALL
                    .iter()
                    .map(|column| column.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                FlightdeckError::Catalog(format!(
                    "unknown categorical column \"{name}\"; expected one of: {known}"
                ))
            })
    }
}

impl std::fmt::Display for CategoricalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct values observed per categorical column, in first-seen order.
///
/// Built once at load time. Query functions use `require` to reject
/// out-of-catalog predicate values before touching the data.
#[derive(Debug, Default, Clone)]
pub struct Catalogs {
    values: BTreeMap<CategoricalColumn, Vec<String>>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for a column, keeping the first-seen order.
    pub fn insert(&mut self, column: CategoricalColumn, value: &str) {
        let entries = self.values.entry(column).or_default();
        if !entries.iter().any(|existing| existing == value) {
            entries.push(value.to_string());
        }
    }

    /// Distinct values for a column, in first-seen order.
    pub fn values(&self, column: CategoricalColumn) -> &[String] {
        self.values.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct values for a column, sorted for display in option lists.
    pub fn sorted_values(&self, column: CategoricalColumn) -> Vec<String> {
        let mut values = self.values(column).to_vec();
        values.sort();
        values
    }

    pub fn contains(&self, column: CategoricalColumn, value: &str) -> bool {
        self.values(column).iter().any(|existing| existing == value)
    }

    /// Fail with a catalog error when `value` was never observed in `column`.
    pub fn require(&self, column: CategoricalColumn, value: &str) -> FlightdeckResult<()> {
        if self.contains(column, value) {
            return Ok(());
        }
        let available = self.sorted_values(column).join(", ");
        Err(FlightdeckError::Catalog(format!(
            "no \"{value}\" in the {column} catalog. Available values: {available}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respellings_map_to_display_form() {
        assert_eq!(canonical_airline("Air_India"), "Air India");
        assert_eq!(canonical_airline("GO_FIRST"), "Go First");
        assert_eq!(canonical_departure_time("Early_Morning"), "Early Morning");
        assert_eq!(canonical_departure_time("Late_Night"), "Late Night");
    }

    #[test]
    fn unmapped_labels_pass_through() {
        assert_eq!(canonical_airline("Vistara"), "Vistara");
        assert_eq!(canonical_departure_time("Afternoon"), "Afternoon");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = canonical_airline("GO_FIRST");
        assert_eq!(canonical_airline(once), once);
        let once = canonical_departure_time("Late_Night");
        assert_eq!(canonical_departure_time(once), once);
    }

    #[test]
    fn from_name_resolves_catalog_columns() {
        assert_eq!(
            CategoricalColumn::from_name("source_city").unwrap(),
            CategoricalColumn::SourceCity
        );
        let err = CategoricalColumn::from_name("price").unwrap_err();
        assert!(err.to_string().contains("unknown categorical column"));
        assert!(err.to_string().contains("airline"));
    }

    #[test]
    fn catalogs_keep_first_seen_order() {
        let mut catalogs = Catalogs::new();
        catalogs.insert(CategoricalColumn::Airline, "Vistara");
        catalogs.insert(CategoricalColumn::Airline, "Air India");
        catalogs.insert(CategoricalColumn::Airline, "Vistara");
        assert_eq!(
            catalogs.values(CategoricalColumn::Airline),
            ["Vistara", "Air India"]
        );
        assert_eq!(
            catalogs.sorted_values(CategoricalColumn::Airline),
            ["Air India", "Vistara"]
        );
    }

    #[test]
    fn require_rejects_unknown_values() {
        let mut catalogs = Catalogs::new();
        catalogs.insert(CategoricalColumn::Class, "Economy");
        assert!(catalogs.require(CategoricalColumn::Class, "Economy").is_ok());
        let err = catalogs
            .require(CategoricalColumn::Class, "Premium")
            .unwrap_err();
        assert!(err.to_string().contains("Premium"));
        assert!(err.to_string().contains("Economy"));
    }
}
