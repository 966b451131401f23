//! Dataset loading and canonicalization.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use flightdeck_core::catalog::{
    canonical_airline, canonical_departure_time, Catalogs, CategoricalColumn,
};
use flightdeck_core::error::FlightdeckError;
use flightdeck_core::record::{FlightRecord, REQUIRED_COLUMNS};

/// Immutable, canonicalized flight dataset plus its categorical catalogs.
///
/// Constructed once per session and threaded explicitly through every
/// query; no query mutates it.
#[derive(Debug)]
pub struct FlightFrame {
    df: DataFrame,
    catalogs: Catalogs,
}

impl FlightFrame {
    /// Read a CSV dataset from `path` and canonicalize it.
    ///
    /// A missing or unparseable file is a [`FlightdeckError::Load`]; the
    /// caller renders the message and halts. The file handle is released
    /// as soon as the frame is materialized.
    pub fn load(path: &Path) -> Result<Self> {
        let df = {
            let mut file = File::open(path).map_err(|err| {
                FlightdeckError::Load(format!("cannot open {}: {err}", path.display()))
            })?;
            CsvReader::new(&mut file)
                .has_header(true)
                .finish()
                .map_err(|err| {
                    FlightdeckError::Load(format!("cannot parse {}: {err}", path.display()))
                })?
        };
        Self::from_frame(df)
    }

    /// Canonicalize an already-parsed frame (the load path minus the read).
    ///
    /// Checks the required columns, coerces the numeric schema columns,
    /// applies the label respellings to `airline` and `departure_time`, and
    /// collects the categorical catalogs. Applying it to its own output is
    /// a no-op.
    pub fn from_frame(mut df: DataFrame) -> Result<Self> {
        ensure_schema(&df)?;
        coerce_float(&mut df, "price")?;
        coerce_float(&mut df, "duration")?;
        let days = df
            .column("days_left")?
            .cast(&DataType::Int64)
            .context("casting days_left to Int64")?;
        df.replace("days_left", days)?;
        canonicalize_column(&mut df, CategoricalColumn::Airline, canonical_airline)?;
        canonicalize_column(
            &mut df,
            CategoricalColumn::DepartureTime,
            canonical_departure_time,
        )?;
        let catalogs = collect_catalogs(&df)?;
        Ok(Self { df, catalogs })
    }

    /// Number of flight records.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// The underlying dataframe, read-only.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Distinct values observed per categorical column.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Column names in dataset order, including passthrough columns.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Every record as a typed row, in dataset order.
    pub fn records(&self) -> Result<Vec<FlightRecord>> {
        records_from(&self.df, self.df.height())
    }

    /// The first `n` records, in dataset order.
    pub fn head(&self, n: usize) -> Result<Vec<FlightRecord>> {
        records_from(&self.df, n.min(self.df.height()))
    }
}

fn ensure_schema(df: &DataFrame) -> Result<()> {
    let names = df.get_column_names();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !names.contains(required))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FlightdeckError::Schema(format!(
            "dataset is missing required column(s): {}",
            missing.join(", ")
        ))
        .into())
    }
}

fn coerce_float(df: &mut DataFrame, name: &str) -> Result<()> {
    let series = df
        .column(name)?
        .cast(&DataType::Float64)
        .map_err(|_| FlightdeckError::Schema(format!("column \"{name}\" is not numeric")))?;
    df.replace(name, series)?;
    Ok(())
}

fn canonicalize_column(
    df: &mut DataFrame,
    column: CategoricalColumn,
    canonical: fn(&str) -> &str,
) -> Result<()> {
    let name = column.as_str();
    let canonicalized: Vec<Option<String>> = df
        .column(name)?
        .utf8()
        .map_err(|_| FlightdeckError::Schema(format!("column \"{name}\" is not a label column")))?
        .into_iter()
        .map(|value| value.map(|raw| canonical(raw).to_string()))
        .collect();
    df.replace(name, Series::new(name, canonicalized))?;
    Ok(())
}

fn collect_catalogs(df: &DataFrame) -> Result<Catalogs> {
    let mut catalogs = Catalogs::new();
    for column in CategoricalColumn::ALL {
        let name = column.as_str();
        let values = df.column(name)?.utf8().map_err(|_| {
            FlightdeckError::Schema(format!("column \"{name}\" is not a label column"))
        })?;
        for value in values.into_iter().flatten() {
            catalogs.insert(column, value);
        }
    }
    Ok(catalogs)
}

pub(crate) fn records_from(df: &DataFrame, limit: usize) -> Result<Vec<FlightRecord>> {
    let airlines = df.column("airline")?.utf8()?;
    let sources = df.column("source_city")?.utf8()?;
    let destinations = df.column("destination_city")?.utf8()?;
    let departures = df.column("departure_time")?.utf8()?;
    let classes = df.column("class")?.utf8()?;
    let durations = df.column("duration")?.f64()?;
    let days = df.column("days_left")?.i64()?;
    let prices = df.column("price")?.f64()?;

    let mut records = Vec::with_capacity(limit);
    for idx in 0..limit {
        records.push(FlightRecord {
            airline: airlines.get(idx).unwrap_or_default().to_string(),
            source_city: sources.get(idx).unwrap_or_default().to_string(),
            destination_city: destinations.get(idx).unwrap_or_default().to_string(),
            departure_time: departures.get(idx).unwrap_or_default().to_string(),
            class: classes.get(idx).unwrap_or_default().to_string(),
            duration: durations.get(idx).unwrap_or_default(),
            days_left: days.get(idx).unwrap_or_default(),
            price: prices.get(idx).unwrap_or_default(),
        });
    }
    Ok(records)
}
