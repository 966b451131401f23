//! Shared CLI types and helpers.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

/// Dataset file looked up in the working directory when neither `--data`
/// nor `FLIGHTDECK_DATA` is given.
pub const DEFAULT_DATA_FILE: &str = "airlines_flights_data.csv";

/// Environment variable overriding the dataset location.
pub const DATA_ENV_VAR: &str = "FLIGHTDECK_DATA";

/// Output format for tabular/structured data.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default for interactive use)
    #[default]
    Table,
    /// JSON object (pipe-friendly, structured)
    Json,
}

/// Resolve the dataset path: explicit flag, then environment, then default.
pub fn resolve_data_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Ok(env_path) = env::var(DATA_ENV_VAR) {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Write data as pretty-printed JSON to the given writer.
pub fn write_json<W: Write, T: Serialize>(data: &T, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, data).map_err(io::Error::other)?;
    writeln!(writer)?;
    Ok(())
}
