use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::common::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Path to the flight dataset CSV (falls back to $FLIGHTDECK_DATA,
    /// then to airlines_flights_data.csv in the working directory)
    #[arg(long)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dataset shape, raw preview, and descriptive statistics
    Overview {
        /// Also print the first N records
        #[arg(long, value_name = "N")]
        raw: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Flight volume and mean fare per airline
    Airlines {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Fare distribution, fares by class, and correlations
    Prices {
        /// Number of histogram bins
        #[arg(long, default_value_t = 50)]
        bins: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Flight counts by origin, destination, and departure slot
    Routes {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Mean fare for one airline/route/class selection
    Quote {
        /// Airline name (canonical form, e.g. "Air India")
        #[arg(long)]
        airline: String,
        /// Source city
        #[arg(long = "from", value_name = "CITY")]
        source: String,
        /// Destination city
        #[arg(long = "to", value_name = "CITY")]
        destination: String,
        /// Travel class
        #[arg(long)]
        class: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List the selectable values of the categorical columns
    Catalog {
        /// Restrict to one column (airline, source_city, destination_city,
        /// departure_time, class)
        #[arg(long)]
        column: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
