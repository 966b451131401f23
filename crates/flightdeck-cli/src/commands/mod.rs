//! Report views: one module per section of the original dashboard menu.

pub mod airlines;
pub mod catalog;
pub mod overview;
pub mod prices;
pub mod quote;
pub mod routes;

use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

/// Aligned two-column table of (value, count) rows.
pub(crate) fn print_counts(label: &str, counts: &[(String, usize)]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "{label}\tFLIGHTS")?;
    for (value, count) in counts {
        writeln!(writer, "{value}\t{count}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Aligned two-column table of (value, mean fare) rows.
pub(crate) fn print_means(label: &str, means: &[(String, f64)]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "{label}\tMEAN FARE (₹)")?;
    for (value, mean) in means {
        writeln!(writer, "{value}\t{mean:.2}")?;
    }
    writer.flush()?;
    Ok(())
}
