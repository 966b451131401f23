use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tabwriter::TabWriter;

use flightdeck_cli::common::{write_json, OutputFormat};
use flightdeck_stats::{
    correlation_matrix, histogram, mean_by, CorrelationMatrix, FlightFrame, HistogramBin,
};

use crate::commands::print_means;

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

#[derive(Serialize)]
struct PricesReport {
    histogram: Vec<HistogramBin>,
    class_mean_fare: Vec<(String, f64)>,
    correlation: CorrelationMatrix,
}

pub fn handle(frame: &FlightFrame, bins: usize, format: OutputFormat) -> Result<()> {
    let fare_bins = histogram(frame, "price", bins)?;
    let class_mean_fare = mean_by(frame, "class", "price")?;
    let correlation = correlation_matrix(frame)?;

    if format == OutputFormat::Json {
        let report = PricesReport {
            histogram: fare_bins,
            class_mean_fare,
            correlation,
        };
        write_json(&report, &mut io::stdout())?;
        return Ok(());
    }

    println!("Fare Analysis");
    println!("=============");
    println!();
    println!("Fare distribution ({} bins):", fare_bins.len());
    let largest = fare_bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(1)
        .max(1);
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "FARE RANGE (₹)\tFLIGHTS\t")?;
    for bin in &fare_bins {
        let bar = "#".repeat(bin.count * BAR_WIDTH / largest);
        writeln!(writer, "{:.0}-{:.0}\t{}\t{}", bin.lower, bin.upper, bin.count, bar)?;
    }
    writer.flush()?;

    println!();
    println!("Mean fare per class:");
    print_means("CLASS", &class_mean_fare)?;

    println!();
    println!("Correlation matrix:");
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "\t{}", correlation.columns.join("\t"))?;
    for (row, name) in correlation.columns.iter().enumerate() {
        let cells = correlation.values[row]
            .iter()
            .map(|value| format!("{value:.3}"))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(writer, "{name}\t{cells}")?;
    }
    writer.flush()?;
    Ok(())
}
