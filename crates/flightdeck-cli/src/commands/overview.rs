use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tabwriter::TabWriter;

use flightdeck_cli::common::{write_json, OutputFormat};
use flightdeck_core::record::FlightRecord;
use flightdeck_stats::{describe, ColumnSummary, FlightFrame};

#[derive(Serialize)]
struct OverviewReport {
    records: usize,
    columns: Vec<String>,
    summary: Vec<ColumnSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<Vec<FlightRecord>>,
}

pub fn handle(frame: &FlightFrame, raw: Option<usize>, format: OutputFormat) -> Result<()> {
    let summary = describe(frame)?;
    let preview = match raw {
        Some(n) => Some(frame.head(n)?),
        None => None,
    };

    if format == OutputFormat::Json {
        let report = OverviewReport {
            records: frame.height(),
            columns: frame.column_names(),
            summary,
            preview,
        };
        write_json(&report, &mut io::stdout())?;
        return Ok(());
    }

    println!("Flight Dataset Overview");
    println!("=======================");
    println!();
    println!("Records: {}", frame.height());
    println!("Columns: {}", frame.column_names().join(", "));

    if let Some(records) = preview {
        println!();
        println!("First {} record(s):", records.len());
        let mut writer = TabWriter::new(io::stdout());
        writeln!(
            writer,
            "AIRLINE\tFROM\tTO\tDEPARTURE\tCLASS\tDURATION\tDAYS LEFT\tPRICE"
        )?;
        for record in &records {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}\t{:.2}",
                record.airline,
                record.source_city,
                record.destination_city,
                record.departure_time,
                record.class,
                record.duration,
                record.days_left,
                record.price
            )?;
        }
        writer.flush()?;
    }

    println!();
    println!("Descriptive statistics:");
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "COLUMN\tCOUNT\tMEAN\tSTD\tMIN\t25%\t50%\t75%\tMAX")?;
    for column in &summary {
        writeln!(
            writer,
            "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            column.column,
            column.count,
            column.mean,
            column.std_dev,
            column.min,
            column.q25,
            column.median,
            column.q75,
            column.max
        )?;
    }
    writer.flush()?;
    Ok(())
}
