use std::io;

use anyhow::Result;
use serde::Serialize;

use flightdeck_cli::common::{write_json, OutputFormat};
use flightdeck_stats::{count_by, mean_by, FlightFrame};

use crate::commands::{print_counts, print_means};

#[derive(Serialize)]
struct AirlinesReport {
    flights: Vec<(String, usize)>,
    mean_fare: Vec<(String, f64)>,
}

pub fn handle(frame: &FlightFrame, format: OutputFormat) -> Result<()> {
    let flights = count_by(frame, "airline")?;
    let mean_fare = mean_by(frame, "airline", "price")?;

    if format == OutputFormat::Json {
        let report = AirlinesReport { flights, mean_fare };
        write_json(&report, &mut io::stdout())?;
        return Ok(());
    }

    println!("Airline Analysis");
    println!("================");
    println!();
    println!("Flights per airline:");
    print_counts("AIRLINE", &flights)?;
    println!();
    println!("Mean fare per airline:");
    print_means("AIRLINE", &mean_fare)?;
    Ok(())
}
