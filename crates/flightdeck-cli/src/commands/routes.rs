use std::io;

use anyhow::Result;
use serde::Serialize;

use flightdeck_cli::common::{write_json, OutputFormat};
use flightdeck_stats::{count_by, FlightFrame};

use crate::commands::print_counts;

#[derive(Serialize)]
struct RoutesReport {
    source_cities: Vec<(String, usize)>,
    destination_cities: Vec<(String, usize)>,
    departure_times: Vec<(String, usize)>,
}

pub fn handle(frame: &FlightFrame, format: OutputFormat) -> Result<()> {
    let source_cities = count_by(frame, "source_city")?;
    let destination_cities = count_by(frame, "destination_city")?;
    let departure_times = count_by(frame, "departure_time")?;

    if format == OutputFormat::Json {
        let report = RoutesReport {
            source_cities,
            destination_cities,
            departure_times,
        };
        write_json(&report, &mut io::stdout())?;
        return Ok(());
    }

    println!("Routes and Departure Slots");
    println!("==========================");
    println!();
    println!("Flights per source city:");
    print_counts("SOURCE CITY", &source_cities)?;
    println!();
    println!("Flights per destination city:");
    print_counts("DESTINATION CITY", &destination_cities)?;
    println!();
    println!("Flights per departure slot:");
    print_counts("DEPARTURE", &departure_times)?;
    Ok(())
}
