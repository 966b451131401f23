use std::io;

use anyhow::Result;
use serde::Serialize;

use flightdeck_cli::common::{write_json, OutputFormat};
use flightdeck_core::catalog::CategoricalColumn;
use flightdeck_stats::{filter_exact, FlightFrame, Predicate};

#[derive(Serialize)]
struct QuoteReport {
    matches: usize,
    mean_price: Option<f64>,
}

pub fn handle(
    frame: &FlightFrame,
    airline: &str,
    source: &str,
    destination: &str,
    class: &str,
    format: OutputFormat,
) -> Result<()> {
    let predicates = vec![
        Predicate::new(CategoricalColumn::Airline, airline),
        Predicate::new(CategoricalColumn::SourceCity, source),
        Predicate::new(CategoricalColumn::DestinationCity, destination),
        Predicate::new(CategoricalColumn::Class, class),
    ];
    let subset = filter_exact(frame, &predicates)?;
    let mean_price = subset.mean_price()?;

    if format == OutputFormat::Json {
        let report = QuoteReport {
            matches: subset.len(),
            mean_price,
        };
        write_json(&report, &mut io::stdout())?;
        return Ok(());
    }

    match mean_price {
        Some(mean) => {
            println!(
                "{} flight(s) match {airline}, {source} to {destination}, {class}.",
                subset.len()
            );
            println!("Mean fare for this selection: {mean:.2}₹");
        }
        // Zero matches is an expected outcome, not a fault.
        None => println!("No flights match the selected criteria. Try another combination."),
    }
    Ok(())
}
