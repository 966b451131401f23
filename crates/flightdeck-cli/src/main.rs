use std::fs::File;
use std::io;
use std::process::exit;

use clap::Parser;
use clap_complete::generate;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use flightdeck_cli::cli::{build_cli_command, Cli, Commands};
use flightdeck_cli::common::resolve_data_path;
use flightdeck_stats::FlightFrame;

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Completions never need the dataset.
    if let Commands::Completions { shell, out } = &cli.command {
        let mut cmd = build_cli_command();
        match out {
            Some(path) => match File::create(path) {
                Ok(mut file) => generate(*shell, &mut cmd, "flightdeck", &mut file),
                Err(err) => {
                    error!("Writing completions to {} failed: {err}", path.display());
                    exit(1);
                }
            },
            None => generate(*shell, &mut cmd, "flightdeck", &mut io::stdout()),
        }
        return;
    }

    let data_path = resolve_data_path(cli.data.as_deref());
    info!("Loading flight data from {}", data_path.display());
    let frame = match FlightFrame::load(&data_path) {
        Ok(frame) => frame,
        Err(err) => {
            error!(
                "Could not load flight data from {}: {err:#}",
                data_path.display()
            );
            exit(1);
        }
    };
    info!("{} flight records loaded", frame.height());

    let result = match &cli.command {
        Commands::Overview { raw, format } => commands::overview::handle(&frame, *raw, *format),
        Commands::Airlines { format } => commands::airlines::handle(&frame, *format),
        Commands::Prices { bins, format } => commands::prices::handle(&frame, *bins, *format),
        Commands::Routes { format } => commands::routes::handle(&frame, *format),
        Commands::Quote {
            airline,
            source,
            destination,
            class,
            format,
        } => commands::quote::handle(&frame, airline, source, destination, class, *format),
        Commands::Catalog { column } => commands::catalog::handle(&frame, column.as_deref()),
        Commands::Completions { .. } => unreachable!("handled before the dataset load"),
    };

    if let Err(err) = result {
        error!("Command failed: {err:#}");
        exit(1);
    }
}
