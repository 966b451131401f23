use anyhow::Result;

use flightdeck_core::catalog::CategoricalColumn;
use flightdeck_stats::FlightFrame;

pub fn handle(frame: &FlightFrame, column: Option<&str>) -> Result<()> {
    let columns: Vec<CategoricalColumn> = match column {
        Some(name) => vec![CategoricalColumn::from_name(name)?],
        None => CategoricalColumn::ALL.to_vec(),
    };
    for column in columns {
        let values = frame.catalogs().sorted_values(column);
        println!("{column}: {}", values.join(", "));
    }
    Ok(())
}
