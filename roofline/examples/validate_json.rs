//! This example reads a measurement set from a JSON file, validates it and prints the review summary.
//!
//! Run this example with one argument - path to the measurement set file. An optional second argument is a JSON
//! file with custom validation thresholds.
//!
//! ```shell
//! cargo run --example validate_json -- ./roofline/tests/data/gable.json
//! ```

use anyhow::{anyhow, Result};
use roofline::roofline_types::geo::GeoClosedContour;
use roofline::{MeasurementSet, ValidationPipeline, ValidationThresholds};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(file_name) = args.next() else {
        return Err(anyhow!(
            "This example must be run with one argument - name of the measurement set file to validate"
        ));
    };

    let set = MeasurementSet::from_json(&std::fs::read_to_string(file_name)?)?;

    let thresholds = match args.next() {
        Some(thresholds_file) => {
            serde_json::from_str::<ValidationThresholds>(&std::fs::read_to_string(thresholds_file)?)?
        }
        None => ValidationThresholds::default(),
    };

    println!(
        "{} facets, {:.1} sq ft ({:.2} squares), perimeter {:.1} ft, predominant pitch {}",
        set.facets.len(),
        set.total_area,
        set.total_squares(),
        set.perimeter.perimeter_ft(),
        set.predominant_pitch()
            .map(|pitch| pitch.to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    for (pitch, area) in set.area_by_pitch() {
        println!("  {pitch}: {area:.1} sq ft");
    }
    println!();

    let result = ValidationPipeline::with_thresholds(thresholds).validate(&set);
    print!("{}", result.summary());

    Ok(())
}
