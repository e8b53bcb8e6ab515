use anyhow::Result;
use chrono::{Duration, Local};
use tracing::info;

use smart_office_sim::dataset::assemble;
use smart_office_sim::timeline::timeline;
use smart_office_sim::writer::write_csv;

const SIMULATED_DAYS: u32 = 7;
const STEP_MINUTES: u32 = 15;
const OUTPUT_PATH: &str = "smart_office_data.csv";
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // The simulated window ends at the moment the run starts.
    let start = Local::now().naive_local() - Duration::days(SIMULATED_DAYS as i64);
    info!(
        days = SIMULATED_DAYS,
        step_minutes = STEP_MINUTES,
        %start,
        "generating simulated sensor data"
    );

    let timestamps = timeline(start, SIMULATED_DAYS, STEP_MINUTES);
    let readings = assemble(&timestamps, &mut rand::rng());
    let written = write_csv(OUTPUT_PATH.as_ref(), &readings)?;

    println!("Wrote '{OUTPUT_PATH}' with {written} records.");
    println!("\nSample of the generated data:");
    for reading in readings.iter().take(PREVIEW_ROWS) {
        println!("{reading}");
    }
    Ok(())
}
