//! Seed command implementation
//!
//! Creates the tables and replaces their rows with the demo data set.

use criteria_demo::{DemoSchema, Session, seed_demo};

use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Run the seed command
pub fn run(config: &Config) -> Result<(), CliError> {
    let path = config.database_path();
    tracing::debug!(database = %path.display(), "opening database");

    let mut session = Session::open(path, DemoSchema::new())?;
    session.create()?;
    let report = seed_demo(&mut session)?;

    println!(
        "{}",
        output::success(&format!(
            "Seeded {} orders and {} items into {}",
            report.orders,
            report.items,
            path.display()
        ))
    );
    Ok(())
}
