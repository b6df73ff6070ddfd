//! Init command implementation
//!
//! Writes a starter `criteria.config.toml`.

use std::path::Path;

use crate::config::{CONFIG_FILE, Config, DEFAULT_DATABASE_URL};
use crate::error::CliError;
use crate::output;

/// Run the init command
pub fn run(config_path: Option<&Path>, database: Option<&Path>) -> Result<(), CliError> {
    let config_path = config_path.unwrap_or(Path::new(CONFIG_FILE));

    if config_path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            config_path.display()
        )));
    }

    let database_url = database
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    std::fs::write(config_path, Config::init_template(&database_url))
        .map_err(|e| CliError::IoError(e.to_string()))?;

    println!(
        "{}",
        output::success(&format!("Created {}", config_path.display()))
    );
    println!();
    println!("Next steps:");
    println!(
        "  1. Run {} to load the demo data",
        output::heading("criteria-demo seed")
    );
    println!(
        "  2. Run {} to query it",
        output::heading("criteria-demo get /demo/join")
    );

    Ok(())
}
