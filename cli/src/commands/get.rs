//! Get command implementation
//!
//! Dispatches a GET request against the configured database and prints
//! the JSON body to stdout.

use criteria_demo::{DemoSchema, Method, Session};

use crate::config::Config;
use crate::error::CliError;

/// Run the get command
pub fn run(config: &Config, path: &str, pretty: bool) -> Result<(), CliError> {
    let database = config.database_path();
    if !database.exists() {
        return Err(CliError::MissingDatabase(database.to_path_buf()));
    }

    let session = Session::open(database, DemoSchema::new())?;
    let response = config.router().dispatch(&session, Method::Get, path);
    tracing::debug!(path, status = response.status, "dispatched");

    let body = if pretty {
        serde_json::to_string_pretty(&response.body)
    } else {
        serde_json::to_string(&response.body)
    }
    .map_err(|e| CliError::Other(e.to_string()))?;

    if response.is_success() {
        println!("{body}");
        Ok(())
    } else {
        let message = response
            .body
            .get("error")
            .and_then(|error| error.as_str())
            .map_or(body, str::to_string);
        Err(CliError::Request {
            status: response.status,
            message,
        })
    }
}
