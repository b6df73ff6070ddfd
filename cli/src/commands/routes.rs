//! Routes command implementation
//!
//! Lists the route table with the configured context path applied.

use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Run the routes command
pub fn run(config: &Config) -> Result<(), CliError> {
    let router = config.router();

    println!("{}", output::heading("Routes"));
    println!();
    for route in router.routes() {
        println!(
            "  {:<7} {}",
            output::label(route.method.as_str()),
            router.full_path(route)
        );
    }
    if let Some(context_path) = router.context_path() {
        println!();
        println!(
            "  {}",
            output::muted(&format!("mounted under {context_path}"))
        );
    }
    Ok(())
}
