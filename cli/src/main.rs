//! criteria-demo CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use criteria_demo_cli::config::{Config, DATABASE_URL_ENV};
use criteria_demo_cli::error::CliError;
use criteria_demo_cli::{commands, logger, output};

/// criteria-demo - criteria-style queries over a SQLite shopping order schema
#[derive(Parser, Debug)]
#[command(name = "criteria-demo")]
#[command(author, version, about = "Criteria-style query demo over SQLite", long_about = None)]
struct Cli {
    /// Path to config file (default: criteria.config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Database file, overriding the config file and CRITERIA_DATABASE_URL
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Log every executed statement
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new criteria.config.toml configuration file
    Init,

    /// Create the tables and load the demo data set
    Seed,

    /// List the available endpoints
    Routes,

    /// Call an endpoint and print its JSON body
    Get {
        /// Request path, e.g. /demo/join
        path: String,

        /// Pretty-print the JSON body
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init => commands::init::run(cli.config.as_deref(), cli.database.as_deref()),
        Command::Seed => {
            let config = load_config(cli.config.as_deref(), cli.database)?;
            commands::seed::run(&config)
        }
        Command::Routes => {
            let config = load_config(cli.config.as_deref(), cli.database)?;
            commands::routes::run(&config)
        }
        Command::Get { path, pretty } => {
            let config = load_config(cli.config.as_deref(), cli.database)?;
            commands::get::run(&config, &path, pretty)
        }
    }
}

/// Load configuration with fallback to default path, then apply overrides
fn load_config(
    custom_path: Option<&std::path::Path>,
    database: Option<PathBuf>,
) -> Result<Config, CliError> {
    let config = match custom_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config.with_overrides(std::env::var(DATABASE_URL_ENV).ok(), database))
}
