//! criteria-demo CLI - seed the demo database and call its endpoints
//!
//! # Configuration
//!
//! Create a `criteria.config.toml` file in your project root (or run
//! `criteria-demo init`):
//!
//! ```toml
//! [database]
//! url = "./criteria-demo.db"
//!
//! [server]
//! context_path = "/orm-demo"
//! ```
//!
//! `CRITERIA_DATABASE_URL` (also read from `.env`) overrides the database
//! path, and `--database` overrides both.
//!
//! # Commands
//!
//! - `criteria-demo init` - Create a new criteria.config.toml
//! - `criteria-demo seed` - Create the tables and load the demo data set
//! - `criteria-demo routes` - List the available endpoints
//! - `criteria-demo get <PATH>` - Call an endpoint and print its JSON body

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
