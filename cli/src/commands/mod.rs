//! CLI command implementations
//!
//! Each command module implements a specific criteria-demo CLI command.

pub mod get;
pub mod init;
pub mod routes;
pub mod seed;
