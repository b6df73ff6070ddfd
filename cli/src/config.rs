//! Configuration for the criteria-demo CLI
//!
//! Handles loading `criteria.config.toml`. The database path is resolved
//! from, in increasing priority: the config file, `CRITERIA_DATABASE_URL`
//! and the `--database` flag.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use criteria_demo::Router;

pub const CONFIG_FILE: &str = "criteria.config.toml";

pub const DEFAULT_DATABASE_URL: &str = "./criteria-demo.db";

/// Environment variable overriding `[database] url`.
pub const DATABASE_URL_ENV: &str = "CRITERIA_DATABASE_URL";

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Prefix the routes are mounted under, e.g. `/orm-demo`.
    pub context_path: Option<String>,
}

/// Parsed `criteria.config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from the default config file, or defaults when it is missing.
    pub fn load() -> Result<Self, Error> {
        match Self::load_from(Path::new(CONFIG_FILE)) {
            Err(Error::NotFound(_)) => Ok(Self::default()),
            result => result,
        }
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))
    }

    /// Applies the environment and command-line overrides, in that order.
    pub fn with_overrides(mut self, env_url: Option<String>, flag: Option<PathBuf>) -> Self {
        if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
            self.database.url = url;
        }
        if let Some(path) = flag {
            self.database.url = path.to_string_lossy().into_owned();
        }
        self
    }

    pub fn database_path(&self) -> &Path {
        Path::new(&self.database.url)
    }

    /// Router mounted at the configured context path.
    pub fn router(&self) -> Router {
        match &self.server.context_path {
            Some(path) => Router::new().with_context_path(path),
            None => Router::new(),
        }
    }

    /// Contents written by `criteria-demo init`.
    pub fn init_template(database_url: &str) -> String {
        format!(
            r#"# criteria-demo configuration

[database]
url = {}

[server]
# context_path = "/orm-demo"
"#,
            toml::Value::String(database_url.to_string())
        )
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
