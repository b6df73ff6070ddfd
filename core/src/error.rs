use thiserror::Error;

#[derive(Debug, Error)]
pub enum CriteriaError {
    /// No rows returned when at least one was expected
    #[error("No rows found")]
    NotFound,

    /// COMMIT or ROLLBACK failed
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Error mapping a row or a result into its output shape
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error converting a column value into a Rust type
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Generic error
    #[error("Database error: {0}")]
    Other(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for database operations
pub type Result<T> = std::result::Result<T, CriteriaError>;
