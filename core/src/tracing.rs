//! Tracing utilities for query and transaction observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The `cfg` inside each macro is evaluated in the calling crate, so callers
//! forward their own `tracing` feature to `criteria-core/tracing`.

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// criteria_trace_query!(&sql_str, params.len());
/// ```
#[macro_export]
macro_rules! criteria_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::debug!(sql = %$sql, params = $param_count, "criteria.query");
    };
}

/// Emit an info-level tracing event for transaction lifecycle (begin, commit, rollback).
///
/// ```ignore
/// criteria_trace_tx!("commit", "sqlite.rusqlite");
/// ```
#[macro_export]
macro_rules! criteria_trace_tx {
    ($event:literal, $driver:literal) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::info!(event = $event, driver = $driver, "criteria.transaction");
    };
}

/// Emit a debug-level event with the number of rows an operation produced.
///
/// ```ignore
/// criteria_trace_rows!("/demo/join", rows.len());
/// ```
#[macro_export]
macro_rules! criteria_trace_rows {
    ($operation:expr, $rows:expr) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::debug!(operation = %$operation, rows = $rows, "criteria.rows");
    };
}
