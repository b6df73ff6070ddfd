//! Core traits for SQL generation.

mod column;
mod param;
mod table;
mod to_sql;
mod tuple;

pub use column::*;
pub use param::*;
pub use table::*;
pub use to_sql::*;
