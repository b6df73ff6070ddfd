//! SQLite dialect for criteria queries.
//!
//! Provides the SQLite value type, static table and column definitions,
//! relations between mapped tables, and a typestate [`QueryBuilder`] that
//! renders SELECT and INSERT statements.

pub mod builder;
pub mod connection;
pub mod helpers;
pub mod pragma;
pub mod table;
pub mod traits;
pub mod values;

pub use builder::QueryBuilder;
pub use connection::SQLiteTransactionType;
pub use pragma::Pragma;
pub use table::{SQLiteColumn, SQLiteColumnDef, SQLiteRelation, SQLiteTableDef, SQLiteType};
pub use traits::{SQLiteInsert, SQLiteSQL, SQLiteSchema, SQLiteTable, ToSQLiteSQL};
pub use values::SQLiteValue;
