//! SQLite-specific traits for tables, schemas and insert rows

use criteria_core::{SQLColumnInfo, SQLTableInfo, traits::ToSQL};

use crate::table::SQLiteTableDef;
use crate::values::SQLiteValue;

/// Type alias for SQL fragments with SQLite values.
pub type SQLiteSQL<'a> = criteria_core::SQL<'a, SQLiteValue<'a>>;

/// Trait alias for types that can be converted to SQLite SQL.
///
/// This is a convenience trait that combines `ToSQL` with `SQLiteValue`.
pub trait ToSQLiteSQL<'a>: ToSQL<'a, SQLiteValue<'a>> {}

impl<'a, T: ToSQL<'a, SQLiteValue<'a>>> ToSQLiteSQL<'a> for T {}

/// A typed table handle usable in FROM, JOIN and INSERT INTO.
pub trait SQLiteTable<'a>: ToSQL<'a, SQLiteValue<'a>> + Copy {
    /// The static definition backing this handle.
    fn definition(&self) -> &'static SQLiteTableDef;
}

/// A set of tables that are created and queried together.
pub trait SQLiteSchema {
    /// The tables of this schema, in declaration order.
    fn tables(&self) -> Vec<&'static SQLiteTableDef>;

    /// `CREATE TABLE` statements ordered so that every table comes after the
    /// tables its foreign keys point at.
    fn create_statements(&self) -> Vec<String> {
        let tables = self.tables();
        let mut ordered: Vec<&'static SQLiteTableDef> = Vec::with_capacity(tables.len());

        loop {
            let before = ordered.len();
            for &table in &tables {
                if ordered.iter().any(|t| t.name() == table.name()) {
                    continue;
                }
                let ready = table.dependencies().iter().all(|dep| {
                    ordered.iter().any(|t| t.name() == dep.name())
                        || !tables.iter().any(|t| t.name() == dep.name())
                });
                if ready {
                    ordered.push(table);
                }
            }
            if ordered.len() == before {
                break;
            }
        }

        // Tables left over reference each other; emit them as declared.
        for &table in &tables {
            if !ordered.iter().any(|t| t.name() == table.name()) {
                ordered.push(table);
            }
        }

        ordered.iter().map(|table| table.create_table_sql()).collect()
    }
}

/// A row that can be written with `INSERT INTO table (...) VALUES (...)`.
///
/// Every row of a given type lists the same columns, so multi-row inserts
/// share one column list.
pub trait SQLiteInsert<'a> {
    type Table: SQLiteTable<'a>;

    /// Target columns, in the order [`values`](Self::values) renders them.
    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo];

    /// Comma-separated values for one row.
    fn values(&self) -> SQLiteSQL<'a>;
}
