//! Static table, column and relation definitions.
//!
//! Tables and their columns are declared as `static` items that point at
//! each other, so every column knows its owning table and every foreign key
//! knows its target column without any runtime registration:
//!
//! ```ignore
//! static ORDERS_COLUMNS: [&dyn SQLColumnInfo; 1] = [&ORDERS_ID];
//! pub static ORDERS: SQLiteTableDef = SQLiteTableDef::new("orders", &ORDERS_COLUMNS);
//! pub static ORDERS_ID: SQLiteColumnDef =
//!     SQLiteColumnDef::new(&ORDERS, "id", SQLiteType::Integer).primary();
//! ```

use std::fmt::Write;

use criteria_core::{SQL, SQLColumnInfo, SQLTableInfo, ToSQL, expr::eq};

use crate::values::SQLiteValue;

/// SQLite column type affinity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SQLiteType {
    Integer,
    Text,
    Real,
    Blob,
}

impl SQLiteType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SQLiteType::Integer => "INTEGER",
            SQLiteType::Text => "TEXT",
            SQLiteType::Real => "REAL",
            SQLiteType::Blob => "BLOB",
        }
    }
}

//------------------------------------------------------------------------------
// Tables
//------------------------------------------------------------------------------

/// A mapped SQLite table.
#[derive(Debug)]
pub struct SQLiteTableDef {
    name: &'static str,
    columns: &'static [&'static dyn SQLColumnInfo],
}

impl SQLiteTableDef {
    pub const fn new(name: &'static str, columns: &'static [&'static dyn SQLColumnInfo]) -> Self {
        Self { name, columns }
    }

    /// Looks up a column by its unqualified name.
    pub fn column(&self, name: &str) -> Option<&'static dyn SQLColumnInfo> {
        self.columns.iter().copied().find(|column| column.name() == name)
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn create_table_sql(&self) -> String {
        let mut sql = format!("CREATE TABLE IF NOT EXISTS \"{}\" (", self.name);
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                sql.push_str(", ");
            }
            let _ = write!(sql, "\"{}\" {}", column.name(), column.r#type());
            if column.is_primary_key() {
                sql.push_str(" PRIMARY KEY");
            } else if column.is_not_null() {
                sql.push_str(" NOT NULL");
            }
            if let Some(default) = column.default_sql() {
                let _ = write!(sql, " DEFAULT {default}");
            }
            if let Some(target) = column.foreign_key() {
                let _ = write!(
                    sql,
                    " REFERENCES \"{}\"(\"{}\")",
                    target.table().name(),
                    target.name()
                );
            }
        }
        sql.push(')');
        sql
    }
}

impl SQLTableInfo for SQLiteTableDef {
    fn name(&self) -> &'static str {
        self.name
    }

    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo] {
        self.columns
    }
}

//------------------------------------------------------------------------------
// Columns
//------------------------------------------------------------------------------

/// A mapped SQLite column, declared with const builder methods.
pub struct SQLiteColumnDef {
    table: &'static SQLiteTableDef,
    name: &'static str,
    sql_type: SQLiteType,
    primary_key: bool,
    not_null: bool,
    default: Option<&'static str>,
    references: Option<&'static SQLiteColumnDef>,
}

impl SQLiteColumnDef {
    pub const fn new(
        table: &'static SQLiteTableDef,
        name: &'static str,
        sql_type: SQLiteType,
    ) -> Self {
        Self {
            table,
            name,
            sql_type,
            primary_key: false,
            not_null: false,
            default: None,
            references: None,
        }
    }

    /// Marks the column as the primary key. Primary keys are implicitly NOT NULL.
    pub const fn primary(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Sets a literal DEFAULT expression, e.g. `"0"`.
    pub const fn default_value(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    /// Declares a foreign key to `target`.
    pub const fn references(mut self, target: &'static SQLiteColumnDef) -> Self {
        self.references = Some(target);
        self
    }

    pub const fn sql_type(&self) -> SQLiteType {
        self.sql_type
    }

    pub const fn owner(&self) -> &'static SQLiteTableDef {
        self.table
    }
}

impl SQLColumnInfo for SQLiteColumnDef {
    fn name(&self) -> &'static str {
        self.name
    }

    fn r#type(&self) -> &'static str {
        self.sql_type.as_str()
    }

    fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    fn is_not_null(&self) -> bool {
        self.not_null
    }

    fn table(&self) -> &'static dyn SQLTableInfo {
        self.table
    }

    fn foreign_key(&self) -> Option<&'static dyn SQLColumnInfo> {
        match self.references {
            Some(target) => Some(target),
            None => None,
        }
    }

    fn default_sql(&self) -> Option<&'static str> {
        self.default
    }
}

impl std::fmt::Debug for SQLiteColumnDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SQLiteColumnDef")
            .field("table", &self.table.name)
            .field("name", &self.name)
            .field("type", &self.sql_type)
            .field("primary_key", &self.primary_key)
            .field("not_null", &self.not_null)
            .finish()
    }
}

/// A column handle used inside queries.
///
/// Renders as the fully qualified `"table"."column"`.
#[derive(Clone, Copy)]
pub struct SQLiteColumn(&'static SQLiteColumnDef);

impl SQLiteColumn {
    pub const fn new(def: &'static SQLiteColumnDef) -> Self {
        Self(def)
    }

    pub const fn def(&self) -> &'static SQLiteColumnDef {
        self.0
    }

    pub const fn name(&self) -> &'static str {
        self.0.name
    }
}

impl std::fmt::Debug for SQLiteColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0.table.name, self.0.name)
    }
}

impl<'a> ToSQL<'a, SQLiteValue<'a>> for SQLiteColumn {
    fn to_sql(&self) -> SQL<'a, SQLiteValue<'a>> {
        SQL::column(self.0)
    }
}

//------------------------------------------------------------------------------
// Relations
//------------------------------------------------------------------------------

/// A one-to-many association between two mapped tables.
///
/// The parent side owns `parent_key`; each row on the child side points back
/// through `foreign_key`. Joining through a relation derives its ON clause
/// (`child.fk = parent.pk`) from this declaration.
#[derive(Debug, Clone, Copy)]
pub struct SQLiteRelation {
    name: &'static str,
    parent_key: SQLiteColumn,
    foreign_key: SQLiteColumn,
}

impl SQLiteRelation {
    pub const fn one_to_many(
        name: &'static str,
        parent_key: SQLiteColumn,
        foreign_key: SQLiteColumn,
    ) -> Self {
        Self {
            name,
            parent_key,
            foreign_key,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn parent_key(&self) -> SQLiteColumn {
        self.parent_key
    }

    pub const fn foreign_key(&self) -> SQLiteColumn {
        self.foreign_key
    }

    /// The child table, i.e. the table a join through this relation adds.
    pub const fn target(&self) -> &'static SQLiteTableDef {
        self.foreign_key.0.table
    }

    /// Join condition: `child.fk = parent.pk`.
    pub fn on<'a>(&self) -> SQL<'a, SQLiteValue<'a>> {
        eq(self.foreign_key, self.parent_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PARENT_COLUMNS: [&dyn SQLColumnInfo; 2] = [&PARENT_ID, &PARENT_LABEL];
    static PARENT: SQLiteTableDef = SQLiteTableDef::new("parent", &PARENT_COLUMNS);
    static PARENT_ID: SQLiteColumnDef =
        SQLiteColumnDef::new(&PARENT, "id", SQLiteType::Integer).primary();
    static PARENT_LABEL: SQLiteColumnDef = SQLiteColumnDef::new(&PARENT, "label", SQLiteType::Text)
        .not_null()
        .default_value("''");

    static CHILD_COLUMNS: [&dyn SQLColumnInfo; 2] = [&CHILD_ID, &CHILD_PARENT_ID];
    static CHILD: SQLiteTableDef = SQLiteTableDef::new("child", &CHILD_COLUMNS);
    static CHILD_ID: SQLiteColumnDef =
        SQLiteColumnDef::new(&CHILD, "id", SQLiteType::Integer).primary();
    static CHILD_PARENT_ID: SQLiteColumnDef =
        SQLiteColumnDef::new(&CHILD, "parent_id", SQLiteType::Integer).references(&PARENT_ID);

    #[test]
    fn create_table_renders_constraints() {
        assert_eq!(
            PARENT.create_table_sql(),
            r#"CREATE TABLE IF NOT EXISTS "parent" ("id" INTEGER PRIMARY KEY, "label" TEXT NOT NULL DEFAULT '')"#
        );
        assert_eq!(
            CHILD.create_table_sql(),
            r#"CREATE TABLE IF NOT EXISTS "child" ("id" INTEGER PRIMARY KEY, "parent_id" INTEGER REFERENCES "parent"("id"))"#
        );
    }

    #[test]
    fn dependencies_follow_foreign_keys() {
        let deps = CHILD.dependencies();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name(), "parent");
        assert!(PARENT.dependencies().is_empty());
    }

    #[test]
    fn relation_derives_join_condition() {
        let relation = SQLiteRelation::one_to_many(
            "children",
            SQLiteColumn::new(&PARENT_ID),
            SQLiteColumn::new(&CHILD_PARENT_ID),
        );
        assert_eq!(relation.target().name(), "child");
        assert_eq!(
            relation.on().sql(),
            r#""child"."parent_id" = "parent"."id""#
        );
    }

    #[test]
    fn column_lookup_by_name() {
        assert!(PARENT.column("label").is_some_and(|c| c.is_not_null()));
        assert!(PARENT.column("missing").is_none());
    }
}
