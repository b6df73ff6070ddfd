//! Synchronous SQLite session using [`rusqlite`].
//!
//! # Example
//!
//! ```no_run
//! use criteria_demo::prelude::*;
//!
//! fn main() -> criteria_demo::Result<()> {
//!     let session = Session::open_in_memory(DemoSchema::new())?;
//!     session.create()?;
//!
//!     let DemoSchema { shopping_order, .. } = *session.schema();
//!     let names: Vec<(i64, String)> = session.all(
//!         session
//!             .select((shopping_order.id, shopping_order.name))
//!             .from(shopping_order),
//!     )?;
//!     assert!(names.is_empty());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use criteria_core::error::{CriteriaError, Result};
use criteria_core::{FromRow, ToSQL, criteria_trace_query, criteria_trace_tx};
use criteria_sqlite::builder::delete::{DeleteBuilder, DeleteInitial};
use criteria_sqlite::builder::insert::{InsertBuilder, InsertInitial};
use criteria_sqlite::builder::select::{SelectBuilder, SelectInitial};
use criteria_sqlite::{
    Pragma, QueryBuilder, SQLiteSQL, SQLiteSchema, SQLiteTable, SQLiteTransactionType,
    SQLiteValue,
};
use rusqlite::{Connection, Row, params_from_iter};

/// A connection bound to a schema.
#[derive(Debug)]
pub struct Session<Schema = ()> {
    conn: Connection,
    schema: Schema,
}

impl<Schema> Session<Schema> {
    /// Wraps an open connection and applies the session pragmas.
    pub fn new(conn: Connection, schema: Schema) -> Result<Self> {
        for pragma in Pragma::session_defaults() {
            conn.execute_batch(&pragma.to_sql().sql())?;
        }
        Ok(Self { conn, schema })
    }

    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>, schema: Schema) -> Result<Self> {
        Self::new(Connection::open(path)?, schema)
    }

    pub fn open_in_memory(schema: Schema) -> Result<Self> {
        Self::new(Connection::open_in_memory()?, schema)
    }

    /// Gets a reference to the underlying connection
    #[inline]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Starts a SELECT query over this session's schema.
    pub fn select<'a, T>(&self, columns: T) -> SelectBuilder<'a, Schema, SelectInitial>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
    {
        QueryBuilder::new::<Schema>().select(columns)
    }

    /// Starts an INSERT query for `table`.
    pub fn insert<'a, Table>(&self, table: Table) -> InsertBuilder<'a, Schema, InsertInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        QueryBuilder::new::<Schema>().insert(table)
    }

    /// Starts a DELETE query for `table`.
    pub fn delete<'a, Table>(&self, table: Table) -> DeleteBuilder<'a, Schema, DeleteInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        QueryBuilder::new::<Schema>().delete(table)
    }

    /// Runs a statement and returns the number of changed rows.
    pub fn execute<'a, T>(&self, query: T) -> Result<usize>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
    {
        execute_on(&self.conn, query.into_sql())
    }

    /// Runs the query and returns all matching rows (for SELECT queries)
    pub fn all<'a, T, R>(&self, query: T) -> Result<Vec<R>>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
        R: for<'r> FromRow<Row<'r>>,
    {
        all_on(&self.conn, query.into_sql())
    }

    /// Runs the query and returns its first row, or
    /// [`CriteriaError::NotFound`] when there is none.
    pub fn get<'a, T, R>(&self, query: T) -> Result<R>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
        R: for<'r> FromRow<Row<'r>>,
    {
        get_on(&self.conn, query.into_sql())
    }

    /// Runs `f` inside a transaction.
    ///
    /// Commits when `f` returns `Ok`, rolls back when it returns `Err` or
    /// panics. A panic is resumed after the rollback.
    pub fn transaction<F, R>(&mut self, tx_type: SQLiteTransactionType, f: F) -> Result<R>
    where
        F: FnOnce(&Transaction<'_, Schema>) -> Result<R>,
    {
        let Self { conn, schema } = self;
        let tx = conn.transaction_with_behavior(tx_type.into())?;
        criteria_trace_tx!("begin", "sqlite.rusqlite");

        let transaction = Transaction {
            tx,
            tx_type,
            schema: &*schema,
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&transaction)));

        match result {
            Ok(Ok(value)) => {
                transaction.commit()?;
                Ok(value)
            }
            Ok(Err(e)) => {
                transaction.rollback()?;
                Err(e)
            }
            Err(panic_payload) => {
                let _ = transaction.rollback();
                std::panic::resume_unwind(panic_payload);
            }
        }
    }
}

impl<Schema> Session<Schema>
where
    Schema: SQLiteSchema,
{
    /// Creates every table of the schema that does not exist yet.
    pub fn create(&self) -> Result<()> {
        let statements = self.schema.create_statements();
        if !statements.is_empty() {
            let batch_sql = statements.join(";");
            criteria_trace_query!(&batch_sql, 0);
            self.conn.execute_batch(&batch_sql)?;
        }
        Ok(())
    }
}

/// Transaction wrapper with the same execution methods as [`Session`].
#[derive(Debug)]
pub struct Transaction<'conn, Schema = ()> {
    tx: rusqlite::Transaction<'conn>,
    tx_type: SQLiteTransactionType,
    schema: &'conn Schema,
}

impl<'conn, Schema> Transaction<'conn, Schema> {
    /// Gets a reference to the underlying transaction
    #[inline]
    pub fn inner(&self) -> &rusqlite::Transaction<'conn> {
        &self.tx
    }

    /// Gets the transaction type
    #[inline]
    pub fn tx_type(&self) -> SQLiteTransactionType {
        self.tx_type
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn select<'a, T>(&self, columns: T) -> SelectBuilder<'a, Schema, SelectInitial>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
    {
        QueryBuilder::new::<Schema>().select(columns)
    }

    pub fn insert<'a, Table>(&self, table: Table) -> InsertBuilder<'a, Schema, InsertInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        QueryBuilder::new::<Schema>().insert(table)
    }

    pub fn delete<'a, Table>(&self, table: Table) -> DeleteBuilder<'a, Schema, DeleteInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        QueryBuilder::new::<Schema>().delete(table)
    }

    pub fn execute<'a, T>(&self, query: T) -> Result<usize>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
    {
        execute_on(&self.tx, query.into_sql())
    }

    pub fn all<'a, T, R>(&self, query: T) -> Result<Vec<R>>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
        R: for<'r> FromRow<Row<'r>>,
    {
        all_on(&self.tx, query.into_sql())
    }

    pub fn get<'a, T, R>(&self, query: T) -> Result<R>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
        R: for<'r> FromRow<Row<'r>>,
    {
        get_on(&self.tx, query.into_sql())
    }

    fn commit(self) -> Result<()> {
        self.tx
            .commit()
            .map_err(|e| CriteriaError::Transaction(format!("commit failed: {e}")))?;
        criteria_trace_tx!("commit", "sqlite.rusqlite");
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        self.tx
            .rollback()
            .map_err(|e| CriteriaError::Transaction(format!("rollback failed: {e}")))?;
        criteria_trace_tx!("rollback", "sqlite.rusqlite");
        Ok(())
    }
}

//------------------------------------------------------------------------------
// Shared execution
//------------------------------------------------------------------------------

fn execute_on(conn: &Connection, query: SQLiteSQL<'_>) -> Result<usize> {
    let (sql, params) = query.build();
    criteria_trace_query!(&sql, params.len());
    Ok(conn.execute(&sql, params_from_iter(params))?)
}

fn all_on<R>(conn: &Connection, query: SQLiteSQL<'_>) -> Result<Vec<R>>
where
    R: for<'r> FromRow<Row<'r>>,
{
    let (sql, params) = query.build();
    criteria_trace_query!(&sql, params.len());

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(params))?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(R::from_row(row)?);
    }
    Ok(out)
}

fn get_on<R>(conn: &Connection, query: SQLiteSQL<'_>) -> Result<R>
where
    R: for<'r> FromRow<Row<'r>>,
{
    let (sql, params) = query.build();
    criteria_trace_query!(&sql, params.len());

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(params))?;
    match rows.next()? {
        Some(row) => R::from_row(row),
        None => Err(CriteriaError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InsertItem, InsertShoppingOrder};
    use crate::schema::DemoSchema;
    use criteria_core::SQL;
    use criteria_core::expr::{eq, like};

    fn session() -> Session<DemoSchema> {
        let session = Session::open_in_memory(DemoSchema::new()).unwrap();
        session.create().unwrap();
        session
    }

    #[test]
    fn pragmas_are_applied_on_open() {
        let session = session();
        let foreign_keys: i64 = session
            .get(SQL::<SQLiteValue>::raw("PRAGMA foreign_keys"))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn like_is_case_sensitive() {
        let session = session();
        let order = session.schema().shopping_order;
        session
            .execute(session.insert(order).values([
                InsertShoppingOrder::new("MyUppercase").with_id(1),
                InsertShoppingOrder::new("myLower").with_id(2),
            ]))
            .unwrap();

        let ids: Vec<i64> = session
            .all(
                session
                    .select(order.id)
                    .from(order)
                    .r#where(like(order.name, "%my%")),
            )
            .unwrap();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn get_without_rows_is_not_found() {
        let session = session();
        let order = session.schema().shopping_order;
        let result: Result<i64> = session.get(
            session
                .select(order.id)
                .from(order)
                .r#where(eq(order.id, 42_i64)),
        );
        assert!(matches!(result, Err(CriteriaError::NotFound)));
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let mut session = session();
        let order = session.schema().shopping_order;

        let result: Result<()> = session.transaction(SQLiteTransactionType::Immediate, |tx| {
            tx.execute(
                tx.insert(order)
                    .values([InsertShoppingOrder::new("myOrder").with_id(1)]),
            )?;
            Err(CriteriaError::Other("abort".into()))
        });
        assert!(result.is_err());

        let count: i64 = session
            .get(SQL::<SQLiteValue>::raw(r#"SELECT count(*) FROM "shopping_order""#))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn committed_transaction_is_visible() {
        let mut session = session();
        let order = session.schema().shopping_order;

        let inserted = session
            .transaction(SQLiteTransactionType::Deferred, |tx| {
                tx.execute(
                    tx.insert(order)
                        .values([InsertShoppingOrder::new("myOrder").with_id(7)]),
                )
            })
            .unwrap();
        assert_eq!(inserted, 1);

        let name: String = session
            .get(session.select(order.name).from(order))
            .unwrap();
        assert_eq!(name, "myOrder");
    }

    #[test]
    fn failed_commit_is_a_transaction_error() {
        let mut session = session();
        let item = session.schema().item;

        let result = session.transaction(SQLiteTransactionType::Deferred, |tx| {
            tx.inner().execute_batch("PRAGMA defer_foreign_keys = ON")?;
            let dangling = InsertItem::new("dangling")
                .with_id(1)
                .with_shopping_order_id(99);
            tx.execute(tx.insert(item).values([dangling]))
        });
        match result {
            Err(CriteriaError::Transaction(message)) => {
                assert!(message.starts_with("commit failed"))
            }
            other => panic!("expected a transaction error, got {other:?}"),
        }

        let count: i64 = session
            .get(SQL::<SQLiteValue>::raw(r#"SELECT count(*) FROM "item""#))
            .unwrap();
        assert_eq!(count, 0);
    }
}
