// Re-export common enums and traits from core
pub use criteria_core::builder::{BuilderInit, ExecutableState};
pub use criteria_core::{OrderBy, SQL, ToSQL};

use crate::{
    traits::{SQLiteSQL, SQLiteTable},
    values::SQLiteValue,
};
use std::marker::PhantomData;

pub mod delete;
pub mod insert;
pub mod select;

// Export state markers for easier use
pub use delete::{DeleteInitial, DeleteWhereSet};
pub use insert::{InsertInitial, InsertValuesSet};
pub use select::{
    SelectFromSet, SelectInitial, SelectJoinSet, SelectLimitSet, SelectOffsetSet, SelectOrderSet,
    SelectWhereSet,
};

/// Main query builder for SQLite operations.
///
/// `QueryBuilder` tracks the clauses written so far in its `State` type
/// parameter, so that clauses can only be chained in a valid order and only
/// finished statements reach the driver.
///
/// ## Type Parameters
///
/// - `Schema`: The database schema type the query belongs to
/// - `State`: The current builder state, enforcing proper query construction order
/// - `Table`: The table type being operated on (for single-table operations)
///
/// ## Basic Usage
///
/// ```ignore
/// let builder = QueryBuilder::new::<DemoSchema>();
/// let DemoSchema { shopping_order, .. } = DemoSchema::new();
///
/// let query = builder
///     .select((shopping_order.id, shopping_order.name))
///     .from(shopping_order)
///     .r#where(like(shopping_order.name, "%my%"))
///     .order_by(OrderBy::desc(shopping_order.id));
/// assert_eq!(
///     query.to_sql().sql(),
///     r#"SELECT "shopping_order"."id", "shopping_order"."name" FROM "shopping_order" WHERE "shopping_order"."name" LIKE ? ORDER BY "shopping_order"."id" DESC"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder<'a, Schema = (), State = (), Table = ()> {
    pub sql: SQL<'a, SQLiteValue<'a>>,
    schema: PhantomData<Schema>,
    state: PhantomData<State>,
    table: PhantomData<Table>,
}

//------------------------------------------------------------------------------
// QueryBuilder Implementation
//------------------------------------------------------------------------------

impl<'a, Schema, State, Table> ToSQL<'a, SQLiteValue<'a>>
    for QueryBuilder<'a, Schema, State, Table>
{
    fn to_sql(&self) -> SQLiteSQL<'a> {
        self.sql.clone()
    }

    fn into_sql(self) -> SQLiteSQL<'a> {
        self.sql
    }
}

impl<'a, Schema, State, Table> QueryBuilder<'a, Schema, State, Table> {
    /// Appends a clause and moves the builder into the next state.
    #[inline]
    pub(crate) fn push_clause<NewState, NewTable>(
        self,
        clause: SQLiteSQL<'a>,
    ) -> QueryBuilder<'a, Schema, NewState, NewTable> {
        QueryBuilder {
            sql: self.sql.append(clause),
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }
}

impl<'a> QueryBuilder<'a> {
    /// Creates a new query builder for the given schema type.
    ///
    /// This is the entry point for building SQL queries.
    pub const fn new<S>() -> QueryBuilder<'a, S, BuilderInit> {
        QueryBuilder {
            sql: SQL::empty(),
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }
}

impl<'a, Schema> QueryBuilder<'a, Schema, BuilderInit> {
    /// Begins a SELECT query with the specified columns.
    ///
    /// Select a single column, several columns as a tuple, or pass `()` to
    /// select every column of the table given to `from`.
    pub fn select<T>(&self, columns: T) -> select::SelectBuilder<'a, Schema, select::SelectInitial>
    where
        T: ToSQL<'a, SQLiteValue<'a>>,
    {
        let sql = crate::helpers::select(columns);
        select::SelectBuilder {
            sql,
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }

    /// Begins an INSERT query for the specified table.
    pub fn insert<Table>(
        &self,
        table: Table,
    ) -> insert::InsertBuilder<'a, Schema, InsertInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        let sql = crate::helpers::insert(table.definition());
        insert::InsertBuilder {
            sql,
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }

    /// Begins a DELETE query for the specified table.
    pub fn delete<Table>(
        &self,
        table: Table,
    ) -> delete::DeleteBuilder<'a, Schema, DeleteInitial, Table>
    where
        Table: SQLiteTable<'a>,
    {
        let sql = crate::helpers::delete(table.definition());
        delete::DeleteBuilder {
            sql,
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }
}

impl<'a, Schema, State, Table> QueryBuilder<'a, Schema, State, Table>
where
    State: ExecutableState,
{
    /// SQL text with `?` placeholders.
    pub fn sql(&self) -> String {
        self.sql.sql()
    }

    /// Bound values in placeholder order.
    pub fn params(&self) -> Vec<&SQLiteValue<'a>> {
        self.sql.params()
    }
}
