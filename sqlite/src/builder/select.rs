use crate::helpers;
use crate::table::SQLiteRelation;
use crate::traits::{SQLiteSQL, SQLiteTable};
use crate::values::SQLiteValue;
use criteria_core::{Join, ToSQL};
use paste::paste;
use std::marker::PhantomData;

// Import the ExecutableState trait
use super::ExecutableState;

//------------------------------------------------------------------------------
// Type State Markers
//------------------------------------------------------------------------------

/// Marker for the initial state of SelectBuilder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectInitial;

/// Marker for the state after FROM clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFromSet;

/// Marker for the state after JOIN clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectJoinSet;

/// Marker for the state after WHERE clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectWhereSet;

/// Marker for the state after ORDER BY clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOrderSet;

/// Marker for the state after LIMIT clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectLimitSet;

/// Marker for the state after OFFSET clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOffsetSet;

#[doc(hidden)]
macro_rules! join_impl {
    () => {
        join_impl!(inner);
        join_impl!(left);
        join_impl!(left_outer);
        join_impl!(right);
        join_impl!(right_outer);
        join_impl!(full);
        join_impl!(cross);
    };
    ($type:ident) => {
        paste! {
            pub fn [<$type _join>]<U: SQLiteTable<'a>>(
                self,
                table: U,
                condition: impl ToSQL<'a, SQLiteValue<'a>>,
            ) -> SelectBuilder<'a, S, SelectJoinSet, T> {
                self.push_clause(helpers::[<$type _join>](table, condition))
            }
        }
    };
}

#[doc(hidden)]
macro_rules! join_methods {
    () => {
        /// Adds a plain JOIN clause to the query.
        #[inline]
        pub fn join<U: SQLiteTable<'a>>(
            self,
            table: U,
            condition: impl ToSQL<'a, SQLiteValue<'a>>,
        ) -> SelectBuilder<'a, S, SelectJoinSet, T> {
            self.push_clause(helpers::join(table, condition))
        }

        join_impl!();

        /// Joins the child table of `relation`, deriving the ON clause from
        /// its key columns.
        #[inline]
        pub fn join_relation(
            self,
            join: Join,
            relation: &SQLiteRelation,
        ) -> SelectBuilder<'a, S, SelectJoinSet, T> {
            self.push_clause(helpers::relation_join(join, relation))
        }
    };
}

#[doc(hidden)]
macro_rules! order_by_method {
    () => {
        /// Sorts the query results.
        ///
        /// Pass a single `OrderBy::asc/desc` term or an array or tuple of
        /// them for a multi-key sort.
        #[inline]
        pub fn order_by<TOrderBy>(
            self,
            expressions: TOrderBy,
        ) -> SelectBuilder<'a, S, SelectOrderSet, T>
        where
            TOrderBy: ToSQL<'a, SQLiteValue<'a>>,
        {
            self.push_clause(helpers::order_by(expressions))
        }
    };
}

#[doc(hidden)]
macro_rules! limit_method {
    () => {
        /// Limits the number of rows returned
        #[inline]
        pub fn limit(self, limit: usize) -> SelectBuilder<'a, S, SelectLimitSet, T> {
            self.push_clause(helpers::limit(limit))
        }
    };
}

// Mark states that can execute queries as implementing the ExecutableState trait
impl ExecutableState for SelectFromSet {}
impl ExecutableState for SelectJoinSet {}
impl ExecutableState for SelectWhereSet {}
impl ExecutableState for SelectOrderSet {}
impl ExecutableState for SelectLimitSet {}
impl ExecutableState for SelectOffsetSet {}

//------------------------------------------------------------------------------
// SelectBuilder Definition
//------------------------------------------------------------------------------

/// Builds a SELECT query specifically for SQLite.
///
/// ## Query Building Flow
///
/// 1. Start with `QueryBuilder::select()` to specify columns
/// 2. Add `from()` to specify the source table
/// 3. Optionally add joins, a condition, ordering, and limits
///
/// Clauses can only be added in SQL order: a second WHERE or a JOIN after
/// ORDER BY does not type-check.
pub type SelectBuilder<'a, Schema, State, Table = ()> =
    super::QueryBuilder<'a, Schema, State, Table>;

//------------------------------------------------------------------------------
// Initial State Implementation
//------------------------------------------------------------------------------

impl<'a, S> SelectBuilder<'a, S, SelectInitial> {
    /// Specifies the table to select FROM.
    ///
    /// When the projection is empty (`select(())`), every column of `table`
    /// is selected, in declaration order.
    #[inline]
    pub fn from<T>(self, table: T) -> SelectBuilder<'a, S, SelectFromSet, T>
    where
        T: SQLiteTable<'a>,
    {
        let mut sql = self.sql;
        if sql.is_bare_select() {
            let columns: SQLiteSQL<'a> = helpers::table_columns(table.definition());
            sql.append_mut(columns);
        }
        let from: SQLiteSQL<'a> = helpers::from(table);
        SelectBuilder {
            sql: sql.append(from),
            schema: PhantomData,
            state: PhantomData,
            table: PhantomData,
        }
    }
}

//------------------------------------------------------------------------------
// Post-FROM State Implementation
//------------------------------------------------------------------------------

impl<'a, S, T> SelectBuilder<'a, S, SelectFromSet, T> {
    join_methods!();

    /// Adds a WHERE clause to filter query results.
    ///
    /// Combine several predicates with `and([...])` or `or([...])`.
    #[inline]
    pub fn r#where(
        self,
        condition: impl ToSQL<'a, SQLiteValue<'a>>,
    ) -> SelectBuilder<'a, S, SelectWhereSet, T> {
        self.push_clause(helpers::r#where(condition))
    }

    order_by_method!();
    limit_method!();
}

//------------------------------------------------------------------------------
// Post-JOIN State Implementation
//------------------------------------------------------------------------------

impl<'a, S, T> SelectBuilder<'a, S, SelectJoinSet, T> {
    join_methods!();

    /// Adds a WHERE condition after a JOIN
    #[inline]
    pub fn r#where(
        self,
        condition: impl ToSQL<'a, SQLiteValue<'a>>,
    ) -> SelectBuilder<'a, S, SelectWhereSet, T> {
        self.push_clause(helpers::r#where(condition))
    }

    order_by_method!();
    limit_method!();
}

//------------------------------------------------------------------------------
// Post-WHERE State Implementation
//------------------------------------------------------------------------------

impl<'a, S, T> SelectBuilder<'a, S, SelectWhereSet, T> {
    order_by_method!();
    limit_method!();
}

//------------------------------------------------------------------------------
// Post-ORDER BY State Implementation
//------------------------------------------------------------------------------

impl<'a, S, T> SelectBuilder<'a, S, SelectOrderSet, T> {
    limit_method!();
}

//------------------------------------------------------------------------------
// Post-LIMIT State Implementation
//------------------------------------------------------------------------------

impl<'a, S, T> SelectBuilder<'a, S, SelectLimitSet, T> {
    /// Sets the offset for the query results
    #[inline]
    pub fn offset(self, offset: usize) -> SelectBuilder<'a, S, SelectOffsetSet, T> {
        self.push_clause(helpers::offset(offset))
    }
}
