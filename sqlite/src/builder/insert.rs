use crate::helpers;
use crate::traits::{SQLiteInsert, SQLiteTable};

// Import the ExecutableState trait
use super::ExecutableState;

//------------------------------------------------------------------------------
// Type State Markers
//------------------------------------------------------------------------------

/// Marker for the initial state of InsertBuilder.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertInitial;

/// Marker for the state after VALUES are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertValuesSet;

impl ExecutableState for InsertValuesSet {}

/// Builds an INSERT query specifically for SQLite.
pub type InsertBuilder<'a, Schema, State, Table> = super::QueryBuilder<'a, Schema, State, Table>;

impl<'a, S, T> InsertBuilder<'a, S, InsertInitial, T>
where
    T: SQLiteTable<'a>,
{
    /// Sets the rows to insert.
    ///
    /// Row types are tied to their table, so rows for another table are
    /// rejected at compile time.
    #[inline]
    pub fn values<I, R>(self, rows: I) -> InsertBuilder<'a, S, InsertValuesSet, T>
    where
        I: IntoIterator<Item = R>,
        R: SQLiteInsert<'a, Table = T>,
    {
        self.push_clause(helpers::values(rows))
    }
}
