//! DELETE statements.
//!
//! Both states are executable: without a filter the statement clears the
//! whole table, which is what seeding relies on.

use super::ExecutableState;
use crate::helpers;
use crate::values::SQLiteValue;
use criteria_core::ToSQL;

/// `DELETE FROM table` with no filter yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteInitial;

/// `DELETE FROM table WHERE ...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteWhereSet;

impl ExecutableState for DeleteInitial {}
impl ExecutableState for DeleteWhereSet {}

pub type DeleteBuilder<'a, Schema, State, Table> = super::QueryBuilder<'a, Schema, State, Table>;

impl<'a, S, T> DeleteBuilder<'a, S, DeleteInitial, T> {
    /// Limits the statement to rows matching `condition`.
    #[inline]
    pub fn r#where(
        self,
        condition: impl ToSQL<'a, SQLiteValue<'a>>,
    ) -> DeleteBuilder<'a, S, DeleteWhereSet, T> {
        self.push_clause(helpers::r#where(condition))
    }
}
