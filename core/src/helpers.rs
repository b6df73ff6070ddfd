//! Clause helpers shared by dialect builders.

use crate::{
    SQL, SQLTableInfo, ToSQL,
    sql::Token,
    traits::SQLParam,
};

/// Helper function to create a SELECT clause with the given columns
pub fn select<'a, V, T>(columns: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: ToSQL<'a, V>,
{
    SQL::from(Token::SELECT).append(columns.into_sql())
}

/// Every column of `table`, qualified and comma-separated.
pub fn table_columns<'a, V>(table: &'static dyn SQLTableInfo) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::join(
        table.columns().iter().map(|&column| SQL::<'a, V>::column(column)),
        Token::COMMA,
    )
}

/// Helper function to create a FROM clause
pub fn from<'a, V, T>(table: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: ToSQL<'a, V>,
{
    SQL::from(Token::FROM).append(table.into_sql())
}

/// Helper function to create a WHERE clause
pub fn r#where<'a, V, T>(condition: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: ToSQL<'a, V>,
{
    SQL::from(Token::WHERE).append(condition.into_sql())
}

/// Helper function to create an ORDER BY clause
pub fn order_by<'a, V, T>(expressions: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: ToSQL<'a, V>,
{
    SQL::from_iter([Token::ORDER, Token::BY]).append(expressions.into_sql())
}

/// Helper function to create a LIMIT clause
pub fn limit<'a, V>(value: usize) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::from(Token::LIMIT).append(SQL::number(value))
}

/// Helper function to create an OFFSET clause
pub fn offset<'a, V>(value: usize) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::from(Token::OFFSET).append(SQL::number(value))
}

/// Helper function to create an INSERT INTO statement head
pub fn insert<'a, V>(table: &'static dyn SQLTableInfo) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::from_iter([Token::INSERT, Token::INTO]).append(SQL::table(table))
}

/// Helper function to create a DELETE FROM statement head
pub fn delete<'a, V>(table: &'static dyn SQLTableInfo) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::from_iter([Token::DELETE, Token::FROM]).append(SQL::table(table))
}
