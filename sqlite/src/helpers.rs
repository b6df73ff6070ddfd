use crate::table::SQLiteRelation;
use crate::traits::{SQLiteInsert, SQLiteTable};
use crate::values::SQLiteValue;
use criteria_core::{SQL, SQLColumnInfo, Token, helpers as core_helpers, traits::ToSQL};

// Re-export core helpers with SQLiteValue type for convenience
pub(crate) use core_helpers::{
    delete, from, insert, limit, offset, order_by, select, table_columns, r#where,
};

// Re-export Join from core
pub use criteria_core::Join;

/// Helper to convert column info to SQL for joining (column names only for INSERT)
fn columns_info_to_sql<'a>(columns: &[&'static dyn SQLColumnInfo]) -> SQL<'a, SQLiteValue<'a>> {
    let mut sql = SQL::with_capacity_chunks(columns.len().saturating_mul(2));
    for (idx, col) in columns.iter().enumerate() {
        if idx > 0 {
            sql.push_mut(Token::COMMA);
        }
        sql.append_mut(SQL::ident(col.name()));
    }
    sql
}

// Generate all join helper functions using the shared macro
criteria_core::impl_join_helpers!(
    table_trait: SQLiteTable<'a>,
    condition_trait: ToSQL<'a, SQLiteValue<'a>>,
    sql_type: SQL<'a, SQLiteValue<'a>>,
);

/// JOIN clause whose target table and ON condition come from a relation.
pub fn relation_join<'a>(join: Join, relation: &SQLiteRelation) -> SQL<'a, SQLiteValue<'a>> {
    <Join as ToSQL<'a, SQLiteValue<'a>>>::to_sql(&join)
        .append(SQL::table(relation.target()))
        .push(Token::ON)
        .append(relation.on())
}

/// Helper function to create VALUES clause for INSERT
pub(crate) fn values<'a, R>(rows: impl IntoIterator<Item = R>) -> SQL<'a, SQLiteValue<'a>>
where
    R: SQLiteInsert<'a>,
{
    let rows: Vec<R> = rows.into_iter().collect();

    let Some(first) = rows.first() else {
        return SQL::from(Token::VALUES);
    };

    // A row type without columns inserts a row of defaults
    let columns = first.columns();
    if columns.is_empty() {
        return SQL::from_iter([Token::DEFAULT, Token::VALUES]);
    }

    let columns_sql = columns_info_to_sql(columns);
    let mut values_sql = SQL::with_capacity_chunks(rows.len().saturating_mul(4));
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            values_sql.push_mut(Token::COMMA);
        }
        values_sql.push_mut(Token::LPAREN);
        values_sql.append_mut(row.values());
        values_sql.push_mut(Token::RPAREN);
    }

    columns_sql.parens().push(Token::VALUES).append(values_sql)
}
