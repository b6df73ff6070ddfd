//! Logical operators (AND, OR, NOT).

use crate::sql::{SQL, SQLChunk, Token};
use crate::traits::{SQLParam, ToSQL};

/// Logical NOT.
pub fn not<'a, V, E>(expr: E) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    let expr_sql = expr.into_sql();
    let needs_paren = expr_sql.chunks.len() > 1
        || (expr_sql.chunks.len() == 1
            && !matches!(
                expr_sql.chunks[0],
                SQLChunk::Raw(_) | SQLChunk::Ident(_) | SQLChunk::Column(_)
            ));

    if needs_paren {
        SQL::from(Token::NOT).append(expr_sql.parens())
    } else {
        SQL::from(Token::NOT).append(expr_sql)
    }
}

fn combine<'a, V, I, E>(conditions: I, op: Token) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    let mut iter = conditions.into_iter();

    match iter.next() {
        None => SQL::empty(),
        Some(first) => {
            let first_sql = first.into_sql();
            let Some(second) = iter.next() else {
                return first_sql;
            };
            let all_conditions = core::iter::once(first_sql)
                .chain(core::iter::once(second.into_sql()))
                .chain(iter.map(|c| c.into_sql()));
            SQL::join(all_conditions, op).parens()
        }
    }
}

/// Logical AND of multiple conditions.
///
/// A single condition is returned unwrapped; two or more are parenthesized.
pub fn and<'a, V, I, E>(conditions: I) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    combine(conditions, Token::AND)
}

/// Logical OR of multiple conditions.
pub fn or<'a, V, I, E>(conditions: I) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    combine(conditions, Token::OR)
}
