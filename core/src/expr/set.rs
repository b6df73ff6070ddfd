use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

/// `expr IN (?, ?, ...)`.
///
/// An empty list renders as the always-false `1 = 0` instead of `IN ()`,
/// which not every dialect accepts.
pub fn in_array<'a, V, E, I>(expr: E, values: I) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    I: IntoIterator,
    I::Item: Into<V>,
{
    let list: SQL<'a, V> = SQL::param_list(values);
    if list.chunks.is_empty() {
        return SQL::raw("1 = 0");
    }
    expr.into_sql().push(Token::IN).append(list.parens())
}

/// `expr IN (subquery)`.
///
/// Binds only the subquery's own parameters, so the size of its result has
/// no bearing on the variable limit of the driver.
pub fn in_subquery<'a, V, E, Q>(expr: E, subquery: Q) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    Q: ToSQL<'a, V>,
{
    expr.into_sql()
        .push(Token::IN)
        .append(subquery.into_sql().parens())
}
