use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

/// `expr IS NULL`
pub fn is_null<'a, V, E>(expr: E) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    expr.into_sql().push(Token::IS).push(Token::NULL)
}

/// `expr IS NOT NULL`
pub fn is_not_null<'a, V, E>(expr: E) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    expr.into_sql()
        .push(Token::IS)
        .push(Token::NOT)
        .push(Token::NULL)
}
