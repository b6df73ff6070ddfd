//! Comparison operators.

use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

#[inline]
fn binary_op<'a, V, L, R>(left: L, op: Token, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    left.into_sql().push(op).append(right.into_sql())
}

/// Equality comparison (`=`).
pub fn eq<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::EQ, right)
}

/// Inequality comparison (`<>`).
pub fn neq<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::NE, right)
}

pub fn gt<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::GT, right)
}

pub fn gte<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::GE, right)
}

pub fn lt<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::LT, right)
}

pub fn lte<'a, V, L, R>(left: L, right: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::LE, right)
}

/// LIKE pattern matching.
///
/// Case sensitivity follows the store: SQLite only matches case-sensitively
/// with `PRAGMA case_sensitive_like = ON`.
pub fn like<'a, V, L, R>(left: L, pattern: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    binary_op(left, Token::LIKE, pattern)
}

/// NOT LIKE pattern matching.
pub fn not_like<'a, V, L, R>(left: L, pattern: R) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    left.into_sql()
        .push(Token::NOT)
        .push(Token::LIKE)
        .append(pattern.into_sql())
}
