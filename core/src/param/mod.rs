use crate::traits::SQLParam;

/// A bound value inside a SQL fragment.
///
/// Every parameter renders as a positional `?`; values are collected in
/// chunk order by [`SQL::params`](crate::SQL::params).
#[derive(Debug, Clone, PartialEq)]
pub struct Param<V: SQLParam> {
    /// The value to bind
    pub value: V,
}

impl<V: SQLParam> Param<V> {
    #[inline]
    pub const fn new(value: V) -> Self {
        Self { value }
    }
}
