mod chunk;
mod tokens;

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::param::Param;
use crate::traits::{SQLColumnInfo, SQLParam, SQLTableInfo, ToSQL};
pub use chunk::*;
pub use tokens::*;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation.
#[derive(Debug, Clone)]
pub struct SQL<'a, V: SQLParam> {
    pub chunks: SmallVec<[SQLChunk<'a, V>; 8]>,
}

impl<'a, V: SQLParam> SQL<'a, V> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates an empty SQL fragment with pre-allocated chunk capacity.
    #[inline]
    pub fn with_capacity_chunks(capacity: usize) -> Self {
        Self {
            chunks: SmallVec::with_capacity(capacity),
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single unsigned integer literal.
    #[inline]
    pub fn number(value: usize) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Number(value)],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<V>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(Param::new(value.into()))],
        }
    }

    /// Creates SQL referencing a table
    #[inline]
    pub fn table(table: &'static dyn SQLTableInfo) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Table(table)],
        }
    }

    /// Creates SQL referencing a column
    #[inline]
    pub fn column(column: &'static dyn SQLColumnInfo) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Column(column)],
        }
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a, V>>) -> Self {
        let other = other.into();

        if self.chunks.is_empty() {
            return other;
        }
        if other.chunks.is_empty() {
            return self;
        }

        self.chunks.extend(other.chunks);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL<'a, V>>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        if other.chunks.is_empty() {
            return;
        }

        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a, V>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk<'a, V>>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a, V>
    where
        T: IntoIterator,
        T::Item: ToSQL<'a, V>,
    {
        let mut iter = sqls.into_iter();
        let Some(first) = iter.next() else {
            return SQL::empty();
        };

        let mut result = first.into_sql();
        let (lower, _) = iter.size_hint();
        result.chunks.reserve(lower.saturating_mul(2));

        for item in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(item.into_sql().chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Creates an aliased version: self AS "name"
    pub fn alias(self, name: impl Into<Cow<'a, str>>) -> SQL<'a, V> {
        self.push(Token::AS).push(SQLChunk::Ident(name.into()))
    }

    /// Creates a comma-separated list of parameters.
    pub fn param_list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        let mut chunks = SmallVec::with_capacity(lower.saturating_mul(2));
        for (i, v) in iter.enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Token(Token::COMMA));
            }
            chunks.push(SQLChunk::Param(Param::new(v.into())));
        }
        SQL { chunks }
    }

    /// True when nothing but a bare `SELECT` has been written so far.
    #[inline]
    pub fn is_bare_select(&self) -> bool {
        matches!(self.chunks.as_slice(), [SQLChunk::Token(Token::SELECT)])
    }

    // ==================== output methods ====================

    /// Returns the SQL string with `?` placeholders.
    pub fn sql(&self) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(128));
        self.write_to(&mut buf);
        buf
    }

    /// Parameter values in placeholder order.
    pub fn params(&self) -> Vec<&V> {
        self.chunks
            .iter()
            .filter_map(|chunk| match chunk {
                SQLChunk::Param(param) => Some(&param.value),
                _ => None,
            })
            .collect()
    }

    /// Generates the SQL string and collects parameter references in a single pass.
    pub fn build(&self) -> (String, Vec<&V>) {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(128));
        let mut params = Vec::new();
        let mut prev: Option<&SQLChunk<'a, V>> = None;
        for chunk in &self.chunks {
            if let Some(prev) = prev
                && chunk.needs_space_after(prev)
            {
                buf.push(' ');
            }
            if let SQLChunk::Param(param) = chunk {
                params.push(&param.value);
            }
            chunk.write(&mut buf);
            prev = Some(chunk);
        }
        (buf, params)
    }

    /// Renders every chunk into `buf`, separated by single spaces where needed.
    pub fn write_to(&self, buf: &mut impl core::fmt::Write) {
        let mut prev: Option<&SQLChunk<'a, V>> = None;
        for chunk in &self.chunks {
            if let Some(prev) = prev
                && chunk.needs_space_after(prev)
            {
                let _ = buf.write_char(' ');
            }
            chunk.write(buf);
            prev = Some(chunk);
        }
    }
}

impl<'a, V: SQLParam> Default for SQL<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: SQLParam> From<Token> for SQL<'a, V> {
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a, V: SQLParam> FromIterator<Token> for SQL<'a, V> {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        SQL {
            chunks: iter.into_iter().map(SQLChunk::Token).collect(),
        }
    }
}

impl<'a, V: SQLParam> core::fmt::Display for SQL<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_to(f);
        Ok(())
    }
}

impl<'a, V: SQLParam> ToSQL<'a, V> for SQL<'a, V> {
    fn to_sql(&self) -> SQL<'a, V> {
        self.clone()
    }

    fn into_sql(self) -> SQL<'a, V> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestValue(i64);

    impl SQLParam for TestValue {}

    impl From<i64> for TestValue {
        fn from(value: i64) -> Self {
            TestValue(value)
        }
    }

    #[test]
    fn renders_spacing_around_punctuation() {
        let sql: SQL<'_, TestValue> = SQL::raw("x")
            .push(Token::IN)
            .append(SQL::param_list([1i64, 2, 3]).parens());
        assert_eq!(sql.sql(), "x IN (?, ?, ?)");
    }

    #[test]
    fn build_collects_params_in_order() {
        let sql: SQL<'_, TestValue> = SQL::ident("a")
            .push(Token::EQ)
            .append(SQL::param(7i64))
            .push(Token::AND)
            .append(SQL::ident("b"))
            .push(Token::EQ)
            .append(SQL::param(9i64));
        let (text, params) = sql.build();
        assert_eq!(text, r#""a" = ? AND "b" = ?"#);
        assert_eq!(params, vec![&TestValue(7), &TestValue(9)]);
        assert_eq!(sql.params(), params);
    }

    #[test]
    fn join_skips_separator_for_single_item() {
        let one: SQL<'_, TestValue> = SQL::join([SQL::raw("a")], Token::COMMA);
        assert_eq!(one.sql(), "a");
        let none: SQL<'_, TestValue> = SQL::join(Vec::<SQL<'_, TestValue>>::new(), Token::COMMA);
        assert!(none.chunks.is_empty());
    }

    #[test]
    fn alias_quotes_name() {
        let sql: SQL<'_, TestValue> = SQL::raw("count(*)").alias("total");
        assert_eq!(sql.to_string(), r#"count(*) AS "total""#);
    }
}
