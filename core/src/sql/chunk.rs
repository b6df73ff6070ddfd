use std::borrow::Cow;
use std::fmt::Write;

use crate::param::Param;
use crate::sql::tokens::Token;
use crate::traits::{SQLColumnInfo, SQLParam, SQLTableInfo};

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords and operators (SELECT, FROM, =, etc.)
/// - `Ident` - Quoted identifiers ("table_name", "column_name")
/// - `Raw` - Unquoted raw SQL text
/// - `Number` - Unsigned integer literal (LIMIT/OFFSET)
/// - `Param` - Bound value, rendered as `?`
/// - `Table` - Table reference with metadata access
/// - `Column` - Column reference with metadata access
#[derive(Clone)]
pub enum SQLChunk<'a, V: SQLParam> {
    /// SQL keywords and operators: SELECT, FROM, WHERE, =, AND, etc.
    Token(Token),

    /// Quoted identifier. Renders as: "name"
    Ident(Cow<'a, str>),

    /// Raw SQL text, rendered as-is
    Raw(Cow<'a, str>),

    /// Integer literal, rendered as-is
    Number(usize),

    /// Parameter with its value. Renders as: ?
    Param(Param<V>),

    /// Table reference. Renders as: "table_name"
    Table(&'static dyn SQLTableInfo),

    /// Column reference. Renders as: "table"."column"
    Column(&'static dyn SQLColumnInfo),
}

impl<'a, V: SQLParam> SQLChunk<'a, V> {
    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    /// Creates a quoted identifier from a static string - const
    #[inline]
    pub const fn ident_static(name: &'static str) -> Self {
        Self::Ident(Cow::Borrowed(name))
    }

    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    /// Creates a table chunk - const
    #[inline]
    pub const fn table(table: &'static dyn SQLTableInfo) -> Self {
        Self::Table(table)
    }

    /// Creates a column chunk - const
    #[inline]
    pub const fn column(column: &'static dyn SQLColumnInfo) -> Self {
        Self::Column(column)
    }

    /// Creates a quoted identifier from a runtime string
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Write chunk content to buffer
    pub(crate) fn write(&self, buf: &mut impl Write) {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => {
                let _ = buf.write_char('"');
                let _ = buf.write_str(name);
                let _ = buf.write_char('"');
            }
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Number(n) => {
                let _ = write!(buf, "{n}");
            }
            SQLChunk::Param(_) => {
                let _ = buf.write_char('?');
            }
            SQLChunk::Table(table) => {
                let _ = buf.write_char('"');
                let _ = buf.write_str(table.name());
                let _ = buf.write_char('"');
            }
            SQLChunk::Column(column) => {
                let _ = buf.write_char('"');
                let _ = buf.write_str(column.table().name());
                let _ = buf.write_str("\".\"");
                let _ = buf.write_str(column.name());
                let _ = buf.write_char('"');
            }
        }
    }

    /// Whether a space goes between `prev` and this chunk when rendering.
    #[inline]
    pub(crate) const fn needs_space_after(&self, prev: &SQLChunk<'a, V>) -> bool {
        let opens = matches!(prev, SQLChunk::Token(Token::LPAREN | Token::DOT));
        let closes = matches!(
            self,
            SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::SEMI | Token::DOT)
        );
        !opens && !closes
    }
}

impl<'a, V: SQLParam> core::fmt::Debug for SQLChunk<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SQLChunk::Token(token) => f.debug_tuple("Token").field(token).finish(),
            SQLChunk::Ident(name) => f.debug_tuple("Ident").field(name).finish(),
            SQLChunk::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
            SQLChunk::Number(n) => f.debug_tuple("Number").field(n).finish(),
            SQLChunk::Param(param) => f.debug_tuple("Param").field(param).finish(),
            SQLChunk::Table(table) => f.debug_tuple("Table").field(&table.name()).finish(),
            SQLChunk::Column(column) => f
                .debug_tuple("Column")
                .field(&format!("{}.{}", column.table().name(), column.name()))
                .finish(),
        }
    }
}

// ==================== From implementations ====================

impl<'a, V: SQLParam> From<Token> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl<'a, V: SQLParam> From<&'static dyn SQLColumnInfo> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: &'static dyn SQLColumnInfo) -> Self {
        Self::Column(value)
    }
}

impl<'a, V: SQLParam> From<&'static dyn SQLTableInfo> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: &'static dyn SQLTableInfo) -> Self {
        Self::Table(value)
    }
}

impl<'a, V: SQLParam> From<Param<V>> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Param<V>) -> Self {
        Self::Param(value)
    }
}
