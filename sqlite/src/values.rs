//! SQLite value type and conversions

use criteria_core::{SQL, SQLParam, ToSQL};
use std::borrow::Cow;

/// A value bound to a `?` placeholder in a SQLite statement.
///
/// Mirrors the five SQLite storage classes. Text and blobs borrow when the
/// caller hands in a reference, so filter literals are not copied.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SQLiteValue<'a> {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value (borrowed or owned string)
    Text(Cow<'a, str>),
    /// Blob value (borrowed or owned binary data)
    Blob(Cow<'a, [u8]>),
    /// NULL value
    #[default]
    Null,
}

impl<'a> SQLiteValue<'a> {
    /// Returns true if this value is NULL
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, SQLiteValue::Null)
    }

    /// Returns the integer value if this is an INTEGER
    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            SQLiteValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this is TEXT
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SQLiteValue::Text(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Converts into a value that owns its text and blob data.
    pub fn into_owned(self) -> SQLiteValue<'static> {
        match self {
            SQLiteValue::Integer(value) => SQLiteValue::Integer(value),
            SQLiteValue::Real(value) => SQLiteValue::Real(value),
            SQLiteValue::Text(value) => SQLiteValue::Text(Cow::Owned(value.into_owned())),
            SQLiteValue::Blob(value) => SQLiteValue::Blob(Cow::Owned(value.into_owned())),
            SQLiteValue::Null => SQLiteValue::Null,
        }
    }
}

impl<'a> SQLParam for SQLiteValue<'a> {}

impl<'a> From<SQLiteValue<'a>> for SQL<'a, SQLiteValue<'a>> {
    fn from(value: SQLiteValue<'a>) -> Self {
        SQL::param(value)
    }
}

impl<'a> ToSQL<'a, SQLiteValue<'a>> for SQLiteValue<'a> {
    fn to_sql(&self) -> SQL<'a, SQLiteValue<'a>> {
        SQL::param(self.clone())
    }

    fn into_sql(self) -> SQL<'a, SQLiteValue<'a>> {
        SQL::param(self)
    }
}

impl<'a> std::fmt::Display for SQLiteValue<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SQLiteValue::Integer(value) => write!(f, "{value}"),
            SQLiteValue::Real(value) => write!(f, "{value}"),
            SQLiteValue::Text(value) => write!(f, "'{value}'"),
            SQLiteValue::Blob(value) => write!(f, "<{} bytes>", value.len()),
            SQLiteValue::Null => f.write_str("NULL"),
        }
    }
}

//------------------------------------------------------------------------------
// From<T> implementations
//------------------------------------------------------------------------------

impl<'a> From<i64> for SQLiteValue<'a> {
    fn from(value: i64) -> Self {
        SQLiteValue::Integer(value)
    }
}

impl<'a> From<i32> for SQLiteValue<'a> {
    fn from(value: i32) -> Self {
        SQLiteValue::Integer(i64::from(value))
    }
}

impl<'a> From<bool> for SQLiteValue<'a> {
    fn from(value: bool) -> Self {
        SQLiteValue::Integer(i64::from(value))
    }
}

impl<'a> From<f64> for SQLiteValue<'a> {
    fn from(value: f64) -> Self {
        SQLiteValue::Real(value)
    }
}

impl<'a> From<&'a str> for SQLiteValue<'a> {
    fn from(value: &'a str) -> Self {
        SQLiteValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for SQLiteValue<'a> {
    fn from(value: String) -> Self {
        SQLiteValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for SQLiteValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        SQLiteValue::Blob(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for SQLiteValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        SQLiteValue::Blob(Cow::Owned(value))
    }
}

impl<'a, T> From<Option<T>> for SQLiteValue<'a>
where
    T: Into<SQLiteValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(SQLiteValue::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// rusqlite integration
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl<'a> rusqlite::ToSql for SQLiteValue<'a> {
    fn to_sql(&self) -> ::rusqlite::Result<::rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value, ValueRef};

        Ok(match self {
            SQLiteValue::Null => ToSqlOutput::Owned(Value::Null),
            SQLiteValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            SQLiteValue::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            SQLiteValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            SQLiteValue::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b.as_ref())),
        })
    }
}

#[cfg(feature = "rusqlite")]
impl<'a> rusqlite::types::FromSql for SQLiteValue<'a> {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        use rusqlite::types::ValueRef;

        Ok(match value {
            ValueRef::Null => SQLiteValue::Null,
            ValueRef::Integer(i) => SQLiteValue::Integer(i),
            ValueRef::Real(f) => SQLiteValue::Real(f),
            ValueRef::Text(bytes) => SQLiteValue::Text(Cow::Owned(
                std::str::from_utf8(bytes)
                    .map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))?
                    .to_owned(),
            )),
            ValueRef::Blob(bytes) => SQLiteValue::Blob(Cow::Owned(bytes.to_vec())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_is_stored_as_integer() {
        assert_eq!(SQLiteValue::from(true), SQLiteValue::Integer(1));
        assert_eq!(SQLiteValue::from(false), SQLiteValue::Integer(0));
    }

    #[test]
    fn none_becomes_null() {
        let value: SQLiteValue<'_> = Option::<i64>::None.into();
        assert!(value.is_null());
        assert_eq!(SQLiteValue::from(Some(7_i64)).as_i64(), Some(7));
    }

    #[test]
    fn borrowed_text_survives_into_owned() {
        let pattern = String::from("%my%");
        let value = SQLiteValue::from(pattern.as_str()).into_owned();
        drop(pattern);
        assert_eq!(value.as_str(), Some("%my%"));
    }
}
