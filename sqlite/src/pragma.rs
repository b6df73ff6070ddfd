//! SQLite PRAGMA statements applied when a session opens.

use criteria_core::{SQL, ToSQL};

use crate::values::SQLiteValue;

/// SQLite pragma statements for connection configuration
#[derive(Debug, Clone, PartialEq)]
pub enum Pragma {
    /// Query, set, or clear the enforcement of foreign key constraints
    ///
    /// [SQLite Documentation](https://sqlite.org/pragma.html#pragma_foreign_keys)
    ///
    /// # Example
    /// ```
    /// # use criteria_sqlite::pragma::Pragma;
    /// # use criteria_core::ToSQL;
    /// let pragma = Pragma::ForeignKeys(true);
    /// assert_eq!(pragma.to_sql().sql(), "PRAGMA foreign_keys = ON");
    /// ```
    ForeignKeys(bool),

    /// Toggle case sensitivity of the `LIKE` operator for ASCII characters
    ///
    /// [SQLite Documentation](https://sqlite.org/pragma.html#pragma_case_sensitive_like)
    ///
    /// # Example
    /// ```
    /// # use criteria_sqlite::pragma::Pragma;
    /// # use criteria_core::ToSQL;
    /// let pragma = Pragma::CaseSensitiveLike(true);
    /// assert_eq!(pragma.to_sql().sql(), "PRAGMA case_sensitive_like = ON");
    /// ```
    CaseSensitiveLike(bool),
}

impl Pragma {
    /// Pragmas every session runs before its first query.
    pub const fn session_defaults() -> [Pragma; 2] {
        [Pragma::ForeignKeys(true), Pragma::CaseSensitiveLike(true)]
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

impl<'a> ToSQL<'a, SQLiteValue<'a>> for Pragma {
    fn to_sql(&self) -> SQL<'a, SQLiteValue<'a>> {
        match self {
            Pragma::ForeignKeys(enabled) => {
                SQL::raw("PRAGMA foreign_keys =").append(SQL::raw(on_off(*enabled)))
            }
            Pragma::CaseSensitiveLike(enabled) => {
                SQL::raw("PRAGMA case_sensitive_like =").append(SQL::raw(on_off(*enabled)))
            }
        }
    }
}
