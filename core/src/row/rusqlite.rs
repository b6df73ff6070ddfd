//! `FromRow` leaf impls for [`rusqlite::Row`].

use crate::error::CriteriaError;
use crate::row::FromRow;

macro_rules! impl_leaf_rusqlite_via_get {
    ($($ty:ty),*) => { $(
        impl<'r> FromRow<::rusqlite::Row<'r>> for $ty {
            const COLUMN_COUNT: usize = 1;
            fn from_row_at(
                row: &::rusqlite::Row<'r>,
                offset: usize,
            ) -> Result<Self, CriteriaError> {
                Ok(row.get(offset)?)
            }
        }
    )* }
}

impl_leaf_rusqlite_via_get!(i32, i64, u32, f64, bool, String, Vec<u8>);

impl<'r> FromRow<::rusqlite::Row<'r>> for u64 {
    const COLUMN_COUNT: usize = 1;
    fn from_row_at(row: &::rusqlite::Row<'r>, offset: usize) -> Result<Self, CriteriaError> {
        let value = row.get::<_, i64>(offset)?;
        u64::try_from(value)
            .map_err(|e| CriteriaError::Conversion(format!("column {offset}: {value}: {e}")))
    }
}

// -- Option<T>: NULL-aware wrapper --

impl<'r, T: FromRow<::rusqlite::Row<'r>>> FromRow<::rusqlite::Row<'r>> for Option<T> {
    const COLUMN_COUNT: usize = T::COLUMN_COUNT;
    fn from_row_at(row: &::rusqlite::Row<'r>, offset: usize) -> Result<Self, CriteriaError> {
        let ref_val = row.get_ref(offset)?;
        if matches!(ref_val, ::rusqlite::types::ValueRef::Null) {
            Ok(None)
        } else {
            T::from_row_at(row, offset).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_reads_consecutive_columns() {
        let conn = ::rusqlite::Connection::open_in_memory().unwrap();
        let row: (i64, String, Option<i64>, Option<String>) = conn
            .query_row("SELECT 1, 'myOrder', NULL, NULL", [], |row| {
                Ok(FromRow::from_row(row))
            })
            .unwrap()
            .unwrap();
        assert_eq!(row, (1, "myOrder".to_string(), None, None));
    }

    #[test]
    fn nested_tuples_advance_offsets() {
        let conn = ::rusqlite::Connection::open_in_memory().unwrap();
        let row: ((i64, String), (i64, String)) = conn
            .query_row("SELECT 1, 'a', 10, 'b'", [], |row| Ok(FromRow::from_row(row)))
            .unwrap()
            .unwrap();
        assert_eq!(row, ((1, "a".into()), (10, "b".into())));
    }

    #[test]
    fn negative_integer_does_not_fit_u64() {
        let conn = ::rusqlite::Connection::open_in_memory().unwrap();
        let result: Result<(u64,), CriteriaError> = conn
            .query_row("SELECT -1", [], |row| Ok(FromRow::from_row(row)))
            .unwrap();
        assert!(matches!(result, Err(CriteriaError::Conversion(_))));

        let ok: Result<(u64,), CriteriaError> = conn
            .query_row("SELECT 42", [], |row| Ok(FromRow::from_row(row)))
            .unwrap();
        assert_eq!(ok.unwrap(), (42,));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let conn = ::rusqlite::Connection::open_in_memory().unwrap();
        let result: Result<(i64,), CriteriaError> = conn
            .query_row("SELECT 'not a number'", [], |row| Ok(FromRow::from_row(row)))
            .unwrap();
        assert!(matches!(result, Err(CriteriaError::Rusqlite(_))));
    }
}
