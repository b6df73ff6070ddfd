//! Offset-based row extraction.
//!
//! Projections come back as tuples, full records as hand-mapped structs.
//! Both read their columns starting at an offset, so a joined row can be
//! split across several targets:
//!
//! ```text
//! SELECT o.id, o.name, i.id, i.name ...
//!        └─── (i64, String) ──┘└── (i64, String) ──┘
//! ```

#[cfg(feature = "rusqlite")]
mod rusqlite;

use crate::error::CriteriaError;

/// Extracts a Rust value from a database row at a given column offset.
///
/// Tuple impls compose: `(A, B)` reads A at `offset`, then B at
/// `offset + A::COLUMN_COUNT`.
#[diagnostic::on_unimplemented(
    message = "cannot read `{Self}` from a database row",
    label = "this type does not implement FromRow"
)]
pub trait FromRow<Row: ?Sized>: Sized {
    /// Number of columns this type reads from the row.
    const COLUMN_COUNT: usize;

    /// Read this type from `row` starting at column `offset`.
    fn from_row_at(row: &Row, offset: usize) -> Result<Self, CriteriaError>;

    /// Read from offset 0.
    fn from_row(row: &Row) -> Result<Self, CriteriaError> {
        Self::from_row_at(row, 0)
    }
}

macro_rules! impl_from_row_tuple {
    ($($T:ident),+) => {
        impl<__Row: ?Sized, $($T: FromRow<__Row>),+> FromRow<__Row> for ($($T,)+) {
            const COLUMN_COUNT: usize = 0 $(+ <$T as FromRow<__Row>>::COLUMN_COUNT)+;

            #[allow(non_snake_case)]
            fn from_row_at(row: &__Row, offset: usize) -> Result<Self, CriteriaError> {
                let mut __off = offset;
                $(
                    let $T = <$T as FromRow<__Row>>::from_row_at(row, __off)?;
                    __off += <$T as FromRow<__Row>>::COLUMN_COUNT;
                )+
                let _ = __off;
                Ok(($($T,)+))
            }
        }
    };
}

impl_from_row_tuple!(A);
impl_from_row_tuple!(A, B);
impl_from_row_tuple!(A, B, C);
impl_from_row_tuple!(A, B, C, D);
impl_from_row_tuple!(A, B, C, D, E);
impl_from_row_tuple!(A, B, C, D, E, F);
