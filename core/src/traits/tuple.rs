//! `ToSQL` for tuples: comma-separated projections such as `(order.id, order.name)`.

use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

/// Calls `$callback!(T0)`, ..., `$callback!(T0, ..., T7)`.
macro_rules! seq_types {
    (@acc $callback:ident [$($acc:ident),*]) => {};
    (@acc $callback:ident [$($acc:ident),*] $next:ident $($rest:ident)*) => {
        $callback!($($acc,)* $next);
        seq_types!(@acc $callback [$($acc,)* $next] $($rest)*);
    };
}

macro_rules! impl_to_sql_tuple {
    ($($T:ident),+) => {
        impl<'a, V: SQLParam + 'a, $($T: ToSQL<'a, V>),+> ToSQL<'a, V> for ($($T,)+) {
            #[allow(non_snake_case)]
            fn to_sql(&self) -> SQL<'a, V> {
                let ($($T,)+) = self;
                SQL::join([$($T.to_sql()),+], Token::COMMA)
            }
        }
    };
}

seq_types!(@acc impl_to_sql_tuple [] T0 T1 T2 T3 T4 T5 T6 T7);
