//! Predicate expressions for WHERE and ON clauses.
//!
//! Every function returns a plain [`SQL`](crate::SQL) fragment, so predicates
//! compose freely with `and`/`or` and can be handed to any builder clause.

mod cmp;
mod logical;
mod null;
mod set;

pub use cmp::*;
pub use logical::*;
pub use null::*;
pub use set::*;
