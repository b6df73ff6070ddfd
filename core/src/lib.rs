//! Dialect-neutral building blocks for criteria-style queries.
//!
//! SQL is assembled from flat [`SQLChunk`] lists so that filter predicates,
//! sort orders, joins and projections can be composed independently and
//! rendered once, with parameters collected in the same order as their
//! placeholders.

pub mod builder;
pub mod error;
pub mod expr;
pub mod helpers;
pub mod join;
pub mod param;
pub mod row;
pub mod schema;
pub mod sql;
pub mod tracing;
pub mod traits;

// Re-export key types and traits
pub use builder::{BuilderInit, ExecutableState};
pub use join::{Join, JoinType};
pub use param::Param;
pub use row::FromRow;
pub use schema::OrderBy;
pub use sql::{SQL, SQLChunk, Token};
pub use traits::*;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use ::tracing as __tracing;
