//! Criteria-style queries over a two-table shopping order schema.
//!
//! Three read-only endpoints build their SQL with the typestate query
//! builder from `criteria-sqlite`, run it through a [`Session`], and hand
//! typed results to a small route table that turns them into JSON:
//!
//! ```no_run
//! use criteria_demo::prelude::*;
//!
//! fn main() -> criteria_demo::Result<()> {
//!     let mut session = Session::open_in_memory(DemoSchema::new())?;
//!     session.create()?;
//!     seed_demo(&mut session)?;
//!
//!     let response = Router::new().dispatch(&session, Method::Get, "/demo/join");
//!     assert_eq!(response.status, 200);
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod model;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod session;

pub use criteria_core as core;
pub use criteria_sqlite as sqlite;

pub use criteria_core::error::{CriteriaError, Result};
pub use routes::{Method, Response, Route, Router};
pub use schema::{DemoSchema, Item, ShoppingOrder};
pub use seed::{SeedReport, seed_demo};
pub use session::{Session, Transaction};

/// Everything needed to open a session, query the demo schema and
/// dispatch requests.
pub mod prelude {
    pub use crate::endpoints;
    pub use crate::model::*;
    pub use crate::routes::{Method, Response, Router};
    pub use crate::schema::{DemoSchema, Item, ShoppingOrder};
    pub use crate::seed::seed_demo;
    pub use crate::session::{Session, Transaction};
    pub use criteria_core::error::CriteriaError;
    pub use criteria_core::expr::*;
    pub use criteria_core::{FromRow, Join, OrderBy, SQL, ToSQL};
    pub use criteria_sqlite::{
        QueryBuilder, SQLiteSchema, SQLiteTable, SQLiteTransactionType, SQLiteValue,
    };
}
