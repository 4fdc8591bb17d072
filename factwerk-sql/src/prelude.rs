//! Commonly used items from factwerk-sql.
//!
//! This module re-exports the main types for convenient access:
//!
//! ```rust
//! use factwerk_sql::prelude::*;
//! ```

pub use crate::{PostgresConnectionProvider, PostgresExecutor};
