//! # factwerk
//!
//! Fact-table load tasks for workflow orchestrators.
//!
//! A [`FactLoadTask`] empties a fact table (optionally) and refills it from a
//! SQL select fragment. It is a leaf unit of work: a scheduler builds it, calls
//! [`FactLoadTask::execute`] once and throws it away. Scheduling, retries and
//! connection pooling belong to the caller.
//!
//! ## Core Concepts
//!
//! - **Executor**: runs SQL text against one live connection
//! - **ConnectionProvider**: turns a connection id into an executor
//! - **FactLoadTask**: renders the truncate and insert statements and sends them
//!
//! ## Example
//!
//! ```rust
//! use factwerk::{FactLoadTask, FnExecutor, FnProvider};
//! use anyhow::Result;
//! use std::sync::{Arc, Mutex};
//!
//! let sent = Arc::new(Mutex::new(Vec::new()));
//! let sent_clone = Arc::clone(&sent);
//!
//! let provider = FnProvider(move |_: &str| -> Result<_> {
//!     let sent = Arc::clone(&sent_clone);
//!     Ok(FnExecutor(move |sql: &str| -> Result<()> {
//!         sent.lock().unwrap().push(sql.to_string());
//!         Ok(())
//!     }))
//! });
//!
//! let task = FactLoadTask::new("warehouse", "sales_fact", "SELECT * FROM staging_sales").unwrap();
//! task.execute(&provider).unwrap();
//!
//! assert_eq!(
//!     *sent.lock().unwrap(),
//!     vec![
//!         "TRUNCATE TABLE sales_fact",
//!         "INSERT INTO sales_fact SELECT * FROM staging_sales;",
//!     ]
//! );
//! ```
//!
//! ## Trusted input only
//!
//! Table names and select fragments are interpolated into SQL text as given.
//! No identifier quoting or parameter binding happens, so anything that reaches
//! a task must already be trusted by whoever builds it.

pub mod config;
pub mod error;
pub mod executor;
pub mod provider;
pub mod task;

pub mod prelude;

// Re-export main types at the crate root for convenience
pub use config::{ConnectionRegistry, ScheduledTask, TaskFile};
pub use error::{ConfigError, TaskConfigError};
pub use executor::{Executor, FnExecutor, Traced};
pub use provider::{ConnectionProvider, FnProvider};
pub use task::{FactLoadTask, FactLoadTaskConfig};
