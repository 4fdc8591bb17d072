//! Prelude module for convenient imports.
//!
//! ```rust
//! use factwerk::prelude::*;
//! ```

pub use crate::config::{ConnectionRegistry, ScheduledTask, TaskFile};
pub use crate::executor::{Executor, FnExecutor, Traced};
pub use crate::provider::{ConnectionProvider, FnProvider};
pub use crate::task::{FactLoadTask, FactLoadTaskConfig};
