//! The fact-table load task.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{ConnectionProvider, Executor, TaskConfigError};

pub(crate) fn default_truncate() -> bool {
    true
}

/// Parameters of a single fact-table load.
///
/// `table` and `select_fragment` are spliced into SQL text verbatim. Nothing
/// is quoted, escaped or bound, so both must come from a trusted source.
///
/// Unknown keys are rejected, so a misspelled `is_truncated` cannot silently
/// fall back to truncating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactLoadTaskConfig {
    /// Opaque id the connection provider resolves to a live database
    #[serde(alias = "conn_id")]
    pub connection_id: String,

    /// Target fact table
    pub table: String,

    /// Row-producing SQL whose columns line up with `table`,
    /// e.g. `SELECT * FROM staging_sales`
    #[serde(alias = "sql_query", alias = "select")]
    pub select_fragment: String,

    /// Empty the table before inserting
    #[serde(default = "default_truncate", alias = "is_truncated")]
    pub truncate_before_load: bool,
}

/// Loads the rows produced by a select fragment into a fact table,
/// optionally truncating the table first.
///
/// Executing sends at most two statements, in order:
///
/// 1. `TRUNCATE TABLE {table}` (only when truncation is enabled)
/// 2. `INSERT INTO {table} {select_fragment};`
///
/// No transaction is opened around them. If the insert fails after the
/// truncate succeeded, the table stays empty.
///
/// # Example
///
/// ```rust
/// use factwerk::{FactLoadTask, FnExecutor, FnProvider};
/// use anyhow::Result;
///
/// let task = FactLoadTask::new("warehouse", "sales_fact", "SELECT * FROM staging_sales")
///     .unwrap()
///     .truncate_before_load(false);
///
/// let provider = FnProvider(|_: &str| -> Result<_> {
///     Ok(FnExecutor(|sql: &str| -> Result<()> {
///         println!("{}", sql);
///         Ok(())
///     }))
/// });
///
/// task.execute(&provider).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactLoadTask {
    config: FactLoadTaskConfig,
}

impl FactLoadTask {
    /// Create a task that truncates `table` before loading it.
    pub fn new(
        connection_id: impl Into<String>,
        table: impl Into<String>,
        select_fragment: impl Into<String>,
    ) -> Result<Self, TaskConfigError> {
        Self::from_config(FactLoadTaskConfig {
            connection_id: connection_id.into(),
            table: table.into(),
            select_fragment: select_fragment.into(),
            truncate_before_load: true,
        })
    }

    /// Create a task from a deserialized configuration.
    ///
    /// # Errors
    ///
    /// Fails when the table name or the select fragment is blank.
    pub fn from_config(config: FactLoadTaskConfig) -> Result<Self, TaskConfigError> {
        if config.table.trim().is_empty() {
            return Err(TaskConfigError::EmptyTable);
        }
        if config.select_fragment.trim().is_empty() {
            return Err(TaskConfigError::EmptySelect {
                table: config.table,
            });
        }

        Ok(Self { config })
    }

    /// Enable or disable the truncate that precedes the insert.
    pub fn truncate_before_load(mut self, truncate: bool) -> Self {
        self.config.truncate_before_load = truncate;
        self
    }

    pub fn connection_id(&self) -> &str {
        &self.config.connection_id
    }

    pub fn table(&self) -> &str {
        &self.config.table
    }

    pub fn select_fragment(&self) -> &str {
        &self.config.select_fragment
    }

    pub fn truncates(&self) -> bool {
        self.config.truncate_before_load
    }

    pub fn config(&self) -> &FactLoadTaskConfig {
        &self.config
    }

    pub fn into_config(self) -> FactLoadTaskConfig {
        self.config
    }

    fn truncate_sql(&self) -> String {
        format!("TRUNCATE TABLE {}", self.config.table)
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} {};",
            self.config.table, self.config.select_fragment
        )
    }

    /// The statements [`execute`](Self::execute) sends, in order.
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::with_capacity(2);
        if self.config.truncate_before_load {
            statements.push(self.truncate_sql());
        }
        statements.push(self.insert_sql());
        statements
    }

    /// Run the load against the connection resolved from `provider`.
    ///
    /// The executor is acquired for this call only and dropped before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns the provider's or executor's error unchanged. A failed
    /// resolve sends nothing, and a failed truncate skips the insert.
    pub fn execute<P>(&self, provider: &P) -> Result<()>
    where
        P: ConnectionProvider + ?Sized,
    {
        let table = self.table();
        tracing::info!(
            table,
            connection_id = self.connection_id(),
            "loading data into fact table"
        );
        let executor = provider.resolve(self.connection_id())?;

        if self.config.truncate_before_load {
            tracing::info!(table, "clearing fact table");
            executor.run(&self.truncate_sql())?;
            tracing::info!(table, "fact table cleared");
        }

        executor.run(&self.insert_sql())?;
        tracing::info!(table, "fact table loaded");

        Ok(())
    }
}
