//! Typed errors for building tasks and reading task files.
//!
//! Failures raised while a task executes are never represented here: they
//! travel as the executor's own `anyhow::Error`.

use thiserror::Error;

/// A task description that cannot produce valid statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskConfigError {
    #[error("fact load task needs a target table")]
    EmptyTable,

    #[error("fact load task for {table} needs a select fragment")]
    EmptySelect { table: String },
}

/// Failures while reading a task file or resolving names inside it.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read task file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON task file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML task file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported task file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("task {0} is not defined in the task file")]
    UnknownTask(String),

    #[error("task {0} is defined more than once in the task file")]
    DuplicateTask(String),

    #[error("no connection configured for {connection_id} (set {env_var} or add it to connections)")]
    UnknownConnection {
        connection_id: String,
        env_var: String,
    },

    #[error(transparent)]
    Task(#[from] TaskConfigError),
}
