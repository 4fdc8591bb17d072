//! Statement executors - the narrow seam through which SQL reaches a database.

use anyhow::*;

/// Runs SQL text against a live database connection.
///
/// This is the only capability a [`FactLoadTask`](crate::FactLoadTask) needs
/// from a database. Each call is synchronous and either completes or fails;
/// failures are returned exactly as the underlying driver produced them.
///
/// # Example
///
/// ```rust
/// use factwerk::{Executor, FnExecutor};
/// use anyhow::Result;
///
/// fn print_sql(sql: &str) -> Result<()> {
///     println!("{}", sql);
///     Ok(())
/// }
///
/// let executor = FnExecutor(print_sql);
/// executor.run("SELECT 1").unwrap();
/// ```
pub trait Executor {
    /// Send one statement to the database
    fn run(&self, sql: &str) -> Result<()>;
}

impl<E> Executor for &E
where
    E: Executor + ?Sized,
{
    fn run(&self, sql: &str) -> Result<()> {
        (**self).run(sql)
    }
}

/// Wrapper that implements [`Executor`] for functions.
///
/// Allows closures with the signature `Fn(&str) -> Result<()>` to stand in
/// for a database, which is mostly useful in tests and dry runs.
///
/// # Example
///
/// ```rust
/// use factwerk::FnExecutor;
/// use anyhow::Result;
///
/// let executor = FnExecutor(|sql: &str| -> Result<()> {
///     println!("would run: {}", sql);
///     Ok(())
/// });
/// ```
pub struct FnExecutor<F>(pub F);

impl<F> Executor for FnExecutor<F>
where
    F: Fn(&str) -> Result<()>,
{
    fn run(&self, sql: &str) -> Result<()> {
        (self.0)(sql)
    }
}

/// Decorator that traces every statement before delegating to the inner executor.
///
/// The inner executor's result is returned untouched, errors included.
/// Wrapping a [`ConnectionProvider`](crate::ConnectionProvider) instead traces
/// every executor it resolves.
///
/// # Example
///
/// ```rust
/// use factwerk::{Executor, FnExecutor, Traced};
/// use anyhow::Result;
///
/// let executor = Traced::new(FnExecutor(|_: &str| -> Result<()> { Ok(()) }));
/// executor.run("TRUNCATE TABLE sales_fact").unwrap();
/// ```
pub struct Traced<E> {
    inner: E,
}

impl<E> Traced<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E> Executor for Traced<E>
where
    E: Executor,
{
    fn run(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "running statement");
        self.inner.run(sql)
    }
}
