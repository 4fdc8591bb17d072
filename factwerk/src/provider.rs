//! Connection providers - resolve an opaque connection id into an [`Executor`].

use anyhow::Result;

use crate::{Executor, Traced};

/// Resolves a connection identifier into a ready-to-use [`Executor`].
///
/// The returned executor is owned by the caller for the duration of one task
/// execution and dropped afterwards. Releasing or pooling the underlying
/// connection is the provider's business, not the task's.
///
/// # Example
///
/// ```rust
/// use factwerk::{ConnectionProvider, FnExecutor, FnProvider};
/// use anyhow::{bail, Result};
///
/// let provider = FnProvider(|id: &str| -> Result<_> {
///     if id != "warehouse" {
///         bail!("unknown connection {}", id);
///     }
///     Ok(FnExecutor(|_: &str| -> Result<()> { Ok(()) }))
/// });
///
/// assert!(provider.resolve("warehouse").is_ok());
/// assert!(provider.resolve("other").is_err());
/// ```
pub trait ConnectionProvider {
    /// The executor type handed out for a resolved connection
    type Executor: Executor;

    /// Resolve `connection_id` to a live executor
    fn resolve(&self, connection_id: &str) -> Result<Self::Executor>;
}

impl<P> ConnectionProvider for &P
where
    P: ConnectionProvider + ?Sized,
{
    type Executor = P::Executor;

    fn resolve(&self, connection_id: &str) -> Result<Self::Executor> {
        (**self).resolve(connection_id)
    }
}

/// Wrapper that implements [`ConnectionProvider`] for functions.
///
/// Allows closures with the signature `Fn(&str) -> Result<E>` to act as
/// providers, where `E` is any [`Executor`].
pub struct FnProvider<F>(pub F);

impl<F, E> ConnectionProvider for FnProvider<F>
where
    F: Fn(&str) -> Result<E>,
    E: Executor,
{
    type Executor = E;

    fn resolve(&self, connection_id: &str) -> Result<Self::Executor> {
        (self.0)(connection_id)
    }
}

/// Tracing providers hand out tracing executors, so every statement sent over
/// a resolved connection is logged at debug level.
impl<P> ConnectionProvider for Traced<P>
where
    P: ConnectionProvider,
{
    type Executor = Traced<P::Executor>;

    fn resolve(&self, connection_id: &str) -> Result<Self::Executor> {
        tracing::debug!(connection_id, "resolving connection");
        self.inner().resolve(connection_id).map(Traced::new)
    }
}
