//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and
//! `delete` built on top of the wrapped `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// Implementors provide access to the inner client and a mapping from
/// [`FrameworkError`] into their own error type; `get`, `list` and `delete`
/// come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///     fn inner(&self) -> &ResourceClient<User> { &self.inner }
///     fn map_error(e: FrameworkError) -> UserError { UserError::from_framework(e) }
/// }
///
/// let user = user_client.get(id).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity selected by `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
