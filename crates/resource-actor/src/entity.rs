//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (a user record, a stored
//! roadmap, ...) implements to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the DTOs for create/update, the custom actions, the typed list query,
//! the injected context and the error type, and provides the lifecycle hooks the
//! actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! These have default implementations and only need overriding when an entity
//! cares about them:
//! - [`ActorEntity::assigned_id`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` associated type
/// is injected into every hook at `run()` time rather than at construction, which
/// lets actors that depend on each other be created in any order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for counter-based ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `ToggleFavorite`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Typed filter used by `List` requests (e.g. "owned by user X").
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: every hook and action of
    /// an entity returns the same error type, so clients match on a single enum.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lets the create payload carry its own identifier.
    ///
    /// Entities whose ids come from outside the system (an identity provider, for
    /// instance) return `Some(id)`; the actor then rejects the create if that id is
    /// already taken. The default defers to the actor's internal counter.
    fn assigned_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by a `List` query.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Returning an error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
