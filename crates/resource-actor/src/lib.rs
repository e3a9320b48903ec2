//! # Resource Actor
//!
//! Building blocks for type-safe, resource-oriented actors on Tokio.
//!
//! Each resource type (users, stored roadmaps, ...) gets its own actor with
//! isolated state. The actor exposes the standard lifecycle operations
//! (Create, Get, Update, Delete), a filtered `List` read, and custom `Action`s.
//! Actors that need each other talk through injected clients rather than
//! shared memory.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain model and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): the sequential message loop that owns the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): the async handle callers use.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to `new`:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = ResourceActor::<User>::new(32);
//! let (roadmap_actor, roadmap_client) = ResourceActor::<StoredRoadmap>::new(32);
//!
//! tokio::spawn(user_actor.run(()));
//! // Roadmaps validate their owner through the user client.
//! tokio::spawn(roadmap_actor.run(UserClient::new(user_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles one message at a time.
//! - Different actors run in parallel.
//! - Clients are cheap to clone; dropping every clone shuts the actor down.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted
//! expectations, so an actor's dependencies can be faked without spawning them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
