//! # Roadmap Actor
//!
//! The roadmap store: saved roadmaps with their steps, favorite flag and share
//! token.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`StoredRoadmap`]
//! - [`actions`] - Custom actions ([`RoadmapAction`]): insert steps, toggle favorite, share, unshare
//! - [`error`] - [`RoadmapStoreError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! `Context = UserClient`: `on_create` asks the user actor whether the owner
//! exists, so the roadmap actor must be started with a user client:
//!
//! ```rust,ignore
//! let (users, user_client) = user_actor::new(32);
//! let (roadmaps, roadmap_client) = roadmap_actor::new(32);
//! tokio::spawn(users.run(()));
//! tokio::spawn(roadmaps.run(user_client.clone()));
//! ```
//!
//! Owner scoping (another user's roadmap reads as not found) is enforced by
//! [`RoadmapClient`], not by the actor.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RoadmapClient;
use crate::model::StoredRoadmap;
use resource_actor::ResourceActor;

/// Creates a new roadmap actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StoredRoadmap>, RoadmapClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RoadmapClient::new(generic_client))
}
