//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(32);
//! let (roadmap_actor, roadmap_client) = roadmap_actor::new(32);
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(roadmap_actor.run(user_client.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the channels
//! 2. **Actors detect closure**: `receiver.recv()` returns `None`
//! 3. **Await completion**: wait for every actor task
//!
//! The roadmap actor holds a user client in its context. The dependency graph
//! is acyclic, so the user actor stops once the roadmap actor has stopped.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the whole system.

pub mod roadmap_system;
pub mod tracing;

pub use self::roadmap_system::*;
pub use self::tracing::*;
