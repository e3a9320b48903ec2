//! # Roadmap Forge
//!
//! Generates multi-step learning roadmaps for a topic and difficulty level,
//! stores them per user, and shares read-only copies through token links.
//!
//! ## Modules
//!
//! - **[generation]**: the pure core. Topic validation, per-session cooldown,
//!   and the deterministic template expansion that turns a topic into steps.
//! - **[model]**: plain data structures ([`model::Roadmap`], [`model::StoredRoadmap`],
//!   [`model::User`], ...).
//! - **[user_actor]** / **[roadmap_actor]**: [`ActorEntity`](resource_actor::ActorEntity)
//!   implementations managed by the generic `ResourceActor`.
//! - **[clients]**: typed wrappers ([`clients::UserClient`], [`clients::RoadmapClient`])
//!   that hide the message passing and enforce owner scoping.
//! - **[service]**: [`service::RoadmapService`], the validate → rate-limit →
//!   generate → persist pipeline plus dashboard and share operations.
//! - **[lifecycle]**: starts, wires and stops the actors; tracing setup.
//! - **[config]**: layered settings (defaults, TOML file, `ROADMAP_*` env).
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning
//! full actors.

pub mod clients;
pub mod config;
pub mod generation;
pub mod lifecycle;
pub mod model;
pub mod roadmap_actor;
pub mod service;
pub mod user_actor;
