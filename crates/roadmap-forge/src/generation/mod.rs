//! # Roadmap Generation
//!
//! The pure, synchronous core: everything here is a plain function of its
//! inputs and can be used without any actor running.
//!
//! - [`validator`]: rejects meaningless topics ([`validate_topic`])
//! - [`rate_limit`]: per-session cooldown between generations ([`RateLimiter`])
//! - [`catalog`]: curated phrase sets, first matching track wins
//! - [`resources`]: search links attached to each step
//! - [`generator`]: expands a topic and level into numbered steps ([`RoadmapGenerator`])
//!
//! ```rust
//! use roadmap_forge::generation::{generate, validate_topic};
//! use roadmap_forge::model::Level;
//!
//! let topic = validate_topic("JavaScript").unwrap();
//! let roadmap = generate(&topic, Level::Beginner);
//! assert_eq!(roadmap.steps.len(), 10);
//! assert!(roadmap.steps[0].title.starts_with("JavaScript Syntax and Basics"));
//! ```

pub mod catalog;
pub mod generator;
pub mod rate_limit;
pub mod resources;
pub mod validator;

pub use generator::{generate, RoadmapGenerator, StepCounts};
pub use rate_limit::{RateLimitError, RateLimitState, RateLimiter, DEFAULT_COOLDOWN};
pub use validator::{validate_topic, ValidTopic, ValidationError};
