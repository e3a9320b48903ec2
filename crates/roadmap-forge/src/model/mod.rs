//! Plain data structures (DTOs); the stored ones implement
//! [`ActorEntity`](resource_actor::ActorEntity) in their actor modules.

pub mod level;
pub mod roadmap;
pub mod user;

pub use level::*;
pub use roadmap::*;
pub use user::*;
