//! Error types for the roadmap actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during roadmap store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoadmapStoreError {
    /// No roadmap with this id is visible to the caller.
    #[error("Roadmap not found: {0}")]
    NotFound(String),

    /// The share link does not point at a shared roadmap.
    #[error("No roadmap is shared under this link")]
    NotShared,

    /// The owner is not a registered user.
    #[error("Unknown owner: {0}")]
    UnknownOwner(String),

    /// The user registry could not be consulted.
    #[error("Owner lookup failed: {0}")]
    OwnerLookupFailed(String),

    #[error("Roadmap topic must not be empty")]
    EmptyTopic,

    /// Step numbers must be contiguous.
    #[error("Step out of sequence: expected {expected}, found {found}")]
    StepOutOfSequence { expected: u32, found: u32 },

    #[error("Step {0} has no resources")]
    StepWithoutResources(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RoadmapStoreError {
    /// Maps a framework failure, unwrapping errors raised by the roadmap hooks.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RoadmapStoreError::NotFound(id),
            other => match other.into_entity_error::<RoadmapStoreError>() {
                Ok(inner) => inner,
                Err(transport) => {
                    RoadmapStoreError::ActorCommunicationError(transport.to_string())
                }
            },
        }
    }
}
