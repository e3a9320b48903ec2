use crate::generation::{RateLimitError, ValidationError};
use crate::roadmap_actor::RoadmapStoreError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Everything a [`RoadmapService`](super::RoadmapService) call can fail with.
///
/// Validation and rate-limit errors are recoverable by the user (fix the
/// topic, wait); store and identity errors are passed through unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoadmapError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    #[error(transparent)]
    Store(#[from] RoadmapStoreError),

    #[error(transparent)]
    Identity(#[from] UserError),

    /// The operation needs a signed-in user but the caller is a guest.
    #[error("Please sign in to manage saved roadmaps")]
    SignInRequired,
}
