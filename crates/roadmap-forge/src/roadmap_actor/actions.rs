//! Custom actions for the roadmap actor.
//!
//! Handled by [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action)
//! on [`StoredRoadmap`](crate::model::StoredRoadmap). A failing action leaves
//! the stored roadmap untouched.

use crate::model::{RoadmapStep, ShareToken};

#[derive(Debug, Clone)]
pub enum RoadmapAction {
    /// Appends steps. Their numbers must continue the existing sequence
    /// (the first batch starts at 1) and each step needs at least one resource.
    InsertSteps(Vec<RoadmapStep>),
    /// Flips `is_favorite`.
    ToggleFavorite,
    /// Publishes the roadmap under the given token. Already shared roadmaps
    /// keep their current token.
    Share(ShareToken),
    /// Revokes the share token, if any.
    Unshare,
}

/// Results from RoadmapActions - variants match 1:1 with RoadmapAction
#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapActionResult {
    /// Number of steps inserted.
    InsertSteps(usize),
    /// The new favorite flag.
    ToggleFavorite(bool),
    /// The token the roadmap is shared under.
    Share(ShareToken),
    /// Whether a token was revoked.
    Unshare(bool),
}
