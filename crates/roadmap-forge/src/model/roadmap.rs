//! Generated and stored roadmaps.
//!
//! [`Roadmap`] is the transient value the generator produces. [`StoredRoadmap`]
//! is what the roadmap actor keeps once a signed-in user saves one: the same
//! steps plus owner, favorite flag, share token and creation time.

use crate::model::{Level, UserId};
use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for stored roadmaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadmapId(pub u32);

impl From<u32> for RoadmapId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RoadmapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "roadmap_{}", self.0)
    }
}

/// Where a step's resource link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "google_search")]
    GoogleSearch,
    #[serde(rename = "stackoverflow")]
    StackOverflow,
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "reddit")]
    Reddit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub label: String,
}

/// One unit of a learning path. `step_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub topic: String,
    pub level: Level,
    pub steps: Vec<RoadmapStep>,
}

/// Opaque token that grants read-only access to a shared roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Random alphanumeric token of `len` characters.
    pub fn generate(len: usize) -> Self {
        let token = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShareToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roadmap saved by a signed-in user.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_actor::ResourceActor); see
/// [`impl ActorEntity for StoredRoadmap`](#impl-ActorEntity-for-StoredRoadmap) for:
/// - Creation parameters ([`RoadmapCreate`])
/// - Update parameters ([`RoadmapUpdate`])
/// - Custom actions ([`RoadmapAction`](crate::roadmap_actor::RoadmapAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRoadmap {
    pub id: RoadmapId,
    pub owner: UserId,
    pub topic: String,
    pub level: Level,
    pub is_favorite: bool,
    pub share_token: Option<ShareToken>,
    pub created_at: DateTime<Utc>,
    pub steps: Vec<RoadmapStep>,
}

impl StoredRoadmap {
    pub fn new(id: RoadmapId, params: RoadmapCreate) -> Self {
        Self {
            id,
            owner: params.owner,
            topic: params.topic,
            level: params.level,
            is_favorite: false,
            share_token: None,
            created_at: params.created_at,
            steps: Vec::new(),
        }
    }

    pub fn is_shared(&self) -> bool {
        self.share_token.is_some()
    }

    /// The owner-free view handed out through share links.
    pub fn to_roadmap(&self) -> Roadmap {
        Roadmap {
            topic: self.topic.clone(),
            level: self.level,
            steps: self.steps.clone(),
        }
    }
}

/// Payload for saving a new (still step-less) roadmap.
#[derive(Debug, Clone)]
pub struct RoadmapCreate {
    pub owner: UserId,
    pub topic: String,
    pub level: Level,
    pub created_at: DateTime<Utc>,
}

/// Field updates. `share_token: Some(None)` clears the token.
#[derive(Debug, Clone, Default)]
pub struct RoadmapUpdate {
    pub is_favorite: Option<bool>,
    pub share_token: Option<Option<ShareToken>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapQuery {
    OwnedBy(UserId),
    SharedWith(ShareToken),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_alphanumeric_with_requested_length() {
        let token = ShareToken::generate(24);
        assert_eq!(token.as_str().len(), 24);
        assert!(token.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, ShareToken::generate(24));
    }

    #[test]
    fn resource_serializes_with_type_field() {
        let resource = Resource {
            kind: ResourceKind::StackOverflow,
            url: "https://stackoverflow.com/search?q=Git".into(),
            label: "Stack Overflow Q&A".into(),
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "stackoverflow");
        assert_eq!(json["label"], "Stack Overflow Q&A");
    }
}
