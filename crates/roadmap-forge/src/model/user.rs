use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier handed out by the identity provider.
///
/// Users are keyed by the provider's id, not by a local counter; the `From<u32>`
/// conversion only exists for the actor's fallback numbering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(format!("user_{}", id))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed-in person known to the system.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_actor::ResourceActor); see
/// [`impl ActorEntity for User`](#impl-ActorEntity-for-User).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

/// Payload for registering a user after sign-in or sign-up.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub id: UserId,
    pub email: String,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    /// Case-insensitive email match.
    ByEmail(String),
}

/// Who is making a request.
///
/// Guests may generate roadmaps but nothing they generate is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(UserId),
    Guest,
}

impl Identity {
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Identity::User(id) => Some(id),
            Identity::Guest => None,
        }
    }
}
