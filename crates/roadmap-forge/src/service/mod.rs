//! # Roadmap Service
//!
//! The application layer. [`RoadmapService`] runs the generation pipeline
//!
//! 1. validate the topic,
//! 2. check the caller's cooldown,
//! 3. expand the template,
//! 4. persist it for signed-in users (guests get it back unsaved),
//!
//! and exposes the owner-scoped store operations behind the dashboard and share
//! links. Validation and rate-limit failures return before anything is
//! generated or stored.
//!
//! The caller's rate-limit state is a plain value: it goes in with each
//! request and comes back advanced only when the request succeeded.

pub mod clock;
pub mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::RoadmapError;

use crate::clients::{RoadmapClient, UserClient};
use crate::generation::{
    validate_topic, RateLimitState, RateLimiter, RoadmapGenerator, StepCounts, DEFAULT_COOLDOWN,
};
use crate::model::{
    Identity, Level, Roadmap, RoadmapCreate, RoadmapId, ShareToken, StoredRoadmap, UserId,
};
use chrono::{DateTime, Utc};
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const DEFAULT_SHARE_TOKEN_LENGTH: usize = 16;

/// Tunables the service is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    pub step_counts: StepCounts,
    pub cooldown: Duration,
    pub share_token_length: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            step_counts: StepCounts::default(),
            cooldown: DEFAULT_COOLDOWN,
            share_token_length: DEFAULT_SHARE_TOKEN_LENGTH,
        }
    }
}

/// What the caller asks to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Persisted for a signed-in user.
    Saved { id: RoadmapId, roadmap: Roadmap },
    /// Generated for a guest; nothing was stored.
    Unsaved { roadmap: Roadmap },
}

impl GenerationOutcome {
    pub fn roadmap(&self) -> &Roadmap {
        match self {
            GenerationOutcome::Saved { roadmap, .. } | GenerationOutcome::Unsaved { roadmap } => {
                roadmap
            }
        }
    }

    pub fn saved_id(&self) -> Option<&RoadmapId> {
        match self {
            GenerationOutcome::Saved { id, .. } => Some(id),
            GenerationOutcome::Unsaved { .. } => None,
        }
    }
}

/// Orchestrates generation and the owner-scoped roadmap operations.
///
/// Cheap to clone: it only holds actor clients and plain settings.
#[derive(Clone)]
pub struct RoadmapService<C: Clock = SystemClock> {
    users: UserClient,
    roadmaps: RoadmapClient,
    generator: RoadmapGenerator,
    limiter: RateLimiter,
    share_token_length: usize,
    clock: C,
}

fn require_user(identity: &Identity) -> Result<&UserId, RoadmapError> {
    identity.user_id().ok_or(RoadmapError::SignInRequired)
}

impl<C: Clock> RoadmapService<C> {
    pub fn new(users: UserClient, roadmaps: RoadmapClient, options: ServiceOptions, clock: C) -> Self {
        Self {
            users,
            roadmaps,
            generator: RoadmapGenerator::new(options.step_counts),
            limiter: RateLimiter::new(options.cooldown),
            share_token_length: options.share_token_length,
            clock,
        }
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    pub fn roadmaps(&self) -> &RoadmapClient {
        &self.roadmaps
    }

    /// Registers the user on first sign-in and returns their identity.
    #[instrument(skip(self))]
    pub async fn sign_in(&self, id: UserId, email: &str) -> Result<Identity, RoadmapError> {
        let user = self.users.ensure_user(id, email).await?;
        info!(user_id = %user.id, "Signed in");
        Ok(Identity::User(user.id))
    }

    /// Validates, rate-limits, generates and (for users) persists a roadmap.
    ///
    /// Returns the outcome together with the caller's next rate-limit state.
    /// On error the state the caller passed in is still current.
    #[instrument(skip(self, rate_state), fields(topic = %request.topic, level = %request.level))]
    pub async fn generate(
        &self,
        identity: &Identity,
        rate_state: RateLimitState,
        request: GenerateRequest,
    ) -> Result<(GenerationOutcome, RateLimitState), RoadmapError> {
        let topic = validate_topic(&request.topic)?;
        let now = self.clock.now();
        self.limiter.check(&rate_state, now)?;

        let roadmap = self.generator.generate(&topic, request.level);
        let outcome = match identity {
            Identity::Guest => {
                info!(steps = roadmap.steps.len(), "Generated guest roadmap");
                GenerationOutcome::Unsaved { roadmap }
            }
            Identity::User(owner) => {
                let id = self.persist(owner, &roadmap, now).await?;
                info!(%id, steps = roadmap.steps.len(), "Generated and saved roadmap");
                GenerationOutcome::Saved { id, roadmap }
            }
        };

        Ok((outcome, rate_state.record(now)))
    }

    async fn persist(
        &self,
        owner: &UserId,
        roadmap: &Roadmap,
        now: DateTime<Utc>,
    ) -> Result<RoadmapId, RoadmapError> {
        let id = self
            .roadmaps
            .create_roadmap(RoadmapCreate {
                owner: owner.clone(),
                topic: roadmap.topic.clone(),
                level: roadmap.level,
                created_at: now,
            })
            .await?;

        if let Err(e) = self.roadmaps.insert_steps(id.clone(), roadmap.steps.clone()).await {
            // Don't leave a step-less roadmap on the dashboard
            warn!(%id, error = %e, "Inserting steps failed, removing roadmap");
            if let Err(cleanup) = self.roadmaps.delete(id.clone()).await {
                warn!(%id, error = %cleanup, "Removing roadmap failed");
            }
            return Err(e.into());
        }
        Ok(id)
    }

    /// One of the caller's saved roadmaps.
    #[instrument(skip(self))]
    pub async fn roadmap(&self, identity: &Identity, id: RoadmapId) -> Result<StoredRoadmap, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self.roadmaps.get_owned(id, owner).await?)
    }

    /// Public, read-only view behind a share link. No identity needed.
    #[instrument(skip(self))]
    pub async fn shared_roadmap(&self, token: &ShareToken) -> Result<Roadmap, RoadmapError> {
        let stored = self.roadmaps.get_shared(token).await?;
        Ok(stored.to_roadmap())
    }

    /// The caller's saved roadmaps, newest first.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, identity: &Identity) -> Result<Vec<StoredRoadmap>, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self.roadmaps.list_for_owner(owner).await?)
    }

    #[instrument(skip(self))]
    pub async fn set_favorite(
        &self,
        identity: &Identity,
        id: RoadmapId,
        is_favorite: bool,
    ) -> Result<StoredRoadmap, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self.roadmaps.set_favorite(id, owner, is_favorite).await?)
    }

    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, identity: &Identity, id: RoadmapId) -> Result<bool, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self.roadmaps.toggle_favorite(id, owner).await?)
    }

    /// Shares a roadmap and returns the token for its public link.
    #[instrument(skip(self))]
    pub async fn share(&self, identity: &Identity, id: RoadmapId) -> Result<ShareToken, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self
            .roadmaps
            .share(id, owner, self.share_token_length)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn unshare(&self, identity: &Identity, id: RoadmapId) -> Result<bool, RoadmapError> {
        let owner = require_user(identity)?;
        Ok(self.roadmaps.unshare(id, owner).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, identity: &Identity, id: RoadmapId) -> Result<(), RoadmapError> {
        let owner = require_user(identity)?;
        self.roadmaps.delete_owned(id.clone(), owner).await?;
        info!(%id, "Roadmap deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::ValidationError;
    use crate::model::User;
    use crate::roadmap_actor::{RoadmapActionResult, RoadmapStoreError};
    use chrono::TimeDelta;
    use resource_actor::mock::MockClient;
    use resource_actor::FrameworkError;

    struct Harness {
        users: MockClient<User>,
        roadmaps: MockClient<StoredRoadmap>,
        clock: ManualClock,
        service: RoadmapService<ManualClock>,
    }

    fn harness() -> Harness {
        let users = MockClient::<User>::new();
        let roadmaps = MockClient::<StoredRoadmap>::new();
        let clock = ManualClock::new(Utc::now());
        let service = RoadmapService::new(
            UserClient::new(users.client()),
            RoadmapClient::new(roadmaps.client()),
            ServiceOptions::default(),
            clock.clone(),
        );
        Harness {
            users,
            roadmaps,
            clock,
            service,
        }
    }

    fn request(topic: &str) -> GenerateRequest {
        GenerateRequest {
            topic: topic.to_string(),
            level: Level::Beginner,
        }
    }

    #[tokio::test]
    async fn invalid_topic_never_reaches_the_store() {
        let h = harness();
        let err = h
            .service
            .generate(&Identity::User(UserId::new("u-1")), RateLimitState::default(), request("ab"))
            .await
            .unwrap_err();
        assert_eq!(err, RoadmapError::Validation(ValidationError::TooShort));
        h.roadmaps.verify();
    }

    #[tokio::test]
    async fn validation_is_checked_before_the_cooldown() {
        let h = harness();
        let state = RateLimitState::default().record(h.clock.now());
        let err = h
            .service
            .generate(&Identity::Guest, state, request("abc123"))
            .await
            .unwrap_err();
        assert_eq!(err, RoadmapError::Validation(ValidationError::InvalidCharacters));
    }

    #[tokio::test]
    async fn cooldown_blocks_and_keeps_state() {
        let h = harness();
        let (_, state) = h
            .service
            .generate(&Identity::Guest, RateLimitState::default(), request("Python"))
            .await
            .unwrap();
        assert_eq!(state.last_generation, Some(h.clock.now()));

        h.clock.advance(TimeDelta::seconds(4));
        match h.service.generate(&Identity::Guest, state, request("Python")).await {
            Err(RoadmapError::RateLimited(e)) => assert_eq!(e.seconds, 6),
            other => panic!("expected rate limit, got {other:?}"),
        }

        h.clock.advance(TimeDelta::seconds(6));
        assert!(h
            .service
            .generate(&Identity::Guest, state, request("Python"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn guests_get_unsaved_roadmaps() {
        let h = harness();
        let (outcome, _) = h
            .service
            .generate(&Identity::Guest, RateLimitState::default(), request("JavaScript"))
            .await
            .unwrap();
        assert!(outcome.saved_id().is_none());
        assert_eq!(outcome.roadmap().steps.len(), 10);
        h.roadmaps.verify();
    }

    #[tokio::test]
    async fn failed_step_insert_removes_the_roadmap() {
        let mut h = harness();
        h.roadmaps.expect_create().return_ok(RoadmapId(7));
        h.roadmaps
            .expect_action(RoadmapId(7))
            .return_err(FrameworkError::EntityError(Box::new(
                RoadmapStoreError::StepWithoutResources(1),
            )));
        h.roadmaps.expect_delete(RoadmapId(7)).return_ok(());

        let state = RateLimitState::default();
        let err = h
            .service
            .generate(&Identity::User(UserId::new("u-1")), state, request("Python"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RoadmapError::Store(RoadmapStoreError::StepWithoutResources(1))
        );
        h.roadmaps.verify();
    }

    #[tokio::test]
    async fn signed_in_users_get_saved_roadmaps() {
        let mut h = harness();
        h.roadmaps.expect_create().return_ok(RoadmapId(1));
        h.roadmaps
            .expect_action(RoadmapId(1))
            .return_ok(RoadmapActionResult::InsertSteps(15));

        let (outcome, _) = h
            .service
            .generate(
                &Identity::User(UserId::new("u-1")),
                RateLimitState::default(),
                GenerateRequest {
                    topic: "Quantum Macrame".into(),
                    level: Level::Advanced,
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.saved_id(), Some(&RoadmapId(1)));
        h.roadmaps.verify();
        h.users.verify();
    }

    #[tokio::test]
    async fn clock_set_backwards_waits_the_full_cooldown() {
        let h = harness();
        let (_, state) = h
            .service
            .generate(&Identity::Guest, RateLimitState::default(), request("Python"))
            .await
            .unwrap();

        h.clock.set(h.clock.now() - TimeDelta::hours(1));
        match h.service.generate(&Identity::Guest, state, request("Python")).await {
            Err(RoadmapError::RateLimited(e)) => assert_eq!(e.seconds, 10),
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn owners_can_delete_their_roadmaps() {
        let mut h = harness();
        let owner = UserId::new("u-1");
        let stored = StoredRoadmap::new(
            RoadmapId(3),
            RoadmapCreate {
                owner: owner.clone(),
                topic: "Python".into(),
                level: Level::Beginner,
                created_at: h.clock.now(),
            },
        );
        h.roadmaps.expect_get(RoadmapId(3)).return_ok(Some(stored));
        h.roadmaps.expect_delete(RoadmapId(3)).return_ok(());

        h.service
            .delete(&Identity::User(owner), RoadmapId(3))
            .await
            .unwrap();
        h.roadmaps.verify();
    }

    #[tokio::test]
    async fn guests_cannot_use_the_dashboard() {
        let h = harness();
        assert_eq!(
            h.service.dashboard(&Identity::Guest).await,
            Err(RoadmapError::SignInRequired)
        );
        assert_eq!(
            h.service.share(&Identity::Guest, RoadmapId(1)).await,
            Err(RoadmapError::SignInRequired)
        );
    }
}
