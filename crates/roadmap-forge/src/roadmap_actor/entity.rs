//! [`ActorEntity`] implementation for [`StoredRoadmap`].
//!
//! The roadmap actor depends on the user registry: its context is a
//! [`UserClient`], used by `on_create` to make sure the owner exists.

use super::{RoadmapAction, RoadmapActionResult, RoadmapStoreError};
use crate::clients::UserClient;
use crate::model::{
    RoadmapCreate, RoadmapId, RoadmapQuery, RoadmapStep, RoadmapUpdate, StoredRoadmap,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::debug;

impl StoredRoadmap {
    fn check_steps(&self, steps: &[RoadmapStep]) -> Result<(), RoadmapStoreError> {
        let mut expected = self.steps.len() as u32 + 1;
        for step in steps {
            if step.step_number != expected {
                return Err(RoadmapStoreError::StepOutOfSequence {
                    expected,
                    found: step.step_number,
                });
            }
            if step.resources.is_empty() {
                return Err(RoadmapStoreError::StepWithoutResources(step.step_number));
            }
            expected += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for StoredRoadmap {
    type Id = RoadmapId;
    type Create = RoadmapCreate;
    type Update = RoadmapUpdate;
    type Action = RoadmapAction;
    type ActionResult = RoadmapActionResult;
    type Query = RoadmapQuery;
    type Context = UserClient;
    type Error = RoadmapStoreError;

    fn from_create_params(id: RoadmapId, params: RoadmapCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    fn matches(&self, query: &RoadmapQuery) -> bool {
        match query {
            RoadmapQuery::OwnedBy(owner) => &self.owner == owner,
            RoadmapQuery::SharedWith(token) => self.share_token.as_ref() == Some(token),
        }
    }

    /// Rejects empty topics and owners the user registry doesn't know.
    async fn on_create(&mut self, users: &UserClient) -> Result<(), Self::Error> {
        if self.topic.trim().is_empty() {
            return Err(RoadmapStoreError::EmptyTopic);
        }
        debug!(owner = %self.owner, "Checking owner");
        match users.get(self.owner.clone()).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(RoadmapStoreError::UnknownOwner(self.owner.to_string())),
            Err(e) => Err(RoadmapStoreError::OwnerLookupFailed(e.to_string())),
        }
    }

    /// # Fields Updated
    /// - `is_favorite`
    /// - `share_token`: `Some(None)` clears it
    async fn on_update(
        &mut self,
        update: RoadmapUpdate,
        _ctx: &UserClient,
    ) -> Result<(), Self::Error> {
        if let Some(is_favorite) = update.is_favorite {
            self.is_favorite = is_favorite;
        }
        if let Some(share_token) = update.share_token {
            self.share_token = share_token;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RoadmapAction,
        _ctx: &UserClient,
    ) -> Result<RoadmapActionResult, Self::Error> {
        match action {
            RoadmapAction::InsertSteps(steps) => {
                self.check_steps(&steps)?;
                let inserted = steps.len();
                self.steps.extend(steps);
                Ok(RoadmapActionResult::InsertSteps(inserted))
            }
            RoadmapAction::ToggleFavorite => {
                self.is_favorite = !self.is_favorite;
                Ok(RoadmapActionResult::ToggleFavorite(self.is_favorite))
            }
            RoadmapAction::Share(token) => {
                let token = self.share_token.get_or_insert(token).clone();
                Ok(RoadmapActionResult::Share(token))
            }
            RoadmapAction::Unshare => Ok(RoadmapActionResult::Unshare(
                self.share_token.take().is_some(),
            )),
        }
    }
}
