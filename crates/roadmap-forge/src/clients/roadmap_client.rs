//! # Roadmap Client
//!
//! High-level API over the roadmap actor. Every per-roadmap operation takes the
//! caller's [`UserId`] and treats another user's roadmap as missing, so owner
//! scoping lives here rather than in the actor.
use crate::model::{
    RoadmapCreate, RoadmapId, RoadmapQuery, RoadmapStep, RoadmapUpdate, ShareToken, StoredRoadmap,
    UserId,
};
use crate::roadmap_actor::{RoadmapAction, RoadmapActionResult, RoadmapStoreError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the roadmap actor.
#[derive(Clone)]
pub struct RoadmapClient {
    inner: ResourceClient<StoredRoadmap>,
}

impl RoadmapClient {
    pub fn new(inner: ResourceClient<StoredRoadmap>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<StoredRoadmap> for RoadmapClient {
    type Error = RoadmapStoreError;

    fn inner(&self) -> &ResourceClient<StoredRoadmap> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RoadmapStoreError::from_framework(e)
    }
}

// The actor answers an action with the result variant matching the request.
fn unexpected(result: RoadmapActionResult) -> RoadmapStoreError {
    RoadmapStoreError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl RoadmapClient {
    /// Saves a new roadmap without steps. The owner must be a registered user.
    #[instrument(skip(self, params), fields(owner = %params.owner, topic = %params.topic))]
    pub async fn create_roadmap(&self, params: RoadmapCreate) -> Result<RoadmapId, RoadmapStoreError> {
        debug!(?params, "create_roadmap called");
        info!("Sending create_roadmap to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Appends a batch of steps; returns how many were stored.
    #[instrument(skip(self, steps), fields(count = steps.len()))]
    pub async fn insert_steps(
        &self,
        id: RoadmapId,
        steps: Vec<RoadmapStep>,
    ) -> Result<usize, RoadmapStoreError> {
        match self.action(id, RoadmapAction::InsertSteps(steps)).await? {
            RoadmapActionResult::InsertSteps(inserted) => Ok(inserted),
            other => Err(unexpected(other)),
        }
    }

    /// The roadmap, if it exists and belongs to `owner`.
    #[instrument(skip(self))]
    pub async fn get_owned(
        &self,
        id: RoadmapId,
        owner: &UserId,
    ) -> Result<StoredRoadmap, RoadmapStoreError> {
        match self.get(id.clone()).await? {
            Some(roadmap) if &roadmap.owner == owner => Ok(roadmap),
            _ => Err(RoadmapStoreError::NotFound(id.to_string())),
        }
    }

    /// Public read through a share link.
    #[instrument(skip(self))]
    pub async fn get_shared(&self, token: &ShareToken) -> Result<StoredRoadmap, RoadmapStoreError> {
        self.list(RoadmapQuery::SharedWith(token.clone()))
            .await?
            .into_iter()
            .next()
            .ok_or(RoadmapStoreError::NotShared)
    }

    /// Dashboard listing, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<StoredRoadmap>, RoadmapStoreError> {
        let mut roadmaps = self.list(RoadmapQuery::OwnedBy(owner.clone())).await?;
        roadmaps.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(roadmaps)
    }

    #[instrument(skip(self))]
    pub async fn set_favorite(
        &self,
        id: RoadmapId,
        owner: &UserId,
        is_favorite: bool,
    ) -> Result<StoredRoadmap, RoadmapStoreError> {
        self.get_owned(id.clone(), owner).await?;
        let update = RoadmapUpdate {
            is_favorite: Some(is_favorite),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips the favorite flag and returns its new value.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        id: RoadmapId,
        owner: &UserId,
    ) -> Result<bool, RoadmapStoreError> {
        self.get_owned(id.clone(), owner).await?;
        match self.action(id, RoadmapAction::ToggleFavorite).await? {
            RoadmapActionResult::ToggleFavorite(is_favorite) => Ok(is_favorite),
            other => Err(unexpected(other)),
        }
    }

    /// Shares the roadmap and returns its token. A roadmap that is already
    /// shared keeps its existing token.
    #[instrument(skip(self))]
    pub async fn share(
        &self,
        id: RoadmapId,
        owner: &UserId,
        token_length: usize,
    ) -> Result<ShareToken, RoadmapStoreError> {
        let roadmap = self.get_owned(id.clone(), owner).await?;
        if let Some(token) = roadmap.share_token {
            return Ok(token);
        }
        let candidate = ShareToken::generate(token_length);
        match self.action(id, RoadmapAction::Share(candidate)).await? {
            RoadmapActionResult::Share(token) => {
                info!("Roadmap shared");
                Ok(token)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Revokes the share link; returns whether one existed.
    #[instrument(skip(self))]
    pub async fn unshare(&self, id: RoadmapId, owner: &UserId) -> Result<bool, RoadmapStoreError> {
        self.get_owned(id.clone(), owner).await?;
        match self.action(id, RoadmapAction::Unshare).await? {
            RoadmapActionResult::Unshare(was_shared) => Ok(was_shared),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_owned(&self, id: RoadmapId, owner: &UserId) -> Result<(), RoadmapStoreError> {
        self.get_owned(id.clone(), owner).await?;
        self.delete(id).await
    }

    async fn action(
        &self,
        id: RoadmapId,
        action: RoadmapAction,
    ) -> Result<RoadmapActionResult, RoadmapStoreError> {
        debug!(%id, ?action, "Sending action");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use chrono::{TimeZone, Utc};
    use resource_actor::mock::{create_mock_client, expect_action, expect_list, MockClient};

    fn stored(id: u32, owner: &str, day: u32) -> StoredRoadmap {
        StoredRoadmap::new(
            RoadmapId(id),
            RoadmapCreate {
                owner: UserId::new(owner),
                topic: "Rust".into(),
                level: Level::Beginner,
                created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn other_owners_roadmaps_read_as_missing() {
        let mut mock = MockClient::<StoredRoadmap>::new();
        mock.expect_get(RoadmapId(1))
            .return_ok(Some(stored(1, "u-2", 1)));

        let client = RoadmapClient::new(mock.client());
        assert_eq!(
            client.get_owned(RoadmapId(1), &UserId::new("u-1")).await,
            Err(RoadmapStoreError::NotFound("roadmap_1".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn dashboard_lists_newest_first() {
        let mut mock = MockClient::<StoredRoadmap>::new();
        mock.expect_list().return_ok(vec![
            stored(1, "u-1", 1),
            stored(3, "u-1", 3),
            stored(2, "u-1", 2),
        ]);

        let client = RoadmapClient::new(mock.client());
        let ids: Vec<u32> = client
            .list_for_owner(&UserId::new("u-1"))
            .await
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
        mock.verify();
    }

    #[tokio::test]
    async fn share_keeps_an_existing_token() {
        let mut shared = stored(1, "u-1", 1);
        shared.share_token = Some(ShareToken::new("existing"));

        let mut mock = MockClient::<StoredRoadmap>::new();
        mock.expect_get(RoadmapId(1)).return_ok(Some(shared));

        let client = RoadmapClient::new(mock.client());
        let token = client
            .share(RoadmapId(1), &UserId::new("u-1"), 16)
            .await
            .unwrap();
        assert_eq!(token, ShareToken::new("existing"));
        // No action was sent
        mock.verify();
    }

    #[tokio::test]
    async fn share_sends_a_fresh_token() {
        let (generic, mut receiver) = create_mock_client::<StoredRoadmap>(4);
        let client = RoadmapClient::new(generic);

        let task = tokio::spawn(async move {
            client.share(RoadmapId(1), &UserId::new("u-1"), 12).await
        });

        let (_, responder) = resource_actor::mock::expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        responder.send(Ok(Some(stored(1, "u-1", 1)))).unwrap();

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, RoadmapId(1));
        let token = match action {
            RoadmapAction::Share(token) => token,
            other => panic!("expected Share, got {other:?}"),
        };
        assert_eq!(token.as_str().len(), 12);
        responder
            .send(Ok(RoadmapActionResult::Share(token.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), token);
    }

    #[tokio::test]
    async fn shared_lookup_queries_by_token() {
        let (generic, mut receiver) = create_mock_client::<StoredRoadmap>(4);
        let client = RoadmapClient::new(generic);

        let task = tokio::spawn(async move { client.get_shared(&ShareToken::new("abc")).await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(query, RoadmapQuery::SharedWith(ShareToken::new("abc")));
        let mut shared = stored(5, "u-9", 4);
        shared.share_token = Some(ShareToken::new("abc"));
        responder.send(Ok(vec![shared])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().id, RoadmapId(5));
    }

    #[tokio::test]
    async fn unknown_share_token_is_not_shared() {
        let mut mock = MockClient::<StoredRoadmap>::new();
        mock.expect_list().return_ok(vec![]);

        let client = RoadmapClient::new(mock.client());
        assert_eq!(
            client.get_shared(&ShareToken::new("missing")).await,
            Err(RoadmapStoreError::NotShared)
        );
    }
}
