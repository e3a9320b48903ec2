use chrono::Utc;
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};
use roadmap_forge::clients::UserClient;
use roadmap_forge::generation::{generate, validate_topic};
use roadmap_forge::model::{Level, RoadmapCreate, ShareToken, StoredRoadmap, User, UserId};
use roadmap_forge::roadmap_actor::RoadmapStoreError;

fn ada() -> User {
    User {
        id: UserId::new("u-1"),
        email: "ada@example.com".into(),
    }
}

fn create(owner: &str, topic: &str) -> RoadmapCreate {
    RoadmapCreate {
        owner: UserId::new(owner),
        topic: topic.into(),
        level: Level::Beginner,
        created_at: Utc::now(),
    }
}

/// Real roadmap actor with a mocked user registry.
/// Exercises the owner check in `on_create` and the step/share actions.
#[tokio::test]
async fn test_roadmap_actor_with_mocked_users() {
    let mut users = MockClient::<User>::new();
    // on_create looks the owner up once per created roadmap
    users.expect_get(UserId::new("u-1")).return_ok(Some(ada()));

    let (actor, roadmaps) = roadmap_forge::roadmap_actor::new(8);
    let handle = tokio::spawn(actor.run(UserClient::new(users.client())));

    let id = roadmaps.create_roadmap(create("u-1", "Python")).await.unwrap();

    let steps = generate(&validate_topic("Python").unwrap(), Level::Beginner).steps;
    assert_eq!(roadmaps.insert_steps(id.clone(), steps).await.unwrap(), 10);

    // A second batch must continue at 11
    let again = generate(&validate_topic("Python").unwrap(), Level::Beginner).steps;
    assert_eq!(
        roadmaps.insert_steps(id.clone(), again).await,
        Err(RoadmapStoreError::StepOutOfSequence {
            expected: 11,
            found: 1
        })
    );

    let owner = UserId::new("u-1");
    assert!(roadmaps.toggle_favorite(id.clone(), &owner).await.unwrap());
    assert!(!roadmaps.toggle_favorite(id.clone(), &owner).await.unwrap());

    let token = roadmaps.share(id.clone(), &owner, 16).await.unwrap();
    assert_eq!(token.as_str().len(), 16);
    assert_eq!(roadmaps.share(id.clone(), &owner, 16).await.unwrap(), token);

    let shared = roadmaps.get_shared(&token).await.unwrap();
    assert_eq!(shared.steps.len(), 10);

    assert!(roadmaps.unshare(id.clone(), &owner).await.unwrap());
    assert!(!roadmaps.unshare(id.clone(), &owner).await.unwrap());
    assert_eq!(
        roadmaps.get_shared(&token).await,
        Err(RoadmapStoreError::NotShared)
    );

    users.verify();
    drop(roadmaps);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_owner_is_rejected() {
    let mut users = MockClient::<User>::new();
    users.expect_get(UserId::new("ghost")).return_ok(None);

    let (actor, roadmaps) = roadmap_forge::roadmap_actor::new(8);
    tokio::spawn(actor.run(UserClient::new(users.client())));

    assert_eq!(
        roadmaps.create_roadmap(create("ghost", "Rust")).await,
        Err(RoadmapStoreError::UnknownOwner("ghost".into()))
    );
    assert!(roadmaps
        .list_for_owner(&UserId::new("ghost"))
        .await
        .unwrap()
        .is_empty());
    users.verify();
}

#[tokio::test]
async fn test_user_registry_failure_is_reported() {
    let mut users = MockClient::<User>::new();
    users
        .expect_get(UserId::new("u-1"))
        .return_err(FrameworkError::ActorClosed);

    let (actor, roadmaps) = roadmap_forge::roadmap_actor::new(8);
    tokio::spawn(actor.run(UserClient::new(users.client())));

    assert!(matches!(
        roadmaps.create_roadmap(create("u-1", "Rust")).await,
        Err(RoadmapStoreError::OwnerLookupFailed(_))
    ));
    users.verify();
}

#[tokio::test]
async fn test_empty_topic_skips_owner_lookup() {
    // No expectations: the topic check fails before the user actor is asked
    let users = MockClient::<User>::new();

    let (actor, roadmaps) = roadmap_forge::roadmap_actor::new(8);
    tokio::spawn(actor.run(UserClient::new(users.client())));

    assert_eq!(
        roadmaps.create_roadmap(create("u-1", "   ")).await,
        Err(RoadmapStoreError::EmptyTopic)
    );
    users.verify();
}

#[tokio::test]
async fn test_owner_scoping() {
    let mut users = MockClient::<User>::new();
    users.expect_get(UserId::new("u-1")).return_ok(Some(ada()));

    let (actor, roadmaps) = roadmap_forge::roadmap_actor::new(8);
    tokio::spawn(actor.run(UserClient::new(users.client())));

    let id = roadmaps.create_roadmap(create("u-1", "Rust")).await.unwrap();
    let intruder = UserId::new("u-2");

    assert!(matches!(
        roadmaps.get_owned(id.clone(), &intruder).await,
        Err(RoadmapStoreError::NotFound(_))
    ));
    assert!(roadmaps.share(id.clone(), &intruder, 16).await.is_err());
    assert!(roadmaps.delete_owned(id.clone(), &intruder).await.is_err());

    // Still there for its owner
    let stored: StoredRoadmap = roadmaps.get_owned(id.clone(), &UserId::new("u-1")).await.unwrap();
    assert!(!stored.is_shared());

    roadmaps.delete_owned(id.clone(), &UserId::new("u-1")).await.unwrap();
    assert!(roadmaps.get(id).await.unwrap().is_none());
    assert_eq!(
        roadmaps.get_shared(&ShareToken::new("anything")).await,
        Err(RoadmapStoreError::NotShared)
    );
    users.verify();
}
