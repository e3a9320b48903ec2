//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain-specific methods.
use crate::model::{User, UserCreate, UserId, UserQuery, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from_framework(e)
    }
}

impl UserClient {
    /// Registers the user on first sign-in; later calls return the stored record.
    ///
    /// The stored email is left alone when the user already exists.
    #[instrument(skip(self))]
    pub async fn ensure_user(&self, id: UserId, email: &str) -> Result<User, UserError> {
        if let Some(user) = self.get(id.clone()).await? {
            debug!("User already registered");
            return Ok(user);
        }

        let params = UserCreate {
            id: id.clone(),
            email: email.to_string(),
        };
        match self.inner.create(params).await.map_err(Self::map_error) {
            // Lost a race with a concurrent sign-in for the same id
            Ok(_) | Err(UserError::AlreadyExists(_)) => self
                .get(id.clone())
                .await?
                .ok_or_else(|| UserError::NotFound(id.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Emails are not unique across identity-provider accounts; when several
    /// users share one, the lowest id wins.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let found = self.list(UserQuery::ByEmail(email.to_string())).await?;
        Ok(found.into_iter().min_by(|a, b| a.id.cmp(&b.id)))
    }

    #[instrument(skip(self))]
    pub async fn update_email(&self, id: UserId, email: &str) -> Result<User, UserError> {
        debug!("Sending request");
        let update = UserUpdate {
            email: Some(email.to_string()),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    fn ada() -> User {
        User {
            id: UserId::new("u-1"),
            email: "ada@example.com".into(),
        }
    }

    #[tokio::test]
    async fn ensure_user_returns_existing_record() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId::new("u-1")).return_ok(Some(ada()));

        let client = UserClient::new(mock.client());
        let user = client
            .ensure_user(UserId::new("u-1"), "other@example.com")
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
        mock.verify();
    }

    #[tokio::test]
    async fn ensure_user_creates_missing_record() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId::new("u-1")).return_ok(None);
        mock.expect_create().return_ok(UserId::new("u-1"));
        mock.expect_get(UserId::new("u-1")).return_ok(Some(ada()));

        let client = UserClient::new(mock.client());
        let user = client
            .ensure_user(UserId::new("u-1"), "ada@example.com")
            .await
            .unwrap();
        assert_eq!(user, ada());
        mock.verify();
    }

    #[tokio::test]
    async fn shared_email_resolves_to_lowest_id() {
        let mut mock = MockClient::<User>::new();
        let later = User {
            id: UserId::new("u-2"),
            email: "ada@example.com".into(),
        };
        mock.expect_list().return_ok(vec![later.clone(), ada()]);
        mock.expect_list().return_ok(vec![ada(), later]);

        let client = UserClient::new(mock.client());
        for _ in 0..2 {
            let user = client.find_by_email("ada@example.com").await.unwrap();
            assert_eq!(user, Some(ada()));
        }
        mock.verify();
    }

    #[tokio::test]
    async fn hook_errors_surface_as_user_errors() {
        let mut mock = MockClient::<User>::new();
        mock.expect_update(UserId::new("u-1"))
            .return_err(FrameworkError::EntityError(Box::new(UserError::InvalidEmail(
                "nope".into(),
            ))));

        let client = UserClient::new(mock.client());
        assert_eq!(
            client.update_email(UserId::new("u-1"), "nope").await,
            Err(UserError::InvalidEmail("nope".into()))
        );
        mock.verify();
    }
}
