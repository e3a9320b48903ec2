//! [`ActorEntity`] implementation for [`User`].
//!
//! Users are keyed by the identity provider's id, which travels in the create
//! payload, so registering the same id twice is rejected by the actor.

use super::UserError;
use crate::model::{User, UserCreate, UserId, UserQuery, UserUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn checked_email(email: &str) -> Result<String, UserError> {
    let email = email.trim();
    if email.contains('@') {
        Ok(email.to_string())
    } else {
        Err(UserError::InvalidEmail(email.to_string()))
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = UserQuery;
    type Context = ();
    type Error = UserError;

    fn assigned_id(params: &UserCreate) -> Option<UserId> {
        Some(params.id.clone())
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            email: checked_email(&params.email)?,
        })
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::ByEmail(email) => self.email.eq_ignore_ascii_case(email.trim()),
        }
    }

    /// # Fields Updated
    /// - `email`: must contain `@`
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(email) = update.email {
            self.email = checked_email(&email)?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
