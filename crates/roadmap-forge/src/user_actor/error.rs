//! Error types for the User actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same identity provider id is already registered.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The email address is not usable.
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Maps a framework failure, unwrapping errors raised by the user hooks.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::AlreadyExists(id) => UserError::AlreadyExists(id),
            other => match other.into_entity_error::<UserError>() {
                Ok(inner) => inner,
                Err(transport) => UserError::ActorCommunicationError(transport.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_errors_come_back_unchanged() {
        let framework = FrameworkError::EntityError(Box::new(UserError::InvalidEmail("x".into())));
        assert_eq!(
            UserError::from_framework(framework),
            UserError::InvalidEmail("x".into())
        );
    }

    #[test]
    fn transport_errors_become_communication_errors() {
        assert_eq!(
            UserError::from_framework(FrameworkError::ActorClosed),
            UserError::ActorCommunicationError("Actor closed".into())
        );
    }
}
