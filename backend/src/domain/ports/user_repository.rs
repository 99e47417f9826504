//! Port for user (login identity) persistence.

use async_trait::async_trait;

use crate::domain::{User, UserFieldUpdate};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// Insert violated the unique email constraint.
    #[error("user email already registered")]
    DuplicateEmail,
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for storing and retrieving user login identities.
///
/// Users are keyed by their unique email. Writes are durable and immediately
/// visible to subsequent reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by email, or `None` when no such user exists.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Persist a new user.
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when the email is
    /// already registered.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Apply a partial update to the user with the given email.
    ///
    /// Returns the updated record, or `None` when no user matches. An empty
    /// update returns the stored record unchanged.
    async fn update_fields(
        &self,
        email: &str,
        update: &UserFieldUpdate,
    ) -> Result<Option<User>, UserRepositoryError>;
}
