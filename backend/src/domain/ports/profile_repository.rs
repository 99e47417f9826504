//! Port for student profile persistence.

use async_trait::async_trait;

use crate::domain::{Profile, ProfilePatch};

/// Errors raised by profile repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// Repository connection could not be established.
    #[error("profile repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("profile repository query failed: {message}")]
    Query { message: String },
    /// Insert violated the unique `email_login` constraint.
    #[error("profile already exists for this login email")]
    DuplicateLogin,
}

impl ProfileRepositoryError {
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

/// Port for storing and retrieving student profiles.
///
/// Profiles are keyed by `email_login`. Concurrent writes to the same key
/// resolve last-write-wins; no stronger ordering is promised.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by login email, or `None` when absent.
    async fn find_by_login(
        &self,
        email_login: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Persist a new profile.
    ///
    /// Returns [`ProfileRepositoryError::DuplicateLogin`] when a profile for
    /// the same login email already exists.
    async fn insert(&self, profile: &Profile) -> Result<(), ProfileRepositoryError>;

    /// Merge the supplied fields into the profile with the given login
    /// email.
    ///
    /// Returns the updated record, or `None` when no profile matches. An
    /// empty patch returns the stored record unchanged.
    async fn update(
        &self,
        email_login: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Set the points value to zero on every profile missing one.
    ///
    /// Returns the number of records modified. Idempotent: a second call
    /// finds nothing to fix and returns zero.
    async fn backfill_missing_points(&self) -> Result<u64, ProfileRepositoryError>;
}
