//! Port for event catalogue persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Event, EventPatch};

/// Errors raised by event repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventRepositoryError {
    /// Repository connection could not be established.
    #[error("event repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("event repository query failed: {message}")]
    Query { message: String },
}

impl EventRepositoryError {
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

/// Port for storing and listing catalogue events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event.
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// List events, optionally restricted to one owning organization.
    ///
    /// Results are ordered ascending by start date. An unmatched filter
    /// yields an empty list, not an error.
    async fn list(
        &self,
        org_email_login: Option<String>,
    ) -> Result<Vec<Event>, EventRepositoryError>;

    /// Fetch a single event by identifier, or `None` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventRepositoryError>;

    /// Merge the supplied fields into the event with the given identifier.
    ///
    /// Returns the updated record, or `None` when no event matches. An empty
    /// patch returns the stored record unchanged.
    async fn update(
        &self,
        id: Uuid,
        patch: &EventPatch,
    ) -> Result<Option<Event>, EventRepositoryError>;

    /// Remove the event with the given identifier.
    ///
    /// Returns `true` when a record was deleted, `false` when none matched.
    async fn delete(&self, id: Uuid) -> Result<bool, EventRepositoryError>;
}
