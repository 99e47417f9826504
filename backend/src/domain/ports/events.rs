//! Driving port for event catalogue operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Event, EventPatch, EventStatus};

/// An uploaded poster file accompanying an event creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterUpload {
    pub original_name: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

/// Event creation payload as received from a multipart client.
///
/// Dates arrive as text and the location arrives as a serialized string;
/// parsing (including the documented unparsable-location fallback) happens
/// inside the catalogue service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub domain: String,
    pub points: i32,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub organized_by: String,
    pub org_email_login: String,
    pub status: Option<EventStatus>,
    pub poster: Option<PosterUpload>,
}

/// Use-cases around the event catalogue and its ownership filter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCatalogue: Send + Sync {
    /// Create an event, storing the poster bytes first when supplied.
    async fn create(&self, request: CreateEventRequest) -> Result<Event, Error>;

    /// List events, optionally filtered to one owning organization, ordered
    /// ascending by start date.
    async fn list(&self, org_email_login: Option<String>) -> Result<Vec<Event>, Error>;

    /// Fetch one event. Fails with `NotFound` when absent.
    async fn fetch(&self, id: Uuid) -> Result<Event, Error>;

    /// Merge-update one event. Fails with `NotFound` when absent.
    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<Event, Error>;

    /// Delete one event permanently. Fails with `NotFound` when absent.
    async fn remove(&self, id: Uuid) -> Result<(), Error>;
}
