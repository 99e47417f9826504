//! Event catalogue service.
//!
//! Implements the [`EventCatalogue`] driving port: creation (with date
//! parsing, the location-string fallback, and poster storage), ownership
//! filtered listing, and merge-update/delete by identifier.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    CreateEventRequest, EventCatalogue, EventRepository, EventRepositoryError, PosterStore,
    PosterStoreError,
};
use crate::domain::{
    parse_event_date, Error, Event, EventPatch, Location, PosterDescriptor,
};

/// [`EventCatalogue`] implementation backed by an event repository and a
/// poster store.
#[derive(Clone)]
pub struct CatalogueService<E, S> {
    events: Arc<E>,
    posters: Arc<S>,
}

impl<E, S> CatalogueService<E, S> {
    /// Create a new service over the given adapters.
    pub fn new(events: Arc<E>, posters: Arc<S>) -> Self {
        Self { events, posters }
    }
}

fn map_repository_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event repository error: {message}"))
        }
    }
}

fn map_poster_error(error: PosterStoreError) -> Error {
    match error {
        PosterStoreError::RejectedMediaType { .. } => {
            Error::invalid_request("Not an image! Please upload an image.")
        }
        PosterStoreError::Storage { message } => {
            Error::internal(format!("poster storage failed: {message}"))
        }
    }
}

impl<E, S> CatalogueService<E, S>
where
    E: EventRepository,
    S: PosterStore,
{
    async fn store_poster(
        &self,
        request: &CreateEventRequest,
    ) -> Result<Option<PosterDescriptor>, Error> {
        let Some(upload) = &request.poster else {
            return Ok(None);
        };
        let descriptor = self
            .posters
            .store(&upload.original_name, &upload.mimetype, upload.bytes.clone())
            .await
            .map_err(map_poster_error)?;
        Ok(Some(descriptor))
    }
}

#[async_trait]
impl<E, S> EventCatalogue for CatalogueService<E, S>
where
    E: EventRepository,
    S: PosterStore,
{
    async fn create(&self, request: CreateEventRequest) -> Result<Event, Error> {
        let start_date = parse_event_date("startDate", &request.start_date)?;
        let end_date = parse_event_date("endDate", &request.end_date)?;
        let location = Location::parse_or_fallback(&request.location);

        // The poster is written before the event row; a failed insert leaves
        // the file behind (see DESIGN.md).
        let poster = self.store_poster(&request).await?;

        let event = Event {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            domain: request.domain,
            points: request.points,
            poster,
            start_date,
            end_date,
            location,
            organized_by: request.organized_by,
            org_email_login: request.org_email_login,
            created_at: Utc::now(),
            status: request.status.unwrap_or_default(),
        };

        self.events
            .insert(&event)
            .await
            .map_err(map_repository_error)?;
        info!(event_id = %event.id, org = %event.org_email_login, "event created");
        Ok(event)
    }

    async fn list(&self, org_email_login: Option<String>) -> Result<Vec<Event>, Error> {
        self.events
            .list(org_email_login)
            .await
            .map_err(map_repository_error)
    }

    async fn fetch(&self, id: Uuid) -> Result<Event, Error> {
        self.events
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Event not found"))
    }

    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<Event, Error> {
        self.events
            .update(id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Event not found"))
    }

    async fn remove(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self
            .events
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            info!(event_id = %id, "event deleted");
            Ok(())
        } else {
            warn!(event_id = %id, "delete requested for unknown event");
            Err(Error::not_found("Event not found"))
        }
    }
}
