//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! The poster descriptor and the location are flattened into columns; the
//! row conversion reassembles them into domain values.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Coordinates, Event, EventPatch, EventStatus, Location, PosterDescriptor};

use super::models::{EventChangeset, EventRow, NewEventRow};
use super::pool::{DbPool, PoolError};
use super::schema::events;

/// Diesel-backed implementation of the `EventRepository` port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EventRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EventRepositoryError::connection("database connection error")
        }
        _ => EventRepositoryError::query("database error"),
    }
}

fn row_to_event(row: EventRow) -> Event {
    let poster = match (row.poster_filename, row.poster_path, row.poster_mimetype) {
        (Some(filename), Some(path), Some(mimetype)) => Some(PosterDescriptor {
            filename,
            path,
            mimetype,
        }),
        _ => None,
    };
    let status = EventStatus::parse(&row.status).unwrap_or_else(|| {
        warn!(
            value = %row.status,
            event_id = %row.id,
            "unrecognised status value, defaulting to upcoming"
        );
        EventStatus::Upcoming
    });

    Event {
        id: row.id,
        title: row.title,
        description: row.description,
        domain: row.domain,
        points: row.points,
        poster,
        start_date: row.start_date,
        end_date: row.end_date,
        location: Location {
            address: row.location_address,
            coordinates: Coordinates {
                lat: row.location_lat,
                lng: row.location_lng,
            },
            place_id: row.location_place_id,
        },
        organized_by: row.organized_by,
        org_email_login: row.org_email_login,
        created_at: row.created_at,
        status,
    }
}

fn patch_to_changeset(patch: &EventPatch) -> EventChangeset<'_> {
    EventChangeset {
        title: patch.title.as_deref(),
        description: patch.description.as_deref(),
        domain: patch.domain.as_deref(),
        points: patch.points,
        start_date: patch.start_date,
        end_date: patch.end_date,
        location_address: patch.location.as_ref().map(|l| l.address.as_str()),
        location_lat: patch.location.as_ref().map(|l| l.coordinates.lat),
        location_lng: patch.location.as_ref().map(|l| l.coordinates.lng),
        location_place_id: patch.location.as_ref().map(|l| l.place_id.as_str()),
        organized_by: patch.organized_by.as_deref(),
        status: patch.status.map(EventStatus::as_str),
    }
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewEventRow {
            id: event.id,
            title: &event.title,
            description: &event.description,
            domain: &event.domain,
            points: event.points,
            poster_filename: event.poster.as_ref().map(|p| p.filename.as_str()),
            poster_path: event.poster.as_ref().map(|p| p.path.as_str()),
            poster_mimetype: event.poster.as_ref().map(|p| p.mimetype.as_str()),
            start_date: event.start_date,
            end_date: event.end_date,
            location_address: &event.location.address,
            location_lat: event.location.coordinates.lat,
            location_lng: event.location.coordinates.lng,
            location_place_id: &event.location.place_id,
            organized_by: &event.organized_by,
            org_email_login: &event.org_email_login,
            created_at: event.created_at,
            status: event.status.as_str(),
        };

        diesel::insert_into(events::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(
        &self,
        org_email_login: Option<String>,
    ) -> Result<Vec<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = events::table.into_boxed();
        if let Some(owner) = org_email_login {
            query = query.filter(events::org_email_login.eq(owner));
        }

        let rows: Vec<EventRow> = query
            .select(EventRow::as_select())
            .order_by(events::start_date.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_event).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<EventRow> = events::table
            .filter(events::id.eq(id))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(result.map(row_to_event))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &EventPatch,
    ) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        if !patch.is_empty() {
            let updated = diesel::update(events::table)
                .filter(events::id.eq(id))
                .set(patch_to_changeset(patch))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            if updated == 0 {
                return Ok(None);
            }
        }

        let result: Option<EventRow> = events::table
            .filter(events::id.eq(id))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(result.map(row_to_event))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(events::table.filter(events::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
