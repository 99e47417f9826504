//! Event catalogue handlers.
//!
//! Creation arrives as `multipart/form-data` because the poster rides along
//! with the fields; everything else is plain JSON.
//!
//! ```text
//! POST /api/pointmate/events/create (multipart)
//! GET /api/pointmate/events?org_email=cse@org.edu
//! GET /api/pointmate/events/{id}
//! PUT /api/pointmate/events/{id}
//! DELETE /api/pointmate/events/{id}
//! ```

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::ports::{CreateEventRequest, PosterUpload};
use crate::domain::{Error, Event, EventPatch, EventStatus};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Multipart form for `POST /api/pointmate/events/create`.
///
/// Field names match the browser form: camelCase except `org_email_login`,
/// and `location` is a string holding either JSON or a bare address.
#[derive(MultipartForm)]
pub struct CreateEventForm {
    pub title: Text<String>,
    pub description: Text<String>,
    pub domain: Text<String>,
    pub points: Text<i32>,
    #[multipart(rename = "startDate")]
    pub start_date: Text<String>,
    #[multipart(rename = "endDate")]
    pub end_date: Text<String>,
    pub location: Text<String>,
    #[multipart(rename = "organizedBy")]
    pub organized_by: Text<String>,
    pub org_email_login: Text<String>,
    pub status: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub poster: Option<TempFile>,
}

/// Query string for `GET /api/pointmate/events`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct EventListQuery {
    /// Restrict the listing to events owned by this organization.
    pub org_email: Option<String>,
}

fn parse_status(raw: Option<Text<String>>) -> Result<Option<EventStatus>, Error> {
    let Some(label) = raw else {
        return Ok(None);
    };
    EventStatus::parse(&label)
        .map(Some)
        .ok_or_else(|| Error::invalid_request("status must be upcoming, ongoing, or completed"))
}

fn poster_upload(file: Option<TempFile>) -> Result<Option<PosterUpload>, Error> {
    let Some(file) = file else {
        return Ok(None);
    };
    let bytes = std::fs::read(file.file.path())
        .map_err(|err| Error::internal(format!("failed to read uploaded poster: {err}")))?;
    let mimetype = file
        .content_type
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_owned());
    Ok(Some(PosterUpload {
        original_name: file.file_name.unwrap_or_else(|| "poster".to_owned()),
        mimetype,
        bytes,
    }))
}

/// Publish a new event, optionally with a poster attachment.
#[utoipa::path(
    post,
    path = "/api/pointmate/events/create",
    responses(
        (status = 201, description = "Event created"),
        (status = 400, description = "Invalid field or non-image poster", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["events"],
    operation_id = "createEvent",
    security([])
)]
#[post("/events/create")]
pub async fn create_event(
    state: web::Data<HttpState>,
    MultipartForm(form): MultipartForm<CreateEventForm>,
) -> ApiResult<HttpResponse> {
    let status = parse_status(form.status)?;
    let poster = poster_upload(form.poster)?;
    let event = state
        .events
        .create(CreateEventRequest {
            title: form.title.into_inner(),
            description: form.description.into_inner(),
            domain: form.domain.into_inner(),
            points: form.points.into_inner(),
            start_date: form.start_date.into_inner(),
            end_date: form.end_date.into_inner(),
            location: form.location.into_inner(),
            organized_by: form.organized_by.into_inner(),
            org_email_login: form.org_email_login.into_inner(),
            status,
            poster,
        })
        .await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Event created successfully",
        "event": event,
    })))
}

/// List events, optionally filtered to one organization, ascending by start
/// date.
#[utoipa::path(
    get,
    path = "/api/pointmate/events",
    params(EventListQuery),
    responses(
        (status = 200, description = "Events", body = [Event]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["events"],
    operation_id = "listEvents",
    security([])
)]
#[get("/events")]
pub async fn list_events(
    state: web::Data<HttpState>,
    query: web::Query<EventListQuery>,
) -> ApiResult<web::Json<Vec<Event>>> {
    let events = state.events.list(query.into_inner().org_email).await?;
    Ok(web::Json(events))
}

/// Fetch one event by identifier.
#[utoipa::path(
    get,
    path = "/api/pointmate/events/{id}",
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["events"],
    operation_id = "getEvent",
    security([])
)]
#[get("/events/{id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<Event>> {
    let event = state.events.fetch(id.into_inner()).await?;
    Ok(web::Json(event))
}

/// Merge updated fields into an event.
#[utoipa::path(
    put,
    path = "/api/pointmate/events/{id}",
    request_body = EventPatch,
    responses(
        (status = 200, description = "Event updated"),
        (status = 404, description = "Event not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["events"],
    operation_id = "updateEvent",
    security([])
)]
#[put("/events/{id}")]
pub async fn update_event(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<EventPatch>,
) -> ApiResult<HttpResponse> {
    let event = state
        .events
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Event updated successfully",
        "event": event,
    })))
}

/// Delete an event.
#[utoipa::path(
    delete,
    path = "/api/pointmate/events/{id}",
    responses(
        (status = 200, description = "Event deleted"),
        (status = 404, description = "Event not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["events"],
    operation_id = "deleteEvent",
    security([])
)]
#[delete("/events/{id}")]
pub async fn delete_event(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.events.remove(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Event deleted successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::test_app_state;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    fn api_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api/pointmate")
                .service(create_event)
                .service(list_events)
                .service(get_event)
                .service(update_event)
                .service(delete_event),
        )
    }

    const BOUNDARY: &str = "------------------------testboundary";

    struct MultipartBody {
        bytes: Vec<u8>,
    }

    impl MultipartBody {
        fn new() -> Self {
            Self { bytes: Vec::new() }
        }

        fn text(mut self, name: &str, value: &str) -> Self {
            self.bytes.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
            self
        }

        fn file(mut self, name: &str, filename: &str, mimetype: &str, content: &[u8]) -> Self {
            self.bytes.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {mimetype}\r\n\r\n"
                )
                .as_bytes(),
            );
            self.bytes.extend_from_slice(content);
            self.bytes.extend_from_slice(b"\r\n");
            self
        }

        fn finish(mut self) -> (String, Vec<u8>) {
            self.bytes
                .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
            (
                format!("multipart/form-data; boundary={BOUNDARY}"),
                self.bytes,
            )
        }
    }

    fn event_form(title: &str, org: &str, start: &str) -> MultipartBody {
        MultipartBody::new()
            .text("title", title)
            .text("description", "24h build")
            .text("domain", "Technical")
            .text("points", "10")
            .text("startDate", start)
            .text("endDate", "2026-03-20")
            .text("location", "Main Auditorium")
            .text("organizedBy", "CSE Society")
            .text("org_email_login", org)
    }

    async fn post_event(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        body: MultipartBody,
    ) -> actix_web::dev::ServiceResponse {
        let (content_type, bytes) = body.finish();
        actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/pointmate/events/create")
                .insert_header(("content-type", content_type))
                .set_payload(bytes)
                .to_request(),
        )
        .await
    }

    async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
        let body = actix_test::read_body(response).await;
        serde_json::from_slice(&body).expect("JSON body")
    }

    #[actix_web::test]
    async fn create_answers_created_with_location_fallback() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let response = post_event(&app, event_form("Hackathon", "cse@org.edu", "2026-03-14")).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Event created successfully")
        );
        let event = value.get("event").expect("event in body");
        assert_eq!(
            event
                .get("location")
                .and_then(|l| l.get("address"))
                .and_then(Value::as_str),
            Some("Main Auditorium")
        );
        assert_eq!(event.get("status").and_then(Value::as_str), Some("upcoming"));
        assert!(event.get("poster").expect("poster field").is_null());
    }

    #[actix_web::test]
    async fn create_stores_an_image_poster() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let body = event_form("Hackathon", "cse@org.edu", "2026-03-14").file(
            "poster",
            "banner.png",
            "image/png",
            &[0x89, 0x50, 0x4e, 0x47],
        );
        let response = post_event(&app, body).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let value = read_json(response).await;
        let poster = value
            .get("event")
            .and_then(|e| e.get("poster"))
            .expect("poster descriptor");
        assert_eq!(
            poster.get("mimetype").and_then(Value::as_str),
            Some("image/png")
        );
        let filename = poster
            .get("filename")
            .and_then(Value::as_str)
            .expect("filename");
        assert!(filename.ends_with("banner.png"));
        assert_eq!(
            poster.get("path").and_then(Value::as_str),
            Some(format!("uploads/{filename}").as_str())
        );
    }

    #[actix_web::test]
    async fn create_rejects_a_pdf_poster() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let body = event_form("Hackathon", "cse@org.edu", "2026-03-14").file(
            "poster",
            "notes.pdf",
            "application/pdf",
            b"%PDF-1.4",
        );
        let response = post_event(&app, body).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Not an image! Please upload an image.")
        );
    }

    #[actix_web::test]
    async fn listing_filters_by_owner_and_sorts_by_start_date() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let later = post_event(&app, event_form("Later", "cse@org.edu", "2026-05-01")).await;
        assert_eq!(later.status(), actix_web::http::StatusCode::CREATED);
        let earlier = post_event(&app, event_form("Earlier", "cse@org.edu", "2026-04-01")).await;
        assert_eq!(earlier.status(), actix_web::http::StatusCode::CREATED);
        let other = post_event(&app, event_form("Other", "mech@org.edu", "2026-01-01")).await;
        assert_eq!(other.status(), actix_web::http::StatusCode::CREATED);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/pointmate/events?org_email=cse@org.edu")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value = read_json(response).await;
        let titles: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|e| e.get("title").and_then(Value::as_str))
            .collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[actix_web::test]
    async fn update_then_delete_round_trips() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let created = post_event(&app, event_form("Hackathon", "cse@org.edu", "2026-03-14")).await;
        let value = read_json(created).await;
        let id = value
            .get("event")
            .and_then(|e| e.get("id"))
            .and_then(Value::as_str)
            .expect("event id")
            .to_owned();

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/pointmate/events/{id}"))
                .set_json(serde_json::json!({ "points": 25, "status": "ongoing" }))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Event updated successfully")
        );
        let event = value.get("event").expect("event in body");
        assert_eq!(event.get("points").and_then(Value::as_i64), Some(25));
        assert_eq!(event.get("status").and_then(Value::as_str), Some("ongoing"));
        assert_eq!(
            event.get("title").and_then(Value::as_str),
            Some("Hackathon")
        );

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/pointmate/events/{id}"))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Event deleted successfully")
        );

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/pointmate/events/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_event_answers_not_found() {
        let (state, _uploads) = test_app_state();
        let app = actix_test::init_service(api_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/pointmate/events/{}", Uuid::new_v4()))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Event not found")
        );
    }
}
