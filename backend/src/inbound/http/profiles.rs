//! Student profile handlers.
//!
//! ```text
//! GET /api/pointmate/profile/get?email_login=u@x.com
//! POST /api/pointmate/profile/update {"email_login":"u@x.com","college":"NIT Trichy"}
//! POST /api/pointmate/migrate-aicte-points
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Profile, ProfilePatch};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query string for `GET /api/pointmate/profile/get`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProfileQuery {
    /// Login email the profile is keyed by.
    pub email_login: String,
}

/// Upsert request body for `POST /api/pointmate/profile/update`.
///
/// Only `email_login` is required; every other field merges into the stored
/// profile when present. `aictePoints` accepts a number or a numeric string.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpsertProfileRequest {
    pub email_login: String,
    #[serde(flatten)]
    pub fields: ProfilePatch,
}

/// Fetch a profile by login email.
#[utoipa::path(
    get,
    path = "/api/pointmate/profile/get",
    params(ProfileQuery),
    responses(
        (status = 200, description = "Profile", body = Profile),
        (status = 404, description = "Profile not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profiles"],
    operation_id = "getProfile",
    security([])
)]
#[get("/profile/get")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    query: web::Query<ProfileQuery>,
) -> ApiResult<web::Json<Profile>> {
    let profile = state.profiles.fetch(&query.email_login).await?;
    Ok(web::Json(profile))
}

/// Create or merge a profile keyed by login email.
#[utoipa::path(
    post,
    path = "/api/pointmate/profile/update",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile stored"),
        (status = 400, description = "Invalid field value", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profiles"],
    operation_id = "upsertProfile",
    security([])
)]
#[post("/profile/update")]
pub async fn upsert_profile(
    state: web::Data<HttpState>,
    payload: web::Json<UpsertProfileRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let profile = state
        .profiles
        .upsert(&payload.email_login, payload.fields)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated successfully",
        "profile": profile,
    })))
}

/// One-off backfill that zeroes missing points fields.
#[utoipa::path(
    post,
    path = "/api/pointmate/migrate-aicte-points",
    responses(
        (status = 200, description = "Backfill completed"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["profiles"],
    operation_id = "migrateAictePoints",
    security([])
)]
#[post("/migrate-aicte-points")]
pub async fn migrate_points(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let modified = state.profiles.backfill_points().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Migration completed successfully",
        "modifiedCount": modified,
    })))
}
