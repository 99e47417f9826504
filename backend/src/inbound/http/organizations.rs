//! Organization handlers.
//!
//! ```text
//! POST /api/pointmate/organizations/register
//! POST /api/pointmate/organizations/login
//! ```

use actix_web::{post, web, HttpResponse};

use crate::domain::{Error, NewOrganization, OrganizationCredentials};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Register an organization.
#[utoipa::path(
    post,
    path = "/api/pointmate/organizations/register",
    request_body = NewOrganization,
    responses(
        (status = 201, description = "Organization registered"),
        (status = 400, description = "Email or approval number taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["organizations"],
    operation_id = "registerOrganization",
    security([])
)]
#[post("/organizations/register")]
pub async fn register_organization(
    state: web::Data<HttpState>,
    payload: web::Json<NewOrganization>,
) -> ApiResult<HttpResponse> {
    let id = state.organizations.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Organization registered successfully!",
        "organizationId": id,
    })))
}

/// Check organization credentials.
#[utoipa::path(
    post,
    path = "/api/pointmate/organizations/login",
    request_body = OrganizationCredentials,
    responses(
        (status = 200, description = "Login success"),
        (status = 401, description = "Incorrect password", body = Error),
        (status = 404, description = "Unknown email or institution", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["organizations"],
    operation_id = "organizationLogin",
    security([])
)]
#[post("/organizations/login")]
pub async fn organization_login(
    state: web::Data<HttpState>,
    payload: web::Json<OrganizationCredentials>,
) -> ApiResult<HttpResponse> {
    let organization = state.organizations.log_in(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "organization": organization,
        "isAuthenticated": true,
    })))
}
