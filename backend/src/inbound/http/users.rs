//! Student account handlers.
//!
//! ```text
//! POST /api/signup {"name":"Asha","email":"u@x.com","password":"secret"}
//! POST /api/login {"email":"u@x.com","password":"secret"}
//! POST /api/update-profile {"email":"u@x.com","name":"New Name"}
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{NewUser, UserCredentials};
use crate::domain::{Error, User, UserFieldUpdate};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Signup request body for `POST /api/signup`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body for `POST /api/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account-update request body for `POST /api/update-profile`.
///
/// Empty strings are treated as "leave unchanged", matching the behaviour
/// of the forms this API serves.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    message: &'static str,
    name: String,
    email: String,
    is_authenticated: bool,
}

impl AuthResponse {
    fn from_user(message: &'static str, user: User) -> Self {
        Self {
            message,
            name: user.name,
            email: user.email,
            is_authenticated: true,
        }
    }
}

/// Create a student account.
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Duplicate email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let user = state
        .accounts
        .sign_up(NewUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;
    Ok(HttpResponse::Ok().json(AuthResponse::from_user("Signup successful", user)))
}

/// Check student credentials.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success"),
        (status = 400, description = "Incorrect password", body = Error),
        (status = 404, description = "Unknown email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let user = state
        .accounts
        .log_in(UserCredentials {
            email: payload.email,
            password: payload.password,
        })
        .await?;
    Ok(HttpResponse::Ok().json(AuthResponse::from_user("Login successful", user)))
}

/// Update the name or password on a student account.
#[utoipa::path(
    post,
    path = "/api/update-profile",
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated"),
        (status = 404, description = "Unknown email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateAccount",
    security([])
)]
#[post("/update-profile")]
pub async fn update_account(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateAccountRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let update = UserFieldUpdate::new(payload.name, payload.password);
    let user = state.accounts.update_user(&payload.email, update).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated successfully",
        "user": user,
    })))
}
