//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! document is served from `/api-docs/openapi.json` in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Coordinates, Error, ErrorCode, Event, EventPatch, EventStatus, Location, NewOrganization,
    Organization, OrganizationCredentials, PosterDescriptor, Profile, ProfilePatch, User,
};
use crate::inbound::http::profiles::UpsertProfileRequest;
use crate::inbound::http::users::{LoginRequest, SignupRequest, UpdateAccountRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PointMate backend API",
        description = "HTTP interface for student accounts, profiles, AICTE points, \
                       organizations, and events."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::update_account,
        crate::inbound::http::profiles::get_profile,
        crate::inbound::http::profiles::upsert_profile,
        crate::inbound::http::profiles::migrate_points,
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::update_event,
        crate::inbound::http::events::delete_event,
        crate::inbound::http::organizations::register_organization,
        crate::inbound::http::organizations::organization_login,
        crate::inbound::http::health::status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        SignupRequest,
        LoginRequest,
        UpdateAccountRequest,
        Profile,
        ProfilePatch,
        UpsertProfileRequest,
        Event,
        EventPatch,
        EventStatus,
        Location,
        Coordinates,
        PosterDescriptor,
        Organization,
        NewOrganization,
        OrganizationCredentials,
    )),
    tags(
        (name = "users", description = "Student account operations"),
        (name = "profiles", description = "Student profiles and AICTE points"),
        (name = "events", description = "Organization-published events"),
        (name = "organizations", description = "Organization registration and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_registers_all_route_groups() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/signup",
            "/api/login",
            "/api/update-profile",
            "/api/pointmate/profile/get",
            "/api/pointmate/profile/update",
            "/api/pointmate/migrate-aicte-points",
            "/api/pointmate/events/create",
            "/api/pointmate/events",
            "/api/pointmate/events/{id}",
            "/api/pointmate/organizations/register",
            "/api/pointmate/organizations/login",
            "/api/health",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn openapi_error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Error"));
        assert!(schemas.contains_key("Profile"));
        assert!(schemas.contains_key("Event"));
    }
}
