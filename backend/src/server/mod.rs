//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ServerConfig};

use std::path::PathBuf;
use std::sync::Arc;

use actix_files::Files;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{
    AccountsService, CatalogueService, OrganizationService, ProfileService,
};
use crate::inbound::http::events::{
    create_event, delete_event, get_event, list_events, update_event,
};
use crate::inbound::http::health::{live, ready, status, HealthState};
use crate::inbound::http::organizations::{organization_login, register_organization};
use crate::inbound::http::profiles::{get_profile, migrate_points, upsert_profile};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{login, signup, update_account};
use crate::middleware::RequestLog;
use crate::outbound::persistence::{
    DieselEventRepository, DieselOrganizationRepository, DieselProfileRepository,
    DieselUserRepository, MemoryStore,
};
use crate::outbound::storage::DiskPosterStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;

/// Build the handler state from the configured backing stores.
///
/// With a database pool each port gets its Diesel adapter; without one a
/// single shared [`MemoryStore`] backs all four ports.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let posters = Arc::new(DiskPosterStore::new(config.upload_dir.clone()));

    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(AccountsService::new(Arc::new(DieselUserRepository::new(
                pool.clone(),
            )))),
            Arc::new(ProfileService::new(Arc::new(DieselProfileRepository::new(
                pool.clone(),
            )))),
            Arc::new(CatalogueService::new(
                Arc::new(DieselEventRepository::new(pool.clone())),
                posters,
            )),
            Arc::new(OrganizationService::new(Arc::new(
                DieselOrganizationRepository::new(pool.clone()),
            ))),
        ),
        None => {
            let store = Arc::new(MemoryStore::new());
            HttpState::new(
                Arc::new(AccountsService::new(Arc::clone(&store))),
                Arc::new(ProfileService::new(Arc::clone(&store))),
                Arc::new(CatalogueService::new(Arc::clone(&store), posters)),
                Arc::new(OrganizationService::new(store)),
            )
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    upload_dir: PathBuf,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        upload_dir,
    } = deps;

    let pointmate = web::scope("/pointmate")
        .service(get_profile)
        .service(upsert_profile)
        .service(migrate_points)
        .service(create_event)
        .service(list_events)
        .service(get_event)
        .service(update_event)
        .service(delete_event)
        .service(register_organization)
        .service(organization_login);

    let api = web::scope("/api")
        .service(status)
        .service(signup)
        .service(login)
        .service(update_account)
        .service(pointmate);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestLog)
        .service(api)
        .service(Files::new("/uploads", upload_dir))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
        upload_dir,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            upload_dir: upload_dir.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
