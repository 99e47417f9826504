//! Shared helpers for handler tests.

use std::sync::Arc;

use actix_web::web;
use tempfile::TempDir;

use crate::domain::{
    AccountsService, CatalogueService, OrganizationService, ProfileService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::MemoryStore;
use crate::outbound::storage::DiskPosterStore;

/// Build a fully wired [`HttpState`] over the in-memory store and a
/// throwaway upload directory.
///
/// The returned [`TempDir`] must be kept alive for the duration of the test;
/// dropping it deletes the upload directory under the poster store.
pub fn test_app_state() -> (web::Data<HttpState>, TempDir) {
    let uploads = TempDir::new().unwrap_or_else(|err| panic!("create upload dir: {err}"));
    let store = Arc::new(MemoryStore::new());
    let posters = Arc::new(DiskPosterStore::new(uploads.path().to_path_buf()));

    let state = HttpState::new(
        Arc::new(AccountsService::new(Arc::clone(&store))),
        Arc::new(ProfileService::new(Arc::clone(&store))),
        Arc::new(CatalogueService::new(Arc::clone(&store), posters)),
        Arc::new(OrganizationService::new(store)),
    );
    (web::Data::new(state), uploads)
}
