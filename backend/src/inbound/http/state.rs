//! Shared handler state.

use std::sync::Arc;

use crate::domain::ports::{Accounts, EventCatalogue, Organizations, Profiles};

/// Service handles shared across HTTP handlers.
///
/// Handlers depend on the driving ports only; the concrete services and
/// their adapters are wired up in `server::create_server`.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn Accounts>,
    pub profiles: Arc<dyn Profiles>,
    pub events: Arc<dyn EventCatalogue>,
    pub organizations: Arc<dyn Organizations>,
}

impl HttpState {
    /// Bundle the four use-case services into one handler state.
    pub fn new(
        accounts: Arc<dyn Accounts>,
        profiles: Arc<dyn Profiles>,
        events: Arc<dyn EventCatalogue>,
        organizations: Arc<dyn Organizations>,
    ) -> Self {
        Self {
            accounts,
            profiles,
            events,
            organizations,
        }
    }
}
