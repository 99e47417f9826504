//! Driving port for organization operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, NewOrganization, Organization, OrganizationCredentials};

/// Use-cases around organization registration and login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Organizations: Send + Sync {
    /// Register a new organization and return its generated identifier.
    ///
    /// Fails with `Conflict` when the email or the AICTE approval number is
    /// already registered.
    async fn register(&self, fields: NewOrganization) -> Result<Uuid, Error>;

    /// Check credentials against the stored organization.
    ///
    /// Fails with `NotFound` when no record matches both email and
    /// institution name, and with `Unauthorized` on a password mismatch.
    async fn log_in(&self, credentials: OrganizationCredentials) -> Result<Organization, Error>;
}
