//! Organization registration and login service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{
    OrganizationRepository, OrganizationRepositoryError, Organizations,
};
use crate::domain::{Error, NewOrganization, Organization, OrganizationCredentials};

const DUPLICATE_REGISTRATION: &str =
    "Organization with this email or AICTE Approval Number already exists.";

/// [`Organizations`] implementation backed by an organization repository.
#[derive(Clone)]
pub struct OrganizationService<O> {
    organizations: Arc<O>,
}

impl<O> OrganizationService<O> {
    /// Create a new service over the given repository.
    pub fn new(organizations: Arc<O>) -> Self {
        Self { organizations }
    }
}

fn map_repository_error(error: OrganizationRepositoryError) -> Error {
    match error {
        OrganizationRepositoryError::Connection { message } => Error::service_unavailable(
            format!("organization repository unavailable: {message}"),
        ),
        OrganizationRepositoryError::Query { message } => {
            Error::internal(format!("organization repository error: {message}"))
        }
        OrganizationRepositoryError::DuplicateRegistration => {
            Error::conflict(DUPLICATE_REGISTRATION)
        }
    }
}

#[async_trait]
impl<O> Organizations for OrganizationService<O>
where
    O: OrganizationRepository,
{
    async fn register(&self, fields: NewOrganization) -> Result<Uuid, Error> {
        let taken = self
            .organizations
            .exists_with_email_or_approval(&fields.organization_email, &fields.aicte_approval_number)
            .await
            .map_err(map_repository_error)?;
        if taken {
            return Err(Error::conflict(DUPLICATE_REGISTRATION));
        }

        let organization = Organization::register(fields);
        // A racing registration surfaces through the unique constraints and
        // maps to the same conflict answer.
        self.organizations
            .insert(&organization)
            .await
            .map_err(map_repository_error)?;
        info!(
            organization_id = %organization.id,
            institution = %organization.institution_name,
            "organization registered"
        );
        Ok(organization.id)
    }

    async fn log_in(&self, credentials: OrganizationCredentials) -> Result<Organization, Error> {
        let organization = self
            .organizations
            .find_by_email_and_institution(
                &credentials.organization_email,
                &credentials.institution_name,
            )
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("User does not exist. Please sign up first."))?;

        if !organization.password_matches(&credentials.password) {
            return Err(Error::unauthorized("Incorrect password."));
        }
        Ok(organization)
    }
}
