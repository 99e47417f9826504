//! Port for organization persistence.

use async_trait::async_trait;

use crate::domain::Organization;

/// Errors raised by organization repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrganizationRepositoryError {
    /// Repository connection could not be established.
    #[error("organization repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("organization repository query failed: {message}")]
    Query { message: String },
    /// Insert violated the unique email or approval-number constraint.
    #[error("organization email or approval number already registered")]
    DuplicateRegistration,
}

impl OrganizationRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for storing and retrieving registered organizations.
///
/// Uniqueness is enforced jointly on `organization_email` and
/// `aicte_approval_number`: a registration clashing on either is rejected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// True when a record already uses the given email or approval number.
    async fn exists_with_email_or_approval(
        &self,
        organization_email: &str,
        aicte_approval_number: &str,
    ) -> Result<bool, OrganizationRepositoryError>;

    /// Persist a new organization.
    ///
    /// Returns [`OrganizationRepositoryError::DuplicateRegistration`] when
    /// either unique field is already taken.
    async fn insert(&self, organization: &Organization)
        -> Result<(), OrganizationRepositoryError>;

    /// Fetch the organization matching both login email and institution
    /// name, or `None` when absent.
    async fn find_by_email_and_institution(
        &self,
        organization_email: &str,
        institution_name: &str,
    ) -> Result<Option<Organization>, OrganizationRepositoryError>;
}
