//! Registered event-issuing organizations.
//!
//! An [`Organization`] registers once with a unique email and a unique AICTE
//! approval number, then logs in with email, institution name, and password.
//! Records are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub full_name: String,
    pub designation: String,
    pub contact_number: String,
    /// Unique login email.
    pub organization_email: String,
    /// Plaintext password (preserved legacy behaviour).
    #[serde(skip_serializing)]
    pub password: String,
    pub institution_name: String,
    /// Unique AICTE approval number.
    pub aicte_approval_number: String,
    pub authorized_person_name: String,
    pub registered_at: DateTime<Utc>,
}

impl Organization {
    /// Materialise a registration request into a stored record.
    pub fn register(fields: NewOrganization) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: fields.full_name,
            designation: fields.designation,
            contact_number: fields.contact_number,
            organization_email: fields.organization_email,
            password: fields.password,
            institution_name: fields.institution_name,
            aicte_approval_number: fields.aicte_approval_number,
            authorized_person_name: fields.authorized_person_name,
            registered_at: Utc::now(),
        }
    }

    /// Compare a candidate password against the stored one.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Registration payload for a new organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub full_name: String,
    pub designation: String,
    pub contact_number: String,
    pub organization_email: String,
    pub password: String,
    pub institution_name: String,
    pub aicte_approval_number: String,
    pub authorized_person_name: String,
}

/// Credentials presented at organization login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCredentials {
    pub organization_email: String,
    pub institution_name: String,
    pub password: String,
}
