//! PostgreSQL-backed `OrganizationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{OrganizationRepository, OrganizationRepositoryError};
use crate::domain::Organization;

use super::models::{NewOrganizationRow, OrganizationRow};
use super::pool::{DbPool, PoolError};
use super::schema::organizations;

/// Diesel-backed implementation of the `OrganizationRepository` port.
#[derive(Clone)]
pub struct DieselOrganizationRepository {
    pool: DbPool,
}

impl DieselOrganizationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrganizationRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            OrganizationRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> OrganizationRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            OrganizationRepositoryError::DuplicateRegistration
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            OrganizationRepositoryError::connection("database connection error")
        }
        _ => OrganizationRepositoryError::query("database error"),
    }
}

fn row_to_organization(row: OrganizationRow) -> Organization {
    Organization {
        id: row.id,
        full_name: row.full_name,
        designation: row.designation,
        contact_number: row.contact_number,
        organization_email: row.organization_email,
        password: row.password,
        institution_name: row.institution_name,
        aicte_approval_number: row.aicte_approval_number,
        authorized_person_name: row.authorized_person_name,
        registered_at: row.registered_at,
    }
}

#[async_trait]
impl OrganizationRepository for DieselOrganizationRepository {
    async fn exists_with_email_or_approval(
        &self,
        organization_email: &str,
        aicte_approval_number: &str,
    ) -> Result<bool, OrganizationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = organizations::table
            .filter(
                organizations::organization_email
                    .eq(organization_email)
                    .or(organizations::aicte_approval_number.eq(aicte_approval_number)),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count > 0)
    }

    async fn insert(
        &self,
        organization: &Organization,
    ) -> Result<(), OrganizationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewOrganizationRow {
            id: organization.id,
            full_name: &organization.full_name,
            designation: &organization.designation,
            contact_number: &organization.contact_number,
            organization_email: &organization.organization_email,
            password: &organization.password,
            institution_name: &organization.institution_name,
            aicte_approval_number: &organization.aicte_approval_number,
            authorized_person_name: &organization.authorized_person_name,
            registered_at: organization.registered_at,
        };

        diesel::insert_into(organizations::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_email_and_institution(
        &self,
        organization_email: &str,
        institution_name: &str,
    ) -> Result<Option<Organization>, OrganizationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<OrganizationRow> = organizations::table
            .filter(
                organizations::organization_email
                    .eq(organization_email)
                    .and(organizations::institution_name.eq(institution_name)),
            )
            .select(OrganizationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(result.map(row_to_organization))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn unique_violation_maps_to_duplicate_registration() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_string()),
        );

        assert!(matches!(
            map_diesel_error(diesel_err),
            OrganizationRepositoryError::DuplicateRegistration
        ));
    }

    #[rstest]
    fn row_conversion_preserves_unique_fields() {
        let organization = row_to_organization(OrganizationRow {
            id: Uuid::new_v4(),
            full_name: "Dr. Mehta".into(),
            designation: "Dean".into(),
            contact_number: "9876543210".into(),
            organization_email: "events@nitt.edu".into(),
            password: "orgsecret".into(),
            institution_name: "NIT Trichy".into(),
            aicte_approval_number: "AICTE-1".into(),
            authorized_person_name: "Dr. Mehta".into(),
            registered_at: Utc::now(),
        });

        assert_eq!(organization.organization_email, "events@nitt.edu");
        assert_eq!(organization.aicte_approval_number, "AICTE-1");
        assert!(organization.password_matches("orgsecret"));
    }
}
