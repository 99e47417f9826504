//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{Profile, ProfilePatch};

use super::models::{NewProfileRow, ProfileChangeset, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::profiles;

/// Diesel-backed implementation of the `ProfileRepository` port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProfileRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProfileRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ProfileRepositoryError {
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
            ProfileRepositoryError::DuplicateLogin
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProfileRepositoryError::connection("database connection error")
        }
        _ => ProfileRepositoryError::query("database error"),
    }
}

fn row_to_profile(row: ProfileRow) -> Profile {
    Profile {
        email_login: row.email_login,
        name: row.name,
        email: row.email,
        college: row.college,
        student_id: row.student_id,
        year: row.year,
        branch: row.branch,
        semester: row.semester,
        graduation_year: row.graduation_year,
        address: row.address,
        phone: row.phone,
        aicte_points: row.aicte_points,
    }
}

fn patch_to_changeset(patch: &ProfilePatch) -> ProfileChangeset<'_> {
    ProfileChangeset {
        name: patch.name.as_deref(),
        email: patch.email.as_deref(),
        college: patch.college.as_deref(),
        student_id: patch.student_id.as_deref(),
        year: patch.year.as_deref(),
        branch: patch.branch.as_deref(),
        semester: patch.semester.as_deref(),
        graduation_year: patch.graduation_year.as_deref(),
        address: patch.address.as_deref(),
        phone: patch.phone.as_deref(),
        aicte_points: patch.aicte_points,
    }
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_by_login(
        &self,
        email_login: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<ProfileRow> = profiles::table
            .filter(profiles::email_login.eq(email_login))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(result.map(row_to_profile))
    }

    async fn insert(&self, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewProfileRow {
            email_login: &profile.email_login,
            name: profile.name.as_deref(),
            email: profile.email.as_deref(),
            college: profile.college.as_deref(),
            student_id: profile.student_id.as_deref(),
            year: profile.year.as_deref(),
            branch: profile.branch.as_deref(),
            semester: profile.semester.as_deref(),
            graduation_year: profile.graduation_year.as_deref(),
            address: profile.address.as_deref(),
            phone: profile.phone.as_deref(),
            aicte_points: profile.aicte_points,
        };

        diesel::insert_into(profiles::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        email_login: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        if !patch.is_empty() {
            let updated = diesel::update(profiles::table)
                .filter(profiles::email_login.eq(email_login))
                .set(patch_to_changeset(patch))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            if updated == 0 {
                return Ok(None);
            }
        }

        let result: Option<ProfileRow> = profiles::table
            .filter(profiles::email_login.eq(email_login))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(result.map(row_to_profile))
    }

    async fn backfill_missing_points(&self) -> Result<u64, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let modified = diesel::update(profiles::table)
            .filter(profiles::aicte_points.is_null())
            .set(profiles::aicte_points.eq(Some(0)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(modified as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unique_violation_maps_to_duplicate_login() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_string()),
        );

        assert!(matches!(
            map_diesel_error(diesel_err),
            ProfileRepositoryError::DuplicateLogin
        ));
    }

    #[rstest]
    fn empty_patch_produces_empty_changeset() {
        let patch = ProfilePatch::default();
        let changeset = patch_to_changeset(&patch);
        assert!(changeset.aicte_points.is_none());
        assert!(changeset.name.is_none());
    }

    #[rstest]
    fn row_conversion_preserves_points() {
        let profile = row_to_profile(ProfileRow {
            email_login: "u@x.com".into(),
            name: None,
            email: None,
            college: Some("NIT Trichy".into()),
            student_id: None,
            year: None,
            branch: None,
            semester: None,
            graduation_year: None,
            address: None,
            phone: None,
            aicte_points: Some(42),
        });

        assert_eq!(profile.aicte_points, Some(42));
        assert_eq!(profile.college.as_deref(), Some("NIT Trichy"));
    }
}
