//! Profile service and points accounting.
//!
//! Implements the [`Profiles`] driving port. The upsert semantics follow the
//! wire contract: a missing profile is created (with a zero points
//! default), an existing one is merged. Points are a stored scalar set by
//! the caller; this service never derives them from events.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError, Profiles};
use crate::domain::{Error, Profile, ProfilePatch};

/// [`Profiles`] implementation backed by a profile repository.
#[derive(Clone)]
pub struct ProfileService<P> {
    profiles: Arc<P>,
}

impl<P> ProfileService<P> {
    /// Create a new service over the given repository.
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }
}

fn map_repository_error(error: ProfileRepositoryError) -> Error {
    match error {
        ProfileRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("profile repository unavailable: {message}"))
        }
        ProfileRepositoryError::Query { message } => {
            Error::internal(format!("profile repository error: {message}"))
        }
        ProfileRepositoryError::DuplicateLogin => {
            // Only reachable through an upsert race; the caller retries the
            // merge path, so surfacing this is an internal fault.
            Error::internal("profile insert raced with another writer")
        }
    }
}

impl<P> ProfileService<P>
where
    P: ProfileRepository,
{
    async fn create_from_patch(
        &self,
        email_login: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, Error> {
        let mut profile = Profile::new(email_login);
        profile.apply_patch(&patch.with_creation_defaults());

        match self.profiles.insert(&profile).await {
            Ok(()) => Ok(Some(profile)),
            // Lost the creation race: fall back to the merge path.
            Err(ProfileRepositoryError::DuplicateLogin) => Ok(None),
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[async_trait]
impl<P> Profiles for ProfileService<P>
where
    P: ProfileRepository,
{
    async fn fetch(&self, email_login: &str) -> Result<Profile, Error> {
        self.profiles
            .find_by_login(email_login)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Profile not found"))
    }

    async fn upsert(&self, email_login: &str, patch: ProfilePatch) -> Result<Profile, Error> {
        let existing = self
            .profiles
            .find_by_login(email_login)
            .await
            .map_err(map_repository_error)?;

        if existing.is_none() {
            if let Some(created) = self.create_from_patch(email_login, &patch).await? {
                return Ok(created);
            }
        }

        self.profiles
            .update(email_login, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::internal("profile disappeared during upsert"))
    }

    async fn backfill_points(&self) -> Result<u64, Error> {
        let modified = self
            .profiles
            .backfill_missing_points()
            .await
            .map_err(map_repository_error)?;
        info!(modified, "aicte points backfill completed");
        Ok(modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockProfileRepository;
    use crate::domain::ErrorCode;

    fn make_service(repo: MockProfileRepository) -> ProfileService<MockProfileRepository> {
        ProfileService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn fetch_missing_profile_is_not_found() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_login()
            .times(1)
            .return_once(|_| Ok(None));

        let service = make_service(repo);
        let err = service.fetch("u@x.com").await.expect_err("missing profile");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Profile not found");
    }

    #[tokio::test]
    async fn upsert_creates_missing_profile_with_zero_points() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_login()
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .withf(|profile: &Profile| {
                profile.email_login == "u@x.com" && profile.aicte_points == Some(0)
            })
            .return_once(|_| Ok(()));

        let service = make_service(repo);
        let profile = service
            .upsert(
                "u@x.com",
                ProfilePatch {
                    college: Some("NIT Trichy".into()),
                    ..ProfilePatch::default()
                },
            )
            .await
            .expect("upsert creates");
        assert_eq!(profile.aicte_points, Some(0));
        assert_eq!(profile.college.as_deref(), Some("NIT Trichy"));
    }

    #[tokio::test]
    async fn upsert_merges_into_existing_profile() {
        let mut stored = Profile::new("u@x.com");
        stored.aicte_points = Some(30);
        let merged = {
            let mut copy = stored.clone();
            copy.phone = Some("9876543210".into());
            copy
        };

        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_login()
            .times(1)
            .return_once(move |_| Ok(Some(stored)));
        repo.expect_insert().times(0);
        repo.expect_update()
            .times(1)
            .return_once(move |_, _| Ok(Some(merged)));

        let service = make_service(repo);
        let profile = service
            .upsert(
                "u@x.com",
                ProfilePatch {
                    phone: Some("9876543210".into()),
                    ..ProfilePatch::default()
                },
            )
            .await
            .expect("upsert merges");
        assert_eq!(profile.aicte_points, Some(30));
        assert_eq!(profile.phone.as_deref(), Some("9876543210"));
    }

    #[tokio::test]
    async fn upsert_overwrites_points_directly() {
        let mut stored = Profile::new("u@x.com");
        stored.aicte_points = Some(10);
        let overwritten = {
            let mut copy = stored.clone();
            copy.aicte_points = Some(42);
            copy
        };

        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_login()
            .times(1)
            .return_once(move |_| Ok(Some(stored)));
        repo.expect_update()
            .times(1)
            .withf(|_, patch: &ProfilePatch| patch.aicte_points == Some(42))
            .return_once(move |_, _| Ok(Some(overwritten)));

        let service = make_service(repo);
        let profile = service
            .upsert(
                "u@x.com",
                ProfilePatch {
                    aicte_points: Some(42),
                    ..ProfilePatch::default()
                },
            )
            .await
            .expect("points overwrite");
        assert_eq!(profile.aicte_points, Some(42));
    }

    #[tokio::test]
    async fn lost_creation_race_falls_back_to_merge() {
        let mut merged = Profile::new("u@x.com");
        merged.aicte_points = Some(0);

        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_login()
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(ProfileRepositoryError::DuplicateLogin));
        repo.expect_update()
            .times(1)
            .return_once(move |_, _| Ok(Some(merged)));

        let service = make_service(repo);
        let profile = service
            .upsert("u@x.com", ProfilePatch::default())
            .await
            .expect("race resolves via merge");
        assert_eq!(profile.email_login, "u@x.com");
    }

    #[tokio::test]
    async fn backfill_reports_repository_count() {
        let mut repo = MockProfileRepository::new();
        repo.expect_backfill_missing_points()
            .times(1)
            .return_once(|| Ok(3));

        let service = make_service(repo);
        assert_eq!(service.backfill_points().await.expect("backfill"), 3);
    }
}
