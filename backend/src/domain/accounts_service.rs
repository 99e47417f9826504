//! Student account service.
//!
//! Implements the [`Accounts`] driving port on top of a [`UserRepository`].
//! Credential checks are plaintext comparisons against the stored record;
//! see `DESIGN.md` for the security notes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    Accounts, NewUser, UserCredentials, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, User, UserFieldUpdate};

/// [`Accounts`] implementation backed by a user repository.
#[derive(Clone)]
pub struct AccountsService<R> {
    users: Arc<R>,
}

impl<R> AccountsService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateEmail => Error::conflict("User already exists"),
    }
}

#[async_trait]
impl<R> Accounts for AccountsService<R>
where
    R: UserRepository,
{
    async fn sign_up(&self, request: NewUser) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(Error::conflict("User already exists"));
        }

        let user = User::new(request.name, request.email, request.password);
        // A concurrent signup may win the race; the unique constraint turns
        // that into the same conflict answer.
        self.users.insert(&user).await.map_err(map_repository_error)?;
        info!(email = %user.email, "user signed up");
        Ok(user)
    }

    async fn log_in(&self, credentials: UserCredentials) -> Result<User, Error> {
        let user = self
            .users
            .find_by_email(&credentials.email)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("User does not exist. Please sign up first."))?;

        if !user.password_matches(&credentials.password) {
            return Err(Error::invalid_request("Incorrect password."));
        }
        Ok(user)
    }

    async fn update_user(&self, email: &str, update: UserFieldUpdate) -> Result<User, Error> {
        self.users
            .update_fields(email, &update)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("User not found."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::ErrorCode;

    fn make_service(repo: MockUserRepository) -> AccountsService<MockUserRepository> {
        AccountsService::new(Arc::new(repo))
    }

    fn stored_user() -> User {
        User::new("Asha", "u@x.com", "secret")
    }

    #[tokio::test]
    async fn sign_up_persists_new_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_insert().times(1).return_once(|_| Ok(()));

        let service = make_service(repo);
        let user = service
            .sign_up(NewUser {
                name: "Asha".into(),
                email: "u@x.com".into(),
                password: "secret".into(),
            })
            .await
            .expect("signup succeeds");
        assert_eq!(user.email, "u@x.com");
    }

    #[tokio::test]
    async fn second_sign_up_with_same_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_user())));
        repo.expect_insert().times(0);

        let service = make_service(repo);
        let err = service
            .sign_up(NewUser {
                name: "Asha".into(),
                email: "u@x.com".into(),
                password: "other".into(),
            })
            .await
            .expect_err("duplicate email rejected");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "User already exists");
    }

    #[tokio::test]
    async fn racing_insert_surfaces_as_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(UserRepositoryError::DuplicateEmail));

        let service = make_service(repo);
        let err = service
            .sign_up(NewUser {
                name: "Asha".into(),
                email: "u@x.com".into(),
                password: "secret".into(),
            })
            .await
            .expect_err("race rejected");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn log_in_accepts_matching_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_user())));

        let service = make_service(repo);
        let user = service
            .log_in(UserCredentials {
                email: "u@x.com".into(),
                password: "secret".into(),
            })
            .await
            .expect("login succeeds");
        assert_eq!(user.name, "Asha");
    }

    #[tokio::test]
    async fn log_in_rejects_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_user())));

        let service = make_service(repo);
        let err = service
            .log_in(UserCredentials {
                email: "u@x.com".into(),
                password: "wrong".into(),
            })
            .await
            .expect_err("mismatch rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Incorrect password.");
    }

    #[tokio::test]
    async fn log_in_reports_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(None));

        let service = make_service(repo);
        let err = service
            .log_in(UserCredentials {
                email: "nobody@x.com".into(),
                password: "secret".into(),
            })
            .await
            .expect_err("unknown email rejected");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_user_reports_missing_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_fields()
            .times(1)
            .return_once(|_, _| Ok(None));

        let service = make_service(repo);
        let err = service
            .update_user("nobody@x.com", UserFieldUpdate::new(Some("New".into()), None))
            .await
            .expect_err("missing user rejected");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Err(UserRepositoryError::connection("refused")));

        let service = make_service(repo);
        let err = service
            .log_in(UserCredentials {
                email: "u@x.com".into(),
                password: "secret".into(),
            })
            .await
            .expect_err("connection error surfaces");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
