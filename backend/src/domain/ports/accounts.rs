//! Driving port for student account operations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserFieldUpdate};

/// Signup payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credentials presented at student login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

/// Use-cases around the student login identity.
///
/// Authentication here is a pass-through credential check: success returns
/// the user document and the caller is responsible for retaining it. No
/// token or session state is issued.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Accounts: Send + Sync {
    /// Register a new user. Fails with `Conflict` when the email is taken.
    async fn sign_up(&self, request: NewUser) -> Result<User, Error>;

    /// Check credentials against the stored user.
    ///
    /// Fails with `NotFound` when the email is unknown and with
    /// `InvalidRequest` on a password mismatch.
    async fn log_in(&self, credentials: UserCredentials) -> Result<User, Error>;

    /// Update the mutable user fields (name, password).
    ///
    /// Fails with `NotFound` when the email is unknown.
    async fn update_user(&self, email: &str, update: UserFieldUpdate) -> Result<User, Error>;
}
