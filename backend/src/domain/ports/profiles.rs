//! Driving port for profile and points operations.

use async_trait::async_trait;

use crate::domain::{Error, Profile, ProfilePatch};

/// Use-cases around the extended student record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Profiles: Send + Sync {
    /// Fetch the profile for a login email.
    ///
    /// Fails with `NotFound` when no profile exists.
    async fn fetch(&self, email_login: &str) -> Result<Profile, Error>;

    /// Create-or-merge the profile for a login email.
    ///
    /// Never fails on absence: a missing profile is created with the
    /// supplied fields and a zero points default.
    async fn upsert(&self, email_login: &str, patch: ProfilePatch) -> Result<Profile, Error>;

    /// One-shot migration: set a zero points value on every profile missing
    /// one. Returns the number of records modified.
    async fn backfill_points(&self) -> Result<u64, Error>;
}
