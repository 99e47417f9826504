//! Student login identity.
//!
//! A [`User`] is the record checked at signup and login. It is keyed by its
//! unique email address; only the name and password may change afterwards.
//!
//! Passwords are stored and compared as plaintext for compatibility with
//! the existing data. See `DESIGN.md` for the security notes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered student login identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Display name supplied at signup.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Plaintext password (preserved legacy behaviour).
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Build a user from owned parts.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Compare a candidate password against the stored one.
    ///
    /// Direct string comparison, matching the legacy store.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Partial update of the mutable user fields.
///
/// Only `name` and `password` may change after signup. Empty strings are
/// normalised to "absent" so that blank form fields never clear a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFieldUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UserFieldUpdate {
    /// Build an update, dropping empty values.
    pub fn new(name: Option<String>, password: Option<String>) -> Self {
        Self {
            name: name.filter(|v| !v.is_empty()),
            password: password.filter(|v| !v.is_empty()),
        }
    }

    /// True when the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }

    /// Apply the update to a user record in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_comparison_is_exact() {
        let user = User::new("Asha", "asha@college.edu", "secret");
        assert!(user.password_matches("secret"));
        assert!(!user.password_matches("Secret"));
        assert!(!user.password_matches(""));
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let update = UserFieldUpdate::new(Some(String::new()), Some("newpass".into()));
        assert!(update.name.is_none());
        assert_eq!(update.password.as_deref(), Some("newpass"));
        assert!(!update.is_empty());
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut user = User::new("Asha", "asha@college.edu", "secret");
        UserFieldUpdate::new(Some("Asha R".into()), None).apply_to(&mut user);
        assert_eq!(user.name, "Asha R");
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn password_is_not_serialised() {
        let user = User::new("Asha", "asha@college.edu", "secret");
        let value = serde_json::to_value(&user).expect("serialise user");
        assert!(value.get("password").is_none());
        assert_eq!(
            value.get("email").and_then(|v| v.as_str()),
            Some("asha@college.edu")
        );
    }
}
