//! In-memory store implementing every repository port.
//!
//! Used when no database URL is configured, and by handler tests. Semantics
//! match the Diesel adapters: the same uniqueness rules, the same merge
//! behaviour, the same ordering on listings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    EventRepository, EventRepositoryError, OrganizationRepository, OrganizationRepositoryError,
    ProfileRepository, ProfileRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Event, EventPatch, Organization, Profile, ProfilePatch, User, UserFieldUpdate,
};

#[derive(Default)]
struct StoreInner {
    users: HashMap<String, User>,
    profiles: HashMap<String, Profile>,
    events: Vec<Event>,
    organizations: Vec<Organization>,
}

/// Shared in-memory store backing all four repository ports.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // Writers only mutate plain collections; a poisoned lock still holds
        // consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock().users.get(email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut inner = self.lock();
        if inner.users.contains_key(&user.email) {
            return Err(UserRepositoryError::DuplicateEmail);
        }
        inner.users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn update_fields(
        &self,
        email: &str,
        update: &UserFieldUpdate,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut inner = self.lock();
        let Some(user) = inner.users.get_mut(email) else {
            return Ok(None);
        };
        update.apply_to(user);
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_login(
        &self,
        email_login: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.lock().profiles.get(email_login).cloned())
    }

    async fn insert(&self, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        let mut inner = self.lock();
        if inner.profiles.contains_key(&profile.email_login) {
            return Err(ProfileRepositoryError::DuplicateLogin);
        }
        inner
            .profiles
            .insert(profile.email_login.clone(), profile.clone());
        Ok(())
    }

    async fn update(
        &self,
        email_login: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut inner = self.lock();
        let Some(profile) = inner.profiles.get_mut(email_login) else {
            return Ok(None);
        };
        profile.apply_patch(patch);
        Ok(Some(profile.clone()))
    }

    async fn backfill_missing_points(&self) -> Result<u64, ProfileRepositoryError> {
        let mut inner = self.lock();
        let mut modified = 0u64;
        for profile in inner.profiles.values_mut() {
            if profile.aicte_points.is_none() {
                profile.aicte_points = Some(0);
                modified += 1;
            }
        }
        Ok(modified)
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError> {
        self.lock().events.push(event.clone());
        Ok(())
    }

    async fn list(
        &self,
        org_email_login: Option<String>,
    ) -> Result<Vec<Event>, EventRepositoryError> {
        let inner = self.lock();
        let mut events: Vec<Event> = inner
            .events
            .iter()
            .filter(|event| {
                org_email_login
                    .as_deref()
                    .is_none_or(|owner| event.org_email_login == owner)
            })
            .cloned()
            .collect();
        events.sort_by_key(|event| event.start_date);
        Ok(events)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        Ok(self
            .lock()
            .events
            .iter()
            .find(|event| event.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &EventPatch,
    ) -> Result<Option<Event>, EventRepositoryError> {
        let mut inner = self.lock();
        let Some(event) = inner.events.iter_mut().find(|event| event.id == id) else {
            return Ok(None);
        };
        event.apply_patch(patch);
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, EventRepositoryError> {
        let mut inner = self.lock();
        let before = inner.events.len();
        inner.events.retain(|event| event.id != id);
        Ok(inner.events.len() < before)
    }
}

#[async_trait]
impl OrganizationRepository for MemoryStore {
    async fn exists_with_email_or_approval(
        &self,
        organization_email: &str,
        aicte_approval_number: &str,
    ) -> Result<bool, OrganizationRepositoryError> {
        Ok(self.lock().organizations.iter().any(|org| {
            org.organization_email == organization_email
                || org.aicte_approval_number == aicte_approval_number
        }))
    }

    async fn insert(&self, organization: &Organization) -> Result<(), OrganizationRepositoryError> {
        let mut inner = self.lock();
        let clash = inner.organizations.iter().any(|org| {
            org.organization_email == organization.organization_email
                || org.aicte_approval_number == organization.aicte_approval_number
        });
        if clash {
            return Err(OrganizationRepositoryError::DuplicateRegistration);
        }
        inner.organizations.push(organization.clone());
        Ok(())
    }

    async fn find_by_email_and_institution(
        &self,
        organization_email: &str,
        institution_name: &str,
    ) -> Result<Option<Organization>, OrganizationRepositoryError> {
        Ok(self
            .lock()
            .organizations
            .iter()
            .find(|org| {
                org.organization_email == organization_email
                    && org.institution_name == institution_name
            })
            .cloned())
    }
}
