//! Domain ports: the traits that adapters plug into.
//!
//! Driven ports (repositories, poster store) are implemented by the
//! outbound adapters; driving ports (use-case traits) are implemented by the
//! domain services and consumed by the inbound HTTP adapter.

mod accounts;
mod event_repository;
mod events;
mod organization_repository;
mod organizations;
mod poster_store;
mod profile_repository;
mod profiles;
mod user_repository;

pub use accounts::{Accounts, NewUser, UserCredentials};
pub use event_repository::{EventRepository, EventRepositoryError};
pub use events::{CreateEventRequest, EventCatalogue, PosterUpload};
pub use organization_repository::{OrganizationRepository, OrganizationRepositoryError};
pub use organizations::Organizations;
pub use poster_store::{PosterStore, PosterStoreError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
pub use profiles::Profiles;
pub use user_repository::{UserRepository, UserRepositoryError};

#[cfg(test)]
pub use accounts::MockAccounts;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use events::MockEventCatalogue;
#[cfg(test)]
pub use organization_repository::MockOrganizationRepository;
#[cfg(test)]
pub use organizations::MockOrganizations;
#[cfg(test)]
pub use poster_store::MockPosterStore;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use profiles::MockProfiles;
#[cfg(test)]
pub use user_repository::MockUserRepository;
