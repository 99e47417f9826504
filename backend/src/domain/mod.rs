//! Core domain model and services.
//!
//! Entities and the services that implement the driving ports live here;
//! everything I/O shaped is hidden behind the traits in [`ports`].

mod accounts_service;
mod catalogue_service;
mod error;
mod event;
mod organization;
mod organization_service;
pub mod ports;
mod profile;
mod profile_service;
mod user;

pub use accounts_service::AccountsService;
pub use catalogue_service::CatalogueService;
pub use error::{Error, ErrorCode};
pub use event::{
    parse_event_date, Coordinates, Event, EventPatch, EventStatus, Location, PosterDescriptor,
};
pub use organization::{NewOrganization, Organization, OrganizationCredentials};
pub use organization_service::OrganizationService;
pub use profile::{Profile, ProfilePatch};
pub use profile_service::ProfileService;
pub use user::{User, UserFieldUpdate};
