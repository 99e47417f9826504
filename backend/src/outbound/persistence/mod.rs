//! Persistence adapters for the repository ports.
//!
//! Two families live here: Diesel-backed PostgreSQL repositories (one per
//! port, pooled through `bb8` and `diesel-async`) and the [`MemoryStore`]
//! used when no database is configured. Diesel row structs (`models.rs`) and
//! schema definitions (`schema.rs`) are internal implementation details,
//! never exposed to the domain layer.

mod diesel_event_repository;
mod diesel_organization_repository;
mod diesel_profile_repository;
mod diesel_user_repository;
mod memory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_organization_repository::DieselOrganizationRepository;
pub use diesel_profile_repository::DieselProfileRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use memory::MemoryStore;
pub use migrations::{run_migrations, MigrationError};
pub use pool::{DbPool, PoolConfig, PoolError};
