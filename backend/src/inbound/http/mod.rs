//! Inbound HTTP adapter.
//!
//! Handlers translate HTTP requests into driving-port calls and domain
//! errors into JSON responses. No business rules live here.

pub mod error;
pub mod events;
pub mod health;
pub mod organizations;
pub mod profiles;
pub mod state;
pub mod users;

#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
pub use state::HttpState;
