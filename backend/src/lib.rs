//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by docs tooling.
pub use doc::ApiDoc;
/// Request logging middleware, re-exported for embedding hosts.
pub use middleware::RequestLog;
