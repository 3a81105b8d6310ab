//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security (CORS, headers, body limits, compression)
//! - Observability (request ids, tracing)
//! - Recovery (panics, timeouts)
//! - OpenAPI documentation
//!
//! ```rust,no_run
//! use axum::Router;
//! use hood_server::middleware::{
//!     RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//! };
//!
//! let app: Router = Router::new()
//!     .with_default_recovery()
//!     .with_observability()
//!     .with_default_security();
//! ```

mod observability;
mod recovery;
mod security;
mod specification;

pub use observability::{REQUEST_ID_HEADER, RouterObservabilityExt};
pub use recovery::{DEFAULT_REQUEST_TIMEOUT, RecoveryConfig, RouterRecoveryExt};
pub use security::{DEFAULT_MAX_BODY_SIZE, RouterSecurityExt, SecurityConfig};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
