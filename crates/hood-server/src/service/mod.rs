//! Application state, configuration and startup errors.

mod config;
mod error;
mod state;

pub use crate::service::config::{MailConfig, ServiceConfig, ServiceConfigBuilder};
pub use crate::service::error::{BoxedError, Result, ServiceError};
pub use crate::service::state::ServiceState;
