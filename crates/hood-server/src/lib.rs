#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

pub use crate::service::{Result, ServiceError as Error};

// Tracing target constants for consistent logging.

/// Tracing target for errors caught by the recovery middleware.
pub const TRACING_TARGET_RECOVERY_ERROR: &str = "hood_server::recovery::error";

/// Tracing target for panics caught by the recovery middleware.
pub const TRACING_TARGET_RECOVERY_PANIC: &str = "hood_server::recovery::panic";

/// Tracing target for the OpenAPI specification middleware.
pub const TRACING_TARGET_OPENAPI: &str = "hood_server::openapi";
