//! Middleware configuration for the HTTP server.
//!
//! All middleware configs are re-exported from `hood-server` and support
//! both CLI arguments and environment variables.
//!
//! # Example
//!
//! ```bash
//! hood --cors-origins "https://hoodbinadel.com" --request-timeout 60
//! ```

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use hood_server::middleware::{OpenApiConfig, RecoveryConfig, SecurityConfig};
use serde::{Deserialize, Serialize};

use super::TRACING_TARGET_CONFIG;

/// Longest accepted request timeout, in seconds.
const MAX_REQUEST_TIMEOUT: u64 = 300;

/// Middleware configuration combining security, OpenAPI and recovery settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS origins and the request body limit.
    #[clap(flatten)]
    pub security: SecurityConfig,

    /// Paths of the OpenAPI document and the Scalar UI.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,

    /// Request timeout and panic recovery.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates timeout and size limits.
    pub fn validate(&self) -> AnyhowResult<()> {
        let timeout = self.recovery.request_timeout;
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT {
            return Err(anyhow!(
                "Request timeout {timeout} seconds is invalid. Must be between 1 and {MAX_REQUEST_TIMEOUT} seconds."
            ));
        }

        self.security.validate().map_err(|e| anyhow!(e))?;

        Ok(())
    }

    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.security.cors_origins,
            credentials = self.security.cors_allow_credentials,
            max_age_secs = self.security.cors_max_age,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            max_body_size = self.security.max_body_size,
            request_timeout_secs = self.recovery.request_timeout,
            "Request limits"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use hood_server::middleware::DEFAULT_MAX_BODY_SIZE;

    use super::*;

    fn config() -> MiddlewareConfig {
        MiddlewareConfig {
            security: SecurityConfig::default(),
            openapi: OpenApiConfig::default(),
            recovery: RecoveryConfig::default(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = config();
        assert!(config.validate().is_ok());
        assert_eq!(config.security.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        let mut config = config();

        config.recovery = RecoveryConfig::with_timeout_secs(0);
        assert!(config.validate().is_err());

        config.recovery = RecoveryConfig::with_timeout_secs(301);
        assert!(config.validate().is_err());

        config.recovery = RecoveryConfig::with_timeout_secs(60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_body_limit() {
        let mut config = config();
        config.security.max_body_size = 0;
        assert!(config.validate().is_err());
    }
}
