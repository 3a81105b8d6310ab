//! CORS, body limits, compression and the fixed security headers.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::http::header::{self, HeaderName, HeaderValue};
#[cfg(feature = "config")]
use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Default maximum request body size: 8 MiB.
///
/// Leaves room for a 5 MiB résumé plus the multipart framing.
pub const DEFAULT_MAX_BODY_SIZE: usize = 8 * 1024 * 1024;

const DEFAULT_CORS_MAX_AGE: u64 = 3600;

/// Origins of the development frontend, used when none are configured.
const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Headers set on every response. The API serves JSON only, so nothing may frame it.
const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=31536000; includeSubDomains",
    ),
];

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS, body limits, compression and the security headers.
    fn with_security(self, config: &SecurityConfig) -> Self;

    /// Layers security middleware for the development frontend.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, config: &SecurityConfig) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(config.allowed_origins())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(config.cors_allow_credentials)
            .max_age(Duration::from_secs(config.cors_max_age));

        let mut router = self
            .layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(RequestBodyLimitLayer::new(config.max_body_size))
            .layer(CompressionLayer::new())
            .layer(cors_layer);

        for (name, value) in SECURITY_HEADERS {
            router = router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ));
        }

        router
    }

    fn with_default_security(self) -> Self {
        self.with_security(&SecurityConfig::default())
    }
}

/// Cross-origin rules and the request body limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct SecurityConfig {
    /// Frontend origins allowed to call the API; the local dev server when empty
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-origins", env = "CORS_ORIGINS", value_delimiter = ',')
    )]
    pub cors_origins: Vec<String>,

    /// Seconds browsers may cache a preflight response
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_MAX_AGE", default_value_t = DEFAULT_CORS_MAX_AGE)
    )]
    pub cors_max_age: u64,

    /// Whether browsers send cookies with cross-origin requests
    #[cfg_attr(
        feature = "config",
        arg(
            long,
            env = "CORS_ALLOW_CREDENTIALS",
            default_value_t = true,
            action = ArgAction::Set
        )
    )]
    pub cors_allow_credentials: bool,

    /// Largest accepted request body, in bytes
    #[cfg_attr(
        feature = "config",
        arg(long, env = "MAX_BODY_SIZE", default_value_t = DEFAULT_MAX_BODY_SIZE)
    )]
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            cors_max_age: DEFAULT_CORS_MAX_AGE,
            cors_allow_credentials: true,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl SecurityConfig {
    /// Returns the parsed origins, falling back to the development frontend.
    ///
    /// Origins that are not valid header values are skipped.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        if self.cors_origins.is_empty() {
            return DEV_ORIGINS.map(HeaderValue::from_static).to_vec();
        }

        self.cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }

    /// Rejects a zero body limit and origins that are not header values.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_body_size == 0 {
            return Err("maximum body size must be greater than zero".to_owned());
        }

        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(format!("CORS origin '{origin}' is not a valid header value"));
        }

        Ok(())
    }
}
