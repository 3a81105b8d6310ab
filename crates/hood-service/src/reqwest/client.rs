//! The HTTP client shared by the Brevo and reCAPTCHA clients.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Error, TRACING_TARGET};

/// Seconds a Brevo or reCAPTCHA call may take before the form fails.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest accepted outgoing request timeout.
const MAX_TIMEOUT_SECS: u64 = 60;

/// Settings of the outgoing HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ReqwestConfig {
    /// Timeout of Brevo and reCAPTCHA calls, in seconds (1-60)
    #[cfg_attr(
        feature = "config",
        arg(long = "http-timeout", env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ReqwestConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ReqwestConfig {
    /// Returns the per-request timeout.
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Checks that the timeout is between 1 and 60 seconds.
    pub fn validate(&self) -> Result<(), String> {
        if (1..=MAX_TIMEOUT_SECS).contains(&self.http_timeout) {
            Ok(())
        } else {
            Err(format!(
                "HTTP timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds"
            ))
        }
    }
}

/// Builds the client, identifying the site in the `User-Agent` header.
pub fn build_http_client(config: &ReqwestConfig) -> crate::Result<Client> {
    let user_agent = concat!("hood-bin-adel-website/", env!("CARGO_PKG_VERSION"));

    tracing::debug!(
        target: TRACING_TARGET,
        timeout_secs = config.http_timeout,
        user_agent,
        "Creating reqwest client"
    );

    let client = Client::builder()
        .timeout(config.timeout())
        .user_agent(user_agent)
        .build()
        .map_err(Error::from)?;

    Ok(client)
}

/// Reads the response body of a failed request for diagnostics.
pub(crate) async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status,
        body: body.chars().take(512).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let config = ReqwestConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn rejects_out_of_range_timeouts() {
        for http_timeout in [0, 61, 3600] {
            assert!(ReqwestConfig { http_timeout }.validate().is_err());
        }
    }
}
