//! reCAPTCHA v3 token verifier.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "config")]
use clap::Args;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::client::{build_http_client, error_for_status};
use super::{Error, ReqwestConfig, TRACING_TARGET};
use crate::captcha::DEFAULT_MIN_SCORE;
use crate::{CaptchaProvider, CaptchaService, CaptchaVerdict};

/// Default Google `siteverify` endpoint.
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// reCAPTCHA configuration.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct RecaptchaConfig {
    /// Server-side secret key. Verification is skipped while it is not set.
    #[cfg_attr(feature = "config", arg(long, env = "RECAPTCHA_SECRET_KEY"))]
    #[serde(default)]
    pub recaptcha_secret_key: Option<String>,

    /// Verification endpoint.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "RECAPTCHA_VERIFY_URL", default_value = DEFAULT_RECAPTCHA_VERIFY_URL)
    )]
    #[serde(default = "default_verify_url")]
    pub recaptcha_verify_url: String,

    /// Minimum score for a request to count as human.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "RECAPTCHA_MIN_SCORE", default_value_t = DEFAULT_MIN_SCORE)
    )]
    #[serde(default = "default_min_score")]
    pub recaptcha_min_score: f64,
}

fn default_verify_url() -> String {
    DEFAULT_RECAPTCHA_VERIFY_URL.to_owned()
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

impl fmt::Debug for RecaptchaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecaptchaConfig")
            .field(
                "recaptcha_secret_key",
                &self.recaptcha_secret_key.as_ref().map(|_| "***"),
            )
            .field("recaptcha_verify_url", &self.recaptcha_verify_url)
            .field("recaptcha_min_score", &self.recaptcha_min_score)
            .finish()
    }
}

impl Default for RecaptchaConfig {
    fn default() -> Self {
        Self {
            recaptcha_secret_key: None,
            recaptcha_verify_url: default_verify_url(),
            recaptcha_min_score: default_min_score(),
        }
    }
}

impl RecaptchaConfig {
    /// Sets the secret key.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.recaptcha_secret_key = Some(secret_key.into());
        self
    }

    /// Returns the secret key, treating an empty value as unset.
    pub fn secret_key(&self) -> Option<&str> {
        self.recaptcha_secret_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    /// Validates the score threshold and the endpoint.
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.recaptcha_min_score) {
            return Err(crate::Error::configuration().with_message(format!(
                "reCAPTCHA minimum score {} must be between 0.0 and 1.0",
                self.recaptcha_min_score
            )));
        }

        url::Url::parse(&self.recaptcha_verify_url).map_err(|e| {
            crate::Error::configuration()
                .with_message(format!(
                    "Invalid reCAPTCHA verify URL: {}",
                    self.recaptcha_verify_url
                ))
                .with_source(e)
        })?;

        Ok(())
    }
}

struct RecaptchaClientInner {
    http: Client,
    config: RecaptchaConfig,
}

/// reCAPTCHA client implementing [`CaptchaProvider`].
#[derive(Clone)]
pub struct RecaptchaClient {
    inner: Arc<RecaptchaClientInner>,
}

impl fmt::Debug for RecaptchaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecaptchaClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl RecaptchaClient {
    /// Creates a new reCAPTCHA client.
    pub fn new(config: RecaptchaConfig, http: &ReqwestConfig) -> crate::Result<Self> {
        config.validate()?;

        if config.secret_key().is_none() {
            tracing::warn!(
                target: TRACING_TARGET,
                "reCAPTCHA secret key is not set, bot detection is disabled"
            );
        }

        let inner = RecaptchaClientInner {
            http: build_http_client(http)?,
            config,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &RecaptchaConfig {
        &self.inner.config
    }

    /// Converts this client into a [`CaptchaService`] using the configured threshold.
    pub fn into_service(self) -> CaptchaService {
        let min_score = self.config().recaptcha_min_score;
        CaptchaService::new(self).with_min_score(min_score)
    }
}

#[async_trait::async_trait]
impl CaptchaProvider for RecaptchaClient {
    async fn verify(&self, token: &str) -> crate::Result<CaptchaVerdict> {
        let Some(secret) = self.config().secret_key() else {
            return Ok(CaptchaVerdict::skipped());
        };

        let response = self
            .inner
            .http
            .post(&self.config().recaptcha_verify_url)
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await
            .map_err(Error::from)?;

        let response = error_for_status(response).await?;
        let verdict = response
            .json::<CaptchaVerdict>()
            .await
            .map_err(Error::from)?;

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_min_score() {
        let mut config = RecaptchaConfig::default();
        assert!(config.validate().is_ok());

        config.recaptcha_min_score = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn hides_secret_in_debug() {
        let config = RecaptchaConfig::default().with_secret_key("6Lc-secret");
        assert!(!format!("{config:?}").contains("6Lc-secret"));
    }

    #[tokio::test]
    async fn skips_without_secret() {
        let client =
            RecaptchaClient::new(RecaptchaConfig::default(), &ReqwestConfig::default()).unwrap();

        let verdict = client.verify("token").await.unwrap();
        assert!(verdict.skipped);
        assert!(client.into_service().is_human("token").await.unwrap());
    }
}
