//! Captcha service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{CaptchaProvider, CaptchaVerdict};
use crate::{Result, TRACING_TARGET_CAPTCHA};

/// Minimum score a verdict needs to pass, unless configured otherwise.
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Captcha service wrapper with observability.
///
/// Wraps any [`CaptchaProvider`] and applies the score threshold.
#[derive(Clone)]
pub struct CaptchaService {
    inner: Arc<dyn CaptchaProvider>,
    min_score: f64,
}

impl fmt::Debug for CaptchaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptchaService")
            .field("min_score", &self.min_score)
            .finish_non_exhaustive()
    }
}

impl CaptchaService {
    /// Creates a new captcha service wrapper with the default threshold.
    pub fn new<P>(provider: P) -> Self
    where
        P: CaptchaProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Sets the minimum score a verdict needs to pass.
    #[must_use]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Returns the configured threshold.
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Verifies a token and returns the raw verdict.
    pub async fn verify(&self, token: &str) -> Result<CaptchaVerdict> {
        let started_at = Instant::now();
        let result = self.inner.verify(token).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(verdict) if verdict.skipped => {
                tracing::warn!(
                    target: TRACING_TARGET_CAPTCHA,
                    "Captcha verification skipped"
                );
            }
            Ok(verdict) => {
                tracing::debug!(
                    target: TRACING_TARGET_CAPTCHA,
                    success = verdict.success,
                    score = ?verdict.score,
                    error_codes = ?verdict.error_codes,
                    elapsed_ms = elapsed.as_millis(),
                    "Captcha token verified"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_CAPTCHA,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Captcha verification failed"
                );
            }
        }

        result
    }

    /// Returns whether the token belongs to a human visitor.
    ///
    /// Verification errors are returned to the caller, which decides how to
    /// treat an unreachable verifier.
    pub async fn is_human(&self, token: &str) -> Result<bool> {
        let verdict = self.verify(token).await?;
        let passes = verdict.passes(self.min_score);

        if !passes {
            tracing::info!(
                target: TRACING_TARGET_CAPTCHA,
                success = verdict.success,
                score = ?verdict.score,
                min_score = self.min_score,
                "Captcha rejected request"
            );
        }

        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};

    struct Fixed(Option<CaptchaVerdict>);

    #[async_trait::async_trait]
    impl CaptchaProvider for Fixed {
        async fn verify(&self, _token: &str) -> Result<CaptchaVerdict> {
            self.0.clone().ok_or_else(Error::network_error)
        }
    }

    fn scored(score: f64) -> Fixed {
        Fixed(Some(CaptchaVerdict {
            success: true,
            score: Some(score),
            ..CaptchaVerdict::default()
        }))
    }

    #[tokio::test]
    async fn applies_threshold() {
        assert!(CaptchaService::new(scored(0.7)).is_human("t").await.unwrap());
        assert!(!CaptchaService::new(scored(0.4)).is_human("t").await.unwrap());
        assert!(
            CaptchaService::new(scored(0.4))
                .with_min_score(0.3)
                .is_human("t")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn skipped_check_passes() {
        let service = CaptchaService::new(Fixed(Some(CaptchaVerdict::skipped())));
        assert!(service.is_human("t").await.unwrap());
    }

    #[tokio::test]
    async fn propagates_errors() {
        let error = CaptchaService::new(Fixed(None)).is_human("t").await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::NetworkError);
    }
}
