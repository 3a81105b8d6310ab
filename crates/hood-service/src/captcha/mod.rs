//! Bot detection for the public forms.

mod service;
mod verdict;

pub use service::{CaptchaService, DEFAULT_MIN_SCORE};
pub use verdict::CaptchaVerdict;

use crate::Result;

/// Core trait for captcha token verification.
#[async_trait::async_trait]
pub trait CaptchaProvider: Send + Sync {
    /// Verifies a token issued to the browser.
    ///
    /// Transport failures are errors; a rejected token is an `Ok` verdict
    /// with `success == false`.
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict>;
}
