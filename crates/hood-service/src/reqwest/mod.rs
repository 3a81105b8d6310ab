//! Reqwest-based clients for Brevo and reCAPTCHA.
//!
//! # Example
//!
//! ```rust,ignore
//! use hood_service::reqwest::{BrevoClient, BrevoConfig, ReqwestConfig};
//! use hood_service::EmailService;
//!
//! let client = BrevoClient::new(BrevoConfig::default(), &ReqwestConfig::default())?;
//! let service: EmailService = client.into_service();
//! ```

mod brevo;
mod client;
mod error;
mod recaptcha;

pub use brevo::{BrevoClient, BrevoConfig, DEFAULT_BREVO_BASE_URL};
pub use client::{DEFAULT_TIMEOUT_SECS, ReqwestConfig, build_http_client};
pub use error::{Error, Result};
pub use recaptcha::{DEFAULT_RECAPTCHA_VERIFY_URL, RecaptchaClient, RecaptchaConfig};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "hood_service::reqwest";
