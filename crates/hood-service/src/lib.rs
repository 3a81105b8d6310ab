#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod captcha;
pub mod email;

#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub mod reqwest;

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

pub use captcha::{CaptchaProvider, CaptchaService, CaptchaVerdict};
pub use email::{EmailAddress, EmailAttachment, EmailMessage, EmailProvider, EmailReceipt, EmailService};
pub use error::{BoxedError, Error, ErrorKind, Result};

/// Tracing target for email delivery.
pub const TRACING_TARGET_EMAIL: &str = "hood_service::email";

/// Tracing target for captcha verification.
pub const TRACING_TARGET_CAPTCHA: &str = "hood_service::captcha";
