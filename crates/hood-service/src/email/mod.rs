//! Transactional email delivery.

mod message;
mod service;

pub use message::{EmailAddress, EmailAttachment, EmailMessage, EmailReceipt};
pub use service::EmailService;

use crate::Result;

/// Core trait for transactional email delivery.
///
/// Implement this trait to plug in another email provider.
#[async_trait::async_trait]
pub trait EmailProvider: Send + Sync {
    /// Sends a single message.
    async fn send(&self, message: &EmailMessage) -> Result<EmailReceipt>;
}
