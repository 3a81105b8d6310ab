//! Email service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{EmailMessage, EmailProvider, EmailReceipt};
use crate::{Error, Result, TRACING_TARGET_EMAIL};

/// Email service wrapper with observability.
///
/// Adds structured logging to any [`EmailProvider`]. The provider is wrapped
/// in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct EmailService {
    inner: Arc<dyn EmailProvider>,
}

impl fmt::Debug for EmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailService").finish_non_exhaustive()
    }
}

impl EmailService {
    /// Creates a new email service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: EmailProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Sends a message through the wrapped provider.
    ///
    /// Messages without recipients are rejected before reaching the provider.
    pub async fn send(&self, message: &EmailMessage) -> Result<EmailReceipt> {
        if message.to.is_empty() {
            return Err(Error::new(crate::ErrorKind::InvalidInput)
                .with_message("Email message has no recipients"));
        }

        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET_EMAIL,
            recipients = message.to.len(),
            attachments = message.attachments.len(),
            attachments_size = message.attachments_size(),
            "Sending email"
        );

        let result = self.inner.send(message).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(receipt) => {
                tracing::info!(
                    target: TRACING_TARGET_EMAIL,
                    message_id = ?receipt.message_id,
                    elapsed_ms = elapsed.as_millis(),
                    "Email sent"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_EMAIL,
                    error = %error,
                    kind = %error.kind,
                    elapsed_ms = elapsed.as_millis(),
                    "Email delivery failed"
                );
            }
        }

        result
    }
}
