//! In-memory providers for tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    CaptchaProvider, CaptchaService, CaptchaVerdict, EmailMessage, EmailProvider, EmailReceipt,
    EmailService, Error, ErrorKind, Result,
};

/// Email provider that records every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct MockEmailProvider {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failure: Option<ErrorKind>,
}

impl MockEmailProvider {
    /// Creates a provider that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that rejects every message with the given kind.
    pub fn failing(kind: ErrorKind) -> Self {
        Self {
            failure: Some(kind),
            ..Self::default()
        }
    }

    /// Returns the messages accepted so far.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Wraps a clone of this provider into an [`EmailService`].
    pub fn service(&self) -> EmailService {
        EmailService::new(self.clone())
    }
}

#[async_trait::async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailReceipt> {
        if let Some(kind) = self.failure {
            return Err(Error::new(kind).with_message("Mock email provider failure"));
        }

        let mut sent = self.sent.lock().unwrap_or_else(PoisonError::into_inner);
        sent.push(message.clone());

        Ok(EmailReceipt {
            message_id: Some(format!("mock-{}", sent.len())),
        })
    }
}

/// Captcha provider that returns a scripted outcome.
#[derive(Debug, Clone)]
pub struct MockCaptchaProvider {
    outcome: std::result::Result<CaptchaVerdict, ErrorKind>,
}

impl MockCaptchaProvider {
    /// Accepts every token with the given score.
    pub fn with_score(score: f64) -> Self {
        Self {
            outcome: Ok(CaptchaVerdict {
                success: true,
                score: Some(score),
                ..CaptchaVerdict::default()
            }),
        }
    }

    /// Accepts every token with a perfect score.
    pub fn human() -> Self {
        Self::with_score(1.0)
    }

    /// Rejects every token as invalid.
    pub fn invalid() -> Self {
        Self {
            outcome: Ok(CaptchaVerdict {
                success: false,
                error_codes: vec!["invalid-input-response".to_owned()],
                ..CaptchaVerdict::default()
            }),
        }
    }

    /// Fails every verification with the given kind.
    pub fn failing(kind: ErrorKind) -> Self {
        Self { outcome: Err(kind) }
    }

    /// Wraps this provider into a [`CaptchaService`].
    pub fn service(self) -> CaptchaService {
        CaptchaService::new(self)
    }
}

#[async_trait::async_trait]
impl CaptchaProvider for MockCaptchaProvider {
    async fn verify(&self, _token: &str) -> Result<CaptchaVerdict> {
        match &self.outcome {
            Ok(verdict) => Ok(verdict.clone()),
            Err(kind) => Err(Error::new(*kind).with_message("Mock captcha provider failure")),
        }
    }
}
