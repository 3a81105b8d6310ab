//! Brevo transactional email client.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
#[cfg(feature = "config")]
use clap::Args;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::client::{build_http_client, error_for_status};
use super::{Error, ReqwestConfig, TRACING_TARGET};
use crate::{
    EmailAddress, EmailAttachment, EmailMessage, EmailProvider, EmailReceipt, EmailService,
};

/// Default Brevo API origin.
pub const DEFAULT_BREVO_BASE_URL: &str = "https://api.brevo.com";

/// Path of the transactional email endpoint.
const SEND_EMAIL_PATH: &str = "/v3/smtp/email";

/// Brevo API configuration.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct BrevoConfig {
    /// Brevo API key. Sending fails while it is not set.
    #[cfg_attr(feature = "config", arg(long, env = "BREVO_API_KEY"))]
    #[serde(default)]
    pub brevo_api_key: Option<String>,

    /// Brevo API origin.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "BREVO_BASE_URL", default_value = DEFAULT_BREVO_BASE_URL)
    )]
    #[serde(default = "default_base_url")]
    pub brevo_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BREVO_BASE_URL.to_owned()
}

impl fmt::Debug for BrevoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrevoConfig")
            .field("brevo_api_key", &self.brevo_api_key.as_ref().map(|_| "***"))
            .field("brevo_base_url", &self.brevo_base_url)
            .finish()
    }
}

impl Default for BrevoConfig {
    fn default() -> Self {
        Self {
            brevo_api_key: None,
            brevo_base_url: default_base_url(),
        }
    }
}

impl BrevoConfig {
    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.brevo_api_key = Some(api_key.into());
        self
    }

    /// Sets the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.brevo_base_url = base_url.into();
        self
    }

    /// Returns the API key, treating an empty value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.brevo_api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the full URL of the transactional email endpoint.
    pub fn send_email_url(&self) -> crate::Result<url::Url> {
        let base = url::Url::parse(&self.brevo_base_url).map_err(|e| {
            crate::Error::configuration()
                .with_message(format!("Invalid Brevo base URL: {}", self.brevo_base_url))
                .with_source(e)
        })?;

        base.join(SEND_EMAIL_PATH).map_err(|e| {
            crate::Error::configuration()
                .with_message("Invalid Brevo endpoint URL")
                .with_source(e)
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendSmtpEmail<'a> {
    sender: &'a EmailAddress,
    to: &'a [EmailAddress],
    subject: &'a str,
    html_content: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachment: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    content: String,
    name: &'a str,
}

impl<'a> From<&'a EmailAttachment> for Attachment<'a> {
    fn from(attachment: &'a EmailAttachment) -> Self {
        Self {
            content: STANDARD.encode(&attachment.content),
            name: &attachment.name,
        }
    }
}

impl<'a> From<&'a EmailMessage> for SendSmtpEmail<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            sender: &message.sender,
            to: &message.to,
            subject: &message.subject,
            html_content: &message.html_content,
            attachment: message.attachments.iter().map(Attachment::from).collect(),
        }
    }
}

struct BrevoClientInner {
    http: Client,
    config: BrevoConfig,
}

/// Brevo client implementing [`EmailProvider`].
#[derive(Clone)]
pub struct BrevoClient {
    inner: Arc<BrevoClientInner>,
}

impl fmt::Debug for BrevoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrevoClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl BrevoClient {
    /// Creates a new Brevo client.
    ///
    /// A missing API key is not an error here: the site still serves pages,
    /// and every send fails with a configuration error.
    pub fn new(config: BrevoConfig, http: &ReqwestConfig) -> crate::Result<Self> {
        config.send_email_url()?;

        if config.api_key().is_none() {
            tracing::warn!(
                target: TRACING_TARGET,
                "Brevo API key is not set, emails will not be sent"
            );
        }

        let inner = BrevoClientInner {
            http: build_http_client(http)?,
            config,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &BrevoConfig {
        &self.inner.config
    }

    /// Converts this client into an [`EmailService`].
    pub fn into_service(self) -> EmailService {
        EmailService::new(self)
    }
}

#[async_trait::async_trait]
impl EmailProvider for BrevoClient {
    async fn send(&self, message: &EmailMessage) -> crate::Result<EmailReceipt> {
        let Some(api_key) = self.config().api_key() else {
            return Err(crate::Error::configuration().with_message("Brevo API key is not set"));
        };

        let url = self.config().send_email_url()?;
        let payload = SendSmtpEmail::from(message);

        tracing::debug!(
            target: TRACING_TARGET,
            url = %url,
            recipients = payload.to.len(),
            attachments = payload.attachment.len(),
            "Posting transactional email"
        );

        let response = self
            .inner
            .http
            .post(url)
            .header("api-key", api_key)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(Error::from)?;

        let response = error_for_status(response).await?;
        let receipt = response
            .json::<EmailReceipt>()
            .await
            .unwrap_or_default();

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_brevo_payload() {
        let message = EmailMessage::new(
            EmailAddress::new("website@example.com").with_name("Consultation from Jane Doe"),
            "New Consultation: Corporate Law",
            "<p>Hi</p>",
        )
        .with_recipient(EmailAddress::new("office@example.com").with_name("Office"))
        .with_attachment(EmailAttachment::new("cv.pdf", b"%PDF-".to_vec()));

        let json = serde_json::to_value(SendSmtpEmail::from(&message)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "sender": { "email": "website@example.com", "name": "Consultation from Jane Doe" },
                "to": [{ "email": "office@example.com", "name": "Office" }],
                "subject": "New Consultation: Corporate Law",
                "htmlContent": "<p>Hi</p>",
                "attachment": [{ "content": "JVBERi0=", "name": "cv.pdf" }],
            })
        );
    }

    #[test]
    fn omits_empty_attachments() {
        let message = EmailMessage::new(EmailAddress::new("a@example.com"), "s", "b");
        let json = serde_json::to_value(SendSmtpEmail::from(&message)).unwrap();
        assert!(json.get("attachment").is_none());
    }

    #[test]
    fn builds_endpoint_url() {
        let config = BrevoConfig::default();
        assert_eq!(
            config.send_email_url().unwrap().as_str(),
            "https://api.brevo.com/v3/smtp/email"
        );

        let config = BrevoConfig::default().with_base_url("not a url");
        assert!(config.send_email_url().is_err());
    }

    #[test]
    fn hides_api_key_in_debug() {
        let config = BrevoConfig::default().with_api_key("xkeysib-secret");
        assert!(!format!("{config:?}").contains("xkeysib-secret"));
    }

    #[tokio::test]
    async fn missing_api_key_fails_send() {
        let client = BrevoClient::new(BrevoConfig::default(), &ReqwestConfig::default()).unwrap();
        let message = EmailMessage::new(EmailAddress::new("a@example.com"), "s", "b")
            .with_recipient(EmailAddress::new("b@example.com"));

        let error = client.send(&message).await.unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::Configuration);
    }
}
