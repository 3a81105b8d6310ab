use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A mailbox: an address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    /// Creates a mailbox without a display name.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    /// File name shown to the recipient.
    pub name: String,
    /// Raw file contents.
    pub content: Bytes,
}

impl EmailAttachment {
    /// Creates a new attachment.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A transactional HTML email.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub sender: EmailAddress,
    pub to: Vec<EmailAddress>,
    pub subject: String,
    /// Complete HTML body. Callers escape any user input they interpolate.
    pub html_content: String,
    pub attachments: Vec<EmailAttachment>,
}

impl EmailMessage {
    /// Creates a message without recipients or attachments.
    pub fn new(
        sender: EmailAddress,
        subject: impl Into<String>,
        html_content: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            to: Vec::new(),
            subject: subject.into(),
            html_content: html_content.into(),
            attachments: Vec::new(),
        }
    }

    /// Adds a recipient.
    pub fn with_recipient(mut self, recipient: EmailAddress) -> Self {
        self.to.push(recipient);
        self
    }

    /// Adds an attachment.
    pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Returns the total size of all attachments in bytes.
    pub fn attachments_size(&self) -> usize {
        self.attachments.iter().map(|a| a.content.len()).sum()
    }
}

/// Acknowledgement returned by the provider once a message is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReceipt {
    /// Provider-assigned message identifier, when the provider returns one.
    #[serde(default)]
    pub message_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_builder() {
        let message = EmailMessage::new(
            EmailAddress::new("website@example.com").with_name("Website"),
            "Subject",
            "<p>Body</p>",
        )
        .with_recipient(EmailAddress::new("office@example.com").with_name("Office"))
        .with_attachment(EmailAttachment::new("cv.pdf", b"%PDF-1.7".to_vec()));

        assert_eq!(message.sender.name.as_deref(), Some("Website"));
        assert_eq!(message.to.len(), 1);
        assert_eq!(message.attachments_size(), 8);
    }

    #[test]
    fn address_skips_missing_name() {
        let json = serde_json::to_value(EmailAddress::new("a@example.com")).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@example.com" }));
    }

    #[test]
    fn receipt_reads_message_id() {
        let receipt: EmailReceipt =
            serde_json::from_str(r#"{"messageId":"<2024@smtp-relay.mailin.fr>"}"#).unwrap();
        assert_eq!(
            receipt.message_id.as_deref(),
            Some("<2024@smtp-relay.mailin.fr>")
        );
    }
}
