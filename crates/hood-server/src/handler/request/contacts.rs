//! Contact form request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use validator::ValidationErrors;

use super::validations::{
    MIN_MESSAGE_LENGTH, check_email, check_name, check_phone, reject, require,
};

/// Practice area a consultation request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, JsonSchema, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConsultationSubject {
    /// General legal services.
    General,
    /// Corporate law.
    Corporate,
    /// Intellectual property.
    Ip,
}

impl ConsultationSubject {
    /// Returns the label shown in the office email.
    pub fn label(self, rtl: bool) -> &'static str {
        match (self, rtl) {
            (Self::General, true) => "قانون الخدمات العامة",
            (Self::General, false) => "General Legal Services",
            (Self::Corporate, true) => "قانون الشركات",
            (Self::Corporate, false) => "Corporate Law",
            (Self::Ip, true) => "قانون الملكية الفكرية",
            (Self::Ip, false) => "Intellectual Property",
        }
    }
}

/// Raw contact form as posted by the website.
///
/// Every field is optional here so that a missing field is reported with a
/// validation code instead of a deserialization error.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// One of `general`, `corporate` or `ip`.
    pub subject: Option<String>,
    pub message: Option<String>,
    /// reCAPTCHA v3 token generated by the page.
    pub recaptcha_token: Option<String>,
}

/// Contact request that passed validation.
#[derive(Debug, Clone)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: ConsultationSubject,
    pub message: String,
    pub recaptcha_token: String,
}

impl ContactForm {
    /// Validates every field and collects all failures.
    pub fn validate(self) -> Result<ContactRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = check_name(&mut errors, "firstName", self.first_name);
        let last_name = check_name(&mut errors, "lastName", self.last_name);
        let email = check_email(&mut errors, "email", self.email);
        let phone = check_phone(&mut errors, "phone", self.phone);
        let subject = check_subject(&mut errors, self.subject);
        let message = check_message(&mut errors, self.message);
        let recaptcha_token = require(
            &mut errors,
            "recaptchaToken",
            self.recaptcha_token,
            "recaptcha_required",
        );

        match (
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
            recaptcha_token,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone),
                Some(subject),
                Some(message),
                Some(recaptcha_token),
            ) if errors.is_empty() => Ok(ContactRequest {
                first_name,
                last_name,
                email,
                phone,
                subject,
                message,
                recaptcha_token,
            }),
            _ => Err(errors),
        }
    }
}

fn check_subject(
    errors: &mut ValidationErrors,
    value: Option<String>,
) -> Option<ConsultationSubject> {
    let value = require(errors, "subject", value, "field_required")?;
    match value.parse() {
        Ok(subject) => Some(subject),
        Err(_) => {
            reject(errors, "subject", "invalid_subject");
            None
        }
    }
}

fn check_message(errors: &mut ValidationErrors, value: Option<String>) -> Option<String> {
    let value = require(errors, "message", value, "field_required")?;
    if value.chars().count() < MIN_MESSAGE_LENGTH {
        reject(errors, "message", "message_too_short");
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: Some("Sara".into()),
            last_name: Some("Ahmed".into()),
            email: Some("sara@example.com".into()),
            phone: Some("+974 3312 3456".into()),
            subject: Some("corporate".into()),
            message: Some("I need advice on a merger.".into()),
            recaptcha_token: Some("token".into()),
        }
    }

    #[test]
    fn accepts_valid_form() -> anyhow::Result<()> {
        let request = valid_form()
            .validate()
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        assert_eq!(request.subject, ConsultationSubject::Corporate);
        assert_eq!(request.phone, "+974 3312 3456");
        Ok(())
    }

    #[test]
    fn collects_every_failing_field() {
        let errors = ContactForm {
            subject: Some("tax".into()),
            message: Some("short".into()),
            ..ContactForm::default()
        }
        .validate()
        .err()
        .unwrap_or_default();

        let fields = errors.field_errors();
        assert_eq!(fields.len(), 7);
        assert!(fields.keys().any(|k| k.to_string() == "recaptchaToken"));
    }

    #[test]
    fn subject_labels() {
        assert_eq!(ConsultationSubject::Ip.label(false), "Intellectual Property");
        assert_eq!(ConsultationSubject::General.label(true), "قانون الخدمات العامة");
        assert_eq!("ip".parse::<ConsultationSubject>().ok(), Some(ConsultationSubject::Ip));
    }
}
