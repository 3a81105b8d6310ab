//! Form submission outcome.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use validator::ValidationErrors;

/// Outcome of a contact or application submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, JsonSchema, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    /// The email was accepted for delivery.
    Success,
    /// One or more fields are invalid.
    ValidationFailed,
    /// The reCAPTCHA check failed.
    BotDetected,
    /// The email could not be sent.
    ServerError,
}

impl SubmissionStatus {
    /// Returns the HTTP status code reported with this outcome.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::BotDetected => StatusCode::FORBIDDEN,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a form submission response.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Validation codes keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Submission {
    fn new(status: SubmissionStatus) -> Self {
        Self {
            status,
            message: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn success() -> Self {
        Self::new(SubmissionStatus::Success)
    }

    pub fn validation_failed(errors: &ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, list)| {
                let codes = list.iter().map(|error| error.code.to_string()).collect();
                (field.to_string(), codes)
            })
            .collect();

        Self {
            errors,
            ..Self::new(SubmissionStatus::ValidationFailed)
        }
    }

    pub fn bot_detected() -> Self {
        Self {
            message: Some("Security check failed".to_owned()),
            ..Self::new(SubmissionStatus::BotDetected)
        }
    }

    pub fn server_error() -> Self {
        Self::new(SubmissionStatus::ServerError)
    }
}

impl IntoResponse for Submission {
    fn into_response(self) -> Response {
        (self.status.status_code(), Json(self)).into_response()
    }
}

impl aide::OperationOutput for Submission {
    type Inner = Self;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<Self>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    #[test]
    fn serializes_without_empty_fields() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_value(Submission::success())?,
            serde_json::json!({"status": "success"})
        );
        assert_eq!(
            serde_json::to_value(Submission::bot_detected())?,
            serde_json::json!({"status": "bot_detected", "message": "Security check failed"})
        );
        Ok(())
    }

    #[test]
    fn collects_validation_codes() -> anyhow::Result<()> {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("invalid_email"));
        errors.add("phone", ValidationError::new("field_required"));

        let submission = Submission::validation_failed(&errors);
        assert_eq!(
            serde_json::to_value(&submission)?,
            serde_json::json!({
                "status": "validation_failed",
                "errors": {
                    "email": ["invalid_email"],
                    "phone": ["field_required"],
                },
            })
        );
        Ok(())
    }

    #[test]
    fn status_codes() {
        assert_eq!(SubmissionStatus::Success.status_code(), StatusCode::OK);
        assert_eq!(SubmissionStatus::ValidationFailed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(SubmissionStatus::BotDetected.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            SubmissionStatus::ServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
