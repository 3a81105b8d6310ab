use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON body of every error response.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// Machine-readable error name.
    pub name: Cow<'a, str>,
    /// Message safe to show to the visitor.
    pub message: Cow<'a, str>,
    /// Resource the error relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Additional debugging context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    #[serde(skip)]
    #[schemars(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "The request was refused",
        StatusCode::FORBIDDEN,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_PATH_PARAM: Self = Self::new(
        "missing_path_param",
        "Invalid request: missing required parameters",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const PAYLOAD_TOO_LARGE: Self = Self::new(
        "payload_too_large",
        "The request body is too large",
        StatusCode::PAYLOAD_TOO_LARGE,
    );
    pub const REQUEST_TIMEOUT: Self = Self::new(
        "request_timeout",
        "The request took too long to complete",
        StatusCode::REQUEST_TIMEOUT,
    );

    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Sets the resource, joining it to an existing one with `/`.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{existing}/{resource}")),
            None => resource,
        });
        self
    }

    /// Appends a sentence to the message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Cow::Owned(format!("{}. {}", self.message, message.into()));
        self
    }

    /// Sets the context, joining it to an existing one with `; `.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{existing}; {context}")),
            None => context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_resources() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("blog")
            .with_resource("article");

        assert_eq!(response.resource.as_deref(), Some("blog/article"));
    }

    #[test]
    fn appends_messages() {
        let response = ErrorResponse::NOT_FOUND.with_message("Article not found");

        assert_eq!(
            &response.message,
            "The requested resource was not found. Article not found"
        );
    }

    #[test]
    fn merges_context() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR
            .with_context("pool timeout")
            .with_context("wait");

        assert_eq!(response.context.as_deref(), Some("pool timeout; wait"));
    }

    #[test]
    fn skips_status_and_empty_fields() -> anyhow::Result<()> {
        let json = serde_json::to_value(ErrorResponse::NOT_FOUND)?;

        assert_eq!(
            json,
            serde_json::json!({
                "name": "not_found",
                "message": "The requested resource was not found",
            })
        );
        Ok(())
    }
}
