//! URL-encoded form extractor.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form as AxumForm, FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::sanitize_error_message;
use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "hood_server::extract::form";

/// Form extractor that rejects with a JSON error body.
///
/// Form structs in this crate declare every field optional, so a rejection
/// means the body itself is unreadable rather than a field is missing.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Form<T>(pub T);

impl<T> Form<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(form)) => Ok(Form(form)),
            Err(rejection) => Err(enhance_form_error(rejection)),
        }
    }
}

fn enhance_form_error(rejection: FormRejection) -> Error<'static> {
    tracing::debug!(
        target: TRACING_TARGET,
        error = %rejection,
        "form data parsing failed"
    );

    match rejection {
        FormRejection::FailedToDeserializeForm(err) => deserialize_error(&err.body_text()),
        FormRejection::FailedToDeserializeFormBody(err) => deserialize_error(&err.body_text()),
        FormRejection::InvalidFormContentType(_) => ErrorKind::BadRequest
            .with_message("Invalid content type for form data")
            .with_context("Expected 'application/x-www-form-urlencoded'"),
        FormRejection::BytesRejection(err) => {
            let message = err.body_text();
            if message.contains("length limit") {
                ErrorKind::PayloadTooLarge.into_error()
            } else {
                ErrorKind::BadRequest
                    .with_message("Failed to read form data")
                    .with_context(sanitize_error_message(&message))
            }
        }
        _ => ErrorKind::BadRequest.with_message("Invalid form submission"),
    }
}

fn deserialize_error(message: &str) -> Error<'static> {
    if message.contains("duplicate field") {
        ErrorKind::BadRequest
            .with_message("Duplicate form field")
            .with_context(format!(
                "The form field '{}' was provided more than once",
                extract_field_name(message).unwrap_or("unknown")
            ))
    } else if message.contains("missing field") {
        ErrorKind::BadRequest
            .with_message("Missing required form field")
            .with_context(format!(
                "The form field '{}' is required",
                extract_field_name(message).unwrap_or("unknown")
            ))
    } else {
        ErrorKind::BadRequest
            .with_message("Invalid form data")
            .with_context(sanitize_error_message(message))
    }
}

/// Reads the field name out of a serde message such as ``missing field `email` ``.
fn extract_field_name(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let end = message[start..].find('`')?;
    Some(&message[start..start + end])
}

impl<T> aide::OperationInput for Form<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumForm::<T>::operation_input(ctx, operation);
    }
}
