//! Multipart form extractor.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{FromRequest, Multipart as AxumMultipart, Request};
use axum::http::StatusCode;
use derive_more::{Deref, DerefMut, From};

use super::sanitize_error_message;
use crate::handler::{Error, ErrorKind};

/// Multipart extractor that rejects with a JSON error body.
///
/// Errors raised while reading individual fields convert into the same
/// error type, so handlers can use `?` on [`AxumMultipart::next_field`].
#[must_use]
#[derive(Debug, Deref, DerefMut, From)]
pub struct Multipart(pub AxumMultipart);

impl Multipart {
    #[inline]
    pub fn into_inner(self) -> AxumMultipart {
        self.0
    }
}

impl<S> FromRequest<S> for Multipart
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumMultipart::from_request(req, state)
            .await
            .map(Multipart)
            .map_err(Into::into)
    }
}

impl From<MultipartRejection> for Error<'static> {
    fn from(rejection: MultipartRejection) -> Self {
        match rejection {
            MultipartRejection::InvalidBoundary(_) => ErrorKind::BadRequest
                .with_message("Invalid multipart boundary")
                .with_context("Expected 'multipart/form-data' with a boundary parameter"),
            _ => ErrorKind::BadRequest
                .with_message("Invalid multipart request")
                .with_context(sanitize_error_message(&rejection.body_text())),
        }
    }
}

impl From<MultipartError> for Error<'static> {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ErrorKind::PayloadTooLarge.into_error();
        }

        ErrorKind::BadRequest
            .with_message("Malformed multipart field")
            .with_context(sanitize_error_message(&error.body_text()))
    }
}

impl aide::OperationInput for Multipart {
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumMultipart::operation_input(ctx, operation);
    }
}
