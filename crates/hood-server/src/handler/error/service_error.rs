//! Email and captcha error to HTTP error conversion.

use hood_service::ErrorKind as ServiceErrorKind;

use super::http_error::{Error, ErrorKind};

const TRACING_TARGET: &str = "hood_server::handler::service";

impl From<hood_service::Error> for Error<'static> {
    fn from(error: hood_service::Error) -> Self {
        match error.kind {
            ServiceErrorKind::NetworkError | ServiceErrorKind::Timeout => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = %error.kind,
                    "external service unreachable"
                );
            }
            ServiceErrorKind::Configuration | ServiceErrorKind::Authentication => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = %error.kind,
                    "external service misconfigured"
                );
            }
            _ => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = %error.kind,
                    "external service call failed"
                );
            }
        }

        let context = error
            .message
            .unwrap_or_else(|| error.kind.as_ref().to_owned());

        match error.kind {
            ServiceErrorKind::Timeout => ErrorKind::InternalServerError
                .with_message("External service timed out")
                .with_context(context),
            ServiceErrorKind::Configuration => ErrorKind::InternalServerError
                .with_message("External service is not configured")
                .with_context(context),
            _ => ErrorKind::InternalServerError
                .with_message("External service call failed")
                .with_context(context),
        }
    }
}
