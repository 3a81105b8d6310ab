//! Content store error to HTTP error conversion.
//!
//! Store failures never leak details to the client. Each one is logged and
//! reported as a plain internal server error.

use hood_postgres::PgError;

use super::http_error::{Error, ErrorKind};

const TRACING_TARGET: &str = "hood_server::handler::postgres";

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout"
                );
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
            }
            PgError::Query(query_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "database query error"
                );
            }
            PgError::Unexpected(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "unexpected database error"
                );
            }
        }

        ErrorKind::InternalServerError.into_error()
    }
}
