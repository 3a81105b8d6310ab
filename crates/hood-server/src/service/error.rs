//! Service layer error types.
//!
//! These errors only occur while the application state is assembled at
//! startup. Request-time failures use [`handler::Error`] instead.
//!
//! [`handler::Error`]: crate::handler::Error

use thiserror::Error;

/// Type-erased source of a [`ServiceError`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for service operations.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Startup failure of the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration error (invalid or missing values).
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Database connection or migration error.
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// External service error (Brevo, reCAPTCHA).
    #[error("External service error ({service}): {message}")]
    ExternalService {
        service: String,
        message: String,
        #[source]
        source: Option<BoxedError>,
    },
}

impl ServiceError {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new database error with source.
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new external service error with source.
    pub fn external_service_with_source(
        service: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "configuration",
            Self::Database { .. } => "database",
            Self::ExternalService { .. } => "external_service",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn error_creation() {
        let error = ServiceError::config("Sender email cannot be empty");
        assert_eq!(error.category(), "configuration");
        assert!(error.to_string().contains("Sender email cannot be empty"));
        assert!(error.source().is_none());
    }

    #[test]
    fn external_service_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad url");
        let error = ServiceError::external_service_with_source("Brevo", "Failed to create client", source);

        assert_eq!(error.category(), "external_service");
        assert!(error.to_string().contains("Brevo"));
        assert!(error.source().is_some());
    }
}
