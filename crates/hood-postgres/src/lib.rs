#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// The content store migrations, compiled into the binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

/// Pool creation and settings.
pub const TRACING_TARGET_CLIENT: &str = "hood_postgres::client";

/// Repository reads and the article view write.
pub const TRACING_TARGET_QUERY: &str = "hood_postgres::queries";

/// Startup migrations.
pub const TRACING_TARGET_MIGRATION: &str = "hood_postgres::migrations";

/// Handshakes and checkouts.
pub const TRACING_TARGET_CONNECTION: &str = "hood_postgres::connection";

mod client;
pub mod model;
pub mod query;
mod schema;
pub mod types;

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::ConnectionError;
use diesel::result::Error;
pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, MigrationResult, PgClient, PgConfig, PgConn, PooledConnection,
    run_pending_migrations,
};

pub mod error {
    //! Driver and pool error types that [`PgError`] is built from.
    //!
    //! [`PgError`]: crate::PgError

    /// Boxed source of a migration failure.
    pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

    pub use deadpool::managed::TimeoutType;
    pub use diesel::result::{ConnectionError as DieselConnectionError, Error as DieselError};
    pub use diesel_async::pooled_connection::PoolError as DieselPoolError;
    pub use diesel_async::pooled_connection::deadpool::PoolError as DeadpoolError;
}

/// Error type for all PostgreSQL database operations.
///
/// Every repository method returns this instead of a default value paired
/// with a failure flag, so callers decide how a store failure degrades.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// The settings were rejected before any connection was attempted.
    #[error("invalid content store settings: {0}")]
    Config(String),

    /// No connection could be checked out, created or recycled in time.
    #[error("content store timed out ({0:?})")]
    Timeout(TimeoutType),

    /// The server refused or dropped the connection.
    #[error("content store connection failed: {0}")]
    Connection(#[from] ConnectionError),

    /// A startup migration failed to apply.
    #[error("content store migration failed: {0}")]
    Migration(error::BoxError),

    /// A repository query failed, including a missing row on a write.
    #[error("content store query failed: {0}")]
    Query(#[from] Error),

    /// A pool failure none of the other variants describe.
    #[error("content store error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl From<error::DeadpoolError> for PgError {
    fn from(value: error::DeadpoolError) -> Self {
        use error::{DeadpoolError, DieselPoolError};

        match value {
            DeadpoolError::Timeout(timeout) => Self::Timeout(timeout),
            DeadpoolError::Backend(DieselPoolError::QueryError(error)) => Self::Query(error),
            DeadpoolError::Backend(DieselPoolError::ConnectionError(error)) => {
                Self::Connection(error)
            }
            DeadpoolError::PostCreateHook(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_CONNECTION,
                    error = %err,
                    "Unexpected post-create hook error"
                );
                Self::Unexpected(err.to_string().into())
            }
            DeadpoolError::NoRuntimeSpecified => {
                tracing::error!(
                    target: TRACING_TARGET_CONNECTION,
                    "No tokio runtime specified for connection pool"
                );
                Self::Unexpected("No runtime specified".into())
            }
            DeadpoolError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
        }
    }
}

/// Specialized [`Result`] type for database operations.
pub type PgResult<T, E = PgError> = Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeouts_keep_their_kind() {
        let error = PgError::from(error::DeadpoolError::Timeout(TimeoutType::Wait));
        assert!(matches!(error, PgError::Timeout(TimeoutType::Wait)));
    }

    #[test]
    fn pool_query_errors_pass_through() {
        let error = PgError::from(error::DeadpoolError::Backend(
            error::DieselPoolError::QueryError(Error::NotFound),
        ));
        assert!(matches!(error, PgError::Query(Error::NotFound)));
    }

    #[test]
    fn closed_pool_maps_to_connection_error() {
        let error = PgError::from(error::DeadpoolError::Closed);
        assert!(matches!(
            error,
            PgError::Connection(ConnectionError::InvalidConnectionUrl(_))
        ));
    }
}
