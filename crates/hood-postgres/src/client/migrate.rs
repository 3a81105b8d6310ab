//! Embedded schema migrations, applied on startup.

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Migrations applied by one [`run_pending_migrations`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Wall time of the run.
    pub duration: Duration,
    /// Versions applied, oldest first. Empty when the schema was current.
    pub applied: Vec<String>,
}

impl MigrationResult {
    /// Returns the newest version applied by this run.
    pub fn latest(&self) -> Option<&str> {
        self.applied.last().map(String::as_str)
    }
}

/// Brings the content schema up to date.
///
/// The blocking diesel harness runs on a dedicated thread with a connection
/// checked out of the pool.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    let start = Instant::now();
    let conn: AsyncConnectionWrapper<_> = pg.get_pooled_connection().await?.into();

    let applied = spawn_blocking(move || {
        let mut conn = conn;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.into_iter().map(|v| v.to_string()).collect::<Vec<_>>())
    })
    .await
    .map_err(|err| PgError::Migration(err.into()))?
    .map_err(|err| {
        tracing::error!(target: TRACING_TARGET_MIGRATION, error = %err, "Migration failed");
        PgError::Migration(err)
    })?;

    let result = MigrationResult {
        duration: start.elapsed(),
        applied,
    };

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?result.duration,
        applied = result.applied.len(),
        "Content schema is current"
    );

    Ok(result)
}
