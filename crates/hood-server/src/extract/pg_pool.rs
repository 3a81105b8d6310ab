//! Pooled connection extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use hood_postgres::{PgClient, PgConn};

use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "hood_server::extract::pg_pool";

/// Extractor that checks a connection out of the pool.
///
/// The connection implements every repository trait of
/// [`hood_postgres::query`].
///
/// ```rust,ignore
/// use hood_postgres::query::TeamRepository;
/// use hood_server::extract::{Lang, PgPool};
///
/// async fn team(Lang(locale): Lang, PgPool(mut conn): PgPool) {
///     let members = conn.list_team_members(locale).await;
/// }
/// ```
#[derive(Debug, Deref, DerefMut)]
pub struct PgPool(pub PgConn);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "failed to acquire database connection"
            );
            ErrorKind::InternalServerError.with_message("Database connection unavailable")
        })?;

        Ok(PgPool(conn))
    }
}

impl aide::OperationInput for PgPool {}
