use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Stat;
use crate::types::Locale;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the home page statistics.
pub trait StatRepository {
    /// Lists all statistics of a language, in insertion order.
    fn list_stats(&mut self, locale: Locale) -> impl Future<Output = PgResult<Vec<Stat>>> + Send;
}

impl StatRepository for PgConnection {
    async fn list_stats(&mut self, locale: Locale) -> PgResult<Vec<Stat>> {
        use schema::stats::dsl::*;

        let rows = stats
            .filter(lang.eq(locale))
            .select(Stat::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
