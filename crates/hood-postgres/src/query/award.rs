use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Award;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for awards.
pub trait AwardRepository {
    /// Lists all awards. Awards are shared by both languages.
    fn list_awards(&mut self) -> impl Future<Output = PgResult<Vec<Award>>> + Send;
}

impl AwardRepository for PgConnection {
    async fn list_awards(&mut self) -> PgResult<Vec<Award>> {
        use schema::awards::dsl::*;

        let rows = awards
            .select(Award::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
