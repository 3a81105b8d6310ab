use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::TeamMember;
use crate::types::Locale;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the members of the firm.
pub trait TeamRepository {
    /// Lists all team members of a language.
    fn list_team_members(
        &mut self,
        locale: Locale,
    ) -> impl Future<Output = PgResult<Vec<TeamMember>>> + Send;
}

impl TeamRepository for PgConnection {
    async fn list_team_members(&mut self, locale: Locale) -> PgResult<Vec<TeamMember>> {
        use schema::team::dsl::*;

        let rows = team
            .filter(lang.eq(locale))
            .select(TeamMember::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
