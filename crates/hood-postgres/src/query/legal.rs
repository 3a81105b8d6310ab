use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Legal;
use crate::types::Locale;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for legal notices.
pub trait LegalRepository {
    /// Finds a legal notice by its slug within a language.
    fn find_legal_by_slug(
        &mut self,
        locale: Locale,
        legal_slug: &str,
    ) -> impl Future<Output = PgResult<Option<Legal>>> + Send;
}

impl LegalRepository for PgConnection {
    async fn find_legal_by_slug(
        &mut self,
        locale: Locale,
        legal_slug: &str,
    ) -> PgResult<Option<Legal>> {
        use schema::legal::dsl::*;

        let notice = legal
            .filter(lang.eq(locale))
            .filter(slug.eq(legal_slug))
            .select(Legal::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(notice)
    }
}
