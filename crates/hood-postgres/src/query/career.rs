use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Career;
use crate::types::{Locale, OffsetPagination};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for job postings.
///
/// The count and the page are separate queries and may disagree under
/// concurrent writes.
pub trait CareerRepository {
    /// Counts the postings of a language.
    fn count_careers(&mut self, locale: Locale) -> impl Future<Output = PgResult<i64>> + Send;

    /// Lists one page of postings of a language, newest first.
    fn list_careers(
        &mut self,
        locale: Locale,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Career>>> + Send;
}

impl CareerRepository for PgConnection {
    async fn count_careers(&mut self, locale: Locale) -> PgResult<i64> {
        use schema::careers::dsl::*;

        let count = careers
            .filter(lang.eq(locale))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count)
    }

    async fn list_careers(
        &mut self,
        locale: Locale,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Career>> {
        use schema::careers::dsl::*;

        let rows = careers
            .filter(lang.eq(locale))
            .select(Career::as_select())
            .order(id.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
