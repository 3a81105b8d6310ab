use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Service;
use crate::types::Locale;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for practice areas.
pub trait ServiceRepository {
    /// Lists all services of a language.
    fn list_services(
        &mut self,
        locale: Locale,
    ) -> impl Future<Output = PgResult<Vec<Service>>> + Send;

    /// Finds a service by its slug within a language.
    fn find_service_by_slug(
        &mut self,
        locale: Locale,
        service_slug: &str,
    ) -> impl Future<Output = PgResult<Option<Service>>> + Send;
}

impl ServiceRepository for PgConnection {
    async fn list_services(&mut self, locale: Locale) -> PgResult<Vec<Service>> {
        use schema::services::dsl::*;

        let rows = services
            .filter(lang.eq(locale))
            .select(Service::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }

    async fn find_service_by_slug(
        &mut self,
        locale: Locale,
        service_slug: &str,
    ) -> PgResult<Option<Service>> {
        use schema::services::dsl::*;

        let service = services
            .filter(slug.eq(service_slug))
            .filter(lang.eq(locale))
            .select(Service::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(service)
    }
}
