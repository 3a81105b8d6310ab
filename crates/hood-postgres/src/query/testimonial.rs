use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::Testimonial;
use crate::types::Locale;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for client testimonials.
pub trait TestimonialRepository {
    /// Lists all testimonials of a language.
    fn list_testimonials(
        &mut self,
        locale: Locale,
    ) -> impl Future<Output = PgResult<Vec<Testimonial>>> + Send;
}

impl TestimonialRepository for PgConnection {
    async fn list_testimonials(&mut self, locale: Locale) -> PgResult<Vec<Testimonial>> {
        use schema::testimonials::dsl::*;

        let rows = testimonials
            .filter(lang.eq(locale))
            .select(Testimonial::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
