//! Home page handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use hood_postgres::query::{AwardRepository, StatRepository, TestimonialRepository};
use hood_postgres::types::Locale;
use hood_postgres::{PgClient, PgResult, model};

use crate::extract::{Json, Lang};
use crate::handler::response::{Award, ErrorResponse, HomePage, Stat, Testimonial};
use crate::service::ServiceState;

/// Tracing target for home page operations.
const TRACING_TARGET: &str = "hood_server::handler::home";

async fn load_stats(pg_client: &PgClient, locale: Locale) -> PgResult<Vec<model::Stat>> {
    let mut conn = pg_client.get_connection().await?;
    conn.list_stats(locale).await
}

async fn load_awards(pg_client: &PgClient) -> PgResult<Vec<model::Award>> {
    let mut conn = pg_client.get_connection().await?;
    conn.list_awards().await
}

async fn load_testimonials(
    pg_client: &PgClient,
    locale: Locale,
) -> PgResult<Vec<model::Testimonial>> {
    let mut conn = pg_client.get_connection().await?;
    conn.list_testimonials(locale).await
}

/// Converts one section, returning its items and its error flag.
fn section<M, R>(result: PgResult<Vec<M>>, name: &'static str, map: fn(M) -> R) -> (Vec<R>, bool) {
    match result {
        Ok(items) => (items.into_iter().map(map).collect(), false),
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET,
                section = name,
                error = %error,
                "Failed to load home page section"
            );
            (Vec::new(), true)
        }
    }
}

/// Loads the three home page sections concurrently.
///
/// Each section uses its own pooled connection. A failing section is left
/// empty with its error flag set; the page itself always succeeds.
#[tracing::instrument(skip_all, fields(lang = %locale))]
async fn home_page(Lang(locale): Lang, State(pg_client): State<PgClient>) -> Json<HomePage> {
    tracing::debug!(target: TRACING_TARGET, "Loading home page");

    let (stats, awards, testimonials) = futures::join!(
        load_stats(&pg_client, locale),
        load_awards(&pg_client),
        load_testimonials(&pg_client, locale),
    );

    let (stats, stats_error) = section(stats, "stats", Stat::from_model);
    let (awards, awards_error) = section(awards, "awards", Award::from_model);
    let (testimonials, testimonials_error) =
        section(testimonials, "testimonials", Testimonial::from_model);

    Json(HomePage {
        stats,
        stats_error,
        awards,
        awards_error,
        testimonials,
        testimonials_error,
    })
}

fn home_page_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get home page")
        .description(
            "Returns the key figures, awards and testimonials. A section that \
            failed to load is empty and its `*Error` flag is set.",
        )
        .response::<200, Json<HomePage>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns the home page route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/{lang}/home", get_with(home_page, home_page_docs))
        .with_path_items(|item| item.tag("Pages"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn unreachable_store_flags_every_section() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/en/home").await;
        response.assert_status_ok();

        let page = response.json::<HomePage>();
        assert!(page.stats.is_empty() && page.stats_error);
        assert!(page.awards.is_empty() && page.awards_error);
        assert!(page.testimonials.is_empty() && page.testimonials_error);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_language_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;
        server.get("/api/de/home").await.assert_status_not_found();
        Ok(())
    }
}
