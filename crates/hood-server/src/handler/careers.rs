//! Careers page handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use hood_postgres::PgClient;
use hood_postgres::query::CareerRepository;
use hood_postgres::types::{Locale, OffsetPagination};

use crate::extract::{Json, Lang, Query};
use crate::handler::Result;
use crate::handler::request::{CAREERS_PAGE_SIZE, CareersQuery};
use crate::handler::response::{CareersPage, ErrorResponse, Job, Pagination};
use crate::service::ServiceState;

/// Tracing target for careers page operations.
const TRACING_TARGET: &str = "hood_server::handler::careers";

/// A careers page, or a redirect to a valid page number.
#[derive(Debug)]
enum CareersResponse {
    Page(CareersPage),
    Redirect(String),
}

impl CareersResponse {
    fn first_page(locale: Locale) -> Self {
        Self::Redirect(format!("/api/{locale}/careers"))
    }

    fn last_page(locale: Locale, total_pages: i64) -> Self {
        Self::Redirect(format!("/api/{locale}/careers?page={total_pages}"))
    }
}

impl IntoResponse for CareersResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Page(page) => Json(page).into_response(),
            Self::Redirect(location) => Redirect::to(&location).into_response(),
        }
    }
}

impl aide::OperationOutput for CareersResponse {
    type Inner = CareersPage;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<CareersPage>::operation_response(ctx, operation)
    }
}

/// Lists one page of open positions.
///
/// The page number is checked before a connection is taken from the pool.
#[tracing::instrument(skip_all, fields(lang = %locale, page = ?query.page))]
async fn careers_page(
    Lang(locale): Lang,
    State(pg_client): State<PgClient>,
    Query(query): Query<CareersQuery>,
) -> Result<CareersResponse> {
    let Some(current_page) = query.page() else {
        tracing::debug!(target: TRACING_TARGET, "Malformed page, redirecting to the first page");
        return Ok(CareersResponse::first_page(locale));
    };

    let mut conn = pg_client.get_connection().await?;
    let total_count = conn.count_careers(locale).await?;
    let pagination = OffsetPagination::from_page(current_page, CAREERS_PAGE_SIZE);
    let total_pages = pagination.total_pages(total_count);

    if total_pages > 0 && current_page > total_pages {
        tracing::debug!(
            target: TRACING_TARGET,
            total_pages,
            "Page out of range, redirecting to the last page"
        );
        return Ok(CareersResponse::last_page(locale, total_pages));
    }

    let careers = conn.list_careers(locale, pagination).await?;
    let jobs = careers
        .into_iter()
        .map(|career| Job::from_model(career, locale))
        .collect::<Vec<_>>();

    tracing::debug!(
        target: TRACING_TARGET,
        job_count = jobs.len(),
        total_count,
        "Careers listed"
    );

    Ok(CareersResponse::Page(CareersPage {
        jobs,
        pagination: Pagination {
            current_page,
            total_pages,
            total_count,
        },
    }))
}

fn careers_page_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get careers page")
        .description(
            "Returns one page of ten open positions. A malformed page or a page \
            below 1 redirects to the first page, and a page past the end \
            redirects to the last one.",
        )
        .response::<200, Json<CareersPage>>()
        .response_with::<303, (), _>(|res| res.description("Redirect to a valid page."))
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the careers page route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/{lang}/careers", get_with(careers_page, careers_page_docs))
        .with_path_items(|item| item.tag("Careers"))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn malformed_page_redirects_to_first_page() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        for page in ["0", "-3", "abc"] {
            let response = server
                .get("/api/ar/careers")
                .add_query_param("page", page)
                .await;
            response.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(response.header(header::LOCATION), "/api/ar/careers");
        }
        Ok(())
    }

    #[tokio::test]
    async fn valid_page_reaches_the_store() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/en/careers").add_query_param("page", "2").await;
        response.assert_status_internal_server_error();
        Ok(())
    }
}
