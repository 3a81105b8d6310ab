//! Legal notice handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use hood_postgres::query::LegalRepository;

use crate::extract::{Json, Lang, Path, PgPool};
use crate::handler::request::SlugPathParams;
use crate::handler::response::{ErrorResponse, LegalPage};
use crate::handler::{OrNotFound, Result};
use crate::service::ServiceState;

/// Returns a legal notice (privacy policy, terms) by slug.
#[tracing::instrument(skip_all, fields(lang = %locale, slug = %path_params.slug))]
async fn read_legal(
    Lang(locale): Lang,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<SlugPathParams>,
) -> Result<Json<LegalPage>> {
    let legal = conn
        .find_legal_by_slug(locale, &path_params.slug)
        .await?
        .or_not_found("Legal document", &path_params.slug)?;

    Ok(Json(LegalPage::from_model(legal, locale)))
}

fn read_legal_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get legal document")
        .description("Returns a legal document with its body rendered to HTML.")
        .response::<200, Json<LegalPage>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the legal document route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/{lang}/legal/{slug}", get_with(read_legal, read_legal_docs))
        .with_path_items(|item| item.tag("Pages"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn unreachable_store_is_internal_error() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/ar/legal/privacy-policy").await;
        response.assert_status_internal_server_error();
        Ok(())
    }

    #[tokio::test]
    async fn unknown_language_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/fr/legal/privacy-policy").await;
        response.assert_status_not_found();
        assert_eq!(response.json::<serde_json::Value>()["name"], "not_found");
        Ok(())
    }
}
