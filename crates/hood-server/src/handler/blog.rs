//! Blog listing handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use hood_postgres::query::ArticleRepository;
use hood_postgres::types::OffsetPagination;

use crate::extract::{Json, Lang, PgPool, Query};
use crate::handler::Result;
use crate::handler::request::{BLOG_PAGE_SIZE, BlogQuery};
use crate::handler::response::{ArticleCard, BlogCategory, BlogPage, ErrorResponse};
use crate::service::ServiceState;

/// Tracing target for blog operations.
const TRACING_TARGET: &str = "hood_server::handler::blog";

/// Lists one page of articles in a category, with every category for the tabs.
#[tracing::instrument(skip_all, fields(lang = %locale, category = ?query.category, page = ?query.page))]
async fn blog_page(
    Lang(locale): Lang,
    PgPool(mut conn): PgPool,
    Query(query): Query<BlogQuery>,
) -> Result<Json<BlogPage>> {
    let category_id = query.category_id();
    let current_page = query.page();
    let pagination = OffsetPagination::from_page(current_page, BLOG_PAGE_SIZE);

    let categories = conn.list_article_categories().await?;
    let total_count = conn.count_articles(locale, category_id).await?;
    let articles = conn.list_articles(locale, category_id, pagination).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        category_id,
        article_count = articles.len(),
        total_count,
        "Articles listed"
    );

    Ok(Json(BlogPage {
        categories: categories.into_iter().map(BlogCategory::from_model).collect(),
        articles: articles
            .into_iter()
            .map(|(article, category)| ArticleCard::from_model(article, category, locale))
            .collect(),
        total_pages: pagination.total_pages(total_count),
        current_page,
        selected_category_id: category_id,
    }))
}

fn blog_page_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get blog page")
        .description(
            "Returns the blog categories and one page of six articles of the \
            selected category, newest first, with summaries and reading times.",
        )
        .response::<200, Json<BlogPage>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the blog page route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/{lang}/blog", get_with(blog_page, blog_page_docs))
        .with_path_items(|item| item.tag("Blog"))
}
