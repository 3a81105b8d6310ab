//! Article page handler and view counting.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use hood_postgres::PgClient;
use hood_postgres::query::ArticleRepository;

use crate::extract::{Cookies, Json, Lang, Path, PgPool};
use crate::handler::request::SlugPathParams;
use crate::handler::response::{Article, ArticleLink, ArticlePage, ErrorResponse};
use crate::handler::utility::ViewedArticles;
use crate::handler::{OrNotFound, Result};
use crate::service::ServiceState;

/// Tracing target for article operations.
const TRACING_TARGET: &str = "hood_server::handler::articles";

/// Article page together with the updated `viewed_articles` cookie.
#[derive(Debug)]
struct ArticleResponse {
    jar: CookieJar,
    page: ArticlePage,
}

impl IntoResponse for ArticleResponse {
    fn into_response(self) -> Response {
        (self.jar, Json(self.page)).into_response()
    }
}

impl aide::OperationOutput for ArticleResponse {
    type Inner = ArticlePage;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ArticlePage>::operation_response(ctx, operation)
    }
}

/// Stores the new view count in the background.
///
/// The write sets an absolute value, so concurrent first visits may count
/// once. The response never waits for it.
fn spawn_view_update(pg_client: PgClient, article_id: i32, views: i32) {
    tokio::spawn(async move {
        let result = match pg_client.get_connection().await {
            Ok(mut conn) => conn.update_article_views(article_id, views).await,
            Err(error) => Err(error),
        };

        match result {
            Ok(()) => tracing::debug!(
                target: TRACING_TARGET,
                article_id,
                views,
                "Article views updated"
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET,
                article_id,
                error = %error,
                "Failed to update article views"
            ),
        }
    });
}

/// View count to show for a visit, and the cookie to set on a first visit.
#[derive(Debug)]
struct Visit {
    views: i32,
    cookie: Option<Cookie<'static>>,
}

impl Visit {
    /// Counts a visit of `slug` unless the browser's cookie already lists it.
    fn count(jar: &CookieJar, slug: &str, stored_views: i32) -> Self {
        let mut viewed = ViewedArticles::from_jar(jar);
        if viewed.contains(slug) {
            return Self {
                views: stored_views,
                cookie: None,
            };
        }

        viewed.push(slug);
        Self {
            views: stored_views.saturating_add(1),
            cookie: Some(viewed.into_cookie()),
        }
    }

    #[inline]
    fn is_first(&self) -> bool {
        self.cookie.is_some()
    }
}

/// Returns one article with its neighbours.
///
/// The first visit of an article from a browser counts one view and adds the
/// slug to the `viewed_articles` cookie. Nothing is counted unless the whole
/// page could be loaded.
#[tracing::instrument(skip_all, fields(lang = %locale, slug = %path_params.slug))]
async fn article_page(
    Lang(locale): Lang,
    State(pg_client): State<PgClient>,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<SlugPathParams>,
    Cookies(jar): Cookies,
) -> Result<ArticleResponse> {
    let slug = path_params.slug;
    let (article, category) = conn
        .find_article_by_slug(locale, &slug)
        .await?
        .or_not_found("Article", &slug)?;

    let published_at = article.published_at();
    let prev_article = conn.find_previous_article(locale, published_at).await?;
    let next_article = conn.find_next_article(locale, published_at).await?;

    let visit = Visit::count(&jar, &slug, article.views);
    if visit.is_first() {
        spawn_view_update(pg_client, article.id, visit.views);
    }

    let summary = hood_document::summarize(&article.content);
    let page = ArticlePage {
        meta_description: hood_document::meta_description(&summary),
        article: Article::from_model(article, category, visit.views, locale),
        prev_article: prev_article.map(ArticleLink::from_model),
        next_article: next_article.map(ArticleLink::from_model),
    };

    let jar = match visit.cookie {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    Ok(ArticleResponse { jar, page })
}

fn article_page_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get article")
        .description(
            "Returns an article with its body rendered to HTML and links to the \
            previous and next articles. The first visit from a browser counts a \
            view and sets the `viewed_articles` cookie.",
        )
        .response::<200, Json<ArticlePage>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the article page route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/{lang}/articles/{slug}",
            get_with(article_page, article_page_docs),
        )
        .with_path_items(|item| item.tag("Blog"))
}
