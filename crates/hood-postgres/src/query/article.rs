use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{Article, BlogCategory};
use crate::types::{Locale, OffsetPagination};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for blog articles and their categories.
pub trait ArticleRepository {
    /// Lists all blog categories.
    fn list_article_categories(
        &mut self,
    ) -> impl Future<Output = PgResult<Vec<BlogCategory>>> + Send;

    /// Counts the articles of a language in a category.
    fn count_articles(
        &mut self,
        locale: Locale,
        category_id: i32,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Lists one page of articles of a language in a category, newest first.
    fn list_articles(
        &mut self,
        locale: Locale,
        category_id: i32,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<(Article, BlogCategory)>>> + Send;

    /// Finds an article by its slug within a language, with its category.
    fn find_article_by_slug(
        &mut self,
        locale: Locale,
        article_slug: &str,
    ) -> impl Future<Output = PgResult<Option<(Article, BlogCategory)>>> + Send;

    /// Finds the newest article of a language published strictly before `published_at`.
    fn find_previous_article(
        &mut self,
        locale: Locale,
        published_at: jiff::Timestamp,
    ) -> impl Future<Output = PgResult<Option<Article>>> + Send;

    /// Finds the oldest article of a language published strictly after `published_at`.
    fn find_next_article(
        &mut self,
        locale: Locale,
        published_at: jiff::Timestamp,
    ) -> impl Future<Output = PgResult<Option<Article>>> + Send;

    /// Overwrites the view counter of an article.
    ///
    /// The value is absolute; concurrent readers may overwrite each other.
    fn update_article_views(
        &mut self,
        article_id: i32,
        new_views: i32,
    ) -> impl Future<Output = PgResult<()>> + Send;
}

impl ArticleRepository for PgConnection {
    async fn list_article_categories(&mut self) -> PgResult<Vec<BlogCategory>> {
        use schema::blog_categories::dsl::*;

        let rows = blog_categories
            .select(BlogCategory::as_select())
            .order(id.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }

    async fn count_articles(&mut self, locale: Locale, category_id: i32) -> PgResult<i64> {
        use schema::articles::dsl::*;

        let count = articles
            .filter(lang.eq(locale))
            .filter(category.eq(category_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count)
    }

    async fn list_articles(
        &mut self,
        locale: Locale,
        category_id: i32,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<(Article, BlogCategory)>> {
        use schema::{articles, blog_categories};

        let rows = articles::table
            .inner_join(blog_categories::table)
            .filter(articles::lang.eq(locale))
            .filter(articles::category.eq(category_id))
            .select((Article::as_select(), BlogCategory::as_select()))
            .order(articles::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }

    async fn find_article_by_slug(
        &mut self,
        locale: Locale,
        article_slug: &str,
    ) -> PgResult<Option<(Article, BlogCategory)>> {
        use schema::{articles, blog_categories};

        let row = articles::table
            .inner_join(blog_categories::table)
            .filter(articles::slug.eq(article_slug))
            .filter(articles::lang.eq(locale))
            .select((Article::as_select(), BlogCategory::as_select()))
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(row)
    }

    async fn find_previous_article(
        &mut self,
        locale: Locale,
        published_at: jiff::Timestamp,
    ) -> PgResult<Option<Article>> {
        use schema::articles::dsl::*;

        let published_at = jiff_diesel::Timestamp::from(published_at);
        let article = articles
            .filter(lang.eq(locale))
            .filter(created_at.lt(&published_at))
            .select(Article::as_select())
            .order(created_at.desc())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(article)
    }

    async fn find_next_article(
        &mut self,
        locale: Locale,
        published_at: jiff::Timestamp,
    ) -> PgResult<Option<Article>> {
        use schema::articles::dsl::*;

        let published_at = jiff_diesel::Timestamp::from(published_at);
        let article = articles
            .filter(lang.eq(locale))
            .filter(created_at.gt(&published_at))
            .select(Article::as_select())
            .order(created_at.asc())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(article)
    }

    async fn update_article_views(&mut self, article_id: i32, new_views: i32) -> PgResult<()> {
        use schema::articles::dsl::*;

        let updated = diesel::update(articles.filter(id.eq(article_id)))
            .set(views.eq(new_views))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        if updated == 0 {
            tracing::warn!(
                target: TRACING_TARGET_QUERY,
                article_id,
                "No article found to update views"
            );
        }

        Ok(())
    }
}
