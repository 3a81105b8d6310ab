//! Article page response types.

use hood_postgres::model;
use hood_postgres::types::Locale;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::BlogCategory;
use crate::handler::utility::{reading_time_label, views_label};

/// Full article with its rendered body.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub slug: String,
    /// Article body rendered to HTML.
    pub body: String,
    pub category: BlogCategory,
    pub published_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    /// View count including the current visit when it was counted.
    pub views: i32,
    pub views_label: String,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub reading_time_label: String,
}

impl Article {
    /// Builds the article with `views` replacing the stored count.
    pub fn from_model(
        article: model::Article,
        category: model::BlogCategory,
        views: i32,
        locale: Locale,
    ) -> Self {
        let reading_time = hood_document::reading_minutes(&article.content);

        Self {
            body: hood_document::render(&article.content),
            category: BlogCategory::from_model(category),
            published_at: article.published_at(),
            updated_at: article.updated_at(),
            views,
            views_label: views_label(locale, views),
            reading_time,
            reading_time_label: reading_time_label(locale, reading_time),
            id: article.id,
            title: article.title,
            image: article.image,
            slug: article.slug,
        }
    }
}

/// Link to a neighbouring article.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleLink {
    pub title: String,
    pub slug: String,
    pub image: String,
}

impl ArticleLink {
    pub fn from_model(article: model::Article) -> Self {
        Self {
            title: article.title,
            slug: article.slug,
            image: article.image,
        }
    }
}

/// Article page content.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub article: Article,
    /// The next older article.
    pub prev_article: Option<ArticleLink>,
    /// The next newer article.
    pub next_article: Option<ArticleLink>,
    /// Summary cut for the `description` meta tag.
    pub meta_description: String,
}
