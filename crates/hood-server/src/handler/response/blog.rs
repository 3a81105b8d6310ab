//! Blog listing response types.

use hood_postgres::model;
use hood_postgres::types::Locale;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::utility::reading_time_label;

/// Blog category.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub id: i32,
    pub category: String,
}

impl BlogCategory {
    pub fn from_model(category: model::BlogCategory) -> Self {
        Self {
            id: category.id,
            category: category.category,
        }
    }
}

/// Article card in the blog listing.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCard {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub slug: String,
    /// Plain-text excerpt of the article body.
    pub summary: String,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub reading_time_label: String,
    pub category: BlogCategory,
    pub published_at: Timestamp,
    pub views: i32,
}

impl ArticleCard {
    pub fn from_model(
        article: model::Article,
        category: model::BlogCategory,
        locale: Locale,
    ) -> Self {
        let reading_time = hood_document::reading_minutes(&article.content);

        Self {
            summary: hood_document::summarize(&article.content),
            reading_time,
            reading_time_label: reading_time_label(locale, reading_time),
            category: BlogCategory::from_model(category),
            published_at: article.published_at(),
            id: article.id,
            title: article.title,
            image: article.image,
            slug: article.slug,
            views: article.views,
        }
    }
}

/// Blog page content for one category.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub categories: Vec<BlogCategory>,
    pub articles: Vec<ArticleCard>,
    pub total_pages: i64,
    pub current_page: i64,
    pub selected_category_id: i32,
}
