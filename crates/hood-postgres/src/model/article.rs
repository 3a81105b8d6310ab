//! Blog article model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::articles;
use crate::types::Locale;

/// A blog article in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Article {
    /// Unique article identifier.
    pub id: i32,
    /// Article headline.
    pub title: String,
    /// Path or URL of the cover image.
    pub image: String,
    /// Serialized rich-text document.
    pub content: String,
    /// URL slug, unique per language.
    pub slug: String,
    /// Language of this variant.
    pub lang: Locale,
    /// Publication timestamp, also used to order articles.
    pub created_at: Timestamp,
    /// Timestamp of the last edit.
    pub modified_at: Option<Timestamp>,
    /// Reference to the blog category.
    pub category: i32,
    /// Number of counted views.
    pub views: i32,
}

impl Article {
    /// Returns the publication timestamp.
    pub fn published_at(&self) -> jiff::Timestamp {
        self.created_at.into()
    }

    /// Returns the timestamp of the last edit, if any.
    pub fn updated_at(&self) -> Option<jiff::Timestamp> {
        self.modified_at.map(Into::into)
    }
}
