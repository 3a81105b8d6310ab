use diesel::prelude::*;

use crate::schema::legal;
use crate::types::Locale;

/// A legal notice (privacy policy, terms of use, ...) in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = legal)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Legal {
    pub id: i32,
    pub title: String,
    /// Serialized rich-text document.
    pub content: String,
    pub slug: String,
    pub lang: Locale,
}
