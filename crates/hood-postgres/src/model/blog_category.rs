use diesel::prelude::*;

use crate::schema::blog_categories;

/// A blog category. Categories are shared by both languages.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = blog_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogCategory {
    /// Unique category identifier.
    pub id: i32,
    /// Category key, translated by the front end.
    pub category: String,
}
