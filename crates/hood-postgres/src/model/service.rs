use diesel::prelude::*;

use crate::schema::services;
use crate::types::Locale;

/// A practice area offered by the firm, in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Service {
    pub id: i32,
    pub image: String,
    pub icon: String,
    pub label: String,
    pub overview: String,
    pub slug: String,
    pub lang: Locale,
}
