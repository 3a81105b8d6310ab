use diesel::prelude::*;

use crate::schema::stats;
use crate::types::Locale;

/// A headline figure on the home page, such as years of experience.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Stat {
    pub id: i32,
    pub label: String,
    /// Icon identifier understood by the front end.
    pub icon: String,
    pub stat: i32,
    /// Text shown before the figure.
    pub prefix: Option<String>,
    /// Text shown after the figure.
    pub suffix: Option<String>,
    pub lang: Locale,
}
