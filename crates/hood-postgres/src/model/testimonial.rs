use diesel::prelude::*;

use crate::schema::testimonials;
use crate::types::Locale;

/// A client testimonial, in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = testimonials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub testimonial: String,
    pub lang: Locale,
}
