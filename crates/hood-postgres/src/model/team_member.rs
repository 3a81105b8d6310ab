use diesel::prelude::*;

use crate::schema::team;
use crate::types::Locale;

/// A member of the firm, in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = team)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamMember {
    pub id: i32,
    /// Index of the job title in the front-end translation table.
    pub job: i32,
    pub name: String,
    pub image: String,
    pub bio: String,
    pub lang: Locale,
}
