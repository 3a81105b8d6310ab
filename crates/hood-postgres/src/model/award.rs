use diesel::prelude::*;

use crate::schema::awards;

/// An award shown on the home page. Awards are not localized.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = awards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Award {
    pub id: i32,
    pub name: String,
    pub image: String,
}
