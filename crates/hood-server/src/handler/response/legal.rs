//! Legal notice response types.

use hood_postgres::model;
use hood_postgres::types::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::utility::reading_time_label;

/// Legal notice with its rendered body.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalPage {
    pub id: i32,
    pub title: String,
    pub slug: String,
    /// Notice body rendered to HTML.
    pub body: String,
    pub reading_time: u32,
    pub reading_time_label: String,
}

impl LegalPage {
    pub fn from_model(legal: model::Legal, locale: Locale) -> Self {
        let reading_time = hood_document::reading_minutes(&legal.content);

        Self {
            body: hood_document::render(&legal.content),
            reading_time,
            reading_time_label: reading_time_label(locale, reading_time),
            id: legal.id,
            title: legal.title,
            slug: legal.slug,
        }
    }
}
