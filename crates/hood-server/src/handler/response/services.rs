//! Practice area response types.

use hood_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Practice area offered by the firm.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    pub image: String,
    pub icon: String,
    /// Display name.
    pub label: String,
    pub overview: String,
    /// URL slug, unique per language.
    pub slug: String,
}

impl Service {
    pub fn from_model(service: model::Service) -> Self {
        Self {
            id: service.id,
            image: service.image,
            icon: service.icon,
            label: service.label,
            overview: service.overview,
            slug: service.slug,
        }
    }
}

/// Services page content.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub services: Vec<Service>,
}
