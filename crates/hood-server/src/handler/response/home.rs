//! Home page response types.

use hood_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Key figure shown in the home page counters.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub id: i32,
    /// Caption under the number.
    pub label: String,
    /// Icon identifier.
    pub icon: String,
    /// The number itself.
    pub stat: i32,
    /// Text shown before the number, such as `+`.
    pub prefix: Option<String>,
    /// Text shown after the number, such as `%`.
    pub suffix: Option<String>,
}

impl Stat {
    pub fn from_model(stat: model::Stat) -> Self {
        Self {
            id: stat.id,
            label: stat.label,
            icon: stat.icon,
            stat: stat.stat,
            prefix: stat.prefix,
            suffix: stat.suffix,
        }
    }
}

/// Award or recognition received by the firm.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl Award {
    pub fn from_model(award: model::Award) -> Self {
        Self {
            id: award.id,
            name: award.name,
            image: award.image,
        }
    }
}

/// Client testimonial.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    /// Role or company of the client.
    pub position: String,
    pub testimonial: String,
}

impl Testimonial {
    pub fn from_model(testimonial: model::Testimonial) -> Self {
        Self {
            id: testimonial.id,
            name: testimonial.name,
            position: testimonial.position,
            testimonial: testimonial.testimonial,
        }
    }
}

/// Home page content.
///
/// Each section is loaded independently. A section that failed to load is
/// empty and has its error flag set, while the other sections still render.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub stats: Vec<Stat>,
    pub stats_error: bool,
    pub awards: Vec<Award>,
    pub awards_error: bool,
    pub testimonials: Vec<Testimonial>,
    pub testimonials_error: bool,
}
