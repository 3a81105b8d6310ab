//! Careers page response types.

use hood_postgres::model;
use hood_postgres::types::{JobType, Locale};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::utility::opportunities_label;

/// Open job posting.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub overview: String,
    /// Number of open positions.
    pub opportunities: i32,
    /// Localized rendering of `opportunities`.
    pub opportunities_label: String,
    pub job_type: JobType,
    /// Application deadline.
    pub deadline: Timestamp,
    /// Whether the deadline has passed.
    pub closed: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub duties: Vec<String>,
    pub expectations: Vec<String>,
    pub experience: String,
    pub notes: Option<String>,
}

impl Job {
    pub fn from_model(career: model::Career, locale: Locale) -> Self {
        Self {
            opportunities_label: opportunities_label(locale, career.opportunities),
            deadline: career.deadline(),
            closed: career.is_closed(),
            requirements: career.requirements_list(),
            duties: career.duties_list(),
            expectations: career.expectations_list(),
            id: career.id,
            title: career.title,
            overview: career.overview,
            opportunities: career.opportunities,
            job_type: career.job_type,
            description: career.description,
            experience: career.experience,
            notes: career.notes,
        }
    }
}

/// Position of a page within the full list.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// One-based number of this page.
    pub current_page: i64,
    /// Number of pages, 0 when the list is empty.
    pub total_pages: i64,
    /// Number of items across all pages.
    pub total_count: i64,
}

/// Careers page content.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareersPage {
    pub jobs: Vec<Job>,
    pub pagination: Pagination,
}
