//! Job posting model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::careers;
use crate::types::{JobType, Locale};

/// A job posting in one language.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = careers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Career {
    /// Unique posting identifier.
    pub id: i32,
    /// Language of this variant.
    pub lang: Locale,
    /// Job title.
    pub title: String,
    /// Short overview shown in the job list.
    pub overview: String,
    /// Number of open positions.
    pub opportunities: i32,
    /// Employment type.
    pub job_type: JobType,
    /// Application deadline.
    pub deadline: Timestamp,
    /// Full job description.
    pub description: String,
    /// Requirements, as a JSON array of strings.
    pub requirements: serde_json::Value,
    /// Duties, as a JSON array of strings.
    pub duties: serde_json::Value,
    /// Expectations, as a JSON array of strings.
    pub expectations: serde_json::Value,
    /// Required experience.
    pub experience: String,
    /// Additional notes.
    pub notes: Option<String>,
}

impl Career {
    /// Returns the application deadline.
    pub fn deadline(&self) -> jiff::Timestamp {
        self.deadline.into()
    }

    /// Returns whether the deadline is in the past.
    pub fn is_closed(&self) -> bool {
        self.deadline() < jiff::Timestamp::now()
    }

    /// Returns the requirements as a list of strings.
    pub fn requirements_list(&self) -> Vec<String> {
        string_list(&self.requirements)
    }

    /// Returns the duties as a list of strings.
    pub fn duties_list(&self) -> Vec<String> {
        string_list(&self.duties)
    }

    /// Returns the expectations as a list of strings.
    pub fn expectations_list(&self) -> Vec<String> {
        string_list(&self.expectations)
    }
}

/// Reads a JSON array of strings, skipping anything that is not a string.
fn string_list(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_list_skips_non_strings() {
        assert_eq!(
            string_list(&json!(["Draft contracts", 3, null, "Attend hearings"])),
            vec!["Draft contracts".to_string(), "Attend hearings".to_string()]
        );
        assert!(string_list(&json!({"a": "b"})).is_empty());
        assert!(string_list(&json!("text")).is_empty());
    }
}
