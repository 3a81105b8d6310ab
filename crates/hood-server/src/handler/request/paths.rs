//! Path parameter types for HTTP handlers.

use hood_postgres::types::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters shared by every localized route.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LangPathParams {
    /// Language of the requested content.
    pub lang: Locale,
}

/// Path parameters for routes addressing one entry by slug.
///
/// The `{lang}` segment of the same route is read by the
/// [`Lang`](crate::extract::Lang) extractor.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlugPathParams {
    /// URL slug of the entry, unique per language.
    pub slug: String,
}
