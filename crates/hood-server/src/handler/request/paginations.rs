//! Query string types for paginated pages.
//!
//! Page and category values are kept as raw strings so that malformed input
//! falls back to defaults or redirects instead of rejecting the request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of job postings per careers page.
pub const CAREERS_PAGE_SIZE: i64 = 10;

/// Number of articles per blog page.
pub const BLOG_PAGE_SIZE: i64 = 6;

/// Category shown when the blog is opened without one.
pub const DEFAULT_BLOG_CATEGORY: i32 = 3;

/// Query parameters of the careers page.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CareersQuery {
    /// One-based page number.
    pub page: Option<String>,
}

impl CareersQuery {
    /// Returns the requested page, or `None` when it is malformed or below 1.
    ///
    /// A missing page is the first page.
    pub fn page(&self) -> Option<i64> {
        match self.page.as_deref() {
            None => Some(1),
            Some(raw) => parse_leading_int(raw).filter(|page| *page >= 1),
        }
    }
}

/// Query parameters of the blog page.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogQuery {
    /// Category identifier, defaults to [`DEFAULT_BLOG_CATEGORY`].
    pub category: Option<String>,
    /// One-based page number, clamped to at least 1.
    pub page: Option<String>,
}

impl BlogQuery {
    pub fn category_id(&self) -> i32 {
        self.category
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_BLOG_CATEGORY)
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1)
    }
}

/// Parses the leading integer of `raw`, ignoring anything after the digits.
///
/// `"2"` and `"2abc"` both read as 2, while `"abc"` has no value.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn careers(page: Option<&str>) -> CareersQuery {
        CareersQuery {
            page: page.map(str::to_owned),
        }
    }

    fn blog(category: Option<&str>, page: Option<&str>) -> BlogQuery {
        BlogQuery {
            category: category.map(str::to_owned),
            page: page.map(str::to_owned),
        }
    }

    #[test]
    fn careers_page_defaults_to_first() {
        assert_eq!(careers(None).page(), Some(1));
        assert_eq!(careers(Some("4")).page(), Some(4));
        assert_eq!(careers(Some("2abc")).page(), Some(2));
    }

    #[test]
    fn careers_page_rejects_invalid_values() {
        assert_eq!(careers(Some("abc")).page(), None);
        assert_eq!(careers(Some("0")).page(), None);
        assert_eq!(careers(Some("-3")).page(), None);
        assert_eq!(careers(Some("")).page(), None);
    }

    #[test]
    fn blog_defaults_and_clamping() {
        let query = blog(None, None);
        assert_eq!(query.category_id(), DEFAULT_BLOG_CATEGORY);
        assert_eq!(query.page(), 1);

        let query = blog(Some("5"), Some("-2"));
        assert_eq!(query.category_id(), 5);
        assert_eq!(query.page(), 1);

        let query = blog(Some("news"), Some("many"));
        assert_eq!(query.category_id(), DEFAULT_BLOG_CATEGORY);
        assert_eq!(query.page(), 1);
    }
}
