//! Page-number pagination for listing queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest page a listing query will ever fetch.
const MAX_PAGE_SIZE: i64 = 100;

/// `LIMIT`/`OFFSET` window of a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates the window for a 1-based page number; pages below 1 read the first page.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        Self {
            limit: page_size,
            offset: (page - 1).saturating_mul(page_size),
        }
    }

    /// Returns the number of pages needed for `total` rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        (total.max(0) + self.limit - 1) / self.limit
    }
}
