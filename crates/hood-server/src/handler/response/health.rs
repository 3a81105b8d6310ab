//! Liveness response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Liveness probe response, always `{"status":"ok"}`.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}
