//! Team page response types.

use hood_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Member of the firm's team.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i32,
    /// Position identifier, also the display order.
    pub job: i32,
    pub name: String,
    /// Path or URL of the portrait.
    pub image: String,
    pub bio: String,
}

impl TeamMember {
    pub fn from_model(member: model::TeamMember) -> Self {
        Self {
            id: member.id,
            job: member.job,
            name: member.name,
            image: member.image,
            bio: member.bio,
        }
    }
}

/// Team page content.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    pub members: Vec<TeamMember>,
}
