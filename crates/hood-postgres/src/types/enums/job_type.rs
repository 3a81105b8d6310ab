//! Job type enumeration for career postings.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Employment type of a job posting.
///
/// Corresponds to the `JOB_TYPE` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::JobType"]
#[strum(serialize_all = "snake_case")]
pub enum JobType {
    #[db_rename = "full_time"]
    #[serde(rename = "full_time")]
    #[default]
    FullTime,

    #[db_rename = "part_time"]
    #[serde(rename = "part_time")]
    PartTime,

    #[db_rename = "internship"]
    #[serde(rename = "internship")]
    Internship,
}
