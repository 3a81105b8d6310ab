//! PostgreSQL enumerations.

mod job_type;
mod locale;

pub use job_type::JobType;
pub use locale::Locale;
