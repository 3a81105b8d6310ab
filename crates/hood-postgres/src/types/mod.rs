//! Enumerations and other custom types.

mod enums;
mod pagination;

pub use enums::{JobType, Locale};
pub use pagination::OffsetPagination;
