//! Request types for HTTP handlers.

mod applications;
mod contacts;
mod paginations;
mod paths;
mod validations;

pub use applications::*;
pub use contacts::*;
pub use paginations::*;
pub use paths::*;
pub use validations::*;
