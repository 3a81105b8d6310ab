//! Response types for HTTP handlers.

mod articles;
mod blog;
mod careers;
mod error_response;
mod health;
mod home;
mod legal;
mod services;
mod submissions;
mod team;

pub use articles::*;
pub use blog::*;
pub use careers::*;
pub use error_response::ErrorResponse;
pub use health::*;
pub use home::*;
pub use legal::*;
pub use services::*;
pub use submissions::*;
pub use team::*;
