//! Wrappers over the axum extractors with detailed rejection messages.

mod form;
mod json;
mod multipart;
mod path;
mod query;

pub use self::form::Form;
pub use self::json::Json;
pub use self::multipart::Multipart;
pub use self::path::Path;
pub use self::query::Query;

/// Keeps the first three lines of a rejection message, capped at 200 chars.
fn sanitize_error_message(message: &str) -> String {
    let lines = message.lines().take(3).collect::<Vec<_>>();
    lines.join(" ").chars().take(200).collect()
}
