//! Error types for document parsing.

/// Errors that can occur while parsing a serialized document.
///
/// These never escape the public entry points ([`render`], [`summarize`] and
/// [`reading_minutes`]), which degrade to a fallback value instead. They are
/// returned by [`Document::parse`] for callers that want to branch on them.
///
/// [`render`]: crate::render
/// [`summarize`]: crate::summarize
/// [`reading_minutes`]: crate::reading_minutes
/// [`Document::parse`]: crate::Document::parse
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid JSON, or `content` is not a sequence of nodes.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but the root `type` is not `doc`.
    #[error("not a structured document (root type is {0:?})")]
    NotADocument(String),
}

/// Specialized [`Result`] type for document parsing.
pub type Result<T, E = Error> = std::result::Result<T, E>;
