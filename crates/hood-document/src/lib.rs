#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod escape;
pub mod model;
mod reading;
mod render;
mod summary;

pub use crate::error::{Error, Result};
pub use crate::escape::escape_html;
pub use crate::model::{Document, Mark, Node};
pub use crate::reading::{WORDS_PER_MINUTE, reading_minutes};
pub use crate::render::{HtmlRenderer, render};
pub use crate::summary::{
    MAX_FALLBACK_CHARS, MAX_META_DESCRIPTION_CHARS, MAX_SUMMARY_PARAGRAPHS, meta_description,
    summarize,
};

/// Tracing target for document parsing.
///
/// Use this target for logging parse failures and fallback decisions.
pub const TRACING_TARGET_PARSE: &str = "hood_document::parse";

/// Tracing target for document rendering.
pub const TRACING_TARGET_RENDER: &str = "hood_document::render";
