//! Typed document model.
//!
//! A [`Document`] is the root value stored in the `content` column of
//! articles and legal notices. Its `content` is an ordered sequence of
//! [`Node`]s, and text nodes carry ordered [`Mark`]s.

mod attrs;
mod mark;
mod node;

use std::str::FromStr;

use serde::Deserialize;

pub use self::mark::{DEFAULT_HIGHLIGHT_COLOR, Mark, MarkKind};
pub use self::node::{Node, NodeKind};
use crate::{Error, Result, TRACING_TARGET_PARSE};

/// The literal root `type` of a structured document.
pub const DOCUMENT_TYPE: &str = "doc";

/// Root of a rich-text document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: Vec<Node>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    kind: String,
    content: Vec<Node>,
}

impl Document {
    /// Creates a document from top-level nodes.
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Parses a serialized document.
    ///
    /// Fails when the input is not JSON, when `content` is missing or not a
    /// sequence, or when the root `type` is not `doc`.
    pub fn parse(input: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(input)?;
        if raw.kind != DOCUMENT_TYPE {
            return Err(Error::NotADocument(raw.kind));
        }

        Ok(Self {
            content: raw.content,
        })
    }

    /// Parses a serialized document, logging and discarding the error.
    pub(crate) fn parse_or_log(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(document) => Some(document),
            Err(error) => {
                tracing::debug!(
                    target: TRACING_TARGET_PARSE,
                    error = %error,
                    input_len = input.len(),
                    "Falling back to raw document content"
                );
                None
            }
        }
    }

    /// Returns the top-level nodes.
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Returns an iterator over every node of the tree, depth first.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack: Vec<&Node> = self.content.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_document() {
        let document: Document =
            r#"{"type":"doc","content":[{"type":"paragraph"},{"type":"horizontalRule"}]}"#
                .parse()
                .expect("document should parse");
        assert_eq!(document.content().len(), 2);
    }

    #[test]
    fn rejects_wrong_root_type() {
        let error = Document::parse(r#"{"type":"paragraph","content":[]}"#).unwrap_err();
        assert!(matches!(error, Error::NotADocument(kind) if kind == "paragraph"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(Document::parse("not json"), Err(Error::Json(_))));
        assert!(matches!(
            Document::parse(r#"{"type":"doc","content":"text"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Document::parse(r#"{"type":"doc"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn malformed_siblings_do_not_spoil_the_document() {
        let document = Document::parse(
            r#"{"type":"doc","content":[
                {"type":"paragraph","content":[{"type":"text","text":"kept"}]},
                {"type":7},
                {"type":"mention","attrs":"user-1"},
                "stray"
            ]}"#,
        )
        .expect("document should parse");

        assert_eq!(document.content().len(), 4);
        assert_eq!(document.content()[0].kind(), Some(NodeKind::Paragraph));
        assert!(document.content()[1..].iter().all(|node| node.kind().is_none()));
    }

    #[test]
    fn walk_visits_nested_nodes_in_order() {
        let document = Document::parse(
            r#"{"type":"doc","content":[
                {"type":"bulletList","content":[
                    {"type":"listItem","content":[{"type":"text","text":"a"}]}
                ]},
                {"type":"text","text":"b"}
            ]}"#,
        )
        .expect("document should parse");

        let texts: Vec<_> = document.walk().filter_map(Node::text).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(document.walk().count(), 4);
    }
}
