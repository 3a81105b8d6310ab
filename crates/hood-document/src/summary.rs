//! Plain-text summaries for previews and meta descriptions.

use crate::model::{Document, Node};

/// Maximum number of paragraphs collected into a summary.
pub const MAX_SUMMARY_PARAGRAPHS: usize = 3;

/// Maximum length, in characters, of the fallback summary.
pub const MAX_FALLBACK_CHARS: usize = 200;

/// Maximum length, in characters, of a meta description before the ellipsis.
pub const MAX_META_DESCRIPTION_CHARS: usize = 150;

/// Extracts a plain-text summary from a serialized document.
///
/// Collects the trimmed text of up to three leading non-empty paragraphs.
/// Documents without such paragraphs fall back to the text children of all
/// top-level nodes, truncated to 200 characters. Input that is not a
/// structured document is returned unchanged.
pub fn summarize(serialized: &str) -> String {
    match Document::parse_or_log(serialized) {
        Some(document) => document.summary(),
        None => serialized.to_owned(),
    }
}

/// Shortens a summary into a meta description, appending `...` when cut.
pub fn meta_description(summary: &str) -> String {
    if summary.chars().count() <= MAX_META_DESCRIPTION_CHARS {
        return summary.to_owned();
    }

    let mut description: String = summary.chars().take(MAX_META_DESCRIPTION_CHARS).collect();
    description.push_str("...");
    description
}

impl Document {
    /// Returns the plain-text summary of this document.
    pub fn summary(&self) -> String {
        let paragraphs: Vec<String> = self
            .content()
            .iter()
            .filter(|node| matches!(node, Node::Paragraph { .. }))
            .map(|node| node.direct_text().trim().to_owned())
            .filter(|text| !text.is_empty())
            .take(MAX_SUMMARY_PARAGRAPHS)
            .collect();

        if !paragraphs.is_empty() {
            return paragraphs.join(" ");
        }

        let fallback = self
            .content()
            .iter()
            .flat_map(Node::children)
            .filter_map(Node::text)
            .collect::<Vec<_>>()
            .join(" ");

        fallback.chars().take(MAX_FALLBACK_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> String {
        format!(r#"{{"type":"paragraph","content":[{{"type":"text","text":"{text}"}}]}}"#)
    }

    fn doc(nodes: &[String]) -> String {
        format!(r#"{{"type":"doc","content":[{}]}}"#, nodes.join(","))
    }

    #[test]
    fn returns_raw_input_when_not_a_document() {
        assert_eq!(summarize("plain text body"), "plain text body");
        assert_eq!(summarize(r#"{"type":"x"}"#), r#"{"type":"x"}"#);
    }

    #[test]
    fn collects_at_most_three_paragraphs() {
        let input = doc(&[
            paragraph("  one "),
            paragraph("two"),
            r#"{"type":"paragraph"}"#.to_owned(),
            paragraph("   "),
            paragraph("three"),
            paragraph("four"),
        ]);
        assert_eq!(summarize(&input), "one two three");
    }

    #[test]
    fn ignores_marks_and_non_text_children() {
        let input = doc(&[r#"{"type":"paragraph","content":[
            {"type":"text","text":"Hello ","marks":[{"type":"bold"}]},
            {"type":"hardBreak"},
            {"type":"text","text":"world"}
        ]}"#
        .to_owned()]);
        assert_eq!(summarize(&input), "Hello world");
    }

    #[test]
    fn falls_back_to_top_level_children() {
        let long = "x".repeat(300);
        let input = doc(&[
            r#"{"type":"heading","content":[{"type":"text","text":"Title"}]}"#.to_owned(),
            format!(
                r#"{{"type":"blockquote","content":[{{"type":"text","text":"{long}"}}]}}"#
            ),
        ]);

        let summary = summarize(&input);
        assert_eq!(summary.chars().count(), MAX_FALLBACK_CHARS);
        assert!(summary.starts_with("Title xxx"));
    }

    #[test]
    fn fallback_truncates_by_character() {
        let arabic = "ع".repeat(250);
        let input = doc(&[format!(
            r#"{{"type":"heading","content":[{{"type":"text","text":"{arabic}"}}]}}"#
        )]);
        assert_eq!(summarize(&input), "ع".repeat(200));
    }

    #[test]
    fn malformed_siblings_are_skipped() {
        let input = doc(&[
            paragraph("kept"),
            r#"{"type":7}"#.to_owned(),
            r#"{"type":"mention","attrs":"user-1"}"#.to_owned(),
        ]);
        assert_eq!(summarize(&input), "kept");
    }

    #[test]
    fn empty_document_has_empty_summary() {
        assert_eq!(summarize(r#"{"type":"doc","content":[]}"#), "");
    }

    #[test]
    fn meta_description_truncates_long_summaries() {
        assert_eq!(meta_description("short"), "short");

        let exact = "a".repeat(150);
        assert_eq!(meta_description(&exact), exact);

        let long = "b".repeat(151);
        assert_eq!(meta_description(&long), format!("{}...", "b".repeat(150)));
    }
}
