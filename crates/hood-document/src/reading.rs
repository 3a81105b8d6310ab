use crate::model::{Document, Node};

/// Average reading speed used by the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimates the minutes needed to read a serialized document.
///
/// Returns at least `1`, including for input that is not a structured
/// document.
pub fn reading_minutes(serialized: &str) -> u32 {
    Document::parse_or_log(serialized).map_or(1, |document| document.reading_minutes())
}

impl Document {
    /// Counts whitespace-separated words across every text node of the tree.
    ///
    /// Empty and whitespace-only text nodes count no words.
    pub fn word_count(&self) -> usize {
        self.walk()
            .filter_map(Node::text)
            .map(|text| text.split_whitespace().count())
            .sum()
    }

    /// Returns the estimated reading time in whole minutes, at least `1`.
    pub fn reading_minutes(&self) -> u32 {
        let minutes = self.word_count().div_ceil(WORDS_PER_MINUTE).max(1);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_words(count: usize) -> String {
        let text = vec!["word"; count].join(" ");
        format!(
            r#"{{"type":"doc","content":[{{"type":"paragraph","content":[{{"type":"text","text":"{text}"}}]}}]}}"#
        )
    }

    #[test]
    fn malformed_input_reads_in_one_minute() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes("not json"), 1);
        assert_eq!(reading_minutes(r#"{"type":"doc","content":{}}"#), 1);
        assert_eq!(reading_minutes(r#"{"content":[]}"#), 1);
    }

    #[test]
    fn rounds_up_per_two_hundred_words() {
        assert_eq!(reading_minutes(&doc_with_words(0)), 1);
        assert_eq!(reading_minutes(&doc_with_words(200)), 1);
        assert_eq!(reading_minutes(&doc_with_words(201)), 2);
        assert_eq!(reading_minutes(&doc_with_words(1000)), 5);
    }

    #[test]
    fn counts_words_in_nested_and_unknown_nodes() {
        let input = r#"{"type":"doc","content":[
            {"type":"bulletList","content":[{"type":"listItem","content":[
                {"type":"paragraph","content":[{"type":"text","text":"one  two\nthree"}]}
            ]}]},
            {"type":"callout","content":[{"type":"text","text":"four"}]},
            {"type":"text","text":"   "},
            {"type":"text","text":""}
        ]}"#;

        // The blank text nodes add nothing: splitting "   " yields no words.

        let document = Document::parse(input).expect("document should parse");
        assert_eq!(document.word_count(), 4);
        assert_eq!(reading_minutes(input), 1);
    }
}
