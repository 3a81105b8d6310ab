use serde::Deserialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use super::Mark;
use super::attrs::Attrs;

/// Known node kinds, keyed by their serialized `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(AsRefStr, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum NodeKind {
    Paragraph,
    Heading,
    Text,
    HardBreak,
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    CodeBlock,
    HorizontalRule,
    Image,
}

/// A single node of the document tree.
///
/// Attributes are resolved while deserializing, so a node carries only the
/// attributes its kind uses. Anything with an unrecognized or non-string
/// `type`, and any value that is not an object, becomes [`Node::Unknown`].
/// Deserializing a node never fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Node {
    Paragraph {
        align: Option<String>,
        content: Vec<Node>,
    },
    Heading {
        /// Heading rank, always within `1..=6`.
        level: u8,
        align: Option<String>,
        content: Vec<Node>,
    },
    Text {
        text: String,
        marks: Vec<Mark>,
    },
    HardBreak,
    BulletList {
        content: Vec<Node>,
    },
    OrderedList {
        start: i64,
        content: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    CodeBlock {
        content: Vec<Node>,
    },
    HorizontalRule,
    Image {
        src: Option<String>,
        alt: Option<String>,
        title: Option<String>,
    },
    Unknown {
        kind: String,
        content: Vec<Node>,
    },
}

impl Node {
    /// Returns the known kind of this node, or `None` for [`Node::Unknown`].
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::Paragraph { .. } => Some(NodeKind::Paragraph),
            Self::Heading { .. } => Some(NodeKind::Heading),
            Self::Text { .. } => Some(NodeKind::Text),
            Self::HardBreak => Some(NodeKind::HardBreak),
            Self::BulletList { .. } => Some(NodeKind::BulletList),
            Self::OrderedList { .. } => Some(NodeKind::OrderedList),
            Self::ListItem { .. } => Some(NodeKind::ListItem),
            Self::Blockquote { .. } => Some(NodeKind::Blockquote),
            Self::CodeBlock { .. } => Some(NodeKind::CodeBlock),
            Self::HorizontalRule => Some(NodeKind::HorizontalRule),
            Self::Image { .. } => Some(NodeKind::Image),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the child nodes, or an empty slice for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Paragraph { content, .. }
            | Self::Heading { content, .. }
            | Self::BulletList { content }
            | Self::OrderedList { content, .. }
            | Self::ListItem { content }
            | Self::Blockquote { content }
            | Self::CodeBlock { content }
            | Self::Unknown { content, .. } => content,
            Self::Text { .. } | Self::HardBreak | Self::HorizontalRule | Self::Image { .. } => &[],
        }
    }

    /// Returns the literal string of a text node.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Concatenates the literal strings of the direct text children.
    pub fn direct_text(&self) -> String {
        self.children().iter().filter_map(Node::text).collect()
    }
}

/// Reads the children of a node; anything but an array reads as none.
fn children(content: Option<Value>) -> Vec<Node> {
    match content {
        Some(Value::Array(items)) => items.into_iter().map(Node::from).collect(),
        _ => Vec::new(),
    }
}

fn marks(marks: Option<Value>) -> Vec<Mark> {
    match marks {
        Some(Value::Array(items)) => items.into_iter().map(Mark::from).collect(),
        _ => Vec::new(),
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        let Value::Object(mut node) = value else {
            return Self::Unknown {
                kind: String::new(),
                content: Vec::new(),
            };
        };

        let kind = match node.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => String::new(),
        };
        let attrs = Attrs::new(node.remove("attrs"));
        let content = children(node.remove("content"));
        let Ok(known) = kind.parse::<NodeKind>() else {
            return Self::Unknown { kind, content };
        };

        match known {
            NodeKind::Paragraph => Self::Paragraph {
                align: attrs.string("textAlign"),
                content,
            },
            NodeKind::Heading => Self::Heading {
                level: attrs.integer("level").map_or(1, |level| level.clamp(1, 6) as u8),
                align: attrs.string("textAlign"),
                content,
            },
            NodeKind::Text => Self::Text {
                text: match node.remove("text") {
                    Some(Value::String(text)) => text,
                    _ => String::new(),
                },
                marks: marks(node.remove("marks")),
            },
            NodeKind::HardBreak => Self::HardBreak,
            NodeKind::BulletList => Self::BulletList { content },
            NodeKind::OrderedList => Self::OrderedList {
                start: attrs.integer("start").filter(|start| *start >= 1).unwrap_or(1),
                content,
            },
            NodeKind::ListItem => Self::ListItem { content },
            NodeKind::Blockquote => Self::Blockquote { content },
            NodeKind::CodeBlock => Self::CodeBlock { content },
            NodeKind::HorizontalRule => Self::HorizontalRule,
            NodeKind::Image => Self::Image {
                src: attrs.string("src"),
                alt: attrs.string("alt"),
                title: attrs.string("title"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Node {
        serde_json::from_str(json).expect("node should deserialize")
    }

    #[test]
    fn heading_level_is_clamped() {
        let node = parse(r#"{"type":"heading","attrs":{"level":9},"content":[]}"#);
        assert!(matches!(node, Node::Heading { level: 6, .. }));

        let node = parse(r#"{"type":"heading","attrs":{"level":0}}"#);
        assert!(matches!(node, Node::Heading { level: 1, .. }));

        let node = parse(r#"{"type":"heading","attrs":{"level":"3"}}"#);
        assert!(matches!(node, Node::Heading { level: 3, .. }));

        let node = parse(r#"{"type":"heading"}"#);
        assert!(matches!(node, Node::Heading { level: 1, .. }));
    }

    #[test]
    fn ordered_list_start_defaults_to_one() {
        let node = parse(r#"{"type":"orderedList","content":[]}"#);
        assert!(matches!(node, Node::OrderedList { start: 1, .. }));

        let node = parse(r#"{"type":"orderedList","attrs":{"start":"5"}}"#);
        assert!(matches!(node, Node::OrderedList { start: 5, .. }));

        for start in ["0", "-3"] {
            let node = parse(&format!(r#"{{"type":"orderedList","attrs":{{"start":{start}}}}}"#));
            assert!(matches!(node, Node::OrderedList { start: 1, .. }));
        }
    }

    #[test]
    fn unknown_nodes_keep_their_children() {
        let node = parse(
            r#"{"type":"table","content":[{"type":"text","text":"cell"},{"type":"hardBreak"}]}"#,
        );
        assert_eq!(node.kind(), None);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.direct_text(), "cell");
    }

    #[test]
    fn text_nodes_carry_marks() {
        let node = parse(r#"{"type":"text","text":"x","marks":[{"type":"bold"},{"type":"italic"}]}"#);
        assert_eq!(
            node,
            Node::Text {
                text: "x".into(),
                marks: vec![Mark::Bold, Mark::Italic],
            }
        );
        assert_eq!(node.text(), Some("x"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn malformed_nodes_become_unknown() {
        let node = parse(r#"{"type":7,"content":[{"type":"text","text":"x"}]}"#);
        assert_eq!(node.kind(), None);
        assert_eq!(node.direct_text(), "x");

        assert_eq!(parse(r#""paragraph""#).kind(), None);
        assert_eq!(parse("null").kind(), None);
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let node = parse(r#"{"type":"mention","attrs":"user-1"}"#);
        assert!(matches!(node, Node::Unknown { ref kind, .. } if kind == "mention"));

        let node = parse(r#"{"type":"paragraph","attrs":"center","content":{"type":"text"}}"#);
        assert_eq!(
            node,
            Node::Paragraph {
                align: None,
                content: Vec::new(),
            }
        );

        let node = parse(r#"{"type":"text","text":5,"marks":[{"type":"bold"},"italic"]}"#);
        assert_eq!(
            node,
            Node::Text {
                text: String::new(),
                marks: vec![Mark::Bold, Mark::Unknown { kind: String::new() }],
            }
        );
    }
}
