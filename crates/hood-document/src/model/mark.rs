use serde::Deserialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use super::attrs::Attrs;

/// Default background color of the `highlight` mark.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ffeb3b";

/// Known mark kinds, keyed by their serialized `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(AsRefStr, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Link,
    TextStyle,
    Highlight,
}

/// Inline formatting applied to a text node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Link {
        href: Option<String>,
        target: Option<String>,
    },
    TextStyle {
        color: Option<String>,
        font_size: Option<String>,
    },
    Highlight {
        color: Option<String>,
    },
    /// A mark kind this model does not know; leaves the text unchanged.
    Unknown { kind: String },
}

impl Mark {
    /// Returns the known kind of this mark, or `None` for [`Mark::Unknown`].
    pub fn kind(&self) -> Option<MarkKind> {
        match self {
            Self::Bold => Some(MarkKind::Bold),
            Self::Italic => Some(MarkKind::Italic),
            Self::Underline => Some(MarkKind::Underline),
            Self::Strike => Some(MarkKind::Strike),
            Self::Code => Some(MarkKind::Code),
            Self::Link { .. } => Some(MarkKind::Link),
            Self::TextStyle { .. } => Some(MarkKind::TextStyle),
            Self::Highlight { .. } => Some(MarkKind::Highlight),
            Self::Unknown { .. } => None,
        }
    }
}

/// Reads a mark leniently; a mark that is not an object, or has no string
/// `type`, becomes [`Mark::Unknown`].
impl From<Value> for Mark {
    fn from(value: Value) -> Self {
        let Value::Object(mut mark) = value else {
            return Self::Unknown {
                kind: String::new(),
            };
        };

        let kind = match mark.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => String::new(),
        };
        let attrs = Attrs::new(mark.remove("attrs"));
        let Ok(known) = kind.parse::<MarkKind>() else {
            return Self::Unknown { kind };
        };

        match known {
            MarkKind::Bold => Self::Bold,
            MarkKind::Italic => Self::Italic,
            MarkKind::Underline => Self::Underline,
            MarkKind::Strike => Self::Strike,
            MarkKind::Code => Self::Code,
            MarkKind::Link => Self::Link {
                href: attrs.string("href"),
                target: attrs.string("target"),
            },
            MarkKind::TextStyle => Self::TextStyle {
                color: attrs.string("color"),
                font_size: attrs.string("fontSize"),
            },
            MarkKind::Highlight => Self::Highlight {
                color: attrs.string("color"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Mark {
        serde_json::from_str(json).expect("mark should deserialize")
    }

    #[test]
    fn parses_simple_marks() {
        assert_eq!(parse(r#"{"type":"bold"}"#), Mark::Bold);
        assert_eq!(parse(r#"{"type":"strike","attrs":null}"#), Mark::Strike);
    }

    #[test]
    fn parses_mark_attributes() {
        assert_eq!(
            parse(r#"{"type":"link","attrs":{"href":"https://a.b","target":"_blank"}}"#),
            Mark::Link {
                href: Some("https://a.b".into()),
                target: Some("_blank".into()),
            }
        );
        assert_eq!(
            parse(r#"{"type":"textStyle","attrs":{"fontSize":"18px"}}"#),
            Mark::TextStyle {
                color: None,
                font_size: Some("18px".into()),
            }
        );
        assert_eq!(
            parse(r#"{"type":"highlight"}"#),
            Mark::Highlight { color: None }
        );
    }

    #[test]
    fn unknown_marks_are_kept() {
        let mark = parse(r#"{"type":"subscript","attrs":{"x":1}}"#);
        assert_eq!(
            mark,
            Mark::Unknown {
                kind: "subscript".into()
            }
        );
        assert_eq!(mark.kind(), None);
    }

    #[test]
    fn malformed_marks_are_unknown() {
        assert_eq!(parse(r#""bold""#), Mark::Unknown { kind: String::new() });
        assert_eq!(parse(r#"{"type":3}"#), Mark::Unknown { kind: String::new() });
        assert_eq!(
            parse(r#"{"type":"link","attrs":"https://a.b"}"#),
            Mark::Link {
                href: None,
                target: None,
            }
        );
    }
}
