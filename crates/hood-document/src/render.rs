//! HTML rendering of documents.

use crate::model::{DEFAULT_HIGHLIGHT_COLOR, Document, Mark, Node};
use crate::{TRACING_TARGET_RENDER, escape_html};

const DOCUMENT_CLASS: &str = "prose prose-lg max-w-none";
const FALLBACK_CLASS: &str = "prose max-w-none";
const PARAGRAPH_CLASS: &str = "mb-4 text-gray-800 leading-relaxed";
const INLINE_CODE_CLASS: &str = "bg-gray-100 px-1.5 py-0.5 rounded text-sm font-mono";
const LINK_CLASS: &str = "text-side-2 hover:text-side-1 underline";
const BULLET_LIST_CLASS: &str = "list-disc ms-6 mb-4 space-y-1 text-gray-800";
const ORDERED_LIST_CLASS: &str = "list-decimal ms-6 mb-4 space-y-1 text-gray-800";
const LIST_ITEM_CLASS: &str = "mb-1";
const BLOCKQUOTE_CLASS: &str =
    "border-s-4 border-side-2 ps-4 py-2 mb-4 italic text-gray-700 bg-gray-50";
const CODE_BLOCK_CLASS: &str = "bg-gray-900 text-gray-100 p-4 rounded-lg mb-4 overflow-x-auto";
const CODE_BLOCK_CODE_CLASS: &str = "font-mono text-sm";
const HORIZONTAL_RULE_CLASS: &str = "my-8 border-gray-300";
const IMAGE_CLASS: &str = "max-w-full h-auto rounded-lg my-6";
const DEFAULT_ALIGN: &str = "left";
const TEXT_ALIGNS: [&str; 6] = ["left", "right", "center", "justify", "start", "end"];
const LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Returns the classes of a heading of the given rank.
fn heading_class(level: u8) -> &'static str {
    match level {
        1 => "text-3xl font-bold mb-6 mt-8 text-secondary",
        2 => "text-2xl font-bold mb-5 mt-6 text-secondary",
        3 => "text-xl font-bold mb-4 mt-5 text-secondary",
        4 => "text-base font-bold mb-3 mt-4 text-gray-800",
        5 => "text-sm font-bold mb-3 mt-3 text-gray-800",
        _ => "text-xs font-bold mb-2 mt-2 text-gray-800",
    }
}

/// Renders a serialized document into an HTML fragment.
///
/// Input that is not a structured document is escaped and wrapped in a
/// minimal container instead. This function never fails.
pub fn render(serialized: &str) -> String {
    match Document::parse_or_log(serialized) {
        Some(document) => HtmlRenderer::new().render(&document),
        None => format!(
            r#"<div class="{FALLBACK_CLASS}">{}</div>"#,
            escape_html(serialized)
        ),
    }
}

/// Streaming HTML writer over the document tree.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: String,
    dropped: usize,
}

impl HtmlRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the whole document, wrapped in the prose container.
    pub fn render(mut self, document: &Document) -> String {
        self.output
            .push_str(&format!(r#"<div class="{DOCUMENT_CLASS}">"#));
        self.nodes(document.content());
        self.output.push_str("</div>");

        if self.dropped > 0 {
            tracing::debug!(
                target: TRACING_TARGET_RENDER,
                dropped = self.dropped,
                "Dropped nodes of unknown kind"
            );
        }

        self.output
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Paragraph { align, content } => {
                self.open_aligned("p", PARAGRAPH_CLASS, align.as_deref());
                if content.is_empty() {
                    self.output.push_str("<br>");
                } else {
                    self.nodes(content);
                }
                self.output.push_str("</p>");
            }
            Node::Heading {
                level,
                align,
                content,
            } => {
                let tag = format!("h{level}");
                self.open_aligned(&tag, heading_class(*level), align.as_deref());
                self.nodes(content);
                self.output.push_str(&format!("</{tag}>"));
            }
            Node::Text { text, marks } => {
                let html = marks
                    .iter()
                    .fold(escape_html(text), |inner, mark| wrap_mark(mark, inner));
                self.output.push_str(&html);
            }
            Node::HardBreak => self.output.push_str("<br>"),
            Node::BulletList { content } => {
                self.output
                    .push_str(&format!(r#"<ul class="{BULLET_LIST_CLASS}">"#));
                self.nodes(content);
                self.output.push_str("</ul>");
            }
            Node::OrderedList { start, content } => {
                self.output.push_str(&format!(
                    r#"<ol class="{ORDERED_LIST_CLASS}" start="{start}">"#
                ));
                self.nodes(content);
                self.output.push_str("</ol>");
            }
            Node::ListItem { content } => {
                self.output
                    .push_str(&format!(r#"<li class="{LIST_ITEM_CLASS}">"#));
                self.nodes(content);
                self.output.push_str("</li>");
            }
            Node::Blockquote { content } => {
                self.output
                    .push_str(&format!(r#"<blockquote class="{BLOCKQUOTE_CLASS}">"#));
                self.nodes(content);
                self.output.push_str("</blockquote>");
            }
            Node::CodeBlock { .. } => {
                self.output.push_str(&format!(
                    r#"<pre class="{CODE_BLOCK_CLASS}"><code class="{CODE_BLOCK_CODE_CLASS}">{}</code></pre>"#,
                    escape_html(&node.direct_text())
                ));
            }
            Node::HorizontalRule => {
                self.output
                    .push_str(&format!(r#"<hr class="{HORIZONTAL_RULE_CLASS}">"#));
            }
            Node::Image { src, alt, title } => {
                self.output.push_str("<img");
                if let Some(src) = src {
                    self.attribute("src", src);
                }
                self.attribute("alt", alt.as_deref().unwrap_or_default());
                if let Some(title) = title {
                    self.attribute("title", title);
                }
                self.output.push_str(&format!(r#" class="{IMAGE_CLASS}">"#));
            }
            Node::Unknown { .. } => self.dropped += 1,
        }
    }

    fn open_aligned(&mut self, tag: &str, class: &str, align: Option<&str>) {
        let align = text_align(align);
        self.output.push_str(&format!(
            r#"<{tag} class="{class}" style="text-align: {align}">"#
        ));
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.output
            .push_str(&format!(r#" {name}="{}""#, escape_html(value)));
    }
}

/// Returns a known `text-align` keyword, or `left` for anything else.
fn text_align(align: Option<&str>) -> &'static str {
    let align = align.unwrap_or_default().trim();
    TEXT_ALIGNS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(align))
        .unwrap_or(DEFAULT_ALIGN)
}

/// Returns a color or size that can only ever be a single CSS value.
///
/// Anything able to end the declaration or call a function is refused.
fn css_value(value: &str) -> Option<&str> {
    let value = value.trim();
    let unsafe_char = |c: char| matches!(c, ';' | ':' | '(' | ')' | '{' | '}' | '\\' | '"' | '\'' | '<' | '>');
    (!value.is_empty() && !value.contains(unsafe_char)).then_some(value)
}

/// Returns `href` when it is relative or uses a web, mail or phone scheme.
fn link_href(href: &str) -> Option<&str> {
    match url::Url::parse(href) {
        Ok(url) => LINK_SCHEMES.contains(&url.scheme()).then_some(href),
        Err(url::ParseError::RelativeUrlWithoutBase) => Some(href),
        Err(_) => None,
    }
}

/// Wraps already-rendered inline HTML in the element for one mark.
fn wrap_mark(mark: &Mark, inner: String) -> String {
    match mark {
        Mark::Bold => format!("<strong>{inner}</strong>"),
        Mark::Italic => format!("<em>{inner}</em>"),
        Mark::Underline => format!("<u>{inner}</u>"),
        Mark::Strike => format!("<s>{inner}</s>"),
        Mark::Code => format!(r#"<code class="{INLINE_CODE_CLASS}">{inner}</code>"#),
        Mark::Link { href, target } => {
            let mut open = String::from("<a");
            if let Some(href) = href.as_deref().and_then(link_href) {
                open.push_str(&format!(r#" href="{}""#, escape_html(href)));
            }
            if let Some(target) = target {
                open.push_str(&format!(r#" target="{}""#, escape_html(target)));
            }
            format!(r#"{open} class="{LINK_CLASS}">{inner}</a>"#)
        }
        Mark::TextStyle { color, font_size } => {
            let style: Vec<String> = [
                color
                    .as_deref()
                    .and_then(css_value)
                    .map(|c| format!("color: {}", escape_html(c))),
                font_size
                    .as_deref()
                    .and_then(css_value)
                    .map(|s| format!("font-size: {}", escape_html(s))),
            ]
            .into_iter()
            .flatten()
            .collect();

            if style.is_empty() {
                format!("<span>{inner}</span>")
            } else {
                format!(r#"<span style="{}">{inner}</span>"#, style.join("; "))
            }
        }
        Mark::Highlight { color } => {
            let color = color
                .as_deref()
                .and_then(css_value)
                .unwrap_or(DEFAULT_HIGHLIGHT_COLOR);
            let color = escape_html(color);
            format!(r#"<mark style="background-color: {color}">{inner}</mark>"#)
        }
        Mark::Unknown { .. } => inner,
    }
}
