use serde_json::Value;

use crate::document::{DocNode, Document};

use super::marks::render_text;

/// Tags the exporter may emit.
pub const ALLOWED_TAGS: [&str; 10] = [
    "p",
    "h2",
    "h3",
    "ul",
    "li",
    "strong",
    "em",
    "a",
    "code",
    "blockquote",
];

/// Separator between quoted lines inside a `<blockquote>`.
pub const QUOTE_LINE_BREAK: &str = "<br>";

/// Exports a document as restricted, escaped HTML.
///
/// Produces one fragment per top-level block, joined by newlines. Blocks
/// without visible text (empty paragraphs, empty lists, ...) are left out.
pub fn generate_clean_html(doc: &Document) -> String {
    doc.content
        .iter()
        .filter(|node| node.has_visible_text())
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exports raw framework JSON. Malformed input yields an empty string.
pub fn generate_clean_html_json(doc: &Value) -> String {
    generate_clean_html(&Document::from_json(doc))
}

fn render_node(node: &DocNode) -> String {
    match node {
        DocNode::Paragraph { content } => wrap_block("p", content),
        DocNode::Heading { level, content } => wrap_block(level.tag(), content),
        DocNode::BulletList { content } => render_list(content),
        DocNode::ListItem { content } => render_list_item(content),
        DocNode::Blockquote { content } => render_blockquote(content),
        DocNode::Text { text, marks } => render_text(text, marks),
        DocNode::Unknown { kind, content } => {
            log::debug!("passing through unknown node type {kind:?}");
            render_children(content)
        }
    }
}

fn render_children(content: &[DocNode]) -> String {
    content.iter().map(render_node).collect()
}

fn wrap_block(tag: &str, content: &[DocNode]) -> String {
    if !content.iter().any(DocNode::has_visible_text) {
        return String::new();
    }
    format!("<{tag}>{}</{tag}>", render_children(content))
}

fn render_list(items: &[DocNode]) -> String {
    let items: String = items
        .iter()
        .map(|item| render_list_item(item.children()))
        .collect();
    if items.is_empty() {
        return String::new();
    }
    format!("<ul>{items}</ul>")
}

fn render_list_item(content: &[DocNode]) -> String {
    let parts = item_parts(content);
    if parts.is_empty() {
        return String::new();
    }
    format!("<li>{}</li>", parts.concat())
}

fn render_blockquote(content: &[DocNode]) -> String {
    let parts = item_parts(content);
    if parts.is_empty() {
        return String::new();
    }
    format!("<blockquote>{}</blockquote>", parts.join(QUOTE_LINE_BREAK))
}

/// Renders the children of a list item or blockquote.
///
/// Paragraphs contribute bare inline content, nested lists their `<ul>`.
/// Children without visible text are dropped.
fn item_parts(content: &[DocNode]) -> Vec<String> {
    content
        .iter()
        .filter(|child| child.has_visible_text())
        .map(|child| match child {
            DocNode::Paragraph { content } => render_children(content),
            DocNode::BulletList { content } => render_list(content),
            other => render_node(other),
        })
        .collect()
}
