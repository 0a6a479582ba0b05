//! # Document Model
//!
//! Typed view of the JSON tree the editing framework hands out after every
//! edit (its `getJSON()` accessor). The framework owns the document; this
//! crate only reads it.
//!
//! Decoding is lenient: malformed input turns into an empty or partial
//! document, never an error. The single
//! fallible entry point is [`Document::from_json_str`], which fails only when
//! the input is not JSON at all.

pub mod node;

pub use node::{DocNode, HeadingLevel, Mark, MarkKind};

use serde_json::{Value, json};

use crate::error::EngineError;
use crate::export::generate_clean_html;
use crate::stats::{Stats, calculate_stats};

/// Separator placed between text blocks by [`Document::plain_text`].
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Plain text of an inline `hardBreak` node.
pub const HARD_BREAK_TEXT: &str = "\n";

/// The root of a document: an ordered list of top-level block nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: Vec<DocNode>,
}

impl Document {
    pub fn new(content: Vec<DocNode>) -> Self {
        Self { content }
    }

    /// Decodes a document from the framework's JSON.
    ///
    /// Anything that is not an object with a `content` array yields an empty
    /// document.
    pub fn from_json(value: &Value) -> Self {
        Self {
            content: node::decode_children(value.get("content")),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_json(&value))
    }

    pub fn to_json(&self) -> Value {
        json!({
            "type": "doc",
            "content": node::encode_children(&self.content),
        })
    }

    /// Plain text of the document, with text blocks separated by a blank line.
    pub fn plain_text(&self) -> String {
        let mut blocks = Vec::new();
        collect_text_blocks(&self.content, &mut blocks);
        blocks.join(BLOCK_SEPARATOR)
    }

    /// True when no text node carries visible text.
    pub fn is_empty(&self) -> bool {
        !self.content.iter().any(DocNode::has_visible_text)
    }

    pub fn to_html(&self) -> String {
        generate_clean_html(self)
    }

    pub fn stats(&self) -> Stats {
        calculate_stats(&self.plain_text())
    }

    /// Follows a child-index path from the root.
    ///
    /// Returns every node on the way, outermost first. The walk stops at the
    /// first index that does not exist.
    pub fn path_nodes(&self, path: &[usize]) -> Vec<&DocNode> {
        let mut nodes = Vec::with_capacity(path.len());
        let mut siblings: &[DocNode] = &self.content;
        for &index in path {
            let Some(node) = siblings.get(index) else {
                break;
            };
            nodes.push(node);
            siblings = node.children();
        }
        nodes
    }
}

fn collect_text_blocks(nodes: &[DocNode], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            DocNode::Text { text, .. } => out.push(text.clone()),
            _ if node.children().iter().any(DocNode::is_text) => out.push(inline_text(node)),
            _ => collect_text_blocks(node.children(), out),
        }
    }
}

fn inline_text(node: &DocNode) -> String {
    let mut text = String::new();
    for child in node.children() {
        match child {
            DocNode::Text { text: t, .. } => text.push_str(t),
            DocNode::Unknown { kind, content } if kind == "hardBreak" && content.is_empty() => {
                text.push_str(HARD_BREAK_TEXT)
            }
            other => text.push_str(&inline_text(other)),
        }
    }
    text
}
