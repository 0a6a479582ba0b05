use serde_json::{Map, Value, json};

/// Heading levels the exporter knows how to emit.
///
/// The editing framework allows any level, but exported HTML only uses
/// `h2` and `h3`. Every level other than 3 clamps to [`HeadingLevel::H2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    #[default]
    H2,
    H3,
}

impl HeadingLevel {
    /// Reads a level from the `attrs.level` JSON value.
    ///
    /// Accepts integral floats (`3.0`) since JSON does not distinguish them.
    pub fn from_json(level: Option<&Value>) -> Self {
        match level.and_then(Value::as_f64) {
            Some(l) if l == 3.0 => Self::H3,
            _ => Self::H2,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// The type of an inline mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkKind {
    Link,
    Bold,
    Italic,
    Code,
    /// A mark the exporter does not render (underline, strike, ...).
    Other(String),
}

impl MarkKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "link" => Self::Link,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "code" => Self::Code,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Link => "link",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Other(name) => name,
        }
    }

    /// Canonical nesting priority: `link, bold, italic, code`, unknown marks last.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Link => 0,
            Self::Bold => 1,
            Self::Italic => 2,
            Self::Code => 3,
            Self::Other(_) => 4,
        }
    }
}

/// An inline style annotation on a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub kind: MarkKind,
    /// Only meaningful for [`MarkKind::Link`]; the raw, unvalidated href.
    pub href: Option<String>,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self { kind, href: None }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self {
            kind: MarkKind::Link,
            href: Some(href.into()),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let kind = MarkKind::from_name(str_field(obj, "type"));
        let href = obj
            .get("attrs")
            .and_then(|attrs| attrs.get("href"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Self { kind, href })
    }

    fn to_json(&self) -> Value {
        match &self.href {
            Some(href) => json!({ "type": self.kind.name(), "attrs": { "href": href } }),
            None => json!({ "type": self.kind.name() }),
        }
    }
}

/// A node of the editing framework's document tree.
///
/// Block nodes carry `content`; only [`DocNode::Text`] carries text and marks.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    Paragraph {
        content: Vec<DocNode>,
    },
    Heading {
        level: HeadingLevel,
        content: Vec<DocNode>,
    },
    BulletList {
        content: Vec<DocNode>,
    },
    ListItem {
        content: Vec<DocNode>,
    },
    Blockquote {
        content: Vec<DocNode>,
    },
    Text {
        text: String,
        marks: Vec<Mark>,
    },
    /// Any node type without special handling. Exported as its children.
    Unknown {
        kind: String,
        content: Vec<DocNode>,
    },
}

impl DocNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked_text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self::Text {
            text: text.into(),
            marks,
        }
    }

    pub fn paragraph(content: Vec<DocNode>) -> Self {
        Self::Paragraph { content }
    }

    pub fn heading(level: HeadingLevel, content: Vec<DocNode>) -> Self {
        Self::Heading { level, content }
    }

    pub fn bullet_list(content: Vec<DocNode>) -> Self {
        Self::BulletList { content }
    }

    pub fn list_item(content: Vec<DocNode>) -> Self {
        Self::ListItem { content }
    }

    pub fn blockquote(content: Vec<DocNode>) -> Self {
        Self::Blockquote { content }
    }

    /// The framework's name for this node type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::BulletList { .. } => "bulletList",
            Self::ListItem { .. } => "listItem",
            Self::Blockquote { .. } => "blockquote",
            Self::Text { .. } => "text",
            Self::Unknown { kind, .. } => kind,
        }
    }

    /// Child nodes; always empty for text nodes.
    pub fn children(&self) -> &[DocNode] {
        match self {
            Self::Paragraph { content }
            | Self::Heading { content, .. }
            | Self::BulletList { content }
            | Self::ListItem { content }
            | Self::Blockquote { content }
            | Self::Unknown { content, .. } => content,
            Self::Text { .. } => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// True when some text node in this subtree has non-whitespace text.
    /// Marks do not count.
    pub fn has_visible_text(&self) -> bool {
        match self {
            Self::Text { text, .. } => !text.trim().is_empty(),
            other => other.children().iter().any(DocNode::has_visible_text),
        }
    }

    /// Decodes a node from the framework's JSON.
    ///
    /// Never fails: values that are not objects decode to an empty
    /// [`DocNode::Unknown`], and mistyped fields fall back to their empty value.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Unknown {
                kind: String::new(),
                content: Vec::new(),
            };
        };

        let kind = str_field(obj, "type");
        if kind == "text" {
            let marks = obj
                .get("marks")
                .and_then(Value::as_array)
                .map(|marks| marks.iter().filter_map(Mark::from_json).collect())
                .unwrap_or_default();
            return Self::Text {
                text: str_field(obj, "text").to_string(),
                marks,
            };
        }

        let content = decode_children(obj.get("content"));
        match kind {
            "paragraph" => Self::Paragraph { content },
            "heading" => Self::Heading {
                level: HeadingLevel::from_json(obj.get("attrs").and_then(|a| a.get("level"))),
                content,
            },
            "bulletList" => Self::BulletList { content },
            "listItem" => Self::ListItem { content },
            "blockquote" => Self::Blockquote { content },
            other => Self::Unknown {
                kind: other.to_string(),
                content,
            },
        }
    }

    /// Encodes the node back into the framework's JSON shape.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text { text, marks } if marks.is_empty() => {
                json!({ "type": "text", "text": text })
            }
            Self::Text { text, marks } => json!({
                "type": "text",
                "text": text,
                "marks": marks.iter().map(Mark::to_json).collect::<Vec<_>>(),
            }),
            Self::Heading { level, content } => json!({
                "type": "heading",
                "attrs": { "level": level.number() },
                "content": encode_children(content),
            }),
            other => json!({
                "type": other.type_name(),
                "content": encode_children(other.children()),
            }),
        }
    }
}

pub(crate) fn decode_children(content: Option<&Value>) -> Vec<DocNode> {
    content
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(DocNode::from_json).collect())
        .unwrap_or_default()
}

pub(crate) fn encode_children(content: &[DocNode]) -> Vec<Value> {
    content.iter().map(DocNode::to_json).collect()
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or_default()
}
