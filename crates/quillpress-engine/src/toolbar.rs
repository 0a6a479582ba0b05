use serde::Serialize;

use crate::document::{DocNode, Document, HeadingLevel, MarkKind};
use crate::links::validate_url;

/// Which toolbar buttons show as active for a cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub link: bool,
    pub heading2: bool,
    pub heading3: bool,
    pub bullet_list: bool,
    pub blockquote: bool,
}

impl ToolbarState {
    /// State for the node at `path`, a child-index path from the document root.
    ///
    /// Enclosing blocks switch on the block buttons; a text node at the end
    /// of the path switches on its mark buttons. A path that runs off the
    /// tree is followed as far as it is valid.
    pub fn at(doc: &Document, path: &[usize]) -> Self {
        let mut state = Self::default();
        for node in doc.path_nodes(path) {
            match node {
                DocNode::Heading {
                    level: HeadingLevel::H2,
                    ..
                } => state.heading2 = true,
                DocNode::Heading {
                    level: HeadingLevel::H3,
                    ..
                } => state.heading3 = true,
                DocNode::BulletList { .. } => state.bullet_list = true,
                DocNode::Blockquote { .. } => state.blockquote = true,
                DocNode::Text { marks, .. } => {
                    for mark in marks {
                        match mark.kind {
                            MarkKind::Bold => state.bold = true,
                            MarkKind::Italic => state.italic = true,
                            MarkKind::Code => state.code = true,
                            MarkKind::Link => {
                                state.link |= mark
                                    .href
                                    .as_deref()
                                    .is_some_and(|href| validate_url(href).is_ok());
                            }
                            MarkKind::Other(_) => {}
                        }
                    }
                }
                _ => {}
            }
        }
        state
    }

    pub fn any_active(&self) -> bool {
        *self != Self::default()
    }
}
