use crate::document::{DocNode, Mark};

use super::{UrlError, validate_url};

/// What the link dialog submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRequest {
    /// The href as typed by the user.
    pub href: String,
    /// Optional display text. Only used when nothing is selected.
    pub text: Option<String>,
    /// Whether the editor has a non-empty selection to link.
    pub has_selection: bool,
}

/// The edit the editor should perform for a submitted link dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEdit {
    /// Put a link mark with this href on the current selection.
    ApplyToSelection { href: String },
    /// Insert this linked text node at the cursor.
    InsertText { node: DocNode },
}

/// Turns a link dialog submission into an edit, or the error to show inline.
pub fn plan_link(request: &LinkRequest) -> Result<LinkEdit, UrlError> {
    let href: String = validate_url(&request.href)?.into();

    if request.has_selection {
        return Ok(LinkEdit::ApplyToSelection { href });
    }

    let text = request
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or_else(|| href.clone(), str::to_string);

    Ok(LinkEdit::InsertText {
        node: DocNode::marked_text(text, vec![Mark::link(href)]),
    })
}
