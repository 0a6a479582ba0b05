//! Inline mark composition for text nodes.
//!
//! Marks arrive from the framework in arbitrary order. They are sorted into
//! the canonical `link, bold, italic, code` order and pushed onto a
//! [`TagStack`], so tags always nest the same way for the same set of marks.

use std::collections::VecDeque;

use crate::document::{Mark, MarkKind};
use crate::links::validate_url;

use super::escape::{escape_attribute, escape_text};

/// Ordered open/close tag pairs.
///
/// Openings are emitted in push order, closings in reverse, which keeps the
/// nesting well formed whatever was pushed.
#[derive(Debug, Default)]
pub struct TagStack {
    opens: Vec<String>,
    closes: VecDeque<&'static str>,
}

impl TagStack {
    pub fn push(&mut self, open: impl Into<String>, close: &'static str) {
        self.opens.push(open.into());
        self.closes.push_front(close);
    }

    pub fn is_empty(&self) -> bool {
        self.opens.is_empty()
    }

    /// Surrounds `inner` with every pushed pair.
    pub fn wrap(&self, inner: &str) -> String {
        let mut out = String::with_capacity(inner.len() + 16 * self.opens.len());
        for open in &self.opens {
            out.push_str(open);
        }
        out.push_str(inner);
        for close in &self.closes {
            out.push_str(close);
        }
        out
    }
}

/// Renders a text node: escaped text wrapped in its mark tags.
///
/// Link marks whose href fails validation are skipped; the text is still
/// rendered, just without the anchor.
pub fn render_text(text: &str, marks: &[Mark]) -> String {
    let escaped = escape_text(text);
    if marks.is_empty() {
        return escaped.into_owned();
    }

    let mut ordered: Vec<&Mark> = marks.iter().collect();
    ordered.sort_by_key(|mark| mark.kind.priority());

    let mut stack = TagStack::default();
    for mark in ordered {
        match &mark.kind {
            MarkKind::Link => push_link(&mut stack, mark.href.as_deref()),
            MarkKind::Bold => stack.push("<strong>", "</strong>"),
            MarkKind::Italic => stack.push("<em>", "</em>"),
            MarkKind::Code => stack.push("<code>", "</code>"),
            MarkKind::Other(_) => {}
        }
    }
    stack.wrap(&escaped)
}

fn push_link(stack: &mut TagStack, href: Option<&str>) {
    let Some(href) = href else {
        log::debug!("dropping link mark without href");
        return;
    };
    match validate_url(href) {
        Ok(url) => stack.push(
            format!("<a href=\"{}\">", escape_attribute(url.as_str())),
            "</a>",
        ),
        Err(e) => log::debug!("dropping link mark: {e}"),
    }
}
