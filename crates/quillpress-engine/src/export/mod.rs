//! # HTML Export
//!
//! Turns a [`Document`](crate::document::Document) into restricted, escaped
//! HTML suitable for copying out of the editor.
//!
//! ## Output contract
//!
//! - Only `p, h2, h3, ul, li, strong, em, a, code, blockquote` are emitted,
//!   plus `<br>` between quoted lines inside a blockquote.
//! - Text never contains raw `&`, `<` or `>`.
//! - `href` is the only attribute, holds a validated `http`, `https` or
//!   `mailto` URL, and never contains raw quotes.
//!
//! ## Modules
//!
//! - **`html`**: recursive block walk, `generate_clean_html()`
//! - **`marks`**: inline mark ordering and the `TagStack`
//! - **`escape`**: body and attribute escaping
//! - **`format`**: `format_html_for_display()` pretty-printer

pub mod escape;
pub mod format;
pub mod html;
pub mod marks;

pub use escape::{escape_attribute, escape_text};
pub use format::format_html_for_display;
pub use html::{ALLOWED_TAGS, QUOTE_LINE_BREAK, generate_clean_html, generate_clean_html_json};
pub use marks::{TagStack, render_text};
