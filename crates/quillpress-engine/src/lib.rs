//! Export and statistics core for the quillpress rich-text editor.
//!
//! The editing framework in the browser owns the live document. After every
//! edit the front end hands this crate the framework's JSON tree and plain
//! text, and gets back clean HTML, text statistics and toolbar state. All
//! functions here are pure: no I/O, no shared state.

pub mod document;
pub mod error;
pub mod export;
pub mod links;
pub mod stats;
pub mod toolbar;

// Re-export key types for easier usage
pub use document::{DocNode, Document, HeadingLevel, Mark, MarkKind};
pub use error::EngineError;
pub use export::{format_html_for_display, generate_clean_html, generate_clean_html_json};
pub use links::{LinkEdit, LinkRequest, UrlError, UrlValidation, plan_link, validate_url};
pub use stats::{Stats, calculate_stats, calculate_stats_with};
pub use toolbar::ToolbarState;
