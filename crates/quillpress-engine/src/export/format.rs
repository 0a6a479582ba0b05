use std::sync::OnceLock;

use regex::Regex;

/// Pretty-prints exported HTML for display.
///
/// Breaks lines after closing block tags and around list markup, then
/// collapses runs of three or more newlines to a single blank line. Purely
/// cosmetic: the markup is neither validated nor re-parsed, and only the
/// newlines it added are trimmed from the ends.
pub fn format_html_for_display(html: &str) -> String {
    static BLOCK_CLOSE: OnceLock<Regex> = OnceLock::new();
    static EXTRA_NEWLINES: OnceLock<Regex> = OnceLock::new();

    let block_close = BLOCK_CLOSE.get_or_init(|| {
        Regex::new(r"</(?:p|h2|h3|ul|li|blockquote)>").expect("Invalid block close regex")
    });
    let extra_newlines =
        EXTRA_NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

    let spaced = block_close.replace_all(html, "$0\n");
    let spaced = spaced.replace("<ul>", "<ul>\n").replace("<li>", "\n<li>");
    extra_newlines
        .replace_all(&spaced, "\n\n")
        .trim_matches('\n')
        .to_string()
}
