use std::borrow::Cow;

/// Escapes text for an HTML body context: `&`, `<` and `>`.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escapes a value for a quoted attribute: body escapes plus `"` and `'`.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(value)
}
