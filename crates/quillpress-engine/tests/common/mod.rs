// Shared by several integration test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::OnceLock;

use quillpress_engine::export::{ALLOWED_TAGS, QUOTE_LINE_BREAK};
use regex::Regex;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<(/?)([a-zA-Z0-9]+)([^<>]*)>").unwrap())
}

fn entity_regex() -> &'static Regex {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    ENTITY.get_or_init(|| Regex::new(r"&(?:amp|lt|gt|quot|#x27|#39);").unwrap())
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Checks the exporter's output contract on `html`.
///
/// Every tag is in the allowed set, only `<a>` has an attribute (`href`),
/// and text between tags has no raw `<`, `>` or unescaped `&`.
pub fn assert_clean_html(html: &str) {
    let break_tag = QUOTE_LINE_BREAK.trim_start_matches('<').trim_end_matches('>');

    for caps in tag_regex().captures_iter(html) {
        let name = &caps[2];
        let attrs = caps[3].trim();
        assert!(
            ALLOWED_TAGS.contains(&name) || name == break_tag,
            "disallowed tag <{name}> in {html:?}"
        );
        if name == "a" && caps[1].is_empty() {
            assert!(attrs.starts_with("href=\""), "bad anchor attrs {attrs:?}");
            let value = &attrs["href=\"".len()..attrs.len() - 1];
            assert!(!value.contains('"') && !value.contains('\''));
            assert!(!value.contains('<') && !value.contains('>'));
        } else {
            assert!(attrs.is_empty(), "unexpected attrs on <{name}>: {attrs:?}");
        }
    }

    let text = tag_regex().replace_all(html, "");
    assert!(
        !text.contains('<') && !text.contains('>'),
        "raw angle bracket in text of {html:?}"
    );
    let without_entities = entity_regex().replace_all(&text, "");
    assert!(
        !without_entities.contains('&'),
        "unescaped ampersand in text of {html:?}"
    );
}
