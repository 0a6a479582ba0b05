mod common;

use proptest::prelude::*;
use quillpress_engine::export::{escape_text, render_text};
use quillpress_engine::{
    DocNode, Document, HeadingLevel, Mark, MarkKind, calculate_stats, format_html_for_display,
    generate_clean_html,
};

const HREFS: &[&str] = &[
    "https://example.com",
    "example.com/a?b=1&c=2",
    "mailto:me@example.com",
    "javascript:alert(1)",
    "ftp://example.com",
    "https://example.com/it's\"quoted\"",
    "",
];

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![
        Just(Mark::new(MarkKind::Bold)),
        Just(Mark::new(MarkKind::Italic)),
        Just(Mark::new(MarkKind::Code)),
        Just(Mark::new(MarkKind::Other("underline".into()))),
        prop::sample::select(HREFS).prop_map(Mark::link),
    ]
}

fn arb_text() -> impl Strategy<Value = DocNode> {
    (
        "[a-zA-Z0-9 <>&\"'你好]{0,12}",
        prop::collection::vec(arb_mark(), 0..4),
    )
        .prop_map(|(text, marks)| DocNode::marked_text(text, marks))
}

fn arb_node() -> impl Strategy<Value = DocNode> {
    arb_text().prop_recursive(4, 48, 5, |inner| {
        let children = prop::collection::vec(inner, 0..4);
        prop_oneof![
            children.clone().prop_map(DocNode::paragraph),
            (any::<bool>(), children.clone()).prop_map(|(h3, content)| {
                let level = if h3 { HeadingLevel::H3 } else { HeadingLevel::H2 };
                DocNode::heading(level, content)
            }),
            children.clone().prop_map(DocNode::bullet_list),
            children.clone().prop_map(DocNode::list_item),
            children.clone().prop_map(DocNode::blockquote),
            children.prop_map(|content| DocNode::Unknown {
                kind: "callout".into(),
                content,
            }),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(arb_node(), 0..6).prop_map(Document::new)
}

fn expected_nesting(marks: &[Mark], inner: &str) -> String {
    let mut ordered: Vec<&Mark> = marks.iter().collect();
    ordered.sort_by_key(|m| m.kind.priority());
    let tags: Vec<(&str, &str)> = ordered
        .iter()
        .map(|m| match m.kind {
            MarkKind::Link => ("<a href=\"https://example.com/\">", "</a>"),
            MarkKind::Bold => ("<strong>", "</strong>"),
            MarkKind::Italic => ("<em>", "</em>"),
            MarkKind::Code => ("<code>", "</code>"),
            MarkKind::Other(_) => ("", ""),
        })
        .collect();
    let opens: String = tags.iter().map(|(open, _)| *open).collect();
    let closes: String = tags.iter().rev().map(|(_, close)| *close).collect();
    format!("{opens}{inner}{closes}")
}

proptest! {
    #[test]
    fn exported_html_is_always_clean(doc in arb_document()) {
        common::assert_clean_html(&generate_clean_html(&doc));
    }

    #[test]
    fn exporting_json_roundtrip_is_stable(doc in arb_document()) {
        let reparsed = Document::from_json(&doc.to_json());
        prop_assert_eq!(generate_clean_html(&reparsed), generate_clean_html(&doc));
    }

    #[test]
    fn escaping_plain_text_is_a_no_op(text in "[a-zA-Z0-9 .,;:!?\"'你好]{0,40}") {
        prop_assert_eq!(escape_text(&text), text.as_str());
    }

    #[test]
    fn mark_tags_nest_canonically(
        marks in prop::sample::subsequence(
            vec![
                Mark::link("https://example.com"),
                Mark::new(MarkKind::Bold),
                Mark::new(MarkKind::Italic),
                Mark::new(MarkKind::Code),
            ],
            0..=4,
        )
        .prop_shuffle()
    ) {
        prop_assert_eq!(render_text("x", &marks), expected_nesting(&marks, "x"));
    }

    #[test]
    fn display_formatting_only_touches_whitespace(doc in arb_document()) {
        let html = generate_clean_html(&doc);
        let formatted = format_html_for_display(&html);
        let before = html.replace('\n', "");
        prop_assert_eq!(formatted.replace('\n', ""), before);
    }

    #[test]
    fn western_word_count_matches_tokens(words in prop::collection::vec("[a-z]{1,8}", 0..500)) {
        let stats = calculate_stats(&words.join(" "));
        prop_assert_eq!(stats.words, words.len());
        prop_assert_eq!(stats.reading_time_minutes, words.len().div_ceil(200));
        prop_assert_eq!(stats.characters, words.iter().map(String::len).sum::<usize>());
    }
}
