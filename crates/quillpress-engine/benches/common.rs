// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use quillpress_engine::{DocNode, Document, HeadingLevel, Mark, MarkKind};

#[allow(dead_code)]
pub fn generate_document(sections: usize) -> Document {
    let mut content = Vec::with_capacity(sections * 4);
    for section in 0..sections {
        content.push(DocNode::heading(
            HeadingLevel::H2,
            vec![DocNode::text(format!("Section {section}"))],
        ));
        content.push(DocNode::paragraph(vec![
            DocNode::text("Some paragraph content with <angle brackets> & ampersands. "),
            DocNode::marked_text(
                "Linked and bold",
                vec![Mark::new(MarkKind::Bold), Mark::link("example.com/docs")],
            ),
            DocNode::text(" followed by "),
            DocNode::marked_text("inline code", vec![Mark::new(MarkKind::Code)]),
        ]));
        content.push(DocNode::bullet_list(vec![
            DocNode::list_item(vec![
                DocNode::paragraph(vec![DocNode::text("Bullet point")]),
                DocNode::bullet_list(vec![DocNode::list_item(vec![DocNode::paragraph(
                    vec![DocNode::text("Nested item")],
                )])]),
            ]),
            DocNode::list_item(vec![DocNode::paragraph(vec![DocNode::text("Another item")])]),
        ]));
        content.push(DocNode::blockquote(vec![
            DocNode::paragraph(vec![DocNode::text("Quoted line one")]),
            DocNode::paragraph(vec![DocNode::text("Quoted line two")]),
        ]));
    }
    Document::new(content)
}

#[allow(dead_code)]
pub fn generate_mixed_text(repeats: usize) -> String {
    "The quick brown fox 跳过了懒狗 and ひらがな, 한국어 text.\u{200B}\n\n".repeat(repeats)
}
