use crate::parsing::{
    ParsedDoc,
    blocks::BlockNode,
    inline::{
        InlineNode,
        kinds::{CodeSpan, Emphasis, Link, Strong},
    },
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Header levels are within `1..=6`
/// - Lists are never empty
/// - Every inline sequence is well formed (see [`check_inline_shape`])
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc) {
    for (i, b) in doc.blocks.iter().enumerate() {
        match b {
            BlockNode::Header { level, content } => {
                assert!(
                    (1..=6).contains(level),
                    "block {i}: header level out of range: {level}"
                );
                check_inline_shape(content);
            }
            BlockNode::Paragraph(content) => check_inline_shape(content),
            BlockNode::UnorderedList(items) | BlockNode::OrderedList(items) => {
                assert!(!items.is_empty(), "block {i}: empty {}", b.kind_name());
                items.iter().for_each(|item| check_inline_shape(item));
            }
        }
    }
}

/// Checks that `nodes` is well formed and loses nothing from `source`.
///
/// Content preservation is checked by writing the nodes back out as
/// markup and comparing with the source. Bold and italic are written
/// with `*`, so `_` is folded to `*` on both sides first.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_inline(source: &str, nodes: &[InlineNode]) {
    check_inline_shape(nodes);

    let mut rebuilt = String::new();
    write_markup(nodes, &mut rebuilt);
    assert_eq!(
        fold_underscores(&rebuilt),
        fold_underscores(source),
        "inline content not preserved: {nodes:?}"
    );
}

/// Asserts that:
/// - No `Text` is empty and no two `Text` nodes are adjacent
/// - Emphasis always has children; code, link text and url are non-empty
pub fn check_inline_shape(nodes: &[InlineNode]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "adjacent text nodes were not coalesced: {pair:?}"
        );
    }
    for n in nodes {
        match n {
            InlineNode::Text(s) => assert!(!s.is_empty(), "empty text node"),
            InlineNode::Bold(children) | InlineNode::Italic(children) => {
                assert!(!children.is_empty(), "emphasis without children: {n:?}");
                check_inline_shape(children);
            }
            InlineNode::Code(s) => assert!(!s.is_empty(), "empty code span"),
            InlineNode::Link { text, url } => {
                assert!(!text.is_empty(), "link with empty text");
                assert!(!url.is_empty(), "link with empty url");
            }
        }
    }
}

fn write_markup(nodes: &[InlineNode], out: &mut String) {
    for n in nodes {
        match n {
            InlineNode::Text(s) => out.push_str(s),
            InlineNode::Bold(children) => {
                out.push_str(Strong::DELIMITERS[0]);
                write_markup(children, out);
                out.push_str(Strong::DELIMITERS[0]);
            }
            InlineNode::Italic(children) => {
                out.push_str(Emphasis::DELIMITERS[0]);
                write_markup(children, out);
                out.push_str(Emphasis::DELIMITERS[0]);
            }
            InlineNode::Code(s) => {
                out.push_str(CodeSpan::TICK);
                out.push_str(s);
                out.push_str(CodeSpan::TICK);
            }
            InlineNode::Link { text, url } => {
                out.push_str(Link::TEXT_OPEN);
                out.push_str(text);
                out.push_str(Link::TEXT_CLOSE);
                out.push_str(Link::URL_OPEN);
                out.push_str(url);
                out.push_str(Link::URL_CLOSE);
            }
        }
    }
}

fn fold_underscores(s: &str) -> String {
    s.replace('_', "*")
}
