//! Document-level tests for the parsing module.
//!
//! Fixture snapshots live in the crate's `tests/` directory; these cover
//! block segmentation end to end with hand-written expected trees.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseOptions, ParsedDoc, blocks::BlockNode, inline::InlineNode, parse_document,
    parse_document_with, snapshot,
};

fn text(s: &str) -> InlineNode {
    InlineNode::text(s)
}

fn doc(md: &str) -> Vec<BlockNode> {
    let parsed = parse_document(md);
    snapshot::invariants(&parsed);
    parsed.blocks
}

fn header(level: u8, s: &str) -> BlockNode {
    BlockNode::Header {
        level,
        content: vec![text(s)],
    }
}

fn para(s: &str) -> BlockNode {
    BlockNode::Paragraph(vec![text(s)])
}

fn ul(items: &[&str]) -> BlockNode {
    BlockNode::UnorderedList(items.iter().map(|s| vec![text(s)]).collect())
}

fn ol(items: &[&str]) -> BlockNode {
    BlockNode::OrderedList(items.iter().map(|s| vec![text(s)]).collect())
}

#[rstest]
#[case("# A", 1, "A")]
#[case("## B", 2, "B")]
#[case("###### Z", 6, "Z")]
fn header_levels(#[case] md: &str, #[case] level: u8, #[case] content: &str) {
    assert_eq!(doc(md), vec![header(level, content)]);
}

#[test]
fn seven_hashes_is_a_paragraph() {
    assert_eq!(doc("####### x"), vec![para("####### x")]);
}

#[test]
fn indented_hashes_are_a_paragraph() {
    assert_eq!(doc("  # x"), vec![para("  # x")]);
}

#[test]
fn whitespace_after_hashes_keeps_one_char_as_content() {
    assert_eq!(doc("##   "), vec![header(2, " ")]);
    assert_eq!(doc("# "), vec![para("# ")]);
}

#[test]
fn hash_without_space_is_a_paragraph() {
    assert_eq!(doc("#tag"), vec![para("#tag")]);
}

#[test]
fn consecutive_items_form_one_list() {
    assert_eq!(doc("- a\n- b"), vec![ul(&["a", "b"])]);
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(doc("- a\n\n- b"), vec![ul(&["a"]), ul(&["b"])]);
}

#[test]
fn list_type_switch_flushes() {
    assert_eq!(doc("- a\n1. b"), vec![ul(&["a"]), ol(&["b"])]);
}

#[test]
fn star_bullets_join_dash_bullets() {
    assert_eq!(doc("- a\n* b"), vec![ul(&["a", "b"])]);
}

#[test]
fn ordinals_are_not_renumbered_or_kept() {
    assert_eq!(doc("3. c\n10. d"), vec![ol(&["c", "d"])]);
}

#[test]
fn heading_and_paragraph_flush_lists() {
    assert_eq!(
        doc("- a\n# T\n1. b\nafter"),
        vec![ul(&["a"]), header(1, "T"), ol(&["b"]), para("after")]
    );
}

#[test]
fn every_paragraph_line_is_its_own_block() {
    assert_eq!(doc("one\ntwo"), vec![para("one"), para("two")]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(doc("a\r\nb"), vec![para("a"), para("b")]);
    assert_eq!(doc("- a\r\n- b\r\n"), vec![ul(&["a", "b"])]);
}

#[test]
fn indented_items_are_flattened() {
    assert_eq!(doc("- a\n  - b"), vec![ul(&["a", "b"])]);
}

#[test]
fn marker_without_content_is_a_paragraph() {
    assert_eq!(doc("-"), vec![para("-")]);
    assert_eq!(doc("1."), vec![para("1.")]);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n")]
fn blank_documents_have_no_blocks(#[case] md: &str) {
    assert!(parse_document(md).is_empty());
}

#[test]
fn inline_markup_inside_blocks() {
    assert_eq!(
        doc("## **Key** point\n- see [docs](/d)"),
        vec![
            BlockNode::Header {
                level: 2,
                content: vec![InlineNode::Bold(vec![text("Key")]), text(" point")],
            },
            BlockNode::UnorderedList(vec![vec![
                text("see "),
                InlineNode::Link {
                    text: "docs".into(),
                    url: "/d".into(),
                },
            ]]),
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    let md = "# T\n- **a** _b_\n1. `c`\n\n[d](e) * f";
    assert_eq!(parse_document(md), parse_document(md));
}

#[test]
fn depth_option_reaches_inline_parser() {
    let options = ParseOptions {
        max_inline_depth: 0,
    };
    let parsed = parse_document_with("**a *b***", &options);
    assert_eq!(
        parsed,
        ParsedDoc {
            blocks: vec![BlockNode::Paragraph(vec![
                InlineNode::Bold(vec![text("a *b")]),
                text("*"),
            ])],
        }
    );
}

#[test]
fn document_serializes_with_adjacent_tags() {
    let parsed = parse_document("# Hi");
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(
        json,
        r#"{"blocks":[{"type":"header","value":{"level":1,"content":[{"type":"text","value":"Hi"}]}}]}"#
    );
}
