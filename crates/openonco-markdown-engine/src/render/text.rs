use crate::parsing::{
    ParsedDoc,
    blocks::BlockNode,
    inline::{InlineNode, as_plain_text},
};

/// Visible text of a document, one line per header, paragraph and list
/// item. List markers and heading hashes are not included.
pub fn plain_text(doc: &ParsedDoc) -> String {
    let mut lines = vec![];
    for block in &doc.blocks {
        match block {
            BlockNode::Header { content, .. } | BlockNode::Paragraph(content) => {
                lines.push(inline_text(content));
            }
            BlockNode::UnorderedList(items) | BlockNode::OrderedList(items) => {
                lines.extend(items.iter().map(|item| inline_text(item)));
            }
        }
    }
    lines.join("\n")
}

/// Visible text of an inline sequence: delimiters dropped, link urls
/// omitted.
pub fn inline_text(nodes: &[InlineNode]) -> String {
    if let Some(s) = as_plain_text(nodes) {
        return s.to_string();
    }
    let mut out = String::new();
    push_visible(nodes, &mut out);
    out
}

fn push_visible(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(s) | InlineNode::Code(s) => out.push_str(s),
            InlineNode::Link { text, .. } => out.push_str(text),
            InlineNode::Bold(children) | InlineNode::Italic(children) => {
                push_visible(children, out)
            }
        }
    }
}
