use serde::Serialize;

use crate::parsing::{ParsedDoc, blocks::BlockNode, inline::InlineNode};
use crate::render::text::inline_text;

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Serialize)]
pub struct BlockSnap {
    /// Block kind (e.g., "Header", "OrderedList").
    pub kind: String,
    /// Heading level, for headers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Inline content of headers and paragraphs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline: Vec<InlineSnap>,
    /// Items of lists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSnap>,
}

/// Snapshot of one list item.
#[derive(Serialize)]
pub struct ItemSnap {
    pub inline: Vec<InlineSnap>,
}

/// Snapshot of a single inline node for testing.
#[derive(Serialize)]
pub struct InlineSnap {
    /// Node kind (e.g., "Text", "Bold", "Link").
    pub kind: String,
    /// Visible text of the node.
    pub text: String,
    /// Link destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Nested nodes of emphasis.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InlineSnap>,
}

/// Converts a parsed document into a serializable snapshot.
pub fn normalize(doc: &ParsedDoc) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| {
            let (level, inline, items) = match b {
                BlockNode::Header { level, content } => (Some(*level), inlines(content), vec![]),
                BlockNode::Paragraph(content) => (None, inlines(content), vec![]),
                BlockNode::UnorderedList(items) | BlockNode::OrderedList(items) => (
                    None,
                    vec![],
                    items
                        .iter()
                        .map(|item| ItemSnap {
                            inline: inlines(item),
                        })
                        .collect(),
                ),
            };

            BlockSnap {
                kind: b.kind_name().to_string(),
                level,
                inline,
                items,
            }
        })
        .collect();

    Snap { blocks }
}

fn inlines(nodes: &[InlineNode]) -> Vec<InlineSnap> {
    nodes.iter().map(inline).collect()
}

fn inline(n: &InlineNode) -> InlineSnap {
    let kind = match n {
        InlineNode::Text(_) => "Text",
        InlineNode::Bold(_) => "Bold",
        InlineNode::Italic(_) => "Italic",
        InlineNode::Code(_) => "Code",
        InlineNode::Link { .. } => "Link",
    };
    let url = match n {
        InlineNode::Link { url, .. } => Some(url.clone()),
        _ => None,
    };

    InlineSnap {
        kind: kind.into(),
        text: inline_text(std::slice::from_ref(n)),
        url,
        children: inlines(n.children()),
    }
}
