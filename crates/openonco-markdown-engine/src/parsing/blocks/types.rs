use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// A parsed block node.
///
/// The variant set is closed; renderers match it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BlockNode {
    /// An ATX heading. `level` is always in `1..=6`.
    Header {
        level: u8,
        content: Vec<InlineNode>,
    },
    /// Consecutive `-`/`*` item lines.
    UnorderedList(Vec<Vec<InlineNode>>),
    /// Consecutive `N.` item lines.
    OrderedList(Vec<Vec<InlineNode>>),
    /// Any line no other rule claims.
    Paragraph(Vec<InlineNode>),
}

/// Which kind of list a run of item lines forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn into_block(self, items: Vec<Vec<InlineNode>>) -> BlockNode {
        match self {
            ListKind::Unordered => BlockNode::UnorderedList(items),
            ListKind::Ordered => BlockNode::OrderedList(items),
        }
    }
}

impl BlockNode {
    /// Short label used in snapshots and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockNode::Header { .. } => "Header",
            BlockNode::UnorderedList(_) => "UnorderedList",
            BlockNode::OrderedList(_) => "OrderedList",
            BlockNode::Paragraph(_) => "Paragraph",
        }
    }
}
