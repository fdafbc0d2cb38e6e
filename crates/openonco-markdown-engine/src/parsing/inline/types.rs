use serde::Serialize;

/// A parsed inline node.
///
/// Variants own their text so a parsed tree outlives its source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text that isn't part of any special construct.
    Text(String),
    /// `**x**` or `__x__`.
    Bold(Vec<InlineNode>),
    /// `*x*` or `_x_`.
    Italic(Vec<InlineNode>),
    /// A code span. This is a "raw zone" - its body is never parsed.
    Code(String),
    /// `[text](url)`. Both parts are kept verbatim; `text` is not parsed.
    Link { text: String, url: String },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    /// Child nodes of emphasis variants; empty for leaves.
    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Bold(children) | InlineNode::Italic(children) => children,
            InlineNode::Text(_) | InlineNode::Code(_) | InlineNode::Link { .. } => &[],
        }
    }
}

/// Returns the text of a sequence that is nothing but literal text.
///
/// This is the "collapsed" view of a trivial line: `Some` for an empty
/// sequence or a single `Text` node, `None` once any markup is involved.
pub fn as_plain_text(nodes: &[InlineNode]) -> Option<&str> {
    match nodes {
        [] => Some(""),
        [InlineNode::Text(s)] => Some(s),
        _ => None,
    }
}
