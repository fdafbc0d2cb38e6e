pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use inline::{InlineNode, InlineParser};
use lines::lines;
use serde::Serialize;

/// Default cap on nested emphasis recursion.
pub const DEFAULT_MAX_INLINE_DEPTH: usize = 32;

/// Knobs for a parse. The defaults are what every caller should want;
/// the depth cap only matters for adversarial input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of bold/italic bodies before the remainder is kept
    /// as literal text.
    pub max_inline_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_inline_depth: DEFAULT_MAX_INLINE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

pub fn parse_document(text: &str) -> ParsedDoc {
    parse_document_with(text, &ParseOptions::default())
}

pub fn parse_document_with(text: &str, options: &ParseOptions) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(InlineParser::new(*options));

    for lr in lines(text) {
        let lc = classifier.classify(&lr);
        builder.push(lc);
    }

    let blocks = builder.finish();
    log::debug!("parsed document into {} blocks", blocks.len());
    ParsedDoc { blocks }
}

/// Convenience: inline parse with default options.
pub fn parse_inline(text: &str) -> Vec<InlineNode> {
    InlineParser::default().parse(text)
}
