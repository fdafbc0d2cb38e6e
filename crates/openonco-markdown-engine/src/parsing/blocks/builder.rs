use crate::parsing::inline::{InlineNode, InlineParser};

use super::{
    classify::{LineClass, LineKind},
    types::{BlockNode, ListKind},
};

/// Item lines collected since the last interruption.
#[derive(Debug)]
struct PendingList {
    kind: ListKind,
    /// Source line of the first item.
    start_line: usize,
    items: Vec<Vec<InlineNode>>,
}

/// Phase 2 of block parsing: turns classified lines into blocks.
///
/// Headers and paragraphs are emitted immediately. Item lines accumulate
/// into a pending list that is flushed by anything that is not an item of
/// the same kind, and by [`BlockBuilder::finish`].
pub struct BlockBuilder {
    inline: InlineParser,
    pending: Option<PendingList>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new(inline: InlineParser) -> Self {
        Self {
            inline,
            pending: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c.kind {
            LineKind::Heading { level, content } => {
                self.flush_list();
                let content = self.inline.parse(content);
                self.out.push(BlockNode::Header { level, content });
            }
            LineKind::Bullet { content } => self.push_item(ListKind::Unordered, c.line, content),
            LineKind::Ordered { content } => self.push_item(ListKind::Ordered, c.line, content),
            LineKind::Blank => self.flush_list(),
            LineKind::Paragraph { text } => {
                self.flush_list();
                let content = self.inline.parse(text);
                self.out.push(BlockNode::Paragraph(content));
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn push_item(&mut self, kind: ListKind, line: usize, content: &str) {
        if self.pending.as_ref().is_some_and(|p| p.kind != kind) {
            self.flush_list();
        }
        let item = self.inline.parse(content);
        self.pending
            .get_or_insert_with(|| PendingList {
                kind,
                start_line: line,
                items: vec![],
            })
            .items
            .push(item);
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.pending.take()
            && !list.items.is_empty()
        {
            log::trace!(
                "flushing {:?} list of {} items from line {}",
                list.kind,
                list.items.len(),
                list.start_line
            );
            self.out.push(list.kind.into_block(list.items));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(InlineParser::default())
    }
}
