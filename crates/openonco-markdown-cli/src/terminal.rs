//! Terminal presentation of a parsed document as styled ratatui lines.

use openonco_markdown_engine::{BlockNode, InlineNode, ParsedDoc};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BULLET: &str = "• ";

/// Renders `doc` as lines for a `Paragraph` widget, with a blank line
/// between blocks.
pub fn document_lines(doc: &ParsedDoc) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        match block {
            BlockNode::Header { level, content } => {
                let style = heading_style(*level);
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(usize::from(*level))),
                    style,
                )];
                push_inline(content, style, &mut spans);
                lines.push(Line::from(spans));
            }
            BlockNode::Paragraph(content) => {
                let mut spans = Vec::new();
                push_inline(content, Style::default(), &mut spans);
                lines.push(Line::from(spans));
            }
            BlockNode::UnorderedList(items) => {
                for item in items {
                    lines.push(list_item(BULLET.to_string(), item));
                }
            }
            BlockNode::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(list_item(format!("{}. ", i + 1), item));
                }
            }
        }
    }

    lines
}

fn list_item(marker: String, content: &[InlineNode]) -> Line<'static> {
    let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
    push_inline(content, Style::default(), &mut spans);
    Line::from(spans)
}

/// One style per heading level, strongest first.
fn heading_style(level: u8) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => base.fg(Color::Magenta).add_modifier(Modifier::UNDERLINED),
        2 => base.fg(Color::Magenta),
        3 => base.fg(Color::Blue),
        4 => base.fg(Color::Cyan),
        5 => base.fg(Color::Green),
        _ => Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
    }
}

fn push_inline(nodes: &[InlineNode], style: Style, out: &mut Vec<Span<'static>>) {
    for node in nodes {
        match node {
            InlineNode::Text(s) => out.push(Span::styled(s.clone(), style)),
            InlineNode::Bold(children) => {
                push_inline(children, style.add_modifier(Modifier::BOLD), out)
            }
            InlineNode::Italic(children) => {
                push_inline(children, style.add_modifier(Modifier::ITALIC), out)
            }
            InlineNode::Code(s) => out.push(Span::styled(
                s.clone(),
                style.fg(Color::Yellow).bg(Color::DarkGray),
            )),
            InlineNode::Link { text, url } => {
                out.push(Span::styled(
                    text.clone(),
                    style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                ));
                out.push(Span::styled(
                    format!(" <{url}>"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
}
