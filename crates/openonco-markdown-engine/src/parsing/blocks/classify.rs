use crate::parsing::lines::LineRef;

use super::kinds::{Heading, ListMarker};

/// What a single line is, judged without looking at its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, content: &'a str },
    Bullet { content: &'a str },
    Ordered { content: &'a str },
    Blank,
    /// The whole line, used when no structural rule matches.
    Paragraph { text: &'a str },
}

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based source line number.
    pub line: usize,
    pub kind: LineKind<'a>,
}

type LineRule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

/// Structural rules in precedence order; `Paragraph` is the fallback.
const LINE_RULES: &[LineRule] = &[heading, bullet, ordered, blank];

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line by the first matching rule.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let kind = LINE_RULES
            .iter()
            .find_map(|rule| rule(lr.text))
            .unwrap_or(LineKind::Paragraph { text: lr.text });

        LineClass {
            line: lr.number,
            kind,
        }
    }
}

fn heading(text: &str) -> Option<LineKind<'_>> {
    Heading::parse(text).map(|(level, content)| LineKind::Heading { level, content })
}

fn bullet(text: &str) -> Option<LineKind<'_>> {
    ListMarker::bullet(text).map(|content| LineKind::Bullet { content })
}

fn ordered(text: &str) -> Option<LineKind<'_>> {
    ListMarker::ordered(text).map(|content| LineKind::Ordered { content })
}

fn blank(text: &str) -> Option<LineKind<'_>> {
    text.trim().is_empty().then_some(LineKind::Blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(text: &str) -> LineKind<'_> {
        MarkdownLineClassifier
            .classify(&LineRef { number: 0, text })
            .kind
    }

    #[rstest]
    #[case("# Title", LineKind::Heading { level: 1, content: "Title" })]
    #[case("- item", LineKind::Bullet { content: "item" })]
    #[case("* item", LineKind::Bullet { content: "item" })]
    #[case("2. item", LineKind::Ordered { content: "item" })]
    #[case("", LineKind::Blank)]
    #[case(" \t ", LineKind::Blank)]
    #[case("Just text", LineKind::Paragraph { text: "Just text" })]
    #[case("####### x", LineKind::Paragraph { text: "####### x" })]
    #[case("  indented prose", LineKind::Paragraph { text: "  indented prose" })]
    #[case("  # x", LineKind::Paragraph { text: "  # x" })]
    #[case("##   ", LineKind::Heading { level: 2, content: " " })]
    fn classifies_lines(#[case] text: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(classify(text), expected);
    }

    #[test]
    fn heading_beats_list_markers() {
        // Nothing can be both, but precedence must still be heading first.
        assert_eq!(LINE_RULES.len(), 4);
        assert_eq!(
            classify("# - not a list"),
            LineKind::Heading {
                level: 1,
                content: "- not a list"
            }
        );
    }

    #[test]
    fn keeps_line_number() {
        let lc = MarkdownLineClassifier.classify(&LineRef {
            number: 7,
            text: "x",
        });
        assert_eq!(lc.line, 7);
    }
}
