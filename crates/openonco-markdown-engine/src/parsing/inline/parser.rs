use crate::parsing::ParseOptions;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong, is_trigger},
    types::InlineNode,
    watermark::{Closer, Watermarks},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Adjacent literal text is coalesced into a single `Text` node, so a line
/// without markup always comes back as exactly one node.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineParser {
    options: ParseOptions,
}

/// A rule tries to consume a prefix at the cursor. On `None` the cursor
/// must be left where it was.
type InlineRule = fn(&InlineParser, &mut Scan<'_>) -> Option<InlineNode>;

/// Precedence order. The single-character fallback in
/// [`InlineParser::parse_at_depth`] runs when none of these match.
const RULES: &[InlineRule] = &[
    try_parse_bold,
    try_parse_italic,
    try_parse_code_span,
    try_parse_link,
    try_parse_plain_run,
];

/// Scanning state for one nesting level.
struct Scan<'a> {
    cur: Cursor<'a>,
    marks: Watermarks,
    depth: usize,
}

impl Scan<'_> {
    fn find_closer(&mut self, closer: Closer, from: usize) -> Option<usize> {
        if let Some(known) = self.marks.lookup(closer, from) {
            return known;
        }
        let found = self.cur.find_from(closer.pattern(), from);
        self.marks.record(closer, from, found);
        found
    }
}

impl InlineParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, s: &str) -> Vec<InlineNode> {
        self.parse_at_depth(s, 0)
    }

    /// `depth` counts the emphasis bodies enclosing `s`.
    fn parse_at_depth(&self, s: &str, depth: usize) -> Vec<InlineNode> {
        let mut out = vec![];

        if depth > self.options.max_inline_depth {
            log::debug!(
                "inline depth cap {} reached, keeping {} bytes literal",
                self.options.max_inline_depth,
                s.len()
            );
            push_text(&mut out, s);
            return out;
        }

        let mut scan = Scan {
            cur: Cursor::new(s),
            marks: Watermarks::new(),
            depth,
        };

        'outer: while !scan.cur.eof() {
            for rule in RULES {
                if let Some(node) = rule(self, &mut scan) {
                    push_node(&mut out, node);
                    continue 'outer;
                }
            }
            // Fallback: one char of literal text guarantees progress.
            let start = scan.cur.pos();
            if scan.cur.bump_char().is_some() {
                push_text(&mut out, scan.cur.slice(start, scan.cur.pos()));
            }
        }

        out
    }
}

/// Appends `node`, merging it into a preceding `Text` when both are text.
fn push_node(out: &mut Vec<InlineNode>, node: InlineNode) {
    match node {
        InlineNode::Text(s) => push_text(out, &s),
        node => out.push(node),
    }
}

fn push_text(out: &mut Vec<InlineNode>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(InlineNode::text(s));
    }
}

fn try_parse_bold(p: &InlineParser, scan: &mut Scan<'_>) -> Option<InlineNode> {
    try_parse_delimited(p, scan, Strong::DELIMITERS, InlineNode::Bold)
}

fn try_parse_italic(p: &InlineParser, scan: &mut Scan<'_>) -> Option<InlineNode> {
    try_parse_delimited(p, scan, Emphasis::DELIMITERS, InlineNode::Italic)
}

/// Shared shape of bold and italic: `X(.+?)X` with the same delimiter on
/// both sides and at least one character of body.
fn try_parse_delimited(
    p: &InlineParser,
    scan: &mut Scan<'_>,
    delimiters: &[&'static str],
    wrap: fn(Vec<InlineNode>) -> InlineNode,
) -> Option<InlineNode> {
    let delim = *delimiters.iter().find(|d| scan.cur.starts_with(d))?;
    let closer = Closer::for_delimiter(delim)?;

    let body_start = scan.cur.pos() + delim.len();
    let min_close = body_start + scan.cur.char_len_at(body_start)?;
    let close = scan.find_closer(closer, min_close)?;

    let body = scan.cur.slice(body_start, close);
    scan.cur.jump_to(close + delim.len());
    Some(wrap(p.parse_at_depth(body, scan.depth + 1)))
}

/// Code spans run to the next backtick and must not be empty.
fn try_parse_code_span(_p: &InlineParser, scan: &mut Scan<'_>) -> Option<InlineNode> {
    if !scan.cur.starts_with(CodeSpan::TICK) {
        return None;
    }

    let body_start = scan.cur.pos() + CodeSpan::TICK.len();
    let close = scan.find_closer(Closer::Tick, body_start)?;
    if close == body_start {
        return None;
    }

    let body = scan.cur.slice(body_start, close);
    scan.cur.jump_to(close + CodeSpan::TICK.len());
    Some(InlineNode::Code(body.to_string()))
}

/// `[text](url)`: text runs to the first `]`, which must be followed
/// directly by `(`; url runs to the first `)`. Neither part may be empty.
fn try_parse_link(_p: &InlineParser, scan: &mut Scan<'_>) -> Option<InlineNode> {
    if !scan.cur.starts_with(Link::TEXT_OPEN) {
        return None;
    }

    let text_start = scan.cur.pos() + Link::TEXT_OPEN.len();
    let text_end = scan.find_closer(Closer::BracketClose, text_start)?;
    let url_open = text_end + Link::TEXT_CLOSE.len();
    if text_end == text_start || !scan.cur.starts_with_at(url_open, Link::URL_OPEN) {
        return None;
    }

    let url_start = url_open + Link::URL_OPEN.len();
    let url_end = scan.find_closer(Closer::ParenClose, url_start)?;
    if url_end == url_start {
        return None;
    }

    let text = scan.cur.slice(text_start, text_end).to_string();
    let url = scan.cur.slice(url_start, url_end).to_string();
    scan.cur.jump_to(url_end + Link::URL_CLOSE.len());
    Some(InlineNode::Link { text, url })
}

/// Longest run free of trigger bytes. Triggers are ASCII, so the run
/// always ends on a char boundary.
fn try_parse_plain_run(_p: &InlineParser, scan: &mut Scan<'_>) -> Option<InlineNode> {
    let start = scan.cur.pos();
    while let Some(b) = scan.cur.peek() {
        if is_trigger(b) {
            break;
        }
        scan.cur.bump();
    }
    let end = scan.cur.pos();
    (end > start).then(|| InlineNode::text(scan.cur.slice(start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineNode {
        InlineNode::text(s)
    }

    fn parse(s: &str) -> Vec<InlineNode> {
        InlineParser::default().parse(s)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_gives_no_nodes() {
        assert!(parse("").is_empty());
    }

    #[rstest]
    #[case("**bold**")]
    #[case("__bold__")]
    fn parse_bold(#[case] input: &str) {
        assert_eq!(parse(input), vec![InlineNode::Bold(vec![text("bold")])]);
    }

    #[rstest]
    #[case("*it*")]
    #[case("_it_")]
    fn parse_italic(#[case] input: &str) {
        assert_eq!(parse(input), vec![InlineNode::Italic(vec![text("it")])]);
    }

    #[test]
    fn nested_emphasis() {
        assert_eq!(
            parse("**bold *italic* end**"),
            vec![InlineNode::Bold(vec![
                text("bold "),
                InlineNode::Italic(vec![text("italic")]),
                text(" end"),
            ])]
        );
    }

    #[test]
    fn code_span_is_not_parsed() {
        assert_eq!(
            parse("`*not bold*`"),
            vec![InlineNode::Code("*not bold*".into())]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse("[OpenOnco](https://openonco.org)"),
            vec![InlineNode::Link {
                text: "OpenOnco".into(),
                url: "https://openonco.org".into(),
            }]
        );
    }

    #[test]
    fn link_text_is_literal() {
        assert_eq!(
            parse("[**x**](u)"),
            vec![InlineNode::Link {
                text: "**x**".into(),
                url: "u".into(),
            }]
        );
    }

    #[test]
    fn unpaired_star_is_literal() {
        assert_eq!(parse("a * b"), vec![text("a * b")]);
    }

    #[rstest]
    #[case("``")]
    #[case("`unclosed code")]
    #[case("[x]y")]
    #[case("[](u)")]
    #[case("[x]()")]
    #[case("[x](u")]
    #[case("**")]
    #[case("__a")]
    fn unmatched_constructs_become_text(#[case] input: &str) {
        assert_eq!(parse(input), vec![text(input)]);
    }

    #[test]
    fn bold_takes_the_first_closing_pair() {
        assert_eq!(
            parse("**a** and **b**"),
            vec![
                InlineNode::Bold(vec![text("a")]),
                text(" and "),
                InlineNode::Bold(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn delimiters_must_match_their_own_kind() {
        assert_eq!(parse("*a_"), vec![text("*a_")]);
        assert_eq!(parse("**a__"), vec![text("**a__")]);
    }

    #[test]
    fn unclosed_bold_falls_back_to_italic() {
        // `**a*`: no closing `**`, but `*` + `*a` + `*` is an italic.
        assert_eq!(
            parse("**a*"),
            vec![InlineNode::Italic(vec![text("*a")])]
        );
    }

    #[test]
    fn underscores_inside_words_are_emphasis() {
        assert_eq!(
            parse("snake_case_name"),
            vec![
                text("snake"),
                InlineNode::Italic(vec![text("case")]),
                text("name"),
            ]
        );
    }

    #[test]
    fn mixed_line() {
        assert_eq!(
            parse("See `ctDNA` in [docs](/d) for *more*."),
            vec![
                text("See "),
                InlineNode::Code("ctDNA".into()),
                text(" in "),
                InlineNode::Link {
                    text: "docs".into(),
                    url: "/d".into(),
                },
                text(" for "),
                InlineNode::Italic(vec![text("more")]),
                text("."),
            ]
        );
    }

    #[test]
    fn multibyte_text_survives_fallback() {
        assert_eq!(parse("é*ü"), vec![text("é*ü")]);
        assert_eq!(
            parse("*é*"),
            vec![InlineNode::Italic(vec![text("é")])]
        );
    }

    #[test]
    fn star_flood_terminates() {
        let input = "*".repeat(10_000);
        let nodes = parse(&input);
        assert!(!nodes.is_empty());
    }

    #[test]
    fn four_delimiter_kinds_nest_four_deep() {
        assert_eq!(
            parse("**__*_x_*__**"),
            vec![InlineNode::Bold(vec![InlineNode::Bold(vec![
                InlineNode::Italic(vec![InlineNode::Italic(vec![text("x")])]),
            ])])]
        );
    }

    #[test]
    fn same_kind_openers_close_early_instead_of_nesting() {
        assert_eq!(
            parse("*_*_x_*_*"),
            vec![
                InlineNode::Italic(vec![text("_")]),
                InlineNode::Italic(vec![text("x")]),
                InlineNode::Italic(vec![text("_")]),
            ]
        );
    }

    #[test]
    fn depth_cap_cuts_the_four_level_chain() {
        let p = InlineParser::new(ParseOptions {
            max_inline_depth: 1,
        });
        assert_eq!(
            p.parse("**__*_x_*__**"),
            vec![InlineNode::Bold(vec![InlineNode::Bold(vec![text("*_x_*")])])]
        );
    }

    #[test]
    fn depth_cap_keeps_body_literal() {
        let p = InlineParser::new(ParseOptions {
            max_inline_depth: 0,
        });
        assert_eq!(
            p.parse("**a *b* a**"),
            vec![InlineNode::Bold(vec![text("a *b* a")])]
        );
    }

    #[test]
    fn depth_below_cap_parses_normally() {
        let p = InlineParser::new(ParseOptions {
            max_inline_depth: 1,
        });
        assert_eq!(
            p.parse("**a *b* a**"),
            vec![InlineNode::Bold(vec![
                text("a "),
                InlineNode::Italic(vec![text("b")]),
                text(" a"),
            ])]
        );
    }
}
