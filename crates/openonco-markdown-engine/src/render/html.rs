use crate::parsing::{ParsedDoc, blocks::BlockNode, inline::InlineNode};

/// URL schemes that may appear in an `href`. Scheme-less URLs are
/// relative and always allowed.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Link rendering knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Adds `target="_blank"` to links.
    pub open_links_in_new_tab: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
        }
    }
}

/// Renders `doc` as an HTML fragment with default options.
pub fn to_html(doc: &ParsedDoc) -> String {
    to_html_with(doc, &HtmlOptions::default())
}

/// Renders `doc` as an HTML fragment, one block per line.
pub fn to_html_with(doc: &ParsedDoc, options: &HtmlOptions) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(block, options, &mut out);
        out.push('\n');
    }
    out
}

fn write_block(block: &BlockNode, options: &HtmlOptions, out: &mut String) {
    match block {
        BlockNode::Header { level, content } => {
            out.push_str(&format!("<h{level}>"));
            write_inlines(content, options, out);
            out.push_str(&format!("</h{level}>"));
        }
        BlockNode::UnorderedList(items) => write_list("ul", items, options, out),
        BlockNode::OrderedList(items) => write_list("ol", items, options, out),
        BlockNode::Paragraph(content) => {
            out.push_str("<p>");
            write_inlines(content, options, out);
            out.push_str("</p>");
        }
    }
}

fn write_list(tag: &str, items: &[Vec<InlineNode>], options: &HtmlOptions, out: &mut String) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str("<li>");
        write_inlines(item, options, out);
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>"));
}

fn write_inlines(nodes: &[InlineNode], options: &HtmlOptions, out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(s) => {
                html_escape::encode_text_to_string(s, out);
            }
            InlineNode::Bold(children) => {
                out.push_str("<strong>");
                write_inlines(children, options, out);
                out.push_str("</strong>");
            }
            InlineNode::Italic(children) => {
                out.push_str("<em>");
                write_inlines(children, options, out);
                out.push_str("</em>");
            }
            InlineNode::Code(s) => {
                out.push_str("<code>");
                html_escape::encode_text_to_string(s, out);
                out.push_str("</code>");
            }
            InlineNode::Link { text, url } => write_link(text, url, options, out),
        }
    }
}

fn write_link(text: &str, url: &str, options: &HtmlOptions, out: &mut String) {
    if !is_safe_url(url) {
        log::debug!("dropping href with disallowed scheme: {url:?}");
        out.push_str(r#"<span class="unsafe-link">"#);
        html_escape::encode_text_to_string(text, out);
        out.push_str("</span>");
        return;
    }

    out.push_str(r#"<a href=""#);
    html_escape::encode_double_quoted_attribute_to_string(url, out);
    out.push('"');
    if options.open_links_in_new_tab {
        out.push_str(r#" target="_blank""#);
    }
    out.push_str(r#" rel="noopener noreferrer" referrerpolicy="no-referrer">"#);
    html_escape::encode_text_to_string(text, out);
    out.push_str("</a>");
}

/// True for relative URLs, fragments and the schemes in [`SAFE_SCHEMES`].
///
/// A `:` before the first `/`, `?` or `#` introduces a scheme.
pub fn is_safe_url(url: &str) -> bool {
    let head_end = url.find(['/', '?', '#']).unwrap_or(url.len());
    match url[..head_end].split_once(':') {
        None => true,
        Some((scheme, _)) => SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe)),
    }
}
