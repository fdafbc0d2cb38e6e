pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    ParseOptions, ParsedDoc, blocks::BlockNode, inline::InlineNode, parse_document,
    parse_document_with, parse_inline,
};
pub use render::{HtmlOptions, plain_text, to_html, to_html_with};
