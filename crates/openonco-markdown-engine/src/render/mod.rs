//! # Rendering
//!
//! Presentation mappings for a [`ParsedDoc`](crate::parsing::ParsedDoc).
//!
//! - **`html`**: HTML fragment with escaped text and guarded links
//! - **`text`**: visible text only, markup dropped
//!
//! Renderers are total: every tree renders, nothing is reparsed.

pub mod html;
pub mod text;

pub use html::{HtmlOptions, to_html, to_html_with};
pub use text::{inline_text, plain_text};
