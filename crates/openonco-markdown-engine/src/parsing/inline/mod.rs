//! # Inline Parsing
//!
//! Cursor-based inline parsing driven by an ordered rule table.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the textual
//! payload of every block (header text, list item text, paragraph lines).
//!
//! At each cursor position the rules are tried in a fixed order and the
//! first one that matches consumes a prefix and appends one node:
//!
//! 1. bold (`**x**`, `__x__`), body parsed recursively
//! 2. italic (`*x*`, `_x_`), body parsed recursively
//! 3. code span (`` `x` ``), a raw zone: body kept verbatim
//! 4. link (`[text](url)`), both parts verbatim
//! 5. plain run up to the next trigger character
//! 6. fallback: one character of literal text
//!
//! The fallback always advances, so parsing terminates on any input.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`watermark`**: per-closer memo of failed closing searches
//! - **`parser`**: `InlineParser` and the `try_parse_*` rules

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;
pub mod watermark;

pub use parser::InlineParser;
pub use types::{InlineNode, as_plain_text};
