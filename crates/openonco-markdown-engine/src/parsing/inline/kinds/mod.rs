//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `**` / `__`, body parsed recursively
//! - **`Emphasis`**: `*` / `_`, body parsed recursively
//! - **`CodeSpan`**: `` ` ``, raw zone that suppresses other parsing
//! - **`Link`**: `[`, `]`, `(`, `)`
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;

/// Bytes that end a plain text run because some rule may start there.
pub const TRIGGERS: &[u8] = b"*_`[";

/// Returns true if `b` may start a non-plain inline construct.
pub fn is_trigger(b: u8) -> bool {
    TRIGGERS.contains(&b)
}
