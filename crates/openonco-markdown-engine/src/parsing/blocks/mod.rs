//! # Block Parsing
//!
//! Two-phase, line-oriented block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (heading marker, list marker, blank)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps a pending
//!    list accumulator and emits `BlockNode`s, running the inline parser on
//!    every block's text
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `ListKind`
//! - **`kinds`**: block-specific types with owned markers (Heading, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Block order matches source line order
//! - A list holds items of one kind; any other line closes it
//! - Blank lines only separate; they never produce a block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{BlockNode, ListKind};
