//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed structures to a stable, serializable `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (heading levels in range,
//!   no empty lists or nodes, adjacent text coalesced, content preserved)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots rather than a separate formal
//! grammar. Snapshots record block kinds, heading levels, inline kinds, visible
//! text and link targets.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_inline};
pub use normalize::{Snap, normalize};
