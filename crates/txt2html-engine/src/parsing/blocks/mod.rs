//! # Block Grouping
//!
//! Second pass over the scanner's flat root sequence, assembling it into
//! paragraphs, lists and tables.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind` with its before/after markup, `Member`
//! - **`containers`**: per-kind start, membership and nesting rules
//! - **`builder`**: `BlockBuilder` and the `group()` entry point
//!
//! ## Key Invariants
//!
//! - Grouping never fails and never drops a child: everything the Body does
//!   not place in a nested block becomes a direct Body member
//! - A list or table survives one blank line only when the next child
//!   continues it; two blank lines always end it

pub mod builder;
pub mod containers;
pub mod types;

pub use builder::{BlockBuilder, group};
pub use types::{Block, BlockKind, Member};
