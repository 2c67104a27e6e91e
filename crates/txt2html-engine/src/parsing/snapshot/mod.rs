//! # Snapshot Testing Support
//!
//! Utilities for testing the scanner and grouper via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders node and block trees as a stable, indented text
//!   dump for `insta` snapshots and the CLI's `--tree` output
//! - **`invariants`**: Structural checks every parse must satisfy (no empty
//!   or split text leaves, grouping loses nothing, modifiers hold only text)

pub mod invariants;
pub mod normalize;
