//! # Syntax Rules
//!
//! The declarative side of the scanner: a closed [`SyntaxKind`] enumeration
//! and a parallel, purely-data [`SyntaxRule`] table indexed by kind.
//!
//! ## Modules
//!
//! - **`kind`**: `SyntaxKind`, one variant per construct of the dialect
//! - **`table`**: `SyntaxRule` descriptors, the `Grammar` priority lists and
//!   the compiled, shareable `SyntaxTable`
//!
//! ## Priority
//!
//! When several rules could start at the same position, the first kind in
//! the active grammar's list wins. Line-anchored kinds are listed before the
//! inline kinds so that `# x` is a header and not something else.

pub mod kind;
pub mod table;

pub use kind::SyntaxKind;
pub use table::{
    CompiledRule, Grammar, PatternError, PatternRole, RULES, SyntaxRule, SyntaxTable,
};
