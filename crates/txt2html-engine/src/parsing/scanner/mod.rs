//! # Scanner
//!
//! Single-pass recursive descent over the raw document, driven entirely by
//! the rule table.
//!
//! At each position the active rule's end pattern is tried first. Failing
//! that, the active grammar is searched in priority order for a start
//! pattern, and a hit recurses with the child rule's own grammar. Anything
//! else becomes text.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor`, a forward-only position over the input
//! - **`parser`**: `Parser` and the `scan()` entry point

pub mod cursor;
pub mod parser;

pub use parser::{MAX_DEPTH, Parser, Scanned, scan};
