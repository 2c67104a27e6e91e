//! # Document Assembly
//!
//! Everything around the converted body: metadata read from the top of the
//! source, and the full HTML page the body is placed into.

pub mod front_matter;
pub mod page;

pub use front_matter::{Author, FrontMatter};
pub use page::{PageOptions, PageParts, render_page};
