pub mod blocks;
pub mod matcher;
pub mod node;
pub mod rules;
pub mod scanner;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::Block;
use node::Node;
use rules::SyntaxTable;
use scanner::Parser;

use crate::error::Error;

#[derive(Debug)]
pub struct ParsedDoc {
    /// The [`rules::SyntaxKind::PlainText`] root.
    pub root: Node,
    /// Whether any note construct appeared anywhere in the document.
    pub found_note: bool,
}

pub fn parse_document(text: &str) -> Result<ParsedDoc, Error> {
    let mut parser = Parser::new(text, SyntaxTable::standard());
    let root = parser.parse_root()?;
    Ok(ParsedDoc {
        root,
        found_note: parser.found_note(),
    })
}

/// Convenience: scan and group in one step.
pub fn parse_blocks(text: &str) -> Result<(Block, bool), Error> {
    let doc = parse_document(text)?;
    Ok((blocks::group(doc.root.children), doc.found_note))
}
