use log::debug;

use crate::error::Error;
use crate::parsing::matcher::window;
use crate::parsing::node::{Node, ends_with_line_break};
use crate::parsing::rules::{Grammar, SyntaxKind, SyntaxTable};

use super::cursor::Cursor;

/// Deepest markup nesting accepted before the scan is aborted.
pub const MAX_DEPTH: usize = 256;

const ESCAPE: char = '\\';

/// Characters rewritten when they follow an escape marker.
fn substitute(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

/// Result of scanning one construct.
#[derive(Debug)]
pub struct Scanned<'a> {
    pub node: Node,
    /// The end delimiter consumed, empty when the rule leaves it in place.
    pub end_text: &'a str,
    pub remaining: &'a str,
    /// Whether any note construct started during the scan.
    pub found_note: bool,
}

/// Scans `text` as the body of a `kind` construct opened by `delimiter`.
///
/// For the document root pass [`SyntaxKind::PlainText`] and an empty
/// delimiter.
pub fn scan<'a>(text: &'a str, kind: SyntaxKind, delimiter: &str) -> Result<Scanned<'a>, Error> {
    let mut parser = Parser::new(text, SyntaxTable::standard());
    let line_start = kind == SyntaxKind::PlainText || ends_with_line_break(delimiter);
    let (node, end_text) = parser.scan(kind, delimiter, line_start, 0)?;
    Ok(Scanned {
        node,
        end_text,
        remaining: parser.cursor.rest(),
        found_note: parser.found_note,
    })
}

/// Recursive-descent scanner state for one document.
///
/// All mutable state lives here and is dropped with the parser, so separate
/// documents can be scanned concurrently.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    table: &'a SyntaxTable,
    found_note: bool,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, table: &'a SyntaxTable) -> Self {
        Self {
            cursor: Cursor::new(text),
            table,
            found_note: false,
        }
    }

    pub fn found_note(&self) -> bool {
        self.found_note
    }

    /// Scans the whole input as the document root.
    pub fn parse_root(&mut self) -> Result<Node, Error> {
        let (node, _) = self.scan(SyntaxKind::PlainText, "", true, 0)?;
        Ok(node)
    }

    /// Scans one construct starting at the cursor, just after `delimiter`.
    ///
    /// Returns the node and the end text it consumed.
    fn scan(
        &mut self,
        kind: SyntaxKind,
        delimiter: &str,
        mut line_start: bool,
        depth: usize,
    ) -> Result<(Node, &'a str), Error> {
        if depth > MAX_DEPTH {
            return Err(Error::NestingTooDeep { limit: MAX_DEPTH });
        }
        let table = self.table;
        let compiled = table.get(kind);
        let rule = compiled.rule;
        let matcher = table.matcher();
        let opening_run = delimiter.chars().count();

        let mut node = Node::new(kind, delimiter);
        let mut escaped = false;

        loop {
            let rest = self.cursor.rest();
            let win = window(rest);

            if let Some(m) = matcher.find(&compiled.end, win) {
                let closing = &win[m.clone()];
                if !rule.symmetric || closing.chars().count() == opening_run {
                    let end_text = if rule.emit_end_text {
                        self.cursor.take(m.end)
                    } else {
                        ""
                    };
                    return Ok((node, end_text));
                }
            }

            if rest.is_empty() {
                if rule.closed {
                    return Err(Error::IncompleteSyntax {
                        kind,
                        partial: node.source_text(),
                    });
                }
                return Ok((node, ""));
            }

            if let Some((child_kind, len)) = self.try_start(rule.grammar, win, line_start, escaped)
            {
                if child_kind == SyntaxKind::Note {
                    self.found_note = true;
                }
                let opened = self.cursor.take(len);
                debug!("{:?} opens {:?} with {:?}", kind, child_kind, opened);
                let (child, ends_on) =
                    self.scan(child_kind, opened, ends_with_line_break(opened), depth + 1)?;
                line_start = ends_with_line_break(ends_on) || child.kind == SyntaxKind::NewLine;
                escaped = false;
                node.push_node(child);
                continue;
            }

            let Some(c) = self.cursor.bump() else {
                continue;
            };
            line_start = c == '\n' || c == '\r';
            if escaped {
                escaped = false;
                match substitute(c) {
                    Some(entity) => node.push_text(entity),
                    None => node.push_text(c.encode_utf8(&mut [0; 4])),
                }
            } else if rule.allow_escape && c == ESCAPE {
                escaped = true;
            } else {
                node.push_text(c.encode_utf8(&mut [0; 4]));
            }
        }
    }

    /// Finds the first kind in `grammar` whose start pattern matches `win`.
    fn try_start(
        &self,
        grammar: Grammar,
        win: &str,
        line_start: bool,
        escaped: bool,
    ) -> Option<(SyntaxKind, usize)> {
        let table = self.table;
        let matcher = table.matcher();
        grammar.kinds().iter().find_map(|&candidate| {
            let compiled = table.get(candidate);
            if compiled.rule.line_start_required && !line_start {
                return None;
            }
            if compiled.rule.escapable && escaped {
                return None;
            }
            let m = matcher.find(&compiled.start, win)?;
            (m.end > 0).then_some((candidate, m.end))
        })
    }
}
