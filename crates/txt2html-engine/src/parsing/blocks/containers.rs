//! Per-container grouping rules.
//!
//! Each container answers three questions about the head of the remaining
//! sequence: does it start a nested block of this kind, is it an admissible
//! member, and which nested block kinds may be tried first.

use crate::parsing::node::Child;
use crate::parsing::rules::SyntaxKind;

use super::types::BlockKind;

impl BlockKind {
    /// Nested block kinds tried, in order, before direct membership.
    pub fn nested(self) -> &'static [BlockKind] {
        match self {
            BlockKind::Body => &[
                BlockKind::Paragraph,
                BlockKind::Table,
                BlockKind::OrderedList,
                BlockKind::UnorderedList,
            ],
            BlockKind::Paragraph => &[BlockKind::OrderedList, BlockKind::UnorderedList],
            BlockKind::Table => &[BlockKind::TableRow],
            BlockKind::OrderedList | BlockKind::UnorderedList | BlockKind::TableRow => &[],
        }
    }

    /// Whether `head` opens a block of this kind.
    pub fn starts_on(self, head: &Child) -> bool {
        let Some(kind) = head.kind() else {
            return self == BlockKind::Paragraph;
        };
        match self {
            BlockKind::Body => false,
            BlockKind::Paragraph => !matches!(
                kind,
                SyntaxKind::TableCell | SyntaxKind::NewLine | SyntaxKind::Header
            ),
            BlockKind::OrderedList => kind == SyntaxKind::OrderedItem,
            BlockKind::UnorderedList => kind == SyntaxKind::UnorderedItem,
            BlockKind::Table | BlockKind::TableRow => kind == SyntaxKind::TableCell,
        }
    }

    /// Whether `head` may be consumed as a direct member.
    ///
    /// `next` is the child after `head`, used to decide whether a blank line
    /// separates two parts of the same list or table.
    pub fn admits(self, head: &Child, next: Option<&Child>) -> bool {
        if let Some(newline) = head.as_node_of(SyntaxKind::NewLine) {
            return match self {
                BlockKind::Body => true,
                BlockKind::Paragraph => newline.run_length() == 1,
                BlockKind::TableRow => false,
                _ => match newline.run_length() {
                    1 => true,
                    2 => next.is_some_and(|n| self.continues_on(n)),
                    _ => false,
                },
            };
        }
        let Some(kind) = head.kind() else {
            return matches!(self, BlockKind::Body | BlockKind::Paragraph);
        };
        match self {
            BlockKind::Body => true,
            BlockKind::Paragraph => !matches!(kind, SyntaxKind::Header | SyntaxKind::TableCell),
            BlockKind::OrderedList => {
                matches!(kind, SyntaxKind::OrderedItem | SyntaxKind::Ignore)
            }
            BlockKind::UnorderedList => {
                matches!(kind, SyntaxKind::UnorderedItem | SyntaxKind::Ignore)
            }
            BlockKind::Table => matches!(kind, SyntaxKind::Divider | SyntaxKind::Ignore),
            BlockKind::TableRow => kind == SyntaxKind::TableCell,
        }
    }

    /// Whether `next` carries a list or table on past a blank line.
    fn continues_on(self, next: &Child) -> bool {
        match self {
            BlockKind::Table => matches!(
                next.kind(),
                Some(SyntaxKind::TableCell | SyntaxKind::Divider | SyntaxKind::Ignore)
            ),
            BlockKind::OrderedList | BlockKind::UnorderedList => {
                self.starts_on(next) || next.kind() == Some(SyntaxKind::Ignore)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::node::Node;

    fn node(kind: SyntaxKind, delimiter: &str) -> Child {
        Child::Node(Node::new(kind, delimiter))
    }

    fn text() -> Child {
        Child::Text("words".into())
    }

    #[test]
    fn paragraph_starts_on_text_but_not_on_headers_or_cells() {
        assert!(BlockKind::Paragraph.starts_on(&text()));
        assert!(BlockKind::Paragraph.starts_on(&node(SyntaxKind::Emphasis, "*")));
        assert!(!BlockKind::Paragraph.starts_on(&node(SyntaxKind::Header, "#")));
        assert!(!BlockKind::Paragraph.starts_on(&node(SyntaxKind::TableCell, "|")));
        assert!(!BlockKind::Paragraph.starts_on(&node(SyntaxKind::NewLine, "\n")));
    }

    #[test]
    fn paragraph_admits_single_line_breaks_only() {
        let p = BlockKind::Paragraph;
        assert!(p.admits(&node(SyntaxKind::NewLine, "\n"), None));
        assert!(!p.admits(&node(SyntaxKind::NewLine, "\n\n"), Some(&text())));
        assert!(!p.admits(&node(SyntaxKind::Header, "#"), None));
    }

    #[test]
    fn list_continues_across_one_blank_line_only_into_another_item() {
        let list = BlockKind::UnorderedList;
        let blank = node(SyntaxKind::NewLine, "\n\n");
        let item = node(SyntaxKind::UnorderedItem, "- ");
        assert!(list.admits(&blank, Some(&item)));
        assert!(!list.admits(&blank, Some(&text())));
        assert!(!list.admits(&blank, None));
        assert!(!list.admits(&node(SyntaxKind::NewLine, "\n\n\n"), Some(&item)));
    }

    #[test]
    fn ordered_and_unordered_items_do_not_mix() {
        let ordered = node(SyntaxKind::OrderedItem, "1.");
        assert!(BlockKind::OrderedList.admits(&ordered, None));
        assert!(!BlockKind::UnorderedList.admits(&ordered, None));
    }

    #[test]
    fn table_rows_hold_only_cells() {
        let row = BlockKind::TableRow;
        assert!(row.admits(&node(SyntaxKind::TableCell, "|"), None));
        assert!(!row.admits(&node(SyntaxKind::NewLine, "\n"), None));
        assert!(BlockKind::Table.admits(&node(SyntaxKind::Divider, "----"), None));
    }
}
