use crate::parsing::node::Child;

/// The kind of a grouped block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The document itself. Never nested.
    Body,
    Paragraph,
    OrderedList,
    UnorderedList,
    Table,
    /// One line of table cells.
    TableRow,
}

impl BlockKind {
    /// Markup emitted before the members.
    pub fn before(self) -> &'static str {
        match self {
            BlockKind::Body => "",
            BlockKind::Paragraph => "\n<p>",
            BlockKind::OrderedList => "\n<ol>",
            BlockKind::UnorderedList => "\n<ul>",
            BlockKind::Table => "\n<table>",
            BlockKind::TableRow => "\n<tr>",
        }
    }

    /// Markup emitted after the members.
    pub fn after(self) -> &'static str {
        match self {
            BlockKind::Body => "",
            BlockKind::Paragraph => "</p>",
            BlockKind::OrderedList => "</ol>",
            BlockKind::UnorderedList => "</ul>",
            BlockKind::Table => "</table>",
            BlockKind::TableRow => "</tr>",
        }
    }
}

/// A member of a block: either a scanned child or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Child(Child),
    Block(Block),
}

/// A synthetic grouping of scanned nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub members: Vec<Member>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    /// Nested blocks of this block, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.members.iter().filter_map(|m| match m {
            Member::Block(b) => Some(b),
            Member::Child(_) => None,
        })
    }

    /// Direct scanned children of this block, in order.
    pub fn children(&self) -> impl Iterator<Item = &Child> {
        self.members.iter().filter_map(|m| match m {
            Member::Child(c) => Some(c),
            Member::Block(_) => None,
        })
    }
}
