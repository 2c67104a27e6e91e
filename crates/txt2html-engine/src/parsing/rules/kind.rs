//! SyntaxKind enum for every construct the scanner can produce.

/// All syntax kinds of the dialect.
///
/// The discriminant doubles as the index into the rule table, so the order
/// here is the table order, not the matching priority. Priority lives in
/// the grammars (see [`Grammar`](super::Grammar)).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    /// `<< attrs >>` attribute text injected into the enclosing tag
    Modifier,
    /// `$inline$` or `$$display$$` math
    Math,
    /// `[[key]]` bibliography citation
    Reference,
    /// `@@Header name@@` in-document link
    Jump,
    /// `@{text}{url}@` hyperlink
    Link,
    /// `~ caption` line
    Caption,
    /// `{{path}}` included image or HTML file
    External,
    /// `<20>` fixed-width spacer
    Spacer,
    /// A run of line terminators
    NewLine,
    /// `%%` comment up to end of line
    Ignore,
    /// `----` horizontal rule
    Divider,
    /// `^^^^` print page break
    NewPage,
    /// `====` marks the rest of the document as BibTeX
    Bibliography,
    /// `((footnote))`
    Note,
    /// `*` italic, `**` bold, `***` underline, `****` monospace
    Emphasis,
    /// `` `code` ``
    InlineCode,
    /// `{color}text{color}`
    Color,
    /// `!` title line
    Title,
    /// `#` header line
    Header,
    /// Indented line
    Subtext,
    /// `- ` list item
    UnorderedItem,
    /// `1)` or `1.` list item
    OrderedItem,
    /// `|` table cell
    TableCell,
    /// The document root
    PlainText,
}

impl SyntaxKind {
    /// Every kind, in table order.
    pub const ALL: [SyntaxKind; 24] = [
        Self::Modifier,
        Self::Math,
        Self::Reference,
        Self::Jump,
        Self::Link,
        Self::Caption,
        Self::External,
        Self::Spacer,
        Self::NewLine,
        Self::Ignore,
        Self::Divider,
        Self::NewPage,
        Self::Bibliography,
        Self::Note,
        Self::Emphasis,
        Self::InlineCode,
        Self::Color,
        Self::Title,
        Self::Header,
        Self::Subtext,
        Self::UnorderedItem,
        Self::OrderedItem,
        Self::TableCell,
        Self::PlainText,
    ];

    /// Position of this kind's rule in the table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for list item kinds.
    pub fn is_list_item(self) -> bool {
        matches!(self, Self::UnorderedItem | Self::OrderedItem)
    }
}
