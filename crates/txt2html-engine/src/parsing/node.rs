use super::rules::SyntaxKind;

/// One item in a node's ordered contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Literal text, already escape-substituted.
    Text(String),
    /// A nested construct.
    Node(Node),
    /// `<< ... >>` attribute text. Contributes no visible output.
    Modifier(Node),
}

impl Child {
    /// The syntax kind of this child, `None` for text.
    pub fn kind(&self) -> Option<SyntaxKind> {
        match self {
            Child::Text(_) => None,
            Child::Node(node) | Child::Modifier(node) => Some(node.kind),
        }
    }

    /// Returns the node if this child is a rule-typed node of `kind`.
    pub fn as_node_of(&self, kind: SyntaxKind) -> Option<&Node> {
        match self {
            Child::Node(node) if node.kind == kind => Some(node),
            _ => None,
        }
    }
}

/// A rule-typed node produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    /// The exact opening text that started this node.
    pub delimiter: String,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(kind: SyntaxKind, delimiter: impl Into<String>) -> Self {
        Self {
            kind,
            delimiter: delimiter.into(),
            children: Vec::new(),
        }
    }

    /// Length of the opening delimiter run.
    ///
    /// For [`SyntaxKind::NewLine`] this is the number of line terminators,
    /// counting `\r\n` as one.
    pub fn run_length(&self) -> usize {
        match self.kind {
            SyntaxKind::NewLine => count_line_breaks(&self.delimiter),
            _ => self.delimiter.chars().count(),
        }
    }

    /// Appends text, merging with a trailing text child.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(Child::Text(last)) => last.push_str(text),
            _ => self.children.push(Child::Text(text.to_string())),
        }
    }

    pub fn push_node(&mut self, node: Node) {
        let child = if node.kind == SyntaxKind::Modifier {
            Child::Modifier(node)
        } else {
            Child::Node(node)
        };
        self.children.push(child);
    }

    /// Approximate source text: delimiters and text, depth first.
    ///
    /// Escape markers are already gone at this point, so this is only used
    /// for diagnostics.
    pub fn source_text(&self) -> String {
        let mut out = self.delimiter.clone();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Node(node) | Child::Modifier(node) => out.push_str(&node.source_text()),
            }
        }
    }

    /// Concatenated text children only, ignoring nested nodes.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Child::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Counts line terminators, treating `\r\n` as a single terminator.
pub fn count_line_breaks(s: &str) -> usize {
    let mut count = 0;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => count += 1,
            '\r' => {
                count += 1;
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => {}
        }
    }
    count
}

/// Returns true if `s` ends with a line terminator.
pub fn ends_with_line_break(s: &str) -> bool {
    s.ends_with('\n') || s.ends_with('\r')
}
