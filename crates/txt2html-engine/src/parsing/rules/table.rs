use std::fmt;
use std::sync::LazyLock;

use crate::parsing::matcher::{CaseMode, Pattern, PatternMatcher, RegexMatcher};

use super::kind::SyntaxKind;

/// Line terminator or end of input.
const EOL: &str = r"\r\n|\r|\n|\z";
/// End of input, swallowing at most one final line terminator.
///
/// A match spans at most two characters, so it only reaches the end of a
/// window that holds all of the remaining input.
const END_OF_INPUT: &str = r"(?:\r\n|\r|\n)?\z";
/// Always matches, consuming nothing.
const IMMEDIATE: &str = "";

/// The nested grammar a rule scans its content with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Raw content: nothing nests.
    None,
    /// Constructs usable anywhere.
    Inline,
    /// Inline plus table-cell boundaries and dividers.
    TableCell,
    /// Everything, line-anchored kinds first.
    Block,
}

const INLINE: &[SyntaxKind] = &[
    SyntaxKind::Modifier,
    SyntaxKind::Math,
    SyntaxKind::Emphasis,
    SyntaxKind::InlineCode,
    SyntaxKind::Color,
    SyntaxKind::Note,
    SyntaxKind::Reference,
    SyntaxKind::Jump,
    SyntaxKind::Link,
    SyntaxKind::Subtext,
    SyntaxKind::Ignore,
    SyntaxKind::Spacer,
];

const TABLE_CELL: &[SyntaxKind] = &[
    SyntaxKind::Modifier,
    SyntaxKind::Math,
    SyntaxKind::Emphasis,
    SyntaxKind::InlineCode,
    SyntaxKind::Color,
    SyntaxKind::Note,
    SyntaxKind::Reference,
    SyntaxKind::Jump,
    SyntaxKind::Link,
    SyntaxKind::Subtext,
    SyntaxKind::Ignore,
    SyntaxKind::Spacer,
    SyntaxKind::Divider,
    SyntaxKind::TableCell,
];

const BLOCK: &[SyntaxKind] = &[
    SyntaxKind::NewLine,
    SyntaxKind::Divider,
    SyntaxKind::NewPage,
    SyntaxKind::Header,
    SyntaxKind::Title,
    SyntaxKind::Bibliography,
    SyntaxKind::External,
    SyntaxKind::Caption,
    SyntaxKind::UnorderedItem,
    SyntaxKind::OrderedItem,
    SyntaxKind::TableCell,
    SyntaxKind::Modifier,
    SyntaxKind::Math,
    SyntaxKind::Emphasis,
    SyntaxKind::InlineCode,
    SyntaxKind::Color,
    SyntaxKind::Note,
    SyntaxKind::Reference,
    SyntaxKind::Jump,
    SyntaxKind::Link,
    SyntaxKind::Subtext,
    SyntaxKind::Ignore,
    SyntaxKind::Spacer,
];

impl Grammar {
    /// The kinds visible in this grammar, in priority order.
    pub fn kinds(self) -> &'static [SyntaxKind] {
        match self {
            Grammar::None => &[],
            Grammar::Inline => INLINE,
            Grammar::TableCell => TABLE_CELL,
            Grammar::Block => BLOCK,
        }
    }
}

/// Immutable per-kind descriptor. Pure data; rendering lives in
/// [`crate::render::pack`].
#[derive(Debug, Clone, Copy)]
pub struct SyntaxRule {
    pub kind: SyntaxKind,
    pub start: &'static str,
    pub end: &'static str,
    /// Closing run length must equal the opening run length.
    pub symmetric: bool,
    /// Not recognised right after an escape marker.
    pub escapable: bool,
    /// Only recognised at document start or right after a line terminator.
    pub line_start_required: bool,
    /// The escape marker is interpreted inside this construct.
    pub allow_escape: bool,
    /// The matched end text is consumed rather than left for the parent.
    pub emit_end_text: bool,
    /// Reaching end of input without the end pattern is a fault.
    pub closed: bool,
    /// Modifier attributes may be injected into this construct's tag.
    pub accepts_modifiers: bool,
    pub grammar: Grammar,
}

impl SyntaxRule {
    const fn new(kind: SyntaxKind, start: &'static str, end: &'static str) -> Self {
        Self {
            kind,
            start,
            end,
            symmetric: false,
            escapable: false,
            line_start_required: false,
            allow_escape: true,
            emit_end_text: true,
            closed: true,
            accepts_modifiers: true,
            grammar: Grammar::None,
        }
    }

    const fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }

    const fn escapable(mut self) -> Self {
        self.escapable = true;
        self
    }

    const fn line_start(mut self) -> Self {
        self.line_start_required = true;
        self
    }

    const fn raw(mut self) -> Self {
        self.allow_escape = false;
        self
    }

    const fn keep_end(mut self) -> Self {
        self.emit_end_text = false;
        self
    }

    const fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }
}

/// The rule table, indexed by [`SyntaxKind::index`].
pub static RULES: [SyntaxRule; 24] = [
    SyntaxRule {
        accepts_modifiers: false,
        ..SyntaxRule::new(SyntaxKind::Modifier, "<<", ">>").escapable()
    },
    SyntaxRule::new(SyntaxKind::Math, r"\$+", r"\$+")
        .symmetric()
        .escapable()
        .raw(),
    SyntaxRule::new(SyntaxKind::Reference, r"\[\[+", r"\]\]+").symmetric(),
    SyntaxRule::new(SyntaxKind::Jump, "@@", "@@").escapable(),
    SyntaxRule::new(SyntaxKind::Link, r"@\{", r"\}@").escapable(),
    SyntaxRule::new(SyntaxKind::Caption, "~ +", EOL)
        .line_start()
        .keep_end()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::External, r"\{\{", r"\}\}")
        .symmetric()
        .line_start(),
    SyntaxRule::new(SyntaxKind::Spacer, "<[0-9]+>", IMMEDIATE).escapable(),
    SyntaxRule::new(SyntaxKind::NewLine, r"(?:\r\n|\r|\n)+", IMMEDIATE),
    SyntaxRule::new(SyntaxKind::Ignore, "%%", EOL)
        .escapable()
        .line_start(),
    SyntaxRule::new(SyntaxKind::Divider, "----+", EOL)
        .line_start()
        .keep_end(),
    SyntaxRule::new(SyntaxKind::NewPage, r"\^\^\^\^+", EOL)
        .line_start()
        .keep_end(),
    SyntaxRule::new(SyntaxKind::Bibliography, "====+", END_OF_INPUT).line_start(),
    SyntaxRule::new(SyntaxKind::Note, r"\(\(+", r"\)\)+")
        .symmetric()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::Emphasis, r"\*+", r"\*+")
        .symmetric()
        .escapable()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::InlineCode, "`+", "`+")
        .symmetric()
        .escapable()
        .raw(),
    SyntaxRule::new(SyntaxKind::Color, r"\{[^}]+\}", r"\{[^}]+\}")
        .symmetric()
        .escapable()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::Title, "!+", EOL)
        .escapable()
        .line_start()
        .keep_end()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::Header, "#+", EOL)
        .escapable()
        .line_start()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::Subtext, " +", EOL)
        .line_start()
        .keep_end()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::UnorderedItem, "- +", EOL)
        .line_start()
        .keep_end()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::OrderedItem, r"[0-9]+[).]", EOL)
        .line_start()
        .keep_end()
        .grammar(Grammar::Inline),
    SyntaxRule::new(SyntaxKind::TableCell, r"\|", r"\||\r\n|\r|\n|\z")
        .escapable()
        .keep_end()
        .grammar(Grammar::TableCell),
    SyntaxRule {
        closed: false,
        accepts_modifiers: false,
        ..SyntaxRule::new(SyntaxKind::PlainText, r"\z", END_OF_INPUT).grammar(Grammar::Block)
    },
];

impl SyntaxKind {
    /// The static rule describing this kind.
    pub fn rule(self) -> &'static SyntaxRule {
        &RULES[self.index()]
    }
}

/// Which of a rule's two patterns is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Start,
    End,
}

impl fmt::Display for PatternRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternRole::Start => f.write_str("start"),
            PatternRole::End => f.write_str("end"),
        }
    }
}

/// A defect in a rule table entry. Never caused by document input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed {role} pattern {pattern:?} for {kind:?}: {message}")]
pub struct PatternError {
    pub kind: SyntaxKind,
    pub role: PatternRole,
    pub pattern: String,
    /// The regex engine's diagnostic, including the failing position.
    pub message: String,
}

/// A rule with both patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: &'static SyntaxRule,
    pub start: Pattern,
    pub end: Pattern,
}

/// The compiled rule table plus the matcher it is evaluated with.
pub struct SyntaxTable {
    rules: Vec<CompiledRule>,
    matcher: Box<dyn PatternMatcher>,
}

impl fmt::Debug for SyntaxTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTable")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

static STANDARD: LazyLock<SyntaxTable> = LazyLock::new(|| {
    SyntaxTable::compile(&RULES, Box::new(RegexMatcher))
        .unwrap_or_else(|err| panic!("built-in rule table is invalid: {err}"))
});

impl SyntaxTable {
    /// The built-in table, compiled once and shared read-only.
    pub fn standard() -> &'static SyntaxTable {
        &STANDARD
    }

    /// Compiles `rules`, which must be listed in [`SyntaxKind`] order.
    ///
    /// Fails on the first pattern that does not compile, or on a start
    /// pattern that can match empty text (the scanner would never advance).
    pub fn compile(
        rules: &'static [SyntaxRule],
        matcher: Box<dyn PatternMatcher>,
    ) -> Result<Self, PatternError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            debug_assert_eq!(rule.kind.index(), i, "rule table out of kind order");
            let compile = |source: &str, role| {
                Pattern::new(source, CaseMode::Sensitive).map_err(|err| PatternError {
                    kind: rule.kind,
                    role,
                    pattern: source.to_string(),
                    message: err.to_string(),
                })
            };
            let start = compile(rule.start, PatternRole::Start)?;
            let end = compile(rule.end, PatternRole::End)?;

            if rule.kind != SyntaxKind::PlainText && matcher.find(&start, "").is_some() {
                return Err(PatternError {
                    kind: rule.kind,
                    role: PatternRole::Start,
                    pattern: rule.start.to_string(),
                    message: "start pattern matches empty text".to_string(),
                });
            }

            compiled.push(CompiledRule { rule, start, end });
        }
        Ok(Self {
            rules: compiled,
            matcher,
        })
    }

    pub fn get(&self, kind: SyntaxKind) -> &CompiledRule {
        &self.rules[kind.index()]
    }

    pub fn matcher(&self) -> &dyn PatternMatcher {
        self.matcher.as_ref()
    }
}
