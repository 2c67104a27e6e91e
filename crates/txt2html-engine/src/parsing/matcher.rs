//! # Pattern Matching Glue
//!
//! The scanner never runs a regex directly. It hands a compiled [`Pattern`]
//! and a bounded [`window`] of the remaining input to a [`PatternMatcher`],
//! which answers with the half-open byte range of a match anchored at the
//! start of the window.
//!
//! Patterns are always anchored: `Pattern::new("ab")` matches only text that
//! begins with `ab`, mirroring a "match at cursor" primitive rather than a
//! search.

use std::ops::Range;

use regex::Regex;

/// Maximum number of characters of remaining input a matcher sees.
pub const WINDOW_CHARS: usize = 100;

/// Returns the bounded prefix of `rest` that patterns are tested against.
///
/// An empty window means the cursor is at end of input.
pub fn window(rest: &str) -> &str {
    match rest.char_indices().nth(WINDOW_CHARS) {
        Some((end, _)) => &rest[..end],
        None => rest,
    }
}

/// Whether alphabetic pattern characters match either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// Letters are pre-expanded into `[xX]` classes before compiling.
    Insensitive,
}

/// A compiled, start-anchored pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source`, anchoring it at the start of the window.
    pub fn new(source: &str, case: CaseMode) -> Result<Self, regex::Error> {
        let body = match case {
            CaseMode::Sensitive => source.to_string(),
            CaseMode::Insensitive => expand_case(source),
        };
        let regex = Regex::new(&format!("^(?:{body})"))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern text as written in the rule table.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Answers "does `pattern` match at the start of `window`?".
pub trait PatternMatcher: Send + Sync {
    fn find(&self, pattern: &Pattern, window: &str) -> Option<Range<usize>>;
}

/// The default matcher, backed by the `regex` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMatcher;

impl PatternMatcher for RegexMatcher {
    fn find(&self, pattern: &Pattern, window: &str) -> Option<Range<usize>> {
        pattern
            .regex
            .find(window)
            .filter(|m| m.start() == 0)
            .map(|m| m.range())
    }
}

/// Rewrites every ASCII letter outside an escape into a dual-case class.
///
/// `ab` becomes `[aA][bB]`. Inside an existing class the other case is
/// appended instead, ranges as a whole: `[xa-c]` becomes `[xXa-cA-C]`.
pub fn expand_case(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 4);
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            c if c.is_ascii_alphabetic() => {
                let (lower, upper) = (c.to_ascii_lowercase(), c.to_ascii_uppercase());
                if in_class {
                    let mut ahead = chars.clone();
                    match (ahead.next(), ahead.next()) {
                        (Some('-'), Some(last)) if last.is_ascii_alphabetic() => {
                            chars = ahead;
                            let (last_lower, last_upper) =
                                (last.to_ascii_lowercase(), last.to_ascii_uppercase());
                            out.push_str(&format!("{lower}-{last_lower}{upper}-{last_upper}"));
                        }
                        _ => {
                            out.push(lower);
                            out.push(upper);
                        }
                    }
                } else {
                    out.push('[');
                    out.push(lower);
                    out.push(upper);
                    out.push(']');
                }
            }
            c => out.push(c),
        }
    }

    out
}
