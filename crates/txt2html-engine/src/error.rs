use crate::parsing::rules::SyntaxKind;

/// Faults raised while converting a document.
///
/// Every variant is raised eagerly at the point of detection and aborts the
/// whole conversion: there is no partial-document recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A construct required a closing delimiter that never appeared.
    #[error("incomplete {kind:?} syntax, no closing delimiter before end of input: {partial:?}")]
    IncompleteSyntax { kind: SyntaxKind, partial: String },

    /// A well-delimited construct broke its internal sub-format.
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// An included external file has a type that cannot be embedded.
    #[error("external files with extension '{extension}' are not supported")]
    UnsupportedExtension { extension: String },

    /// A front-matter author line did not have three `::` separated parts.
    #[error("expected author format ':: <name> :: <email> :: <web address>', got {line:?}")]
    Author { line: String },

    /// Markup nesting exceeded the scanner's depth limit.
    #[error("markup nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }
}
