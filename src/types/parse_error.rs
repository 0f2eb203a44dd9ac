//! Error types for the translation engine.
//!
//! [`ParseError`] mirrors the shape the parser needs for error reporting:
//! a categorized reason plus the 1-based line of the offending token. Its
//! `Display` output is the user-visible `Parse error on line N: ...` text
//! that also ends up inside `merror` elements in non-throwing mode.

use crate::types::{SourceLocation, Token};
use alloc::boxed::Box;
use alloc::string::String;
use thiserror::Error;

/// Error raised when the input violates the iTeX grammar.
///
/// Carries the line number of the offending token so callers (and the
/// inline `merror` rendering) can point at the problem. The lexer never
/// produces errors; every `ParseError` originates in the parser.
#[derive(Debug, Error)]
#[error("Parse error on line {line}: {kind}")]
pub struct ParseError {
    /// Categorized reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// 1-based line of the offending token.
    pub line: usize,
    /// Start byte offset of the offending token, when known.
    pub position: Option<usize>,
}

impl ParseError {
    /// Creates an error with no position information (line 1).
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
            line: 1,
            position: None,
        }
    }

    /// Creates an error located at `token`.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &Token) -> Self {
        Self {
            kind: Box::new(kind.into()),
            line: token.line(),
            position: token.start(),
        }
    }

    /// Creates an error located at `loc`.
    pub fn with_location<T: Into<ParseErrorKind>>(kind: T, loc: &SourceLocation) -> Self {
        Self {
            kind: Box::new(kind.into()),
            line: loc.line(),
            position: Some(loc.start),
        }
    }
}

/// Describes the specific reason for a [`ParseError`].
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Message(&'static str),
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Unexpected token '{found}'")]
    UnexpectedToken { found: String },
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },
    #[error("Missing argument for '{command}'")]
    MissingArgument { command: String },
    #[error("Double subscript")]
    DoubleSubscript,
    #[error("Double superscript")]
    DoubleSuperscript,
    #[error("No such environment: {name}")]
    NoSuchEnvironment { name: String },
    #[error(r"Mismatched: \begin{{{begin}}} matched by \end{{{end}}}")]
    MismatchedEnvironmentEnd { begin: String, end: String },
    #[error(r"Expected \endtoggle")]
    MissingEndToggle,
    #[error("Unknown table option '{name}'")]
    UnknownTableOption { name: String },
    #[error("Expected a delimiter, got '{found}'")]
    ExpectedDelimiter { found: String },
    #[error("Too much nesting")]
    NestingLimitExceeded,
}

impl From<&'static str> for ParseErrorKind {
    fn from(message: &'static str) -> Self {
        Self::Message(message)
    }
}

/// Error raised by the reverse path when a MathML tree or markup string
/// carries no recoverable TeX annotation.
///
/// This is a distinct, recoverable condition: the markup may be perfectly
/// valid MathML that simply was not produced by this engine.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `annotation` element with `encoding="TeX"` was found under a
    /// `semantics` wrapper.
    #[error("no TeX annotation found")]
    NotAnnotated,
    /// The markup could not be read as XML at all.
    #[error("malformed MathML markup: {0}")]
    Markup(#[from] quick_xml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_number() {
        let err = ParseError::new(ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.to_string(), "Parse error on line 1: Unexpected end of input");
    }

    #[test]
    fn with_token_picks_up_the_line() {
        use crate::types::{SourceLocation, Token, TokenKind};
        use alloc::sync::Arc;

        let input: Arc<str> = Arc::from("x\n\\oops");
        let token = Token::new(
            TokenKind::Command,
            "\\oops".to_owned(),
            Some(SourceLocation::new(input, 2, 7)),
        );
        let err = ParseError::with_token(
            ParseErrorKind::UnknownCommand {
                name: "\\oops".to_owned(),
            },
            &token,
        );
        assert_eq!(err.line, 2);
        assert!(err.to_string().contains("Parse error on line 2"));
    }
}
