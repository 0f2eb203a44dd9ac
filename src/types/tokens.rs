//! Token types produced by the lexer.

use crate::types::SourceLocation;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A control sequence: `\name` (letters, maximal munch) or a
    /// single-punctuation command such as `\%` or `\\`.
    Command,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `^`
    Superscript,
    /// `_`
    Subscript,
    /// A character classified as a letter (any script).
    Letter,
    /// A maximal run of digits, possibly with medial decimal separators.
    /// Covers ASCII, Arabic-Indic and the mathematical digit blocks.
    Digit,
    /// Any other character, including `&` and unrecognized bytes.
    Operator,
    /// A run of whitespace. Discarded by the parser outside text arguments.
    Whitespace,
    /// End of the input string.
    EndOfInput,
}

/// A single token with its literal text and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The raw text, exactly as it appears in the input. For commands this
    /// includes the backslash (e.g. `\frac`).
    pub text: String,
    /// Position in the input, used for error reporting and adjacency checks.
    pub loc: Option<SourceLocation>,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, loc: Option<SourceLocation>) -> Self {
        Self { kind, text, loc }
    }

    /// 1-based line of this token, defaulting to line 1 when the token has
    /// no location.
    #[must_use]
    pub fn line(&self) -> usize {
        self.loc.as_ref().map_or(1, SourceLocation::line)
    }

    /// Start byte offset, if known.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.loc.as_ref().map(|loc| loc.start)
    }

    /// End byte offset, if known.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.loc.as_ref().map(|loc| loc.end)
    }

    /// Whether `other` starts exactly where this token ends, with nothing
    /// (not even whitespace) in between. Used for identifier merging and
    /// prime runs.
    #[must_use]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        match (self.end(), other.start()) {
            (Some(end), Some(start)) => end == start,
            _ => false,
        }
    }
}
