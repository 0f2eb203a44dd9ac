//! The lexer turns an input string into typed tokens.
//!
//! Tokenization is total: there is no lex error. Unknown bytes become
//! Operator tokens and unknown escape sequences become Command tokens that
//! the parser rejects. The lexer also exposes raw scanning for the
//! brace/bracket arguments of text-like macros (`\mtext`, `\ms`,
//! `\color`, ...), which do not go through ordinary tokenization.

use crate::types::{ParseError, ParseErrorKind, SourceLocation, Token, TokenKind};
use alloc::sync::Arc;

/// Whether `ch` belongs to a digit run. Covers ASCII, the Arabic-Indic
/// blocks and the Mathematical Alphanumeric digit block, so numbers in
/// non-Latin scripts lex as numbers.
#[must_use]
pub const fn is_digit_char(ch: char) -> bool {
    matches!(ch,
        '0'..='9'
        | '\u{0660}'..='\u{0669}'
        | '\u{06F0}'..='\u{06F9}'
        | '\u{1D7CE}'..='\u{1D7FF}'
    )
}

/// Whether `ch` can join two digit runs into one number: the ASCII full
/// stop and the Arabic decimal separator.
#[must_use]
pub const fn is_digit_separator(ch: char) -> bool {
    matches!(ch, '.' | '\u{066B}')
}

/// Reverses the raw-group escaping rules: a backslash followed by a
/// non-alphanumeric character stands for that character; anything else is
/// kept verbatim.
#[must_use]
pub fn unescape_raw(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) if !next.is_alphanumeric() => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Streaming tokenizer over a shared input string.
pub struct Lexer {
    input: Arc<str>,
    pos: usize,
}

impl Lexer {
    /// Creates a lexer at the start of `input`.
    #[must_use]
    pub fn new(input: Arc<str>) -> Self {
        Self { input, pos: 0 }
    }

    /// The input the lexer reads from.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    fn loc(&self, start: usize) -> Option<SourceLocation> {
        Some(SourceLocation::new(Arc::clone(&self.input), start, self.pos))
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.input[start..self.pos].to_owned(), self.loc(start))
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Produces the next token. Never fails; the end of input is reported
    /// as an `EndOfInput` token (repeatedly, if asked again).
    pub fn next_token(&mut self) -> Token {
        let start = self.pos;
        let Some(ch) = self.rest().chars().next() else {
            return Token::new(TokenKind::EndOfInput, String::new(), self.loc(start));
        };

        match ch {
            '{' | '}' | '[' | ']' | '^' | '_' => {
                self.pos += 1;
                let kind = match ch {
                    '{' => TokenKind::OpenBrace,
                    '}' => TokenKind::CloseBrace,
                    '[' => TokenKind::OpenBracket,
                    ']' => TokenKind::CloseBracket,
                    '^' => TokenKind::Superscript,
                    _ => TokenKind::Subscript,
                };
                self.token(kind, start)
            }
            '\\' => {
                self.pos += 1;
                let word_len = self
                    .rest()
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(self.rest().len());
                if word_len > 0 {
                    self.pos += word_len;
                } else if let Some(next) = self.rest().chars().next() {
                    self.pos += next.len_utf8();
                }
                self.token(TokenKind::Command, start)
            }
            '\'' => {
                // Primes group up to the quadruple prime.
                let run = self.rest().chars().take_while(|&c| c == '\'').count().min(4);
                self.pos += run;
                self.token(TokenKind::Operator, start)
            }
            _ if ch.is_whitespace() => {
                let ws_len: usize = self
                    .rest()
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .map(char::len_utf8)
                    .sum();
                self.pos += ws_len;
                self.token(TokenKind::Whitespace, start)
            }
            _ if is_digit_char(ch) => {
                self.scan_number();
                self.token(TokenKind::Digit, start)
            }
            _ if is_digit_separator(ch) && self.second_char_is_digit() => {
                self.scan_number();
                self.token(TokenKind::Digit, start)
            }
            _ if ch.is_alphabetic() => {
                self.pos += ch.len_utf8();
                self.token(TokenKind::Letter, start)
            }
            _ => {
                self.pos += ch.len_utf8();
                self.token(TokenKind::Operator, start)
            }
        }
    }

    fn second_char_is_digit(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().is_some_and(is_digit_char)
    }

    /// Consumes a maximal number literal: digit runs joined by medial
    /// decimal separators. A separator is only consumed when a digit
    /// follows, so `12.` lexes as the number `12` and an operator dot.
    fn scan_number(&mut self) {
        loop {
            let mut chars = self.rest().chars();
            match chars.next() {
                Some(c) if is_digit_char(c) => self.pos += c.len_utf8(),
                Some(c) if is_digit_separator(c) && chars.next().is_some_and(is_digit_char) => {
                    self.pos += c.len_utf8();
                }
                _ => break,
            }
        }
    }

    /// Reads raw text up to (and past) the `}` matching an already-consumed
    /// `{`. Backslash-escaped characters never open or close groups;
    /// unescaped braces nest.
    pub fn scan_raw_braced(&mut self) -> Result<(String, SourceLocation), ParseError> {
        self.scan_raw(b'{', b'}', true)
    }

    /// Reads raw text up to (and past) the `]` matching an already-consumed
    /// `[`. Bracket arguments do not nest.
    pub fn scan_raw_bracketed(&mut self) -> Result<(String, SourceLocation), ParseError> {
        self.scan_raw(b'[', b']', false)
    }

    fn scan_raw(
        &mut self,
        open: u8,
        close: u8,
        nested: bool,
    ) -> Result<(String, SourceLocation), ParseError> {
        let start = self.pos;
        let mut depth = 0usize;
        let mut chars = self.input[start..].char_indices();
        while let Some((idx, ch)) = chars.next() {
            match ch {
                '\\' => {
                    chars.next();
                }
                _ if ch as u32 == open as u32 && nested => depth += 1,
                _ if ch as u32 == close as u32 => {
                    if depth == 0 {
                        let end = start + idx;
                        self.pos = end + 1;
                        let loc = SourceLocation::new(Arc::clone(&self.input), start, end);
                        return Ok((self.input[start..end].to_owned(), loc));
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        self.pos = self.input.len();
        let loc = SourceLocation::new(Arc::clone(&self.input), self.input.len(), self.input.len());
        Err(ParseError::with_location(
            ParseErrorKind::UnexpectedEndOfInput,
            &loc,
        ))
    }
}
