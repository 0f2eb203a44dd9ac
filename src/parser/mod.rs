//! Recursive-descent parser from token stream to MathML tree.
//!
//! The grammar is expression-oriented: closed terms (groups, literals,
//! macros) bind tightest, postfix scripts bind next, and consecutive
//! atoms juxtapose into an `mrow`. A single lookahead token is enough
//! everywhere except the optional bracket arguments (`\sqrt[...]`),
//! which re-enter the full grammar recursively.
//!
//! Command dispatch is table-driven: [`commands::COMMANDS`] maps each
//! macro name to a [`CommandSpec`] variant describing its parse shape,
//! and [`crate::symbols`] supplies the character-producing commands.
//! Error recovery happens at the top level only: in non-throwing mode a
//! failed item becomes an inline `merror` and parsing resumes at the
//! next token.

pub mod commands;
pub mod environments;

use crate::lexer::{Lexer, unescape_raw};
use crate::mathml_tree::{MathNode, MathNodeType, MathmlNode, TextNode};
use crate::symbols::{self, SymbolInfo, TokenClass};
use crate::types::{ParseError, ParseErrorKind, Settings, Token, TokenKind};
use crate::unicode::{Mathvariant, remap_char};
use crate::units::{Length, format_tenths, parse_length};
use crate::utils::collapse_whitespace;
use alloc::sync::Arc;
use commands::CommandSpec;

/// Grammar re-entry bound. Converts runaway nesting (`\sqrt[\sqrt[...`)
/// into a recoverable parse error instead of exhausting the call stack.
const MAX_DEPTH: usize = 512;

/// Tokens that terminate the current expression list, in addition to the
/// always-stopping `}` and end of input.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Stops {
    bracket: bool,
    table: bool,
    right: bool,
}

impl Stops {
    /// Stop at `&`, `\\` and `\end` (table cells).
    pub(crate) const fn table() -> Self {
        Self {
            bracket: false,
            table: true,
            right: false,
        }
    }

    /// Stop at `]` (optional arguments).
    const fn bracket() -> Self {
        Self {
            bracket: true,
            table: false,
            right: false,
        }
    }

    /// Stop at `\right`.
    const fn right() -> Self {
        Self {
            bracket: false,
            table: false,
            right: true,
        }
    }
}

/// The parser: owns its lexer and a single lookahead token.
pub struct Parser<'a> {
    lexer: Lexer,
    settings: &'a Settings,
    next: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &str, settings: &'a Settings) -> Self {
        Self {
            lexer: Lexer::new(Arc::from(source)),
            settings,
            next: None,
            depth: 0,
        }
    }

    fn read_token(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            if token.kind != TokenKind::Whitespace {
                return token;
            }
        }
    }

    /// The current lookahead token, fetching one if necessary.
    pub(crate) fn peek(&mut self) -> &Token {
        let token = match self.next.take() {
            Some(token) => token,
            None => self.read_token(),
        };
        self.next.insert(token)
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> Token {
        match self.next.take() {
            Some(token) => token,
            None => self.read_token(),
        }
    }

    /// Consumes a token of the given kind, or reports a missing argument
    /// for `command`.
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        command: &Token,
    ) -> Result<Token, ParseError> {
        if self.peek().kind == kind {
            return Ok(self.advance());
        }
        Err(ParseError::with_token(
            ParseErrorKind::MissingArgument {
                command: command.text.clone(),
            },
            self.peek(),
        ))
    }

    /// Reads a raw `{...}` argument (escapes intact) for `command`.
    pub(crate) fn raw_group(&mut self, command: &Token) -> Result<String, ParseError> {
        self.expect_kind(TokenKind::OpenBrace, command)?;
        let (raw, _) = self.lexer.scan_raw_braced()?;
        Ok(raw)
    }

    /// Reads a raw `[...]` argument if one follows.
    pub(crate) fn raw_optional_bracket(&mut self) -> Result<Option<String>, ParseError> {
        if self.peek().kind != TokenKind::OpenBracket {
            return Ok(None);
        }
        self.advance();
        let (raw, _) = self.lexer.scan_raw_bracketed()?;
        Ok(Some(raw))
    }

    fn at_stop(&mut self, stops: Stops) -> bool {
        let token = self.peek();
        match token.kind {
            TokenKind::EndOfInput | TokenKind::CloseBrace => true,
            TokenKind::CloseBracket => stops.bracket,
            TokenKind::Operator => stops.table && token.text == "&",
            TokenKind::Command => match token.text.as_str() {
                r"\\" | r"\end" => stops.table,
                r"\right" => stops.right,
                _ => false,
            },
            _ => false,
        }
    }

    /// Parses the whole input. Returns the content node (`None` for empty
    /// input); in non-throwing mode grammar violations become inline
    /// `merror` items and parsing continues.
    pub fn parse_document(&mut self) -> Result<Option<MathmlNode>, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.parse_expression_list_into(&mut items, Stops::default()) {
                Ok(()) => {
                    if self.peek().kind == TokenKind::EndOfInput {
                        break;
                    }
                    let token = self.advance();
                    let err = ParseError::with_token(
                        ParseErrorKind::UnexpectedToken {
                            found: token.text.clone(),
                        },
                        &token,
                    );
                    if self.settings.throw_on_error {
                        return Err(err);
                    }
                    items.push(error_node(&err));
                }
                Err(err) => {
                    if self.settings.throw_on_error {
                        return Err(err);
                    }
                    items.push(error_node(&err));
                    self.depth = 0;
                    if self.peek().kind == TokenKind::EndOfInput {
                        break;
                    }
                }
            }
        }
        Ok(collapse(items))
    }

    /// Parses an expression list into a fresh vector.
    pub(crate) fn parse_expression_list(
        &mut self,
        stops: Stops,
    ) -> Result<Vec<MathmlNode>, ParseError> {
        let mut items = Vec::new();
        self.parse_expression_list_into(&mut items, stops)?;
        Ok(items)
    }

    fn parse_expression_list_into(
        &mut self,
        items: &mut Vec<MathmlNode>,
        stops: Stops,
    ) -> Result<(), ParseError> {
        loop {
            if self.at_stop(stops) {
                return Ok(());
            }
            let special = {
                let token = self.peek();
                if token.kind == TokenKind::Command {
                    commands::lookup(&token.text).copied()
                } else {
                    None
                }
            };
            match special {
                Some(CommandSpec::Infix {
                    line_thickness,
                    delimiters,
                }) => {
                    self.advance();
                    let numerator = collapse_or_empty_row(core::mem::take(items));
                    let denominator = collapse_or_empty_row(self.parse_expression_list(stops)?);
                    items.push(make_fraction(
                        numerator,
                        denominator,
                        line_thickness,
                        delimiters,
                        false,
                    ));
                    return Ok(());
                }
                Some(CommandSpec::Scoped { name, value }) => {
                    self.advance();
                    let rest = self.parse_expression_list(stops)?;
                    let mut style = MathNode::with_children(MathNodeType::Mstyle, rest);
                    style.set_attribute(name, value);
                    items.push(style.into());
                    return Ok(());
                }
                Some(spec @ (CommandSpec::Color | CommandSpec::BgColor)) => {
                    let token = self.advance();
                    let raw = self.raw_group(&token)?;
                    let value = unescape_raw(&raw);
                    let attr = if matches!(spec, CommandSpec::Color) {
                        "mathcolor"
                    } else {
                        "mathbackground"
                    };
                    let rest = self.parse_expression_list(stops)?;
                    let mut style = MathNode::with_children(MathNodeType::Mstyle, rest);
                    style.set_attribute(attr, value.trim());
                    items.push(style.into());
                    return Ok(());
                }
                _ => {}
            }
            let node = self.parse_scripted()?;
            items.push(node);
        }
    }

    /// Parses a closed term with its postfix scripts, normalizing
    /// `a_b^c` and `a^c_b` to the same combined node.
    fn parse_scripted(&mut self) -> Result<MathmlNode, ParseError> {
        let base = self.parse_closed_term()?;
        let mut sub: Option<MathmlNode> = None;
        let mut sup: Option<MathmlNode> = None;
        loop {
            match self.peek().kind {
                TokenKind::Subscript => {
                    if sub.is_some() {
                        let token = self.advance();
                        return Err(ParseError::with_token(
                            ParseErrorKind::DoubleSubscript,
                            &token,
                        ));
                    }
                    self.advance();
                    sub = Some(self.parse_script_argument()?);
                }
                TokenKind::Superscript => {
                    if sup.is_some() {
                        let token = self.advance();
                        return Err(ParseError::with_token(
                            ParseErrorKind::DoubleSuperscript,
                            &token,
                        ));
                    }
                    self.advance();
                    sup = Some(self.parse_script_argument()?);
                }
                _ => break,
            }
        }
        Ok(match (sub, sup) {
            (None, None) => base,
            (Some(sub), None) => {
                MathNode::with_children(MathNodeType::Msub, vec![base, sub]).into()
            }
            (None, Some(sup)) => {
                MathNode::with_children(MathNodeType::Msup, vec![base, sup]).into()
            }
            (Some(sub), Some(sup)) => {
                MathNode::with_children(MathNodeType::Msubsup, vec![base, sub, sup]).into()
            }
        })
    }

    /// A script slot: an empty slot (`a_^f`) becomes an explicit `none`
    /// placeholder so multiscript alignment survives.
    fn parse_script_argument(&mut self) -> Result<MathmlNode, ParseError> {
        if matches!(
            self.peek().kind,
            TokenKind::Subscript | TokenKind::Superscript
        ) {
            return Ok(none_node());
        }
        self.parse_closed_term()
    }

    fn parse_closed_term(&mut self) -> Result<MathmlNode, ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            self.depth -= 1;
            return Err(ParseError::with_token(
                ParseErrorKind::NestingLimitExceeded,
                self.peek(),
            ));
        }
        let result = self.closed_term_inner();
        self.depth -= 1;
        result
    }

    fn closed_term_inner(&mut self) -> Result<MathmlNode, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::EndOfInput => Err(ParseError::with_token(
                ParseErrorKind::UnexpectedEndOfInput,
                &token,
            )),
            TokenKind::OpenBrace => {
                let items = self.parse_expression_list(Stops::default())?;
                if self.peek().kind != TokenKind::CloseBrace {
                    return Err(ParseError::with_token(
                        ParseErrorKind::ExpectedToken {
                            expected: "}".to_owned(),
                            found: self.peek().text.clone(),
                        },
                        self.peek(),
                    ));
                }
                self.advance();
                Ok(collapse_or_empty_row(items))
            }
            TokenKind::CloseBrace | TokenKind::Subscript | TokenKind::Superscript => {
                Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedToken {
                        found: token.text.clone(),
                    },
                    &token,
                ))
            }
            TokenKind::OpenBracket | TokenKind::CloseBracket => Ok(char_leaf(&token)),
            TokenKind::Digit => Ok(MathNode::with_text(MathNodeType::Mn, token.text).into()),
            TokenKind::Letter => Ok(self.letter_leaf(token)),
            TokenKind::Whitespace => self.closed_term_inner(),
            TokenKind::Operator => {
                if token.text == "&" {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedToken {
                            found: token.text.clone(),
                        },
                        &token,
                    ));
                }
                if let Some(info) = symbols::lookup(&token.text) {
                    return Ok(symbol_leaf(info));
                }
                Ok(char_leaf(&token))
            }
            TokenKind::Command => {
                if matches!(
                    token.text.as_str(),
                    r"\\" | r"\end"
                        | r"\right"
                        | r"\endtoggle"
                        | r"\rowopts"
                        | r"\cellopts"
                        | r"\arrayopts"
                ) {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedToken {
                            found: token.text.clone(),
                        },
                        &token,
                    ));
                }
                if let Some(spec) = commands::lookup(&token.text) {
                    return self.parse_command(&token, *spec);
                }
                if let Some(info) = symbols::lookup(&token.text) {
                    return Ok(symbol_leaf(info));
                }
                Err(ParseError::with_token(
                    ParseErrorKind::UnknownCommand {
                        name: token.text.clone(),
                    },
                    &token,
                ))
            }
        }
    }

    /// A letter atom. In itex identifier mode adjacent letters merge into
    /// one multi-character identifier; whitespace or any other token
    /// breaks the run.
    fn letter_leaf(&mut self, token: Token) -> MathmlNode {
        let mut text = token.text.clone();
        let mut last = token;
        while self.settings.itex_identifier_mode {
            let adjacent = {
                let next = self.peek();
                next.kind == TokenKind::Letter && last.adjacent_to(next)
            };
            if !adjacent {
                break;
            }
            let next = self.advance();
            text.push_str(&next.text);
            last = next;
        }
        MathNode::with_text(MathNodeType::Mi, text).into()
    }

    fn parse_optional_argument(&mut self) -> Result<Option<MathmlNode>, ParseError> {
        if self.peek().kind != TokenKind::OpenBracket {
            return Ok(None);
        }
        self.advance();
        let items = self.parse_expression_list(Stops::bracket())?;
        if self.peek().kind != TokenKind::CloseBracket {
            return Err(ParseError::with_token(
                ParseErrorKind::ExpectedToken {
                    expected: "]".to_owned(),
                    found: self.peek().text.clone(),
                },
                self.peek(),
            ));
        }
        self.advance();
        Ok(collapse(items))
    }

    /// Script pairs for `\tensor`/`\multiscripts`: a flattened
    /// (subscript, superscript) sequence with `none` placeholders filling
    /// empty slots.
    fn parse_script_pairs(&mut self) -> Result<Vec<MathmlNode>, ParseError> {
        let mut out = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Subscript => {
                    self.advance();
                    let sub = if self.peek().kind == TokenKind::Superscript {
                        none_node()
                    } else {
                        self.parse_closed_term()?
                    };
                    let sup = if self.peek().kind == TokenKind::Superscript {
                        self.advance();
                        self.parse_closed_term()?
                    } else {
                        none_node()
                    };
                    out.push(sub);
                    out.push(sup);
                }
                TokenKind::Superscript => {
                    self.advance();
                    let sup = self.parse_closed_term()?;
                    out.push(none_node());
                    out.push(sup);
                }
                _ => return Ok(out),
            }
        }
    }

    fn parse_toggle(&mut self, shorthand_allowed: bool) -> Result<MathmlNode, ParseError> {
        let mut children = Vec::new();
        loop {
            let (kind, is_end) = {
                let token = self.peek();
                (token.kind, token.kind == TokenKind::Command && token.text == r"\endtoggle")
            };
            if is_end {
                self.advance();
                let mut action = MathNode::with_children(MathNodeType::Maction, children);
                action.set_attribute("actiontype", "toggle");
                return Ok(action.into());
            }
            if matches!(kind, TokenKind::EndOfInput | TokenKind::CloseBrace) {
                if shorthand_allowed && children.len() == 2 {
                    let mut action = MathNode::with_children(MathNodeType::Maction, children);
                    action.set_attribute("actiontype", "toggle");
                    action.set_attribute("selection", "2");
                    return Ok(action.into());
                }
                return Err(ParseError::with_token(
                    ParseErrorKind::MissingEndToggle,
                    self.peek(),
                ));
            }
            children.push(self.parse_scripted()?);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn parse_command(
        &mut self,
        token: &Token,
        spec: CommandSpec,
    ) -> Result<MathmlNode, ParseError> {
        match spec {
            CommandSpec::Fraction {
                line_thickness,
                delimiters,
                script_style,
            } => {
                let numerator = self.parse_closed_term()?;
                let denominator = self.parse_closed_term()?;
                Ok(make_fraction(
                    numerator,
                    denominator,
                    line_thickness,
                    delimiters,
                    script_style,
                ))
            }
            CommandSpec::Sqrt => {
                let index = self.parse_optional_argument()?;
                let base = self.parse_closed_term()?;
                Ok(match index {
                    Some(index) => {
                        MathNode::with_children(MathNodeType::Mroot, vec![base, index]).into()
                    }
                    None => MathNode::with_children(MathNodeType::Msqrt, vec![base]).into(),
                })
            }
            CommandSpec::Root => {
                let index = self.parse_closed_term()?;
                let base = self.parse_closed_term()?;
                Ok(MathNode::with_children(MathNodeType::Mroot, vec![base, index]).into())
            }
            CommandSpec::Variant(variant) => {
                let argument = self.parse_closed_term()?;
                Ok(apply_variant(argument, variant))
            }
            CommandSpec::Element(node_type) => {
                let raw = self.raw_group(token)?;
                let text = collapse_whitespace(&unescape_raw(&raw));
                Ok(MathNode::with_text(node_type, text).into())
            }
            CommandSpec::StringLiteral => {
                let lquote = self.raw_optional_bracket()?;
                let rquote = self.raw_optional_bracket()?;
                let raw = self.raw_group(token)?;
                let mut node = MathNode::with_text(MathNodeType::Ms, unescape_raw(&raw));
                if let Some(lquote) = lquote {
                    node.set_attribute("lquote", unescape_raw(&lquote));
                }
                if let Some(rquote) = rquote {
                    node.set_attribute("rquote", unescape_raw(&rquote));
                }
                Ok(node.into())
            }
            CommandSpec::Space { width } => {
                let length = parse_length(width).unwrap_or_else(Length::zero);
                let node = MathNode::new(MathNodeType::Mspace)
                    .with_attribute("width", length.format());
                Ok(node.into())
            }
            CommandSpec::SpaceHDW => {
                let height = self.raw_integer_group(token)?;
                let depth = self.raw_integer_group(token)?;
                let width = self.raw_integer_group(token)?;
                let node = MathNode::new(MathNodeType::Mspace)
                    .with_attribute("height", format_tenths(height) + "ex")
                    .with_attribute("depth", format_tenths(depth) + "ex")
                    .with_attribute("width", format_tenths(width) + "em");
                Ok(node.into())
            }
            CommandSpec::Phantom => {
                let argument = self.parse_closed_term()?;
                Ok(MathNode::with_children(MathNodeType::Mphantom, vec![argument]).into())
            }
            CommandSpec::Lap { lspace } => {
                let argument = self.parse_closed_term()?;
                let mut node = MathNode::with_children(MathNodeType::Mpadded, vec![argument]);
                node.set_attribute("width", "0em");
                if let Some(lspace) = lspace {
                    node.set_attribute("lspace", lspace);
                }
                Ok(node.into())
            }
            CommandSpec::RaiseBox => self.parse_raisebox(token),
            CommandSpec::Enclose { notation } => {
                let notation = match notation {
                    Some(fixed) => fixed.to_owned(),
                    None => {
                        let raw = self.raw_group(token)?;
                        unescape_raw(&raw).trim().to_owned()
                    }
                };
                let argument = self.parse_closed_term()?;
                let mut node = MathNode::with_children(MathNodeType::Menclose, vec![argument]);
                node.set_attribute("notation", notation);
                Ok(node.into())
            }
            CommandSpec::Href => {
                let raw = self.raw_group(token)?;
                let url = unescape_raw(&raw);
                let body = self.parse_closed_term()?;
                let mut row = match body {
                    MathmlNode::Element(el) if el.node_type == MathNodeType::Mrow => el,
                    other => MathNode::with_children(MathNodeType::Mrow, vec![other]),
                };
                if !self.settings.safe_mode {
                    row.set_attribute("href", url);
                }
                Ok(row.into())
            }
            CommandSpec::Action { action_type } => {
                let raw = self.raw_group(token)?;
                let text = collapse_whitespace(&unescape_raw(&raw));
                let body = self.parse_closed_term()?;
                let mut action = MathNode::with_children(
                    MathNodeType::Maction,
                    vec![body, MathNode::with_text(MathNodeType::Mtext, text).into()],
                );
                action.set_attribute("actiontype", action_type);
                Ok(action.into())
            }
            CommandSpec::Toggle => self.parse_toggle(true),
            CommandSpec::BeginToggle => self.parse_toggle(false),
            CommandSpec::Tensor => {
                let base = self.parse_closed_term()?;
                let scripts = if self.peek().kind == TokenKind::OpenBrace {
                    self.advance();
                    let scripts = self.parse_script_pairs()?;
                    self.expect_kind(TokenKind::CloseBrace, token)?;
                    scripts
                } else {
                    self.parse_script_pairs()?
                };
                let mut children = vec![base];
                children.extend(scripts);
                Ok(MathNode::with_children(MathNodeType::Mmultiscripts, children).into())
            }
            CommandSpec::Multiscripts => {
                self.expect_kind(TokenKind::OpenBrace, token)?;
                let prescripts = self.parse_script_pairs()?;
                self.expect_kind(TokenKind::CloseBrace, token)?;
                let base = self.parse_closed_term()?;
                self.expect_kind(TokenKind::OpenBrace, token)?;
                let postscripts = self.parse_script_pairs()?;
                self.expect_kind(TokenKind::CloseBrace, token)?;
                let mut children = vec![base];
                children.extend(postscripts);
                if !prescripts.is_empty() {
                    children.push(MathNode::new(MathNodeType::Mprescripts).into());
                    children.extend(prescripts);
                }
                Ok(MathNode::with_children(MathNodeType::Mmultiscripts, children).into())
            }
            CommandSpec::Accent { text, over, accent } => {
                let base = self.parse_closed_term()?;
                let mark: MathmlNode = MathNode::with_text(MathNodeType::Mo, text).into();
                let node_type = if over {
                    MathNodeType::Mover
                } else {
                    MathNodeType::Munder
                };
                let mut node = MathNode::with_children(node_type, vec![base, mark]);
                if accent {
                    node.set_attribute("accent", "true");
                }
                Ok(node.into())
            }
            CommandSpec::UnderOverSet { over } => {
                let script = self.parse_closed_term()?;
                let base = self.parse_closed_term()?;
                let node_type = if over {
                    MathNodeType::Mover
                } else {
                    MathNodeType::Munder
                };
                Ok(MathNode::with_children(node_type, vec![base, script]).into())
            }
            CommandSpec::XArrow { text } => {
                let under = self.parse_optional_argument()?;
                let over = self.parse_closed_term()?;
                let arrow: MathmlNode = MathNode::with_text(MathNodeType::Mo, text).into();
                let over = (!is_empty_row(&over)).then_some(over);
                Ok(match (under, over) {
                    (None, Some(over)) => {
                        MathNode::with_children(MathNodeType::Mover, vec![arrow, over]).into()
                    }
                    (Some(under), None) => {
                        MathNode::with_children(MathNodeType::Munder, vec![arrow, under]).into()
                    }
                    (Some(under), Some(over)) => MathNode::with_children(
                        MathNodeType::Munderover,
                        vec![arrow, under, over],
                    )
                    .into(),
                    (None, None) => arrow,
                })
            }
            CommandSpec::Big { size } => {
                let delimiter = self.advance();
                let Some(text) = resolve_delimiter(&delimiter, false)? else {
                    unreachable!("null delimiters are rejected for \\big");
                };
                let node = MathNode::with_text(MathNodeType::Mo, text)
                    .with_attribute("maxsize", size)
                    .with_attribute("minsize", size);
                Ok(node.into())
            }
            CommandSpec::Left => {
                let open_token = self.advance();
                let open = resolve_delimiter(&open_token, true)?;
                let items = self.parse_expression_list(Stops::right())?;
                if !(self.peek().kind == TokenKind::Command && self.peek().text == r"\right") {
                    return Err(ParseError::with_token(
                        ParseErrorKind::ExpectedToken {
                            expected: r"\right".to_owned(),
                            found: self.peek().text.clone(),
                        },
                        self.peek(),
                    ));
                }
                self.advance();
                let close_token = self.advance();
                let close = resolve_delimiter(&close_token, true)?;
                let mut row = MathNode::new(MathNodeType::Mrow);
                if let Some(open) = open {
                    row.add_child(MathNode::with_text(MathNodeType::Mo, open));
                }
                for item in items {
                    row.add_child(item);
                }
                if let Some(close) = close {
                    row.add_child(MathNode::with_text(MathNodeType::Mo, close));
                }
                Ok(row.into())
            }
            CommandSpec::Begin => environments::parse_environment(self, token),
            CommandSpec::ArrayShorthand => environments::parse_array_shorthand(self, token),
            CommandSpec::Infix { .. }
            | CommandSpec::Scoped { .. }
            | CommandSpec::Color
            | CommandSpec::BgColor => Err(ParseError::with_token(
                ParseErrorKind::UnexpectedToken {
                    found: token.text.clone(),
                },
                token,
            )),
        }
    }

    fn raw_integer_group(&mut self, command: &Token) -> Result<i64, ParseError> {
        let raw = self.raw_group(command)?;
        Ok(raw.trim().parse().unwrap_or(0))
    }

    /// `\mathraisebox{lift}[height][depth]`. An unparseable lift falls
    /// back to an explicit zero offset rather than an error.
    fn parse_raisebox(&mut self, token: &Token) -> Result<MathmlNode, ParseError> {
        let raw = self.raw_group(token)?;
        let lift = parse_length(raw.trim()).unwrap_or_else(Length::zero);
        let height = self.raw_optional_bracket()?;
        let depth = self.raw_optional_bracket()?;
        let body = self.parse_closed_term()?;

        let format_arg = |raw: &str| {
            parse_length(raw.trim())
                .unwrap_or_else(Length::zero)
                .format()
        };
        let raised = format!("+{}", lift.abs().format());

        let mut node = MathNode::with_children(MathNodeType::Mpadded, vec![body]);
        node.set_attribute("voffset", lift.format());
        match (height, depth) {
            (None, None) => {
                if lift.is_negative() {
                    node.set_attribute("height", "0pt");
                    node.set_attribute("depth", raised);
                } else {
                    node.set_attribute("height", raised);
                }
            }
            (Some(height), depth) => {
                node.set_attribute("height", format_arg(&height));
                let depth_value = match depth {
                    Some(depth) => format_arg(&depth),
                    None if lift.is_negative() => raised,
                    None => "0pt".to_owned(),
                };
                node.set_attribute("depth", depth_value);
            }
            (None, Some(_)) => unreachable!("bracket arguments are positional"),
        }
        Ok(node.into())
    }
}

/// Resolves a delimiter token (`(`, `\{`, `\langle`, ...) to its
/// character; `.` is the null delimiter after `\left`/`\right`.
fn resolve_delimiter(token: &Token, allow_null: bool) -> Result<Option<String>, ParseError> {
    match token.kind {
        TokenKind::Operator if allow_null && token.text == "." => Ok(None),
        TokenKind::Operator | TokenKind::OpenBracket | TokenKind::CloseBracket => {
            Ok(Some(token.text.clone()))
        }
        TokenKind::Command => symbols::lookup(&token.text)
            .map(|info| Some(info.text.to_owned()))
            .ok_or_else(|| {
                ParseError::with_token(
                    ParseErrorKind::ExpectedDelimiter {
                        found: token.text.clone(),
                    },
                    token,
                )
            }),
        _ => Err(ParseError::with_token(
            ParseErrorKind::ExpectedDelimiter {
                found: token.text.clone(),
            },
            token,
        )),
    }
}

fn collapse(items: Vec<MathmlNode>) -> Option<MathmlNode> {
    let mut items = items;
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(MathNode::with_children(MathNodeType::Mrow, items).into()),
    }
}

fn collapse_or_empty_row(items: Vec<MathmlNode>) -> MathmlNode {
    collapse(items).unwrap_or_else(|| MathNode::new(MathNodeType::Mrow).into())
}

fn none_node() -> MathmlNode {
    MathNode::new(MathNodeType::None).into()
}

fn is_empty_row(node: &MathmlNode) -> bool {
    matches!(
        node,
        MathmlNode::Element(el)
            if el.node_type == MathNodeType::Mrow
                && el.children.is_empty()
                && el.attributes.is_empty()
    )
}

/// Builds the inline error marker used in non-throwing mode.
pub(crate) fn error_node(err: &ParseError) -> MathmlNode {
    MathNode::with_children(
        MathNodeType::Merror,
        vec![MathNode::with_text(MathNodeType::Mtext, err.to_string()).into()],
    )
    .into()
}

fn symbol_leaf(info: &SymbolInfo) -> MathmlNode {
    let node_type = match info.class {
        TokenClass::Identifier => MathNodeType::Mi,
        TokenClass::Operator => MathNodeType::Mo,
        TokenClass::Number => MathNodeType::Mn,
    };
    let mut node = MathNode::with_text(node_type, info.text);
    for &(name, value) in info.attrs {
        node.set_attribute(name, value);
    }
    node.into()
}

/// A bare-character leaf: symbol-table overrides first, then Unicode
/// classification.
fn char_leaf(token: &Token) -> MathmlNode {
    let first = token.text.chars().next().unwrap_or(' ');
    let class = symbols::char_class_override(first).unwrap_or(TokenClass::Operator);
    let node_type = match class {
        TokenClass::Identifier => MathNodeType::Mi,
        TokenClass::Operator => MathNodeType::Mo,
        TokenClass::Number => MathNodeType::Mn,
    };
    let mut node = MathNode::with_text(node_type, token.text.clone());
    for &(name, value) in symbols::char_attributes(first) {
        node.set_attribute(name, value);
    }
    node.into()
}

fn make_fraction(
    numerator: MathmlNode,
    denominator: MathmlNode,
    line_thickness: Option<&'static str>,
    delimiters: Option<(&'static str, &'static str)>,
    script_style: bool,
) -> MathmlNode {
    let mut fraction =
        MathNode::with_children(MathNodeType::Mfrac, vec![numerator, denominator]);
    if let Some(thickness) = line_thickness {
        fraction.set_attribute("linethickness", thickness);
    }
    let mut node: MathmlNode = fraction.into();
    if let Some((open, close)) = delimiters {
        node = MathNode::with_children(
            MathNodeType::Mrow,
            vec![
                MathNode::with_text(MathNodeType::Mo, open).into(),
                node,
                MathNode::with_text(MathNodeType::Mo, close).into(),
            ],
        )
        .into();
    }
    if script_style {
        node = MathNode::with_children(MathNodeType::Mstyle, vec![node])
            .with_attribute("displaystyle", "false")
            .into();
    }
    node
}

/// Applies a mathvariant macro: single-character token content is
/// remapped through the Unicode alphabets in place; families without a
/// replacement glyph set the `mathvariant` attribute; composite content
/// wraps in an `mstyle`.
fn apply_variant(node: MathmlNode, variant: Mathvariant) -> MathmlNode {
    if let MathmlNode::Element(mut el) = node {
        if let Some(ch) = el.single_char() {
            if let Some(mapped) = remap_char(ch, variant) {
                el.children = vec![
                    TextNode {
                        text: mapped.to_string(),
                    }
                    .into(),
                ];
                return el.into();
            }
            el.set_attribute("mathvariant", variant.as_attr());
            return el.into();
        }
        return MathNode::with_children(MathNodeType::Mstyle, vec![el.into()])
            .with_attribute("mathvariant", variant.as_attr())
            .into();
    }
    MathNode::with_children(MathNodeType::Mstyle, vec![node])
        .with_attribute("mathvariant", variant.as_attr())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> MathmlNode {
        let settings = Settings::default();
        let mut parser = Parser::new(source, &settings);
        parser.parse_document().unwrap().unwrap()
    }

    #[test]
    fn juxtaposition_builds_a_row() {
        assert_eq!(
            parse_one("xyz").to_string(),
            "<mrow><mi>x</mi><mi>y</mi><mi>z</mi></mrow>"
        );
    }

    #[test]
    fn redundant_groups_collapse() {
        assert_eq!(parse_one("{{{x}}}").to_string(), "<mi>x</mi>");
        assert_eq!(parse_one("{}").to_string(), "<mrow/>");
    }

    #[test]
    fn scripts_normalize_order() {
        assert_eq!(
            parse_one("a_b^c").to_string(),
            parse_one("a^c_b").to_string()
        );
        assert_eq!(
            parse_one("a_b^c").to_string(),
            "<msubsup><mi>a</mi><mi>b</mi><mi>c</mi></msubsup>"
        );
    }

    #[test]
    fn double_subscript_is_an_error() {
        let settings = Settings::builder().throw_on_error(true).build();
        let mut parser = Parser::new("a_b_c", &settings);
        let err = parser.parse_document().unwrap_err();
        assert!(err.to_string().contains("Double subscript"));
    }

    #[test]
    fn empty_script_slot_gets_a_placeholder() {
        assert_eq!(
            parse_one("a_^f").to_string(),
            "<msubsup><mi>a</mi><none/><mi>f</mi></msubsup>"
        );
    }

    #[test]
    fn identifier_mode_merges_adjacent_letters() {
        let settings = Settings::builder().itex_identifier_mode(true).build();
        let mut parser = Parser::new("xyz x", &settings);
        let node = parser.parse_document().unwrap().unwrap();
        assert_eq!(
            node.to_string(),
            "<mrow><mi>xyz</mi><mi>x</mi></mrow>"
        );
    }

    #[test]
    fn infix_over_splits_the_list() {
        assert_eq!(
            parse_one(r"a \over b").to_string(),
            "<mfrac><mi>a</mi><mi>b</mi></mfrac>"
        );
        assert_eq!(
            parse_one(r"1 \atop 2").to_string(),
            "<mfrac linethickness=\"0\"><mn>1</mn><mn>2</mn></mfrac>"
        );
    }

    #[test]
    fn color_scopes_to_rest_of_group() {
        assert_eq!(
            parse_one(r"a {\color{red} b c} d").to_string(),
            "<mrow><mi>a</mi><mstyle mathcolor=\"red\"><mi>b</mi><mi>c</mi></mstyle><mi>d</mi></mrow>"
        );
    }

    #[test]
    fn nesting_limit_is_a_recoverable_error() {
        let source = format!("{}x{}", "{".repeat(MAX_DEPTH + 8), "}".repeat(MAX_DEPTH + 8));
        let settings = Settings::builder().throw_on_error(true).build();
        let mut parser = Parser::new(&source, &settings);
        let err = parser.parse_document().unwrap_err();
        assert!(err.to_string().contains("Too much nesting"));
    }
}
