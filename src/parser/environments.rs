//! Table environments: `\begin{matrix}`-style blocks and the
//! `\array{...}` shorthand.
//!
//! Each environment name keys a fixed defaults entry (delimiters, row
//! spacing, column alignment). Rows are separated by `\\` and cells by
//! `&`; `\rowopts`/`\cellopts` mutate only the current row or cell and
//! reset at the next boundary, and `\arrayopts` sets table attributes.
//! Attributes land in source order, after the environment defaults.

use crate::lexer::unescape_raw;
use crate::mathml_tree::{MathNode, MathNodeType, MathmlNode};
use crate::parser::{Parser, Stops};
use crate::types::{ParseError, ParseErrorKind, Token, TokenKind};
use phf::phf_map;

/// Per-environment defaults.
pub struct EnvSpec {
    /// Wrapping open/close delimiters; an empty close means open-only
    /// (`cases`).
    pub delimiters: Option<(&'static str, &'static str)>,
    /// Default `mtable` attributes, in emission order.
    pub attributes: &'static [(&'static str, &'static str)],
    /// Whether the environment takes an optional `[c|t|b]` vertical
    /// alignment and a required `{clr}` column spec (`array`).
    pub array_options: bool,
}

/// Environment defaults table.
pub static ENVIRONMENTS: phf::Map<&'static str, EnvSpec> = phf_map! {
    "matrix" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "pmatrix" => EnvSpec {
        delimiters: Some(("(", ")")),
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "bmatrix" => EnvSpec {
        delimiters: Some(("[", "]")),
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "Bmatrix" => EnvSpec {
        delimiters: Some(("{", "}")),
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "vmatrix" => EnvSpec {
        delimiters: Some(("|", "|")),
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "Vmatrix" => EnvSpec {
        delimiters: Some(("\u{2016}", "\u{2016}")),
        attributes: &[("rowspacing", "0.5ex")],
        array_options: false,
    },
    "smallmatrix" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.2ex")],
        array_options: false,
    },
    "cases" => EnvSpec {
        delimiters: Some(("{", "")),
        attributes: &[("rowspacing", "0.5ex"), ("columnalign", "left left")],
        array_options: false,
    },
    "array" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.5ex")],
        array_options: true,
    },
    "aligned" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.5ex"), ("columnalign", "right left")],
        array_options: false,
    },
    "gathered" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.5ex"), ("columnalign", "center")],
        array_options: false,
    },
    "split" => EnvSpec {
        delimiters: None,
        attributes: &[("rowspacing", "0.5ex"), ("columnalign", "right left")],
        array_options: false,
    },
};

/// How the table body ends.
#[derive(Clone, Copy, PartialEq, Eq)]
enum TableEnd {
    /// An `\end{name}` command (left for the caller to consume).
    EndCommand,
    /// The closing brace of `\array{...}` (consumed here).
    CloseBrace,
}

/// Which option macro is being applied, restricting the allowed names.
#[derive(Clone, Copy, PartialEq, Eq)]
enum OptContext {
    Table,
    Row,
    Cell,
}

/// Parses `\begin{name} ... \end{name}` after the `\begin` command token.
pub(crate) fn parse_environment(
    parser: &mut Parser<'_>,
    begin: &Token,
) -> Result<MathmlNode, ParseError> {
    let name_raw = parser.raw_group(begin)?;
    let name = name_raw.trim().to_owned();
    let Some(spec) = ENVIRONMENTS.get(name.as_str()) else {
        return Err(ParseError::with_token(
            ParseErrorKind::NoSuchEnvironment { name },
            begin,
        ));
    };

    let mut table = MathNode::new(MathNodeType::Mtable);
    for &(attr, value) in spec.attributes {
        table.set_attribute(attr, value);
    }
    if spec.array_options {
        if let Some(align) = parser.raw_optional_bracket()? {
            match align.trim() {
                "c" => table.set_attribute("align", "center"),
                "t" => table.set_attribute("align", "axis 1"),
                "b" => table.set_attribute("align", "axis -1"),
                _ => {}
            }
        }
        let colspec = parser.raw_group(begin)?;
        let columnalign = column_alignment(&colspec);
        if !columnalign.is_empty() {
            table.set_attribute("columnalign", columnalign);
        }
    }

    parse_table_body(parser, &mut table, TableEnd::EndCommand)?;

    let end = parser.advance();
    debug_assert_eq!(end.text, r"\end");
    let end_name_raw = parser.raw_group(&end)?;
    let end_name = end_name_raw.trim();
    if end_name != name {
        return Err(ParseError::with_token(
            ParseErrorKind::MismatchedEnvironmentEnd {
                begin: name,
                end: end_name.to_owned(),
            },
            &end,
        ));
    }

    Ok(wrap_in_delimiters(table, spec.delimiters))
}

/// Parses `\array{ [\arrayopts{...}] rows }` after the `\array` token.
pub(crate) fn parse_array_shorthand(
    parser: &mut Parser<'_>,
    array: &Token,
) -> Result<MathmlNode, ParseError> {
    parser.expect_kind(TokenKind::OpenBrace, array)?;
    let mut table = MathNode::new(MathNodeType::Mtable);
    if peek_command(parser, r"\arrayopts") {
        let opts = parser.advance();
        parse_opts(parser, &mut table, OptContext::Table, &opts)?;
    }
    parse_table_body(parser, &mut table, TableEnd::CloseBrace)?;
    Ok(table.into())
}

fn peek_command(parser: &mut Parser<'_>, text: &str) -> bool {
    let token = parser.peek();
    token.kind == TokenKind::Command && token.text == text
}

fn column_alignment(colspec: &str) -> String {
    let words: Vec<&str> = colspec
        .chars()
        .filter_map(|ch| match ch {
            'c' => Some("center"),
            'l' => Some("left"),
            'r' => Some("right"),
            _ => None,
        })
        .collect();
    words.join(" ")
}

fn wrap_in_delimiters(
    table: MathNode,
    delimiters: Option<(&'static str, &'static str)>,
) -> MathmlNode {
    let Some((open, close)) = delimiters else {
        return table.into();
    };
    let mut row = MathNode::new(MathNodeType::Mrow);
    if !open.is_empty() {
        row.add_child(MathNode::with_text(MathNodeType::Mo, open));
    }
    row.add_child(table);
    if !close.is_empty() {
        row.add_child(MathNode::with_text(MathNodeType::Mo, close));
    }
    row.into()
}

fn parse_table_body(
    parser: &mut Parser<'_>,
    table: &mut MathNode,
    end: TableEnd,
) -> Result<(), ParseError> {
    loop {
        let mut row = MathNode::new(MathNodeType::Mtr);
        if peek_command(parser, r"\rowopts") {
            let opts = parser.advance();
            parse_opts(parser, &mut row, OptContext::Row, &opts)?;
        }
        let row_done = loop {
            let mut cell = MathNode::new(MathNodeType::Mtd);
            if peek_command(parser, r"\cellopts") {
                let opts = parser.advance();
                parse_opts(parser, &mut cell, OptContext::Cell, &opts)?;
            }
            cell.children = parser.parse_expression_list(Stops::table())?;
            row.add_child(cell);

            let token = parser.peek();
            match token.kind {
                TokenKind::Operator if token.text == "&" => {
                    parser.advance();
                }
                TokenKind::Command if token.text == r"\\" => {
                    parser.advance();
                    break false;
                }
                TokenKind::Command if token.text == r"\end" && end == TableEnd::EndCommand => {
                    break true;
                }
                TokenKind::CloseBrace if end == TableEnd::CloseBrace => {
                    parser.advance();
                    break true;
                }
                TokenKind::EndOfInput => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedEndOfInput,
                        token,
                    ));
                }
                _ => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedToken {
                            found: token.text.clone(),
                        },
                        token,
                    ));
                }
            }
        };
        table.add_child(row);
        if row_done {
            return Ok(());
        }
    }
}

fn parse_opts(
    parser: &mut Parser<'_>,
    node: &mut MathNode,
    context: OptContext,
    opts_token: &Token,
) -> Result<(), ParseError> {
    parser.expect_kind(TokenKind::OpenBrace, opts_token)?;
    loop {
        let token = parser.peek();
        match token.kind {
            TokenKind::CloseBrace => {
                parser.advance();
                return Ok(());
            }
            TokenKind::Command => {
                let option = parser.advance();
                let raw = parser.raw_group(&option)?;
                let value = unescape_raw(&raw);
                apply_option(node, context, &option, value.trim())?;
            }
            _ => {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedToken {
                        found: token.text.clone(),
                    },
                    token,
                ));
            }
        }
    }
}

fn apply_option(
    node: &mut MathNode,
    context: OptContext,
    option: &Token,
    value: &str,
) -> Result<(), ParseError> {
    let name = option.text.trim_start_matches('\\');
    let attr = match (context, name) {
        (_, "colalign") => "columnalign",
        (_, "rowalign") => "rowalign",
        (OptContext::Cell, "rowspan") => "rowspan",
        (OptContext::Cell, "colspan") => "colspan",
        (OptContext::Table, "align") => "align",
        (OptContext::Table, "equalrows") => "equalrows",
        (OptContext::Table, "equalcols") => "equalcolumns",
        (OptContext::Table, "rowlines") => "rowlines",
        (OptContext::Table, "collines") => "columnlines",
        (OptContext::Table, "frame") => "frame",
        (OptContext::Table, "padding") => {
            node.set_attribute("rowspacing", value);
            node.set_attribute("columnspacing", value);
            return Ok(());
        }
        _ => {
            return Err(ParseError::with_token(
                ParseErrorKind::UnknownTableOption {
                    name: name.to_owned(),
                },
                option,
            ));
        }
    };
    node.set_attribute(attr, value);
    Ok(())
}
