//! Translation engine for the iTeX math dialect.
//!
//! iTeX is a TeX/LaTeX-derived markup language extended with
//! MathML-oriented macros (`\mtext`, `\tensor`, `\arrayopts`, ...). This
//! crate translates iTeX source into standards-compliant MathML markup
//! and back: every produced document embeds an escaped copy of the
//! original source in an `annotation encoding="TeX"` element, so
//! [`get_tex_source`] recovers the input losslessly.
//!
//! # Examples
//!
//! ```rust
//! use itex_mathml::{Settings, get_tex_source, parse, to_mathml_string};
//!
//! let settings = Settings::default();
//! let mathml = to_mathml_string(r"\sqrt[3]x", &settings)?;
//! assert!(mathml.contains("<mroot><mi>x</mi><mn>3</mn></mroot>"));
//!
//! let document = parse(r"a_b^c", &settings)?;
//! assert_eq!(get_tex_source(&document).unwrap(), "a_b^c");
//! # Ok::<(), itex_mathml::ParseError>(())
//! ```
//!
//! Malformed input never crashes the pipeline: by default it renders as
//! an inline `merror` marker alongside everything that did parse. Set
//! [`Settings::throw_on_error`] to abort instead.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::needless_raw_strings)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::float_cmp)]

extern crate alloc;

pub mod core;
pub mod extract;
pub mod filter;
pub mod lexer;
pub mod mathml_tree;
pub mod parser;
pub mod symbols;
pub mod types;
pub mod unicode;
pub mod units;
pub mod utils;

pub use crate::core::{
    default_settings, parse, set_itex_identifier_mode, set_safe_mode, to_mathml_string,
    to_mathml_string_with,
};
pub use crate::extract::{get_tex_source, get_tex_source_from_markup};
pub use crate::filter::filter_string;
pub use crate::mathml_tree::{MathDocument, MathNode, MathNodeType, MathmlNode};
pub use crate::types::{ExtractError, ParseError, ParseErrorKind, Settings};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
