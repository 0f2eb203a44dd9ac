//! Pipeline entry points and process-wide configuration.
//!
//! `parse` runs the full pipeline (lexer → parser → tree builder) and
//! returns the immutable [`MathDocument`]; `to_mathml_string` serializes
//! it. The process-wide default [`Settings`] instance backs the
//! convenience setters; mutating it while another thread parses with the
//! defaults is a caller error (thread explicit `Settings` through
//! [`parse`] for per-call isolation).

use crate::mathml_tree::{MATHML_NS, MathDocument, MathNode, MathNodeType, MathmlNode};
use crate::parser::Parser;
use crate::types::{ParseError, Settings};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static DEFAULT_SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

/// A snapshot of the process-wide default settings.
#[must_use]
pub fn default_settings() -> Settings {
    DEFAULT_SETTINGS.read().clone()
}

/// Toggles safe mode on the process-wide defaults: URI-carrying
/// attributes (`\href`) are dropped while keeping their content.
pub fn set_safe_mode(enabled: bool) {
    DEFAULT_SETTINGS.write().safe_mode = enabled;
}

/// Toggles the identifier-grouping mode on the process-wide defaults:
/// adjacent letters merge into one multi-character identifier.
pub fn set_itex_identifier_mode(enabled: bool) {
    DEFAULT_SETTINGS.write().itex_identifier_mode = enabled;
}

/// Parses iTeX source into a MathML document.
///
/// With `throw_on_error` unset (the default), malformed input never
/// fails: grammar violations render as inline `merror` markers and the
/// rest of the input still translates. With it set, the first violation
/// aborts with a [`ParseError`] carrying the offending line.
pub fn parse(source: &str, settings: &Settings) -> Result<MathDocument, ParseError> {
    let content = Parser::new(source, settings).parse_document()?;
    Ok(build_document(content, source, settings))
}

/// Parses iTeX source and serializes the result.
///
/// # Examples
///
/// ```rust
/// use itex_mathml::{Settings, to_mathml_string};
///
/// let settings = Settings::default();
/// let mathml = to_mathml_string(r"\frac x y", &settings).unwrap();
/// assert!(mathml.contains("<mfrac><mi>x</mi><mi>y</mi></mfrac>"));
/// ```
pub fn to_mathml_string(source: &str, settings: &Settings) -> Result<String, ParseError> {
    Ok(parse(source, settings)?.to_string())
}

/// Positional-option variant of [`to_mathml_string`]. The remaining
/// flags come from the process-wide defaults.
pub fn to_mathml_string_with(
    source: &str,
    display: bool,
    right_to_left: bool,
    throw_on_error: bool,
) -> Result<String, ParseError> {
    let mut settings = default_settings();
    settings.display = display;
    settings.right_to_left = right_to_left;
    settings.throw_on_error = throw_on_error;
    to_mathml_string(source, &settings)
}

/// Wraps parsed content in the `math`/`semantics`/`annotation` shell.
///
/// `display="block"` is emitted only in display mode (omitted when
/// inline, never `"false"`); `dir="rtl"` only in right-to-left mode. The
/// annotation carries the byte-exact original source.
fn build_document(
    content: Option<MathmlNode>,
    source: &str,
    settings: &Settings,
) -> MathDocument {
    let mut math = MathNode::new(MathNodeType::Math);
    math.set_attribute("xmlns", MATHML_NS);
    if settings.display {
        math.set_attribute("display", "block");
    }
    if settings.right_to_left {
        math.set_attribute("dir", "rtl");
    }

    let content = content.unwrap_or_else(|| MathNode::new(MathNodeType::Mrow).into());
    let annotation =
        MathNode::with_text(MathNodeType::Annotation, source).with_attribute("encoding", "TeX");
    math.add_child(MathNode::with_children(
        MathNodeType::Semantics,
        vec![content, annotation.into()],
    ));
    MathDocument::from_root(math)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_the_empty_shell() {
        let settings = Settings::default();
        assert_eq!(
            to_mathml_string("", &settings).unwrap(),
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"><semantics><mrow/>\
             <annotation encoding=\"TeX\"></annotation></semantics></math>"
        );
    }

    #[test]
    fn display_and_direction_attributes() {
        let settings = Settings::builder().display(true).right_to_left(true).build();
        let mathml = to_mathml_string("x", &settings).unwrap();
        assert!(mathml.starts_with(
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\" display=\"block\" dir=\"rtl\">"
        ));

        let inline = to_mathml_string("x", &Settings::default()).unwrap();
        assert!(!inline.contains("display="));
        assert!(!inline.contains("dir="));
    }

    #[test]
    fn error_policy() {
        let lenient = Settings::default();
        let output = to_mathml_string(r"\frac", &lenient).unwrap();
        assert!(output.contains("<merror>"));
        assert!(output.contains("Parse error on line 1"));

        let strict = Settings::builder().throw_on_error(true).build();
        let err = to_mathml_string(r"\frac", &strict).unwrap_err();
        assert!(err.to_string().contains("Parse error on line 1"));
    }

    #[test]
    fn default_settings_round_trip_through_setters() {
        set_safe_mode(true);
        assert!(default_settings().safe_mode);
        set_safe_mode(false);
        assert!(!default_settings().safe_mode);
    }
}
