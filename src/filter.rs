//! Delimiter filtering over free text.
//!
//! Scans for `$...$`, `$$...$$`, `\[...\]` and `\(...\)` pairs and
//! replaces each with its MathML translation (double-dollar and square
//! brackets select display mode). Escaped dollars pass through as a
//! literal `$`, a double backslash passes through untouched (so `\\[`
//! never opens display math), and unmatched delimiters are left alone.

use crate::core::to_mathml_string;
use crate::types::Settings;

/// Replaces every delimited math fragment in `text` with its MathML
/// translation. Translation never fails: the fragments are rendered in
/// non-throwing mode, so malformed math becomes an inline error marker.
#[must_use]
pub fn filter_string(text: &str, settings: &Settings) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(pos) = rest.find(['$', '\\']) else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..pos]);
        let after = &rest[pos..];

        if let Some(tail) = after.strip_prefix("\\$") {
            out.push('$');
            rest = tail;
        } else if let Some(tail) = after.strip_prefix("\\\\") {
            out.push_str("\\\\");
            rest = tail;
        } else if let Some(tail) = after.strip_prefix("\\[") {
            rest = convert_to(&mut out, tail, "\\]", "\\[", true, settings);
        } else if let Some(tail) = after.strip_prefix("\\(") {
            rest = convert_to(&mut out, tail, "\\)", "\\(", false, settings);
        } else if let Some(tail) = after.strip_prefix("$$") {
            rest = convert_to(&mut out, tail, "$$", "$$", true, settings);
        } else if let Some(tail) = after.strip_prefix('$') {
            match find_unescaped_dollar(tail) {
                Some(end) => {
                    out.push_str(&convert(&tail[..end], false, settings));
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('$');
                    rest = tail;
                }
            }
        } else {
            out.push('\\');
            rest = &after[1..];
        }
    }
}

/// Converts the fragment up to `close`, or passes `opener` through
/// literally when the closing delimiter never comes. Returns the
/// remaining unscanned text.
fn convert_to<'a>(
    out: &mut String,
    tail: &'a str,
    close: &str,
    opener: &str,
    display: bool,
    settings: &Settings,
) -> &'a str {
    match tail.find(close) {
        Some(end) => {
            out.push_str(&convert(&tail[..end], display, settings));
            &tail[end + close.len()..]
        }
        None => {
            out.push_str(opener);
            tail
        }
    }
}

fn convert(source: &str, display: bool, settings: &Settings) -> String {
    let mut local = settings.clone();
    local.display = display;
    local.throw_on_error = false;
    to_mathml_string(source, &local).unwrap_or_else(|_| source.to_owned())
}

fn find_unescaped_dollar(text: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '\\' => escaped = !escaped,
            '$' if !escaped => return Some(idx),
            _ => escaped = false,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_dollars_are_replaced() {
        let settings = Settings::default();
        let expected = format!(
            "blah {} blah",
            to_mathml_string("a", &settings).unwrap()
        );
        assert_eq!(filter_string("blah $a$ blah", &settings), expected);
    }

    #[test]
    fn double_dollars_select_display_mode() {
        let settings = Settings::default();
        let output = filter_string("$$x$$", &settings);
        assert!(output.contains("display=\"block\""));
        let inline = filter_string("$x$", &settings);
        assert!(!inline.contains("display=\"block\""));
    }

    #[test]
    fn bracket_forms() {
        let settings = Settings::default();
        assert!(filter_string(r"\[x\]", &settings).contains("display=\"block\""));
        assert!(filter_string(r"\(x\)", &settings).contains("<mi>x</mi>"));
    }

    #[test]
    fn escaped_and_unmatched_delimiters_pass_through() {
        let settings = Settings::default();
        assert_eq!(filter_string(r"costs \$5", &settings), "costs $5");
        assert_eq!(filter_string("lonely $ sign", &settings), "lonely $ sign");
        assert_eq!(filter_string(r"a \\[1em] b", &settings), r"a \\[1em] b");
        assert_eq!(filter_string("no math here", &settings), "no math here");
    }

    #[test]
    fn escaped_dollar_inside_math_does_not_close() {
        let settings = Settings::default();
        let output = filter_string(r"$\$$", &settings);
        assert!(output.contains("<mi>$</mi>"));
    }
}
