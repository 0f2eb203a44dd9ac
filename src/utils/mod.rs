//! String helpers shared by the serializer and the reverse path.

use core::fmt;

fn write_escaped<W: fmt::Write>(
    writer: &mut W,
    text: &str,
    replace: impl Fn(char) -> Option<&'static str>,
) -> fmt::Result {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        if let Some(rep) = replace(ch) {
            if last < idx {
                writer.write_str(&text[last..idx])?;
            }
            writer.write_str(rep)?;
            last = idx + ch.len_utf8();
        }
    }
    if last < text.len() {
        writer.write_str(&text[last..])
    } else {
        Ok(())
    }
}

/// Writes `text` with `&` and `<` escaped, the minimum XML needs for
/// element content.
#[inline]
pub fn escape_text_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
    write_escaped(writer, text, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        _ => None,
    })
}

/// Writes `text` with `&`, `<` and `>` escaped.
///
/// Used for the TeX annotation payload, where escaping `>` also keeps any
/// `]]>`-shaped source from leaking a CDATA terminator into the markup.
#[inline]
pub fn escape_annotation_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
    write_escaped(writer, text, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Writes `text` with `&`, `<` and `"` escaped, for double-quoted
/// attribute values.
#[inline]
pub fn escape_attribute_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
    write_escaped(writer, text, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

/// Reverses the escaping applied by the serializer: `&amp;`, `&lt;`,
/// `&gt;` and `&quot;` back to their characters. Unknown entity-like
/// sequences are left untouched.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let replaced = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
        ]
        .iter()
        .find_map(|(entity, ch)| rest.strip_prefix(entity).map(|tail| (*ch, tail)));
        match replaced {
            Some((ch, tail)) => {
                out.push(ch);
                rest = tail;
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapses every run of whitespace in `text` to a single space and trims
/// the ends, the normalization applied to `\mtext`-style raw arguments.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escaping_leaves_gt_alone() {
        let mut out = String::new();
        escape_text_into(&mut out, "a<b & c>d").unwrap();
        assert_eq!(out, "a&lt;b &amp; c>d");
    }

    #[test]
    fn annotation_escaping_covers_gt() {
        let mut out = String::new();
        escape_annotation_into(&mut out, "x ]]> y").unwrap();
        assert_eq!(out, "x ]]&gt; y");
    }

    #[test]
    fn unescape_inverts_escaping() {
        let original = "a & b < c > d \" e";
        let mut escaped = String::new();
        escape_annotation_into(&mut escaped, original).unwrap();
        assert_eq!(unescape(&escaped), original);
        assert_eq!(unescape("&bogus; &"), "&bogus; &");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(collapse_whitespace("  x   y  "), "x y");
        assert_eq!(collapse_whitespace("a\t\n b"), "a b");
    }
}
