//! Mathvariant character remapping.
//!
//! Single-character arguments of the `\mathbb`-family macros are replaced
//! by the corresponding Mathematical Alphanumeric Symbols code point
//! instead of being wrapped in an `mstyle`. The plane-1 blocks have holes
//! where a letterlike symbol already existed in the BMP (`ℂ`, `ℬ`, `ℭ`,
//! `ℎ`, ...); those exceptions are handled before the block offset.

/// The glyph families selectable through a mathvariant macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mathvariant {
    /// Upright (`\mathrm`) — no dedicated Unicode block.
    Normal,
    /// `\mathbf`
    Bold,
    /// `\mathit`
    Italic,
    /// `\boldsymbol`
    BoldItalic,
    /// `\mathbb`
    DoubleStruck,
    /// `\mathfrak`
    Fraktur,
    /// `\mathcal` / `\mathscr`
    Script,
    /// `\mathsf`
    SansSerif,
    /// `\mathtt`
    Monospace,
}

impl Mathvariant {
    /// The MathML `mathvariant` attribute value for this family.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
            Self::DoubleStruck => "double-struck",
            Self::Fraktur => "fraktur",
            Self::Script => "script",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }
}

/// Block base code points: (uppercase A, lowercase a, digit 0).
/// A zero entry means the family has no block for that range.
const fn bases(variant: Mathvariant) -> (u32, u32, u32) {
    match variant {
        Mathvariant::Normal => (0, 0, 0),
        Mathvariant::Bold => (0x1D400, 0x1D41A, 0x1D7CE),
        Mathvariant::Italic => (0x1D434, 0x1D44E, 0),
        Mathvariant::BoldItalic => (0x1D468, 0x1D482, 0),
        Mathvariant::DoubleStruck => (0x1D538, 0x1D552, 0x1D7D8),
        Mathvariant::Fraktur => (0x1D504, 0x1D51E, 0),
        Mathvariant::Script => (0x1D49C, 0x1D4B6, 0),
        Mathvariant::SansSerif => (0x1D5A0, 0x1D5BA, 0x1D7E2),
        Mathvariant::Monospace => (0x1D670, 0x1D68A, 0x1D7F6),
    }
}

/// Letterlike-symbol holes in the plane-1 alphabets.
const fn exception(ch: char, variant: Mathvariant) -> Option<char> {
    Some(match (variant, ch) {
        (Mathvariant::Italic, 'h') => '\u{210E}',
        (Mathvariant::DoubleStruck, 'C') => '\u{2102}',
        (Mathvariant::DoubleStruck, 'H') => '\u{210D}',
        (Mathvariant::DoubleStruck, 'N') => '\u{2115}',
        (Mathvariant::DoubleStruck, 'P') => '\u{2119}',
        (Mathvariant::DoubleStruck, 'Q') => '\u{211A}',
        (Mathvariant::DoubleStruck, 'R') => '\u{211D}',
        (Mathvariant::DoubleStruck, 'Z') => '\u{2124}',
        (Mathvariant::Fraktur, 'C') => '\u{212D}',
        (Mathvariant::Fraktur, 'H') => '\u{210C}',
        (Mathvariant::Fraktur, 'I') => '\u{2111}',
        (Mathvariant::Fraktur, 'R') => '\u{211C}',
        (Mathvariant::Fraktur, 'Z') => '\u{2128}',
        (Mathvariant::Script, 'B') => '\u{212C}',
        (Mathvariant::Script, 'E') => '\u{2130}',
        (Mathvariant::Script, 'F') => '\u{2131}',
        (Mathvariant::Script, 'H') => '\u{210B}',
        (Mathvariant::Script, 'I') => '\u{2110}',
        (Mathvariant::Script, 'L') => '\u{2112}',
        (Mathvariant::Script, 'M') => '\u{2133}',
        (Mathvariant::Script, 'R') => '\u{211B}',
        (Mathvariant::Script, 'e') => '\u{212F}',
        (Mathvariant::Script, 'g') => '\u{210A}',
        (Mathvariant::Script, 'o') => '\u{2134}',
        _ => return None,
    })
}

/// Greek block bases for the bold family: (uppercase Α, lowercase α).
const GREEK_BOLD: (u32, u32) = (0x1D6A8, 0x1D6C2);

/// Maps `ch` into the `variant` alphabet, or `None` when the family has
/// no replacement glyph for it (callers then fall back to the wrapping
/// `mstyle` form).
#[must_use]
pub fn remap_char(ch: char, variant: Mathvariant) -> Option<char> {
    if let Some(mapped) = exception(ch, variant) {
        return Some(mapped);
    }
    let (upper, lower, digit) = bases(variant);
    let mapped = match ch {
        'A'..='Z' if upper != 0 => upper + (ch as u32 - 'A' as u32),
        'a'..='z' if lower != 0 => lower + (ch as u32 - 'a' as u32),
        '0'..='9' if digit != 0 => digit + (ch as u32 - '0' as u32),
        '\u{0391}'..='\u{03A9}' if matches!(variant, Mathvariant::Bold) => {
            GREEK_BOLD.0 + (ch as u32 - 0x0391)
        }
        '\u{03B1}'..='\u{03C9}' if matches!(variant, Mathvariant::Bold) => {
            GREEK_BOLD.1 + (ch as u32 - 0x03B1)
        }
        _ => return None,
    };
    char::from_u32(mapped)
}
