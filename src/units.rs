//! Length parsing and formatting.
//!
//! Dimension literals (`1em`, `-2pt`, named math spaces, bare numbers)
//! are normalized into [`Length`] values consumed by the padding, space
//! and raisebox macros. Formatting goes through Rust's shortest
//! round-trip `f64` display, so `1.0 / 3.0` formats as
//! `0.3333333333333333` and whole numbers drop the decimal point.

use phf::phf_map;

/// Units a dimension literal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Font-relative em.
    Em,
    /// Font-relative ex.
    Ex,
    /// CSS pixel.
    Px,
    /// Point.
    Pt,
    /// Centimeter.
    Cm,
    /// Millimeter.
    Mm,
    /// Inch.
    In,
    /// Pica.
    Pc,
    /// Explicit percentage (`50%`).
    Percent,
    /// Math unit (1/18 em).
    Mu,
    /// A bare number with no unit: a percentage-like scale factor.
    Unitless,
}

impl Unit {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pc => "pc",
            Self::Percent | Self::Unitless => "%",
            Self::Mu => "mu",
        }
    }
}

/// A parsed dimension: magnitude plus unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Signed magnitude.
    pub magnitude: f64,
    /// The unit the magnitude is expressed in.
    pub unit: Unit,
}

/// Named relative math spaces and their em fractions (k/18 em), including
/// the `negative`-prefixed counterparts.
static MATH_SPACES: phf::Map<&'static str, f64> = phf_map! {
    "veryverythinmathspace" => 1.0 / 18.0,
    "verythinmathspace" => 2.0 / 18.0,
    "thinmathspace" => 3.0 / 18.0,
    "mediummathspace" => 4.0 / 18.0,
    "thickmathspace" => 5.0 / 18.0,
    "verythickmathspace" => 6.0 / 18.0,
    "veryverythickmathspace" => 7.0 / 18.0,
    "negativeveryverythinmathspace" => -1.0 / 18.0,
    "negativeverythinmathspace" => -2.0 / 18.0,
    "negativethinmathspace" => -3.0 / 18.0,
    "negativemediummathspace" => -4.0 / 18.0,
    "negativethickmathspace" => -5.0 / 18.0,
    "negativeverythickmathspace" => -6.0 / 18.0,
    "negativeveryverythickmathspace" => -7.0 / 18.0,
};

impl Length {
    /// The zero length substituted for unparseable dimensions.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            magnitude: 0.0,
            unit: Unit::Pt,
        }
    }

    /// Whether the magnitude is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.magnitude < 0.0
    }

    /// The length with the sign of the magnitude dropped.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            unit: self.unit,
        }
    }

    /// Canonical attribute-value form: formatted magnitude plus unit
    /// suffix.
    #[must_use]
    pub fn format(self) -> String {
        let mut out = format_number(self.magnitude);
        out.push_str(self.unit.suffix());
        out
    }
}

/// Formats `n` the way JavaScript's default number-to-string does:
/// shortest decimal representation that round-trips, integers without a
/// decimal point, and negative zero as plain `0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    format!("{n}")
}

/// Parses a dimension literal: a signed floating-point magnitude followed
/// by an optional unit keyword, or a named math space.
///
/// Returns `None` for unrecognized input; callers recover by substituting
/// [`Length::zero`] (an unparseable dimension is never a parse error).
#[must_use]
pub fn parse_length(text: &str) -> Option<Length> {
    let text = text.trim();
    if let Some(&ems) = MATH_SPACES.get(text) {
        return Some(Length {
            magnitude: ems,
            unit: Unit::Em,
        });
    }

    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    let number_len = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    if number_len == 0 {
        return None;
    }
    let split = text.len() - (rest.len() - number_len);
    let magnitude: f64 = text[..split].parse().ok()?;
    let unit = match text[split..].trim() {
        "" => Unit::Unitless,
        "%" => Unit::Percent,
        "em" => Unit::Em,
        "ex" => Unit::Ex,
        "px" => Unit::Px,
        "pt" => Unit::Pt,
        "cm" => Unit::Cm,
        "mm" => Unit::Mm,
        "in" => Unit::In,
        "pc" => Unit::Pc,
        "mu" => Unit::Mu,
        _ => return None,
    };
    Some(Length { magnitude, unit })
}

/// Formats `n` tenths as a decimal attribute value: `1` becomes `.1`,
/// `10` becomes `1`, `23` becomes `2.3`. Used by `\space{h}{d}{w}`,
/// whose integer arguments are tenths of an ex/em.
#[must_use]
pub fn format_tenths(n: i64) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    let magnitude = n.unsigned_abs();
    let whole = magnitude / 10;
    let tenth = magnitude % 10;
    if whole > 0 || tenth == 0 {
        out.push_str(&whole.to_string());
    }
    if tenth != 0 {
        out.push('.');
        out.push_str(&tenth.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_units() {
        assert_eq!(
            parse_length("1em"),
            Some(Length {
                magnitude: 1.0,
                unit: Unit::Em
            })
        );
        assert_eq!(
            parse_length("-2.5pt"),
            Some(Length {
                magnitude: -2.5,
                unit: Unit::Pt
            })
        );
        assert_eq!(
            parse_length("50"),
            Some(Length {
                magnitude: 50.0,
                unit: Unit::Unitless
            })
        );
        assert_eq!(parse_length("1vw"), None);
        assert_eq!(parse_length("em"), None);
        assert_eq!(parse_length(""), None);
    }

    #[test]
    fn named_spaces_map_to_em_fractions() {
        let thin = parse_length("thinmathspace").unwrap();
        assert_eq!(thin.unit, Unit::Em);
        assert_eq!(thin.format(), "0.16666666666666666em");
        let negative = parse_length("negativethinmathspace").unwrap();
        assert_eq!(negative.format(), "-0.16666666666666666em");
        assert_eq!(
            parse_length("mediummathspace").unwrap().format(),
            "0.2222222222222222em"
        );
        assert_eq!(
            parse_length("thickmathspace").unwrap().format(),
            "0.2777777777777778em"
        );
    }

    #[test]
    fn formatting_matches_js_number_to_string() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn unitless_formats_as_percent() {
        assert_eq!(parse_length("50").unwrap().format(), "50%");
        assert_eq!(parse_length("50%").unwrap().format(), "50%");
    }

    #[test]
    fn zero_recovery_value() {
        assert_eq!(Length::zero().format(), "0pt");
    }

    #[test]
    fn tenths_formatting() {
        assert_eq!(format_tenths(1), ".1");
        assert_eq!(format_tenths(10), "1");
        assert_eq!(format_tenths(0), "0");
        assert_eq!(format_tenths(23), "2.3");
        assert_eq!(format_tenths(-3), "-.3");
    }
}
