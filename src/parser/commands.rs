//! Static dispatch table for macro commands.
//!
//! Every command with parse behavior (as opposed to the pure symbol
//! commands in [`crate::symbols`]) maps to a [`CommandSpec`] variant in a
//! perfect-hash table built at compile time. The parser matches on the
//! variant instead of comparing strings per macro.

use crate::mathml_tree::MathNodeType;
use crate::unicode::Mathvariant;
use phf::phf_map;

/// Parse behavior of a command.
#[derive(Debug, Clone, Copy)]
pub enum CommandSpec {
    /// `\frac`-family: two arguments into an `mfrac`, with optional
    /// line-thickness override, surrounding delimiter pair and
    /// script-style (`mstyle displaystyle="false"`) wrapper.
    Fraction {
        /// `linethickness` attribute value, when not the default.
        line_thickness: Option<&'static str>,
        /// Wrapping open/close delimiter pair.
        delimiters: Option<(&'static str, &'static str)>,
        /// Force non-display rendering (`\tfrac`, `\tbinom`).
        script_style: bool,
    },
    /// `\over`-family: infix fraction splitting the enclosing list.
    Infix {
        /// `linethickness` attribute value, when not the default.
        line_thickness: Option<&'static str>,
        /// Wrapping open/close delimiter pair.
        delimiters: Option<(&'static str, &'static str)>,
    },
    /// `\sqrt`, with an optional bracketed index re-entering the grammar.
    Sqrt,
    /// `\root index base`.
    Root,
    /// Mathvariant macro: single-character arguments are remapped through
    /// the Unicode alphabets, everything else wraps in `mstyle`.
    Variant(Mathvariant),
    /// Style macro scoping an attribute over the rest of the group
    /// (`\displaystyle`, `\scriptstyle`, ...).
    Scoped {
        /// Attribute name on the wrapping `mstyle`.
        name: &'static str,
        /// Attribute value.
        value: &'static str,
    },
    /// `\color{c}`: `mstyle mathcolor` over the rest of the group.
    Color,
    /// `\bgcolor{c}`: `mstyle mathbackground` over the rest of the group.
    BgColor,
    /// Element escape hatch: a raw-text argument into the given token
    /// element (`\mi`, `\mn`, `\mo`, `\mtext`, ...).
    Element(MathNodeType),
    /// `\ms[lquote][rquote]{text}`.
    StringLiteral,
    /// Fixed-width space macro; the value goes through the length
    /// evaluator (named math spaces or dimension literals).
    Space {
        /// Width as a dimension literal or named math space.
        width: &'static str,
    },
    /// `\space{h}{d}{w}` with integer tenths arguments.
    SpaceHDW,
    /// `\phantom`.
    Phantom,
    /// `\mathrlap`/`\mathllap`/`\mathclap`: zero-width `mpadded`.
    Lap {
        /// `lspace` attribute for the centered/left variants.
        lspace: Option<&'static str>,
    },
    /// `\mathraisebox{lift}[height][depth]`.
    RaiseBox,
    /// `menclose` wrapper; a fixed notation or a notation argument.
    Enclose {
        /// Fixed notation (`\cancel`); `None` reads a `{notation}` argument.
        notation: Option<&'static str>,
    },
    /// `\href{url}{content}`; the attribute is dropped in safe mode.
    Href,
    /// `\tooltip`/`\statusline`: `maction` with a text child.
    Action {
        /// The `actiontype` attribute value.
        action_type: &'static str,
    },
    /// `\toggle ... \endtoggle`, or the two-argument itex shorthand.
    Toggle,
    /// `\begintoggle ... \endtoggle`.
    BeginToggle,
    /// `\tensor base{scripts}`.
    Tensor,
    /// `\multiscripts{pre}base{post}`.
    Multiscripts,
    /// Accent or bar/brace over or under a base.
    Accent {
        /// The accent character.
        text: &'static str,
        /// Over (`mover`) vs under (`munder`).
        over: bool,
        /// Whether to mark the wrapper with `accent="true"`.
        accent: bool,
    },
    /// `\overset`/`\underset`: script argument then base.
    UnderOverSet {
        /// Over (`mover`) vs under (`munder`).
        over: bool,
    },
    /// Extensible arrow with optional under and required over labels.
    XArrow {
        /// The arrow character.
        text: &'static str,
    },
    /// `\big`-family: a delimiter pinned to a fixed size.
    Big {
        /// `maxsize`/`minsize` value.
        size: &'static str,
    },
    /// `\left ... \right`.
    Left,
    /// `\begin{env} ... \end{env}`.
    Begin,
    /// The `\array{...}` brace-delimited table shorthand.
    ArrayShorthand,
}

/// Command dispatch table, keyed by the full command text including the
/// backslash.
pub static COMMANDS: phf::Map<&'static str, CommandSpec> = phf_map! {
    r"\frac" => CommandSpec::Fraction {
        line_thickness: None,
        delimiters: None,
        script_style: false,
    },
    r"\tfrac" => CommandSpec::Fraction {
        line_thickness: None,
        delimiters: None,
        script_style: true,
    },
    r"\binom" => CommandSpec::Fraction {
        line_thickness: Some("0"),
        delimiters: Some(("(", ")")),
        script_style: false,
    },
    r"\tbinom" => CommandSpec::Fraction {
        line_thickness: Some("0"),
        delimiters: Some(("(", ")")),
        script_style: true,
    },
    r"\over" => CommandSpec::Infix {
        line_thickness: None,
        delimiters: None,
    },
    r"\atop" => CommandSpec::Infix {
        line_thickness: Some("0"),
        delimiters: None,
    },
    r"\choose" => CommandSpec::Infix {
        line_thickness: Some("0"),
        delimiters: Some(("(", ")")),
    },
    r"\sqrt" => CommandSpec::Sqrt,
    r"\root" => CommandSpec::Root,
    r"\mathbb" => CommandSpec::Variant(Mathvariant::DoubleStruck),
    r"\mathbf" => CommandSpec::Variant(Mathvariant::Bold),
    r"\mathit" => CommandSpec::Variant(Mathvariant::Italic),
    r"\boldsymbol" => CommandSpec::Variant(Mathvariant::BoldItalic),
    r"\mathfrak" => CommandSpec::Variant(Mathvariant::Fraktur),
    r"\mathcal" => CommandSpec::Variant(Mathvariant::Script),
    r"\mathscr" => CommandSpec::Variant(Mathvariant::Script),
    r"\mathsf" => CommandSpec::Variant(Mathvariant::SansSerif),
    r"\mathtt" => CommandSpec::Variant(Mathvariant::Monospace),
    r"\mathrm" => CommandSpec::Variant(Mathvariant::Normal),
    r"\displaystyle" => CommandSpec::Scoped {
        name: "displaystyle",
        value: "true",
    },
    r"\textstyle" => CommandSpec::Scoped {
        name: "displaystyle",
        value: "false",
    },
    r"\scriptstyle" => CommandSpec::Scoped {
        name: "scriptlevel",
        value: "1",
    },
    r"\scriptscriptstyle" => CommandSpec::Scoped {
        name: "scriptlevel",
        value: "2",
    },
    r"\color" => CommandSpec::Color,
    r"\bgcolor" => CommandSpec::BgColor,
    r"\mi" => CommandSpec::Element(MathNodeType::Mi),
    r"\mn" => CommandSpec::Element(MathNodeType::Mn),
    r"\mo" => CommandSpec::Element(MathNodeType::Mo),
    r"\mtext" => CommandSpec::Element(MathNodeType::Mtext),
    r"\text" => CommandSpec::Element(MathNodeType::Mtext),
    r"\operatorname" => CommandSpec::Element(MathNodeType::Mi),
    r"\ms" => CommandSpec::StringLiteral,
    r"\," => CommandSpec::Space {
        width: "thinmathspace",
    },
    r"\:" => CommandSpec::Space {
        width: "mediummathspace",
    },
    r"\;" => CommandSpec::Space {
        width: "thickmathspace",
    },
    r"\!" => CommandSpec::Space {
        width: "negativethinmathspace",
    },
    r"\quad" => CommandSpec::Space { width: "1em" },
    r"\qquad" => CommandSpec::Space { width: "2em" },
    r"\space" => CommandSpec::SpaceHDW,
    r"\phantom" => CommandSpec::Phantom,
    r"\mathrlap" => CommandSpec::Lap { lspace: None },
    r"\mathllap" => CommandSpec::Lap {
        lspace: Some("-100%width"),
    },
    r"\mathclap" => CommandSpec::Lap {
        lspace: Some("-50%width"),
    },
    r"\mathraisebox" => CommandSpec::RaiseBox,
    r"\enclose" => CommandSpec::Enclose { notation: None },
    r"\cancel" => CommandSpec::Enclose {
        notation: Some("updiagonalstrike"),
    },
    r"\href" => CommandSpec::Href,
    r"\tooltip" => CommandSpec::Action {
        action_type: "tooltip",
    },
    r"\statusline" => CommandSpec::Action {
        action_type: "statusline",
    },
    r"\toggle" => CommandSpec::Toggle,
    r"\begintoggle" => CommandSpec::BeginToggle,
    r"\tensor" => CommandSpec::Tensor,
    r"\multiscripts" => CommandSpec::Multiscripts,
    r"\hat" => CommandSpec::Accent {
        text: "^",
        over: true,
        accent: true,
    },
    r"\bar" => CommandSpec::Accent {
        text: "\u{00AF}",
        over: true,
        accent: true,
    },
    r"\vec" => CommandSpec::Accent {
        text: "\u{2192}",
        over: true,
        accent: true,
    },
    r"\dot" => CommandSpec::Accent {
        text: "\u{02D9}",
        over: true,
        accent: true,
    },
    r"\ddot" => CommandSpec::Accent {
        text: "\u{00A8}",
        over: true,
        accent: true,
    },
    r"\tilde" => CommandSpec::Accent {
        text: "\u{02DC}",
        over: true,
        accent: true,
    },
    r"\check" => CommandSpec::Accent {
        text: "\u{02C7}",
        over: true,
        accent: true,
    },
    r"\breve" => CommandSpec::Accent {
        text: "\u{02D8}",
        over: true,
        accent: true,
    },
    r"\acute" => CommandSpec::Accent {
        text: "\u{00B4}",
        over: true,
        accent: true,
    },
    r"\grave" => CommandSpec::Accent {
        text: "`",
        over: true,
        accent: true,
    },
    r"\overline" => CommandSpec::Accent {
        text: "\u{00AF}",
        over: true,
        accent: false,
    },
    r"\underline" => CommandSpec::Accent {
        text: "_",
        over: false,
        accent: false,
    },
    r"\overbrace" => CommandSpec::Accent {
        text: "\u{23DE}",
        over: true,
        accent: false,
    },
    r"\underbrace" => CommandSpec::Accent {
        text: "\u{23DF}",
        over: false,
        accent: false,
    },
    r"\overset" => CommandSpec::UnderOverSet { over: true },
    r"\underset" => CommandSpec::UnderOverSet { over: false },
    r"\xleftarrow" => CommandSpec::XArrow { text: "\u{2190}" },
    r"\xrightarrow" => CommandSpec::XArrow { text: "\u{2192}" },
    r"\xleftrightarrow" => CommandSpec::XArrow { text: "\u{2194}" },
    r"\xLeftarrow" => CommandSpec::XArrow { text: "\u{21D0}" },
    r"\xRightarrow" => CommandSpec::XArrow { text: "\u{21D2}" },
    r"\xLeftrightarrow" => CommandSpec::XArrow { text: "\u{21D4}" },
    r"\xmapsto" => CommandSpec::XArrow { text: "\u{21A6}" },
    r"\big" => CommandSpec::Big { size: "1.2em" },
    r"\bigl" => CommandSpec::Big { size: "1.2em" },
    r"\bigr" => CommandSpec::Big { size: "1.2em" },
    r"\Big" => CommandSpec::Big { size: "1.8em" },
    r"\Bigl" => CommandSpec::Big { size: "1.8em" },
    r"\Bigr" => CommandSpec::Big { size: "1.8em" },
    r"\bigg" => CommandSpec::Big { size: "2.4em" },
    r"\biggl" => CommandSpec::Big { size: "2.4em" },
    r"\biggr" => CommandSpec::Big { size: "2.4em" },
    r"\Bigg" => CommandSpec::Big { size: "3em" },
    r"\Biggl" => CommandSpec::Big { size: "3em" },
    r"\Biggr" => CommandSpec::Big { size: "3em" },
    r"\left" => CommandSpec::Left,
    r"\begin" => CommandSpec::Begin,
    r"\array" => CommandSpec::ArrayShorthand,
};

/// Looks up a command's parse behavior.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.get(name)
}
