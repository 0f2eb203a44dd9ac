//! Static symbol table: command names to Unicode text, semantic class and
//! default rendering attributes.
//!
//! The table drives leaf construction in the parser: an `Identifier`
//! entry becomes `mi`, an `Operator` entry `mo`, a `Number` entry `mn`.
//! Bare characters that are not covered by an explicit override fall back
//! to Unicode classification (letters of any script are identifiers,
//! digits of any script are numbers, everything else is an operator).
//!
//! The entries below are the working set the grammar exercises; the
//! mapping is data, not algorithm, and extending it is purely additive.

use phf::phf_map;

/// Semantic class of a symbol, selecting the MathML token element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// `mi`
    Identifier,
    /// `mo`
    Operator,
    /// `mn`
    Number,
}

/// Table entry: replacement text, class and default attributes.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    /// The Unicode text the command maps to.
    pub text: &'static str,
    /// Which token element to build.
    pub class: TokenClass,
    /// Default attributes, in emission order.
    pub attrs: &'static [(&'static str, &'static str)],
}

const NONE: &[(&str, &str)] = &[];
const FENCE: &[(&str, &str)] = &[("stretchy", "false")];

const fn id(text: &'static str) -> SymbolInfo {
    SymbolInfo {
        text,
        class: TokenClass::Identifier,
        attrs: NONE,
    }
}

const fn op(text: &'static str) -> SymbolInfo {
    SymbolInfo {
        text,
        class: TokenClass::Operator,
        attrs: NONE,
    }
}

const fn num(text: &'static str) -> SymbolInfo {
    SymbolInfo {
        text,
        class: TokenClass::Number,
        attrs: NONE,
    }
}

const fn fence(text: &'static str) -> SymbolInfo {
    SymbolInfo {
        text,
        class: TokenClass::Operator,
        attrs: FENCE,
    }
}

/// Command-name (and prime-run) lookup table.
static SYMBOLS: phf::Map<&'static str, SymbolInfo> = phf_map! {
    // Greek lowercase and variants
    r"\alpha" => id("\u{03B1}"),
    r"\beta" => id("\u{03B2}"),
    r"\gamma" => id("\u{03B3}"),
    r"\delta" => id("\u{03B4}"),
    r"\epsilon" => id("\u{03F5}"),
    r"\varepsilon" => id("\u{03B5}"),
    r"\zeta" => id("\u{03B6}"),
    r"\eta" => id("\u{03B7}"),
    r"\theta" => id("\u{03B8}"),
    r"\vartheta" => id("\u{03D1}"),
    r"\iota" => id("\u{03B9}"),
    r"\kappa" => id("\u{03BA}"),
    r"\varkappa" => id("\u{03F0}"),
    r"\lambda" => id("\u{03BB}"),
    r"\mu" => id("\u{03BC}"),
    r"\nu" => id("\u{03BD}"),
    r"\xi" => id("\u{03BE}"),
    r"\omicron" => id("\u{2134}"),
    r"\pi" => id("\u{03C0}"),
    r"\varpi" => id("\u{03D6}"),
    r"\rho" => id("\u{03C1}"),
    r"\varrho" => id("\u{03F1}"),
    r"\sigma" => id("\u{03C3}"),
    r"\varsigma" => id("\u{03C2}"),
    r"\tau" => id("\u{03C4}"),
    r"\upsilon" => id("\u{03C5}"),
    r"\phi" => id("\u{03D5}"),
    r"\varphi" => id("\u{03C6}"),
    r"\chi" => id("\u{03C7}"),
    r"\psi" => id("\u{03C8}"),
    r"\omega" => id("\u{03C9}"),
    r"\backepsilon" => op("\u{03F6}"),
    r"\digamma" => id("\u{03DD}"),
    // Greek uppercase
    r"\Alpha" => id("\u{0391}"),
    r"\Beta" => id("\u{0392}"),
    r"\Gamma" => id("\u{0393}"),
    r"\Delta" => id("\u{0394}"),
    r"\Epsilon" => id("\u{0395}"),
    r"\Zeta" => id("\u{0396}"),
    r"\Eta" => id("\u{0397}"),
    r"\Theta" => id("\u{0398}"),
    r"\Iota" => id("\u{0399}"),
    r"\Kappa" => id("\u{039A}"),
    r"\Lambda" => id("\u{039B}"),
    r"\Mu" => id("\u{039C}"),
    r"\Nu" => id("\u{039D}"),
    r"\Xi" => id("\u{039E}"),
    r"\Pi" => id("\u{03A0}"),
    r"\Rho" => id("\u{03A1}"),
    r"\Sigma" => id("\u{03A3}"),
    r"\Tau" => id("\u{03A4}"),
    r"\Upsilon" => id("\u{03A5}"),
    r"\Upsi" => id("\u{03A5}"),
    r"\Phi" => id("\u{03A6}"),
    r"\Chi" => id("\u{03A7}"),
    r"\Psi" => id("\u{03A8}"),
    r"\Omega" => id("\u{03A9}"),
    r"\mho" => id("\u{2127}"),
    // Letterlike identifiers
    r"\aleph" => id("\u{2135}"),
    r"\beth" => id("\u{2136}"),
    r"\gimel" => id("\u{2137}"),
    r"\daleth" => id("\u{2138}"),
    r"\eth" => id("\u{00F0}"),
    r"\ell" => id("\u{2113}"),
    r"\hbar" => id("\u{210F}"),
    r"\Im" => id("\u{2111}"),
    r"\Re" => id("\u{211C}"),
    r"\imath" => id("\u{0131}"),
    r"\jmath" => id("\u{0237}"),
    r"\wp" => id("\u{2118}"),
    r"\partial" => id("\u{2202}"),
    r"\emptyset" => id("\u{2205}"),
    r"\empty" => id("\u{2205}"),
    r"\varnothing" => id("\u{2205}"),
    r"\infty" => num("\u{221E}"),
    r"\infinity" => num("\u{221E}"),
    // Single-punctuation escapes
    r"\&" => op("&"),
    r"\%" => op("%"),
    r"\$" => id("$"),
    r"\#" => op("#"),
    r"\_" => id("_"),
    // Binary operators
    r"\pm" => op("\u{00B1}"),
    r"\mp" => op("\u{2213}"),
    r"\times" => op("\u{00D7}"),
    r"\div" => op("\u{00F7}"),
    r"\cdot" => op("\u{22C5}"),
    r"\ast" => op("\u{2217}"),
    r"\star" => op("\u{22C6}"),
    r"\circ" => op("\u{2218}"),
    r"\bullet" => op("\u{2219}"),
    r"\oplus" => op("\u{2295}"),
    r"\ominus" => op("\u{2296}"),
    r"\otimes" => op("\u{2297}"),
    r"\oslash" => op("\u{2298}"),
    r"\odot" => op("\u{2299}"),
    r"\circledast" => op("\u{229B}"),
    r"\circledcirc" => op("\u{229A}"),
    r"\circleddash" => op("\u{229D}"),
    r"\odash" => op("\u{229D}"),
    r"\cap" => op("\u{2229}"),
    r"\cup" => op("\u{222A}"),
    r"\intersection" => op("\u{2229}"),
    r"\union" => op("\u{222A}"),
    r"\Cap" => op("\u{22D2}"),
    r"\Cup" => op("\u{22D3}"),
    r"\bigcap" => op("\u{22C2}"),
    r"\bigcup" => op("\u{22C3}"),
    r"\Intersection" => op("\u{22C2}"),
    r"\Union" => op("\u{22C3}"),
    r"\sqcap" => op("\u{2293}"),
    r"\sqcup" => op("\u{2294}"),
    r"\bigsqcup" => op("\u{2A06}"),
    r"\bigsqcap" => op("\u{2A05}"),
    r"\uplus" => op("\u{228E}"),
    r"\biguplus" => op("\u{2A04}"),
    r"\amalg" => op("\u{2A3F}"),
    r"\wr" => op("\u{2240}"),
    r"\setminus" => op("\u{2216}"),
    r"\smallsetminus" => op("\u{2216}"),
    r"\sslash" => op("\u{2AFD}"),
    r"\wedge" => op("\u{2227}"),
    r"\vee" => op("\u{2228}"),
    r"\bigwedge" => op("\u{22C0}"),
    r"\bigvee" => op("\u{22C1}"),
    r"\Wedge" => op("\u{22C0}"),
    r"\Vee" => op("\u{22C1}"),
    r"\dotplus" => op("\u{2214}"),
    r"\ltimes" => op("\u{22C9}"),
    r"\rtimes" => op("\u{22CA}"),
    r"\divideontimes" => op("\u{22C7}"),
    r"\intercal" => op("\u{22BA}"),
    r"\boxdot" => op("\u{22A1}"),
    r"\boxminus" => op("\u{229F}"),
    r"\minusb" => op("\u{229F}"),
    r"\boxplus" => op("\u{229E}"),
    r"\plusb" => op("\u{229E}"),
    r"\boxtimes" => op("\u{22A0}"),
    r"\timesb" => op("\u{22A0}"),
    // Large operators
    r"\sum" => op("\u{2211}"),
    r"\prod" => op("\u{220F}"),
    r"\product" => op("\u{220F}"),
    r"\coprod" => op("\u{2210}"),
    r"\coproduct" => op("\u{2210}"),
    r"\int" => op("\u{222B}"),
    r"\integral" => op("\u{222B}"),
    r"\iint" => op("\u{222C}"),
    r"\doubleintegral" => op("\u{222C}"),
    r"\iiint" => op("\u{222D}"),
    r"\tripleintegral" => op("\u{222D}"),
    r"\iiiint" => op("\u{2A0C}"),
    r"\quadrupleintegral" => op("\u{2A0C}"),
    r"\oint" => op("\u{222E}"),
    r"\conint" => op("\u{222E}"),
    r"\contourintegral" => op("\u{222E}"),
    r"\bigotimes" => op("\u{2A02}"),
    r"\bigoplus" => op("\u{2A01}"),
    r"\bigodot" => op("\u{2A00}"),
    // Logic and misc
    r"\nabla" => op("\u{2207}"),
    r"\Del" => op("\u{2207}"),
    r"\exists" => op("\u{2203}"),
    r"\nexists" => op("\u{2204}"),
    r"\forall" => op("\u{2200}"),
    r"\neg" => op("\u{00AC}"),
    r"\not" => op("\u{2260}"),
    r"\dagger" => op("\u{2020}"),
    r"\ddagger" => op("\u{2021}"),
    r"\top" => op("\u{22A4}"),
    r"\bot" => op("\u{22A5}"),
    r"\bottom" => op("\u{22A5}"),
    r"\vdash" => op("\u{22A2}"),
    r"\dashv" => op("\u{22A3}"),
    r"\Vdash" => op("\u{22A9}"),
    r"\vDash" => op("\u{22A8}"),
    r"\VDash" => op("\u{22AB}"),
    r"\Vvdash" => op("\u{22AA}"),
    r"\nvdash" => op("\u{22AC}"),
    r"\nvDash" => op("\u{22AD}"),
    r"\nVDash" => op("\u{22AF}"),
    r"\models" => op("\u{22A8}"),
    r"\therefore" => op("\u{2234}"),
    r"\because" => op("\u{2235}"),
    r"\angle" => op("\u{2220}"),
    r"\measuredangle" => op("\u{2221}"),
    r"\sphericalangle" => op("\u{2222}"),
    r"\backprime" => op("\u{2035}"),
    r"\natural" => op("\u{266E}"),
    r"\flat" => op("\u{266D}"),
    r"\sharp" => op("\u{266F}"),
    // Relations
    r"\le" => op("\u{2264}"),
    r"\leq" => op("\u{2264}"),
    r"\leqq" => op("\u{2266}"),
    r"\leqslant" => op("\u{2A7D}"),
    r"\lt" => op("<"),
    r"\ge" => op("\u{2265}"),
    r"\geq" => op("\u{2265}"),
    r"\geqq" => op("\u{2267}"),
    r"\geqslant" => op("\u{2A7E}"),
    r"\gt" => op(">"),
    r"\ne" => op("\u{2260}"),
    r"\neq" => op("\u{2260}"),
    r"\equiv" => op("\u{2261}"),
    r"\nequiv" => op("\u{2262}"),
    r"\approx" => op("\u{2248}"),
    r"\approxeq" => op("\u{224A}"),
    r"\thickapprox" => op("\u{2248}"),
    r"\cong" => op("\u{2245}"),
    r"\ncong" => op("\u{2247}"),
    r"\sim" => op("\u{223C}"),
    r"\thicksim" => op("\u{223C}"),
    r"\simeq" => op("\u{2243}"),
    r"\nsim" => op("\u{2241}"),
    r"\backsim" => op("\u{223D}"),
    r"\backsimeq" => op("\u{22CD}"),
    r"\propto" => op("\u{221D}"),
    r"\varpropto" => op("\u{221D}"),
    r"\ll" => op("\u{226A}"),
    r"\lll" => op("\u{22D8}"),
    r"\gg" => op("\u{226B}"),
    r"\ggg" => op("\u{22D9}"),
    r"\nless" => op("\u{226E}"),
    r"\ngtr" => op("\u{226F}"),
    r"\nleq" => op("\u{2270}"),
    r"\ngeq" => op("\u{2271}"),
    r"\lesssim" => op("\u{2272}"),
    r"\gtrsim" => op("\u{2273}"),
    r"\lessgtr" => op("\u{2276}"),
    r"\gtrless" => op("\u{2277}"),
    r"\subset" => op("\u{2282}"),
    r"\supset" => op("\u{2283}"),
    r"\nsubset" => op("\u{2284}"),
    r"\nsupset" => op("\u{2285}"),
    r"\subseteq" => op("\u{2286}"),
    r"\supseteq" => op("\u{2287}"),
    r"\nsubseteq" => op("\u{2288}"),
    r"\nsupseteq" => op("\u{2289}"),
    r"\subsetneq" => op("\u{228A}"),
    r"\supsetneq" => op("\u{228B}"),
    r"\subseteqq" => op("\u{2AC5}"),
    r"\supseteqq" => op("\u{2AC6}"),
    r"\Subset" => op("\u{22D0}"),
    r"\Supset" => op("\u{22D1}"),
    r"\sqsubset" => op("\u{228F}"),
    r"\sqsupset" => op("\u{2290}"),
    r"\sqsubseteq" => op("\u{2291}"),
    r"\sqsupseteq" => op("\u{2292}"),
    r"\in" => op("\u{2208}"),
    r"\ni" => op("\u{220B}"),
    r"\notin" => op("\u{2209}"),
    r"\notni" => op("\u{220C}"),
    r"\mid" => op("\u{2223}"),
    r"\shortmid" => op("\u{2223}"),
    r"\nmid" => op("\u{2224}"),
    r"\nshortmid" => op("\u{2224}"),
    r"\parallel" => op("\u{2225}"),
    r"\shortparallel" => op("\u{2225}"),
    r"\nparallel" => op("\u{2226}"),
    r"\nshortparallel" => op("\u{2226}"),
    r"\perp" => op("\u{22A5}"),
    r"\asymp" => op("\u{224D}"),
    r"\bowtie" => op("\u{22C8}"),
    r"\smile" => op("\u{2323}"),
    r"\smallsmile" => op("\u{2323}"),
    r"\frown" => op("\u{2322}"),
    r"\smallfrown" => op("\u{2322}"),
    r"\prec" => op("\u{227A}"),
    r"\succ" => op("\u{227B}"),
    r"\nprec" => op("\u{2280}"),
    r"\nsucc" => op("\u{2281}"),
    r"\preceq" => op("\u{2AAF}"),
    r"\succeq" => op("\u{2AB0}"),
    r"\preccurlyeq" => op("\u{227C}"),
    r"\succcurlyeq" => op("\u{227D}"),
    r"\precsim" => op("\u{227E}"),
    r"\succsim" => op("\u{227F}"),
    r"\doteq" => op("\u{2250}"),
    r"\doteqdot" => op("\u{2251}"),
    r"\risingdotseq" => op("\u{2253}"),
    r"\fallingdotseq" => op("\u{2252}"),
    r"\eqcirc" => op("\u{2256}"),
    r"\circeq" => op("\u{2257}"),
    r"\triangleq" => op("\u{225C}"),
    r"\bumpeq" => op("\u{224F}"),
    r"\Bumpeq" => op("\u{224E}"),
    r"\between" => op("\u{226C}"),
    r"\pitchfork" => op("\u{22D4}"),
    r"\multimap" => op("\u{22B8}"),
    r"\colon" => op(":"),
    r"\coloneqq" => op("\u{2254}"),
    r"\Coloneqq" => op("\u{2A74}"),
    r"\coloneq" => op("\u{2254}"),
    r"\eqqcolon" => op("\u{2255}"),
    r"\eqcolon" => op("\u{2255}"),
    r"\dblcolon" => op("\u{2237}"),
    r"\vartriangleleft" => op("\u{22B2}"),
    r"\vartriangleright" => op("\u{22B3}"),
    r"\trianglelefteq" => op("\u{22B4}"),
    r"\trianglerighteq" => op("\u{22B5}"),
    r"\ntriangleleft" => op("\u{22EA}"),
    r"\ntriangleright" => op("\u{22EB}"),
    r"\ntrianglelefteq" => op("\u{22EC}"),
    r"\ntrianglerighteq" => op("\u{22ED}"),
    r"\lhd" => op("\u{22B2}"),
    r"\rhd" => op("\u{22B3}"),
    r"\unlhd" => op("\u{22B4}"),
    r"\unrhd" => op("\u{22B5}"),
    // Arrows
    r"\leftarrow" => op("\u{2190}"),
    r"\gets" => op("\u{2190}"),
    r"\rightarrow" => op("\u{2192}"),
    r"\to" => op("\u{2192}"),
    r"\leftrightarrow" => op("\u{2194}"),
    r"\Leftarrow" => op("\u{21D0}"),
    r"\Rightarrow" => op("\u{21D2}"),
    r"\Leftrightarrow" => op("\u{21D4}"),
    r"\mapsto" => op("\u{21A6}"),
    r"\longleftarrow" => op("\u{27F5}"),
    r"\longrightarrow" => op("\u{27F6}"),
    r"\longleftrightarrow" => op("\u{27F7}"),
    r"\Longleftarrow" => op("\u{27F8}"),
    r"\Longrightarrow" => op("\u{27F9}"),
    r"\Longleftrightarrow" => op("\u{27FA}"),
    r"\longmapsto" => op("\u{27FC}"),
    r"\hookleftarrow" => op("\u{21A9}"),
    r"\hookrightarrow" => op("\u{21AA}"),
    r"\nearrow" => op("\u{2197}"),
    r"\searrow" => op("\u{2198}"),
    r"\swarrow" => op("\u{2199}"),
    r"\nwarrow" => op("\u{2196}"),
    r"\leftharpoonup" => op("\u{21BC}"),
    r"\rightharpoonup" => op("\u{21C0}"),
    r"\leftharpoondown" => op("\u{21BD}"),
    r"\rightharpoondown" => op("\u{21C1}"),
    r"\rightleftharpoons" => op("\u{21CC}"),
    r"\leftrightharpoons" => op("\u{21CB}"),
    r"\uparrow" => fence("\u{2191}"),
    r"\downarrow" => fence("\u{2193}"),
    r"\updownarrow" => fence("\u{2195}"),
    r"\Uparrow" => fence("\u{21D1}"),
    r"\Downarrow" => fence("\u{21D3}"),
    r"\Updownarrow" => fence("\u{21D5}"),
    // Dots
    r"\dots" => op("\u{2026}"),
    r"\ldots" => op("\u{2026}"),
    r"\cdots" => op("\u{22EF}"),
    r"\ddots" => op("\u{22F1}"),
    r"\udots" => op("\u{22F0}"),
    r"\vdots" => op("\u{22EE}"),
    // Delimiters
    r"\lbrace" => fence("{"),
    r"\{" => fence("{"),
    r"\rbrace" => fence("}"),
    r"\}" => fence("}"),
    r"\lbrack" => fence("["),
    r"\rbrack" => fence("]"),
    r"\vert" => fence("|"),
    r"\|" => fence("\u{2016}"),
    r"\Vert" => fence("\u{2016}"),
    r"\lfloor" => fence("\u{230A}"),
    r"\rfloor" => fence("\u{230B}"),
    r"\lceil" => fence("\u{2308}"),
    r"\rceil" => fence("\u{2309}"),
    r"\langle" => fence("\u{27E8}"),
    r"\lang" => fence("\u{27E8}"),
    r"\rangle" => fence("\u{27E9}"),
    r"\rang" => fence("\u{27E9}"),
    r"\llangle" => fence("\u{27EA}"),
    r"\rrangle" => fence("\u{27EB}"),
    r"\lmoustache" => op("\u{23B0}"),
    r"\rmoustache" => op("\u{23B1}"),
    r"\backslash" => op("\\"),
    // Prime runs (lexed from ASCII quotes)
    "'" => op("\u{2032}"),
    "''" => op("\u{2033}"),
    "'''" => op("\u{2034}"),
    "''''" => op("\u{2057}"),
    r"\prime" => op("\u{2032}"),
    // Shapes and suits
    r"\clubsuit" => op("\u{2663}"),
    r"\spadesuit" => op("\u{2660}"),
    r"\heartsuit" => op("\u{2661}"),
    r"\diamondsuit" => op("\u{2662}"),
    r"\Diamond" => op("\u{22C4}"),
    r"\diamond" => op("\u{2662}"),
    r"\square" => op("\u{25A1}"),
    r"\Box" => op("\u{25A1}"),
    r"\blacksquare" => op("\u{25AA}"),
    r"\qed" => op("\u{25AA}"),
    r"\triangle" => op("\u{25B5}"),
    r"\triangledown" => op("\u{25BF}"),
    r"\triangleleft" => op("\u{25C3}"),
    r"\triangleright" => op("\u{25B9}"),
    r"\blacktriangle" => op("\u{25B4}"),
    r"\blacktriangledown" => op("\u{25BE}"),
    r"\blacktriangleleft" => op("\u{25C2}"),
    r"\blacktriangleright" => op("\u{25B8}"),
    r"\bigtriangleup" => op("\u{25B3}"),
    r"\bigtriangledown" => op("\u{25BD}"),
    r"\bigstar" => op("\u{2605}"),
    r"\lozenge" => op("\u{25CA}"),
    r"\blacklozenge" => op("\u{29EB}"),
    r"\bigcirc" => op("\u{25CB}"),
    // Function names
    r"\sin" => id("sin"),
    r"\cos" => id("cos"),
    r"\tan" => id("tan"),
    r"\cot" => id("cot"),
    r"\sec" => id("sec"),
    r"\csc" => id("csc"),
    r"\arcsin" => id("arcsin"),
    r"\arccos" => id("arccos"),
    r"\arctan" => id("arctan"),
    r"\sinh" => id("sinh"),
    r"\cosh" => id("cosh"),
    r"\tanh" => id("tanh"),
    r"\coth" => id("coth"),
    r"\log" => id("log"),
    r"\ln" => id("ln"),
    r"\lg" => id("lg"),
    r"\exp" => id("exp"),
    r"\det" => id("det"),
    r"\dim" => id("dim"),
    r"\ker" => id("ker"),
    r"\arg" => id("arg"),
    r"\deg" => id("deg"),
    r"\gcd" => id("gcd"),
    r"\lim" => id("lim"),
    r"\sup" => id("sup"),
    r"\inf" => id("inf"),
    r"\max" => id("max"),
    r"\min" => id("min"),
};

/// Looks up a command (with backslash) or prime run in the symbol table.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SymbolInfo> {
    SYMBOLS.get(name)
}

/// Class override for a bare character, where the default Unicode
/// classification would pick the wrong token element.
#[must_use]
pub const fn char_class_override(ch: char) -> Option<TokenClass> {
    match ch {
        '\u{221E}' => Some(TokenClass::Number),
        '$' | '\u{2202}' | '\u{2205}' => Some(TokenClass::Identifier),
        _ => None,
    }
}

/// Default attributes for a bare character, in emission order.
#[must_use]
pub const fn char_attributes(ch: char) -> &'static [(&'static str, &'static str)] {
    match ch {
        '(' | ')' | '[' | ']' | '{' | '}' | '|' | '~' | '\u{2016}' | '\u{230A}' | '\u{230B}'
        | '\u{2308}' | '\u{2309}' | '\u{27E8}' | '\u{27E9}' | '\u{27EA}' | '\u{27EB}'
        | '\u{2191}' | '\u{2193}' | '\u{2195}' | '\u{21D1}' | '\u{21D3}' | '\u{21D5}' => FENCE,
        _ => NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_lookup() {
        let alpha = lookup(r"\alpha").unwrap();
        assert_eq!(alpha.text, "\u{03B1}");
        assert_eq!(alpha.class, TokenClass::Identifier);
        assert!(lookup(r"\nosuchcommand").is_none());
    }

    #[test]
    fn infinity_is_a_number() {
        assert_eq!(lookup(r"\infty").unwrap().class, TokenClass::Number);
        assert_eq!(char_class_override('\u{221E}'), Some(TokenClass::Number));
    }

    #[test]
    fn fences_carry_stretchy_false() {
        assert_eq!(lookup(r"\{").unwrap().attrs, FENCE);
        assert_eq!(char_attributes('('), FENCE);
        assert!(char_attributes('+').is_empty());
    }

    #[test]
    fn prime_runs() {
        assert_eq!(lookup("'").unwrap().text, "\u{2032}");
        assert_eq!(lookup("''''").unwrap().text, "\u{2057}");
    }
}
