//! Output expectations for the translation engine, exercising the full
//! pipeline through `to_mathml_string`.

use itex_mathml::{Settings, to_mathml_string};

fn render(source: &str) -> String {
    to_mathml_string(source, &Settings::default()).unwrap()
}

fn wrap(content: &str, annotation: &str) -> String {
    format!(
        "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"><semantics>{content}\
         <annotation encoding=\"TeX\">{annotation}</annotation></semantics></math>"
    )
}

#[track_caller]
fn check(source: &str, content: &str, annotation: &str) {
    assert_eq!(render(source), wrap(content, annotation), "source: {source}");
}

/// The annotation is the source itself whenever it needs no escaping.
#[track_caller]
fn check_plain(source: &str, content: &str) {
    check(source, content, source);
}

#[test]
fn empty_content() {
    check_plain("", "<mrow/>");
}

#[test]
fn numbers() {
    check_plain("1", "<mn>1</mn>");
    check_plain("123", "<mn>123</mn>");
    check_plain("01234.56789", "<mn>01234.56789</mn>");
}

#[test]
fn arabic_indic_numbers() {
    check_plain(
        "\u{661}\u{662}\u{663}\u{664}\u{66B}\u{665}\u{666}\u{667}",
        "<mn>\u{661}\u{662}\u{663}\u{664}\u{66B}\u{665}\u{666}\u{667}</mn>",
    );
}

#[test]
fn variables() {
    check_plain("x", "<mi>x</mi>");
    check_plain("xyz", "<mrow><mi>x</mi><mi>y</mi><mi>z</mi></mrow>");
    check_plain("2xy", "<mrow><mn>2</mn><mi>x</mi><mi>y</mi></mrow>");
}

#[test]
fn element_escape_hatches() {
    check_plain(r"\mn{TWO}", "<mn>TWO</mn>");
    check_plain(r"\ms{x}", "<ms>x</ms>");
    check(
        r"\ms[<2][&\]x]{a&b}",
        "<ms lquote=\"&lt;2\" rquote=\"&amp;]x\">a&amp;b</ms>",
        r"\ms[&lt;2][&amp;\]x]{a&amp;b}",
    );
}

#[test]
fn text_whitespace_collapses() {
    check_plain(r"\mtext{  x   y  }", "<mtext>x y</mtext>");
}

#[test]
fn text_escapes() {
    check_plain(r"\mtext{2i\}fzx\\}", r"<mtext>2i}fzx\</mtext>");
}

#[test]
fn escaped_characters() {
    check(
        r"\& \% \$",
        "<mrow><mo>&amp;</mo><mo>%</mo><mi>$</mi></mrow>",
        r"\&amp; \% \$",
    );
}

#[test]
fn fractions() {
    check_plain(r"\frac x y", "<mfrac><mi>x</mi><mi>y</mi></mfrac>");
    check_plain(
        r"\binom a b",
        "<mrow><mo>(</mo><mfrac linethickness=\"0\"><mi>a</mi><mi>b</mi></mfrac><mo>)</mo></mrow>",
    );
}

#[test]
fn roots() {
    check_plain(r"\sqrt x", "<msqrt><mi>x</mi></msqrt>");
    check_plain(r"\sqrt[3]x", "<mroot><mi>x</mi><mn>3</mn></mroot>");
    check_plain(r"\root 3 x", "<mroot><mi>x</mi><mn>3</mn></mroot>");
}

#[test]
fn nested_optional_root_arguments() {
    check_plain(
        r"\sqrt[\sqrt[\frac{1}{2}]\frac 3 4]\frac 5 6",
        "<mroot><mfrac><mn>5</mn><mn>6</mn></mfrac><mroot><mfrac><mn>3</mn><mn>4</mn></mfrac>\
         <mfrac><mn>1</mn><mn>2</mn></mfrac></mroot></mroot>",
    );
}

#[test]
fn href() {
    check_plain(
        r"\href{http://www.myurl.org}{\frac a b}",
        "<mrow href=\"http://www.myurl.org\"><mfrac><mi>a</mi><mi>b</mi></mfrac></mrow>",
    );
}

#[test]
fn operators_and_rows() {
    check_plain("+", "<mo>+</mo>");
    check_plain("+2", "<mrow><mo>+</mo><mn>2</mn></mrow>");
    check_plain(
        "a+b+c",
        "<mrow><mi>a</mi><mo>+</mo><mi>b</mi><mo>+</mo><mi>c</mi></mrow>",
    );
    check_plain(
        r"3 + \frac x y + \sqrt z",
        "<mrow><mn>3</mn><mo>+</mo><mfrac><mi>x</mi><mi>y</mi></mfrac><mo>+</mo>\
         <msqrt><mi>z</mi></msqrt></mrow>",
    );
}

#[test]
fn scripts() {
    check_plain(
        r"a_b^c + a^c_b + a_b + a^c",
        "<mrow><msubsup><mi>a</mi><mi>b</mi><mi>c</mi></msubsup><mo>+</mo>\
         <msubsup><mi>a</mi><mi>b</mi><mi>c</mi></msubsup><mo>+</mo>\
         <msub><mi>a</mi><mi>b</mi></msub><mo>+</mo>\
         <msup><mi>a</mi><mi>c</mi></msup></mrow>",
    );
}

#[test]
fn greek_letters() {
    check_plain(
        r"\alpha \beta \gamma \delta \zeta \eta \theta \iota \kappa \lambda \mu \nu \xi \pi \rho \sigma \tau \upsilon \chi \psi \omega \backepsilon \varkappa \varpi \varrho \varsigma \vartheta \varepsilon \phi \varphi",
        "<mrow><mi>\u{3B1}</mi><mi>\u{3B2}</mi><mi>\u{3B3}</mi><mi>\u{3B4}</mi><mi>\u{3B6}</mi>\
         <mi>\u{3B7}</mi><mi>\u{3B8}</mi><mi>\u{3B9}</mi><mi>\u{3BA}</mi><mi>\u{3BB}</mi>\
         <mi>\u{3BC}</mi><mi>\u{3BD}</mi><mi>\u{3BE}</mi><mi>\u{3C0}</mi><mi>\u{3C1}</mi>\
         <mi>\u{3C3}</mi><mi>\u{3C4}</mi><mi>\u{3C5}</mi><mi>\u{3C7}</mi><mi>\u{3C8}</mi>\
         <mi>\u{3C9}</mi><mo>\u{3F6}</mo><mi>\u{3F0}</mi><mi>\u{3D6}</mi><mi>\u{3F1}</mi>\
         <mi>\u{3C2}</mi><mi>\u{3D1}</mi><mi>\u{3B5}</mi><mi>\u{3D5}</mi><mi>\u{3C6}</mi></mrow>",
    );
}

#[test]
fn letterlike_identifiers() {
    check_plain(
        r"\aleph \beth \eth \ell \hbar \Im \imath \jmath \wp \Re",
        "<mrow><mi>\u{2135}</mi><mi>\u{2136}</mi><mi>\u{F0}</mi><mi>\u{2113}</mi>\
         <mi>\u{210F}</mi><mi>\u{2111}</mi><mi>\u{131}</mi><mi>\u{237}</mi>\
         <mi>\u{2118}</mi><mi>\u{211C}</mi></mrow>",
    );
}

#[test]
fn empty_and_redundant_groups() {
    check_plain("{}", "<mrow/>");
    check_plain("{{{x}}}", "<mi>x</mi>");
}

#[test]
fn left_right() {
    check_plain(
        r"\left( x \right)",
        "<mrow><mo>(</mo><mi>x</mi><mo>)</mo></mrow>",
    );
}

#[test]
fn mathvariant_single_char_remap() {
    check_plain(r"\mathbb{x}", "<mi>\u{1D569}</mi>");
}

#[test]
fn big_delimiters() {
    check_plain(
        r"\big(\bigr(\Big(\Bigr(\bigg(\biggr(\Bigg(\Biggr(\bigl(\Bigl(\biggl(\Biggl(",
        "<mrow><mo maxsize=\"1.2em\" minsize=\"1.2em\">(</mo><mo maxsize=\"1.2em\" minsize=\"1.2em\">(</mo>\
         <mo maxsize=\"1.8em\" minsize=\"1.8em\">(</mo><mo maxsize=\"1.8em\" minsize=\"1.8em\">(</mo>\
         <mo maxsize=\"2.4em\" minsize=\"2.4em\">(</mo><mo maxsize=\"2.4em\" minsize=\"2.4em\">(</mo>\
         <mo maxsize=\"3em\" minsize=\"3em\">(</mo><mo maxsize=\"3em\" minsize=\"3em\">(</mo>\
         <mo maxsize=\"1.2em\" minsize=\"1.2em\">(</mo><mo maxsize=\"1.8em\" minsize=\"1.8em\">(</mo>\
         <mo maxsize=\"2.4em\" minsize=\"2.4em\">(</mo><mo maxsize=\"3em\" minsize=\"3em\">(</mo></mrow>",
    );
}

#[test]
fn laps() {
    check_plain(
        r"\mathrlap{x}, \mathllap{y}, \mathclap{y}",
        "<mrow><mpadded width=\"0em\"><mi>x</mi></mpadded><mo>,</mo>\
         <mpadded width=\"0em\" lspace=\"-100%width\"><mi>y</mi></mpadded><mo>,</mo>\
         <mpadded width=\"0em\" lspace=\"-50%width\"><mi>y</mi></mpadded></mrow>",
    );
}

#[test]
fn space_macro() {
    check_plain(
        r"\space{1}{2}{3}",
        "<mspace height=\".1ex\" depth=\".2ex\" width=\".3em\"/>",
    );
}

#[test]
fn raisebox() {
    check_plain(
        r"\mathraisebox{1em}x",
        "<mpadded voffset=\"1em\" height=\"+1em\"><mi>x</mi></mpadded>",
    );
    check_plain(
        r"\mathraisebox{-1em}x",
        "<mpadded voffset=\"-1em\" height=\"0pt\" depth=\"+1em\"><mi>x</mi></mpadded>",
    );
    check_plain(
        r"\mathraisebox{-1em}[2em]x",
        "<mpadded voffset=\"-1em\" height=\"2em\" depth=\"+1em\"><mi>x</mi></mpadded>",
    );
    check_plain(
        r"\mathraisebox{1em}[2em][3em]x",
        "<mpadded voffset=\"1em\" height=\"2em\" depth=\"3em\"><mi>x</mi></mpadded>",
    );
}

#[test]
fn raisebox_invalid_length_recovers_to_zero() {
    check_plain(
        r"\mathraisebox{invalid}x",
        "<mpadded voffset=\"0pt\" height=\"+0pt\"><mi>x</mi></mpadded>",
    );
}

#[test]
fn actions() {
    check_plain(
        r"\tooltip{a}b",
        "<maction actiontype=\"tooltip\"><mi>b</mi><mtext>a</mtext></maction>",
    );
    check_plain(
        r"\statusline{a}b",
        "<maction actiontype=\"statusline\"><mi>b</mi><mtext>a</mtext></maction>",
    );
    check_plain(
        r"\toggle a b c \endtoggle",
        "<maction actiontype=\"toggle\"><mi>a</mi><mi>b</mi><mi>c</mi></maction>",
    );
    check_plain(
        r"\toggle a b",
        "<maction actiontype=\"toggle\" selection=\"2\"><mi>a</mi><mi>b</mi></maction>",
    );
}

#[test]
fn tensors() {
    let expected = "<mmultiscripts><mi>x</mi><mi>b</mi><mi>c</mi><mi>d</mi><mi>e</mi>\
                    <none/><mi>f</mi></mmultiscripts>";
    check_plain(r"\tensor x_b^c_d^e_^f", expected);
    check_plain(r"\tensor x{_b^c_d^e_^f}", expected);
}

#[test]
fn multiscripts() {
    check_plain(
        r"\multiscripts{ }x{^1_2_3^4_^5}",
        "<mmultiscripts><mi>x</mi><none/><mn>1</mn><mn>2</mn><none/><mn>3</mn><mn>4</mn>\
         <none/><mn>5</mn></mmultiscripts>",
    );
    check_plain(
        r"\multiscripts{^1_2_3^4_^5}x{ }",
        "<mmultiscripts><mi>x</mi><mprescripts/><none/><mn>1</mn><mn>2</mn><none/>\
         <mn>3</mn><mn>4</mn><none/><mn>5</mn></mmultiscripts>",
    );
    check_plain(
        r"\multiscripts{^1_2_3^4_^5}x{^1_2_3^4_^5}",
        "<mmultiscripts><mi>x</mi><none/><mn>1</mn><mn>2</mn><none/><mn>3</mn><mn>4</mn>\
         <none/><mn>5</mn><mprescripts/><none/><mn>1</mn><mn>2</mn><none/><mn>3</mn>\
         <mn>4</mn><none/><mn>5</mn></mmultiscripts>",
    );
}

#[test]
fn matrix_environment() {
    check(
        r"\begin{matrix} a & b & c \\ d & e & f \\ g & h & i \end{matrix}",
        "<mtable rowspacing=\"0.5ex\"><mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd>\
         <mtd><mi>c</mi></mtd></mtr><mtr><mtd><mi>d</mi></mtd><mtd><mi>e</mi></mtd>\
         <mtd><mi>f</mi></mtd></mtr><mtr><mtd><mi>g</mi></mtd><mtd><mi>h</mi></mtd>\
         <mtd><mi>i</mi></mtd></mtr></mtable>",
        r"\begin{matrix} a &amp; b &amp; c \\ d &amp; e &amp; f \\ g &amp; h &amp; i \end{matrix}",
    );
}

#[test]
fn pmatrix_environment() {
    check(
        r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}",
        "<mrow><mo>(</mo><mtable rowspacing=\"0.5ex\"><mtr><mtd><mi>a</mi></mtd>\
         <mtd><mi>b</mi></mtd></mtr><mtr><mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr>\
         </mtable><mo>)</mo></mrow>",
        r"\begin{pmatrix} a &amp; b \\ c &amp; d \end{pmatrix}",
    );
}

#[test]
fn array_environment() {
    check(
        r"\begin{array}{clr} a & b & c \\ d & e & f \end{array}",
        "<mtable rowspacing=\"0.5ex\" columnalign=\"center left right\"><mtr>\
         <mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd><mtd><mi>c</mi></mtd></mtr><mtr>\
         <mtd><mi>d</mi></mtd><mtd><mi>e</mi></mtd><mtd><mi>f</mi></mtd></mtr></mtable>",
        r"\begin{array}{clr} a &amp; b &amp; c \\ d &amp; e &amp; f \end{array}",
    );
    check(
        r"\begin{array}[t]{clr} a & b \end{array}",
        "<mtable rowspacing=\"0.5ex\" align=\"axis 1\" columnalign=\"center left right\">\
         <mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr></mtable>",
        r"\begin{array}[t]{clr} a &amp; b \end{array}",
    );
}

#[test]
fn row_options_scope_to_their_row() {
    check(
        r"\begin{matrix}\rowopts{\colalign{left right}\rowalign{top bottom}} a & b \\ \rowopts{\rowalign{bottom top}\colalign{right left}} c & d \end{matrix}",
        "<mtable rowspacing=\"0.5ex\"><mtr columnalign=\"left right\" rowalign=\"top bottom\">\
         <mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
         <mtr rowalign=\"bottom top\" columnalign=\"right left\">\
         <mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr></mtable>",
        r"\begin{matrix}\rowopts{\colalign{left right}\rowalign{top bottom}} a &amp; b \\ \rowopts{\rowalign{bottom top}\colalign{right left}} c &amp; d \end{matrix}",
    );
}

#[test]
fn cell_options_scope_to_their_cell() {
    check(
        r"\begin{matrix} \cellopts{\colalign{left}\rowalign{top}} a & \cellopts{\rowalign{bottom}\colalign{right}} b \end{matrix}",
        "<mtable rowspacing=\"0.5ex\"><mtr><mtd columnalign=\"left\" rowalign=\"top\">\
         <mi>a</mi></mtd><mtd rowalign=\"bottom\" columnalign=\"right\"><mi>b</mi></mtd>\
         </mtr></mtable>",
        r"\begin{matrix} \cellopts{\colalign{left}\rowalign{top}} a &amp; \cellopts{\rowalign{bottom}\colalign{right}} b \end{matrix}",
    );
}

#[test]
fn cell_spans_and_empty_cells() {
    check(
        r"\begin{matrix} \cellopts{\rowspan{2}\colspan{3}} a & \\ & b & c \end{matrix}",
        "<mtable rowspacing=\"0.5ex\"><mtr><mtd rowspan=\"2\" colspan=\"3\"><mi>a</mi></mtd>\
         <mtd></mtd></mtr><mtr><mtd></mtd><mtd><mi>b</mi></mtd><mtd><mi>c</mi></mtd></mtr>\
         </mtable>",
        r"\begin{matrix} \cellopts{\rowspan{2}\colspan{3}} a &amp; \\ &amp; b &amp; c \end{matrix}",
    );
}

#[test]
fn array_shorthand() {
    check(
        r"\array{ a & b \\ c & d }",
        "<mtable><mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr><mtr>\
         <mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr></mtable>",
        r"\array{ a &amp; b \\ c &amp; d }",
    );
}

#[test]
fn array_options() {
    check(
        r"\array{ \arrayopts{\colalign{left right right}\rowalign{top bottom bottom}\align{center}\padding{1em}\equalrows{true}\equalcols{true}\rowlines{dashed}\collines{dashed}\frame{solid}} a & b & c}",
        "<mtable columnalign=\"left right right\" rowalign=\"top bottom bottom\" \
         align=\"center\" rowspacing=\"1em\" columnspacing=\"1em\" equalrows=\"true\" \
         equalcolumns=\"true\" rowlines=\"dashed\" columnlines=\"dashed\" frame=\"solid\">\
         <mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd><mtd><mi>c</mi></mtd></mtr></mtable>",
        r"\array{ \arrayopts{\colalign{left right right}\rowalign{top bottom bottom}\align{center}\padding{1em}\equalrows{true}\equalcols{true}\rowlines{dashed}\collines{dashed}\frame{solid}} a &amp; b &amp; c}",
    );
}

#[test]
fn extensible_arrows() {
    check_plain(
        r"\xLeftarrow{x+y}",
        "<mover><mo>\u{21D0}</mo><mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow></mover>",
    );
    check_plain(
        r"\xLeftarrow[x+y]{}",
        "<munder><mo>\u{21D0}</mo><mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow></munder>",
    );
    check_plain(
        r"\xLeftarrow[x+y]{a+b}",
        "<munderover><mo>\u{21D0}</mo><mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow>\
         <mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow></munderover>",
    );
}

#[test]
fn infinity_is_numeric() {
    check_plain(
        "\\infty \\infinity \u{221E}",
        "<mrow><mn>\u{221E}</mn><mn>\u{221E}</mn><mn>\u{221E}</mn></mrow>",
    );
}

#[test]
fn delimiter_characters() {
    check_plain(
        r"( [ ) ] \lbrace \{ \rbrace \} \vert | \Vert \| \setminus \backslash \smallsetminus \sslash \lfloor \lceil \lmoustache \lang \langle \llangle \rceil \rmoustache \rang \rangle \rrangle / \uparrow \downarrow \updownarrow",
        "<mrow><mo stretchy=\"false\">(</mo><mo stretchy=\"false\">[</mo>\
         <mo stretchy=\"false\">)</mo><mo stretchy=\"false\">]</mo>\
         <mo stretchy=\"false\">{</mo><mo stretchy=\"false\">{</mo>\
         <mo stretchy=\"false\">}</mo><mo stretchy=\"false\">}</mo>\
         <mo stretchy=\"false\">|</mo><mo stretchy=\"false\">|</mo>\
         <mo stretchy=\"false\">\u{2016}</mo><mo stretchy=\"false\">\u{2016}</mo>\
         <mo>\u{2216}</mo><mo>\\</mo><mo>\u{2216}</mo><mo>\u{2AFD}</mo>\
         <mo stretchy=\"false\">\u{230A}</mo><mo stretchy=\"false\">\u{2308}</mo>\
         <mo>\u{23B0}</mo><mo stretchy=\"false\">\u{27E8}</mo>\
         <mo stretchy=\"false\">\u{27E8}</mo><mo stretchy=\"false\">\u{27EA}</mo>\
         <mo stretchy=\"false\">\u{2309}</mo><mo>\u{23B1}</mo>\
         <mo stretchy=\"false\">\u{27E9}</mo><mo stretchy=\"false\">\u{27E9}</mo>\
         <mo stretchy=\"false\">\u{27EB}</mo><mo>/</mo>\
         <mo stretchy=\"false\">\u{2191}</mo><mo stretchy=\"false\">\u{2193}</mo>\
         <mo stretchy=\"false\">\u{2195}</mo></mrow>",
    );
}

#[test]
fn punctuation_operators() {
    check_plain(
        r". - + \# , : ! = ~ ; ? # ` *",
        "<mrow><mo>.</mo><mo>-</mo><mo>+</mo><mo>#</mo><mo>,</mo><mo>:</mo><mo>!</mo>\
         <mo>=</mo><mo stretchy=\"false\">~</mo><mo>;</mo><mo>?</mo><mo>#</mo><mo>`</mo>\
         <mo>*</mo></mrow>",
    );
}

#[test]
fn primes() {
    check(
        r"\prime ' '' ''' ''''",
        "<mrow><mo>\u{2032}</mo><mo>\u{2032}</mo><mo>\u{2033}</mo><mo>\u{2034}</mo>\
         <mo>\u{2057}</mo></mrow>",
        r"\prime ' '' ''' ''''",
    );
}

#[test]
fn omicron_epsilon_cdot() {
    check_plain(
        r"\omicron \epsilon \cdot",
        "<mrow><mi>\u{2134}</mi><mi>\u{3F5}</mi><mo>\u{22C5}</mo></mrow>",
    );
}

#[test]
fn malformed_input_renders_inline_error() {
    let output = render(r"\frac");
    assert!(output.contains("<merror>"));
    assert!(output.contains("Parse error on line 1"));
    // The annotation still carries the untranslated source.
    assert!(output.contains("<annotation encoding=\"TeX\">\\frac</annotation>"));
}
