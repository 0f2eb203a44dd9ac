//! API-level properties: round-tripping, serialization stability, error
//! policy and the configuration surface.

use itex_mathml::{
    ExtractError, Settings, filter_string, get_tex_source, get_tex_source_from_markup, parse,
    to_mathml_string,
};

const ROUND_TRIP_SOURCES: &[&str] = &[
    "",
    "x",
    "a_b^c",
    r"\frac x y",
    r"\sqrt[3]{x+1}",
    "{x+y}",
    r"\begin{matrix} a & b \\ c & d \end{matrix}",
    "a < b",
    r"\mtext{2i\}fzx\\}",
    "\u{661}\u{662}\u{663}",
];

#[test]
fn annotation_round_trip() {
    for &source in ROUND_TRIP_SOURCES {
        for (display, rtl) in [(false, false), (true, false), (false, true), (true, true)] {
            let settings = Settings::builder().display(display).right_to_left(rtl).build();
            let document = parse(source, &settings).unwrap();
            assert_eq!(get_tex_source(&document).unwrap(), source, "tree: {source}");

            let markup = document.to_string();
            assert_eq!(
                get_tex_source_from_markup(&markup).unwrap(),
                source,
                "markup: {source}"
            );
        }
    }
}

#[test]
fn serialization_is_idempotent() {
    let settings = Settings::default();
    let document = parse(r"\frac{a+b}{c} \begin{pmatrix} 1 & 2 \end{pmatrix}", &settings).unwrap();
    assert_eq!(document.to_string(), document.to_string());
}

#[test]
fn script_order_independence() {
    let settings = Settings::default();
    assert_eq!(
        to_mathml_string("a_b^c", &settings).unwrap(),
        to_mathml_string("a^c_b", &settings).unwrap()
    );
}

#[test]
fn throw_on_error_aborts_with_line_number() {
    let strict = Settings::builder().throw_on_error(true).build();
    let err = to_mathml_string("x\n\\frac", &strict).unwrap_err();
    assert!(err.to_string().contains("Parse error on line 2"));
}

#[test]
fn lenient_mode_preserves_partial_output() {
    let settings = Settings::default();
    let output = to_mathml_string(r"a + \oops + b", &settings).unwrap();
    assert!(output.contains("<mi>a</mi>"));
    assert!(output.contains("<merror>"));
    assert!(output.contains("<mi>b</mi>"));
}

#[test]
fn safe_mode_drops_href_but_keeps_content() {
    let unsafe_settings = Settings::default();
    let safe_settings = Settings::builder().safe_mode(true).build();
    let source = r"\href{javascript:alert(1)}{x}";

    let unsafe_output = to_mathml_string(source, &unsafe_settings).unwrap();
    assert!(unsafe_output.contains("href="));

    let safe_output = to_mathml_string(source, &safe_settings).unwrap();
    assert!(!safe_output.contains("href="));
    assert!(safe_output.contains("<mi>x</mi>"));
}

#[test]
fn mode_toggles_are_isolated() {
    let source = r"\href{http://example.org}{x}";
    let unsafe_settings = Settings::default();
    let before = to_mathml_string(source, &unsafe_settings).unwrap();

    itex_mathml::set_safe_mode(true);
    let safe = itex_mathml::to_mathml_string_with(source, false, false, false).unwrap();
    assert!(!safe.contains("href="));
    itex_mathml::set_safe_mode(false);

    let after = itex_mathml::to_mathml_string_with(source, false, false, false).unwrap();
    assert_eq!(before, after);
}

#[test]
fn identifier_mode_changes_letter_grouping() {
    let per_letter = Settings::default();
    let merged = Settings::builder().itex_identifier_mode(true).build();
    assert!(
        to_mathml_string("xyz", &per_letter)
            .unwrap()
            .contains("<mi>x</mi><mi>y</mi><mi>z</mi>")
    );
    assert!(to_mathml_string("xyz", &merged).unwrap().contains("<mi>xyz</mi>"));
}

#[test]
fn filter_string_replaces_delimited_fragments() {
    let settings = Settings::default();
    let expected = format!("blah {} blah", to_mathml_string("a", &settings).unwrap());
    assert_eq!(filter_string("blah $a$ blah", &settings), expected);
}

#[test]
fn filter_string_display_forms() {
    let settings = Settings::default();
    assert!(filter_string("$$a$$", &settings).contains("display=\"block\""));
    assert!(filter_string(r"\[a\]", &settings).contains("display=\"block\""));
    assert!(!filter_string(r"\(a\)", &settings).contains("display=\"block\""));
}

#[test]
fn extraction_failure_is_recoverable() {
    assert!(matches!(
        get_tex_source_from_markup("<math><mrow/></math>"),
        Err(ExtractError::NotAnnotated)
    ));
}

#[test]
fn display_attribute_only_in_display_mode() {
    let inline = to_mathml_string("x", &Settings::default()).unwrap();
    assert!(!inline.contains("display"));
    let display = Settings::builder().display(true).build();
    assert!(
        to_mathml_string("x", &display)
            .unwrap()
            .contains("display=\"block\"")
    );
}

#[test]
fn deep_nesting_is_reported_not_crashed() {
    let depth = 2000;
    let source = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
    let lenient = Settings::default();
    let output = to_mathml_string(&source, &lenient).unwrap();
    assert!(output.contains("Too much nesting"));
}
