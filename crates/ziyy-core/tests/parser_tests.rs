//! End-to-end tests for markup rendering.

use ziyy_core::{
    Bindings, Compiler, Modifier, NamedColor, RESET, compile, rgb_bg, rgb_fg, style, style_with,
};

/// Show escape bytes as `␛` so snapshots stay readable.
fn visible(s: &str) -> String {
    s.replace('\x1b', "␛")
}

// ============================================================================
// Plain Text
// ============================================================================

#[test]
fn plain_text_passes_through() {
    for input in ["Hello World", "", "  spaced  ", "line one\nline two", "a > b", "日本語"] {
        assert_eq!(style(input).unwrap(), format!("{RESET}{input}{RESET}"));
    }
}

// ============================================================================
// Style Markers
// ============================================================================

#[test]
fn bold_tag() {
    insta::assert_snapshot!(visible(&style("<b>Hello</b>").unwrap()), @"␛[0m␛[1mHello␛[22m␛[0m");
}

#[test]
fn markers_use_fixed_off_codes_at_any_depth() {
    let out = style("<c.red><i><i>a</i>b</i></c>").unwrap();
    let expected = [
        RESET,
        NamedColor::Red.fg(),
        Modifier::Italic.on(),
        Modifier::Italic.on(),
        "a",
        Modifier::Italic.off(),
        "b",
        Modifier::Italic.off(),
        RESET,
        RESET,
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn whitespace_inside_tags_is_ignored() {
    assert_eq!(style("< b >x</ b >").unwrap(), style("<b>x</b>").unwrap());
    assert_eq!(
        style("<c . rgb ( 1 , 2 , 3 ) >x</c>").unwrap(),
        style("<c.rgb(1,2,3)>x</c>").unwrap()
    );
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn every_named_color() {
    for color in NamedColor::ALL {
        let fg = style(&format!("<c.{color}>")).unwrap();
        assert_eq!(fg, format!("{RESET}{}{RESET}", color.fg()));

        let bg = style(&format!("<x.{color}>")).unwrap();
        assert_eq!(bg, format!("{RESET}{}{RESET}", color.bg()));
    }
}

#[test]
fn rgb_colors() {
    assert_eq!(
        style("<c.rgb(255,0,0)>").unwrap(),
        format!("{RESET}{}{RESET}", rgb_fg(255, 0, 0))
    );
    assert_eq!(
        style("<x.rgb(0,150,75)>").unwrap(),
        format!("{RESET}{}{RESET}", rgb_bg(0, 150, 75))
    );
}

#[test]
fn rgb_out_of_range_is_passed_through() {
    insta::assert_snapshot!(visible(&style("<c.rgb(300,0,1000)>").unwrap()), @"␛[0m␛[38;2;300;0;1000m␛[0m");
}

#[test]
fn rgb_components_of_any_width() {
    insta::assert_snapshot!(
        visible(&style("<c.rgb(99999999999,0,0)>x</c>").unwrap()),
        @"␛[0m␛[38;2;99999999999;0;0mx␛[0m␛[0m"
    );
}

// ============================================================================
// Nesting And Restoration
// ============================================================================

#[test]
fn end_to_end_example() {
    insta::assert_snapshot!(
        visible(&style("<c.red>Hi<b> you</b></c>").unwrap()),
        @"␛[0m␛[31mHi␛[1m you␛[22m␛[0m␛[0m"
    );
}

#[test]
fn inner_color_close_restores_outer_color() {
    let out = style("<c.red>a<c.blue>b</c>c</c>").unwrap();
    let red = NamedColor::Red.fg();
    let blue = NamedColor::Blue.fg();
    assert_eq!(
        out,
        format!("{RESET}{red}a{blue}b{RESET}{red}c{RESET}{RESET}")
    );
}

#[test]
fn background_close_replays_everything_still_open() {
    let out = style("<c.green><u><x.white>a</x>b</u></c>").unwrap();
    let green = NamedColor::Green.fg();
    let white = NamedColor::White.bg();
    let underline = Modifier::Underline.on();
    assert_eq!(
        out,
        format!(
            "{RESET}{green}{underline}{white}a{RESET}{green}{underline}b{}{RESET}{RESET}",
            Modifier::Underline.off()
        )
    );
}

#[test]
fn same_category_reopened_closes_by_name() {
    let out = style("<x.red><x.rgb(1,2,3)>a</x></x>").unwrap();
    let red = NamedColor::Red.bg();
    assert_eq!(
        out,
        format!("{RESET}{red}{}a{RESET}{red}{RESET}{RESET}", rgb_bg(1, 2, 3))
    );
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn variable_tags() {
    let bindings = Bindings::new()
        .with("brand", rgb_fg(0, 150, 75))
        .with("dim", "\x1b[2m");
    let out = style_with("<brand>a<dim>b</dim>c</brand>", &bindings).unwrap();
    let brand = rgb_fg(0, 150, 75);
    assert_eq!(
        out,
        format!("{RESET}{brand}a\x1b[2mb{RESET}{brand}c{RESET}{RESET}")
    );
}

#[test]
fn color_keyword_as_variable() {
    let bindings = Bindings::new().with("green", rgb_fg(0, 150, 75));
    let out = style_with("<green>ok</green>", &bindings).unwrap();
    assert_eq!(out, format!("{RESET}{}ok{RESET}{RESET}", rgb_fg(0, 150, 75)));
}

#[test]
fn color_keyword_as_qualified_color_ignores_bindings() {
    let bindings = Bindings::new().with("green", rgb_fg(0, 150, 75));
    let out = style_with("<c.green>ok</c>", &bindings).unwrap();
    assert_eq!(out, format!("{RESET}{}ok{RESET}{RESET}", NamedColor::Green.fg()));
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn escaped_brackets_are_literal() {
    insta::assert_snapshot!(visible(&style(r"\<b\> <b>x</b>").unwrap()), @"␛[0m<b> ␛[1mx␛[22m␛[0m");
}

#[test]
fn escaped_backslash() {
    assert_eq!(style(r"a\\b").unwrap(), format!("{RESET}a\\b{RESET}"));
}

#[test]
fn escape_does_not_change_mode() {
    // After `\<` the scanner is still in text mode, so `c.red>` is plain text.
    assert_eq!(style(r"\<c.red>").unwrap(), format!("{RESET}<c.red>{RESET}"));
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn compile_streams_into_any_writer() {
    let mut out = std::io::Cursor::new(Vec::new());
    compile("<b>x</b>", &mut out, &Bindings::new()).unwrap();
    assert_eq!(out.into_inner(), style("<b>x</b>").unwrap().into_bytes());
}

#[test]
fn compiler_runs_are_independent() {
    let bindings = Bindings::new();
    let mut compiler = Compiler::new(Vec::new(), &bindings);
    compiler.compile("<c.red>unclosed").unwrap();
    // A fresh run starts with an empty stack, so `</c>` has nothing to close.
    assert!(compiler.compile("</c>").is_err());
}
