use rulekeeper_docs::Font;
use rulekeeper_docs::layout::{TextStyle, wrap_lines};

fn unit_width(_: char) -> f32 {
    1.0
}

fn wrap(text: &str, width: f32) -> Vec<&str> {
    wrap_lines(text, width, unit_width).collect()
}

#[test]
fn breaks_at_the_last_space_that_fits() {
    assert_eq!(wrap("aaa bbb ccc", 7.0), ["aaa bbb", "ccc"]);
    assert_eq!(wrap("aaa bbb ccc", 11.0), ["aaa bbb ccc"]);
    assert_eq!(wrap("aaa bbb ccc", 3.0), ["aaa", "bbb", "ccc"]);
}

#[test]
fn long_token_is_hard_broken() {
    assert_eq!(wrap("abcdefghij", 4.0), ["abcd", "efgh", "ij"]);
    assert_eq!(wrap("a verylongword", 5.0), ["a", "veryl", "ongwo", "rd"]);
}

#[test]
fn character_wider_than_the_line_still_advances() {
    assert_eq!(wrap("ab", 0.5), ["a", "b"]);
}

#[test]
fn explicit_newlines_and_blank_lines() {
    assert_eq!(wrap("one\n\ntwo", 20.0), ["one", "", "two"]);
    assert_eq!(wrap("one\r\ntwo", 20.0), ["one", "two"]);
    assert_eq!(wrap("   \nx", 20.0), ["", "x"]);
}

#[test]
fn leading_indentation_is_kept() {
    assert_eq!(
        wrap("coding_standards:\n  naming:\n    - id: CS-NAME-001", 40.0),
        ["coding_standards:", "  naming:", "    - id: CS-NAME-001"]
    );
}

#[test]
fn lines_fit_and_reconstruct_the_text() {
    let style = TextStyle::new(Font::Helvetica, 9.0);
    let text = "Never concatenate SQL or user inputs - use parameterized queries. \
        Sanitize logs so that no sensitive data such as a PIN, password or token is written. \
        Async methods must end with the Async suffix and interfaces must be prefixed with I.";

    for width in [45.0f32, 98.0, 188.0] {
        let lines: Vec<&str> = wrap_lines(text, width, |ch| style.char_width(ch)).collect();
        assert!(!lines.is_empty());
        for line in &lines {
            let w = style.text_width(line);
            assert!(w <= width + 1e-3, "{line:?} is {w:.2}mm wide, limit {width}");
        }
        let rebuilt: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rebuilt, original, "width {width}");
    }
}

#[test]
fn wrapping_is_lazy() {
    let text = "word ".repeat(10_000);
    let mut lines = wrap_lines(&text, 12.0, unit_width);
    assert_eq!(lines.next(), Some("word word"));
    assert_eq!(lines.next(), Some("word word"));
}
