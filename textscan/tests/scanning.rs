// Scanner behavior through the public TextView API

use textscan::TextView;

#[test]
fn test_empty_view_scans_stay_empty() {
    let view = TextView::default();
    assert!(view.scan_for_character(b',').is_empty());
    assert!(view.scan_for_whitespace().is_empty());
    assert!(view.scan_for_non_whitespace().is_empty());
    assert!(view.scan_for_quote(b'"', true).is_empty());
    assert!(view.scan_past_string("*/").is_empty());
    assert!(view.scan_for_end_of_line().is_empty());
    assert!(view.scan_for_beginning_of_next_line().is_empty());
    assert!(view.skip_comments_and_whitespace().is_empty());
    assert!(view.expect("x").is_empty());

    let (rest, token) = view.get_token(b',');
    assert!(rest.is_empty() && token.is_empty());
    let (rest, token) = view.get_string(true);
    assert!(rest.is_empty() && token.is_empty());
}

#[test]
fn test_scan_for_character_lands_on_delimiter_or_end() {
    let view = TextView::from("alpha;beta");
    let at = view.scan_for_character(b';');
    assert_eq!(at, ";beta");
    // Already on the delimiter: no movement
    assert_eq!(at.scan_for_character(b';'), at);
    assert!(view.scan_for_character(b'#').is_empty());
}

#[test]
fn test_expect_is_all_or_nothing() {
    let view = TextView::from("return value;");
    assert_eq!(view.expect("return"), " value;");
    assert_eq!(view.expect("returns"), view);
    assert_eq!(view.expect("value"), view);
    assert_eq!(TextView::from("ret").expect("return"), "ret");
}

#[test]
fn test_get_token_leaves_delimiter() {
    let (rest, token) = TextView::from("  hello, world").get_token(b',');
    assert_eq!(token, "hello");
    assert_eq!(rest, ", world");
}

#[test]
fn test_whitespace_delimited_tokens() {
    let mut view = TextView::from("  move 10\t20\n");
    let mut tokens = Vec::new();
    loop {
        let (rest, token) = view.get_token_whitespace_delimited();
        if token.is_empty() {
            break;
        }
        tokens.push(token);
        view = rest;
    }
    assert_eq!(tokens, ["move", "10", "20"]);
}

#[test]
fn test_scan_for_whitespace_skips_the_whitespace_byte() {
    // Long-standing behavior: the remaining view starts after the whitespace
    assert_eq!(TextView::from("ab cd").scan_for_whitespace(), "cd");
    assert_eq!(TextView::from("ab  cd").scan_for_whitespace(), " cd");
    assert_eq!(TextView::from("abcd").scan_for_whitespace(), "");
}

#[test]
fn test_int_parse_stops_at_first_non_digit() {
    let (rest, value) = TextView::from("-123abc").get_i32();
    assert_eq!(value, -123);
    assert_eq!(rest, "abc");
}

#[test]
fn test_unterminated_comment_consumes_everything() {
    let view = TextView::from("/* unterminated");
    assert!(view.scan_past_comment().is_empty());
    assert!(view.skip_comments_and_whitespace().is_empty());
}

#[test]
fn test_split_keeps_interior_empty_segments() {
    let parts: Vec<_> = TextView::from("a,,b,").split(b',').collect();
    assert_eq!(parts, ["a", "", "b"]);
}

#[test]
fn test_quoted_strings() {
    let view = TextView::from(r#"set "a \"quoted\" word" 'x'"#);
    let (rest, text) = view.get_string(true);
    assert_eq!(text, r#"a \"quoted\" word"#);
    let (rest, single) = rest.get_string_quoted(b'\'', false);
    assert_eq!(single, "x");
    assert!(rest.is_empty());

    let (rest, text) = TextView::from("no quotes").get_string(true);
    assert!(text.is_empty());
    assert!(rest.is_empty());
}

#[test]
fn test_identifier_classes() {
    let (rest, ident) = TextView::from("  my_var2 = 1").get_token_alphanumeric();
    assert_eq!(ident, "my_var2");
    assert_eq!(rest, " = 1");

    let (_, path) = TextView::from("file-name.txt)").get_token_alphanumeric_ext("-.");
    assert_eq!(path, "file-name.txt");

    let (_, op) = TextView::from("<=>x").get_token_ext("<=>");
    assert_eq!(op, "<=>");

    let (rest, name) = TextView::from("ns::Type$1(").get_namespaced_token_alphanumeric(b':');
    assert_eq!(name, "ns::Type$1");
    assert_eq!(rest, "(");
}

#[test]
fn test_line_scanning() {
    let view = TextView::from("first line\r\n   second\nthird");
    assert_eq!(view.scan_for_end_of_line(), "   second\nthird");
    assert_eq!(view.scan_for_beginning_of_next_line(), "second\nthird");
    assert_eq!(view.scan_for_last_character_on_line(), "e\r\n   second\nthird");
}

#[test]
fn test_config_file_walk() {
    let input = "
        // window settings
        width  = 640
        height = 0x1E0   /* hex */
        title  = \"demo\"
    ";
    let mut view = TextView::from(input).skip_comments_and_whitespace();

    let (rest, key) = view.get_token_alphanumeric();
    assert_eq!(key, "width");
    let (rest, width) = rest.skip_comments_and_whitespace().expect("=").get_u32();
    assert_eq!(width, 640);
    view = rest.skip_comments_and_whitespace();

    let (rest, key) = view.get_token_alphanumeric();
    assert_eq!(key, "height");
    let rest = rest.skip_comments_and_whitespace().expect("=");
    let rest = rest.scan_for_non_whitespace().expect("0x");
    let (rest, height) = rest.get_hex();
    assert_eq!(height, 480);
    view = rest.skip_comments_and_whitespace();

    let (rest, key) = view.get_token_alphanumeric();
    assert_eq!(key, "title");
    let (rest, title) = rest.get_string(true);
    assert_eq!(title, "demo");
    assert!(rest.skip_comments_and_whitespace().is_empty());
}
