use hashdown_core::{parse, parse_lines, HashdownError, Key, Value};

/// Build a keyed container from `(key, value)` pairs.
fn obj<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    Value::Container(pairs.into_iter().collect())
}

fn s(text: &str) -> Value {
    Value::from(text)
}

fn structure_error(input: &str) -> (usize, String) {
    match parse(input) {
        Err(HashdownError::Structure { line, text }) => (line, text),
        other => panic!("expected a structure error for {input:?}, got {other:?}"),
    }
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn parse_empty_document() {
    assert_eq!(parse("").unwrap(), s(""));
}

#[test]
fn parse_only_blank_lines() {
    assert_eq!(parse("\n\n   \n").unwrap(), s(""));
}

#[test]
fn parse_root_scalar() {
    assert_eq!(parse("lorem ipsum").unwrap(), s("lorem ipsum"));
}

#[test]
fn parse_root_scalar_multiline() {
    assert_eq!(parse("lorem\n  ipsum  \n\ndolor").unwrap(), s("lorem\nipsum\ndolor"));
}

#[test]
fn parse_root_literal() {
    let input = "```\n# lorem ipsum\n\n## lorem ipsum\n```";
    assert_eq!(parse(input).unwrap(), s("# lorem ipsum\n\n## lorem ipsum"));
}

#[test]
fn parse_literal_keeps_indentation() {
    assert_eq!(parse("```\n  indented\n\ttab\n```").unwrap(), s("  indented\n\ttab"));
}

#[test]
fn parse_literal_only_closes_on_same_width() {
    let input = "`````\n```\n````\ninside\n``````\n`````";
    assert_eq!(parse(input).unwrap(), s("```\n````\ninside\n``````"));
}

#[test]
fn parse_unterminated_literal_runs_to_end() {
    assert_eq!(parse("# a\n```\n# b\n- c").unwrap(), obj([("a", s("# b\n- c"))]));
}

#[test]
fn parse_short_backtick_runs_are_text() {
    assert_eq!(parse("# code\n``x``\n`y`").unwrap(), obj([("code", s("``x``\n`y`"))]));
}

#[test]
fn parse_markers_without_space_are_text() {
    assert_eq!(parse("# a\n#hashtag\n-dash\n#-").unwrap(), obj([("a", s("#hashtag\n-dash\n#-"))]));
}

// ============================================================================
// Headers
// ============================================================================

#[test]
fn parse_single_key() {
    assert_eq!(parse("# name\nAda").unwrap(), obj([("name", s("Ada"))]));
}

#[test]
fn parse_key_without_value() {
    assert_eq!(
        parse("# a\n# b\nx").unwrap(),
        obj([("a", s("")), ("b", s("x"))])
    );
}

#[test]
fn parse_nested_keys() {
    let input = "# person\n## name\nAda\n\n## born\n1815\n\n# kind\nhuman";
    let expected = obj([
        ("person", obj([("name", s("Ada")), ("born", s("1815"))])),
        ("kind", s("human")),
    ]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_climbs_several_levels_at_once() {
    let input = "# a\n## b\n### c\nx\n# d\ny";
    let expected = obj([
        ("a", obj([("b", obj([("c", s("x"))]))])),
        ("d", s("y")),
    ]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_key_text_is_verbatim_after_first_space() {
    let value = parse("#  spaced key \nv").unwrap();
    assert_eq!(value.get(" spaced key "), Some(&s("v")));
}

#[test]
fn parse_indented_markers() {
    assert_eq!(parse("  # a\n  x").unwrap(), obj([("a", s("x"))]));
}

#[test]
fn parse_duplicate_key_keeps_last_value_in_first_position() {
    let value = parse("# a\n1\n# b\n2\n# a\n3").unwrap();
    let container = value.as_container().unwrap();
    let keys: Vec<String> = container.keys().map(Key::to_string).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(value.get("a"), Some(&s("3")));
}

#[test]
fn parse_numeric_header_is_index_key() {
    let value = parse("# 0\nzero\n# 1\none").unwrap();
    assert_eq!(value, Value::list(["zero", "one"]));
    assert_eq!(value.get(1u64), Some(&s("one")));
}

#[test]
fn parse_non_canonical_number_is_name() {
    let value = parse("# 007\nbond").unwrap();
    let key = value.as_container().unwrap().keys().next().cloned();
    assert_eq!(key, Some(Key::Name("007".to_string())));
}

#[test]
fn parse_bare_headers_auto_number() {
    assert_eq!(parse("#\nfirst\n\n#\nsecond").unwrap(), Value::list(["first", "second"]));
}

#[test]
fn parse_bare_header_continues_after_largest_index() {
    let value = parse("# 3\nthree\n# name\nx\n#\nnext").unwrap();
    let expected = Value::Container(
        [
            (Key::Index(3), s("three")),
            (Key::from("name"), s("x")),
            (Key::Index(4), s("next")),
        ]
        .into_iter()
        .collect(),
    );
    assert_eq!(value, expected);
}

#[test]
fn parse_nested_bare_headers() {
    let input = "#\n## task\nwrite\n\n#\n## task\nship";
    let expected = Value::list([obj([("task", s("write"))]), obj([("task", s("ship"))])]);
    assert_eq!(parse(input).unwrap(), expected);
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn parse_root_list() {
    assert_eq!(parse("- a\n- b\n- c").unwrap(), Value::list(["a", "b", "c"]));
}

#[test]
fn parse_list_under_key() {
    let value = parse("# langs\n- en\n- fr\n\n# name\nAda").unwrap();
    assert_eq!(
        value,
        obj([("langs", Value::list(["en", "fr"])), ("name", s("Ada"))])
    );
}

#[test]
fn parse_empty_list_items() {
    assert_eq!(parse("- a\n-\n- c").unwrap(), Value::list(["a", "", "c"]));
}

#[test]
fn parse_list_item_zero_is_text() {
    assert_eq!(parse("- 0\n- 1").unwrap(), Value::list(["0", "1"]));
}

#[test]
fn parse_list_item_continuation_lines() {
    assert_eq!(
        parse("- one\ntwo\n- three").unwrap(),
        Value::list(["one\ntwo", "three"])
    );
}

#[test]
fn parse_list_item_literal() {
    let input = "-\n```\n- not an item\n```\n\n- real";
    assert_eq!(parse(input).unwrap(), Value::list(["- not an item", "real"]));
}

#[test]
fn parse_nested_dash_lists() {
    let input = "-\n-- a\n-- b\n- c\n-\n-- d";
    let expected = Value::list([
        Value::list(["a", "b"]),
        s("c"),
        Value::list(["d"]),
    ]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_list_returns_from_deep_nesting() {
    let input = "-\n--\n--- x\n- y";
    let expected = Value::list([Value::list([Value::list(["x"])]), s("y")]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_list_under_nested_header() {
    let input = "# a\n## b\n- y\n- z";
    let expected = obj([("a", obj([("b", Value::list(["y", "z"]))]))]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_header_after_list_returns_to_header_depth() {
    let input = "# a\n## b\n- y\n## c\nz";
    let expected = obj([(
        "a",
        obj([("b", Value::list(["y"])), ("c", s("z"))]),
    )]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_headers_inside_bare_header_items() {
    let input = "# items\n##\n### name\nfirst\n\n##\n### name\nsecond";
    let expected = obj([(
        "items",
        Value::list([obj([("name", s("first"))]), obj([("name", s("second"))])]),
    )]);
    assert_eq!(parse(input).unwrap(), expected);
}

// ============================================================================
// Line endings and line sources
// ============================================================================

#[test]
fn parse_crlf_line_endings() {
    assert_eq!(
        parse("# a\r\nx\r\n\r\n# b\r\n- y\r\n").unwrap(),
        obj([("a", s("x")), ("b", Value::list(["y"]))])
    );
}

#[test]
fn parse_crlf_literal_keeps_carriage_returns() {
    assert_eq!(parse("# a\r\n```\r\nx\r\ny\r\n```\r\n").unwrap(), obj([("a", s("x\r\ny\r"))]));
    assert_eq!(parse("# a\n```\nx\r\n```\n").unwrap(), obj([("a", s("x\r"))]));
}

#[test]
fn parse_lone_carriage_return_is_blank() {
    assert_eq!(parse("# a\r\n\r\n# b\r\ny").unwrap(), obj([("a", s("")), ("b", s("y"))]));
}

#[test]
fn parse_lines_accepts_owned_strings() {
    let lines = vec!["# a".to_string(), "x".to_string()];
    assert_eq!(parse_lines(lines).unwrap(), obj([("a", s("x"))]));
}

#[test]
fn parse_lines_matches_parse() {
    let input = "# a\n- x\n- y\n# b\n```\nz\n```";
    assert_eq!(parse_lines(input.lines()).unwrap(), parse(input).unwrap());
}

// ============================================================================
// Depth violations
// ============================================================================

#[test]
fn error_header_too_deep() {
    assert_eq!(structure_error("# a\n#### b"), (2, "#### b".to_string()));
}

#[test]
fn error_first_header_not_top_level() {
    assert_eq!(structure_error("## x"), (1, "## x".to_string()));
}

#[test]
fn error_reports_raw_line() {
    assert_eq!(structure_error("# a\n\n   ### b  "), (3, "   ### b  ".to_string()));
}

#[test]
fn error_header_under_scalar() {
    assert_eq!(structure_error("# a\nvalue\n## b"), (3, "## b".to_string()));
}

#[test]
fn error_list_under_scalar() {
    assert_eq!(structure_error("# a\nvalue\n- b"), (3, "- b".to_string()));
}

#[test]
fn error_text_before_first_header() {
    assert_eq!(structure_error("intro\n# a"), (2, "# a".to_string()));
}

#[test]
fn error_list_too_deep() {
    assert_eq!(structure_error("- a\n--- b"), (2, "--- b".to_string()));
}

#[test]
fn error_nested_list_under_text_item() {
    assert_eq!(structure_error("- a\nmore\n-- b"), (3, "-- b".to_string()));
}

#[test]
fn error_double_dash_under_header() {
    assert_eq!(structure_error("## x\n-- y"), (1, "## x".to_string()));
    assert_eq!(structure_error("# x\n-- y"), (2, "-- y".to_string()));
}

#[test]
fn error_header_directly_inside_list_item() {
    assert_eq!(structure_error("# a\n- y\n### z"), (3, "### z".to_string()));
}

#[test]
fn error_stops_at_first_violation() {
    assert_eq!(structure_error("# a\n### b\n##### c"), (2, "### b".to_string()));
}

#[test]
fn error_bare_header_after_largest_index() {
    let err = parse("# 18446744073709551615\nx\n\n#\ny\n").unwrap_err();
    match &err {
        HashdownError::KeyOverflow { line, text } => {
            assert_eq!(*line, 4);
            assert_eq!(text, "#");
        }
        other => panic!("expected a key overflow error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "No automatic key left at line 4: #");
}

#[test]
fn error_nested_bare_header_after_largest_index() {
    let err = parse("# items\n## 18446744073709551615\nx\n##\ny").unwrap_err();
    assert!(matches!(err, HashdownError::KeyOverflow { line: 4, .. }));
}

#[test]
fn largest_index_key_is_accepted() {
    let value = parse("# 18446744073709551615\nx").unwrap();
    assert_eq!(value.get(u64::MAX), Some(&s("x")));
}

#[test]
fn error_message_format() {
    let err = parse("# a\n### b").unwrap_err();
    assert_eq!(err.to_string(), "Invalid node depth at line 2: ### b");
}

#[test]
fn markers_inside_literal_are_not_checked() {
    assert_eq!(parse("# a\n```\n##### deep\n```").unwrap(), obj([("a", s("##### deep"))]));
}
