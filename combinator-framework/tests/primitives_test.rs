use combinator_framework::classes::digit;
use combinator_framework::primitives::*;
use combinator_framework::{apply, ParseError, Parsed, Parser, Position, State, Value};

fn parse_str(parser: &Parser, input: &str) -> Result<Parsed, ParseError> {
    let mut state = State::from_bytes(input);
    apply(parser, &mut state)
}

#[test]
fn test_epsilon_matches_nothing() {
    let mut state = State::from_bytes("abc");
    let result = apply(&epsilon(), &mut state).unwrap();
    assert!(result.is_empty());
    assert_eq!(state.position(), Position::new());
}

#[test]
fn test_fail_always_fails() {
    assert!(parse_str(&fail(), "anything").is_err());
}

#[test]
fn test_byte_match() {
    let result = parse_str(&byte(b'h'), "hello").unwrap();
    assert_eq!(result.token(), b"h");
}

#[test]
fn test_byte_mismatch_names_expected() {
    let err = parse_str(&byte(b'h'), "world").unwrap_err();
    assert!(err.to_string().contains("'h'"));
    assert_eq!(err.position(), Position::new());
}

#[test]
fn test_byte_mismatch_consumes_nothing() {
    let mut state = State::from_bytes("world");
    assert!(apply(&byte(b'h'), &mut state).is_err());
    let result = apply(&byte(b'w'), &mut state).unwrap();
    assert_eq!(result.token(), b"w");
}

#[test]
fn test_any_byte() {
    let mut state = State::from_bytes("xy");
    assert_eq!(apply(&any_byte(), &mut state).unwrap().token(), b"x");
    assert_eq!(apply(&any_byte(), &mut state).unwrap().token(), b"y");
    assert!(apply(&any_byte(), &mut state).unwrap_err().is_end_of_input());
}

#[test]
fn test_not_byte() {
    assert_eq!(parse_str(&not_byte(b'x'), "y").unwrap().token(), b"y");
    assert!(parse_str(&not_byte(b'x'), "x").is_err());
}

#[test]
fn test_byte_in() {
    let parser = byte_in(b"+-*/");
    assert_eq!(parse_str(&parser, "-").unwrap().token(), b"-");
    let err = parse_str(&parser, "%").unwrap_err();
    assert!(err.to_string().contains("'+'"));
}

#[test]
fn test_byte_range() {
    let parser = byte_range(b'a', b'f');
    assert_eq!(parse_str(&parser, "d").unwrap().token(), b"d");
    assert!(parse_str(&parser, "g").is_err());
    assert!(parse_str(&parser, "A").is_err());
}

#[test]
fn test_byte_range_degenerate() {
    let parser = byte_range(b'x', b'x');
    assert_eq!(parse_str(&parser, "x").unwrap().token(), b"x");
}

#[test]
#[should_panic(expected = "byte range")]
fn test_byte_range_inverted_panics() {
    let _ = byte_range(b'z', b'a');
}

#[test]
fn test_bytes_all_or_nothing() {
    let parser = bytes(b"hello");
    assert_eq!(parse_str(&parser, "hello world").unwrap().token(), b"hello");

    let mut state = State::from_bytes("help");
    assert!(apply(&parser, &mut state).is_err());
    // nothing consumed by the failed match
    assert_eq!(apply(&bytes(b"help"), &mut state).unwrap().token(), b"help");
}

#[test]
fn test_string_produces_value() {
    let result = parse_str(&string("null"), "null,").unwrap();
    assert_eq!(result.value(), Some(&Value::Str("null".to_string())));
}

#[test]
fn test_empty_string_matches_without_consuming() {
    let mut state = State::from_bytes("abc");
    let result = apply(&string(""), &mut state).unwrap();
    assert_eq!(result.value(), Some(&Value::Str(String::new())));
    assert_eq!(state.position(), Position::new());
    assert_eq!(apply(&byte(b'a'), &mut state).unwrap().token(), b"a");
}

#[test]
fn test_rune_multibyte() {
    let result = parse_str(&rune('é'), "été").unwrap();
    assert_eq!(result.value(), Some(&Value::Char('é')));
}

#[test]
fn test_rune_advances_exact_width() {
    let mut state = State::from_bytes("あい");
    assert_eq!(
        apply(&any_rune(), &mut state).unwrap().value(),
        Some(&Value::Char('あ'))
    );
    assert_eq!(
        apply(&any_rune(), &mut state).unwrap().value(),
        Some(&Value::Char('い'))
    );
    assert!(apply(&any_rune(), &mut state).is_err());
}

#[test]
fn test_invalid_byte_at_end_is_a_decode_error() {
    // a lone 0xff can never start a rune; running out of widening room
    // must not disguise that as end of input
    let mut state = State::from_bytes(vec![0xff]);
    let err = apply(&any_rune(), &mut state).unwrap_err();
    assert!(!err.is_end_of_input());
    assert!(err.to_string().contains("decode"));
}

#[test]
fn test_invalid_byte_mid_stream_is_a_decode_error() {
    let mut state = State::from_bytes(vec![0xff, b'a', b'b', b'c', b'd']);
    let err = apply(&any_rune(), &mut state).unwrap_err();
    assert!(!err.is_end_of_input());
    // the failed attempt consumed nothing
    assert_eq!(apply(&any_byte(), &mut state).unwrap().token(), &[0xff]);
}

#[test]
fn test_rune_on_empty_input_is_end_of_input() {
    let mut state = State::from_bytes("");
    assert!(apply(&any_rune(), &mut state).unwrap_err().is_end_of_input());
}

#[test]
fn test_rune_in() {
    let parser = rune_in("αβγ");
    assert_eq!(parse_str(&parser, "β").unwrap().value(), Some(&Value::Char('β')));
    assert!(parse_str(&parser, "δ").is_err());
}

#[test]
fn test_rune_range() {
    let parser = rune_range('a', 'z');
    assert_eq!(parse_str(&parser, "q").unwrap().value(), Some(&Value::Char('q')));
    assert!(parse_str(&parser, "Q").is_err());
}

#[test]
fn test_filter_names_the_predicate() {
    let parser = filter(|c| c == b'@', "at sign");
    assert_eq!(parse_str(&parser, "@").unwrap().token(), b"@");
    let err = parse_str(&parser, "#").unwrap_err();
    assert!(err.to_string().contains("at sign"));
}

#[test]
fn test_rune_filter() {
    let parser = rune_filter(char::is_alphabetic, "alphabetic");
    assert_eq!(parse_str(&parser, "ß").unwrap().value(), Some(&Value::Char('ß')));
    assert!(parse_str(&parser, "1").is_err());
}

#[test]
fn test_head_only_at_start() {
    let mut state = State::from_bytes("ab");
    assert!(apply(&head(), &mut state).is_ok());
    apply(&any_byte(), &mut state).unwrap();
    assert!(apply(&head(), &mut state).is_err());
}

#[test]
fn test_end_only_at_exhaustion() {
    let mut state = State::from_bytes("a");
    assert!(apply(&end(), &mut state).is_err());
    apply(&any_byte(), &mut state).unwrap();
    assert!(apply(&end(), &mut state).is_ok());
}

#[test]
fn test_eol() {
    let mut state = State::from_bytes("\nx");
    assert_eq!(apply(&eol(), &mut state).unwrap().token(), b"\n");
    assert!(apply(&eol(), &mut state).is_err());
    apply(&any_byte(), &mut state).unwrap();
    // end of input counts as an end of line
    assert!(apply(&eol(), &mut state).unwrap().is_empty());
}

#[test]
fn test_line_excludes_newline() {
    let mut state = State::from_bytes("first\nsecond");
    assert_eq!(apply(&line(), &mut state).unwrap().token(), b"first");
    assert_eq!(apply(&line(), &mut state).unwrap().token(), b"second");
}

#[test]
fn test_line_tracks_position() {
    let mut state = State::from_bytes("ab\ncd");
    apply(&line(), &mut state).unwrap();
    assert_eq!(state.position(), Position::at(1, 0));
}

#[test]
fn test_single_byte_leaves_the_rest() {
    let mut state = State::from_bytes("Hello world!");
    assert_eq!(apply(&byte(b'H'), &mut state).unwrap().token(), b"H");
    assert_eq!(state.dump(), b"ello world!");
}

#[test]
fn test_empty_input_anchors_and_matchers() {
    let mut state = State::from_bytes("");
    assert!(apply(&head(), &mut state).is_ok());
    assert!(apply(&end(), &mut state).is_ok());
    assert!(apply(&any_byte(), &mut state).unwrap_err().is_end_of_input());
}

#[test]
fn test_digit_class_roundtrip() {
    assert_eq!(parse_str(&digit(), "7").unwrap().token(), b"7");
    assert!(parse_str(&digit(), "x").is_err());
}
