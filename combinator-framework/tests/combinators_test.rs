use combinator_framework::classes::digit;
use combinator_framework::combinators::*;
use combinator_framework::primitives::{byte, epsilon, string};
use combinator_framework::{
    any, apply, phrase, seq, ParseError, Parsed, Parser, Position, State, Value,
};

fn parse_str(parser: &Parser, input: &str) -> Result<Parsed, ParseError> {
    let mut state = State::from_bytes(input);
    apply(parser, &mut state)
}

#[test]
fn test_seq_collects_children() {
    let parser = seq![b'a', b'b', b'c'];
    let result = parse_str(&parser, "abc").unwrap();
    assert_eq!(result.children().len(), 3);
    assert_eq!(result.children()[1].token(), b"b");
}

#[test]
fn test_seq_is_atomic() {
    let mut state = State::from_bytes("abx");
    let parser = seq![b'a', b'b', b'c'];
    assert!(apply(&parser, &mut state).is_err());
    // the partial match was rolled back in full
    let result = apply(&seq![b'a', b'b', b'x'], &mut state).unwrap();
    assert_eq!(result.children().len(), 3);
}

#[test]
fn test_any_picks_first_match() {
    let parser = any![string("ab"), string("abc")];
    let result = parse_str(&parser, "abc").unwrap();
    assert_eq!(result.value(), Some(&Value::Str("ab".to_string())));
}

#[test]
fn test_any_reports_furthest_failure() {
    let shallow = seq![b'a', b'x'];
    let deep = seq![b'a', b'b', b'd'];
    let parser = any![shallow, deep];
    let err = parse_str(&parser, "abc").unwrap_err();
    // the second candidate got two bytes in before failing
    assert_eq!(err.position(), Position::at(0, 2));
}

#[test]
fn test_any_keeps_earliest_on_tie() {
    let parser = any![byte(b'x'), byte(b'y')];
    let err = parse_str(&parser, "z").unwrap_err();
    assert!(err.to_string().contains("'x'"));
    assert!(!err.to_string().contains("'y'"));
}

#[test]
fn test_maybe_present_and_absent() {
    let parser = maybe(byte(b'-'));
    assert_eq!(parse_str(&parser, "-1").unwrap().token(), b"-");
    assert!(parse_str(&parser, "1").unwrap().is_empty());
}

#[test]
fn test_maybe_consumes_nothing_on_absence() {
    let mut state = State::from_bytes("1");
    apply(&maybe(byte(b'-')), &mut state).unwrap();
    assert_eq!(apply(&digit(), &mut state).unwrap().token(), b"1");
}

#[test]
fn test_many_gathers_matches() {
    let parser = many(digit(), 0);
    let result = parse_str(&parser, "123x").unwrap();
    assert_eq!(result.children().len(), 3);
    assert!(parse_str(&parser, "x").unwrap().children().is_empty());
}

#[test]
fn test_many_uppercase_stops_at_lowercase() {
    use combinator_framework::primitives::byte_range;
    let mut state = State::from_bytes("Hello world!");
    let result = apply(&many(byte_range(b'A', b'Z'), 1), &mut state).unwrap();
    assert_eq!(result.children().len(), 1);
    assert_eq!(result.children()[0].token(), b"H");
    assert_eq!(state.dump(), b"ello world!");
}

#[test]
fn test_many_enforces_minimum() {
    let parser = many(digit(), 2);
    assert_eq!(parse_str(&parser, "123").unwrap().children().len(), 3);
    let err = parse_str(&parser, "1x").unwrap_err();
    assert!(err.to_string().contains("Many"));
}

#[test]
fn test_many_stops_after_zero_width_success() {
    // a parser that consumes nothing would loop forever if repeated blindly
    let result = parse_str(&many(epsilon(), 0), "abc").unwrap();
    assert_eq!(result.children().len(), 1);
}

#[test]
fn test_many_failure_leaves_state_clean() {
    let mut state = State::from_bytes("12ab");
    apply(&many(digit(), 0), &mut state).unwrap();
    assert_eq!(apply(&byte(b'a'), &mut state).unwrap().token(), b"a");
}

#[test]
fn test_count_exact() {
    let parser = count(digit(), 3);
    assert_eq!(parse_str(&parser, "1234").unwrap().children().len(), 3);
    assert!(parse_str(&parser, "12x").is_err());
}

#[test]
fn test_count_is_atomic() {
    let mut state = State::from_bytes("12x");
    assert!(apply(&count(digit(), 3), &mut state).is_err());
    assert_eq!(apply(&digit(), &mut state).unwrap().token(), b"1");
}

#[test]
fn test_exact_requires_full_consumption() {
    let parser = exact(string("done"));
    let result = parse_str(&parser, "done").unwrap();
    assert_eq!(result.value(), Some(&Value::Str("done".to_string())));
    assert!(parse_str(&parser, "done!").is_err());
}

#[test]
fn test_exact_requires_head() {
    let mut state = State::from_bytes("xdone");
    apply(&byte(b'x'), &mut state).unwrap();
    assert!(apply(&exact(string("done")), &mut state).is_err());
}

#[test]
fn test_delim_drops_delimiters() {
    let parser = delim(digit(), b',');
    let result = parse_str(&parser, "1,2,3").unwrap();
    let tokens: Vec<&[u8]> = result.children().iter().map(|c| c.token()).collect();
    assert_eq!(tokens, vec![&b"1"[..], &b"2"[..], &b"3"[..]]);
}

#[test]
fn test_delim_leaves_trailing_delimiter() {
    let mut state = State::from_bytes("1,2,x");
    let result = apply(&delim(digit(), b','), &mut state).unwrap();
    assert_eq!(result.children().len(), 2);
    assert_eq!(apply(&byte(b','), &mut state).unwrap().token(), b",");
}

#[test]
fn test_delim_accepts_zero_matches() {
    let mut state = State::from_bytes(",1");
    let result = apply(&delim(digit(), b','), &mut state).unwrap();
    assert!(result.children().is_empty());
    // nothing was consumed on the way to the empty list
    assert_eq!(apply(&byte(b','), &mut state).unwrap().token(), b",");
}

#[test]
fn test_sep_accepts_zero_matches() {
    let mut state = State::from_bytes("x");
    let result = apply(&sep(digit(), b','), &mut state).unwrap();
    assert!(result.children().is_empty());
    assert_eq!(apply(&byte(b'x'), &mut state).unwrap().token(), b"x");
}

#[test]
fn test_sep_tolerates_whitespace() {
    let parser = sep(digit(), b',');
    let result = parse_str(&parser, "1 , 2,\n3").unwrap();
    assert_eq!(result.children().len(), 3);
}

#[test]
fn test_sep_does_not_eat_trailing_spaces() {
    let mut state = State::from_bytes("1 x");
    let result = apply(&sep(digit(), b','), &mut state).unwrap();
    assert_eq!(result.children().len(), 1);
    // the space before `x` was part of a failed delimiter attempt
    assert_eq!(apply(&byte(b' '), &mut state).unwrap().token(), b" ");
}

#[test]
fn test_phrase_allows_whitespace_between_elements() {
    let parser = phrase![b'(', digit(), b')'];
    assert!(parse_str(&parser, "( 1 )").is_ok());
    assert!(parse_str(&parser, "(1)").is_ok());
    // whitespace is tolerated, not required, and never invented
    assert!(parse_str(&parser, "( 1 ]").is_err());
}

#[test]
fn test_skip_spaces_is_infallible_at_end() {
    let mut state = State::from_bytes("   ");
    apply(&skip_spaces(), &mut state).unwrap();
    assert!(state.is_eof());
    apply(&skip_spaces(), &mut state).unwrap();
}

#[test]
fn test_until_byte_leaves_target() {
    let mut state = State::from_bytes("header:value");
    let result = apply(&until_byte(b':'), &mut state).unwrap();
    assert_eq!(result.token(), b"header");
    assert_eq!(apply(&byte(b':'), &mut state).unwrap().token(), b":");
}

#[test]
fn test_until_byte_missing_target() {
    let mut state = State::from_bytes("no colon here");
    assert!(apply(&until_byte(b':'), &mut state).is_err());
    // failure rolled the scan back to the start
    assert_eq!(apply(&byte(b'n'), &mut state).unwrap().token(), b"n");
}

#[test]
fn test_until_bytes() {
    let mut state = State::from_bytes("text before --> after");
    let result = apply(&until_bytes(b"-->"), &mut state).unwrap();
    assert_eq!(result.token(), b"text before ");
    assert_eq!(apply(&string("-->"), &mut state).unwrap().value(), Some(&Value::Str("-->".to_string())));
}

#[test]
fn test_until_with_parser_target() {
    let mut state = State::from_bytes("abc123");
    let result = apply(&until(digit()), &mut state).unwrap();
    assert_eq!(result.token(), b"abc");
    assert_eq!(apply(&digit(), &mut state).unwrap().token(), b"1");
}

#[test]
fn test_until_immediate_match_is_empty() {
    let mut state = State::from_bytes("123");
    let result = apply(&until(digit()), &mut state).unwrap();
    assert!(result.token().is_empty());
}
